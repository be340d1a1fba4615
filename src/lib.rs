//! List [Amazon Route 53](https://docs.aws.amazon.com/Route53/latest/DeveloperGuide/Welcome.html)
//! hosted zones and resource record sets, following every continuation cursor until the
//! service reports the last page.
//!
//! ## Getting Started
//!
//! A simple example is as follows. Edit your **Cargo.toml** at first.
//!
//! ```toml
//! [dependencies]
//! route53-catalog = "0.1"
//! aws-config = "1.5.16"
//! tokio = { version = "1", features = ["macros", "rt-multi-thread"] }
//! ```
//!
//! Then in code, with credentials available to the default AWS provider chain, you can print
//! every record set of every hosted zone with the following.
//!
//! ```rust,no_run
//! use aws_config::BehaviorVersion;
//! use route53_catalog::{catalog::Catalog, Client};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
//!
//!     let catalog = Catalog::new(Client::new(&config));
//!
//!     for listing in catalog.walk().await.unwrap() {
//!         print!("{listing}");
//!     }
//! }
//! ```
//!
//! ## AWS SDK Dependency
//!
//! To build [`Client`] of this crate, you must pass the reference for
//! [`SdkConfig`](aws_config::SdkConfig). Any other implementation of [`Route53Client`] can be
//! used in its place, which is how the listing logic is tested without the network.

/// Client for calling Route 53 APIs.
pub mod client;

/// Common errors.
pub mod error;

/// Data structures used by operations.
pub mod types;

/// Generic exhaustive pagination over cursor based listings.
pub mod paginate;

/// Hosted zone and record set listings, and record changes.
pub mod catalog;

/// Environment settings of the `route53-catalog` binary.
pub mod config;

pub use client::{Client, Route53Client};
