//! # Paginator
//!
//! [`Paginator`](crate::paginate::Paginator) drives a [`PageSource`] from the first page to the
//! last one, threading the continuation cursor of every response into the next request.
//!
//! ```rust,no_run
//! # use aws_config::BehaviorVersion;
//! use route53_catalog::{catalog::HostedZones, error::Error, paginate::Paginator, Client};
//!
//! # async fn wrapper() -> Result<(), Error> {
//! # let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
//! let client = Client::new(&config);
//!
//! // Collect every hosted zone of the account.
//! let zones = Paginator::new(HostedZones::new(client))
//!     .collect_all()
//!     .await?;
//!
//! for zone in zones {
//!     println!("{zone}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Page by page
//!
//! A paginator can also be turned into a [tokio stream](https://docs.rs/tokio-stream/0.1.14/tokio_stream/index.html)
//! emitting the items of each page as soon as the page arrives.
//!
//! ```rust,no_run
//! # use aws_config::BehaviorVersion;
//! use route53_catalog::{catalog::ResourceRecordSets, paginate::Paginator, Client};
//! use tokio_stream::StreamExt;
//!
//! # async fn wrapper() {
//! # let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
//! # let client = Client::new(&config);
//! let source = ResourceRecordSets::new(client, "Z0123456789ABC");
//! let mut pages = Paginator::new(source).into_stream();
//!
//! while let Some(page) = pages.next().await {
//!     match page {
//!         Ok(records) => println!("{} record sets", records.len()),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! }
//! # }
//! ```
//!
//! ## Any async function as a source
//!
//! ```rust
//! use route53_catalog::{paginate::{self, Paginator}, types::Page};
//!
//! # async fn wrapper() {
//! let source = paginate::from_fn(|cursor: Option<u32>| async move {
//!     Ok(match cursor {
//!         None => Page::more(vec!["a", "b"], Some(1)),
//!         Some(_) => Page::last(vec!["c"]),
//!     })
//! });
//!
//! let items = Paginator::new(source).collect_all().await.unwrap();
//! assert_eq!(items, vec!["a", "b", "c"]);
//! # }
//! ```

mod paginator;
mod stream;

use super::{error::Error, types::Page};

use async_trait::async_trait;
use std::{fmt, future::Future, marker::PhantomData};

pub use paginator::Paginator;
pub use stream::PageStream;

/// A remote listing operation returning one page per call.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Send;
    type Cursor: Clone + fmt::Debug + Send + Sync;

    /// Fetch the page starting at `cursor`, or the first page when `cursor` is `None`.
    async fn fetch_page(
        &self,
        cursor: Option<Self::Cursor>,
    ) -> Result<Page<Self::Item, Self::Cursor>, Error>;
}

/// [`PageSource`] backed by an async function.
pub struct FnSource<F, T, C> {
    fetch: F,
    _page: PhantomData<fn() -> (T, C)>,
}

impl<F, T, C> fmt::Debug for FnSource<F, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}

/// Create a [`PageSource`] from an async function taking the cursor of the page to fetch.
pub fn from_fn<F, Fut, T, C>(fetch: F) -> FnSource<F, T, C>
where
    F: Fn(Option<C>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<T, C>, Error>> + Send + 'static,
    T: Send,
    C: Clone + fmt::Debug + Send + Sync,
{
    FnSource {
        fetch,
        _page: PhantomData,
    }
}

#[async_trait]
impl<F, Fut, T, C> PageSource for FnSource<F, T, C>
where
    F: Fn(Option<C>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<T, C>, Error>> + Send + 'static,
    T: Send,
    C: Clone + fmt::Debug + Send + Sync,
{
    type Item = T;
    type Cursor = C;

    async fn fetch_page(&self, cursor: Option<C>) -> Result<Page<T, C>, Error> {
        (self.fetch)(cursor).await
    }
}
