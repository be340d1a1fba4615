use super::{paginator::PageWalk, Error, PageSource};

use std::{
    num::NonZeroUsize,
    pin::Pin,
    task::{Context, Poll},
};
use tokio::sync::mpsc;
use tokio_stream::Stream;
use tracing::debug;

/// Items of a paginated listing, one element per page.
///
/// The pages are fetched by a spawned task and handed over through a bounded channel. The stream
/// ends after the last page, or right after emitting the first error.
#[derive(Debug)]
pub struct PageStream<T> {
    receiver: mpsc::Receiver<Result<Vec<T>, Error>>,
}

impl<T> PageStream<T>
where
    T: Send + 'static,
{
    pub(super) fn spawn<S>(source: S, max_pages: Option<NonZeroUsize>, buffer: usize) -> Self
    where
        S: PageSource<Item = T> + 'static,
        S::Cursor: 'static,
    {
        let (tx, rx) = mpsc::channel::<Result<Vec<T>, Error>>(buffer);

        tokio::spawn(async move {
            let mut walk = PageWalk::new(&source, max_pages);

            while let Some(page) = walk.next_page().await {
                if tx.send(page).await.is_err() {
                    debug!("Page stream dropped by the consumer. Stop listing.");
                    return;
                }
            }
        });

        Self { receiver: rx }
    }
}

impl<T> Stream for PageStream<T> {
    type Item = Result<Vec<T>, Error>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

impl<T> Drop for PageStream<T> {
    fn drop(&mut self) {
        self.receiver.close();
    }
}
