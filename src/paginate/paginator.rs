use super::{stream::PageStream, Error, Page, PageSource};

use std::num::NonZeroUsize;
use tracing::{debug, error};

/// Cursor bookkeeping of one pass over a [`PageSource`].
///
/// The walk owns its cursor exclusively. It is created per pass and never reused.
pub(super) struct PageWalk<'a, S: PageSource> {
    source: &'a S,
    max_pages: Option<NonZeroUsize>,
    cursor: Option<S::Cursor>,
    fetched: usize,
    finished: bool,
}

impl<'a, S: PageSource> PageWalk<'a, S> {
    pub(super) fn new(source: &'a S, max_pages: Option<NonZeroUsize>) -> Self {
        Self {
            source,
            max_pages,
            cursor: None,
            fetched: 0,
            finished: false,
        }
    }

    /// Fetch the next page. Returns `None` once the last page or an error has been returned.
    pub(super) async fn next_page(&mut self) -> Option<Result<Vec<S::Item>, Error>> {
        if self.finished {
            return None;
        }

        let result = self.fetch().await;
        if result.is_err() {
            self.finished = true;
        }

        Some(result)
    }

    async fn fetch(&mut self) -> Result<Vec<S::Item>, Error> {
        if let Some(max_pages) = self.max_pages {
            if self.fetched >= max_pages.get() {
                return Err(Error::PageLimitExceeded(max_pages.get()));
            }
        }

        let Page {
            items,
            truncated,
            next_cursor,
        } = self.source.fetch_page(self.cursor.take()).await?;
        self.fetched += 1;

        debug!(
            "Fetched page {} with {} items (truncated: {truncated}).",
            self.fetched,
            items.len(),
        );

        if !truncated {
            self.finished = true;
            return Ok(items);
        }

        match next_cursor {
            Some(cursor) => {
                self.cursor = Some(cursor);
                Ok(items)
            }
            None => {
                error!(
                    "Page {} is truncated without a continuation cursor. Stop listing.",
                    self.fetched,
                );
                Err(Error::MissingCursor { page: self.fetched })
            }
        }
    }
}

/// Exhaustive listing over a [`PageSource`].
#[derive(Debug, Clone)]
pub struct Paginator<S: PageSource> {
    source: S,
    max_pages: Option<NonZeroUsize>,
    buffer: usize,
}

impl<S: PageSource> Paginator<S> {
    /// Create a new `Paginator` without page limit.
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_pages: None,
            buffer: 16,
        }
    }

    /// Set the maximum number of pages a single listing may fetch.
    ///
    /// Setting a limit is optional. If you omit calling this method, the listing goes on
    /// until the source reports its last page. Fetching beyond the limit fails with
    /// [`Error::PageLimitExceeded`] without calling the source.
    pub fn max_pages(self, max_pages: NonZeroUsize) -> Self {
        Self {
            max_pages: Some(max_pages),
            ..self
        }
    }

    /// Set the buffer for the channel behind [`into_stream`](Paginator::into_stream).
    ///
    /// Up to `buffer` pages are fetched ahead of the consumer.
    ///
    /// This method will panic when given zero as buffer size.
    ///
    /// Setting buffer size is optional. If you omit calling this method,
    /// `16` is used as default value.
    pub fn buffer(self, buffer: usize) -> Self {
        if buffer == 0 {
            panic!("buffer must be positive.");
        }

        Self { buffer, ..self }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch every page and return all items in response order.
    ///
    /// The first failing page aborts the listing; items of earlier pages are discarded.
    pub async fn collect_all(&self) -> Result<Vec<S::Item>, Error> {
        let mut walk = PageWalk::new(&self.source, self.max_pages);
        let mut items: Vec<S::Item> = vec![];

        while let Some(page) = walk.next_page().await {
            items.append(&mut page?);
        }

        Ok(items)
    }

    /// Consume the paginator and fetch pages on a spawned task, emitting them as a stream.
    pub fn into_stream(self) -> PageStream<S::Item>
    where
        S: 'static,
        S::Item: 'static,
        S::Cursor: 'static,
    {
        PageStream::spawn(self.source, self.max_pages, self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::super::from_fn;
    use super::*;
    use std::sync::{Arc, Mutex};

    type Script = Vec<Result<Page<&'static str, String>, Error>>;

    /// Source answering with scripted pages and recording every cursor it receives.
    #[derive(Clone)]
    struct TestSource {
        outputs: Arc<Mutex<dyn Iterator<Item = Result<Page<&'static str, String>, Error>> + Send>>,
        cursors: Arc<Mutex<Vec<Option<String>>>>,
    }

    impl TestSource {
        fn new(outputs: Script) -> Self {
            Self {
                outputs: Arc::new(Mutex::new(outputs.into_iter())),
                cursors: Arc::new(Mutex::new(vec![])),
            }
        }

        fn cursors(&self) -> Vec<Option<String>> {
            self.cursors.lock().unwrap().clone()
        }

        fn calls(&self) -> usize {
            self.cursors.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl PageSource for TestSource {
        type Item = &'static str;
        type Cursor = String;

        async fn fetch_page(
            &self,
            cursor: Option<String>,
        ) -> Result<Page<&'static str, String>, Error> {
            self.cursors.lock().unwrap().push(cursor);
            let mut outputs = self.outputs.lock().unwrap();
            outputs.next().expect("no more pages scripted")
        }
    }

    fn pages(max_pages: usize) -> NonZeroUsize {
        NonZeroUsize::new(max_pages).unwrap()
    }

    fn sdk_error(message: &str) -> Error {
        Error::SdkError(message.into())
    }

    #[tokio::test]
    async fn it_accumulates_all_pages_in_order() {
        let source = TestSource::new(vec![
            Ok(Page::more(vec!["a", "b"], Some("c1".into()))),
            Ok(Page::last(vec!["c"])),
        ]);
        let paginator = Paginator::new(source.clone());

        let items = paginator.collect_all().await.unwrap();

        assert_eq!(items, vec!["a", "b", "c"]);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn it_stops_after_a_single_final_page() {
        let source = TestSource::new(vec![Ok(Page::last(vec!["x", "y"]))]);

        let items = Paginator::new(source.clone()).collect_all().await.unwrap();

        assert_eq!(items, vec!["x", "y"]);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn it_threads_each_cursor_unmodified() {
        let source = TestSource::new(vec![
            Ok(Page::more(vec!["a"], Some("opaque/1==".into()))),
            Ok(Page::more(vec!["b"], Some("opaque/2==".into()))),
            Ok(Page::last(vec!["c"])),
        ]);

        Paginator::new(source.clone()).collect_all().await.unwrap();

        assert_eq!(
            source.cursors(),
            vec![None, Some("opaque/1==".into()), Some("opaque/2==".into())]
        );
    }

    #[tokio::test]
    async fn it_returns_the_first_error_and_stops_calling() {
        let source = TestSource::new(vec![
            Ok(Page::more(vec!["a"], Some("c1".into()))),
            Err(sdk_error("throttled")),
            Ok(Page::last(vec!["never"])),
        ]);

        let result = Paginator::new(source.clone()).collect_all().await;

        match result {
            Err(Error::SdkError(err)) => assert_eq!(err.to_string(), "throttled"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn it_returns_empty_for_an_empty_catalog() {
        let source = TestSource::new(vec![Ok(Page::last(vec![]))]);

        let items = Paginator::new(source.clone()).collect_all().await.unwrap();

        assert!(items.is_empty());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn it_fails_on_truncated_page_without_cursor() {
        let source = TestSource::new(vec![
            Ok(Page::more(vec!["a"], None)),
            Ok(Page::last(vec!["never"])),
        ]);

        let result = Paginator::new(source.clone()).collect_all().await;

        assert!(matches!(result, Err(Error::MissingCursor { page: 1 })));
        assert!(result.unwrap_err().is_protocol_error());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn it_stops_at_the_page_limit() {
        let source = TestSource::new(vec![
            Ok(Page::more(vec!["a"], Some("c1".into()))),
            Ok(Page::more(vec!["b"], Some("c2".into()))),
            Ok(Page::last(vec!["c"])),
        ]);

        let result = Paginator::new(source.clone()).max_pages(pages(2)).collect_all().await;

        assert!(matches!(result, Err(Error::PageLimitExceeded(2))));
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn it_allows_a_listing_that_ends_exactly_at_the_limit() {
        let source = TestSource::new(vec![
            Ok(Page::more(vec!["a"], Some("c1".into()))),
            Ok(Page::last(vec!["b"])),
        ]);

        let items = Paginator::new(source).max_pages(pages(2)).collect_all().await.unwrap();

        assert_eq!(items, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn it_starts_over_on_every_collect() {
        let source = from_fn(|cursor: Option<u8>| async move {
            Ok(match cursor {
                None => Page::more(vec![1], Some(1)),
                Some(1) => Page::more(vec![2], Some(2)),
                Some(_) => Page::last(vec![3]),
            })
        });
        let paginator = Paginator::new(source);

        assert_eq!(paginator.collect_all().await.unwrap(), vec![1, 2, 3]);
        assert_eq!(paginator.collect_all().await.unwrap(), vec![1, 2, 3]);
    }
}
