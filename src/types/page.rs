/// One response of a paginated listing operation.
///
/// `next_cursor` is opaque to the paginator. It is taken from the response
/// as-is and handed to the very next request.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T, C> {
    pub items: Vec<T>,
    pub truncated: bool,
    pub next_cursor: Option<C>,
}

impl<T, C> Page<T, C> {
    /// Create the final page of a listing.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            truncated: false,
            next_cursor: None,
        }
    }

    /// Create a page followed by more pages starting at `next_cursor`.
    pub fn more(items: Vec<T>, next_cursor: Option<C>) -> Self {
        Self {
            items,
            truncated: true,
            next_cursor,
        }
    }
}
