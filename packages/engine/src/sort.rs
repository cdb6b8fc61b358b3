//! Chronological merge sort.
//!
//! The algorithm only needs to split a sequence at its midpoint and walk it front to
//! back, so it never indexes into the middle of the collection. The merge step is a
//! loop rather than a recursion, which keeps stack depth at `O(log n)` for the
//! tens of thousands of articles a full dataset holds.

use crate::article::Article;
use crate::store::ArticleStore;

/// What [`ArticleStore::sort`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// The store was already in order; nothing moved.
    AlreadySorted,
    /// The store was reordered.
    Sorted {
        /// Number of articles that were ordered.
        count: usize,
    },
}

impl ArticleStore {
    /// Order the articles by ascending `(year, month, day)`.
    ///
    /// A no-op when the store is already flagged as sorted. Articles with the same
    /// date key keep their relative order.
    pub fn sort(&mut self) -> SortOutcome {
        if self.sorted {
            tracing::debug!(count = self.articles.len(), "Store already sorted");
            return SortOutcome::AlreadySorted;
        }

        let articles = std::mem::take(&mut self.articles);
        let count = articles.len();
        self.articles = merge_sort_by_key(articles, &Article::date_key);
        self.sorted = true;

        tracing::debug!(count, "Sorted articles by date");
        SortOutcome::Sorted { count }
    }
}

/// Stable merge sort of `items` by ascending `key`.
///
/// # Examples
/// ```
/// use newsdesk_engine::sort::merge_sort_by_key;
///
/// let sorted = merge_sort_by_key(vec![(2, 'a'), (1, 'b'), (2, 'c')], &|p: &(i32, char)| p.0);
/// assert_eq!(sorted, vec![(1, 'b'), (2, 'a'), (2, 'c')]);
/// ```
pub fn merge_sort_by_key<T, K, F>(items: Vec<T>, key: &F) -> Vec<T>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    if items.len() <= 1 {
        return items;
    }

    let (front, back) = split_front_back(items);
    let front = merge_sort_by_key(front, key);
    let back = merge_sort_by_key(back, key);
    merge(front, back, key)
}

/// Split a sequence into halves; the front half takes the extra element.
fn split_front_back<T>(mut items: Vec<T>) -> (Vec<T>, Vec<T>) {
    let mid = items.len().div_ceil(2);
    let back = items.split_off(mid);
    (items, back)
}

/// Merge two ordered sequences, preferring the left head on ties.
fn merge<T, K, F>(left: Vec<T>, right: Vec<T>, key: &F) -> Vec<T>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => key(l) <= key(r),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}
