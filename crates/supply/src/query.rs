//! Paged cell queries against an external indexer.
//!
//! The indexer itself is out of scope: callers provide a [`PagedQuery`]
//! implementation and [`collect_pages`] drives it.

use core::future::Future;
use rc_lock_codec::{DecodeError, EncodeError};
use rc_lock_types::{Script, ScriptType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Indexer search criteria.
///
/// Indexers match `script.args` as a prefix, so a shortened args value lists
/// every cell whose args start with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchKey {
    /// The script to match.
    pub script: Script,
    /// Which of the cell's scripts to match against.
    pub script_type: ScriptType,
}

/// An opaque position returned by the indexer, marking where the next page
/// begins.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor(#[serde(with = "rc_lock_types::serde::bytes")] pub Vec<u8>);

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Results in indexer order. An empty page ends the query.
    pub objects: Vec<T>,
    /// Cursor to pass to the next request.
    pub last_cursor: Cursor,
}

/// Access to an indexer that returns results one page at a time.
pub trait PagedQuery {
    /// The kind of object returned in each page.
    type Item;
    /// An error type describing any failure of a single page request.
    type Error: core::fmt::Debug + core::fmt::Display;
    /// The future type returned from the `get_cells` method.
    ///
    /// The future may not borrow from the arguments of `get_cells`. In-memory
    /// implementations can use `std::future::Ready`, network clients will
    /// likely need to box their request future.
    type Future: Future<Output = Result<Page<Self::Item>, Self::Error>>;

    /// Request the page that follows `after_cursor`, or the first page when
    /// no cursor is given.
    fn get_cells(&self, search_key: &SearchKey, after_cursor: Option<&Cursor>) -> Self::Future;
}

/// Listing supply info failed. No partial list is returned.
#[derive(Debug, Error)]
pub enum QueryError<E> {
    /// A page request failed.
    #[error("paged query failed: {0}")]
    Query(E),
    /// The search key could not be encoded.
    #[error("failed to encode search key: {0}")]
    SearchKey(#[source] EncodeError),
    /// A returned cell is not a valid supply info cell.
    #[error("failed to decode supply info cell at index {index}: {source}")]
    Decode {
        /// Position of the cell in the collected list.
        index: usize,
        /// Why decoding failed.
        #[source]
        source: DecodeError,
    },
}

/// Collect every object matching `search_key`, in the order the indexer
/// returns them.
///
/// Requests are issued one at a time, each with the cursor of the previous
/// response, until an empty page is returned. Termination relies on the
/// indexer eventually returning an empty page. The first failed request
/// aborts the whole collection; nothing is retried.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub async fn collect_pages<Q>(
    query: &Q,
    search_key: &SearchKey,
) -> Result<Vec<Q::Item>, QueryError<Q::Error>>
where
    Q: PagedQuery,
{
    let mut objects = Vec::new();
    let mut cursor: Option<Cursor> = None;
    loop {
        let page = match query.get_cells(search_key, cursor.as_ref()).await {
            Ok(page) => page,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("page request failed after {} objects: {}", objects.len(), err);
                return Err(QueryError::Query(err));
            }
        };
        if page.objects.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!("collected {} objects", objects.len());
            return Ok(objects);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!("received page of {} objects", page.objects.len());
        objects.extend(page.objects);
        cursor = Some(page.last_cursor);
    }
}
