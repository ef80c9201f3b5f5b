//! Streaming pagination driver.

use futures::stream::{self, Stream, StreamExt};

use crate::agent::random_user_agent;
use crate::client::{FetchError, PageClient};
use crate::source::PageSource;

/// One fetched page's worth of records.
#[derive(Debug, Clone)]
pub struct PageBatch<R> {
    /// 1-based index of the page within the run.
    pub page: u32,
    /// Records in the page's original order.
    pub records: Vec<R>,
}

impl<R> PageBatch<R> {
    /// Returns the number of records in the batch.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the batch holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Per-run pagination state. Owned by the stream, never shared.
#[derive(Debug)]
struct CollectionRun {
    cursor: u64,
    pages: u32,
    user_agent: &'static str,
}

/// Creates a lazy stream of page batches for the given source.
///
/// Strictly sequential: at most one page is in flight, and the next page is
/// fetched only when the consumer polls past the records already produced.
/// Dropping the stream performs no further fetches.
///
/// The stream ends - without yielding an error - on any terminal condition:
/// a non-success status, a connection failure, an undecodable body, an empty
/// page, or a malformed record. Each is logged distinctly; already-yielded
/// batches are unaffected, so bulk consumers keep partial results.
///
/// The identity header is regenerated before every fetch except the first.
pub fn page_stream<'a, S>(
    client: &'a PageClient,
    source: &'a S,
) -> impl Stream<Item = PageBatch<S::Record>> + 'a
where
    S: PageSource,
{
    let run = CollectionRun {
        cursor: source.first_cursor(),
        pages: 0,
        user_agent: random_user_agent(),
    };

    stream::unfold(run, move |mut run| async move {
        if run.pages > 0 {
            run.user_agent = random_user_agent();
        }

        let request = source.request(run.cursor, run.user_agent);
        let body = match client.fetch_page(&request).await {
            Ok(Some(body)) => body,
            Ok(None) => {
                tracing::warn!(
                    source = source.name(),
                    pages = run.pages,
                    "response with error status; ending run"
                );
                return None;
            }
            Err(FetchError::Decode(err)) => {
                tracing::warn!(
                    source = source.name(),
                    pages = run.pages,
                    %err,
                    "undecodable page body; ending run"
                );
                return None;
            }
            Err(err) => {
                tracing::warn!(
                    source = source.name(),
                    pages = run.pages,
                    %err,
                    "request failed; ending run"
                );
                return None;
            }
        };

        match source.transform(body) {
            Ok(records) if records.is_empty() => {
                tracing::info!(
                    source = source.name(),
                    pages = run.pages,
                    "empty page; end of data"
                );
                None
            }
            Ok(records) => {
                run.pages += 1;
                run.cursor = source.advance(run.cursor);
                tracing::info!(
                    source = source.name(),
                    page = run.pages,
                    records = records.len(),
                    "collected page"
                );
                Some((
                    PageBatch {
                        page: run.pages,
                        records,
                    },
                    run,
                ))
            }
            Err(err) => {
                tracing::warn!(
                    source = source.name(),
                    pages = run.pages,
                    %err,
                    "malformed record; treating as end of data"
                );
                None
            }
        }
    })
}

/// Flattens a page batch stream into individual records.
///
/// Records are yielded in page order, original order within each page. The
/// underlying page stream is polled only when the current page's records are
/// exhausted, so an early-exiting consumer triggers no extra fetches.
pub fn flatten_records<R>(
    batches: impl Stream<Item = PageBatch<R>>,
) -> impl Stream<Item = R> {
    batches.flat_map(|batch| stream::iter(batch.records))
}
