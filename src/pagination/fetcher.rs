//! Fetch-all driver
//!
//! Repeatedly calls a single-page capability until the collected items reach
//! the total the server reports.

use super::envelope::Envelope;
use super::types::{validate_page_size, Page, PageRequest, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{debug, warn};

/// Walks a paged collection from a starting offset to its end
///
/// Requests are strictly sequential: each offset comes from the previous
/// response. Dropping the returned future stops the walk before the next
/// request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagedFetcher {
    page_size: u32,
}

impl Default for PagedFetcher {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagedFetcher {
    /// Create a fetcher with a fixed page size
    pub fn new(page_size: u32) -> Result<Self> {
        validate_page_size(page_size)?;
        Ok(Self { page_size })
    }

    /// Items asked for per request
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Collect the whole collection, starting at offset 0
    pub async fn fetch_all<T, F, Fut>(&self, fetch_page: F) -> Result<Page<T>>
    where
        T: DeserializeOwned,
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Envelope>>,
    {
        self.fetch_all_from(Page::default(), 0, fetch_page).await
    }

    /// Continue filling `page` from `offset`
    ///
    /// The first error ends the walk and `page` is dropped with it.
    pub async fn fetch_all_from<T, F, Fut>(
        &self,
        mut page: Page<T>,
        mut offset: u64,
        mut fetch_page: F,
    ) -> Result<Page<T>>
    where
        T: DeserializeOwned,
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Envelope>>,
    {
        let mut pages = 0_u32;

        loop {
            let request = PageRequest {
                offset,
                count: self.page_size,
            };
            let envelope = fetch_page(request).await?;
            pages += 1;

            let served_offset = envelope.offset;
            let total = envelope.total;
            let items: Vec<T> = envelope.into_items()?;
            let received = items.len();

            let collected = page.len() as u64 + received as u64;
            if total < collected {
                warn!(total, collected, "server total dropped below collected items");
            }

            page.append(items);
            page.set_total(total);

            debug!(
                offset = served_offset,
                received,
                total,
                collected = page.len(),
                "fetched page"
            );

            if page.is_complete() {
                debug!(pages, items = page.len(), "collection complete");
                return Ok(page);
            }

            // Same request again would return the same empty page.
            if received == 0 {
                return Err(Error::NoProgress {
                    offset: served_offset,
                    total,
                });
            }

            offset = served_offset.checked_add(received as u64).ok_or_else(|| {
                Error::unexpected_format(format!(
                    "offset {served_offset} + {received} overflows"
                ))
            })?;
        }
    }
}
