//! Pagination types
//!
//! `Page<T>` is both the result of a single list call and the accumulator a
//! fetch-all grows page by page.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Largest page the API will serve
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used by every fetch-all
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// An ordered slice of a server-side collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    items: Vec<T>,
    offset: u64,
    total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T> Page<T> {
    /// Create an empty page
    pub fn new(offset: u64, total: u64) -> Self {
        Self {
            items: Vec::new(),
            offset,
            total,
        }
    }

    /// Extend the page, keeping server order
    ///
    /// No deduplication and no check against `total`.
    pub fn append(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
    }

    /// Items in server order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Index of the first item in the full collection
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Collection size reported by the most recent response
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Overwrite the reported total
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether every reported item has been collected
    pub fn is_complete(&self) -> bool {
        self.items.len() as u64 >= self.total
    }

    /// Consume the page, keeping only the items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Parameters of a single list call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Index into the server-side collection
    pub offset: u64,
    /// Number of items asked for
    pub count: u32,
}

impl PageRequest {
    /// Create a request, rejecting counts the API would refuse
    pub fn new(offset: u64, count: u32) -> Result<Self> {
        validate_page_size(count)?;
        Ok(Self { offset, count })
    }

    /// First page of the given size
    pub fn first(count: u32) -> Result<Self> {
        Self::new(0, count)
    }
}

pub(crate) fn validate_page_size(size: u32) -> Result<()> {
    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(Error::InvalidPageSize { size });
    }
    Ok(())
}
