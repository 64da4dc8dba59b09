use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A 1-indexed page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Clamps `page` to at least 1 and rejects an empty page size.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidLimit`] when `limit` is 0.
    pub fn validated(self) -> Result<Self, StoreError> {
        if self.limit == 0 {
            return Err(StoreError::InvalidLimit);
        }
        Ok(Self {
            page: self.page.max(1),
            limit: self.limit,
        })
    }

    /// Index of the first item of the page.
    #[must_use]
    pub fn offset(&self) -> usize {
        let offset = u64::from(self.page.saturating_sub(1)) * u64::from(self.limit);
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        usize::try_from(self.limit).unwrap_or(usize::MAX)
    }
}

/// Page selection plus domain filter criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest<Q> {
    pub page: PageRequest,
    pub filter: Q,
}

impl<Q> ListRequest<Q> {
    pub fn new(page: PageRequest, filter: Q) -> Self {
        Self { page, filter }
    }
}

impl<Q: Default> ListRequest<Q> {
    /// Unfiltered request for `page` of size `limit`.
    #[must_use]
    pub fn page(page: u32, limit: u32) -> Self {
        Self::new(PageRequest::new(page, limit), Q::default())
    }
}

/// Counted pagination result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total_count: usize,
    pub page: u32,
    pub limit: u32,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// A page with no matches for `request`.
    #[must_use]
    pub fn empty(request: PageRequest) -> Self {
        Self {
            data: Vec::new(),
            total_count: 0,
            page: request.page,
            limit: request.limit,
            total_pages: 0,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

/// Cursor pagination result: no totals, only whether another page exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPage<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub has_next: bool,
}

impl<T> CursorPage<T> {
    #[must_use]
    pub fn empty(request: PageRequest) -> Self {
        Self {
            data: Vec::new(),
            page: request.page,
            limit: request.limit,
            has_next: false,
        }
    }
}
