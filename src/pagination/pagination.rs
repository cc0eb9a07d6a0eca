use anyhow::anyhow;
use serde::Serialize;

use crate::errors::ParamError;
use crate::params::RequestParams;

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

// page size is read from `pagesize` first, `page_size` is the older spelling
const PAGE_KEY: &str = "p";
const PAGE_SIZE_KEYS: [&str; 2] = ["pagesize", "page_size"];

/// Page size policy for a paged endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOption {
    default_page_size: i64,
    max_page_size: i64,
}

impl PageOption {
    /// A zero for either field falls back to [`DEFAULT_PAGE_SIZE`] / [`MAX_PAGE_SIZE`].
    ///
    /// # Panics
    /// A negative default or a maximum below the default is a bug in the caller.
    #[must_use]
    pub const fn new(default_page_size: i64, max_page_size: i64) -> Self {
        let default_page_size = if default_page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            default_page_size
        };
        let max_page_size = if max_page_size == 0 {
            MAX_PAGE_SIZE
        } else {
            max_page_size
        };
        assert!(
            default_page_size > 0 && max_page_size >= default_page_size,
            "invalid page option"
        );
        Self {
            default_page_size,
            max_page_size,
        }
    }

    #[must_use]
    pub const fn default_page_size(&self) -> i64 {
        self.default_page_size
    }

    #[must_use]
    pub const fn max_page_size(&self) -> i64 {
        self.max_page_size
    }
}

impl Default for PageOption {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }
}

/// A validated `(page, page_size)` pair, pages start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
}

impl PageRequest {
    /// Resolve `p` and the page size from `params` under `option`
    /// (the built-in policy when `None`).
    ///
    /// # Errors
    /// `InvalidPageRequest` if either value doesn't parse or is out of bounds.
    pub fn from_params(
        params: &RequestParams,
        option: Option<&PageOption>,
    ) -> Result<Self, ParamError> {
        let option = option.copied().unwrap_or_default();

        let page = params
            .i64_or(PAGE_KEY, 1)
            .map_err(|e| ParamError::InvalidPageRequest(e.into()))?;
        if page <= 0 {
            return Err(ParamError::InvalidPageRequest(anyhow!(
                "page must be at least 1, got {page}"
            )));
        }

        let page_size = match PAGE_SIZE_KEYS.into_iter().find(|key| params.has(key)) {
            Some(key) => params
                .i64(key)
                .map_err(|e| ParamError::InvalidPageRequest(e.into()))?,
            None => option.default_page_size,
        };
        if page_size <= 0 || page_size > option.max_page_size {
            return Err(ParamError::InvalidPageRequest(anyhow!(
                "page size must be between 1 and {}, got {page_size}",
                option.max_page_size
            )));
        }

        Ok(Self { page, page_size })
    }

    #[must_use]
    pub const fn page(&self) -> i64 {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> i64 {
        self.page_size
    }

    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.page_size
    }

    #[must_use]
    pub const fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    #[must_use]
    pub const fn from_total(total_items: i64, request: &PageRequest) -> Self {
        let page_size = request.page_size();
        let total_pages = if total_items == 0 {
            0
        } else {
            (total_items + page_size - 1) / page_size
        };

        Self {
            page: request.page(),
            page_size,
            total_items,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}
