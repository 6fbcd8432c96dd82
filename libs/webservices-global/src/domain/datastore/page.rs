use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub next_cursor: Option<String>,
    pub limit: u32,
}

/// One slice of a cursor-paginated listing.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Create a new page with items and page info
    pub fn new(items: Vec<T>, page_info: PageInfo) -> Self {
        Self { items, page_info }
    }

    /// Create an empty page with the given limit
    pub fn empty(limit: u32) -> Self {
        Self {
            items: Vec::new(),
            page_info: PageInfo {
                next_cursor: None,
                limit,
            },
        }
    }

    pub fn has_more(&self) -> bool {
        self.page_info.next_cursor.is_some()
    }

    /// Map items while preserving page_info (Domain->DTO mapping convenience)
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_info: self.page_info,
        }
    }
}

/// One page of a page-number paginated listing.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberedPage<T> {
    pub items: Vec<T>,
    /// 1-based page index.
    pub page: u32,
    pub limit: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> NumberedPage<T> {
    pub fn new(items: Vec<T>, page: u32, limit: u32, total_items: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total_items.div_ceil(u64::from(limit))
        };
        Self {
            items,
            page,
            limit,
            total_items,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages
    }

    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> NumberedPage<U> {
        NumberedPage {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}
