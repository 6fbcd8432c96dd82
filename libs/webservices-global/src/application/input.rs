//! Raw paging parameters as supplied by the caller.
//!
//! Values are carried as-is: no range checks and no parsing of `order`.
//! Validation belongs to whoever executes the query.

use serde::{Deserialize, Serialize};

/// Cursor-based paging request.
///
/// `cursor` is an opaque token previously issued for the same
/// `sort_by`/`order` combination; callers must not interpret it.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPaginationInput {
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub limit: i32,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

impl CursorPaginationInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn limit(&self) -> i32 {
        self.limit
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn order(&self) -> Option<&str> {
        self.order.as_deref()
    }
}

/// Page-number based paging request (offset paging).
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePaginationInput {
    #[serde(default)]
    pub page: i32,
    #[serde(default)]
    pub limit: i32,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

impl PagePaginationInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: i32) -> Self {
        self.page = page;
        self
    }

    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn page(&self) -> i32 {
        self.page
    }

    pub fn limit(&self) -> i32 {
        self.limit
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn order(&self) -> Option<&str> {
        self.order.as_deref()
    }
}
