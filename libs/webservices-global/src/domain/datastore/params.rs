use serde::{Deserialize, Serialize};

/// Cursor query handed to a data-access layer: `(cursor, limit, sort_by, order)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCursorPaginationParams {
    cursor: Option<String>,
    limit: i32,
    sort_by: Option<String>,
    order: Option<String>,
}

impl QueryCursorPaginationParams {
    pub fn new(
        cursor: Option<String>,
        limit: i32,
        sort_by: Option<String>,
        order: Option<String>,
    ) -> Self {
        Self {
            cursor,
            limit,
            sort_by,
            order,
        }
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

/// Page query handed to a data-access layer: `(page, limit, sort_by, order)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPagePaginationParams {
    page: i32,
    limit: i32,
    sort_by: Option<String>,
    order: Option<String>,
}

impl QueryPagePaginationParams {
    pub fn new(page: i32, limit: i32, sort_by: Option<String>, order: Option<String>) -> Self {
        Self {
            page,
            limit,
            sort_by,
            order,
        }
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
