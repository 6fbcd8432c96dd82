//! Input → query parameter mapping.
//!
//! Both mappings are field-for-field copies; nothing is parsed, defaulted or rejected here.

use crate::application::input::{CursorPaginationInput, PagePaginationInput};
use crate::domain::datastore::params::{QueryCursorPaginationParams, QueryPagePaginationParams};

/// Conversion of a paging input into the record consumed by a data-access layer.
pub trait ToQueryParams {
    type Params;

    fn to_query_params(&self) -> Self::Params;
}

impl ToQueryParams for CursorPaginationInput {
    type Params = QueryCursorPaginationParams;

    fn to_query_params(&self) -> QueryCursorPaginationParams {
        QueryCursorPaginationParams::new(
            self.cursor.clone(),
            self.limit,
            self.sort_by.clone(),
            self.order.clone(),
        )
    }
}

impl ToQueryParams for PagePaginationInput {
    type Params = QueryPagePaginationParams;

    fn to_query_params(&self) -> QueryPagePaginationParams {
        QueryPagePaginationParams::new(
            self.page,
            self.limit,
            self.sort_by.clone(),
            self.order.clone(),
        )
    }
}

impl From<&CursorPaginationInput> for QueryCursorPaginationParams {
    fn from(input: &CursorPaginationInput) -> Self {
        input.to_query_params()
    }
}

impl From<CursorPaginationInput> for QueryCursorPaginationParams {
    fn from(input: CursorPaginationInput) -> Self {
        Self::new(input.cursor, input.limit, input.sort_by, input.order)
    }
}

impl From<&PagePaginationInput> for QueryPagePaginationParams {
    fn from(input: &PagePaginationInput) -> Self {
        input.to_query_params()
    }
}

impl From<PagePaginationInput> for QueryPagePaginationParams {
    fn from(input: PagePaginationInput) -> Self {
        Self::new(input.page, input.limit, input.sort_by, input.order)
    }
}

/// Maps [`CursorPaginationInput`] into [`QueryCursorPaginationParams`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryCursorPaginationParamsMapper;

impl QueryCursorPaginationParamsMapper {
    pub fn to_query_params(&self, input: &CursorPaginationInput) -> QueryCursorPaginationParams {
        input.to_query_params()
    }
}

/// Maps [`PagePaginationInput`] into [`QueryPagePaginationParams`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryPagePaginationParamsMapper;

impl QueryPagePaginationParamsMapper {
    pub fn to_query_params(&self, input: &PagePaginationInput) -> QueryPagePaginationParams {
        input.to_query_params()
    }
}
