//! Building blocks shared by NerdHub web services: use-case errors,
//! cursor and page pagination inputs with their query-parameter mapping,
//! and the identity/timestamp metadata embedded in every persisted entity.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;

pub use application::error::{ErrorDetails, UseCaseError, UseCaseErrorKind, UseCaseResult};
pub use application::input::{CursorPaginationInput, PagePaginationInput};
pub use application::mapper::{
    QueryCursorPaginationParamsMapper, QueryPagePaginationParamsMapper, ToQueryParams,
};
pub use config::{PaginationConfig, PaginationConfigError};
pub use domain::datastore::cursor::{CursorError, CursorV1};
pub use domain::datastore::page::{NumberedPage, Page, PageInfo};
pub use domain::datastore::params::{QueryCursorPaginationParams, QueryPagePaginationParams};
pub use domain::datastore::repo::{PaginatedRepository, SortSpec, Sortable};
pub use domain::datastore::sort::{SortKey, SortOrder};
pub use domain::entity::{CommonEntity, Entity, EntityId};
pub use infra::memory::InMemoryRepository;
