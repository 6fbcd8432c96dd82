use async_trait::async_trait;
use serde_json::json;

use super::page::{NumberedPage, Page};
use super::params::{QueryCursorPaginationParams, QueryPagePaginationParams};
use super::sort::{SortKey, SortOrder};
use crate::application::error::{UseCaseError, UseCaseResult};
use crate::domain::entity::{Entity, EntityId};

/// Entity whose fields can drive ordering.
pub trait Sortable: Entity {
    /// Field names accepted as `sort_by`.
    const SORT_FIELDS: &'static [&'static str];

    /// Comparable value of `field`, or `None` when the field is unknown or unset.
    fn sort_key(&self, field: &str) -> Option<SortKey>;
}

/// Validated ordering: a known field and a direction.
///
/// Rows are ordered by the field, then by id in the same direction, so that
/// equal keys always come back in one fixed sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn resolve<E: Sortable>(
        sort_by: Option<&str>,
        order: Option<&str>,
        default_field: &str,
    ) -> UseCaseResult<Self> {
        let field = sort_by.unwrap_or(default_field);
        if !E::SORT_FIELDS.iter().any(|f| *f == field) {
            return Err(UseCaseError::bad_input_with_details(
                format!("cannot sort by '{field}'"),
                json!({ "field": "sortBy", "allowed": E::SORT_FIELDS }),
            ));
        }
        Ok(Self {
            field: field.to_owned(),
            order: SortOrder::resolve(order)?,
        })
    }

    /// Position of `entity` in this ordering: `(sort key, id)`.
    pub fn position_of<E: Sortable>(&self, entity: &E) -> (Option<SortKey>, EntityId) {
        (
            entity.sort_key(&self.field),
            entity.id().unwrap_or_default(),
        )
    }

    pub fn compare<E: Sortable>(&self, a: &E, b: &E) -> std::cmp::Ordering {
        self.order.apply(self.position_of(a).cmp(&self.position_of(b)))
    }
}

/// Persistence port consumed by use cases.
///
/// Implementations assign `id` on insert, refresh `updated_at` on every
/// update and never change `created_at` once stored.
#[async_trait]
pub trait PaginatedRepository<E>: Send + Sync
where
    E: Sortable + Send + Sync + 'static,
{
    /// Persist a new entity and return it with its assigned id.
    async fn insert(&self, entity: E) -> UseCaseResult<E>;

    /// Overwrite an existing entity. Unknown ids are `NotFound`.
    async fn update(&self, entity: E) -> UseCaseResult<E>;

    async fn find_by_id(&self, id: EntityId) -> UseCaseResult<Option<E>>;

    /// Fetch the page after `params.cursor` (or the first page).
    async fn list_by_cursor(&self, params: &QueryCursorPaginationParams) -> UseCaseResult<Page<E>>;

    async fn list_by_page(
        &self,
        params: &QueryPagePaginationParams,
    ) -> UseCaseResult<NumberedPage<E>>;
}
