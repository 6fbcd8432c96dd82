//! In-memory implementation of [`PaginatedRepository`].
//!
//! Used as the reference query executor in tests and local setups. It
//! honours the full paging contract: validated inputs, `(sort key, id)`
//! ordering and cursors that resume strictly after the last row served.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::application::error::{UseCaseError, UseCaseResult};
use crate::config::{PaginationConfig, PaginationConfigError};
use crate::domain::datastore::cursor::CursorV1;
use crate::domain::datastore::page::{NumberedPage, Page, PageInfo};
use crate::domain::datastore::params::{QueryCursorPaginationParams, QueryPagePaginationParams};
use crate::domain::datastore::repo::{PaginatedRepository, SortSpec, Sortable};
use crate::domain::entity::EntityId;

type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

struct State<E> {
    rows: BTreeMap<EntityId, E>,
    next_id: EntityId,
}

pub struct InMemoryRepository<E> {
    state: RwLock<State<E>>,
    config: PaginationConfig,
    clock: Clock,
}

impl<E> InMemoryRepository<E> {
    /// Create an empty store. Inconsistent limits are rejected up front.
    pub fn new(config: PaginationConfig) -> Result<Self, PaginationConfigError> {
        config.validate()?;
        Ok(Self::with_checked_config(config))
    }

    fn with_checked_config(config: PaginationConfig) -> Self {
        Self {
            state: RwLock::new(State {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
            config,
            clock: Arc::new(Utc::now),
        }
    }

    /// Replace the time source used to stamp `created_at`/`updated_at`.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn len(&self) -> usize {
        self.state.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().rows.is_empty()
    }

    pub fn remove(&self, id: EntityId) -> Option<E> {
        self.state.write().rows.remove(&id)
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::with_checked_config(PaginationConfig::default())
    }
}

impl<E: Sortable + Clone> InMemoryRepository<E> {
    fn sorted(&self, spec: &SortSpec) -> Vec<E> {
        let mut rows: Vec<E> = self.state.read().rows.values().cloned().collect();
        rows.sort_by(|a, b| spec.compare(a, b));
        rows
    }
}

#[async_trait]
impl<E> PaginatedRepository<E> for InMemoryRepository<E>
where
    E: Sortable + Clone + Send + Sync + 'static,
{
    #[instrument(name = "webservices_global.memory.insert", skip_all)]
    async fn insert(&self, mut entity: E) -> UseCaseResult<E> {
        if let Some(id) = entity.id() {
            warn!(id, "insert of an already persisted entity rejected");
            return Err(UseCaseError::bad_input_with_details(
                format!("entity {id} is already persisted"),
                json!({ "field": "id" }),
            ));
        }

        let now = (self.clock)();
        let mut state = self.state.write();
        let id = state.next_id;
        state.next_id += 1;
        entity.common_mut().mark_inserted(id, now);
        state.rows.insert(id, entity.clone());

        debug!(id, "entity inserted");
        Ok(entity)
    }

    #[instrument(name = "webservices_global.memory.update", skip_all, fields(id = ?entity.id()))]
    async fn update(&self, mut entity: E) -> UseCaseResult<E> {
        let Some(id) = entity.id() else {
            return Err(UseCaseError::bad_input_with_details(
                "cannot update an entity that was never persisted",
                json!({ "field": "id" }),
            ));
        };

        let now = (self.clock)();
        let mut state = self.state.write();
        let Some(created_at) = state.rows.get(&id).map(|stored| stored.common().created_at) else {
            return Err(UseCaseError::not_found_with_details(
                format!("entity {id} not found"),
                json!({ "id": id }),
            ));
        };

        let common = entity.common_mut();
        common.created_at = created_at;
        common.touch(now);
        state.rows.insert(id, entity.clone());

        debug!("entity updated");
        Ok(entity)
    }

    async fn find_by_id(&self, id: EntityId) -> UseCaseResult<Option<E>> {
        Ok(self.state.read().rows.get(&id).cloned())
    }

    #[instrument(
        name = "webservices_global.memory.list_by_cursor",
        skip_all,
        fields(limit = params.limit(), has_cursor = params.cursor().is_some())
    )]
    async fn list_by_cursor(&self, params: &QueryCursorPaginationParams) -> UseCaseResult<Page<E>> {
        let spec = SortSpec::resolve::<E>(
            params.sort_by(),
            params.order(),
            &self.config.default_sort_field,
        )?;
        let limit = self.config.effective_limit(params.limit())?;
        let after = params
            .cursor()
            .map(|token| CursorV1::decode_for(token, &spec.field, spec.order))
            .transpose()?
            .map(|c| (c.k, c.i));

        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        let mut items: Vec<E> = self
            .sorted(&spec)
            .into_iter()
            .filter(|e| match &after {
                Some(last) => spec.order.apply(spec.position_of(e).cmp(last)) == Ordering::Greater,
                None => true,
            })
            .take(take.saturating_add(1))
            .collect();

        let has_more = items.len() > take;
        if has_more {
            items.truncate(take);
        }

        let next_cursor = if has_more {
            items
                .last()
                .map(|e| {
                    let (key, id) = spec.position_of(e);
                    CursorV1::new(spec.field.clone(), spec.order, key, id).encode()
                })
                .transpose()?
        } else {
            None
        };

        debug!(returned = items.len(), has_more, "cursor page served");
        Ok(Page::new(items, PageInfo { next_cursor, limit }))
    }

    #[instrument(
        name = "webservices_global.memory.list_by_page",
        skip_all,
        fields(page = params.page(), limit = params.limit())
    )]
    async fn list_by_page(
        &self,
        params: &QueryPagePaginationParams,
    ) -> UseCaseResult<NumberedPage<E>> {
        let spec = SortSpec::resolve::<E>(
            params.sort_by(),
            params.order(),
            &self.config.default_sort_field,
        )?;
        let limit = self.config.effective_limit(params.limit())?;
        let page = self.config.effective_page(params.page())?;

        let rows = self.sorted(&spec);
        let total = rows.len() as u64;
        let offset = u64::from(page - 1) * u64::from(limit);
        let items: Vec<E> = rows
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect();

        debug!(returned = items.len(), total, "numbered page served");
        Ok(NumberedPage::new(items, page, limit, total))
    }
}
