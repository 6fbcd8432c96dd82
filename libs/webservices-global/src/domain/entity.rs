use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::datastore::sort::SortKey;

/// Store-assigned identifier.
pub type EntityId = i64;

/// Identity and timestamps carried by every persisted entity.
///
/// Concrete entities embed it as a named field, usually with
/// `#[serde(flatten)]` so `id`, `createdAt` and `updatedAt` serialize next
/// to the entity's own fields. `id` stays `None` until the store assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonEntity {
    pub id: Option<EntityId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CommonEntity {
    pub fn new_unsaved(now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Record the first insert: assign the id and stamp both timestamps.
    pub fn mark_inserted(&mut self, id: EntityId, now: DateTime<Utc>) {
        self.id = Some(id);
        self.created_at = now;
        self.updated_at = now;
    }

    /// Record a mutating write. `updated_at` never moves before `created_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    pub fn timestamps_consistent(&self) -> bool {
        self.updated_at >= self.created_at
    }

    /// Sort key for `id`, `createdAt` or `updatedAt`.
    pub fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "id" => self.id.map(SortKey::Int),
            "createdAt" => Some(SortKey::Timestamp(self.created_at)),
            "updatedAt" => Some(SortKey::Timestamp(self.updated_at)),
            _ => None,
        }
    }
}

/// Access to the embedded [`CommonEntity`].
pub trait Entity {
    fn common(&self) -> &CommonEntity;

    fn common_mut(&mut self) -> &mut CommonEntity;

    fn id(&self) -> Option<EntityId> {
        self.common().id
    }
}

impl Entity for CommonEntity {
    fn common(&self) -> &CommonEntity {
        self
    }

    fn common_mut(&mut self) -> &mut CommonEntity {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn unsaved_entity_has_no_id() {
        let now = Utc::now();
        let common = CommonEntity::new_unsaved(now);
        assert!(!common.is_persisted());
        assert_eq!(common.created_at, now);
        assert_eq!(common.updated_at, now);
        assert!(common.sort_key("id").is_none());
    }

    #[test]
    fn touch_never_moves_before_creation() {
        let created = Utc::now();
        let mut common = CommonEntity::new_unsaved(created);
        common.mark_inserted(1, created);

        common.touch(created - Duration::seconds(30));
        assert_eq!(common.updated_at, created);
        assert!(common.timestamps_consistent());

        let later = created + Duration::seconds(5);
        common.touch(later);
        assert_eq!(common.updated_at, later);
        assert_eq!(common.created_at, created);
    }

    #[test]
    fn sort_keys_use_wire_field_names() {
        let ts = DateTime::<Utc>::from_timestamp(10, 0).unwrap();
        let mut common = CommonEntity::new_unsaved(ts);
        common.mark_inserted(3, ts);
        assert_eq!(common.sort_key("id"), Some(SortKey::Int(3)));
        assert_eq!(common.sort_key("createdAt"), Some(SortKey::Timestamp(ts)));
        assert_eq!(common.sort_key("updatedAt"), Some(SortKey::Timestamp(ts)));
        assert_eq!(common.sort_key("created_at"), None);
    }

    #[test]
    fn serializes_camel_case() {
        let ts = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
        let mut common = CommonEntity::new_unsaved(ts);
        common.mark_inserted(9, ts);
        let v = serde_json::to_value(&common).unwrap();
        assert_eq!(v["id"], 9);
        assert!(v.get("createdAt").is_some());
        assert!(v.get("updatedAt").is_some());
    }
}
