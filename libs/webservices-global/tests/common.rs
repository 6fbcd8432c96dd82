#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use webservices_global::{CommonEntity, Entity, SortKey, Sortable};

/// Sample entity embedding the shared metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(flatten)]
    pub common: CommonEntity,
    pub title: String,
    pub score: i64,
}

impl Article {
    pub fn draft(title: &str, score: i64) -> Self {
        Self {
            common: CommonEntity::new_unsaved(ts(0)),
            title: title.to_string(),
            score,
        }
    }
}

impl Entity for Article {
    fn common(&self) -> &CommonEntity {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonEntity {
        &mut self.common
    }
}

impl Sortable for Article {
    const SORT_FIELDS: &'static [&'static str] =
        &["id", "createdAt", "updatedAt", "title", "score"];

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "title" => Some(SortKey::from(self.title.as_str())),
            "score" => Some(SortKey::Int(self.score)),
            other => self.common.sort_key(other),
        }
    }
}

pub fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap()
}

/// Clock that advances one second per reading, starting at `start`.
pub fn ticking_clock(start: i64) -> impl Fn() -> DateTime<Utc> + Send + Sync + 'static {
    let now = Arc::new(AtomicI64::new(start));
    move || ts(now.fetch_add(1, Ordering::SeqCst))
}
