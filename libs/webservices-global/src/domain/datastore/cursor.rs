//! Opaque continuation token for cursor pagination.
//!
//! A cursor records where the previous page stopped: the sort field and
//! direction it was issued for, the sort key of the last row and that row's
//! id. Wire form is base64url (no padding) over compact JSON.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use super::sort::{SortKey, SortOrder};
use crate::application::error::UseCaseError;
use crate::domain::entity::EntityId;

pub const CURSOR_VERSION: u8 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor is not valid base64url")]
    InvalidBase64,

    #[error("cursor payload is not valid JSON")]
    InvalidJson,

    #[error("cursor could not be serialized")]
    Encode,

    #[error("unsupported cursor version {0}")]
    InvalidVersion(u8),

    #[error("cursor was issued for '{issued}' but is used with '{requested}'")]
    SortMismatch { issued: String, requested: String },
}

impl From<CursorError> for UseCaseError {
    fn from(e: CursorError) -> Self {
        UseCaseError::bad_input_with_details(
            format!("invalid cursor: {e}"),
            json!({ "field": "cursor" }),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorV1 {
    v: u8,
    /// Sort field the cursor was issued for.
    pub s: String,
    /// Sort direction the cursor was issued for.
    pub o: SortOrder,
    /// Sort key of the last row returned (`None` when that row had no value).
    pub k: Option<SortKey>,
    /// Id of the last row returned (tiebreaker).
    pub i: EntityId,
}

impl CursorV1 {
    pub fn new(
        sort_by: impl Into<String>,
        order: SortOrder,
        key: Option<SortKey>,
        id: EntityId,
    ) -> Self {
        Self {
            v: CURSOR_VERSION,
            s: sort_by.into(),
            o: order,
            k: key,
            i: id,
        }
    }

    pub fn encode(&self) -> Result<String, CursorError> {
        let bytes = serde_json::to_vec(self).map_err(|_| CursorError::Encode)?;
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }

    pub fn decode(token: &str) -> Result<Self, CursorError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token.trim())
            .map_err(|_| CursorError::InvalidBase64)?;
        let cursor: Self = serde_json::from_slice(&bytes).map_err(|_| CursorError::InvalidJson)?;
        if cursor.v != CURSOR_VERSION {
            return Err(CursorError::InvalidVersion(cursor.v));
        }
        Ok(cursor)
    }

    /// Decode and check the cursor belongs to the requested sort field and direction.
    pub fn decode_for(token: &str, sort_by: &str, order: SortOrder) -> Result<Self, CursorError> {
        let cursor = Self::decode(token)?;
        if cursor.s != sort_by || cursor.o != order {
            return Err(CursorError::SortMismatch {
                issued: format!("{} {}", cursor.s, cursor.o),
                requested: format!("{sort_by} {order}"),
            });
        }
        Ok(cursor)
    }
}
