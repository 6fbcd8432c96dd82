use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::application::error::{UseCaseError, UseCaseResult};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationConfigError {
    #[error("default_limit must be greater than zero")]
    ZeroDefaultLimit,

    #[error("default_limit ({default}) exceeds max_limit ({max})")]
    DefaultAboveMax { default: u32, max: u32 },
}

/// Limits applied by query executors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    /// Page size used when the caller leaves `limit` unset (zero).
    pub default_limit: u32,
    /// Larger requested sizes are clamped down to this.
    pub max_limit: u32,
    /// Sort field used when the caller leaves `sort_by` unset.
    pub default_sort_field: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: 25,
            max_limit: 1000,
            default_sort_field: "id".to_owned(),
        }
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> Result<(), PaginationConfigError> {
        if self.default_limit == 0 {
            return Err(PaginationConfigError::ZeroDefaultLimit);
        }
        if self.default_limit > self.max_limit {
            return Err(PaginationConfigError::DefaultAboveMax {
                default: self.default_limit,
                max: self.max_limit,
            });
        }
        Ok(())
    }

    /// Resolve a raw `limit`: zero means unset, negative is rejected, large values are clamped.
    pub fn effective_limit(&self, raw: i32) -> UseCaseResult<u32> {
        match u32::try_from(raw) {
            Ok(0) => Ok(self.default_limit),
            Ok(l) => Ok(l.min(self.max_limit)),
            Err(_) => Err(UseCaseError::bad_input_with_details(
                format!("limit must be positive, got {raw}"),
                json!({ "field": "limit" }),
            )),
        }
    }

    /// Resolve a raw 1-based `page`: zero means unset (first page), negative is rejected.
    pub fn effective_page(&self, raw: i32) -> UseCaseResult<u32> {
        match u32::try_from(raw) {
            Ok(0) => Ok(1),
            Ok(p) => Ok(p),
            Err(_) => Err(UseCaseError::bad_input_with_details(
                format!("page must be positive, got {raw}"),
                json!({ "field": "page" }),
            )),
        }
    }
}
