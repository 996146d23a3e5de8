//! The contract every resource kind implements so the generic store
//! operations (list-all, upsert-one, batch-sync) can drive it.
use sea_orm::EntityTrait;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ModelError;

/// How `batch-sync` reconciles the stored collection with the supplied list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Delete every row of the kind, then insert the supplied records.
    DestructiveReplace,
    /// Upsert each record; rows not mentioned are kept.
    UpsertEach,
}

/// Who assigns the primary key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdStrategy {
    /// The caller must send the identifier.
    CallerSupplied,
    /// The store (or the service) assigns it when the caller omits it.
    Generated,
}

pub trait Resource: EntityTrait {
    /// Wire shape: closed, typed, camelCase.
    type Record: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Path segment under `/api/v1`.
    const NAME: &'static str;
    /// Human name used in sync messages, e.g. "Portfolio synchronized".
    const LABEL: &'static str;
    const BATCH_POLICY: BatchPolicy;
    const ID_STRATEGY: IdStrategy;

    /// Build a fully populated row; every column is `Set`, so an upsert replaces the whole row.
    fn into_active_model(record: Self::Record) -> Result<Self::ActiveModel, ModelError>;

    fn to_record(model: Self::Model) -> Result<Self::Record, ModelError>;

    fn batch_message() -> String {
        match Self::BATCH_POLICY {
            BatchPolicy::DestructiveReplace => format!("{} synchronized", Self::LABEL),
            BatchPolicy::UpsertEach => "Batch upserted".to_string(),
        }
    }
}

/// Reject blank caller-supplied identifiers.
pub(crate) fn require_id(id: String) -> Result<String, ModelError> {
    if id.trim().is_empty() {
        return Err(ModelError::required("id"));
    }
    Ok(id)
}
