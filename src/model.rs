/// Fixture record types.
///
/// Field names serialize as-is and must match the column names the API
/// test suite's fixture loader expects (`software` and `software_urls`
/// tables). Timestamps are RFC 3339 UTC strings, pre-formatted at
/// generation time so the emitted documents are plain string scalars.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the `software` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Software {
    pub id: Uuid,
    pub publiccode_yml: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One row of the `software_urls` table. Owned by exactly one `Software`
/// row via `software_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareUrl {
    pub id: Uuid,
    pub software_id: Uuid,
    pub url: String,
    pub created_at: String,
    pub updated_at: String,
}
