//! Tracked defect model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A tracked defect linked to one or more test failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Bug {
    /// Defect tracker ID
    pub id: i64,
    /// Current defect status (NEW, ASSIGNED, ...)
    #[serde(default)]
    pub status: String,
    /// One-line defect summary
    #[serde(default)]
    pub summary: String,
    /// Defect tracker components this bug is filed against
    #[serde(default)]
    pub components: Vec<String>,
    /// Link to the defect tracker page
    #[serde(default)]
    pub url: String,
}
