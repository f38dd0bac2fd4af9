//! API response models.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Response model for the item endpoints
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct ItemResponse {
    pub id: u64,
    /// What the endpoint does with the item (`view` or `edit`)
    pub action: String,
}

/// Response model for the item listing endpoint
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct ItemListResponse {
    pub items: Vec<u64>,
}

/// Response model for the user lookup endpoint
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct UserResponse {
    pub user_id: String,
}
