//! Form payload models for the site's submission surfaces.

use serde::{Deserialize, Serialize};

/// Contact page submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Community page "join us" submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JoinRequest {
    pub name: String,
    pub email: String,
    /// How the submitter describes themselves (director, editor, ...).
    pub role: String,
    pub interests: String,
}

/// App promo "notify me" submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppNotifyRequest {
    pub email: String,
}
