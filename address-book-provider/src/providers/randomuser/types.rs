//! randomuser.me wire types

use serde::Deserialize;

use crate::types::UserRecord;

/// Top-level response body.
///
/// On failure the service answers `{"error": "..."}` instead of `results`.
#[derive(Debug, Deserialize)]
pub struct RandomUserResponse {
    pub results: Option<Vec<UserRecord>>,
    pub error: Option<String>,
    pub info: Option<RandomUserInfo>,
}

#[derive(Debug, Deserialize)]
pub struct RandomUserInfo {
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub results: Option<u32>,
    #[serde(default)]
    pub version: Option<String>,
}
