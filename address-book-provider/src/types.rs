use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default endpoint of the random user generator.
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

// ============ User records ============

/// One user as returned by the remote service.
///
/// Only the thumbnail URL and the first name are modeled; everything else is
/// kept verbatim in the underlying JSON object so the full record can be shown
/// later. Serializing a record reproduces the object it was decoded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct UserRecord {
    picture_thumbnail_url: String,
    first_name: String,
    data: Value,
}

impl UserRecord {
    /// Build a record from a decoded JSON object.
    ///
    /// Fails when `picture.thumbnail` or `name.first` is absent or not a string.
    pub fn from_value(data: Value) -> std::result::Result<Self, String> {
        let picture_thumbnail_url = required_str(&data, &["picture", "thumbnail"])?;
        let first_name = required_str(&data, &["name", "first"])?;

        Ok(Self {
            picture_thumbnail_url,
            first_name,
            data,
        })
    }

    pub fn picture_thumbnail_url(&self) -> &str {
        &self.picture_thumbnail_url
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The full record, including fields that are not modeled.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Compact JSON text of the full record.
    pub fn to_json(&self) -> String {
        self.data.to_string()
    }
}

impl TryFrom<Value> for UserRecord {
    type Error = String;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<UserRecord> for Value {
    fn from(record: UserRecord) -> Self {
        record.data
    }
}

fn required_str(data: &Value, path: &[&str]) -> std::result::Result<String, String> {
    let mut current = data;
    for key in path {
        current = current
            .get(key)
            .ok_or_else(|| format!("user record is missing `{}`", path.join(".")))?;
    }
    current
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| format!("user record field `{}` is not a string", path.join(".")))
}

/// Ordered users returned by one fetch.
pub type UserBatch = Vec<UserRecord>;

// ============ Source options ============

/// Connection settings for an HTTP user source.
///
/// Timeouts are off unless set: a stalled request waits indefinitely.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// Endpoint URL, queried with an optional `results` parameter.
    pub endpoint: String,
    /// Maximum time to establish a connection.
    pub connect_timeout: Option<Duration>,
    /// Maximum time for the whole request, body included.
    pub request_timeout: Option<Duration>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}
