use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Decision;

/// What the caller of `handle` receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Response {
    pub request_id: String,
    pub status: Decision,
    pub message: String,
    /// Present only when `status` is `ALLOW`.
    pub answer: Option<String>,
}
