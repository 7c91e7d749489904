use serde::{Deserialize, Serialize};

/// One extracurricular offering and its current roster.
///
/// `max_participants` is advisory only; nothing enforces it against the
/// roster length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    // Wire name is singular; existing clients depend on it.
    #[serde(rename = "participant")]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationMessage {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
