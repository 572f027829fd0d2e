use serde::{Deserialize, Serialize};

/// Wire shape of `POST /data/`. Every field is optional here so that missing
/// and blank values can be reported together as a validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct CheerRequestBody {
    pub player_name: Option<String>,
    pub expected_score: Option<String>,
    pub attitude: Option<String>,
    pub feeling: Option<String>,
}

/// A validated fan request. All fields are free-form and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRequest {
    pub player_name: String,
    pub expected_score: String,
    pub attitude: String,
    pub feeling: String,
}

/// One generated support message. `id` is the order given by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratedMessage {
    pub id: i64,
    pub text: String,
}

/// Exactly five messages, in model order.
pub type GenerationResult = Vec<GeneratedMessage>;

pub const EXPECTED_MESSAGE_COUNT: usize = 5;
