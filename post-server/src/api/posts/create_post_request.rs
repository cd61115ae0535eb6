use serde::Deserialize;

/// Post creation input. Fields are optional so absence is reported as a
/// 400 validation error rather than a body-parse rejection.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}
