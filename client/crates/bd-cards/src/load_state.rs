use serde::Serialize;

/// Loading flag and last error of one fetched collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadState {
    pub is_loading: bool,
    pub error: Option<String>,
}

impl LoadState {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            is_loading: false,
            error: Some(message.into()),
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
