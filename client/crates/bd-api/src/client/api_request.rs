use reqwest::RequestBuilder;
use serde::Serialize;

/// A request on its way out, plus whether a 401 answer means the stored
/// session is dead.
///
/// Credential exchanges (login, register, refresh) answer 401 for wrong
/// credentials, which says nothing about the session already stored.
#[derive(Debug)]
pub struct ApiRequest {
    pub(crate) builder: RequestBuilder,
    pub(crate) session_bound: bool,
}

impl ApiRequest {
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.builder = self.builder.json(body);
        self
    }

    pub fn is_session_bound(&self) -> bool {
        self.session_bound
    }
}
