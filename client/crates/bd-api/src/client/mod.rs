pub(crate) mod api_request;
pub(crate) mod client;
pub(crate) mod error;

pub use api_request::ApiRequest;
pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
