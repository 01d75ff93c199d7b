//! bd-api
//!
//! HTTP adapter for the bankdash backend plus the auth and user services
//! built on it.

mod auth_api;
mod auth_service;
mod client;
mod models;
mod user_service;


pub use auth_api::AuthApi;
pub use auth_service::AuthService;
pub use client::{ApiRequest, Client, ClientError, ClientResult};
pub use models::create_user::CreateUser;
pub use models::user_update::UserUpdate;
pub use user_service::UserService;
