use crate::{AuthApi, Client, ClientResult};

use bd_core::{AuthResponse, LoginCredentials, ProfileUpdate, RegisterData, TokenRefresh, User};

use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde::Serialize;

const RESOURCE: &str = "/auth";

/// `/auth/*` endpoints.
#[derive(Clone)]
pub struct AuthService {
    client: Client,
}

impl AuthService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    fn path(endpoint: &str) -> String {
        format!("{RESOURCE}/{endpoint}")
    }
}

#[async_trait]
impl AuthApi for AuthService {
    async fn login(&self, credentials: &LoginCredentials) -> ClientResult<AuthResponse> {
        debug!("POST {RESOURCE}/login for {}", credentials.email);
        let req = self
            .client
            .credential_request(Method::POST, &Self::path("login"))
            .await?
            .json(credentials);
        self.client.execute(req).await
    }

    async fn register(&self, data: &RegisterData) -> ClientResult<AuthResponse> {
        debug!("POST {RESOURCE}/register for {}", data.email);
        let req = self
            .client
            .credential_request(Method::POST, &Self::path("register"))
            .await?
            .json(data);
        self.client.execute(req).await
    }

    async fn current_user(&self) -> ClientResult<User> {
        let req = self.client.request(Method::GET, &Self::path("me")).await?;
        self.client.execute(req).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<User> {
        let req = self
            .client
            .request(Method::PUT, &Self::path("profile"))
            .await?
            .json(update);
        self.client.execute(req).await
    }

    async fn delete_account(&self) -> ClientResult<()> {
        let req = self
            .client
            .request(Method::DELETE, &Self::path("account"))
            .await?;
        self.client.execute_empty(req).await
    }

    async fn logout(&self) -> ClientResult<()> {
        let req = self
            .client
            .request(Method::POST, &Self::path("logout"))
            .await?;
        self.client.execute_empty(req).await
    }

    async fn refresh_token(&self, refresh_token: &str) -> ClientResult<TokenRefresh> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct RefreshRequest<'a> {
            refresh_token: &'a str,
        }

        let req = self
            .client
            .credential_request(Method::POST, &Self::path("refresh"))
            .await?
            .json(&RefreshRequest { refresh_token });
        self.client.execute(req).await
    }
}
