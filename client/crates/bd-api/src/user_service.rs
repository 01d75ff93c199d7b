use crate::{Client, ClientResult, CreateUser, UserUpdate};

use bd_core::User;

use reqwest::Method;

const RESOURCE: &str = "/users";

/// `/users/*` endpoints. Every call is session-bound.
#[derive(Clone)]
pub struct UserService {
    client: Client,
}

impl UserService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        let req = self.client.request(Method::GET, RESOURCE).await?;
        self.client.execute(req).await
    }

    pub async fn get_user(&self, id: &str) -> ClientResult<User> {
        let req = self
            .client
            .request(Method::GET, &format!("{RESOURCE}/{id}"))
            .await?;
        self.client.execute(req).await
    }

    pub async fn create_user(&self, user: &CreateUser) -> ClientResult<User> {
        let req = self
            .client
            .request(Method::POST, RESOURCE)
            .await?
            .json(user);
        self.client.execute(req).await
    }

    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> ClientResult<User> {
        let req = self
            .client
            .request(Method::PUT, &format!("{RESOURCE}/{id}"))
            .await?
            .json(update);
        self.client.execute(req).await
    }

    pub async fn delete_user(&self, id: &str) -> ClientResult<()> {
        let req = self
            .client
            .request(Method::DELETE, &format!("{RESOURCE}/{id}"))
            .await?;
        self.client.execute_empty(req).await
    }

    pub async fn get_profile(&self) -> ClientResult<User> {
        let req = self
            .client
            .request(Method::GET, &format!("{RESOURCE}/profile"))
            .await?;
        self.client.execute(req).await
    }

    pub async fn update_profile(&self, update: &UserUpdate) -> ClientResult<User> {
        let req = self
            .client
            .request(Method::PUT, &format!("{RESOURCE}/profile"))
            .await?
            .json(update);
        self.client.execute(req).await
    }
}
