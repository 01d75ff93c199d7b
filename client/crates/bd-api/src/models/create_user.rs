use serde::Serialize;

/// Body of `POST /users`.
#[derive(Clone, Serialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
