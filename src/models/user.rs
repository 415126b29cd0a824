use serde::Serialize;

#[derive(Debug, Clone)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub password: String, // sha256 digest, base64
}

/// What `/login` hands back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggedUser {
    pub username: String,
    pub id: i64,
}

impl From<&User> for LoggedUser {
    fn from(u: &User) -> Self {
        Self {
            username: u.username.clone(),
            id: u.user_id,
        }
    }
}
