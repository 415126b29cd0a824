use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_users, insert_user};
use crate::errors::{AppError, AppResult};
use crate::models::user::LoggedUser;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use sha2::{Digest, Sha256};

/// sha256 of the password, base64 encoded (standard alphabet, padded).
pub fn hash_password(password: &str) -> String {
    BASE64.encode(Sha256::digest(password.as_bytes()))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

pub struct AuthLogic;

impl AuthLogic {
    pub fn login(
        pool: &DbPool,
        username: Option<&str>,
        password: Option<&str>,
    ) -> AppResult<LoggedUser> {
        let (Some(username), Some(password)) = (non_empty(username), non_empty(password)) else {
            return Err(AppError::validation("No user provided"));
        };

        let digest = hash_password(password);
        let users = pool
            .with_conn(|conn| find_users(conn, username, &digest))
            .map_err(|_| AppError::DataUnavailable("Cannot read database".into()))?;

        match users.as_slice() {
            [] => Err(AppError::validation("Invalid user or password")),
            [user] => Ok(LoggedUser::from(user)),
            _ => Err(AppError::validation("Multiple matching")),
        }
    }

    pub fn create_user(pool: &DbPool, username: &str, password: &str) -> AppResult<i64> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation("Username and password must not be empty"));
        }

        let digest = hash_password(password);
        pool.with_conn(|conn| {
            let id = insert_user(conn, username, &digest)?;
            if let Err(e) = ttlog(conn, "user_add", username, &format!("Created user #{}", id)) {
                tracing::warn!(error = %e, "failed to write internal log");
            }
            Ok(id)
        })
    }
}
