//! JSON request bodies and the error response shared by every route.

use crate::errors::AppError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Deserializer};

/// Any failure: status 400, body `{ "errorMessage": ... }`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.client_message();
        tracing::warn!(error = %self.0, "request failed");
        let body = Json(serde_json::json!({ "errorMessage": message }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// The caller's id, taken from the `user` header.
pub fn user_from_headers(headers: &HeaderMap) -> Option<i64> {
    headers
        .get("user")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Accept epoch seconds either as a JSON number or a numeric string.
fn flexible_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(i64),
        Float(f64),
        Str(String),
    }

    match Option::<NumOrStr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumOrStr::Num(n)) => Ok(Some(n)),
        Some(NumOrStr::Float(f)) => Ok(Some(f.trunc() as i64)),
        Some(NumOrStr::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(NumOrStr::Str(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("not a timestamp: {}", s))),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddActivityRequest {
    #[serde(default, deserialize_with = "flexible_i64")]
    pub date: Option<i64>,
    pub activity: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EditActivityRequest {
    #[serde(default, deserialize_with = "flexible_i64")]
    pub activity_id: Option<i64>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub date: Option<i64>,
    pub activity: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRequest {
    #[serde(default, deserialize_with = "flexible_i64")]
    pub start_timestamp: Option<i64>,
    #[serde(default, deserialize_with = "flexible_i64")]
    pub now: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn timestamps_accept_numbers_and_strings() {
        let r: DayRequest =
            serde_json::from_str(r#"{"startTimestamp": "86400", "now": 90000}"#).unwrap();
        assert_eq!(r.start_timestamp, Some(86_400));
        assert_eq!(r.now, Some(90_000));

        let r: DayRequest = serde_json::from_str(r#"{"startTimestamp": 0}"#).unwrap();
        assert_eq!(r.now, None);

        assert!(serde_json::from_str::<DayRequest>(r#"{"startTimestamp": "soon"}"#).is_err());
    }

    #[test]
    fn user_header_must_be_numeric() {
        let mut h = HeaderMap::new();
        assert_eq!(user_from_headers(&h), None);
        h.insert("user", HeaderValue::from_static("12"));
        assert_eq!(user_from_headers(&h), Some(12));
        h.insert("user", HeaderValue::from_static("bob"));
        assert_eq!(user_from_headers(&h), None);
    }
}
