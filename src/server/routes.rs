use super::AppState;
use super::response::{
    AddActivityRequest, ApiError, ApiResult, DayRequest, EditActivityRequest, LoginRequest,
    user_from_headers,
};
use crate::core::activity::{ActivityLogic, Source};
use crate::core::auth::AuthLogic;
use crate::core::report::ReportLogic;
use crate::errors::{AppError, AppResult};
use crate::models::activity::RawActivity;
use crate::models::report::DailyReport;
use crate::models::user::LoggedUser;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use serde_json::{Value, json};
use tracing::info;

/// Run a store-bound closure off the async executor.
async fn blocking<F, T>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError(AppError::Server(e.to_string())))?
        .map_err(ApiError::from)
}

fn require_user(headers: &HeaderMap) -> Result<i64, ApiError> {
    user_from_headers(headers).ok_or_else(|| ApiError(AppError::validation("No user provided")))
}

fn require_start(start: Option<i64>) -> Result<i64, ApiError> {
    start.ok_or_else(|| ApiError(AppError::validation("No startTimestamp provided")))
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<LoggedUser> {
    info!("POST /login");
    let Json(req) = body?;

    let user = blocking(move || {
        AuthLogic::login(&state.pool, req.username.as_deref(), req.password.as_deref())
    })
    .await?;

    Ok(Json(user))
}

pub async fn add_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<AddActivityRequest>, JsonRejection>,
) -> ApiResult<Value> {
    info!("POST /addActivity");
    let Json(req) = body?;
    let user_id = user_from_headers(&headers);

    blocking(move || {
        ActivityLogic::add(
            &state.pool,
            user_id,
            req.date,
            req.activity.as_deref(),
            Source::Api,
        )
    })
    .await?;

    Ok(Json(json!({})))
}

pub async fn edit_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<EditActivityRequest>, JsonRejection>,
) -> ApiResult<Value> {
    info!("POST /editActivity");
    let Json(req) = body?;
    let user_id = user_from_headers(&headers);

    blocking(move || {
        ActivityLogic::edit(
            &state.pool,
            user_id,
            req.activity_id,
            req.date,
            req.activity.as_deref(),
        )
    })
    .await?;

    Ok(Json(json!({})))
}

pub async fn computed_activities(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<DayRequest>, JsonRejection>,
) -> ApiResult<DailyReport> {
    info!("POST /getComputedActivities");
    let Json(req) = body?;
    let user_id = require_user(&headers)?;
    let start = require_start(req.start_timestamp)?;

    let report = blocking(move || {
        ReportLogic::computed(&state.pool, &state.reconciler, user_id, start, req.now)
    })
    .await?;

    Ok(Json(report))
}

pub async fn raw_activities(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<DayRequest>, JsonRejection>,
) -> ApiResult<Vec<RawActivity>> {
    info!("POST /getRawActivities");
    let Json(req) = body?;
    let user_id = require_user(&headers)?;
    let start = require_start(req.start_timestamp)?;

    let listing = blocking(move || {
        ReportLogic::raw(&state.pool, &state.reconciler.offset, user_id, start)
    })
    .await?;

    Ok(Json(listing))
}
