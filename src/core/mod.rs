pub mod activity;
pub mod auth;
pub mod log;
pub mod reconciler;
pub mod report;
