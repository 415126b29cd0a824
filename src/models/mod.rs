pub mod activity;
pub mod marker;
pub mod report;
pub mod user;
