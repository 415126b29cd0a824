pub mod date;
pub mod formatting;
pub mod path;
pub mod time;

pub use formatting::{format_delta, format_duration};
