//! HTTP handlers.

mod reports;
mod status;

pub use reports::create_report_handler;
pub use status::status_handler;
