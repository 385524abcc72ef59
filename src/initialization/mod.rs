//! Application initialization.
//!
//! Logger setup lives here; the database pool has its own initializer in the
//! storage module.

mod logger;

pub use logger::init_logger_with;
