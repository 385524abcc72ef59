//! Report persistence: pool setup, migrations, and document insertion.

mod insert;
mod migrations;
pub mod models;
mod pool;
#[cfg(test)]
pub mod test_helpers;

// Re-export commonly used items
pub use insert::insert_report;
pub use migrations::run_migrations;
pub use models::ReportDocument;
pub use pool::init_db_pool_with_path;
