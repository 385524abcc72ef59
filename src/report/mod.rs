//! The report creation pipeline: payload shapes, validation, document
//! mapping, and the orchestrating service.

pub mod mapper;
pub mod payload;
pub mod service;
pub mod validate;

pub use payload::{RawReportPayload, ValidatedReport};
pub use service::ReportCreationService;
pub use validate::validate;
