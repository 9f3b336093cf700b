pub mod handlers;
pub mod models;
mod service;

pub use models::EnrichedReport;
pub use service::{ReportError, ReportService};

#[cfg(test)]
pub(crate) use service::tests as test_support;
