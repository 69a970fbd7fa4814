use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "catalog::use_case";

/// `Logger` port backed by `tracing`. Events go to the `catalog::use_case`
/// target with the text in a `use_case_message` field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, use_case_message = %message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, use_case_message = %message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, use_case_message = %message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, use_case_message = %message);
    }
}
