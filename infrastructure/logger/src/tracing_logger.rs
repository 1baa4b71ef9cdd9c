use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Aggregation -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Aggregation -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Aggregation -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Aggregation -- ", "{}", message);
    }
}
