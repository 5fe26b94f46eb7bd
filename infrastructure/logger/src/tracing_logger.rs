use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "CatalogAdmin -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "CatalogAdmin -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "CatalogAdmin -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "CatalogAdmin -- ", "{}", message);
    }
}
