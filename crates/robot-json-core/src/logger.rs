//! Logging capability used by the exporter

/// Sink for progress and warning messages
pub trait Logger {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Forwards messages to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}
