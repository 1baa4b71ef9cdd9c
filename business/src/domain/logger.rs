/// Logging port for the aggregation core.
///
/// Aggregator failures are absorbed rather than propagated, so the log
/// line at the point of failure is the only trace a degraded retailer
/// leaves behind. Implementations live in the infrastructure layer.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
