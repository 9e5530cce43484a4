pub mod log_throttle;
pub mod logger;
pub mod value;
