/// Consecutive failures at which a family is reported as `Status::Error`.
pub const ERROR_THRESHOLD: u32 = 3;
