use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("trend series capacity must be at least 1")]
    ZeroTrendCapacity,
}
