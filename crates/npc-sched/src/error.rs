use npc_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("update delta must be finite and >= 0, got {0}")]
    BadDelta(f32),
}

pub type SchedResult<T> = Result<T, SchedError>;
