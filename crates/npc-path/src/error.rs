use npc_core::Point3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    /// A query endpoint carried NaN or infinite components.  Rejected up
    /// front so NaN never propagates silently into waypoint lists.
    #[error("non-finite path endpoint: start {start}, end {end}")]
    NonFinite { start: Point3, end: Point3 },
}

pub type PathResult<T> = Result<T, PathError>;
