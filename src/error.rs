use thiserror::Error;

/// Errors raised while building a world.
///
/// Out-of-bounds reads/writes and picking misses are not errors, they are
/// reported through `Option`/`bool` results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("world dimensions must be positive (width={width}, depth={depth}, height={height})")]
    InvalidDimensions { width: i32, depth: i32, height: i32 },

    #[error("world of {width}x{depth}x{height} cells does not fit in memory")]
    TooLarge { width: i32, depth: i32, height: i32 },
}
