use thiserror::Error;

use crate::geom::Point;

/// Errors raised while assembling terrain maps.
///
/// Out-of-bounds tile access is not represented here: it is a contract
/// violation and panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map {name}: expected {expected} bytes of terrain data, got {actual}")]
    DataLength {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("map {name}: coarse map is {actual}, expected {expected}")]
    CoarseSize {
        name: String,
        expected: Point,
        actual: Point,
    },
}
