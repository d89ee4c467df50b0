//! Contract violations reported to the input translation layer

use thiserror::Error;

/// Invalid input rejected by the match logic.
///
/// Every variant leaves the controller untouched. Duplicate or late
/// selections are not errors; see [`crate::Selection::Ignored`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("unknown player {0} (expected 1 or 2)")]
    UnknownPlayer(u8),

    #[error("move index {index} outside catalog of {len} moves")]
    MoveOutOfRange { index: usize, len: usize },

    #[error("move catalog must hold exactly 3 moves, got {len}")]
    MalformedCatalog { len: usize },
}
