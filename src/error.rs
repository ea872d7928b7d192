use thiserror::Error;

/// Contract violations reported by [`IndexedMaxHeap`](crate::heap::IndexedMaxHeap).
///
/// None of these can happen when every building's left edge is paired with
/// exactly one right edge, so the sweep treats any of them as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("label {label} is out of range (max label is {max_label})")]
    LabelOutOfRange { label: usize, max_label: usize },
    #[error("label {0} is already present")]
    DuplicateLabel(usize),
    #[error("label {0} is not present")]
    LabelNotFound(usize),
}

/// Errors raised while reading the building list.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is empty, expected a building count")]
    MissingCount,
    #[error("token #{position} `{token}` is not an integer")]
    InvalidToken { position: usize, token: String },
    #[error("building count {0} is negative")]
    NegativeCount(i64),
    #[error("expected {expected} buildings but input ends after {found}")]
    Truncated { expected: usize, found: usize },
    #[error("building {id} has left edge {left} not before right edge {right}")]
    EmptyWidth { id: usize, left: i64, right: i64 },
    #[error("building {id} has negative height {height}")]
    NegativeHeight { id: usize, height: i64 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
