use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransformError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    #[error("Index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Expected 16 row-major components, got {len}")]
    InvalidLength { len: usize },
}

impl TransformError {
    pub(crate) fn check_index(index: usize, len: usize) -> Result<usize> {
        if index < len {
            Ok(index)
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }
}
