use thiserror::Error;

/// Result type produced by the field builders and option helpers.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors emitted while configuring or building a fractal field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("octaves must be between 1 and 2147483647")]
    InvalidOctaves,
    #[error("{axis} must be at least 1")]
    EmptyExtent { axis: &'static str },
    #[error("sphere circumference must be at least 2, got {circumference}")]
    SphereTooSmall { circumference: usize },
}

/// Rejects a zero extent on the named axis.
pub(crate) fn require_extent(axis: &'static str, extent: usize) -> FieldResult<()> {
    if extent == 0 {
        return Err(FieldError::EmptyExtent { axis });
    }
    Ok(())
}
