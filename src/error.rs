//! Error types

/// Failure while streaming a canvas to its sink.
///
/// Only the first sink failure is ever reported; later writes are skipped.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Write error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Kind of the underlying I/O failure
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            ExportError::Io(e) => e.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_export_error_from_io() {
        let err: ExportError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.to_string(), "Write error: pipe closed");
    }
}
