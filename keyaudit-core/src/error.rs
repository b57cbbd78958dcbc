use std::path::PathBuf;
use thiserror::Error;

/// Errors the audit core reports to its caller.
///
/// Per-file open, read, and stat failures are absorbed inside the scanners;
/// the only failure a caller must handle is a missing scan root.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("key directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_not_found_names_the_path() {
        let err = AuditError::DirectoryNotFound(PathBuf::from("/no/such/dir"));
        assert!(err.to_string().contains("/no/such/dir"));
    }
}
