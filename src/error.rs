// Error types for the migration pipeline

use crate::source::SourceError;
use crate::target::TargetError;
use thiserror::Error;

/// Unified error type for a migration run.
///
/// Collaborator failures are not caught mid-run: the first one propagates
/// here and aborts the whole migration, leaving prior writes committed and
/// remaining records untouched. The run is administrator-triggered and
/// re-runnable, so there is deliberately no retry or rollback layer.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("source read failed: {0}")]
    Source(#[from] SourceError),

    #[error("target write failed: {0}")]
    Target(#[from] TargetError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err: MigrationError = SourceError::Corrupt {
            detail: "truncated snapshot".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "source read failed: corrupt source data: truncated snapshot"
        );
    }

    #[test]
    fn from_conversions_work() {
        let source_err: MigrationError = SourceError::Corrupt {
            detail: "x".to_string(),
        }
        .into();
        assert!(matches!(source_err, MigrationError::Source(_)));

        let target_err: MigrationError = TargetError::Save {
            entity: "group 'vip'".to_string(),
            detail: "disk full".to_string(),
        }
        .into();
        assert!(matches!(target_err, MigrationError::Target(_)));
    }
}
