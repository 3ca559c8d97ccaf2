//! Aggregated error type for the navigation context.

use crate::config::ConfigError;
use navgrid_core::{PathError, StoreError};
use thiserror::Error;

/// Any failure surfaced by [`NavContext`](crate::NavContext).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NavError {
    /// Configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Store initialisation or a bulk load failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// A path query failed.
    #[error(transparent)]
    Path(#[from] PathError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use navgrid_core::UnreachableReason;

    #[test]
    fn conversions_and_messages() {
        let e: NavError = PathError::Unreachable {
            reason: UnreachableReason::Disconnected,
        }
        .into();
        assert_eq!(
            e.to_string(),
            "goal unreachable: no traversable route connects start and goal"
        );
        let e: NavError = ConfigError::ChangeLogZero.into();
        assert!(matches!(e, NavError::Config(_)));
    }
}
