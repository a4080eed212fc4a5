//! Ways of naming a remote file or folder.

use crate::error::{DriveError, Result};

/// A remote location, given either as a path or as a resolved identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteRef {
    /// Slash-separated path, resolved from the root folder
    Path(String),
    /// Identifier the service already knows
    Id(String),
}

impl RemoteRef {
    /// Location given as a path.
    pub fn path(path: impl Into<String>) -> Self {
        RemoteRef::Path(path.into())
    }

    /// Location given as an identifier.
    pub fn id(id: impl Into<String>) -> Self {
        RemoteRef::Id(id.into())
    }

    /// Build from a pair of optional arguments where exactly one must be set.
    ///
    /// Useful for command-line front ends that accept `--path` or `--id`.
    pub fn from_options(path: Option<String>, id: Option<String>) -> Result<Self> {
        match (path, id) {
            (Some(path), None) => Ok(RemoteRef::Path(path)),
            (None, Some(id)) => Ok(RemoteRef::Id(id)),
            (Some(_), Some(_)) => Err(DriveError::InvalidArguments(
                "give either a path or an id, not both".to_string(),
            )),
            (None, None) => Err(DriveError::InvalidArguments(
                "a path or an id is required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_options() {
        assert_eq!(
            RemoteRef::from_options(Some("/a/b".to_string()), None).unwrap(),
            RemoteRef::path("/a/b")
        );
        assert_eq!(
            RemoteRef::from_options(None, Some("1AbC".to_string())).unwrap(),
            RemoteRef::id("1AbC")
        );
    }

    #[test]
    fn test_from_options_rejects_both_and_neither() {
        let both = RemoteRef::from_options(Some("/a".to_string()), Some("x".to_string()));
        assert!(matches!(both, Err(DriveError::InvalidArguments(_))));

        let neither = RemoteRef::from_options(None, None);
        assert!(matches!(neither, Err(DriveError::InvalidArguments(_))));
    }
}
