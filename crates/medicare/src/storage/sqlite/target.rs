//! Connection string parsing.

use std::path::PathBuf;

use medicare_core::storage::{RepositoryError, Result};

/// Where the SQLite database lives, parsed from a connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// Ephemeral database, dropped with the connection.
    Memory,
    File(PathBuf),
}

impl DatabaseTarget {
    /// Parses `sqlite://<path>`, `sqlite:<path>`, a bare path, or `:memory:`.
    ///
    /// Any other scheme (`postgresql://`, `mysql:`) and an empty path are
    /// rejected with [`RepositoryError::ConnectionFailed`], so a mistyped
    /// setting fails at startup instead of opening a stray local file.
    pub fn parse(database_url: &str) -> Result<Self> {
        let rest = match database_url
            .strip_prefix("sqlite://")
            .or_else(|| database_url.strip_prefix("sqlite:"))
        {
            Some(rest) => rest,
            None => {
                if let Some(scheme) = foreign_scheme(database_url) {
                    return Err(RepositoryError::ConnectionFailed(format!(
                        "Unsupported database scheme '{scheme}', expected 'sqlite'"
                    )));
                }
                database_url
            }
        };

        if rest.trim().is_empty() {
            return Err(RepositoryError::ConnectionFailed(format!(
                "Connection string '{database_url}' names no database path"
            )));
        }

        if rest == ":memory:" {
            Ok(Self::Memory)
        } else {
            Ok(Self::File(PathBuf::from(rest)))
        }
    }
}

/// Returns the URL scheme in front of the first `:`, if there is one.
///
/// A scheme is a letter followed by letters, digits, `+`, `-` or `.`. Single
/// letters are left alone so drive-letter paths like `C:\data\medicare.db`
/// still read as files.
fn foreign_scheme(database_url: &str) -> Option<&str> {
    let (scheme, _) = database_url.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;

    let is_scheme = scheme.len() > 1
        && first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    is_scheme.then_some(scheme)
}
