//! Key sequences fed to the tree by the command-line driver.

use thiserror::Error;

/// Convenience alias for key-list parsing results.
pub type Result<T> = std::result::Result<T, KeyListError>;

/// Errors raised while reading a list of keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyListError {
    /// A token could not be read as an integer key.
    #[error("invalid key '{token}' at position {position}")]
    InvalidKey { token: String, position: usize },

    /// The input held no keys at all.
    #[error("no keys given")]
    Empty,
}

/// Parses integers separated by commas and/or whitespace.
///
/// `position` in [`KeyListError::InvalidKey`] is the 1-based index of the
/// offending token.
pub fn parse_keys(input: &str) -> Result<Vec<i32>> {
    let keys = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(idx, token)| {
            token.parse::<i32>().map_err(|_| KeyListError::InvalidKey {
                token: token.to_string(),
                position: idx + 1,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    if keys.is_empty() {
        return Err(KeyListError::Empty);
    }
    Ok(keys)
}

/// Built-in key sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum KeyPreset {
    /// Twenty keys that exercise every rotation case.
    #[default]
    Demo,
    /// Mostly ascending keys ending with an inner insertion.
    Ascending,
    /// Unordered keys on both sides of the root.
    Mixed,
}

impl KeyPreset {
    pub fn keys(&self) -> &'static [i32] {
        match self {
            KeyPreset::Demo => &[
                12, 22, 91, 13, 16, 14, 15, 17, 18, 19, 20, 21, 23, 24, 25, 26, 27, 28, 29, 30,
            ],
            KeyPreset::Ascending => &[10, 20, 30, 40, 50, 25],
            KeyPreset::Mixed => &[21, 26, 30, 9, 4, 14, 28, 18, 15, 10, 2, 3, 7],
        }
    }
}
