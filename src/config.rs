//! Chain configuration.
//!
//! ```toml
//! max_deciders = 32
//! deciders = ["GRANT_IF_ADMIN", "DENY_IF_IN_TRASH", "DENY"]
//! ```
//!
//! Omitting `deciders` selects the standard entity access chain.

use serde::Deserialize;

use crate::decider::Decider;
use crate::error::ChainError;

/// Default upper bound on chain length.
pub const DEFAULT_MAX_DECIDERS: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainConfig {
    /// Maximum number of deciders a chain may hold, terminal included.
    pub max_deciders: usize,
    /// Deciders in evaluation order. `None` means the standard chain.
    pub deciders: Option<Vec<Decider>>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig {
            max_deciders: DEFAULT_MAX_DECIDERS,
            deciders: None,
        }
    }
}

impl ChainConfig {
    pub fn from_toml(text: &str) -> Result<Self, ChainError> {
        Ok(toml::from_str(text)?)
    }
}
