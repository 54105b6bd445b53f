//! # Play Catalog
//!
//! Maps play identifiers to their [`Play`] records. Supplied by the caller
//! and only read while a statement is built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::Play;
use crate::validation::{validate_play_id, validate_play_name, ValidationResult};

/// Read-only lookup table of plays keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    plays: HashMap<String, Play>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a play after checking its identifier and name.
    ///
    /// A play already stored under `play_id` is replaced.
    ///
    /// ## Example
    /// ```rust
    /// use theater_core::{Catalog, Play, PlayType};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.insert("hamlet", Play::new("Hamlet", PlayType::Tragedy)).unwrap();
    /// assert!(catalog.insert("", Play::new("Nameless", PlayType::Comedy)).is_err());
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn insert(&mut self, play_id: impl Into<String>, play: Play) -> ValidationResult<()> {
        let play_id = play_id.into();
        validate_play_id(&play_id)?;
        validate_play_name(&play.name)?;
        self.plays.insert(play_id, play);
        Ok(())
    }

    /// Resolves a play identifier.
    ///
    /// Fails with [`CoreError::UnknownPlay`] when the identifier is absent.
    pub fn lookup(&self, play_id: &str) -> CoreResult<&Play> {
        self.plays.get(play_id).ok_or_else(|| CoreError::UnknownPlay {
            play_id: play_id.to_string(),
        })
    }

    /// Number of plays in the catalog.
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Returns true if the catalog holds no plays.
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

/// Builds a catalog without validation, for data that is already trusted.
impl<K: Into<String>> FromIterator<(K, Play)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, Play)>>(iter: I) -> Self {
        Catalog {
            plays: iter
                .into_iter()
                .map(|(play_id, play)| (play_id.into(), play))
                .collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
