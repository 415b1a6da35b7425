//! The roster: the caller-visible registry of finished characters.

use serde::Serialize;

use character_rules::{Character, CharacterId};

/// Append-only, ordered collection of finished characters.
///
/// Performs no validation; builders guarantee completeness on success.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished character, returning its id.
    pub fn add(&mut self, character: Character) -> CharacterId {
        let id = character.id;
        self.characters.push(character);
        id
    }

    /// All finished characters, in build order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Serialize the roster as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
