//! Attribute components for assembled characters.

use serde::{Deserialize, Serialize};

/// The six base attributes of a character.
///
/// Base values are rolled in `[1, 10]`; archetype bonuses are additive and
/// deliberately unclamped, so a bonused field may exceed 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

/// Attribute names, for addressing `AttributeSet` fields symbolically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl AttributeSet {
    /// Read the value of a single attribute.
    pub fn value(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    /// Add a flat bonus to a single attribute.
    pub fn apply_bonus(&mut self, attr: Attribute, amount: i32) {
        let field = match attr {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Constitution => &mut self.constitution,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        };
        *field += amount;
    }

    /// Check that every attribute lies within `[lo, hi]` inclusive.
    pub fn all_within(&self, lo: i32, hi: i32) -> bool {
        [
            self.strength,
            self.dexterity,
            self.constitution,
            self.intelligence,
            self.wisdom,
            self.charisma,
        ]
        .iter()
        .all(|v| (lo..=hi).contains(v))
    }
}
