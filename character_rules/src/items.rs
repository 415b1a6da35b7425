//! Reusable component items: equipment and skills.
//!
//! Equipment carries a role payload - a weapon's attack power or an armor's
//! defense value, never both and never neither.

use serde::{Deserialize, Serialize};

/// The role-specific payload of an equipment item.
///
/// Serialized flattened into the item, so a weapon reads as
/// `{"id": ..., "name": ..., "durability": ..., "weapon": {"damage": 20}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentPayload {
    Weapon { damage: i32 },
    Armor { defense: i32 },
}

/// A piece of equipment: pool-sampled or archetype-guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: String,
    pub name: String,
    /// Always positive; pool loading rejects zero-durability records.
    pub durability: u32,
    #[serde(flatten)]
    pub payload: EquipmentPayload,
}

impl EquipmentItem {
    /// Construct a weapon.
    pub fn weapon(
        id: impl Into<String>,
        name: impl Into<String>,
        durability: u32,
        damage: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            durability,
            payload: EquipmentPayload::Weapon { damage },
        }
    }

    /// Construct an armor piece.
    pub fn armor(
        id: impl Into<String>,
        name: impl Into<String>,
        durability: u32,
        defense: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            durability,
            payload: EquipmentPayload::Armor { defense },
        }
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.payload, EquipmentPayload::Weapon { .. })
    }

    pub fn is_armor(&self) -> bool {
        matches!(self.payload, EquipmentPayload::Armor { .. })
    }
}

/// A usable skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cooldown: u32,
    pub damage: u32,
}

impl SkillItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        cooldown: u32,
        damage: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            cooldown,
            damage,
        }
    }
}
