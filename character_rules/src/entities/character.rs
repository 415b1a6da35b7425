//! The finished character record.

use serde::{Deserialize, Serialize};

use super::{Archetype, AttributeSet, CharacterId};
use crate::items::{EquipmentItem, SkillItem};

/// A fully assembled character.
///
/// Values of this type only exist once assembly is complete: the builders in
/// `assembly_core` keep partial state private and yield a `Character` only
/// after stats, skills, and equipment have all been supplied. The name is
/// assigned at creation and never changes afterwards.
///
/// Field declaration order fixes the serialized field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub archetype: Archetype,
    pub stats: AttributeSet,
    pub equipment: Vec<EquipmentItem>,
    pub skills: Vec<SkillItem>,
}

impl Character {
    /// Ids of all carried equipment, in stored order.
    pub fn equipment_ids(&self) -> Vec<&str> {
        self.equipment.iter().map(|e| e.id.as_str()).collect()
    }

    /// Ids of all known skills, in stored order.
    pub fn skill_ids(&self) -> Vec<&str> {
        self.skills.iter().map(|s| s.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_character() -> Character {
        Character {
            id: CharacterId::nil(),
            name: "Unnamed Warrior".to_string(),
            archetype: Archetype::Warrior,
            stats: AttributeSet {
                strength: 12,
                dexterity: 4,
                constitution: 9,
                intelligence: 3,
                wisdom: 6,
                charisma: 2,
            },
            equipment: vec![EquipmentItem::weapon("w1", "Sword", 10, 20)],
            skills: vec![SkillItem::new("s1", "Slash", "Slash", 1, 10)],
        }
    }

    #[test]
    fn test_id_accessors() {
        let character = sample_character();
        assert_eq!(character.equipment_ids(), vec!["w1"]);
        assert_eq!(character.skill_ids(), vec!["s1"]);
    }

    #[test]
    fn test_serialized_field_order() {
        let json = serde_json::to_string(&sample_character()).unwrap();
        let keys: Vec<usize> = ["\"id\"", "\"name\"", "\"archetype\"", "\"stats\"", "\"equipment\"", "\"skills\""]
            .iter()
            .map(|k| json.find(k).unwrap())
            .collect();

        // Declaration order is the wire order.
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }
}
