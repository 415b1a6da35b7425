//! The warrior archetype builder.

use character_rules::{Archetype, Attribute, AttributeSet, Character, EquipmentItem, SkillItem};

use super::{BuildError, CharacterBuilder, Scaffold};

/// Flat bonus applied to each of the warrior's favored attributes.
const STAT_BONUS: i32 = 5;

/// Attributes the warrior bonus targets.
const BONUS_TARGETS: [Attribute; 2] = [Attribute::Strength, Attribute::Constitution];

/// Builds warriors: martial bonuses plus guaranteed sword, plate, and Slash.
///
/// Guaranteed item ids carry the `war_` prefix so they never collide with
/// pool-sampled ids.
#[derive(Debug, Default)]
pub struct WarriorBuilder {
    scaffold: Option<Scaffold>,
}

impl WarriorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn guaranteed_skills() -> Vec<SkillItem> {
        vec![SkillItem::new("war_skill_1", "Slash", "Slash", 1, 10)]
    }

    fn guaranteed_equipment() -> Vec<EquipmentItem> {
        vec![
            EquipmentItem::weapon("war_weapon_1", "Sword", 10, 20),
            EquipmentItem::armor("war_armor_1", "Plate armor", 20, 20),
        ]
    }
}

impl CharacterBuilder for WarriorBuilder {
    fn archetype(&self) -> Archetype {
        Archetype::Warrior
    }

    fn reset(&mut self) {
        self.scaffold = Some(Scaffold::new(Archetype::Warrior));
    }

    fn set_stats(&mut self, mut base: AttributeSet) {
        if let Some(scaffold) = self.scaffold.as_mut() {
            for attr in BONUS_TARGETS {
                base.apply_bonus(attr, STAT_BONUS);
            }
            scaffold.set_stats(base);
        }
    }

    fn set_skills(&mut self, mut sampled: Vec<SkillItem>) {
        if let Some(scaffold) = self.scaffold.as_mut() {
            sampled.extend(Self::guaranteed_skills());
            scaffold.set_skills(sampled);
        }
    }

    fn set_equips(&mut self, mut sampled: Vec<EquipmentItem>) {
        if let Some(scaffold) = self.scaffold.as_mut() {
            sampled.extend(Self::guaranteed_equipment());
            scaffold.set_equipment(sampled);
        }
    }

    fn build(&mut self) -> Result<Character, BuildError> {
        self.scaffold
            .as_mut()
            .ok_or(BuildError::NothingBuilt)?
            .finish()
    }
}
