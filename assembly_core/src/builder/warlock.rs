//! The warlock archetype builder.

use character_rules::{Archetype, Attribute, AttributeSet, Character, EquipmentItem, SkillItem};

use super::{BuildError, CharacterBuilder, Scaffold};

/// Flat bonus applied to each of the warlock's favored attributes.
const STAT_BONUS: i32 = 5;

/// Attributes the warlock bonus targets.
const BONUS_TARGETS: [Attribute; 2] = [Attribute::Intelligence, Attribute::Charisma];

/// Builds warlocks: mental bonuses plus guaranteed staff, cloth armor, and
/// the Ignite / Flame arc pair. Guaranteed item ids carry the `lock_` prefix.
#[derive(Debug, Default)]
pub struct WarlockBuilder {
    scaffold: Option<Scaffold>,
}

impl WarlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn guaranteed_skills() -> Vec<SkillItem> {
        vec![
            SkillItem::new("lock_skill_1", "Ignite", "Ignite", 3, 10),
            SkillItem::new("lock_skill_2", "Flame arc", "Flame arc", 5, 30),
        ]
    }

    fn guaranteed_equipment() -> Vec<EquipmentItem> {
        vec![
            EquipmentItem::weapon("lock_weapon_1", "Staff", 8, 5),
            EquipmentItem::armor("lock_armor_1", "Cloth armor", 10, 10),
        ]
    }
}

impl CharacterBuilder for WarlockBuilder {
    fn archetype(&self) -> Archetype {
        Archetype::Warlock
    }

    fn reset(&mut self) {
        self.scaffold = Some(Scaffold::new(Archetype::Warlock));
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
