//! The builder strategy family.
//!
//! One builder per archetype, all behind the `CharacterBuilder` trait so the
//! director never names a concrete archetype. Partial construction state is
//! a private `Scaffold`; an incomplete character is never visible to callers.

mod warlock;
mod warrior;

pub use warlock::WarlockBuilder;
pub use warrior::WarriorBuilder;

use thiserror::Error;
use tracing::debug;

use character_rules::{
    Archetype, AttributeSet, Character, CharacterId, EquipmentItem, SkillItem,
};

/// Errors raised when `build` is called on a builder in the wrong state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// `reset` was never called.
    #[error("nothing was built: reset() was never called")]
    NothingBuilt,

    /// `reset` was called but one of the three setters never ran.
    #[error("character is incomplete: {missing} never supplied")]
    Incomplete { missing: &'static str },
}

/// The capability set every archetype builder exposes.
///
/// The director drives `reset` and the three setters in an order of its own
/// choosing; the caller retrieves the finished character with `build`.
pub trait CharacterBuilder {
    /// The fixed archetype this builder produces.
    fn archetype(&self) -> Archetype;

    /// Discard any partial state and start a fresh character. Idempotent.
    fn reset(&mut self);

    /// Apply archetype bonuses to the rolled base and store the result.
    /// Silent no-op before `reset` or after a finished `build`.
    fn set_stats(&mut self, base: AttributeSet);

    /// Append the archetype's guaranteed skills to the sampled list and
    /// store the union. Same no-op rule as `set_stats`.
    fn set_skills(&mut self, sampled: Vec<SkillItem>);

    /// Append the archetype's guaranteed equipment to the sampled list and
    /// store the union. Same no-op rule as `set_stats`.
    fn set_equips(&mut self, sampled: Vec<EquipmentItem>);

    /// Yield the finished character, or fail if construction is incomplete.
    ///
    /// Success spends the partial state: further setter calls are ignored and
    /// repeated `build` calls return the identical character until the next
    /// `reset`.
    fn build(&mut self) -> Result<Character, BuildError>;
}

/// Partial construction state shared by all archetype builders.
///
/// Identity (id, name, archetype) is fixed at creation; the three component
/// slots fill in as the director drives the setters.
#[derive(Debug, Clone)]
pub(crate) struct Scaffold {
    id: CharacterId,
    name: String,
    archetype: Archetype,
    stats: Option<AttributeSet>,
    skills: Option<Vec<SkillItem>>,
    equipment: Option<Vec<EquipmentItem>>,
    spent: bool,
}

impl Scaffold {
    pub(crate) fn new(archetype: Archetype) -> Self {
        Self {
            id: CharacterId::new(),
            name: format!("Unnamed {}", archetype.display_name()),
            archetype,
            stats: None,
            skills: None,
            equipment: None,
            spent: false,
        }
    }

    /// Whether the scaffold still accepts setter calls.
    pub(crate) fn accepts_components(&self) -> bool {
        if self.spent {
            debug!(archetype = %self.archetype, "setter ignored on spent builder");
        }
        !self.spent
    }

    pub(crate) fn set_stats(&mut self, stats: AttributeSet) {
        if self.accepts_components() {
            self.stats = Some(stats);
        }
    }

    pub(crate) fn set_skills(&mut self, skills: Vec<SkillItem>) {
        if self.accepts_components() {
            self.skills = Some(skills);
        }
    }

    pub(crate) fn set_equipment(&mut self, equipment: Vec<EquipmentItem>) {
        if self.accepts_components() {
            self.equipment = Some(equipment);
        }
    }

    /// Check completeness and yield the character.
    ///
    /// Repeatable: the scaffold keeps its contents, so a second call returns
    /// the identical character.
    pub(crate) fn finish(&mut self) -> Result<Character, BuildError> {
        let stats = self.stats.ok_or(BuildError::Incomplete { missing: "stats" })?;
        let skills = self
            .skills
            .as_ref()
            .ok_or(BuildError::Incomplete { missing: "skills" })?;
        let equipment = self
            .equipment
            .as_ref()
            .ok_or(BuildError::Incomplete { missing: "equipment" })?;

        self.spent = true;
        Ok(Character {
            id: self.id,
            name: self.name.clone(),
            archetype: self.archetype,
            stats,
            equipment: equipment.clone(),
            skills: skills.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use character_rules::Attribute;

    fn base_attrs() -> AttributeSet {
        AttributeSet {
            strength: 4,
            dexterity: 5,
            constitution: 6,
            intelligence: 7,
            wisdom: 8,
            charisma: 9,
        }
    }

    fn fill(builder: &mut dyn CharacterBuilder) {
        builder.reset();
        builder.set_skills(vec![SkillItem::new("s1", "Bash", "A bash", 2, 6)]);
        builder.set_equips(vec![EquipmentItem::weapon("w1", "Club", 3, 4)]);
        builder.set_stats(base_attrs());
    }

    #[test]
    fn test_build_without_reset_fails() {
        let mut builder = WarriorBuilder::default();
        assert_eq!(builder.build(), Err(BuildError::NothingBuilt));
    }

    #[test]
    fn test_build_with_missing_components_fails() {
        let mut builder = WarriorBuilder::default();
        builder.reset();
        builder.set_stats(base_attrs());

        assert_eq!(
            builder.build(),
            Err(BuildError::Incomplete { missing: "skills" })
        );
    }

    #[test]
    fn test_setters_before_reset_are_ignored() {
        let mut builder = WarriorBuilder::default();
        builder.set_stats(base_attrs());
        builder.set_skills(vec![]);
        builder.set_equips(vec![]);

        assert_eq!(builder.build(), Err(BuildError::NothingBuilt));
    }

    #[test]
    fn test_double_build_returns_identical_character() {
        let mut builder = WarriorBuilder::default();
        fill(&mut builder);

        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn test_setters_after_build_are_ignored() {
        let mut builder = WarriorBuilder::default();
        fill(&mut builder);
        let first = builder.build().unwrap();

        let mut richer = base_attrs();
        richer.apply_bonus(Attribute::Strength, 100);
        builder.set_stats(richer);

        assert_eq!(builder.build().unwrap(), first);
    }

    #[test]
    fn test_reset_starts_a_distinct_character() {
        let mut builder = WarriorBuilder::default();
        fill(&mut builder);
        let first = builder.build().unwrap();

        fill(&mut builder);
        let second = builder.build().unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut builder = WarlockBuilder::default();
        builder.reset();
        builder.reset();
        builder.set_skills(vec![]);
        builder.set_equips(vec![]);
        builder.set_stats(base_attrs());

        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_guaranteed_content_keeps_lists_non_empty() {
        for builder in [
            &mut WarriorBuilder::default() as &mut dyn CharacterBuilder,
            &mut WarlockBuilder::default(),
        ] {
            builder.reset();
            builder.set_skills(vec![]);
            builder.set_equips(vec![]);
            builder.set_stats(base_attrs());

            let character = builder.build().unwrap();
            assert!(!character.skills.is_empty());
            assert!(character.equipment.iter().any(|e| e.is_weapon()));
            assert!(character.equipment.iter().any(|e| e.is_armor()));
        }
    }
}
