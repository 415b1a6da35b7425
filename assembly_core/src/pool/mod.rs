//! The component pool and its loading.
//!
//! A `ComponentPool` is loaded once at process start from a structured source
//! with three top-level arrays (`weapons`, `armors`, `skills`) and is
//! read-only for the rest of the run. A missing or malformed source is a hard
//! `LoadError`; assembly is unavailable until a load succeeds.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use character_rules::{EquipmentItem, SkillItem};

/// Errors that can occur when loading a component pool.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error (including an absent source file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Source file extension is neither `.json` nor `.toml`.
    #[error("Unsupported pool format: {0}")]
    UnsupportedFormat(String),

    /// A record violated a data invariant.
    #[error("Invalid pool item {id}: {reason}")]
    InvalidItem { id: String, reason: String },
}

/// A weapon record as it appears in the pool source.
#[derive(Debug, Clone, Deserialize)]
struct WeaponRecord {
    id: String,
    name: String,
    durability: u32,
    damage: i32,
}

/// An armor record as it appears in the pool source.
#[derive(Debug, Clone, Deserialize)]
struct ArmorRecord {
    id: String,
    name: String,
    durability: u32,
    defense: i32,
}

/// The raw pool source: three top-level named arrays.
#[derive(Debug, Deserialize)]
struct PoolSource {
    weapons: Vec<WeaponRecord>,
    armors: Vec<ArmorRecord>,
    skills: Vec<SkillItem>,
}

/// The immutable in-memory table of available components.
///
/// Three flat, order-preserving lists; sampling is by index, not by id.
#[derive(Debug, Clone)]
pub struct ComponentPool {
    weapons: Vec<EquipmentItem>,
    armors: Vec<EquipmentItem>,
    skills: Vec<SkillItem>,
}

impl ComponentPool {
    /// Load a pool from a JSON source string.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let source: PoolSource = serde_json::from_str(json)?;
        Self::from_source(source)
    }

    /// Load a pool from a TOML source string.
    pub fn from_toml_str(text: &str) -> Result<Self, LoadError> {
        let source: PoolSource = toml::from_str(text)?;
        Self::from_source(source)
    }

    /// Load a pool from a file on disk, dispatching on the extension.
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let parse: fn(&str) -> Result<Self, LoadError> =
            match path.extension().and_then(|e| e.to_str()) {
                Some("json") => Self::from_json_str,
                Some("toml") => Self::from_toml_str,
                other => {
                    return Err(LoadError::UnsupportedFormat(
                        other.unwrap_or("<none>").to_string(),
                    ))
                }
            };
        let content = std::fs::read_to_string(path)?;
        parse(&content)
    }

    fn from_source(source: PoolSource) -> Result<Self, LoadError> {
        let weapons = source
            .weapons
            .into_iter()
            .map(|w| {
                check_durability(&w.id, w.durability)?;
                Ok(EquipmentItem::weapon(w.id, w.name, w.durability, w.damage))
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        let armors = source
            .armors
            .into_iter()
            .map(|a| {
                check_durability(&a.id, a.durability)?;
                Ok(EquipmentItem::armor(a.id, a.name, a.durability, a.defense))
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        let pool = Self {
            weapons,
            armors,
            skills: source.skills,
        };
        info!(
            weapons = pool.weapons.len(),
            armors = pool.armors.len(),
            skills = pool.skills.len(),
            "component pool loaded"
        );
        Ok(pool)
    }

    /// All known weapons, in source order.
    pub fn weapons(&self) -> &[EquipmentItem] {
        &self.weapons
    }

    /// All known armors, in source order.
    pub fn armors(&self) -> &[EquipmentItem] {
        &self.armors
    }

    /// All known skills, in source order.
    pub fn skills(&self) -> &[SkillItem] {
        &self.skills
    }
}

fn check_durability(id: &str, durability: u32) -> Result<(), LoadError> {
    if durability == 0 {
        return Err(LoadError::InvalidItem {
            id: id.to_string(),
            reason: "durability must be positive".to_string(),
        });
    }
    Ok(())
}
