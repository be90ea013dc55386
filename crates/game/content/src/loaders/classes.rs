//! Character class catalog loader.
//!
//! Loads class templates from RON files and checks them before any
//! character is rolled from them.

use std::collections::HashSet;
use std::path::Path;

use cavern_core::{ClassTemplate, GameConfig};

use crate::loaders::{LoadResult, read_file};

const BUNDLED: &str = include_str!("../../data/classes.ron");

/// Loader for the class catalog from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load the class catalog from a RON file.
    ///
    /// RON format: `Vec<ClassTemplate>`
    ///
    /// # Errors
    ///
    /// Fails when the file is unreadable or malformed, when the catalog is
    /// empty, when two classes share a name, or when a class starts with
    /// more items than the pack holds or with no hit points.
    pub fn load(path: &Path) -> LoadResult<Vec<ClassTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid class catalog {}: {}", path.display(), e))
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> LoadResult<Vec<ClassTemplate>> {
        Self::parse(BUNDLED)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ClassTemplate>> {
        let classes: Vec<ClassTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class catalog RON: {}", e))?;

        if classes.is_empty() {
            anyhow::bail!("class catalog is empty");
        }

        let mut seen = HashSet::new();
        for class in &classes {
            if !seen.insert(class.name.as_str()) {
                anyhow::bail!("duplicate class '{}'", class.name);
            }
            if class.hp <= 0 {
                anyhow::bail!("class '{}' starts with {} hp", class.name, class.hp);
            }
            if class.items.len() > GameConfig::INVENTORY_SLOTS {
                anyhow::bail!(
                    "class '{}' starts with {} items, the pack holds {}",
                    class.name,
                    class.items.len(),
                    GameConfig::INVENTORY_SLOTS
                );
            }
            if let Some(spell) = class
                .known_spells
                .iter()
                .find(|spell| **spell >= GameConfig::SPELL_COUNT)
            {
                anyhow::bail!("class '{}' knows unknown spell {}", class.name, spell);
            }
        }

        tracing::debug!(count = classes.len(), "loaded class catalog");
        Ok(classes)
    }

    /// Looks a class up by name.
    pub fn find<'a>(classes: &'a [ClassTemplate], name: &str) -> LoadResult<&'a ClassTemplate> {
        classes
            .iter()
            .find(|class| class.name == name)
            .ok_or_else(|| anyhow::anyhow!("no class named '{}'", name))
    }
}
