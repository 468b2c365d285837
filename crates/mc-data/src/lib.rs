//! Runtime-loaded Minecraft version registry.
//!
//! Builds five small id→identifier palettes (entities, block types, block
//! states, biomes, air blocks) from two JSON manifests read off disk once at
//! startup. No network fetch, no codegen: the manifests are plain data
//! files shipped alongside the binary.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("config file missing or unreadable: {path}: {source}")]
    ConfigMissing {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("config file malformed: {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Debug, Deserialize)]
struct BlockEntry {
    id: u32,
    #[serde(default)]
    states: BTreeMap<String, u32>,
    class: String,
}

#[derive(Debug, Deserialize)]
struct BiomeEntry {
    id: u32,
}

/// A dense `id -> identifier` lookup table, downsized to the highest id
/// actually present in the source manifest.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    entries: Vec<Option<String>>,
}

impl Palette {
    fn with_capacity(max_id: usize) -> Self {
        Self {
            entries: vec![None; max_id + 1],
        }
    }

    fn set(&mut self, id: usize, identifier: String) {
        if id >= self.entries.len() {
            self.entries.resize(id + 1, None);
        }
        self.entries[id] = Some(identifier);
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&str> {
        self.entries.get(id as usize)?.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The full set of palettes for one game version, shared read-only across
/// every connection in the process.
#[derive(Debug, Clone, Default)]
pub struct GameVersion {
    pub protocol_version: i32,
    pub entities: Palette,
    pub block_types: Palette,
    pub block_states: Palette,
    pub biomes: Palette,
    air_types: Vec<String>,
}

impl GameVersion {
    /// Load a version registry from `blocks_path`/`biomes_path`. `entities`
    /// has no manifest of its own at this protocol revision — the caller
    /// that knows its version's entity list seeds it via
    /// [`GameVersion::with_entities`] after load.
    pub fn load(protocol_version: i32, blocks_path: &Path, biomes_path: &Path) -> Result<Self> {
        let blocks_raw = fs::read_to_string(blocks_path).map_err(|source| DataError::ConfigMissing {
            path: blocks_path.display().to_string(),
            source,
        })?;
        let blocks: BTreeMap<String, BlockEntry> =
            serde_json::from_str(&blocks_raw).map_err(|source| DataError::Malformed {
                path: blocks_path.display().to_string(),
                source,
            })?;

        let biomes_raw = fs::read_to_string(biomes_path).map_err(|source| DataError::ConfigMissing {
            path: biomes_path.display().to_string(),
            source,
        })?;
        let biome_entries: BTreeMap<String, BiomeEntry> =
            serde_json::from_str(&biomes_raw).map_err(|source| DataError::Malformed {
                path: biomes_path.display().to_string(),
                source,
            })?;

        let max_block_id = blocks.values().map(|b| b.id).max().unwrap_or(0) as usize;
        let max_state_id = blocks
            .values()
            .flat_map(|b| b.states.values().copied())
            .max()
            .unwrap_or(0) as usize;
        let max_biome_id = biome_entries.values().map(|b| b.id).max().unwrap_or(0) as usize;

        let mut block_types = Palette::with_capacity(max_block_id);
        let mut block_states = Palette::with_capacity(max_state_id);
        let mut air_types = Vec::new();

        for (identifier, entry) in &blocks {
            block_types.set(entry.id as usize, identifier.clone());
            for &state_id in entry.states.values() {
                block_states.set(state_id as usize, identifier.clone());
            }
            if entry.class == "AirBlock" {
                air_types.push(identifier.clone());
            }
        }

        let mut biomes = Palette::with_capacity(max_biome_id);
        for (identifier, entry) in &biome_entries {
            biomes.set(entry.id as usize, identifier.clone());
        }

        tracing::info!(
            blocks = block_types.len(),
            states = block_states.len(),
            biomes = biomes.len(),
            air_types = air_types.len(),
            "loaded game version registry"
        );

        Ok(Self {
            protocol_version,
            entities: Palette::default(),
            block_types,
            block_states,
            biomes,
            air_types,
        })
    }

    /// Returns a copy of `self` with the entity palette replaced.
    #[must_use]
    pub fn with_entities(mut self, entities: Palette) -> Self {
        self.entities = entities;
        self
    }

    /// Whether `block_id` (a block-type id, not a state id) names an air
    /// variant. Linear scan over `air_types` — vanilla has three entries.
    #[must_use]
    pub fn is_air(&self, block_id: u32) -> bool {
        self.block_types
            .get(block_id)
            .is_some_and(|identifier| self.air_types.iter().any(|air| air == identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("mc-data-test-{name}-{}", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_builds_palettes_and_detects_air() {
        let blocks = write_temp(
            "blocks",
            r#"{
                "minecraft:air": {"id": 0, "states": {"0": 0}, "class": "AirBlock"},
                "minecraft:stone": {"id": 1, "states": {"1": 1}, "class": "Block"}
            }"#,
        );
        let biomes = write_temp("biomes", r#"{"minecraft:plains": {"id": 1}}"#);

        let version = GameVersion::load(763, &blocks, &biomes).unwrap();
        assert_eq!(version.block_types.get(0), Some("minecraft:air"));
        assert_eq!(version.block_types.get(1), Some("minecraft:stone"));
        assert_eq!(version.block_states.get(1), Some("minecraft:stone"));
        assert!(version.is_air(0));
        assert!(!version.is_air(1));
        assert_eq!(version.biomes.get(1), Some("minecraft:plains"));

        let _ = fs::remove_file(blocks);
        let _ = fs::remove_file(biomes);
    }

    #[test]
    fn missing_file_is_config_missing() {
        let missing = std::env::temp_dir().join("mc-data-test-does-not-exist.json");
        let biomes = write_temp("biomes2", r#"{}"#);
        let err = GameVersion::load(763, &missing, &biomes).unwrap_err();
        assert!(matches!(err, DataError::ConfigMissing { .. }));
        let _ = fs::remove_file(biomes);
    }
}
