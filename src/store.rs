//! Preset persistence: one JSON document mapping name to record, kept under
//! a single browser `localStorage` key.

use crate::{defaults, Preset, PresetError, PresetMap};
use log::{debug, info};

/// Fixed storage key holding the whole preset mapping.
pub const STORAGE_KEY: &str = "coachColourPresets";

/// Raw persistence the preset store reads and writes through.
///
/// Absent or malformed state loads as an empty map; the caller is expected
/// to run [`PresetStore::ensure_default`] afterwards.
pub trait StorageBackend {
    fn load(&self) -> PresetMap;
    fn store(&mut self, presets: &PresetMap);
}

/// In-memory backend for native runs and tests. Keeps the serialized
/// document so corrupted-state handling behaves like the real thing.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    raw: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: &str) -> Self {
        MemoryStorage {
            raw: Some(raw.to_string()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> PresetMap {
        self.raw
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }

    fn store(&mut self, presets: &PresetMap) {
        self.raw = serde_json::to_string(presets).ok();
    }
}

/// `localStorage`-backed storage under [`STORAGE_KEY`]. Only functional in
/// the browser; native builds compile it but must not call it.
#[derive(Debug, Default)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn load(&self) -> PresetMap {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::get(STORAGE_KEY).unwrap_or_default()
    }

    fn store(&mut self, presets: &PresetMap) {
        use gloo_storage::{LocalStorage, Storage};
        if let Err(err) = LocalStorage::set(STORAGE_KEY, presets) {
            log::warn!("failed to persist presets: {}", err);
        }
    }
}

/// Owns all access to the persisted preset mapping.
pub struct PresetStore<B: StorageBackend> {
    backend: B,
}

impl PresetStore<BrowserStorage> {
    pub fn browser() -> Self {
        PresetStore::new(BrowserStorage)
    }
}

impl<B: StorageBackend> PresetStore<B> {
    pub fn new(backend: B) -> Self {
        PresetStore { backend }
    }

    /// All stored presets; empty when storage is absent or unreadable.
    pub fn list(&self) -> PresetMap {
        self.backend.load()
    }

    pub fn get(&self, name: &str) -> Option<Preset> {
        self.backend.load().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.backend.load().contains_key(name)
    }

    /// Guarantees the built-in preset exists with factory values.
    /// Idempotent; persists only when it had to insert.
    pub fn ensure_default(&mut self) -> PresetMap {
        let mut presets = self.backend.load();
        if !presets.contains_key(defaults::PRESET_NAME) {
            presets.insert(defaults::PRESET_NAME.to_string(), Preset::default());
            self.backend.store(&presets);
            info!("restored built-in preset \"{}\"", defaults::PRESET_NAME);
        }
        presets
    }

    /// Upserts a preset. Overwrite confirmation for existing names is the
    /// caller's concern; the interval invariant is not.
    pub fn save(&mut self, name: &str, preset: &Preset) -> Result<(), PresetError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }
        preset.validate()?;
        let mut presets = self.backend.load();
        presets.insert(name.to_string(), preset.clone());
        self.backend.store(&presets);
        debug!("saved preset \"{}\"", name);
        Ok(())
    }

    /// Removes a preset. The built-in preset is protected and the store is
    /// left untouched when deletion is refused.
    pub fn delete(&mut self, name: &str) -> Result<(), PresetError> {
        if name == defaults::PRESET_NAME {
            return Err(PresetError::ProtectedPreset);
        }
        let mut presets = self.backend.load();
        if presets.remove(name).is_none() {
            return Err(PresetError::UnknownPreset(name.to_string()));
        }
        self.backend.store(&presets);
        debug!("deleted preset \"{}\"", name);
        Ok(())
    }

    /// Pretty-printed JSON document containing exactly one name→preset entry.
    pub fn export_document(&self, name: &str) -> Result<String, PresetError> {
        let presets = self.backend.load();
        let preset = presets
            .get(name)
            .ok_or_else(|| PresetError::UnknownPreset(name.to_string()))?;
        let mut single = PresetMap::new();
        single.insert(name.to_string(), preset.clone());
        serde_json::to_string_pretty(&single)
            .map_err(|err| PresetError::InvalidDocument(err.to_string()))
    }

    /// Merges a preset document into the store. The whole document is parsed
    /// before anything is written, so a malformed file changes nothing. For
    /// each colliding name, `overwrite(name)` decides overwrite vs skip.
    ///
    /// Returns the names that were newly added.
    pub fn import<F>(&mut self, document: &str, mut overwrite: F) -> Result<Vec<String>, PresetError>
    where
        F: FnMut(&str) -> bool,
    {
        let incoming = parse_preset_document(document)?;
        let mut presets = self.backend.load();
        let mut added = Vec::new();
        for (name, preset) in incoming {
            if presets.contains_key(&name) {
                if !overwrite(&name) {
                    debug!("import: kept existing \"{}\"", name);
                    continue;
                }
            } else {
                added.push(name.clone());
            }
            presets.insert(name, preset);
        }
        self.backend.store(&presets);
        info!("imported presets: {} new", added.len());
        Ok(added)
    }
}

/// Parses a name→preset JSON document (one or more entries).
pub fn parse_preset_document(text: &str) -> Result<PresetMap, PresetError> {
    serde_json::from_str(text).map_err(|err| PresetError::InvalidDocument(err.to_string()))
}

/// Download name for an exported preset, e.g.
/// `Coach_Colour_Preset_Go/No Go_2026-08-07.json`.
pub fn export_filename(name: &str, iso_date: &str) -> String {
    format!("Coach_Colour_Preset_{}_{}.json", name, iso_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NumMode;

    fn store() -> PresetStore<MemoryStorage> {
        PresetStore::new(MemoryStorage::new())
    }

    fn sample_preset() -> Preset {
        Preset {
            red: false,
            green: false,
            blue: true,
            yellow: true,
            min: 0.5,
            max: 2.5,
            numbers: true,
            num_mode: NumMode::Two,
            split: true,
            ..Preset::default()
        }
    }

    #[test]
    fn empty_storage_lists_nothing() {
        assert!(store().list().is_empty());
    }

    #[test]
    fn corrupted_storage_loads_as_empty_and_default_is_restored() {
        let mut store = PresetStore::new(MemoryStorage::with_raw("{not json"));
        assert!(store.list().is_empty());

        let presets = store.ensure_default();
        assert_eq!(presets.get(defaults::PRESET_NAME), Some(&Preset::default()));
    }

    #[test]
    fn ensure_default_is_idempotent() {
        let mut store = store();
        let first = store.ensure_default();
        let second = store.ensure_default();
        assert_eq!(first, second);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn ensure_default_keeps_other_presets() {
        let mut store = store();
        store.save("Sprints", &sample_preset()).unwrap();
        let presets = store.ensure_default();
        assert!(presets.contains_key("Sprints"));
        assert!(presets.contains_key(defaults::PRESET_NAME));
    }

    #[test]
    fn save_then_list_round_trips() {
        let mut store = store();
        let preset = sample_preset();
        store.save("Sprints", &preset).unwrap();
        assert_eq!(store.list().get("Sprints"), Some(&preset));
    }

    #[test]
    fn save_trims_and_rejects_empty_names() {
        let mut store = store();
        store.save("  Sprints  ", &sample_preset()).unwrap();
        assert!(store.contains("Sprints"));
        assert_eq!(
            store.save("   ", &sample_preset()),
            Err(PresetError::EmptyName)
        );
    }

    #[test]
    fn save_rejects_invalid_intervals() {
        let mut store = store();
        let mut preset = sample_preset();
        preset.min = 3.0;
        preset.max = 1.0;
        assert!(matches!(
            store.save("Bad", &preset),
            Err(PresetError::InvalidInterval { .. })
        ));
        assert!(!store.contains("Bad"));
    }

    #[test]
    fn default_preset_cannot_be_deleted() {
        let mut store = store();
        store.ensure_default();
        let before = store.list();
        assert_eq!(
            store.delete(defaults::PRESET_NAME),
            Err(PresetError::ProtectedPreset)
        );
        assert_eq!(store.list(), before);
    }

    #[test]
    fn delete_removes_saved_presets() {
        let mut store = store();
        store.save("Sprints", &sample_preset()).unwrap();
        store.delete("Sprints").unwrap();
        assert!(!store.contains("Sprints"));
        assert_eq!(
            store.delete("Sprints"),
            Err(PresetError::UnknownPreset("Sprints".to_string()))
        );
    }

    #[test]
    fn export_import_round_trips() {
        let mut store = store();
        let preset = sample_preset();
        store.save("Sprints", &preset).unwrap();
        let document = store.export_document("Sprints").unwrap();

        let mut other = PresetStore::new(MemoryStorage::new());
        let added = other.import(&document, |_| false).unwrap();
        assert_eq!(added, vec!["Sprints".to_string()]);
        assert_eq!(other.get("Sprints"), Some(preset));
    }

    #[test]
    fn export_of_unknown_preset_fails() {
        assert_eq!(
            store().export_document("Nope"),
            Err(PresetError::UnknownPreset("Nope".to_string()))
        );
    }

    #[test]
    fn import_collision_respects_the_overwrite_choice() {
        let mut store = store();
        store.save("Sprints", &sample_preset()).unwrap();

        let mut incoming = sample_preset();
        incoming.min = 4.0;
        incoming.max = 9.0;
        let document = serde_json::to_string(&PresetMap::from([(
            "Sprints".to_string(),
            incoming.clone(),
        )]))
        .unwrap();

        let added = store.import(&document, |_| false).unwrap();
        assert!(added.is_empty());
        assert_eq!(store.get("Sprints"), Some(sample_preset()));

        store.import(&document, |_| true).unwrap();
        assert_eq!(store.get("Sprints"), Some(incoming));
    }

    #[test]
    fn malformed_import_changes_nothing() {
        let mut store = store();
        store.save("Sprints", &sample_preset()).unwrap();
        let before = store.list();

        assert!(matches!(
            store.import("][ definitely not json", |_| true),
            Err(PresetError::InvalidDocument(_))
        ));
        assert!(matches!(
            store.import(r#"{"Sprints": {"red": "nope"}}"#, |_| true),
            Err(PresetError::InvalidDocument(_))
        ));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn import_accepts_original_format_documents() {
        let document = r#"{
            "Go/No Go": {
                "red": true, "green": true, "blue": false, "yellow": false,
                "min": 1, "max": 3, "numbers": false, "numMode": "one",
                "split": false, "dir": "right"
            }
        }"#;
        let mut store = store();
        let added = store.import(document, |_| true).unwrap();
        assert_eq!(added, vec![defaults::PRESET_NAME.to_string()]);
        assert_eq!(store.get(defaults::PRESET_NAME), Some(Preset::default()));
    }

    #[test]
    fn persisted_document_is_a_single_json_mapping() {
        let mut backend = MemoryStorage::new();
        let mut presets = PresetMap::new();
        presets.insert("Sprints".to_string(), sample_preset());
        backend.store(&presets);

        let raw = backend.raw().unwrap();
        assert!(raw.starts_with('{'));
        assert!(raw.contains("\"Sprints\""));
        assert!(raw.contains("\"numMode\":\"two\""));
    }

    #[test]
    fn export_filename_pattern() {
        assert_eq!(
            export_filename("Sprints", "2026-08-07"),
            "Coach_Colour_Preset_Sprints_2026-08-07.json"
        );
    }
}
