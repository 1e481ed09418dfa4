//! Local persistence adapter
//!
//! Each registry serializes to one key in a local string-keyed store;
//! every value is a stringified map from id to the entity's flat record.
//! The store is backed by one JSON file per key under a root directory.
//!
//! Loading happens in dependency order: the person subtype registries
//! first, then movies, so movie references resolve eagerly. A corrupt or
//! invalid record is skipped and reported without aborting the whole
//! load; `StoreConfig::strict` upgrades that to an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::StoreConfig;
use crate::error::{FilmbaseError, Result};
use crate::models::person::{Person, PersonSubtype};
use crate::models::records::{ActorRecord, DirectorRecord, MovieRecord, PersonRecord};
use crate::models::validation::Violation;
use crate::registry::{Catalog, Entity};

/// Storage key for the shared person map
pub const KEY_PEOPLE: &str = "people";
/// Storage key for the actor registry
pub const KEY_ACTORS: &str = "actors";
/// Storage key for the director registry
pub const KEY_DIRECTORS: &str = "directors";
/// Storage key for the movie registry
pub const KEY_MOVIES: &str = "movies";

/// A local string-keyed store backed by one JSON file per key
#[derive(Debug, Clone)]
pub struct LocalStore {
    config: StoreConfig,
}

impl LocalStore {
    /// Create a store from a full configuration
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Create a store with default configuration rooted at `root`
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig {
            root: root.into(),
            ..StoreConfig::default()
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.config.root.join(format!("{key}.json"))
    }

    /// Read the raw value stored under a key; `None` if the key was
    /// never written
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| FilmbaseError::storage(key, e.to_string()))
    }

    /// Write the raw value stored under a key
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.config.root)?;
        fs::write(self.path_for(key), value)
            .map_err(|e| FilmbaseError::storage(key, e.to_string()))
    }

    // ---------------------------------------------------------------
    // Load
    // ---------------------------------------------------------------

    /// Load every registry into a fresh catalog.
    ///
    /// Person subtypes are loaded before movies. Loading replays the
    /// validating constructors, so invariants hold for stored data just
    /// as for form input. The `people` key is derived state and is
    /// rebuilt from the subtype registries rather than read back.
    pub fn retrieve_all(&self) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        for subtype in Person::SUBTYPES {
            match subtype {
                PersonSubtype::Actor => self.load_actors(&mut catalog)?,
                PersonSubtype::Director => self.load_directors(&mut catalog)?,
            }
        }
        self.load_movies(&mut catalog)?;
        Ok(catalog)
    }

    fn load_actors(&self, catalog: &mut Catalog) -> Result<()> {
        for (key, record) in self.read_records::<ActorRecord>(KEY_ACTORS)? {
            if let Err(violation) = catalog.add_actor(record.into()) {
                self.skip_or_fail(KEY_ACTORS, &key, violation)?;
            }
        }
        info!("{} actor records loaded.", catalog.actors().len());
        Ok(())
    }

    fn load_directors(&self, catalog: &mut Catalog) -> Result<()> {
        for (key, record) in self.read_records::<DirectorRecord>(KEY_DIRECTORS)? {
            if let Err(violation) = catalog.add_director(record.into()) {
                self.skip_or_fail(KEY_DIRECTORS, &key, violation)?;
            }
        }
        info!("{} director records loaded.", catalog.directors().len());
        Ok(())
    }

    fn load_movies(&self, catalog: &mut Catalog) -> Result<()> {
        for (key, record) in self.read_records::<MovieRecord>(KEY_MOVIES)? {
            if let Err(violation) = catalog.add_movie(record.into()) {
                self.skip_or_fail(KEY_MOVIES, &key, violation)?;
            }
        }
        info!("{} movie records loaded.", catalog.movies().len());
        Ok(())
    }

    /// Deserialize one stored registry value into raw records, isolating
    /// per-record failures
    fn read_records<R: DeserializeOwned>(&self, key: &str) -> Result<Vec<(String, R)>> {
        let Some(raw) = self.get(key)? else {
            return Ok(Vec::new());
        };
        let entries: FxHashMap<String, serde_json::Value> = serde_json::from_str(&raw)
            .map_err(|e| FilmbaseError::storage(key, format!("not a valid record map: {e}")))?;
        let mut records = Vec::with_capacity(entries.len());
        for (id, value) in entries {
            match serde_json::from_value::<R>(value) {
                Ok(record) => records.push((id, record)),
                Err(e) if self.config.strict => {
                    return Err(FilmbaseError::storage(
                        key,
                        format!("corrupt record {id}: {e}"),
                    ));
                }
                Err(e) => warn!("Skipping corrupt {key} record {id}: {e}"),
            }
        }
        // ascending id order, matching the registries' display order
        records.sort_by_key(|(id, _)| id.parse::<u32>().unwrap_or(u32::MAX));
        Ok(records)
    }

    fn skip_or_fail(&self, key: &str, record_id: &str, violation: Violation) -> Result<()> {
        if self.config.strict {
            return Err(violation.into());
        }
        warn!(
            "{} while deserializing {key} record {record_id}: {violation}",
            violation.kind()
        );
        Ok(())
    }

    // ---------------------------------------------------------------
    // Save
    // ---------------------------------------------------------------

    /// Save every registry, one key per registry plus the shared person
    /// map
    pub fn save_all(&self, catalog: &Catalog) -> Result<()> {
        let people: BTreeMap<String, PersonRecord> = catalog
            .people()
            .iter()
            .map(|p| (p.key(), p.to_record()))
            .collect();
        let actors: BTreeMap<String, ActorRecord> = catalog
            .actors()
            .iter()
            .map(|a| (a.key(), a.to_record()))
            .collect();
        let directors: BTreeMap<String, DirectorRecord> = catalog
            .directors()
            .iter()
            .map(|d| (d.key(), d.to_record()))
            .collect();
        let movies: BTreeMap<String, MovieRecord> = catalog
            .movies()
            .iter()
            .map(|m| (m.key(), m.to_record()))
            .collect();
        self.write_records(KEY_PEOPLE, &people)?;
        self.write_records(KEY_ACTORS, &actors)?;
        self.write_records(KEY_DIRECTORS, &directors)?;
        self.write_records(KEY_MOVIES, &movies)?;
        info!(
            "{} person, {} actor, {} director and {} movie records saved.",
            people.len(),
            actors.len(),
            directors.len(),
            movies.len()
        );
        Ok(())
    }

    fn write_records<R: Serialize>(&self, key: &str, records: &BTreeMap<String, R>) -> Result<()> {
        let value = if self.config.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        self.set(key, &value)
    }
}
