use reelmark_types::{FavoritesMap, MovieId, Rating, RatingsMap};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashSet};

use crate::kv::KeyValueStore;
use crate::Result;

pub const FAVORITES_KEY: &str = "favorites";
pub const RATINGS_KEY: &str = "ratings";

/// Owner of the favorites and ratings maps
///
/// Both maps are loaded once when the store is opened and written back whole
/// after every mutation. Nothing else reads or writes the backing entries.
pub struct PreferenceStore<S: KeyValueStore> {
    backend: S,
    favorites: FavoritesMap,
    ratings: RatingsMap,
    /// Ids persisted with an explicit `false` flag; un-favoriting them keeps the entry
    unset_on_disk: HashSet<MovieId>,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn open(backend: S) -> Self {
        let mut store = Self {
            backend,
            favorites: FavoritesMap::new(),
            ratings: RatingsMap::new(),
            unset_on_disk: HashSet::new(),
        };
        store.favorites = store.load(FAVORITES_KEY);
        store.ratings = store.load(RATINGS_KEY);
        store.unset_on_disk = unset_ids(&store.favorites);

        tracing::debug!(
            favorites = store.favorites.len(),
            ratings = store.ratings.len(),
            "preferences loaded"
        );
        store
    }

    /// Read a named mapping. Absent or unparsable entries yield an empty map;
    /// individual entries that do not decode as `V` are dropped.
    pub fn load<V: DeserializeOwned>(&self, key: &str) -> BTreeMap<MovieId, V> {
        match self.backend.get(key) {
            Ok(Some(raw)) => decode(key, &raw),
            Ok(None) => BTreeMap::new(),
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read stored preferences");
                BTreeMap::new()
            }
        }
    }

    /// Serialize the whole mapping and replace the stored entry.
    ///
    /// Saving under the favorites or ratings key also replaces the in-memory
    /// map, so later reads and mutations start from what was written.
    pub fn save<V: Serialize>(&mut self, key: &str, mapping: &BTreeMap<MovieId, V>) -> Result<()> {
        let raw = self.write(key, mapping)?;
        match key {
            FAVORITES_KEY => {
                self.favorites = decode(key, &raw);
                self.unset_on_disk = unset_ids(&self.favorites);
            }
            RATINGS_KEY => self.ratings = decode(key, &raw),
            _ => {}
        }
        Ok(())
    }

    fn write<V: Serialize>(&mut self, key: &str, mapping: &BTreeMap<MovieId, V>) -> Result<String> {
        let raw = serde_json::to_string(mapping)?;
        self.backend.set(key, &raw)?;
        Ok(raw)
    }

    /// Flip the favorite flag of `id` and persist. Returns the new flag.
    ///
    /// Un-favoriting writes `false` back for ids that were stored as `false`
    /// and drops the entry otherwise, so toggling twice leaves the stored map
    /// as it was.
    pub fn toggle_favorite(&mut self, id: &MovieId) -> Result<bool> {
        let now_favorite = !self.is_favorite(id);
        if now_favorite {
            self.favorites.insert(id.clone(), true);
        } else if self.unset_on_disk.contains(id) {
            self.favorites.insert(id.clone(), false);
        } else {
            self.favorites.remove(id);
        }

        let favorites = self.favorites.clone();
        self.write(FAVORITES_KEY, &favorites)?;

        tracing::info!(id = %id, favorite = now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    /// Set the rating of `id` to `stars` (1..=5) and persist.
    pub fn set_rating(&mut self, id: &MovieId, stars: u8) -> Result<Rating> {
        let rating = Rating::from_stars(stars)?;
        self.ratings.insert(id.clone(), rating);

        let ratings = self.ratings.clone();
        self.write(RATINGS_KEY, &ratings)?;

        tracing::info!(id = %id, stars, "rating set");
        Ok(rating)
    }

    pub fn is_favorite(&self, id: &MovieId) -> bool {
        self.favorites.get(id).copied().unwrap_or(false)
    }

    pub fn rating(&self, id: &MovieId) -> Rating {
        self.ratings.get(id).copied().unwrap_or(Rating::UNRATED)
    }

    /// Ids whose favorite flag is set, in key order.
    pub fn favorite_ids(&self) -> Vec<MovieId> {
        self.favorites
            .iter()
            .filter(|(_, flag)| **flag)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn has_favorites(&self) -> bool {
        self.favorites.values().any(|flag| *flag)
    }

    pub fn favorites(&self) -> &FavoritesMap {
        &self.favorites
    }

    pub fn ratings(&self) -> &RatingsMap {
        &self.ratings
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}

/// Decode a stored mapping. Unparsable input yields an empty map; individual
/// entries that do not decode as `V` are dropped.
fn decode<V: DeserializeOwned>(key: &str, raw: &str) -> BTreeMap<MovieId, V> {
    let entries: BTreeMap<MovieId, serde_json::Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(key, error = %err, "stored preferences are malformed, starting empty");
            return BTreeMap::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|(id, value)| match serde_json::from_value::<V>(value) {
            Ok(value) => Some((id, value)),
            Err(err) => {
                tracing::warn!(key, id = %id, error = %err, "dropping malformed entry");
                None
            }
        })
        .collect()
}

fn unset_ids(favorites: &FavoritesMap) -> HashSet<MovieId> {
    favorites
        .iter()
        .filter(|(_, flag)| !**flag)
        .map(|(id, _)| id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn id(s: &str) -> MovieId {
        MovieId::from(s)
    }

    #[test]
    fn test_absent_entries_load_empty() {
        let store = PreferenceStore::open(MemoryStore::new());
        assert!(store.favorites().is_empty());
        assert!(store.ratings().is_empty());
        assert!(!store.has_favorites());
    }

    #[test]
    fn test_malformed_entry_fails_open() {
        let backend = MemoryStore::new()
            .with_entry(FAVORITES_KEY, "{not json")
            .with_entry(RATINGS_KEY, "[1,2,3]");
        let store = PreferenceStore::open(backend);
        assert!(store.favorites().is_empty());
        assert!(store.ratings().is_empty());
    }

    #[test]
    fn test_out_of_range_ratings_are_dropped() {
        let backend =
            MemoryStore::new().with_entry(RATINGS_KEY, r#"{"tt1": 4, "tt2": 9, "tt3": "x"}"#);
        let store = PreferenceStore::open(backend);
        assert_eq!(store.ratings().len(), 1);
        assert_eq!(store.rating(&id("tt1")).stars(), 4);
        assert_eq!(store.rating(&id("tt2")), Rating::UNRATED);
    }

    #[test]
    fn test_toggle_twice_leaves_persisted_map_unchanged() -> Result<()> {
        let mut store = PreferenceStore::open(MemoryStore::new());
        store.toggle_favorite(&id("tt9"))?;
        let before = store.backend().get(FAVORITES_KEY)?;

        assert!(store.toggle_favorite(&id("tt001"))?);
        assert!(!store.toggle_favorite(&id("tt001"))?);

        assert_eq!(store.backend().get(FAVORITES_KEY)?, before);
        assert!(!store.is_favorite(&id("tt001")));
        Ok(())
    }

    #[test]
    fn test_toggle_twice_restores_true_flag() -> Result<()> {
        let backend = MemoryStore::new().with_entry(FAVORITES_KEY, r#"{"tt001":true}"#);
        let mut store = PreferenceStore::open(backend);

        assert!(!store.toggle_favorite(&id("tt001"))?);
        assert!(store.toggle_favorite(&id("tt001"))?);
        assert_eq!(
            store.backend().get(FAVORITES_KEY)?.as_deref(),
            Some(r#"{"tt001":true}"#)
        );
        Ok(())
    }

    #[test]
    fn test_toggle_twice_keeps_stored_false_flag() -> Result<()> {
        let backend =
            MemoryStore::new().with_entry(FAVORITES_KEY, r#"{"tt001":true,"tt002":false}"#);
        let mut store = PreferenceStore::open(backend);
        let before = store.backend().get(FAVORITES_KEY)?;

        assert!(store.toggle_favorite(&id("tt002"))?);
        assert!(store.is_favorite(&id("tt002")));
        assert!(!store.toggle_favorite(&id("tt002"))?);

        assert_eq!(store.backend().get(FAVORITES_KEY)?, before);
        assert_eq!(store.favorites().get(&id("tt002")), Some(&false));
        Ok(())
    }

    #[test]
    fn test_save_replaces_the_in_memory_maps() -> Result<()> {
        let mut store = PreferenceStore::open(MemoryStore::new());

        let mut favorites = store.load::<bool>(FAVORITES_KEY);
        favorites.insert(id("tt001"), true);
        favorites.insert(id("tt002"), false);
        store.save(FAVORITES_KEY, &favorites)?;
        let mut ratings = store.load::<Rating>(RATINGS_KEY);
        ratings.insert(id("tt001"), Rating::new(3)?);
        store.save(RATINGS_KEY, &ratings)?;

        assert!(store.is_favorite(&id("tt001")));
        assert_eq!(store.rating(&id("tt001")).stars(), 3);

        store.toggle_favorite(&id("tt009"))?;
        store.set_rating(&id("tt009"), 5)?;
        assert_eq!(
            store.backend().get(FAVORITES_KEY)?.as_deref(),
            Some(r#"{"tt001":true,"tt002":false,"tt009":true}"#)
        );
        assert_eq!(
            store.backend().get(RATINGS_KEY)?.as_deref(),
            Some(r#"{"tt001":3,"tt009":5}"#)
        );

        // A saved `false` stays explicit across a toggle pair
        store.toggle_favorite(&id("tt002"))?;
        store.toggle_favorite(&id("tt002"))?;
        assert_eq!(store.favorites().get(&id("tt002")), Some(&false));
        Ok(())
    }

    #[test]
    fn test_set_rating_rejects_out_of_range_without_writing() {
        let mut store = PreferenceStore::open(MemoryStore::new());
        assert!(store.set_rating(&id("tt1"), 0).is_err());
        assert!(store.set_rating(&id("tt1"), 6).is_err());
        assert_eq!(store.backend().get(RATINGS_KEY).unwrap(), None);
    }

    #[test]
    fn test_favorite_ids_skip_false_flags() {
        let backend =
            MemoryStore::new().with_entry(FAVORITES_KEY, r#"{"tt001": true, "tt002": false}"#);
        let store = PreferenceStore::open(backend);
        assert_eq!(store.favorite_ids(), vec![id("tt001")]);
        assert!(store.has_favorites());
    }
}
