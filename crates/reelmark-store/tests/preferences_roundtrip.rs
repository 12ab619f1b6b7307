use reelmark_store::{FAVORITES_KEY, FileStore, PreferenceStore, RATINGS_KEY};
use reelmark_types::{MovieId, Rating};
use std::collections::BTreeMap;
use tempfile::TempDir;

#[test]
fn test_mutated_mappings_survive_a_fresh_session() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    {
        let mut store = PreferenceStore::open(FileStore::new(temp_dir.path()));

        let mut favorites: BTreeMap<MovieId, bool> = store.load(FAVORITES_KEY);
        favorites.insert(MovieId::from("tt0111161"), true);
        favorites.insert(MovieId::from("tt0068646"), false);
        store.save(FAVORITES_KEY, &favorites)?;

        let mut ratings: BTreeMap<MovieId, Rating> = store.load(RATINGS_KEY);
        ratings.insert(MovieId::from("tt0111161"), Rating::new(5)?);
        ratings.insert(MovieId::from("tt0068646"), Rating::new(1)?);
        store.save(RATINGS_KEY, &ratings)?;
    }

    let reopened = PreferenceStore::open(FileStore::new(temp_dir.path()));
    let favorites: BTreeMap<MovieId, bool> = reopened.load(FAVORITES_KEY);
    let ratings: BTreeMap<MovieId, Rating> = reopened.load(RATINGS_KEY);

    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites.get("tt0111161"), Some(&true));
    assert_eq!(favorites.get("tt0068646"), Some(&false));
    assert_eq!(ratings.get("tt0111161").map(|r| r.stars()), Some(5));
    assert_eq!(ratings.get("tt0068646").map(|r| r.stars()), Some(1));

    assert_eq!(reopened.favorite_ids(), vec![MovieId::from("tt0111161")]);
    Ok(())
}

#[test]
fn test_toggle_and_rate_are_persisted_immediately() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let id = MovieId::from("tt0133093");

    let mut store = PreferenceStore::open(FileStore::new(temp_dir.path()));
    assert!(store.toggle_favorite(&id)?);
    store.set_rating(&id, 3)?;

    let on_disk = std::fs::read_to_string(temp_dir.path().join("favorites.json"))?;
    assert_eq!(on_disk, r#"{"tt0133093":true}"#);
    let on_disk = std::fs::read_to_string(temp_dir.path().join("ratings.json"))?;
    assert_eq!(on_disk, r#"{"tt0133093":3}"#);

    let reopened = PreferenceStore::open(FileStore::new(temp_dir.path()));
    assert!(reopened.is_favorite(&id));
    assert_eq!(reopened.rating(&id).stars(), 3);
    Ok(())
}

#[test]
fn test_unparsable_file_is_treated_as_empty() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("favorites.json"), "garbage")?;

    let mut store = PreferenceStore::open(FileStore::new(temp_dir.path()));
    assert!(!store.has_favorites());

    // The next mutation overwrites the bad entry
    store.toggle_favorite(&MovieId::from("tt1"))?;
    let on_disk = std::fs::read_to_string(temp_dir.path().join("favorites.json"))?;
    assert_eq!(on_disk, r#"{"tt1":true}"#);
    Ok(())
}
