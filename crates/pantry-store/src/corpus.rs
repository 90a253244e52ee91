//! Recipe corpus ingestion.
//!
//! The platform is agnostic to where recipes come from; anything that
//! deserializes into a list of [`RecipeRecord`]s can be fit. This module
//! covers the two provenances the CLI supports out of the box: a JSON file,
//! and a built-in fallback corpus for first-run demos and tests.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use pantry_core::RecipeRecord;

use crate::error::{StoreError, StoreResult};

/// Loads a corpus from a JSON file holding an array of recipe records.
///
/// Ingredient normalization happens later, at fit time; records are
/// returned as authored.
pub fn load_records(path: &Path) -> StoreResult<Vec<RecipeRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
        _ => StoreError::Io(e),
    })?;
    let records: Vec<RecipeRecord> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| StoreError::Corrupt(e.to_string()))?;

    tracing::debug!(path = %path.display(), recipes = records.len(), "loaded recipe corpus");
    Ok(records)
}

/// The built-in fallback corpus.
#[must_use]
pub fn sample_records() -> Vec<RecipeRecord> {
    vec![
        RecipeRecord {
            name: "Chicken Salad".to_string(),
            description: "A healthy chicken salad.".to_string(),
            ingredients: vec![
                "Chicken".to_string(),
                "Lettuce".to_string(),
                "Tomato".to_string(),
            ],
        },
        RecipeRecord {
            name: "Tomato Soup".to_string(),
            description: "Classic tomato soup.".to_string(),
            ingredients: vec!["Tomato".to_string(), "Onion".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_records_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(
            &path,
            r#"[{"name": "Omelette", "ingredients": ["Eggs", "Butter"]}]"#,
        )
        .unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Omelette");
        assert_eq!(records[0].description, "");
    }

    #[test]
    fn missing_corpus_file_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let result = load_records(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn malformed_corpus_file_reports_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, "[{]").unwrap();
        assert!(matches!(load_records(&path), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn sample_corpus_is_usable_for_fitting() {
        let records = sample_records();
        assert_eq!(records.len(), 2);
        let recommender = pantry_engine::Recommender::fit(records);
        assert_eq!(recommender.recipe_count(), 2);
    }
}
