//! ParticipantStore - file-backed participant collection

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use shared::{Category, DataPaths, Participant, RegistroError, Result, ValidationError};

/// File-backed store for participant records.
///
/// Every mutating operation is a whole-file load-modify-save cycle; the file
/// is replaced via a temporary sibling and rename so an interrupted write
/// leaves the previous collection intact. There is no locking: the intended
/// deployment is a single interactive operator.
#[derive(Debug, Clone)]
pub struct ParticipantStore {
    path: PathBuf,
}

impl ParticipantStore {
    /// Create a store over the given collection file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store over the standard location in a data directory
    pub fn open(paths: &DataPaths) -> Self {
        Self::new(paths.participants_file())
    }

    /// All stored records, in file order. A missing file is an empty
    /// collection, not an error.
    pub fn load_all(&self) -> Result<Vec<Participant>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let records: Vec<Participant> = serde_json::from_str(&content)?;
        Ok(records)
    }

    /// Validate and append one record, then persist the whole collection.
    pub fn append(&self, candidate: Participant) -> Result<()> {
        candidate.validate()?;

        let mut records = self.load_all()?;
        if records.iter().any(|r| r.email == candidate.email) {
            return Err(ValidationError::DuplicateEmail {
                email: candidate.email,
            }
            .into());
        }

        records.push(candidate);
        self.save(&records)
    }

    /// Remove the record with the given email and persist the remainder.
    ///
    /// Returns the removed record. Email is the unique key, so at most one
    /// record can match.
    pub fn remove(&self, email: &str) -> Result<Participant> {
        let mut records = self.load_all()?;
        let position = records.iter().position(|r| r.email == email);

        match position {
            Some(idx) => {
                let removed = records.remove(idx);
                self.save(&records)?;
                Ok(removed)
            }
            None => Err(RegistroError::NotFound {
                email: email.to_string(),
            }),
        }
    }

    /// Count stored records per category. Categories with no records are
    /// omitted rather than zero-filled.
    pub fn category_counts(&self) -> Result<HashMap<Category, usize>> {
        let mut counts = HashMap::new();
        for record in self.load_all()? {
            *counts.entry(record.category).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Replace the persisted collection with the given records.
    fn save(&self, records: &[Participant]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to a sibling and rename so a crash mid-write cannot truncate
        // the existing collection.
        let json = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(records = records.len(), path = %self.path.display(), "collection persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &std::path::Path) -> ParticipantStore {
        ParticipantStore::new(dir.join("users.json"))
    }

    fn participant(name: &str, age: u32, email: &str, category: Category) -> Participant {
        Participant::new(name, age, email, category, "Instituto Test")
    }

    // ============== Load Tests ==============

    #[test]
    fn test_load_all_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        assert_eq!(store.load_all().unwrap(), Vec::new());
    }

    #[test]
    fn test_load_all_preserves_file_order() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .append(participant("Ana", 17, "ana@colegio.edu", Category::School))
            .unwrap();
        store
            .append(participant("Luis", 21, "luis@uni.edu", Category::University))
            .unwrap();
        store
            .append(participant("Marta", 30, "marta@mail.com", Category::Open))
            .unwrap();

        let names: Vec<_> = store
            .load_all()
            .unwrap()
            .into_iter()
            .map(|p| p.full_name)
            .collect();
        assert_eq!(names, vec!["Ana", "Luis", "Marta"]);
    }

    // ============== Append Tests ==============

    #[test]
    fn test_append_then_load_contains_candidate() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        let p = participant("Ana Torres", 17, "ana@colegio.edu", Category::School);
        store.append(p.clone()).unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records, vec![p]);
    }

    #[test]
    fn test_append_underage_fails_and_leaves_storage_unchanged() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        let result = store.append(participant("Niño", 9, "nino@colegio.edu", Category::School));
        assert!(matches!(
            result,
            Err(RegistroError::Validation(ValidationError::InvalidAge { age: 9 }))
        ));
        // No file should have been created at all.
        assert!(!dir.path().join("users.json").exists());
    }

    #[test]
    fn test_append_malformed_email_fails() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        for bad in ["bob@", "no-at-sign"] {
            let result = store.append(participant("Bob", 20, bad, Category::Open));
            assert!(
                matches!(
                    result,
                    Err(RegistroError::Validation(ValidationError::InvalidEmail { .. }))
                ),
                "'{}' should be rejected",
                bad
            );
        }
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_duplicate_email_fails_regardless_of_other_fields() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .append(participant("Ana", 17, "ana@colegio.edu", Category::School))
            .unwrap();

        let result = store.append(participant(
            "Otra Ana",
            25,
            "ana@colegio.edu",
            Category::Open,
        ));
        assert!(matches!(
            result,
            Err(RegistroError::Validation(ValidationError::DuplicateEmail { .. }))
        ));
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_email_uniqueness_is_case_sensitive() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .append(participant("Ana", 17, "Ana@colegio.edu", Category::School))
            .unwrap();
        // Exact-match uniqueness: a different casing is a different key.
        store
            .append(participant("Ana", 17, "ana@colegio.edu", Category::School))
            .unwrap();

        assert_eq!(store.load_all().unwrap().len(), 2);
    }

    #[test]
    fn test_append_creates_data_directory_on_demand() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep").join("data");
        let store = ParticipantStore::new(nested.join("users.json"));

        store
            .append(participant("Ana", 17, "ana@colegio.edu", Category::School))
            .unwrap();
        assert!(nested.join("users.json").exists());
    }

    #[test]
    fn test_append_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .append(participant("Ana", 17, "ana@colegio.edu", Category::School))
            .unwrap();
        assert!(!dir.path().join("users.json.tmp").exists());
    }

    // ============== Remove Tests ==============

    #[test]
    fn test_remove_missing_email_is_not_found() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .append(participant("Ana", 17, "ana@colegio.edu", Category::School))
            .unwrap();

        let result = store.remove("ghost@nowhere.org");
        assert!(matches!(result, Err(RegistroError::NotFound { .. })));
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_returns_record_and_persists_remainder() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .append(participant("Ana", 17, "ana@colegio.edu", Category::School))
            .unwrap();
        store
            .append(participant("Luis", 21, "luis@uni.edu", Category::University))
            .unwrap();

        let removed = store.remove("ana@colegio.edu").unwrap();
        assert_eq!(removed.full_name, "Ana");

        let remaining = store.load_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].email, "luis@uni.edu");
    }

    #[test]
    fn test_remove_on_empty_store() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        assert!(matches!(
            store.remove("any@mail.com"),
            Err(RegistroError::NotFound { .. })
        ));
    }

    // ============== Category Counts Tests ==============

    #[test]
    fn test_category_counts() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .append(participant("A", 15, "a@colegio.edu", Category::School))
            .unwrap();
        store
            .append(participant("B", 16, "b@colegio.edu", Category::School))
            .unwrap();
        store
            .append(participant("C", 22, "c@uni.edu", Category::University))
            .unwrap();

        let counts = store.category_counts().unwrap();
        assert_eq!(counts.get(&Category::School), Some(&2));
        assert_eq!(counts.get(&Category::University), Some(&1));
        // Zero-count categories are omitted, not zero-filled.
        assert!(!counts.contains_key(&Category::Open));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_category_counts_empty_store() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        assert!(store.category_counts().unwrap().is_empty());
    }

    // ============== File Format Tests ==============

    #[test]
    fn test_persisted_file_uses_localized_field_names() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .append(participant("Ana", 17, "ana@colegio.edu", Category::School))
            .unwrap();

        let content = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
        assert!(content.contains("\"nombre\""));
        assert!(content.contains("\"edad\""));
        assert!(content.contains("\"correo\""));
        assert!(content.contains("\"categoria\""));
        assert!(content.contains("\"institucion\""));
        assert!(content.contains("\"Colegio\""));
        // Pretty-printed, one field per line.
        assert!(content.contains('\n'));
    }

    #[test]
    fn test_reads_collection_written_by_prior_tooling() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(
            &path,
            r#"[
    {
        "nombre": "María José",
        "edad": 14,
        "correo": "maria@colegio.edu.pe",
        "categoria": "Colegio",
        "institucion": "Colegio Nacional"
    }
]"#,
        )
        .unwrap();

        let store = ParticipantStore::new(path);
        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name, "María José");
        assert_eq!(records[0].category, Category::School);
    }

    #[test]
    fn test_corrupt_file_surfaces_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = ParticipantStore::new(path);
        assert!(matches!(store.load_all(), Err(RegistroError::Json(_))));
    }
}
