// Library Module
// Static configuration: built-in tables, JSON loading, validation

pub mod types;
mod degrees;
mod scales;
mod tunings;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Library, LibraryError, LibraryResult, Tuning, DEFAULT_FRET_COUNT};

use crate::theory::ChromaticAlphabet;

impl Library {
    /// The built-in tables
    pub fn standard() -> Self {
        Library {
            alphabet: ChromaticAlphabet::new(scales::standard_alphabet()),
            scale_intervals: scales::standard_scale_intervals(),
            chord_intervals: scales::standard_chord_intervals(),
            chord_degrees: degrees::standard_chord_degrees(),
            interval_names: scales::standard_interval_names(),
            tunings: tunings::standard_tunings(),
            fret_count: DEFAULT_FRET_COUNT,
        }
    }

    /// Parse and validate a library from JSON
    pub fn from_json(json: &str) -> LibraryResult<Self> {
        let library: Library = serde_json::from_str(json)?;
        library.validate()?;
        Ok(library)
    }

    /// Serialize to pretty JSON, the format `from_json` reads
    pub fn to_json(&self) -> LibraryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a library file
    pub fn load(path: &Path) -> LibraryResult<Self> {
        let contents = fs::read_to_string(path)?;
        let library = Library::from_json(&contents)?;
        log::info!(
            "Loaded library from {}: {} tunings, {} frets",
            path.display(),
            library.tunings.len(),
            library.fret_count
        );
        Ok(library)
    }

    /// Load a library file, or fall back to the built-in tables when the
    /// file does not exist
    pub fn load_or_standard(path: &Path) -> LibraryResult<Self> {
        if path.exists() {
            Library::load(path)
        } else {
            log::warn!(
                "No library file at {}, using built-in tables",
                path.display()
            );
            Ok(Library::standard())
        }
    }

    /// Write this library as JSON, creating parent directories
    pub fn save(&self, path: &Path) -> LibraryResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Where a user library file is looked up by default
pub fn default_library_path() -> LibraryResult<PathBuf> {
    let config_dir = dirs::config_dir().ok_or(LibraryError::NoConfigDir)?;
    Ok(config_dir.join("fretboard").join("library.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::{ChordType, ScaleType, TheoryError};
    use tempfile::TempDir;

    #[test]
    fn test_standard_library_is_valid() {
        let library = Library::standard();
        library.validate().unwrap();
        assert_eq!(library.alphabet().len(), 12);
        assert_eq!(library.fret_count(), 16);
    }

    #[test]
    fn test_lookups() {
        let library = Library::standard();
        assert_eq!(
            library.scale_pattern(ScaleType::MajorScale).unwrap(),
            &[0, 2, 4, 5, 7, 9, 11]
        );
        assert_eq!(library.chord_pattern(ChordType::Seventh).unwrap(), &[0, 2, 4, 6]);
        assert_eq!(
            library.degree_labels(ChordType::Triad, ScaleType::NaturalMinor).unwrap()[0],
            "i"
        );
        assert_eq!(library.interval_name(7).unwrap(), "5");
        assert!(library.interval_name(12).is_err());
    }

    #[test]
    fn test_tuning_lookup() {
        let library = Library::standard();
        let tuning = library.tuning("E_Standard").unwrap();
        assert_eq!(tuning.name, "e_standard");
        assert_eq!(tuning.strings, vec!["E", "A", "D", "G", "B", "E"]);
        assert_eq!(tuning.top_down().next().map(String::as_str), Some("E"));

        assert_eq!(
            library.tuning("nashville"),
            Err(TheoryError::not_found("tuning", "nashville"))
        );
    }

    #[test]
    fn test_tuning_names_sorted() {
        let library = Library::standard();
        let names = library.tuning_names();
        assert!(names.contains(&"drop_d"));
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_empty_tuning_rejected() {
        assert!(matches!(
            Tuning::new("silent", vec![]),
            Err(TheoryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_with_tuning_validates_notes() {
        let tuning = Tuning::new("Seven_String", vec!["B".into(), "E".into(), "A".into()]).unwrap();
        let library = Library::standard().with_tuning(tuning).unwrap();
        assert_eq!(library.tuning("seven_string").unwrap().string_count(), 3);

        let bad = Tuning::new("bad", vec!["H".into()]).unwrap();
        assert!(matches!(
            Library::standard().with_tuning(bad),
            Err(LibraryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_zero_frets_rejected() {
        assert!(matches!(
            Library::standard().with_fret_count(0),
            Err(LibraryError::InvalidArgument(_))
        ));
        assert_eq!(Library::standard().with_fret_count(24).unwrap().fret_count(), 24);
    }

    #[test]
    fn test_alphabet_must_be_twelve_distinct_notes() {
        let mut library = Library::standard();
        library.alphabet = ChromaticAlphabet::new(vec!["C".into(); 12]);
        assert!(matches!(library.validate(), Err(LibraryError::InvalidArgument(_))));

        library.alphabet = ChromaticAlphabet::new(vec!["C".into(), "D".into()]);
        assert!(matches!(library.validate(), Err(LibraryError::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_degree_labels_is_incomplete() {
        let mut library = Library::standard();
        library
            .chord_degrees
            .get_mut(&ChordType::Seventh)
            .unwrap()
            .remove(&ScaleType::LocrianMode);
        assert!(matches!(
            library.validate(),
            Err(LibraryError::ConfigurationIncomplete(_))
        ));
    }

    #[test]
    fn test_degree_label_count_must_match_scale() {
        let mut library = Library::standard();
        library
            .chord_degrees
            .get_mut(&ChordType::Triad)
            .unwrap()
            .insert(ScaleType::PentatonicMajor, vec!["I".to_string()]);
        assert!(matches!(
            library.validate(),
            Err(LibraryError::ConfigurationIncomplete(_))
        ));
    }

    #[test]
    fn test_missing_scale_pattern_is_incomplete() {
        let mut library = Library::standard();
        library.scale_intervals.remove(&ScaleType::DorianMode);
        assert!(matches!(
            library.validate(),
            Err(LibraryError::ConfigurationIncomplete(_))
        ));
    }

    #[test]
    fn test_scale_offsets_stay_within_octave() {
        let mut library = Library::standard();
        library
            .scale_intervals
            .insert(ScaleType::MajorScale, vec![0, 2, 14]);
        assert!(matches!(library.validate(), Err(LibraryError::InvalidArgument(_))));

        let mut library = Library::standard();
        library.chord_intervals.insert(ChordType::Triad, vec![]);
        assert!(matches!(library.validate(), Err(LibraryError::InvalidArgument(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let library = Library::standard();
        let json = library.to_json().unwrap();
        assert!(json.contains("\"major_scale\""));
        assert_eq!(Library::from_json(&json).unwrap(), library);
    }

    #[test]
    fn test_json_fret_count_defaults() {
        let mut value = serde_json::to_value(Library::standard()).unwrap();
        value.as_object_mut().unwrap().remove("fret_count");
        let library = Library::from_json(&value.to_string()).unwrap();
        assert_eq!(library.fret_count(), DEFAULT_FRET_COUNT);
    }

    #[test]
    fn test_json_rejects_malformed_input() {
        assert!(matches!(
            Library::from_json("{\"alphabet\": 3}"),
            Err(LibraryError::Serialization(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("library.json");

        let library = Library::standard().with_fret_count(12).unwrap();
        library.save(&path).unwrap();

        let loaded = Library::load(&path).unwrap();
        assert_eq!(loaded.fret_count(), 12);
        assert_eq!(loaded, library);
    }

    #[test]
    fn test_load_or_standard_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        assert_eq!(Library::load_or_standard(&missing).unwrap(), Library::standard());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.json");

        let mut library = Library::standard();
        library.interval_names.pop();
        std::fs::write(&path, serde_json::to_string(&library).unwrap()).unwrap();

        assert!(matches!(
            Library::load(&path),
            Err(LibraryError::ConfigurationIncomplete(_))
        ));
    }

    fn standard_json() -> serde_json::Value {
        serde_json::to_value(Library::standard()).unwrap()
    }

    #[test]
    fn test_json_rejects_repeated_degree_labels() {
        let mut value = standard_json();
        value["chord_degrees"]["triad"]["major_scale"] = serde_json::to_value(vec!["I"; 7]).unwrap();
        assert!(matches!(
            Library::from_json(&value.to_string()),
            Err(LibraryError::ConfigurationIncomplete(_))
        ));
    }

    #[test]
    fn test_json_rejects_huge_chord_step() {
        let mut value = standard_json();
        value["chord_intervals"]["triad"] = serde_json::json!([0, 2, u64::MAX]);
        assert!(matches!(
            Library::from_json(&value.to_string()),
            Err(LibraryError::InvalidArgument(_))
        ));

        let mut value = standard_json();
        value["chord_intervals"]["seventh"] = serde_json::json!([0, 2, 4, 12]);
        assert!(matches!(
            Library::from_json(&value.to_string()),
            Err(LibraryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_json_rejects_uppercase_tuning_names() {
        let mut value = standard_json();
        value["tunings"]["Open_G"] = serde_json::json!(["D", "G", "D", "G", "B", "D"]);
        assert!(matches!(
            Library::from_json(&value.to_string()),
            Err(LibraryError::InvalidArgument(_))
        ));

        let tuning = Tuning::new("Open_G", vec!["D".into(), "G".into()]).unwrap();
        let library = Library::standard().with_tuning(tuning).unwrap();
        assert_eq!(library.tuning("OPEN_G").unwrap().strings, vec!["D", "G"]);
    }
}
