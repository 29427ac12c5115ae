//! Fixture Loader
//!
//! Reads a JSON file into memory once at startup. Nothing here retries or
//! falls back: a fixture is a build-time asset, so a missing or malformed file
//! stops the process before it starts accepting connections.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{FixtureError, Result};

/// An immutable JSON payload loaded from disk
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    /// Where the fixture was read from (empty for in-memory fixtures)
    path: PathBuf,
    /// Parsed contents
    value: Value,
}

impl Fixture {
    /// Read and parse the fixture at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let bytes = fs::read(&path).map_err(|source| FixtureError::Io {
            path: path.clone(),
            source,
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|source| FixtureError::Parse {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, value })
    }

    /// Build a fixture from an in-memory value
    pub fn from_value(value: Value) -> Self {
        Self {
            path: PathBuf::new(),
            value,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Convert into the sequence form used for random selection.
    ///
    /// The top-level value must be a JSON array. An empty array is accepted
    /// here; responders decide how to answer when there is nothing to pick.
    pub fn into_answers(self) -> Result<AnswerSet> {
        match self.value {
            Value::Array(answers) => Ok(AnswerSet { answers }),
            other => Err(FixtureError::NotASequence {
                path: self.path,
                found: json_kind(&other),
            }),
        }
    }
}

/// Ordered sequence of canned responses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSet {
    answers: Vec<Value>,
}

impl AnswerSet {
    pub fn new(answers: Vec<Value>) -> Self {
        Self { answers }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.answers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.answers.iter()
    }

    /// Whether `value` is one of the answers
    pub fn contains(&self, value: &Value) -> bool {
        self.answers.contains(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_object_fixture() {
        let file = write_fixture(r#"{"hotels": [{"name": "Alpenhof"}], "total": 1}"#);

        let fixture = Fixture::load(file.path()).unwrap();
        assert_eq!(fixture.path(), file.path());
        assert_eq!(fixture.value()["total"], json!(1));
        assert_eq!(fixture.value()["hotels"][0]["name"], json!("Alpenhof"));
    }

    #[test]
    fn test_load_preserves_key_order() {
        let file = write_fixture(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#);

        let fixture = Fixture::load(file.path()).unwrap();
        let serialized = serde_json::to_string(fixture.value()).unwrap();
        assert_eq!(serialized, r#"{"zeta":1,"alpha":2,"mid":3}"#);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("answers.json");

        let err = Fixture::load(&missing).unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
        assert_eq!(err.path(), missing.as_path());
    }

    #[test]
    fn test_load_invalid_json() {
        let file = write_fixture("[{\"answer\": ");

        let err = Fixture::load(file.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Parse { .. }));
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_into_answers() {
        let fixture = Fixture::from_value(json!([{"answer": "a"}, {"answer": "b"}]));

        let answers = fixture.into_answers().unwrap();
        assert_eq!(answers.len(), 2);
        assert!(answers.contains(&json!({"answer": "b"})));
        assert!(!answers.contains(&json!({"answer": "c"})));
        assert_eq!(answers.get(0), Some(&json!({"answer": "a"})));
        assert_eq!(answers.get(2), None);
    }

    #[test]
    fn test_into_answers_accepts_empty_array() {
        let answers = Fixture::from_value(json!([])).into_answers().unwrap();
        assert!(answers.is_empty());
    }

    #[test]
    fn test_into_answers_rejects_object() {
        let file = write_fixture(r#"{"answer": "only one"}"#);
        let fixture = Fixture::load(file.path()).unwrap();

        let err = fixture.into_answers().unwrap_err();
        match err {
            FixtureError::NotASequence { path, found } => {
                assert_eq!(path, file.path());
                assert_eq!(found, "an object");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
