//! Integration tests for the JSON file reader.
//!
//! These write real files to a temporary directory and read them back
//! through the `PersonReader` trait object, the way the host uses them.

use sources::{JsonFileReader, PersonReader, ReaderError};
use std::io::Write;
use std::sync::Arc;

const PEOPLE_JSON: &str = r#"[
    { "id": 1, "given_name": "John", "family_name": "Smith",
      "start_date": "2000-10-01", "rating": 7 },
    { "id": 2, "given_name": "Mary", "family_name": "Thomas",
      "start_date": "1971-07-23", "rating": 9, "format_string": "{1}, {0}" }
]"#;

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_reads_people_in_file_order() {
    let file = write_temp(PEOPLE_JSON);
    let reader: Arc<dyn PersonReader> = Arc::new(JsonFileReader::new(file.path()));

    let people = reader.get_people().await.unwrap();

    assert_eq!(people.len(), 2);
    assert_eq!(people[0].id, 1);
    assert_eq!(people[1].id, 2);
    assert_eq!(people[1].to_string(), "Thomas, Mary");
    assert_eq!(people[1].decade(), 1970);
}

#[tokio::test]
async fn test_get_person_by_id() {
    let file = write_temp(PEOPLE_JSON);
    let reader = JsonFileReader::new(file.path());

    let mary = reader.get_person(2).await.unwrap().unwrap();
    assert_eq!(mary.given_name, "Mary");
    assert!(reader.get_person(3).await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let reader = JsonFileReader::new(dir.path().join("nope.json"));

    let err = reader.get_people().await.unwrap_err();
    assert!(matches!(err, ReaderError::Io { .. }));
}

#[tokio::test]
async fn test_malformed_file_is_parse_error() {
    let file = write_temp("{ not json");
    let reader = JsonFileReader::new(file.path());

    let err = reader.get_people().await.unwrap_err();
    assert!(matches!(err, ReaderError::Parse { .. }));
    assert!(err.to_string().contains("Failed to parse"));
}

#[tokio::test]
async fn test_file_is_reread_on_each_fetch() {
    let file = write_temp(PEOPLE_JSON);
    let reader = JsonFileReader::new(file.path());
    assert_eq!(reader.get_people().await.unwrap().len(), 2);

    std::fs::write(file.path(), "[]").unwrap();
    assert!(reader.get_people().await.unwrap().is_empty());
}
