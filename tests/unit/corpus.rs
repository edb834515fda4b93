//! Loading collections from disk.

use docsift::corpus::{list_files, load_corpus};
use docsift::{search_documents, CorpusError, SearchConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_json_collection_with_full_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    fs::write(
        &path,
        r#"[
            {
                "id": "inv-7",
                "name": "invoice.pdf",
                "content": "Invoice total due in thirty days.",
                "size": 48211,
                "type": "application/pdf",
                "uploadDate": "2024-03-01T12:00:00Z"
            }
        ]"#,
    )
    .unwrap();

    let docs = load_corpus(&path).unwrap();
    assert_eq!(docs[0].doc_type, "application/pdf");
    assert_eq!(docs[0].size, 48211);
    assert_eq!(docs[0].upload_date.to_rfc3339(), "2024-03-01T12:00:00+00:00");

    let results = search_documents(&docs, "invoice", &SearchConfig::default());
    assert_eq!(results[0].doc_name, "invoice.pdf");
}

#[test]
fn test_directory_collection_is_searchable() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("notes/2024")).unwrap();
    fs::write(dir.path().join("notes/2024/jan.txt"), "budget review").unwrap();
    fs::write(dir.path().join("readme.md"), "budget budget").unwrap();

    let docs = load_corpus(dir.path()).unwrap();
    let results = search_documents(&docs, "budget", &SearchConfig::default());

    let ids: Vec<&str> = results.iter().map(|r| r.doc_id.as_str()).collect();
    assert_eq!(ids, vec!["readme.md", "notes/2024/jan.txt"]);
}

#[test]
fn test_list_files_sorted() {
    let dir = TempDir::new().unwrap();
    for name in ["c.txt", "a.txt", "b.txt"] {
        fs::write(dir.path().join(name), "x").unwrap();
    }
    let files = list_files(dir.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
}

#[test]
fn test_json_must_be_an_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    fs::write(&path, r#"{"id": "1"}"#).unwrap();
    assert!(matches!(
        load_corpus(&path).unwrap_err(),
        CorpusError::InvalidJson { .. }
    ));
}
