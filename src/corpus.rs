// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a document collection from disk.
//!
//! Text extraction (PDF, OCR, ...) happens upstream; by the time documents
//! get here they are plain text. Two layouts are accepted:
//!
//! - a JSON file holding an array of [`Document`]s
//! - a directory of text files, one document per file, id = path relative
//!   to the directory
//!
//! Directory loading reads files in parallel with the `parallel` feature.
//! Files that aren't valid UTF-8 are skipped with a warning. Either way the
//! collection comes back sorted by path, so search tie-breaks are stable
//! across runs.

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CorpusError;
use crate::types::Document;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CorpusError + '_ {
    move |source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Load a collection from a JSON file or a directory of text files.
pub fn load_corpus(path: &Path) -> Result<Vec<Document>, CorpusError> {
    let metadata = fs::metadata(path).map_err(io_error(path))?;
    if metadata.is_dir() {
        load_directory(path)
    } else {
        load_json(path)
    }
}

/// Parse a JSON array of documents. Ids must be unique.
pub fn load_json(path: &Path) -> Result<Vec<Document>, CorpusError> {
    let raw = fs::read_to_string(path).map_err(io_error(path))?;
    let docs: Vec<Document> =
        serde_json::from_str(&raw).map_err(|source| CorpusError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::with_capacity(docs.len());
    for doc in &docs {
        if !seen.insert(doc.id.as_str()) {
            return Err(CorpusError::DuplicateId(doc.id.clone()));
        }
    }

    tracing::debug!(path = %path.display(), documents = docs.len(), "loaded JSON corpus");
    Ok(docs)
}

/// Every regular file under `dir`, recursively, sorted by path.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current).map_err(io_error(&current))? {
            let entry = entry.map_err(io_error(&current))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(io_error(&path))?;
            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Read one text file as a document. `Ok(None)` if it isn't UTF-8.
fn read_document(root: &Path, path: &Path) -> Result<Option<Document>, CorpusError> {
    let bytes = fs::read(path).map_err(io_error(path))?;
    let size = bytes.len() as u64;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => {
            tracing::warn!(path = %path.display(), "skipping file that is not UTF-8 text");
            return Ok(None);
        }
    };

    let upload_date: DateTime<Utc> = fs::metadata(path)
        .and_then(|m| m.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now());

    let relative = path.strip_prefix(root).unwrap_or(path);
    let id = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| id.clone());
    let doc_type = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "text/plain".to_string());

    Ok(Some(Document {
        id,
        name,
        content,
        size,
        doc_type,
        upload_date,
    }))
}

fn collect_documents(
    results: Vec<Result<Option<Document>, CorpusError>>,
) -> Result<Vec<Document>, CorpusError> {
    let mut docs = Vec::with_capacity(results.len());
    for result in results {
        if let Some(doc) = result? {
            docs.push(doc);
        }
    }
    Ok(docs)
}

/// Load every text file under `dir` as a document.
#[cfg(feature = "parallel")]
pub fn load_directory(dir: &Path) -> Result<Vec<Document>, CorpusError> {
    let files = list_files(dir)?;
    let results: Vec<_> = files.par_iter().map(|path| read_document(dir, path)).collect();
    let docs = collect_documents(results)?;
    tracing::debug!(path = %dir.display(), documents = docs.len(), "loaded directory corpus");
    Ok(docs)
}

/// Load every text file under `dir` as a document.
#[cfg(not(feature = "parallel"))]
pub fn load_directory(dir: &Path) -> Result<Vec<Document>, CorpusError> {
    let files = list_files(dir)?;
    let results: Vec<_> = files.iter().map(|path| read_document(dir, path)).collect();
    let docs = collect_documents(results)?;
    tracing::debug!(path = %dir.display(), documents = docs.len(), "loaded directory corpus");
    Ok(docs)
}

/// Load every text file under `dir`, advancing `progress` per file.
#[cfg(feature = "parallel")]
pub fn load_directory_with_progress(
    dir: &Path,
    progress: &ProgressBar,
) -> Result<Vec<Document>, CorpusError> {
    let files = list_files(dir)?;
    progress.set_length(files.len() as u64);

    let results: Vec<_> = files
        .par_iter()
        .map(|path| {
            let doc = read_document(dir, path);
            progress.inc(1);
            doc
        })
        .collect();

    collect_documents(results)
}
