// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tag store: per-document tag lists over an injected key-value medium.
//!
//! Each document's tags live under their own key (`doc-tags:<doc id>`) as a
//! JSON array. There's no central tag table - the set of known tags is
//! whatever shows up across all documents, de-duplicated by id.
//!
//! `tag()` and `untag()` are read-modify-write. Each runs under a lock for
//! its document id so two threads adding different tags to the same
//! document can't lose one of the writes. The lock covers this store
//! instance only; another process writing the same medium is not
//! coordinated with. Lock entries are created on first write to a document
//! and dropped again by `clear()`, so the table tracks live documents.
//!
//! Storage errors are never swallowed. A caller that filters search results
//! by tag needs to know when the tag data couldn't be read.

mod file;
mod store;

pub use file::FileStore;
pub use store::{KeyValueStore, MemoryStore};

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::Tag;

/// Key prefix for per-document tag records.
pub const KEY_PREFIX: &str = "doc-tags:";

/// Color given to tags created without one.
pub const DEFAULT_TAG_COLOR: &str = "#3b82f6";

fn record_key(doc_id: &str) -> String {
    format!("{}{}", KEY_PREFIX, doc_id)
}

pub struct TagStore<S> {
    store: S,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: KeyValueStore> TagStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// The underlying key-value medium.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn doc_lock(&self, doc_id: &str) -> Arc<Mutex<()>> {
        Arc::clone(
            self.locks
                .lock()
                .entry(doc_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }

    fn read(&self, key: &str) -> Result<Vec<Tag>, StoreError> {
        match self.store.get(key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&self, key: &str, tags: &[Tag]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(tags).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &raw)
    }

    /// Allocate a new tag with a random id. Not persisted until attached.
    pub fn create_tag(&self, name: &str, color: Option<&str>) -> Tag {
        Tag {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            color: color.unwrap_or(DEFAULT_TAG_COLOR).to_string(),
        }
    }

    /// Tags recorded for `doc_id`; empty if none.
    pub fn tags_for(&self, doc_id: &str) -> Result<Vec<Tag>, StoreError> {
        self.read(&record_key(doc_id))
    }

    /// Attach `tag` to `doc_id`. Returns `false` (and writes nothing) if a
    /// tag with the same id is already attached.
    pub fn tag(&self, doc_id: &str, tag: Tag) -> Result<bool, StoreError> {
        let lock = self.doc_lock(doc_id);
        let _guard = lock.lock();

        let key = record_key(doc_id);
        let mut tags = self.read(&key)?;
        if tags.iter().any(|t| t.id == tag.id) {
            return Ok(false);
        }

        tracing::debug!(doc_id, tag_id = %tag.id, tag_name = %tag.name, "tagging document");
        tags.push(tag);
        self.write(&key, &tags)?;
        Ok(true)
    }

    /// Detach the tag with `tag_id` from `doc_id`. Returns `false` (and
    /// writes nothing) if it wasn't attached.
    pub fn untag(&self, doc_id: &str, tag_id: &str) -> Result<bool, StoreError> {
        let lock = self.doc_lock(doc_id);
        let _guard = lock.lock();

        let key = record_key(doc_id);
        let mut tags = self.read(&key)?;
        let before = tags.len();
        tags.retain(|t| t.id != tag_id);
        if tags.len() == before {
            return Ok(false);
        }

        tracing::debug!(doc_id, tag_id, "untagging document");
        self.write(&key, &tags)?;
        Ok(true)
    }

    /// Drop every tag from `doc_id`, e.g. when the document leaves the
    /// collection.
    pub fn clear(&self, doc_id: &str) -> Result<(), StoreError> {
        let lock = self.doc_lock(doc_id);
        let result = {
            let _guard = lock.lock();
            self.write(&record_key(doc_id), &[])
        };
        self.release_lock(doc_id, &lock);
        result
    }

    /// Drop the lock entry for `doc_id` unless another caller still holds it.
    fn release_lock(&self, doc_id: &str, lock: &Arc<Mutex<()>>) {
        let mut locks = self.locks.lock();
        // One reference in the table, one held by the caller.
        if Arc::strong_count(lock) == 2 {
            locks.remove(doc_id);
        }
    }

    /// Every tag attached to any document, de-duplicated by id.
    ///
    /// Records are scanned in key order and the first occurrence of an id
    /// wins, so the result is deterministic for a given store.
    pub fn all_tags(&self) -> Result<Vec<Tag>, StoreError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut tags = Vec::new();

        for key in self.store.keys_with_prefix(KEY_PREFIX)? {
            for tag in self.read(&key)? {
                if seen.insert(tag.id.clone()) {
                    tags.push(tag);
                }
            }
        }
        Ok(tags)
    }

    /// Ids of documents carrying the tag with `tag_id`, in key order.
    pub fn documents_with_tag(&self, tag_id: &str) -> Result<Vec<String>, StoreError> {
        let mut doc_ids = Vec::new();
        for key in self.store.keys_with_prefix(KEY_PREFIX)? {
            if self.read(&key)?.iter().any(|t| t.id == tag_id) {
                doc_ids.push(key[KEY_PREFIX.len()..].to_string());
            }
        }
        Ok(doc_ids)
    }

    /// Does `doc_id` carry at least one tag whose name is in `names`?
    ///
    /// Names compare by exact string equality. An untagged document never
    /// passes, whatever the filter.
    pub fn has_any_tag_named(&self, doc_id: &str, names: &[String]) -> Result<bool, StoreError> {
        Ok(self
            .tags_for(doc_id)?
            .iter()
            .any(|t| names.iter().any(|name| *name == t.name)))
    }
}
