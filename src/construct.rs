use std::sync::{Arc, PoisonError, RwLock};

// keeps the analyzed strings by their content hash
use core::hash::BuildHasherDefault;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use seahash::SeaHasher;

// used for creation timestamps
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

// our own stuff that we need
use crate::analysis::{analyze, content_hash, StringProperties};
use crate::error::{Result, StringscopeError};

pub type OtherHasher = BuildHasherDefault<SeaHasher>;

// ------------- AnalyzedString -------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedString {
    id: String, // always the content hash of the value
    value: String,
    properties: StringProperties,
    created_at: DateTime<Utc>,
}

impl AnalyzedString {
    pub fn new(value: String) -> Self {
        Self::with_created_at(value, Utc::now())
    }
    pub fn with_created_at(value: String, created_at: DateTime<Utc>) -> Self {
        let properties = analyze(&value);
        Self {
            id: properties.content_hash().to_owned(),
            value,
            properties,
            created_at,
        }
    }
    // Fields are only exposed through getters, which keeps
    // records immutable once they have been created.
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn value(&self) -> &str {
        &self.value
    }
    pub fn properties(&self) -> &StringProperties {
        &self.properties
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// ------------- StringKeeper -------------
#[derive(Debug, Default)]
pub struct StringKeeper {
    kept: HashMap<String, Arc<AnalyzedString>, OtherHasher>,
}
impl StringKeeper {
    /// Keeps the string unless one with the same id is already kept, in which
    /// case the kept one is returned together with `true`.
    pub fn keep(&mut self, analyzed: AnalyzedString) -> (Arc<AnalyzedString>, bool) {
        match self.kept.entry(analyzed.id().to_owned()) {
            Entry::Occupied(e) => (Arc::clone(e.get()), true),
            Entry::Vacant(e) => (Arc::clone(e.insert(Arc::new(analyzed))), false),
        }
    }
    /// Interprets the token as an id first and only then as a raw value.
    pub fn resolve(&self, token: &str) -> Option<&Arc<AnalyzedString>> {
        self.kept
            .get(token)
            .or_else(|| self.kept.get(&content_hash(token)))
    }
    pub fn release(&mut self, token: &str) -> Option<Arc<AnalyzedString>> {
        let id = self.resolve(token)?.id().to_owned();
        self.kept.remove(&id)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Arc<AnalyzedString>> {
        self.kept.values()
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
}

// ------------- ContentStore -------------
// A single reader/writer lock guards the whole keeper. Creation and deletion
// take it exclusively, lookups and snapshots share it.
//
// Nothing panics while the lock is held, so a poisoned lock still guards a
// consistent keeper and is simply entered.
#[derive(Debug, Default)]
pub struct ContentStore {
    keeper: RwLock<StringKeeper>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzes and stores a previously unseen value. Exactly one of several
    /// concurrent creations of the same value succeeds.
    pub fn create(&self, value: impl Into<String>) -> Result<Arc<AnalyzedString>> {
        // analysis is pure, so it happens before taking the lock
        self.insert(AnalyzedString::new(value.into()))
    }

    /// Stores an already analyzed string, rejecting it if its id is taken.
    pub fn insert(&self, analyzed: AnalyzedString) -> Result<Arc<AnalyzedString>> {
        let mut keeper = self.keeper.write().unwrap_or_else(PoisonError::into_inner);
        let (kept, previously_kept) = keeper.keep(analyzed);
        if previously_kept {
            debug!(id = kept.id(), "rejected duplicate content");
            return Err(StringscopeError::DuplicateContent { id: kept.id().to_owned() });
        }
        debug!(id = kept.id(), length = kept.properties().length(), "kept string");
        Ok(kept)
    }

    pub fn get_by_value_or_id(&self, token: &str) -> Option<Arc<AnalyzedString>> {
        let keeper = self.keeper.read().unwrap_or_else(PoisonError::into_inner);
        keeper.resolve(token).cloned()
    }

    /// Returns whether anything was deleted.
    pub fn delete_by_value_or_id(&self, token: &str) -> bool {
        let mut keeper = self.keeper.write().unwrap_or_else(PoisonError::into_inner);
        match keeper.release(token) {
            Some(released) => {
                debug!(id = released.id(), "released string");
                true
            }
            None => false,
        }
    }

    /// A point-in-time copy of all records, in no particular order.
    pub fn snapshot(&self) -> Vec<Arc<AnalyzedString>> {
        let keeper = self.keeper.read().unwrap_or_else(PoisonError::into_inner);
        keeper.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.keeper.read().unwrap_or_else(PoisonError::into_inner).len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
