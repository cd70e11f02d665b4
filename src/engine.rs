//! Query evaluation over a [`ContentStore`].
//!
//! Both entry points are read-only. They work on a snapshot of the store, so
//! a query never observes a record that is only partially created, and all
//! validation happens before the snapshot is taken.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::construct::{AnalyzedString, ContentStore};
use crate::error::{Result, StringscopeError};
use crate::filter::FilterSet;
use crate::translator::translate;

#[derive(Debug, Serialize)]
pub struct FilteredStrings {
    pub data: Vec<Arc<AnalyzedString>>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

#[derive(Debug, Serialize)]
pub struct InterpretedStrings {
    pub data: Vec<Arc<AnalyzedString>>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

pub struct QueryEngine<'store> {
    store: &'store ContentStore,
}

impl<'store> QueryEngine<'store> {
    pub fn new(store: &'store ContentStore) -> Self {
        Self { store }
    }

    pub fn filter_explicit(&self, filters: FilterSet) -> FilteredStrings {
        let data = self.matching(&filters);
        FilteredStrings { count: data.len(), data, filters_applied: filters }
    }

    /// Translation failures are passed on untouched so that callers can tell
    /// conflicting filters apart from queries that could not be understood.
    pub fn filter_by_natural_language(&self, query: &str) -> Result<InterpretedStrings> {
        if query.trim().is_empty() {
            return Err(StringscopeError::MissingQuery);
        }
        let parsed_filters = translate(query)?;
        debug!(query, filters = ?parsed_filters, "translated query");
        let data = self.matching(&parsed_filters);
        Ok(InterpretedStrings {
            count: data.len(),
            data,
            interpreted_query: InterpretedQuery { original: query.to_owned(), parsed_filters },
        })
    }

    // Oldest first, ties broken by id.
    fn matching(&self, filters: &FilterSet) -> Vec<Arc<AnalyzedString>> {
        let mut data: Vec<_> = self
            .store
            .snapshot()
            .into_iter()
            .filter(|analyzed| filters.matches(analyzed))
            .collect();
        data.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        data
    }
}
