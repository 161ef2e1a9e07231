//! In-memory filter registry
//!
//! Hosts register their filter implementations under the identifiers used in
//! configuration; compiler construction looks them up here.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::ports::{AssetFilter, FilterRegistry};
use crate::domain::value_objects::FilterId;

#[derive(Default, Clone)]
pub struct InMemoryFilterRegistry {
    filters: HashMap<FilterId, Arc<dyn AssetFilter>>,
}

impl InMemoryFilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter, replacing any previous one with the same id
    pub fn register(&mut self, id: impl Into<FilterId>, filter: impl AssetFilter + 'static) {
        self.filters.insert(id.into(), Arc::new(filter));
    }

    pub fn with_filter(
        mut self,
        id: impl Into<FilterId>,
        filter: impl AssetFilter + 'static,
    ) -> Self {
        self.register(id, filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl FilterRegistry for InMemoryFilterRegistry {
    fn get(&self, id: &FilterId) -> Option<Arc<dyn AssetFilter>> {
        self.filters.get(id).cloned()
    }
}
