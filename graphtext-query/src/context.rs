//! Execution context for property-function evaluation
//!
//! The `ExecutionContext` carries what the surrounding query engine supplies
//! to a search function at evaluation time: a keyed registry of search
//! providers and the dataset's active graph set.

use graphtext_ir::GraphRef;
use graphtext_search_protocol::SearchProvider;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Well-known context key for the active full-text search provider
pub const SEARCH_PROVIDER_KEY: &str = "graphtext:fulltext-search-provider";

/// Execution context providing access to providers and dataset scope
#[derive(Debug, Default, Clone)]
pub struct ExecutionContext {
    /// Providers by context key
    providers: FxHashMap<Arc<str>, Arc<dyn SearchProvider>>,
    /// Graphs searches are scoped to; empty means unrestricted
    pub active_graphs: Vec<GraphRef>,
}

impl ExecutionContext {
    /// Create a context with no providers and an unrestricted graph scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `provider` under [`SEARCH_PROVIDER_KEY`]
    pub fn with_search_provider(self, provider: Arc<dyn SearchProvider>) -> Self {
        self.with_provider(SEARCH_PROVIDER_KEY, provider)
    }

    /// Register `provider` under an explicit key
    pub fn with_provider(mut self, key: &str, provider: Arc<dyn SearchProvider>) -> Self {
        self.providers.insert(Arc::from(key), provider);
        self
    }

    pub fn with_active_graphs(mut self, graphs: Vec<GraphRef>) -> Self {
        self.active_graphs = graphs;
        self
    }

    /// Look up the provider registered under `key`
    pub fn search_provider(&self, key: &str) -> Option<&Arc<dyn SearchProvider>> {
        self.providers.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphtext_search_protocol::{IndexSchema, MemorySearchProvider};

    #[test]
    fn test_keyed_lookup() {
        let provider = Arc::new(MemorySearchProvider::new(IndexSchema::default()).unwrap());
        let ctx = ExecutionContext::new().with_search_provider(provider);
        assert!(ctx.search_provider(SEARCH_PROVIDER_KEY).is_some());
        assert!(ctx.search_provider("other").is_none());
        assert!(ExecutionContext::new()
            .search_provider(SEARCH_PROVIDER_KEY)
            .is_none());
    }
}
