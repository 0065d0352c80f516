//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for option list storage.
//! Implementations can use JSON files, in-memory maps, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, ListCatalog, ListOption};

/// Named, ordered option lists with append-if-absent semantics
#[async_trait]
pub trait OptionListRepository: Send + Sync {
    /// The list names this repository accepts
    fn catalog(&self) -> &ListCatalog;

    /// Full list in insertion order; empty if nothing was stored yet
    async fn get(&self, list: &str) -> DomainResult<Vec<ListOption>>;

    /// Append `option` unless an entry with a case-insensitively equal label
    /// or value exists. Returns the full list after the call either way.
    async fn append_if_absent(&self, list: &str, option: &ListOption)
        -> DomainResult<Vec<ListOption>>;
}
