//! A fragment dependency resolver for GraphQL-style query text.
//!
//! A [`FragmentStore`] keeps a registry of named fragment definitions. Given
//! a query that spreads fragments (`...UserFields`), [`FragmentStore::resolve`]
//! returns the definitions the query still needs, transitively and in
//! dependency order, skipping any fragment the query already defines inline.
//!
//! Extraction is pattern based: fragment names are found with a handful of
//! compiled patterns and a brace-depth scan, not a grammar-level parser.
//!
//! ```
//! use dynql::FragmentStore;
//!
//! let mut store = FragmentStore::new();
//! store.register_fragment("UserFields", "fragment UserFields on User { id ...Avatar }");
//! store.register_fragment("Avatar", "fragment Avatar on User { avatarUrl }");
//!
//! let defs = store.resolve("{ viewer { ...UserFields } }").unwrap();
//! assert_eq!(defs, vec![
//!     "fragment UserFields on User { id ...Avatar }",
//!     "fragment Avatar on User { avatarUrl }",
//! ]);
//! ```

mod fragment_entry;
mod fragment_name_rules;
mod fragment_patterns;
mod fragment_resolution_error;
mod fragment_scanner;
mod fragment_store;
mod fragment_store_builder;

pub use fragment_entry::FragmentEntry;
pub use fragment_name_rules::FragmentNameRules;
pub use fragment_resolution_error::FragmentResolutionError;
pub use fragment_store::FragmentStore;
pub use fragment_store_builder::FragmentStoreBuilder;

/// Result of a fragment resolution.
pub type Result<T> = std::result::Result<T, FragmentResolutionError>;

#[cfg(test)]
mod tests;
