use crate::FragmentNameRules;
use crate::FragmentStore;

/// Builder for a [`FragmentStore`] with custom naming rules and an initial
/// set of fragments.
///
/// # Example
///
/// ```
/// use dynql::FragmentStore;
///
/// let store = FragmentStore::builder()
///     .reserved_name("query")
///     .fragments_from_str(r#"
///         fragment UserFields on User { id name }
///         fragment PostFields on Post { title author { ...UserFields } }
///     "#)
///     .fragment("query", "fragment query on Query { viewer { id } }")
///     .build();
///
/// assert_eq!(store.len(), 2);
/// assert!(!store.contains("query"));
/// ```
#[derive(Debug)]
pub struct FragmentStoreBuilder {
    name_rules: FragmentNameRules,
    sources: Vec<FragmentSource>,
}

#[derive(Debug)]
enum FragmentSource {
    Named { name: String, definition: String },
    Text(String),
}

impl FragmentStoreBuilder {
    pub fn new() -> Self {
        Self {
            name_rules: FragmentNameRules::new(),
            sources: vec![],
        }
    }

    /// Reserve `name` so it can never name a fragment. `on` is always
    /// reserved.
    pub fn reserved_name(mut self, name: impl Into<String>) -> Self {
        self.name_rules.reserved_names.insert(name.into());
        self
    }

    /// Minimum fragment name length in bytes. Values below 1 are treated
    /// as 1.
    pub fn min_name_len(mut self, min_len: usize) -> Self {
        self.name_rules.min_len = min_len.max(1);
        self
    }

    /// Queue a fragment to be registered when the store is built.
    pub fn fragment(
        mut self,
        name: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        self.sources.push(FragmentSource::Named {
            name: name.into(),
            definition: definition.into(),
        });
        self
    }

    /// Queue a text whose fragment definitions are auto-registered when the
    /// store is built.
    pub fn fragments_from_str(mut self, text: impl Into<String>) -> Self {
        self.sources.push(FragmentSource::Text(text.into()));
        self
    }

    /// Build the store, registering queued fragments in the order they were
    /// added. Fragments with invalid names are dropped.
    pub fn build(self) -> FragmentStore {
        let mut store = FragmentStore {
            fragments: Default::default(),
            name_rules: self.name_rules,
        };

        for source in self.sources {
            match source {
                FragmentSource::Named { name, definition } => {
                    store.register_fragment(name, definition);
                },
                FragmentSource::Text(text) => {
                    store.auto_register_fragment(&text);
                },
            }
        }

        store
    }
}

impl Default for FragmentStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
