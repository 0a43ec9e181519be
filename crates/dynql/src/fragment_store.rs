use crate::FragmentEntry;
use crate::FragmentNameRules;
use crate::FragmentResolutionError;
use crate::FragmentStoreBuilder;
use crate::Result;
use crate::fragment_patterns;
use crate::fragment_scanner;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// An in-memory registry of fragment definitions, keyed by fragment name.
///
/// Fragments are added with [`register_fragment`](Self::register_fragment)
/// or discovered in bulk with
/// [`auto_register_fragment`](Self::auto_register_fragment). Invalid names
/// (see [`FragmentNameRules`]) are rejected silently with a `false` or an
/// empty return; only [`resolve`](Self::resolve) can fail.
///
/// The store does no locking. Share it across threads behind a single
/// `Mutex` or `RwLock`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentStore {
    pub(crate) fragments: IndexMap<String, FragmentEntry>,
    pub(crate) name_rules: FragmentNameRules,
}

impl FragmentStore {
    /// Create an empty store that uses the default [`FragmentNameRules`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> FragmentStoreBuilder {
        FragmentStoreBuilder::new()
    }

    /// All registered fragments, in registration order. Overwriting a
    /// fragment keeps its original position.
    pub fn fragments(&self) -> &IndexMap<String, FragmentEntry> {
        &self.fragments
    }

    pub fn get(&self, name: &str) -> Option<&FragmentEntry> {
        self.fragments.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn name_rules(&self) -> &FragmentNameRules {
        &self.name_rules
    }

    pub fn is_valid_name(&self, name: &str) -> bool {
        self.name_rules.is_valid_name(name)
    }

    /// Names of the fragments spread (`...Name`) anywhere in `text`,
    /// de-duplicated in first-seen order.
    pub fn spread_fragment_names(&self, text: &str) -> Vec<String> {
        fragment_patterns::spread_fragment_names(text, &self.name_rules)
    }

    /// Names of the fragments defined (`fragment Name on Type`) in `text`,
    /// de-duplicated in first-seen order.
    pub fn defined_fragment_names(&self, text: &str) -> Vec<String> {
        fragment_patterns::defined_fragment_names(text, &self.name_rules)
    }

    /// Every top-level fragment definition block in `text`, keyed by
    /// fragment name, in the order they appear.
    pub fn find_fragments(&self, text: &str) -> IndexMap<String, String> {
        fragment_scanner::find_fragment_blocks(text, &self.name_rules)
    }

    /// Register (or overwrite) the fragment `name`.
    ///
    /// Returns `false` without touching the registry if `name` is not a
    /// valid fragment name.
    pub fn register_fragment(
        &mut self,
        name: impl AsRef<str>,
        definition: impl Into<String>,
    ) -> bool {
        let name = name.as_ref();
        if !self.is_valid_name(name) {
            log::debug!("Rejected fragment with invalid name `{name}`.");
            return false;
        }

        let definition = definition.into();
        let depends_on = self.spread_fragment_names(&definition);
        let entry = FragmentEntry {
            name: name.to_string(),
            definition,
            depends_on,
        };

        if self.fragments.insert(name.to_string(), entry).is_some() {
            log::debug!("Overwrote fragment `{name}`.");
        } else {
            log::debug!("Registered fragment `{name}`.");
        }
        true
    }

    /// Remove the fragment `name`. Returns `false` if it was not registered.
    pub fn unregister_fragment(&mut self, name: &str) -> bool {
        // `shift_remove` keeps the remaining fragments in registration order.
        if self.fragments.shift_remove(name).is_some() {
            log::debug!("Unregistered fragment `{name}`.");
            true
        } else {
            false
        }
    }

    /// Register every top-level fragment definition found in `text` and
    /// return their names in discovery order.
    pub fn auto_register_fragment(&mut self, text: &str) -> Vec<String> {
        let found = self.find_fragments(text);
        let mut names = Vec::with_capacity(found.len());
        for (name, definition) in found {
            if self.register_fragment(&name, definition) {
                names.push(name);
            }
        }
        names
    }

    /// Compute the fragment definitions that must be appended to `query`
    /// for it to be self-contained.
    ///
    /// Fragments defined inline in `query` are never looked up or returned.
    /// Every other spread fragment is resolved from the registry together
    /// with everything it spreads, transitively. The walk is depth-first and
    /// pre-order: a fragment comes before its dependencies, and dependencies
    /// are visited in the order they are spread. Each fragment appears at
    /// most once, so cycles terminate.
    ///
    /// Fails with [`FragmentResolutionError::UnresolvedFragment`] on the
    /// first required fragment that is not registered.
    pub fn resolve(&self, query: &str) -> Result<Vec<&str>> {
        let defined_names = self.defined_fragment_names(query);
        let required_names: Vec<String> =
            self.spread_fragment_names(query)
                .into_iter()
                .filter(|name| !defined_names.contains(name))
                .collect();

        // Inline definitions count as resolved but contribute no text.
        let mut resolved: IndexSet<&str> =
            defined_names.iter().map(String::as_str).collect();
        let mut definitions = vec![];

        // Worklist of (fragment name, spreading fragment). Entries are pushed
        // in reverse so they pop in spread order.
        let mut pending: Vec<(&str, Option<&str>)> =
            required_names.iter()
                .rev()
                .map(|name| (name.as_str(), None))
                .collect();

        while let Some((name, required_by)) = pending.pop() {
            if resolved.contains(name) {
                log::trace!("Fragment `{name}` is already resolved.");
                continue;
            }

            let Some((fragment_name, entry)) = self.fragments.get_key_value(name) else {
                return Err(FragmentResolutionError::UnresolvedFragment {
                    fragment_name: name.to_string(),
                    required_by: required_by.map(str::to_string),
                });
            };

            log::trace!("Resolved fragment `{name}`.");
            resolved.insert(fragment_name.as_str());
            definitions.push(entry.definition.as_str());

            pending.extend(
                entry.depends_on.iter()
                    .rev()
                    .map(|dep| (dep.as_str(), Some(fragment_name.as_str()))),
            );
        }

        Ok(definitions)
    }

    /// `query` followed by every definition from [`resolve`](Self::resolve),
    /// each on its own line. Returns `query` unchanged if nothing is missing.
    pub fn complete_query(&self, query: &str) -> Result<String> {
        let definitions = self.resolve(query)?;
        let mut completed = String::from(query);
        for definition in definitions {
            completed.push('\n');
            completed.push_str(definition);
        }
        Ok(completed)
    }
}
