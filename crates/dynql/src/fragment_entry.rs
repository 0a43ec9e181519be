use serde::Deserialize;
use serde::Serialize;

/// A registered fragment.
///
/// `depends_on` is computed from `definition` when the fragment is
/// registered and never changes independently of it. Restoring a
/// deserialized entry goes through
/// [`FragmentStore::register_fragment`](crate::FragmentStore::register_fragment),
/// which recomputes it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FragmentEntry {
    pub(crate) name: String,
    pub(crate) definition: String,
    pub(crate) depends_on: Vec<String>,
}

impl FragmentEntry {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Full source text, including the `fragment Name on Type` header.
    pub fn definition(&self) -> &str {
        self.definition.as_str()
    }

    /// Fragments spread by [`definition`](Self::definition), in first-seen
    /// order.
    pub fn depends_on(&self) -> &[String] {
        self.depends_on.as_slice()
    }
}
