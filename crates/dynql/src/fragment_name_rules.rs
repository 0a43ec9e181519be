use indexmap::IndexSet;

/// The name that introduces a type condition (`fragment Foo on Bar`,
/// `... on Bar`). It can never name a fragment.
pub(crate) const TYPE_CONDITION_KEYWORD: &str = "on";

/// Decides whether a string is acceptable as a fragment name.
///
/// A valid name starts with an ASCII letter or `_`, continues with ASCII
/// letters, digits or `_`, is at least [`min_len`](Self::min_len) bytes long
/// and is not one of the [reserved names](Self::reserved_names). Any
/// non-ASCII character makes the name invalid.
///
/// Every mutating operation on [`FragmentStore`](crate::FragmentStore)
/// goes through [`is_valid_name`](Self::is_valid_name).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentNameRules {
    pub(crate) min_len: usize,
    pub(crate) reserved_names: IndexSet<String>,
}

impl FragmentNameRules {
    pub fn new() -> Self {
        let mut reserved_names = IndexSet::new();
        reserved_names.insert(TYPE_CONDITION_KEYWORD.to_string());
        Self {
            min_len: 1,
            reserved_names,
        }
    }

    pub fn is_valid_name(&self, name: &str) -> bool {
        let bytes = name.as_bytes();
        let Some((first, rest)) = bytes.split_first() else {
            return false;
        };

        bytes.len() >= self.min_len
            && is_name_start(*first)
            && rest.iter().copied().all(is_name_continue)
            && !self.reserved_names.contains(name)
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn reserved_names(&self) -> &IndexSet<String> {
        &self.reserved_names
    }
}

impl Default for FragmentNameRules {
    fn default() -> Self {
        Self::new()
    }
}

fn is_name_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

fn is_name_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}
