use crate::FragmentNameRules;
use indexmap::IndexSet;
use regex::Regex;
use std::sync::LazyLock;

/// `...Name`, with optional whitespace after the dots. A run of more than
/// three dots matches at its last three (`....x` yields `x`).
static FRAGMENT_SPREAD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.{3}\s*([_A-Za-z][_A-Za-z0-9]*)")
        .expect("invalid fragment spread regex")
});

/// `fragment Name on Type`, at the start of the text or after a non-word
/// character.
static FRAGMENT_DEFINITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|\W)fragment\s+([_A-Za-z][_A-Za-z0-9]*)\s+on\s+[_A-Za-z][_A-Za-z0-9]*",
    )
    .expect("invalid fragment definition regex")
});

/// Names of all fragments spread anywhere in `text`, de-duplicated in
/// first-seen order. Brace depth is not considered.
pub(crate) fn spread_fragment_names(
    text: &str,
    rules: &FragmentNameRules,
) -> Vec<String> {
    collect_valid_names(&FRAGMENT_SPREAD_PATTERN, text, rules)
}

/// Names of all fragments defined (`fragment Name on Type`) in `text`,
/// de-duplicated in first-seen order.
pub(crate) fn defined_fragment_names(
    text: &str,
    rules: &FragmentNameRules,
) -> Vec<String> {
    collect_valid_names(&FRAGMENT_DEFINITION_PATTERN, text, rules)
}

/// The fragment name defined by a block header such as
/// `fragment UserFields on User @deprecated`. When the header holds more
/// than one definition pattern, the last valid one is nearest the block.
pub(crate) fn defined_fragment_name<'a>(
    header: &'a str,
    rules: &FragmentNameRules,
) -> Option<&'a str> {
    FRAGMENT_DEFINITION_PATTERN
        .captures_iter(header)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str())
        .filter(|name| rules.is_valid_name(name))
        .last()
}

fn collect_valid_names(
    pattern: &Regex,
    text: &str,
    rules: &FragmentNameRules,
) -> Vec<String> {
    let mut names: IndexSet<&str> = IndexSet::new();
    for caps in pattern.captures_iter(text) {
        if let Some(name) = caps.get(1)
            && rules.is_valid_name(name.as_str()) {
            names.insert(name.as_str());
        }
    }
    names.into_iter().map(str::to_string).collect()
}
