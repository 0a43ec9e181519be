use crate::FragmentNameRules;
use crate::fragment_patterns;
use indexmap::IndexMap;

/// Finds every top-level `fragment Name on Type { ... }` block in `text`.
///
/// This is a single left-to-right scan that tracks brace depth. The text
/// between the end of the previous top-level block and an opening brace at
/// depth 0 is that block's header. When depth returns to 0, the block
/// (header included, trimmed) is recorded if its header defines a valid
/// fragment name. Blocks with any other header are skipped.
///
/// Braces inside strings or comments are not special. A stray `}` at depth
/// 0 is ignored, and a block still open at the end of `text` is dropped.
/// If a name is defined twice the later block wins, at the position of the
/// first.
pub(crate) fn find_fragment_blocks(
    text: &str,
    rules: &FragmentNameRules,
) -> IndexMap<String, String> {
    let mut found = IndexMap::new();
    let mut block_start = 0;
    let mut header = "";
    let mut depth: usize = 0;

    // Braces are ASCII, so every offset below is on a char boundary.
    for (idx, byte) in text.bytes().enumerate() {
        match byte {
            b'{' => {
                if depth == 0 {
                    header = text[block_start..idx].trim();
                }
                depth += 1;
            },

            b'}' if depth == 0 => {
                block_start = idx + 1;
            },

            b'}' => {
                depth -= 1;
                if depth > 0 {
                    continue;
                }

                if let Some(name) = fragment_patterns::defined_fragment_name(header, rules) {
                    let block = text[block_start..=idx].trim();
                    log::trace!("Found definition of fragment `{name}`.");
                    found.insert(name.to_string(), block.to_string());
                }
                block_start = idx + 1;
            },

            _ => (),
        }
    }

    if depth > 0 {
        log::trace!(
            "Dropping unclosed block at byte offset {block_start} (depth {depth}).",
        );
    }

    found
}
