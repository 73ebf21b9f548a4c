//! Javadoc lookup and delimiter stripping.

use arborium_tree_sitter::Node;

/// Documentation attached to `node`: the nearest preceding `/** */` comment.
///
/// Line comments between the Javadoc and the declaration are skipped; any
/// other sibling means the declaration is undocumented.
pub(crate) fn preceding(node: Node<'_>, src: &[u8]) -> Option<Vec<String>> {
    let mut prev = node.prev_sibling();
    while let Some(sibling) = prev {
        match sibling.kind() {
            "block_comment" => {
                let comment = sibling.utf8_text(src).ok()?;
                return is_javadoc(comment).then(|| clean(comment));
            }
            "line_comment" => prev = sibling.prev_sibling(),
            _ => return None,
        }
    }
    None
}

fn is_javadoc(comment: &str) -> bool {
    comment.starts_with("/**") && comment != "/**/"
}

/// Strip `/**`, `*/` and the leading `*` gutter from every line.
///
/// Blank lines are kept, including the ones around the text; trimming them
/// is left to the emitter.
///
/// # Examples
/// ```
/// use tsmirror_java::javadoc::clean;
/// assert_eq!(clean("/** Returns the id. */"), ["Returns the id."]);
/// ```
pub fn clean(comment: &str) -> Vec<String> {
    let body = comment.strip_prefix("/**").unwrap_or(comment);
    let body = body.strip_suffix("*/").unwrap_or(body);

    body.lines()
        .map(|line| {
            let line = line.trim_start();
            let line = match line.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => line,
            };
            line.trim_end().to_string()
        })
        .collect()
}
