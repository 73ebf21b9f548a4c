use std::path::{Component, Path};

/// Drop blank lines from both ends of a documentation block.
///
/// # Examples
/// ```
/// use tsmirror_core::utils::trim_blank_lines;
/// let lines = vec!["".to_string(), "Body".to_string(), "  ".to_string()];
/// assert_eq!(trim_blank_lines(&lines), ["Body".to_string()]);
/// ```
pub fn trim_blank_lines(lines: &[String]) -> &[String] {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}

/// Import specifier for `target`, seen from a module living in `from_dir`.
///
/// Both paths are relative to the same output root. The result uses `/`
/// separators and always starts with `./` or `../`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use tsmirror_core::utils::relative_import_path;
/// assert_eq!(relative_import_path(Path::new("a/b"), Path::new("a/c/Foo")), "../c/Foo");
/// assert_eq!(relative_import_path(Path::new("a"), Path::new("a/Foo")), "./Foo");
/// ```
pub fn relative_import_path(from_dir: &Path, target: &Path) -> String {
    let from = normal_components(from_dir);
    let to = normal_components(target);

    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = vec![".."; from.len() - common];
    segments.extend(to[common..].iter().map(String::as_str));

    let joined = segments.join("/");
    if segments.first() == Some(&"..") {
        joined
    } else {
        format!("./{joined}")
    }
}

fn normal_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
