//! Lexical path helpers for resolving import specifiers.
//!
//! None of these touch the filesystem: generated paths frequently point at
//! directories that do not exist yet (e.g. the Prisma client output before
//! `prisma generate` has run).

use std::path::{Component, Path, PathBuf};

/// Resolve `.` and `..` components without consulting the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Join `path` onto `base` unless it is already absolute, then normalize.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Compute the path of `target` relative to the directory `from`.
///
/// Both paths should be absolute (or both relative to the same base).
pub fn relative_to(target: &Path, from: &Path) -> PathBuf {
    let target = normalize(target);
    let from = normalize(from);

    let target_parts: Vec<_> = target.components().collect();
    let from_parts: Vec<_> = from.components().collect();
    let common = target_parts
        .iter()
        .zip(&from_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..from_parts.len() {
        out.push("..");
    }
    for part in &target_parts[common..] {
        out.push(part.as_os_str());
    }
    out
}

/// Render a relative path as an ES module specifier.
///
/// Separators are normalized to `/` and the result is prefixed with `./`
/// unless its first component is `.` or `..`. A leading dot-directory such
/// as `.generated` still gets the prefix, or Node would resolve it as a
/// package name.
pub fn to_import_specifier(path: &Path) -> String {
    let joined = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        ".".to_string()
    } else if is_relative_specifier(&joined) {
        joined
    } else {
        format!("./{}", joined)
    }
}

fn is_relative_specifier(spec: &str) -> bool {
    matches!(spec, "." | "..") || spec.starts_with("./") || spec.starts_with("../")
}
