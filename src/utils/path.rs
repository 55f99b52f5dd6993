use std::path::{Component, Path, PathBuf};

use crate::error::IoError;

/// Lexically cleans a path: drops `.` and folds `name/..` pairs.
/// Symlinks are not consulted.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    parts.iter().collect()
}

pub fn absolute_path(path: &Path) -> Result<PathBuf, IoError> {
    if path.is_absolute() {
        return Ok(clean_path(path));
    }
    let cwd = std::env::current_dir().map_err(|source| IoError::CurrentDir { source })?;
    Ok(clean_path(&cwd.join(path)))
}

/// Lexical path from `base` to `target`. Both must be absolute or both
/// relative to the same directory.
pub fn relative_path(base: &Path, target: &Path) -> Result<PathBuf, IoError> {
    let clean_base = clean_path(base);
    let clean_target = clean_path(target);
    if clean_base.has_root() != clean_target.has_root() {
        return Err(IoError::relative_path(target, base));
    }

    let base_parts: Vec<Component> = clean_base.components().collect();
    let target_parts: Vec<Component> = clean_target.components().collect();
    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let remaining = &base_parts[common..];
    if remaining.contains(&Component::ParentDir) {
        return Err(IoError::relative_path(target, base));
    }

    let mut relative = PathBuf::new();
    for _ in remaining {
        relative.push("..");
    }
    for part in &target_parts[common..] {
        relative.push(part);
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Ok(relative)
}
