//! Lexical path resolution under the wallet's base directory.

use std::path::{Component, Path, PathBuf};

use fabric_wallet_core::{Result, WalletError};

/// Clean a path without touching the filesystem.
///
/// `.` components are dropped and `..` removes the component before it.
/// A `..` directly under the root stays at the root; leading `..` of a
/// relative path are kept. An empty result becomes `.`.
pub fn clean(path: &Path) -> PathBuf {
    path_clean::clean(path)
}

/// Join `parts` under `base` and clean the result.
///
/// A root or drive prefix on a part is ignored, so `/tls` means
/// `<base>/tls`. Fails with [`WalletError::OutsideBaseDir`] if the cleaned
/// result is not inside the cleaned base.
pub fn resolve(base: &Path, parts: &[&Path]) -> Result<PathBuf> {
    let base = clean(base);
    let mut joined = base.clone();

    for part in parts {
        for component in part.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {}
                other => joined.push(other),
            }
        }
    }

    let resolved = clean(&joined);
    if !is_within(&resolved, &base) {
        return Err(WalletError::OutsideBaseDir { path: resolved });
    }

    Ok(resolved)
}

fn is_within(path: &Path, base: &Path) -> bool {
    if base == Path::new(".") {
        return !matches!(path.components().next(), Some(Component::ParentDir));
    }
    path.starts_with(base)
}
