use std::env;
use std::path::{Path, PathBuf};

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/npmtag`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    let home = env::var("HOME").ok()?;
    let dir = Path::new(&home).join(".config").join("npmtag");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Config directory for npmtag (ensured to exist).
///
/// Prefers `$HOME/.config/npmtag`, falling back to `$XDG_CONFIG_HOME/npmtag`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("npmtag");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/npmtag/logs" (ensured to exist)
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Find an existing config file named `file` in the HOME then XDG locations.
pub(crate) fn resolve_config_file(file: &str) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(h) = env::var("HOME") {
        candidates.push(Path::new(&h).join(".config").join("npmtag").join(file));
    }
    if let Ok(x) = env::var("XDG_CONFIG_HOME")
        && !x.trim().is_empty()
    {
        candidates.push(Path::new(&x).join("npmtag").join(file));
    }
    candidates.into_iter().find(|p| p.is_file())
}
