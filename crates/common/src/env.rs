//! Environment/runtime helpers
//!
//! Sanity checks to ensure the on-disk store has somewhere to live at startup.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Extract the filesystem path from a `sqlite:` URL.
///
/// Returns `None` for in-memory databases and for URLs of other schemes.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" || path.starts_with(":memory:") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the parent directory of a SQLite database file exists.
pub async fn ensure_sqlite_dir(url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(url) else {
        debug!(%url, "database is not file backed; nothing to prepare");
        return Ok(());
    };
    let Some(dir) = file.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    ensure_dir(dir).await
}

async fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    if tokio::fs::metadata(dir).await.is_err() {
        warn!(dir = %dir.display(), "data directory not found; creating it");
    }
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_url_yields_path() {
        assert_eq!(
            sqlite_file_path("sqlite://data/services.db?mode=rwc"),
            Some(PathBuf::from("data/services.db"))
        );
        assert_eq!(sqlite_file_path("sqlite:app.db"), Some(PathBuf::from("app.db")));
    }

    #[test]
    fn memory_and_foreign_urls_are_skipped() {
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/db"), None);
    }

    #[tokio::test]
    async fn creates_missing_parent_dir() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("salon-env-{}", std::process::id()));
        let url = format!("sqlite://{}/nested/services.db?mode=rwc", root.display());
        ensure_sqlite_dir(&url).await?;
        assert!(root.join("nested").is_dir());
        tokio::fs::remove_dir_all(&root).await?;
        Ok(())
    }
}
