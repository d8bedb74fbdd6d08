//! JSON output for search results and articles.
//!
//! Results go to stdout by default, or to a file when a path is given.
//! Parent directories of the file are created as needed.

use serde::Serialize;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{error, info, instrument};

/// Serialize `value` to JSON, pretty-printed on request.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Write `json` to `path`, creating missing parent directories.
#[instrument(level = "info", skip(json, path), fields(path = %path.display()))]
pub async fn write_json(path: &Path, json: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!(bytes = json.len(), "Wrote JSON output");
    Ok(())
}

/// Write `json` to `path` if given, otherwise to stdout followed by a newline.
pub async fn emit(json: &str, path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) => write_json(path, json).await,
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(json.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleSummary;

    fn sample() -> Vec<ArticleSummary> {
        vec![ArticleSummary {
            title: "Cím".to_string(),
            url: "https://telex.hu/a".to_string(),
            date: "Mon, 01 Jan 2024 12:00:00 +0100".to_string(),
        }]
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), false).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with(r#"[{"title":"Cím""#));
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), true).unwrap();
        assert!(json.contains("\n  {"));
        let back: Vec<ArticleSummary> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[tokio::test]
    async fn test_write_json_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("telex_news_out_{}", std::process::id()));
        let path = dir.join("nested").join("results.json");

        write_json(&path, "[]").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
