use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
struct CachedResponse {
    url: String,
    fetched_at: DateTime<Utc>,
    body: String,
}

// Disk cache for API response bodies. Static reference data (hero list,
// ability constants) and immutable match records are served from here
// between runs; volatile endpoints never go through it.
#[derive(Debug)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    pub fn open() -> Result<Self, AppError> {
        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dota_stats");
        Self::at(dir)
    }

    pub fn at(dir: PathBuf) -> Result<Self, AppError> {
        fs::create_dir_all(&dir)
            .map_err(|e| AppError::Cache(format!("Failed to create cache dir: {}", e)))?;
        Ok(ResponseCache { dir })
    }

    pub fn load(&self, url: &str, max_age: Duration) -> Option<String> {
        let path = self.entry_path(url);
        let content = fs::read_to_string(path).ok()?;
        let entry: CachedResponse = serde_json::from_str(&content).ok()?;

        if Utc::now().signed_duration_since(entry.fetched_at) > max_age {
            return None;
        }
        Some(entry.body)
    }

    pub fn store(&self, url: &str, body: &str) {
        let entry = CachedResponse {
            url: url.to_string(),
            fetched_at: Utc::now(),
            body: body.to_string(),
        };
        // A failed cache write never fails the request that produced it
        if let Ok(json) = serde_json::to_string(&entry) {
            let _ = fs::write(self.entry_path(url), json);
        }
    }

    fn entry_path(&self, url: &str) -> PathBuf {
        let slug: String = url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", slug))
    }
}
