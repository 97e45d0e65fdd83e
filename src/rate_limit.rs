use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// OpenDota free tier allows 2000 calls per day
const MAX_REQUESTS_PER_DAY: u32 = 2000;

/// Persisted count of OpenDota requests made today, shared by all runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct RequestLog {
    pub requests_today: u32,
    pub last_request: DateTime<Utc>,
    pub day_reset: DateTime<Utc>,
}

impl RequestLog {
    pub fn new() -> Self {
        let now = Utc::now();
        RequestLog {
            requests_today: 0,
            last_request: now,
            day_reset: now + Duration::days(1),
        }
    }

    fn usage_path() -> PathBuf {
        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dota_stats");
        let _ = fs::create_dir_all(&dir);
        dir.join("usage.json")
    }

    pub fn load() -> Result<Self, AppError> {
        Self::load_at(&Self::usage_path())
    }

    pub fn load_at(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let mut log: RequestLog = serde_json::from_str(&content).map_err(|e| {
                    AppError::Json(format!("Failed to parse usage log: {}", e))
                })?;

                let now = Utc::now();
                if now > log.day_reset {
                    log.requests_today = 0;
                    log.day_reset = now + Duration::days(1);
                }

                Ok(log)
            }
            Err(_) => Ok(RequestLog::new()),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.save_at(&Self::usage_path())
    }

    pub fn save_at(&self, path: &Path) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Json(format!("Failed to serialize usage log: {}", e)))?;

        fs::write(path, json)
            .map_err(|e| AppError::Cache(format!("Failed to write usage log: {}", e)))?;

        Ok(())
    }

    pub fn can_make_request(&self) -> bool {
        self.requests_today < MAX_REQUESTS_PER_DAY
    }

    pub fn record_requests(&mut self, count: u32) {
        self.requests_today += count;
        self.last_request = Utc::now();
    }

    pub fn remaining(&self) -> u32 {
        MAX_REQUESTS_PER_DAY.saturating_sub(self.requests_today)
    }

    pub fn display_status(&self) {
        let time_until_reset = self.day_reset.signed_duration_since(Utc::now());

        println!("\n📊 OpenDota usage");
        println!(
            "   Today: {}/{} requests",
            self.requests_today, MAX_REQUESTS_PER_DAY
        );
        println!("   Remaining: {} requests", self.remaining());
        println!(
            "   Reset in: {}h {}m\n",
            time_until_reset.num_hours(),
            time_until_reset.num_minutes() % 60
        );
    }
}
