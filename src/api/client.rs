use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::AppError;
use governor::{Quota, RateLimiter, state::{InMemoryState, NotKeyed}, clock::DefaultClock};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints;
use super::models::*;

// Stay under OpenDota's 60 requests/minute free tier
const REQUESTS_PER_MINUTE: u32 = 55;

// Hero list and ability constants barely change between patches;
// a finished match never changes at all.
const REFERENCE_DATA_TTL_HOURS: i64 = 24;
const MATCH_DETAILS_TTL_DAYS: i64 = 30;

pub struct OpenDotaClient {
    config: Config,
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    cache: Option<ResponseCache>,
}

impl OpenDotaClient {
    pub fn new(config: Config) -> Self {
        Self::with_cache(config, ResponseCache::open().ok())
    }

    /// Pass `None` to bypass response caching (`--refresh`, tests).
    pub fn with_cache(config: Config, cache: Option<ResponseCache>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent("dota_stats/0.1.0")
            .build();
        let rate_limiter = RateLimiter::direct(Quota::per_minute(
            NonZeroU32::new(REQUESTS_PER_MINUTE).unwrap(),
        ));
        OpenDotaClient {
            config,
            agent,
            rate_limiter,
            cache,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn wait_for_slot(&self) {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(100));
        }
    }

    // No retry or timeout logic anywhere: a failed call surfaces
    // immediately and a stalled one blocks the caller.
    fn fetch_body(&self, url: &str) -> Result<String, AppError> {
        self.wait_for_slot();

        match self.agent.get(url).call() {
            Ok(resp) => resp
                .into_string()
                .map_err(|e| AppError::Network(e.to_string())),
            Err(ureq::Error::Status(status, _)) => Err(AppError::Http {
                status,
                url: url.to_string(),
            }),
            Err(e) => Err(AppError::Network(e.to_string())),
        }
    }

    fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let body = self.fetch_body(url)?;
        serde_json::from_str(&body).map_err(|e| AppError::Json(e.to_string()))
    }

    fn fetch_json_cached<T: DeserializeOwned>(
        &self,
        url: &str,
        max_age: chrono::Duration,
    ) -> Result<T, AppError> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.load(url, max_age) {
                if let Ok(parsed) = serde_json::from_str(&body) {
                    return Ok(parsed);
                }
            }
        }

        let body = self.fetch_body(url)?;
        let parsed =
            serde_json::from_str(&body).map_err(|e| AppError::Json(e.to_string()))?;
        if let Some(cache) = &self.cache {
            cache.store(url, &body);
        }
        Ok(parsed)
    }

    pub fn get_match_history(
        &self,
        account_id: u64,
        limit: usize,
    ) -> Result<Vec<PlayerMatch>, AppError> {
        self.fetch_json(&endpoints::match_history_url(&self.config, account_id, limit))
    }

    pub fn get_match(&self, match_id: u64) -> Result<MatchDetails, AppError> {
        self.fetch_json_cached(
            &endpoints::match_details_url(&self.config, match_id),
            chrono::Duration::days(MATCH_DETAILS_TTL_DAYS),
        )
    }

    pub fn get_heroes(&self) -> Result<Vec<Hero>, AppError> {
        self.fetch_json_cached(
            &endpoints::hero_list_url(&self.config),
            chrono::Duration::hours(REFERENCE_DATA_TTL_HOURS),
        )
    }

    pub fn get_player(&self, account_id: u64) -> Result<PlayerProfile, AppError> {
        self.fetch_json(&endpoints::player_profile_url(&self.config, account_id))
    }

    pub fn get_ability_ids(&self) -> Result<HashMap<String, String>, AppError> {
        self.fetch_json_cached(
            &endpoints::ability_ids_url(&self.config),
            chrono::Duration::hours(REFERENCE_DATA_TTL_HOURS),
        )
    }

    pub fn get_pro_matches(&self) -> Result<Vec<ProMatch>, AppError> {
        self.fetch_json(&endpoints::pro_matches_url(&self.config))
    }

    pub fn get_dota_news(&self) -> Result<NewsFeed, AppError> {
        self.fetch_json(endpoints::DOTA_NEWS_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ACCOUNT_ID;

    fn client_for(server: &mockito::Server) -> OpenDotaClient {
        let config = Config {
            api_base: server.url(),
            default_account_id: DEFAULT_ACCOUNT_ID,
            api_key: None,
        };
        OpenDotaClient::with_cache(config, None)
    }

    #[test]
    fn test_non_2xx_maps_to_http_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/heroes")
            .with_status(404)
            .create();

        let client = client_for(&server);
        match client.get_heroes() {
            Err(AppError::Http { status, url }) => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/heroes"));
            }
            other => panic!("expected Http error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_malformed_body_maps_to_json_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/heroes")
            .with_status(200)
            .with_body("not json")
            .create();

        let client = client_for(&server);
        assert!(matches!(client.get_heroes(), Err(AppError::Json(_))));
    }

    #[test]
    fn test_cached_reference_data_skips_second_request() {
        let mut server = mockito::Server::new();
        let m = server
            .mock("GET", "/heroes")
            .with_status(200)
            .with_body(r#"[{"id":1,"name":"npc_dota_hero_antimage","localized_name":"Anti-Mage"}]"#)
            .expect(1)
            .create();

        let tmp = tempfile::tempdir().unwrap();
        let cache = ResponseCache::at(tmp.path().to_path_buf()).unwrap();
        let config = Config {
            api_base: server.url(),
            default_account_id: DEFAULT_ACCOUNT_ID,
            api_key: None,
        };
        let client = OpenDotaClient::with_cache(config, Some(cache));

        let first = client.get_heroes().unwrap();
        let second = client.get_heroes().unwrap();
        assert_eq!(first[0].localized_name, "Anti-Mage");
        assert_eq!(second[0].localized_name, "Anti-Mage");
        m.assert();
    }
}
