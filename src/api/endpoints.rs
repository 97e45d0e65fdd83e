// URL builders for the OpenDota endpoints consumed by the client.

use crate::config::Config;

// Steam app-news feed for Dota 2 (app 570), used for the news listing.
pub const DOTA_NEWS_URL: &str =
    "https://api.steampowered.com/ISteamNews/GetNewsForApp/v0002/?appid=570&format=json";

pub fn match_history_url(config: &Config, account_id: u64, limit: usize) -> String {
    with_api_key(
        config,
        format!(
            "{}/players/{}/matches?limit={}",
            config.api_base, account_id, limit
        ),
    )
}

pub fn match_details_url(config: &Config, match_id: u64) -> String {
    with_api_key(config, format!("{}/matches/{}", config.api_base, match_id))
}

pub fn hero_list_url(config: &Config) -> String {
    with_api_key(config, format!("{}/heroes", config.api_base))
}

pub fn player_profile_url(config: &Config, account_id: u64) -> String {
    with_api_key(config, format!("{}/players/{}", config.api_base, account_id))
}

pub fn ability_ids_url(config: &Config) -> String {
    with_api_key(config, format!("{}/constants/ability_ids", config.api_base))
}

pub fn pro_matches_url(config: &Config) -> String {
    with_api_key(config, format!("{}/proMatches", config.api_base))
}

fn with_api_key(config: &Config, url: String) -> String {
    match &config.api_key {
        Some(key) => {
            let sep = if url.contains('?') { '&' } else { '?' };
            format!("{}{}api_key={}", url, sep, key)
        }
        None => url,
    }
}
