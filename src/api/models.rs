use serde::Deserialize;

// One entry of a player's match history
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct PlayerMatch {
    pub match_id: u64,
    #[serde(default)]
    pub hero_id: u32,
    #[serde(default)]
    pub player_slot: u8,
    #[serde(default)]
    pub radiant_win: bool,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub start_time: i64,
}

// Full match record
#[derive(Debug, Deserialize)]
pub struct MatchDetails {
    pub match_id: u64,
    pub radiant_win: bool,
    #[serde(default)]
    pub radiant_score: u32,
    #[serde(default)]
    pub dire_score: u32,
    pub duration: u32,
    #[serde(default)]
    pub start_time: i64,
    pub players: Vec<MatchPlayer>,
}

#[derive(Debug, Deserialize)]
pub struct MatchPlayer {
    // Anonymous players carry no account ID
    pub account_id: Option<u64>,
    pub player_slot: u8,
    pub hero_id: u32,
    #[serde(default)]
    pub personaname: Option<String>,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub gold_per_min: u32,
    #[serde(default)]
    pub xp_per_min: u32,
    #[serde(default)]
    pub last_hits: u32,
    #[serde(default)]
    pub ability_upgrades_arr: Option<Vec<u64>>,
}

impl MatchPlayer {
    pub fn is_radiant(&self) -> bool {
        self.player_slot < 128
    }
}

// Hero list response entry, e.g.
// { "id": 1, "name": "npc_dota_hero_antimage", "localized_name": "Anti-Mage" }
#[derive(Debug, Deserialize, Clone)]
pub struct Hero {
    pub id: u32,
    pub name: String,
    pub localized_name: String,
}

// Player profile response
#[derive(Debug, Deserialize, Default)]
pub struct PlayerProfile {
    #[serde(default)]
    pub profile: Option<ProfileInfo>,
    #[serde(default)]
    pub rank_tier: Option<u8>,
    #[serde(default)]
    pub leaderboard_rank: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
#[allow(dead_code)]
pub struct ProfileInfo {
    #[serde(default)]
    pub personaname: Option<String>,
    #[serde(default)]
    pub avatarfull: Option<String>,
    #[serde(default)]
    pub profileurl: Option<String>,
}

// proMatches response entry
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ProMatch {
    pub match_id: u64,
    #[serde(default)]
    pub radiant_name: Option<String>,
    #[serde(default)]
    pub dire_name: Option<String>,
    #[serde(default)]
    pub league_name: Option<String>,
    #[serde(default)]
    pub radiant_score: u32,
    #[serde(default)]
    pub dire_score: u32,
    #[serde(default)]
    pub radiant_win: bool,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub start_time: i64,
}

// Steam app-news feed for Dota 2
#[derive(Debug, Deserialize)]
pub struct NewsFeed {
    pub appnews: AppNews,
}

#[derive(Debug, Deserialize)]
pub struct AppNews {
    pub newsitems: Vec<NewsItem>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct NewsItem {
    pub gid: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: i64,
}
