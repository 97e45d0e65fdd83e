use crate::aggregator::AggregatedMatch;
use crate::analysis::{abilities, heroes};
use crate::api::models::{MatchPlayer, NewsItem, PlayerProfile, ProMatch};
use chrono::DateTime;
use colored::*;
use std::collections::HashMap;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct PlayerRow {
    hero: String,
    player: String,
    rank: String,
    #[tabled(rename = "K/D/A")]
    kda: String,
    #[tabled(rename = "GPM")]
    gpm: String,
    #[tabled(rename = "XPM")]
    xpm: String,
    #[tabled(rename = "LH")]
    last_hits: String,
}

#[derive(Tabled)]
struct ProMatchRow {
    league: String,
    radiant: String,
    dire: String,
    score: String,
    winner: String,
    duration: String,
    date: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_match_report(aggregated: &AggregatedMatch) {
    let details = &aggregated.details;

    let result = if details.radiant_win {
        "Radiant Victory".green().bold()
    } else {
        "Dire Victory".red().bold()
    };

    println!("\n{}", format!("🎮 MATCH {}", details.match_id).bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    println!(
        "{}   {} : {}   ⏱ {}   {}\n",
        result,
        details.radiant_score.to_string().green(),
        details.dire_score.to_string().red(),
        format_duration(details.duration),
        format_start_time(details.start_time)
    );

    let team = |on_radiant: bool| -> Vec<PlayerRow> {
        details
            .players
            .iter()
            .zip(&aggregated.profiles)
            .filter(|(player, _)| player.is_radiant() == on_radiant)
            .map(|(player, profile)| player_row(player, profile, aggregated))
            .collect()
    };

    println!("{}", "🛡 Radiant".green().bold());
    let mut table = Table::new(team(true));
    table.with(Style::rounded());
    println!("{}\n", table);

    println!("{}", "🔥 Dire".red().bold());
    let mut table = Table::new(team(false));
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn player_row(
    player: &MatchPlayer,
    profile: &PlayerProfile,
    aggregated: &AggregatedMatch,
) -> PlayerRow {
    PlayerRow {
        hero: heroes::localized_name(&aggregated.heroes, player.hero_id).to_string(),
        player: player_display_name(player, profile),
        rank: format_rank(profile.rank_tier, profile.leaderboard_rank),
        kda: format!("{}/{}/{}", player.kills, player.deaths, player.assists),
        gpm: player.gold_per_min.to_string(),
        xpm: player.xp_per_min.to_string(),
        last_hits: player.last_hits.to_string(),
    }
}

// Profile persona name wins over the name recorded in the match
pub fn player_display_name(player: &MatchPlayer, profile: &PlayerProfile) -> String {
    profile
        .profile
        .as_ref()
        .and_then(|info| info.personaname.clone())
        .or_else(|| player.personaname.clone())
        .unwrap_or_else(|| "Anonymous".to_string())
}

pub fn display_ability_builds(
    aggregated: &AggregatedMatch,
    ability_ids: &HashMap<String, String>,
) {
    println!("{}", "📈 ABILITY BUILDS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    for (player, profile) in aggregated.details.players.iter().zip(&aggregated.profiles) {
        let hero = heroes::localized_name(&aggregated.heroes, player.hero_id);
        println!(
            "{} ({})",
            hero.bold(),
            player_display_name(player, profile)
        );

        match &player.ability_upgrades_arr {
            Some(upgrades) if !upgrades.is_empty() => {
                let build = abilities::resolve_build(upgrades, ability_ids);
                let rendered: Vec<String> = build
                    .iter()
                    .map(|pick| {
                        if pick.talent {
                            format!("{}", pick.name.yellow())
                        } else {
                            pick.name.clone()
                        }
                    })
                    .collect();
                println!("  {}\n", rendered.join(", "));
            }
            _ => println!("  {}\n", "no ability data".dimmed()),
        }
    }
}

pub fn display_pro_matches(matches: &[ProMatch]) {
    println!("\n{}", "🏆 RECENT PRO MATCHES".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if matches.is_empty() {
        println!("{}", "No pro matches available".yellow());
        return;
    }

    let rows: Vec<ProMatchRow> = matches
        .iter()
        .map(|m| ProMatchRow {
            league: m.league_name.clone().unwrap_or_else(|| "-".to_string()),
            radiant: m.radiant_name.clone().unwrap_or_else(|| "Radiant".to_string()),
            dire: m.dire_name.clone().unwrap_or_else(|| "Dire".to_string()),
            score: format!("{} : {}", m.radiant_score, m.dire_score),
            winner: if m.radiant_win {
                "Radiant".to_string()
            } else {
                "Dire".to_string()
            },
            duration: format_duration(m.duration),
            date: format_start_time(m.start_time),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_news(items: &[NewsItem]) {
    println!("\n{}", "📰 DOTA 2 NEWS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if items.is_empty() {
        println!("{}", "No news available".yellow());
        return;
    }

    for item in items {
        println!("{}  {}", format_news_date(item.date).dimmed(), item.title.bold());
        println!("   {}\n", item.url.cyan());
    }
}

pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

// rank_tier packs medal and stars into two digits, e.g. 54 = Legend ★4.
// Top Immortals carry a leaderboard position instead of stars.
pub fn format_rank(rank_tier: Option<u8>, leaderboard_rank: Option<u32>) -> String {
    const MEDALS: [&str; 8] = [
        "Herald", "Guardian", "Crusader", "Archon", "Legend", "Ancient", "Divine", "Immortal",
    ];

    let Some(tier) = rank_tier else {
        return "Uncalibrated".to_string();
    };

    let medal = (tier / 10) as usize;
    let stars = tier % 10;

    match medal {
        1..=7 => {
            let name = MEDALS[medal - 1];
            if stars > 0 {
                format!("{} ★{}", name, stars)
            } else {
                name.to_string()
            }
        }
        8 => match leaderboard_rank {
            Some(position) => format!("Immortal #{}", position),
            None => "Immortal".to_string(),
        },
        _ => "Uncalibrated".to_string(),
    }
}

fn format_start_time(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(time) => time.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => "-".to_string(),
    }
}

fn format_news_date(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(time) => time.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(2863), "47:43");
        assert_eq!(format_duration(4063), "1:07:43");
    }

    #[test]
    fn test_format_rank_medals() {
        assert_eq!(format_rank(None, None), "Uncalibrated");
        assert_eq!(format_rank(Some(11), None), "Herald ★1");
        assert_eq!(format_rank(Some(54), None), "Legend ★4");
        assert_eq!(format_rank(Some(75), None), "Divine ★5");
        assert_eq!(format_rank(Some(80), None), "Immortal");
        assert_eq!(format_rank(Some(80), Some(12)), "Immortal #12");
        // tier 0 comes back for freshly reset accounts
        assert_eq!(format_rank(Some(0), None), "Uncalibrated");
    }

    #[test]
    fn test_player_display_name_fallbacks() {
        let player: MatchPlayer = serde_json::from_str(
            r#"{"account_id": 1, "player_slot": 0, "hero_id": 1, "personaname": "in-match"}"#,
        )
        .unwrap();
        let anonymous: MatchPlayer =
            serde_json::from_str(r#"{"account_id": null, "player_slot": 1, "hero_id": 2}"#)
                .unwrap();

        let full_profile: PlayerProfile =
            serde_json::from_str(r#"{"profile": {"personaname": "from-profile"}}"#).unwrap();
        let empty_profile = PlayerProfile::default();

        assert_eq!(player_display_name(&player, &full_profile), "from-profile");
        assert_eq!(player_display_name(&player, &empty_profile), "in-match");
        assert_eq!(player_display_name(&anonymous, &empty_profile), "Anonymous");
    }
}
