mod aggregator;
mod analysis;
mod api;
mod cache;
mod config;
mod display;
mod error;
mod rate_limit;

use aggregator::MatchAggregator;
use api::client::OpenDotaClient;
use cache::ResponseCache;
use clap::Parser;
use config::Config;
use display::output::{
    display_ability_builds, display_error, display_info, display_match_report, display_news,
    display_pro_matches, display_success,
};
use error::AppError;
use indicatif::ProgressBar;
use rate_limit::RequestLog;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "Dota Stats")]
#[command(about = "View Dota 2 match statistics from OpenDota", long_about = None)]
struct Args {
    /// Match ID to view (0 = most recent match of the default account)
    #[arg(default_value = "0")]
    match_id: u64,

    /// Include each player's ability build
    #[arg(short, long)]
    abilities: bool,

    /// List recent professional matches instead of a match report
    #[arg(long)]
    pro_matches: bool,

    /// List the latest Dota 2 news instead of a match report
    #[arg(long)]
    news: bool,

    /// Number of rows for listings
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Ignore cached responses and refetch everything
    #[arg(long)]
    refresh: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?;

    let mut usage = RequestLog::load()?;
    if !usage.can_make_request() {
        usage.display_status();
        return Err(AppError::BudgetExhausted);
    }

    let cache = if args.refresh {
        None
    } else {
        ResponseCache::open().ok()
    };
    let client = OpenDotaClient::with_cache(config, cache);

    if args.pro_matches {
        display_info("Fetching recent pro matches...");
        let mut matches = client.get_pro_matches()?;
        usage.record_requests(1);
        usage.save().ok();

        matches.truncate(args.limit);
        display_pro_matches(&matches);
    } else if args.news {
        // Steam feed, not OpenDota - no budget accounting
        display_info("Fetching Dota 2 news...");
        let feed = client.get_dota_news()?;

        let mut items = feed.appnews.newsitems;
        items.truncate(args.limit);
        display_news(&items);
    } else {
        show_match(&args, &client, &mut usage)?;
    }

    usage.display_status();
    Ok(())
}

fn show_match(
    args: &Args,
    client: &OpenDotaClient,
    usage: &mut RequestLog,
) -> Result<(), AppError> {
    if args.match_id == 0 {
        display_info("No match ID given, using the default account's most recent match");
    } else {
        display_info(&format!("Fetching match {}", args.match_id));
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching match data...");
    pb.enable_steady_tick(Duration::from_millis(120));

    let aggregator = MatchAggregator::new(client);
    let result = aggregator.retrieve(args.match_id);
    pb.finish_and_clear();

    let aggregated = result?;

    // History (for the 0 sentinel) + details + heroes + one call per
    // named player. Cache hits are counted too, so the budget errs high.
    let profile_calls = aggregated
        .details
        .players
        .iter()
        .filter(|player| player.account_id.is_some())
        .count() as u32;
    let mut calls = 2 + profile_calls;
    if args.match_id == 0 {
        calls += 1;
    }
    usage.record_requests(calls);
    usage.save().ok();

    display_success(&format!(
        "Match {} loaded ({} players)",
        aggregated.details.match_id,
        aggregated.details.players.len()
    ));
    display_match_report(&aggregated);

    if args.abilities {
        let ability_ids = client.get_ability_ids()?;
        usage.record_requests(1);
        usage.save().ok();

        display_ability_builds(&aggregated, &ability_ids);
    }

    Ok(())
}
