use crate::api::client::OpenDotaClient;
use crate::api::models::{Hero, MatchDetails, PlayerProfile};
use crate::error::AppError;
use std::thread;

// History page size when resolving the default account's latest match
const HISTORY_LOOKBACK: usize = 20;

/// Everything the match report needs, composed from three OpenDota
/// fetches. `profiles[i]` belongs to `details.players[i]`.
#[derive(Debug)]
pub struct AggregatedMatch {
    pub heroes: Vec<Hero>,
    pub details: MatchDetails,
    pub profiles: Vec<PlayerProfile>,
}

/// Stateless aggregation service over the OpenDota client. Holds no
/// per-call state, so concurrent `retrieve` calls are independent.
pub struct MatchAggregator<'a> {
    client: &'a OpenDotaClient,
}

impl<'a> MatchAggregator<'a> {
    pub fn new(client: &'a OpenDotaClient) -> Self {
        MatchAggregator { client }
    }

    /// Fetches match details, the hero catalog, and every participating
    /// player's profile for one match. A `match_id` of 0 means "the most
    /// recent match of the configured default account". Any failed fetch
    /// fails the whole call; there are no partial results.
    pub fn retrieve(&self, match_id: u64) -> Result<AggregatedMatch, AppError> {
        let match_id = if match_id == 0 {
            self.resolve_default_match_id()?
        } else {
            match_id
        };

        let details = self.client.get_match(match_id)?;
        let heroes = self.client.get_heroes()?;
        let profiles = self.fetch_profiles(&details)?;

        Ok(AggregatedMatch {
            heroes,
            details,
            profiles,
        })
    }

    /// Most recent match ID from the default account's history.
    pub fn resolve_default_match_id(&self) -> Result<u64, AppError> {
        let account_id = self.client.config().default_account_id;
        let history = self.client.get_match_history(account_id, HISTORY_LOOKBACK)?;

        history
            .first()
            .map(|entry| entry.match_id)
            .ok_or(AppError::EmptyHistory(account_id))
    }

    // Profile fan-out: one request per player, issued together and joined
    // in player order. Anonymous players (no account ID on the wire) get
    // an empty placeholder profile without a request, so the profile
    // sequence always lines up with the player sequence.
    fn fetch_profiles(
        &self,
        details: &MatchDetails,
    ) -> Result<Vec<PlayerProfile>, AppError> {
        thread::scope(|scope| {
            let handles: Vec<_> = details
                .players
                .iter()
                .map(|player| {
                    scope.spawn(move || match player.account_id {
                        Some(account_id) => self.client.get_player(account_id),
                        None => Ok(PlayerProfile::default()),
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().expect("profile fetch thread panicked"))
                .collect()
        })
    }
}
