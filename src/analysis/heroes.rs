use crate::api::models::{Hero, MatchPlayer};

/// Finds the hero record a player picked, by hero ID.
pub fn find_hero(heroes: &[Hero], hero_id: u32) -> Option<&Hero> {
    heroes.iter().find(|hero| hero.id == hero_id)
}

pub fn localized_name<'a>(heroes: &'a [Hero], hero_id: u32) -> &'a str {
    find_hero(heroes, hero_id)
        .map(|hero| hero.localized_name.as_str())
        .unwrap_or("Unknown")
}

/// Splits a match's players into (radiant, dire), preserving order.
pub fn split_teams(players: &[MatchPlayer]) -> (Vec<&MatchPlayer>, Vec<&MatchPlayer>) {
    players.iter().partition(|player| player.is_radiant())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(id: u32, name: &str, localized: &str) -> Hero {
        Hero {
            id,
            name: name.to_string(),
            localized_name: localized.to_string(),
        }
    }

    fn catalog() -> Vec<Hero> {
        vec![
            hero(1, "npc_dota_hero_antimage", "Anti-Mage"),
            hero(14, "npc_dota_hero_pudge", "Pudge"),
        ]
    }

    #[test]
    fn test_find_hero_by_id() {
        let heroes = catalog();
        assert_eq!(find_hero(&heroes, 14).unwrap().localized_name, "Pudge");
        assert!(find_hero(&heroes, 999).is_none());
    }

    #[test]
    fn test_localized_name_falls_back_for_unknown_ids() {
        let heroes = catalog();
        assert_eq!(localized_name(&heroes, 1), "Anti-Mage");
        assert_eq!(localized_name(&heroes, 42), "Unknown");
    }

    #[test]
    fn test_split_teams_by_player_slot() {
        let players: Vec<crate::api::models::MatchPlayer> = serde_json::from_str(
            r#"[
                {"account_id": 1, "player_slot": 0, "hero_id": 1},
                {"account_id": 2, "player_slot": 4, "hero_id": 2},
                {"account_id": 3, "player_slot": 128, "hero_id": 3},
                {"account_id": 4, "player_slot": 132, "hero_id": 4}
            ]"#,
        )
        .unwrap();

        let (radiant, dire) = split_teams(&players);
        assert_eq!(radiant.len(), 2);
        assert_eq!(dire.len(), 2);
        assert_eq!(radiant[0].hero_id, 1);
        assert_eq!(dire[0].hero_id, 3);
    }
}
