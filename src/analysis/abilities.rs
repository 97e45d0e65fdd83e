use std::collections::HashMap;

// Talent-tree picks appear in the upgrade history as special_bonus abilities
const TALENT_MARKER: &str = "special_bonus";

#[derive(Debug, Clone, PartialEq)]
pub struct AbilityPick {
    pub level: usize,
    pub name: String,
    pub talent: bool,
}

/// Resolves a player's ability-upgrade history (one numeric ability ID per
/// level-up) against the ability-ID constants map. IDs missing from the
/// constants resolve to "unknown" rather than failing the whole build.
pub fn resolve_build(
    upgrades: &[u64],
    ability_ids: &HashMap<String, String>,
) -> Vec<AbilityPick> {
    upgrades
        .iter()
        .enumerate()
        .map(|(idx, id)| {
            let name = ability_ids
                .get(&id.to_string())
                .cloned()
                .unwrap_or_else(|| "unknown".to_string());
            let talent = name.contains(TALENT_MARKER);
            AbilityPick {
                level: idx + 1,
                name,
                talent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> HashMap<String, String> {
        [
            ("5003", "antimage_mana_break"),
            ("5004", "antimage_blink"),
            ("6869", "special_bonus_unique_antimage"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_resolves_names_in_level_order() {
        let build = resolve_build(&[5003, 5004, 5003], &constants());
        assert_eq!(build.len(), 3);
        assert_eq!(build[0].level, 1);
        assert_eq!(build[0].name, "antimage_mana_break");
        assert_eq!(build[1].name, "antimage_blink");
        assert_eq!(build[2].level, 3);
        assert_eq!(build[2].name, "antimage_mana_break");
    }

    #[test]
    fn test_flags_talent_picks() {
        let build = resolve_build(&[5004, 6869], &constants());
        assert!(!build[0].talent);
        assert!(build[1].talent);
    }

    #[test]
    fn test_unknown_ids_resolve_to_placeholder() {
        let build = resolve_build(&[12345], &constants());
        assert_eq!(build[0].name, "unknown");
        assert!(!build[0].talent);
    }

    #[test]
    fn test_empty_history_yields_empty_build() {
        assert!(resolve_build(&[], &constants()).is_empty());
    }
}
