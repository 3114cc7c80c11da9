//! Display moveset recommendation
//!
//! A display heuristic, not a battle calculator: moves that appear in a
//! fixed priority list are pulled to the front of the listing, everything
//! else keeps its place, and the result is capped at four entries.

/// Moves favored for display, highest priority first
pub const PRIORITY_MOVES: [&str; 13] = [
    "earthquake",
    "shadow ball",
    "close combat",
    "ice beam",
    "thunderbolt",
    "flamethrower",
    "hydro pump",
    "psychic",
    "moonblast",
    "iron head",
    "stone edge",
    "dark pulse",
    "draco meteor",
];

/// Maximum number of moves worth highlighting at once
pub const MOVESET_SIZE: usize = 4;

/// Canonical move-name form used for matching: lowercase, spaces instead of
/// hyphens (the API serves `shadow-ball`, the priority list says
/// `shadow ball`).
pub fn canonical_move_name(name: &str) -> String {
    name.to_lowercase().replace('-', " ")
}

fn is_priority(name: &str) -> bool {
    let canonical = canonical_move_name(name);
    PRIORITY_MOVES.contains(&canonical.as_str())
}

/// Pick up to [`MOVESET_SIZE`] moves to highlight.
///
/// Priority-list matches come first, in their input order; the rest of the
/// input follows, also in input order. Duplicates collapse to their first
/// occurrence. Entries are returned spelled exactly as the input spells
/// them, and nothing outside the input is ever returned.
pub fn recommend(moves: &[String]) -> Vec<String> {
    let mut picked: Vec<String> = Vec::new();

    let front = moves.iter().filter(|m| is_priority(m));
    for mv in front.chain(moves.iter()) {
        if !picked.contains(mv) {
            picked.push(mv.clone());
        }
        if picked.len() == MOVESET_SIZE {
            break;
        }
    }

    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_priority_match_moves_to_front() {
        assert_eq!(
            recommend(&moves(&["tackle", "earthquake", "growl"])),
            moves(&["earthquake", "tackle", "growl"])
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(recommend(&[]), Vec::<String>::new());
    }

    #[test]
    fn test_no_priority_matches_keeps_first_four() {
        assert_eq!(
            recommend(&moves(&["tackle", "growl", "leer", "splash", "pound"])),
            moves(&["tackle", "growl", "leer", "splash"])
        );
    }

    #[test]
    fn test_never_exceeds_four() {
        let all = moves(&[
            "tackle",
            "earthquake",
            "growl",
            "ice beam",
            "thunderbolt",
            "flamethrower",
        ]);
        let picked = recommend(&all);
        assert_eq!(
            picked,
            moves(&["earthquake", "ice beam", "thunderbolt", "flamethrower"])
        );
        assert!(picked.len() <= MOVESET_SIZE);
    }

    #[test]
    fn test_only_returns_input_moves() {
        let input = moves(&["tackle", "growl"]);
        let picked = recommend(&input);
        assert_eq!(picked, input);
        for m in &picked {
            assert!(input.contains(m));
        }
    }

    #[test]
    fn test_hyphenated_api_names_match_priority_list() {
        // PokeAPI spells move names with hyphens; matching canonicalizes
        // but the output keeps the input spelling
        assert_eq!(
            recommend(&moves(&["tackle", "shadow-ball", "growl"])),
            moves(&["shadow-ball", "tackle", "growl"])
        );
    }

    #[test]
    fn test_duplicates_collapse_to_first_occurrence() {
        assert_eq!(
            recommend(&moves(&["tackle", "earthquake", "tackle", "growl"])),
            moves(&["earthquake", "tackle", "growl"])
        );
    }

    #[test]
    fn test_fewer_than_four_kept_in_full() {
        assert_eq!(
            recommend(&moves(&["earthquake", "growl"])),
            moves(&["earthquake", "growl"])
        );
    }

    #[test]
    fn test_idempotent() {
        let input = moves(&["hydro-pump", "tackle", "ice-beam"]);
        assert_eq!(recommend(&input), recommend(&input));
    }

    #[test]
    fn test_canonical_move_name() {
        assert_eq!(canonical_move_name("Shadow-Ball"), "shadow ball");
        assert_eq!(canonical_move_name("earthquake"), "earthquake");
        assert_eq!(canonical_move_name("draco-meteor"), "draco meteor");
    }
}
