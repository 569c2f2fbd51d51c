/// Splits stripped mainline text into move tokens: move-number markers
/// (any token containing '.') are dropped, and the last remaining token is
/// discarded as the game-terminator marker (`1-0`, `0-1`, `1/2-1/2`, `*`).
pub fn mainline_moves(stripped: &str) -> Vec<String> {
    let mut tokens: Vec<&str> = stripped
        .split_whitespace()
        .filter(|token| !token.contains('.'))
        .collect();

    tokens.pop();

    tokens.into_iter().map(str::to_string).collect()
}

/// Removes trailing check and checkmate marks from a SAN token.
pub fn without_checkmarks(mv: &str) -> &str {
    mv.trim_end_matches(['+', '#'])
}

#[cfg(test)]
mod tests {
    use super::{mainline_moves, without_checkmarks};

    #[test]
    fn drops_move_numbers_and_the_result_marker() {
        assert_eq!(
            mainline_moves("1. e4 e5 2. Nf3 Nc6 1-0"),
            ["e4", "e5", "Nf3", "Nc6"]
        );
    }

    #[test]
    fn black_to_move_markers_are_dropped() {
        assert_eq!(mainline_moves("12... Qxd5 13. Nc3 1/2-1/2"), ["Qxd5", "Nc3"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(mainline_moves("").is_empty());
    }

    #[test]
    fn lone_result_marker_yields_nothing() {
        assert!(mainline_moves("*").is_empty());
    }

    #[test]
    fn checkmarks_are_preserved_in_tokens() {
        assert_eq!(
            mainline_moves("1. e4 e5 2. Qh5 Nc6 3. Qxf7# 1-0"),
            ["e4", "e5", "Qh5", "Nc6", "Qxf7#"]
        );
    }

    #[test]
    fn without_checkmarks_trims_only_trailing_marks() {
        assert_eq!(without_checkmarks("Qxf7#"), "Qxf7");
        assert_eq!(without_checkmarks("Nf3+"), "Nf3");
        assert_eq!(without_checkmarks("O-O"), "O-O");
        assert_eq!(without_checkmarks("e4"), "e4");
    }
}
