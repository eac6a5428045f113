use crate::domain::model::ParsedMatch;
use crate::utils::error::ParseError;

/// Parses `"<Team A> <score>, <Team B> <score>"`.
///
/// The line is trimmed first. Each side of the single comma is trimmed and
/// split at its last whitespace run: the name is everything before it, the
/// score everything after. Blank lines are the caller's business and are
/// reported as [`ParseError::MalformedLine`] here.
pub fn parse_line(line: &str) -> Result<ParsedMatch, ParseError> {
    let trimmed = line.trim();
    let malformed = || ParseError::MalformedLine {
        line: trimmed.to_string(),
    };

    let (half_a, half_b) = trimmed.split_once(',').ok_or_else(malformed)?;
    if half_b.contains(',') {
        return Err(malformed());
    }

    let (team_a, score_a) = split_half(half_a).ok_or_else(malformed)?;
    let (team_b, score_b) = split_half(half_b).ok_or_else(malformed)?;

    Ok(ParsedMatch {
        team_a: team_a.to_string(),
        score_a: parse_score(half_a, score_a)?,
        team_b: team_b.to_string(),
        score_b: parse_score(half_b, score_b)?,
    })
}

fn split_half(half: &str) -> Option<(&str, &str)> {
    let (name, score) = half.trim().rsplit_once(char::is_whitespace)?;
    Some((name.trim_end(), score))
}

fn parse_score(half: &str, score: &str) -> Result<u32, ParseError> {
    score
        .parse::<u32>()
        .map_err(|source| ParseError::MalformedScore {
            half: half.trim().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_line() {
        let parsed = parse_line("Tarantulas 1, FC Awesome 0").unwrap();
        assert_eq!(
            parsed,
            ParsedMatch {
                team_a: "Tarantulas".to_string(),
                score_a: 1,
                team_b: "FC Awesome".to_string(),
                score_b: 0,
            }
        );
    }

    #[test]
    fn test_parse_multi_word_names() {
        let parsed = parse_line("Best in the Game 5, Worst in the game 0").unwrap();
        assert_eq!(parsed.team_a, "Best in the Game");
        assert_eq!(parsed.score_a, 5);
        assert_eq!(parsed.team_b, "Worst in the game");
        assert_eq!(parsed.score_b, 0);
    }

    #[test]
    fn test_parse_trims_outer_and_boundary_whitespace() {
        let parsed = parse_line("  Lions \t 3 ,   Snakes   3  \n").unwrap();
        assert_eq!(parsed.team_a, "Lions");
        assert_eq!(parsed.score_a, 3);
        assert_eq!(parsed.team_b, "Snakes");
        assert_eq!(parsed.score_b, 3);
    }

    #[test]
    fn test_parse_keeps_internal_double_spaces() {
        let parsed = parse_line("FC  Awesome 2, Lions 1").unwrap();
        assert_eq!(parsed.team_a, "FC  Awesome");
    }

    #[test]
    fn test_missing_comma_is_malformed_line() {
        let err = parse_line("Tarantulas 1 FC Awesome 0").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedLine {
                line: "Tarantulas 1 FC Awesome 0".to_string()
            }
        );
    }

    #[test]
    fn test_extra_comma_is_malformed_line() {
        let err = parse_line("Lions 1, Snakes 2, Grouches 3").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { .. }));
    }

    #[test]
    fn test_half_without_separator_is_malformed_line() {
        assert!(matches!(
            parse_line("Lions3, Snakes 3"),
            Err(ParseError::MalformedLine { .. })
        ));
        assert!(matches!(
            parse_line("Lions 3, "),
            Err(ParseError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_non_numeric_score_carries_offending_half() {
        match parse_line("Lions 3, Snakes three") {
            Err(ParseError::MalformedScore { half, .. }) => assert_eq!(half, "Snakes three"),
            other => panic!("expected MalformedScore, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_score_is_malformed() {
        assert!(matches!(
            parse_line("Lions -1, Snakes 3"),
            Err(ParseError::MalformedScore { .. })
        ));
    }
}
