use crate::domain::model::{RankedEntry, TeamPoints};

/// Orders the table by points descending, then by name ascending.
///
/// Only the order is decided here; rank numbers are assigned when rendering.
pub fn rank(points: &TeamPoints) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = points
        .iter()
        .map(|(name, points)| RankedEntry::new(name, points))
        .collect();

    entries.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, u64)]) -> TeamPoints {
        pairs.iter().map(|(name, points)| (*name, *points)).collect()
    }

    #[test]
    fn test_rank_by_points_then_name() {
        let points = table(&[
            ("Tarantulas", 6),
            ("Grouches", 0),
            ("FC Awesome", 1),
            ("Lions", 5),
            ("Snakes", 1),
        ]);

        assert_eq!(
            rank(&points),
            vec![
                RankedEntry::new("Tarantulas", 6),
                RankedEntry::new("Lions", 5),
                RankedEntry::new("FC Awesome", 1),
                RankedEntry::new("Snakes", 1),
                RankedEntry::new("Grouches", 0),
            ]
        );
    }

    #[test]
    fn test_ties_are_alphabetical() {
        let points = table(&[
            ("bb team", 3),
            ("ab team", 6),
            ("ca team", 1),
            ("aa team", 6),
            ("bc team", 3),
            ("cb team", 1),
            ("ba team", 3),
        ]);

        let names: Vec<String> = rank(&points).into_iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec!["aa team", "ab team", "ba team", "bb team", "bc team", "ca team", "cb team"]
        );
    }

    #[test]
    fn test_name_order_is_case_sensitive() {
        let points = table(&[("lions", 3), ("Lions", 3), ("Snakes", 3)]);
        let names: Vec<String> = rank(&points).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Lions", "Snakes", "lions"]);
    }

    #[test]
    fn test_empty_table() {
        assert!(rank(&TeamPoints::new()).is_empty());
    }
}
