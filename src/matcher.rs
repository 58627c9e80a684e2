use std::cmp::Ordering;
use std::collections::BinaryHeap;
use strsim::jaro_winkler;

use crate::data::AppCategory;

const CUTOFF: f64 = 0.75;

struct ScoredCategory<'a> {
    score: f64,
    category: &'a AppCategory,
}

impl PartialEq for ScoredCategory<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for ScoredCategory<'_> {}

impl Ord for ScoredCategory<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.score.total_cmp(&self.score)
    }
}

impl PartialOrd for ScoredCategory<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Top-level categories followed by their children.
pub fn categories(root: &AppCategory) -> Vec<&AppCategory> {
    let mut all = Vec::new();
    for category in root.children.iter().flatten() {
        all.push(category);
        all.extend(category.children.iter().flatten());
    }
    all
}

/// Titled categories scoring at least `cutoff` against `word`, best first.
fn get_close_matches<'a>(
    word: &str,
    possibilities: &[&'a AppCategory],
    cutoff: f64,
) -> Vec<&'a AppCategory> {
    let mut heap: BinaryHeap<ScoredCategory> = BinaryHeap::new();

    for &category in possibilities {
        let Some(title) = &category.title else {
            continue;
        };
        let score = jaro_winkler(word, &title.to_lowercase());
        if score >= cutoff {
            heap.push(ScoredCategory { score, category });
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|scored| scored.category)
        .collect()
}

/// Outcome of looking a category up by title.
#[derive(Debug)]
pub enum CategoryMatch<'a> {
    /// Exact title match, or the only close match.
    Found(&'a AppCategory),
    /// Several close matches, best first.
    Suggestions(Vec<&'a AppCategory>),
    NotFound,
}

/// Finds a category by title: case-insensitive exact match first, then close
/// matches by Jaro-Winkler score.
pub fn find_category<'a>(root: &'a AppCategory, query: &str) -> CategoryMatch<'a> {
    let query = query.to_lowercase();
    let all = categories(root);

    if let Some(&category) = all
        .iter()
        .find(|c| c.title.as_deref().map(str::to_lowercase).as_deref() == Some(query.as_str()))
    {
        return CategoryMatch::Found(category);
    }

    let mut matches = get_close_matches(&query, &all, CUTOFF);
    match matches.len() {
        0 => CategoryMatch::NotFound,
        1 => CategoryMatch::Found(matches.remove(0)),
        _ => CategoryMatch::Suggestions(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, title: &str) -> AppCategory {
        AppCategory {
            id: Some(id.to_string()),
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn root() -> AppCategory {
        let mut games = category("games", "Games");
        games.add_child(category("puzzle", "Puzzle"));
        AppCategory {
            children: Some(vec![
                category("news", "News"),
                category("weather", "Weather"),
                games,
            ]),
            ..Default::default()
        }
    }

    #[test]
    fn lists_top_level_then_children() {
        let root = root();
        let ids: Vec<_> = categories(&root)
            .into_iter()
            .filter_map(|c| c.id.as_deref())
            .collect();
        assert_eq!(ids, vec!["news", "weather", "games", "puzzle"]);
    }

    #[test]
    fn exact_match_ignores_case() {
        let root = root();
        match find_category(&root, "pUZZLE") {
            CategoryMatch::Found(found) => assert_eq!(found.id.as_deref(), Some("puzzle")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn single_close_match_is_returned() {
        let root = root();
        match find_category(&root, "wether") {
            CategoryMatch::Found(found) => assert_eq!(found.id.as_deref(), Some("weather")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unknown_title_is_not_found() {
        let root = root();
        assert!(matches!(
            find_category(&root, "xylophone"),
            CategoryMatch::NotFound
        ));
    }

    #[test]
    fn several_close_matches_are_suggested() {
        let mut root = root();
        root.add_child(category("gamez", "Gamez"));
        match find_category(&root, "gam") {
            CategoryMatch::Suggestions(found) => {
                let mut ids: Vec<_> = found.iter().filter_map(|c| c.id.as_deref()).collect();
                ids.sort();
                assert_eq!(ids, vec!["games", "gamez"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn close_matches_are_best_first() {
        let all = vec![category("a", "Games"), category("b", "Gamez"), category("c", "Maps")];
        let refs: Vec<&AppCategory> = all.iter().collect();
        let matches = get_close_matches("games", &refs, CUTOFF);
        let ids: Vec<_> = matches.iter().filter_map(|c| c.id.as_deref()).collect();
        assert_eq!(ids.first().copied(), Some("a"));
        assert!(!ids.contains(&"c"));
    }
}
