use super::{Catalog, LocationRecord};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Best fuzzy match for `query` against location names and ids.
/// Ties keep catalog order.
pub fn best_match<'a>(catalog: &'a Catalog, query: &str) -> Option<&'a LocationRecord> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut best: Option<(i64, &LocationRecord)> = None;

    for location in catalog.locations() {
        let score = [
            matcher.fuzzy_match(&location.name, query),
            matcher.fuzzy_match(&location.id, query),
        ]
        .into_iter()
        .flatten()
        .max();

        if let Some(score) = score {
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, location));
            }
        }
    }

    best.map(|(_, location)| location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_partial_names() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(best_match(&catalog, "willow").unwrap().id, "willow_place");
        assert_eq!(best_match(&catalog, "vilage").unwrap().id, "the_village");
        assert_eq!(best_match(&catalog, "CHURCH").unwrap().id, "church_hill");
    }

    #[test]
    fn matches_ids() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(best_match(&catalog, "the_current").unwrap().id, "the_current");
    }

    #[test]
    fn empty_or_unmatched_queries_find_nothing() {
        let catalog = Catalog::builtin().unwrap();
        assert!(best_match(&catalog, "   ").is_none());
        assert!(best_match(&catalog, "zzzz").is_none());
    }
}
