//! Node and arc consistency enforcement (AC-3)

use super::domains::DomainStore;
use super::variables::{Crossword, VarId};
use std::collections::VecDeque;

/// Remove every candidate whose length differs from its variable's length
///
/// Idempotent: a second pass removes nothing further.
pub fn enforce_node_consistency(crossword: &Crossword, domains: &mut DomainStore) {
    for (id, var) in crossword.variables().iter().enumerate() {
        let length = var.length;
        domains.retain(id, |word| crossword.words().char_len(word) == length);
    }
}

/// Make `x` arc-consistent with `y`
///
/// If the pair overlaps at (i, j), drops every word in domain(x) with no
/// supporting word in domain(y) agreeing on the shared character. Never
/// touches domain(y). Returns whether domain(x) changed; a non-overlapping
/// pair is consistent as-is.
pub fn revise(crossword: &Crossword, domains: &mut DomainStore, x: VarId, y: VarId) -> bool {
    let Some((i, j)) = crossword.overlap(x, y) else {
        return false;
    };

    let words = crossword.words();
    let unsupported: Vec<_> = domains
        .domain(x)
        .iter()
        .copied()
        .filter(|&word| {
            let Some(&ch) = words.glyphs(word).get(i) else {
                // Too short to reach the shared cell; only possible before
                // node consistency has run
                return true;
            };
            !domains
                .domain(y)
                .iter()
                .any(|&other| words.glyphs(other).get(j) == Some(&ch))
        })
        .collect();

    let revised = !unsupported.is_empty();
    for word in unsupported {
        domains.remove(x, word);
    }
    revised
}

/// Enforce arc consistency over a worklist of directed arcs
///
/// Seeds with all ordered neighbor pairs unless the caller supplies an
/// initial arc list. Whenever a revision shrinks domain(x), every arc (z, x)
/// for the other neighbors z of x is re-enqueued, since their consistency may
/// have been invalidated. Returns true iff every domain is non-empty once the
/// worklist drains; a domain that was already empty going in (a slot no word
/// fits) fails the run even though no revision touched it.
pub fn ac3(
    crossword: &Crossword,
    domains: &mut DomainStore,
    initial_arcs: Option<Vec<(VarId, VarId)>>,
) -> bool {
    let mut worklist: VecDeque<(VarId, VarId)> = match initial_arcs {
        Some(arcs) => arcs.into(),
        None => (0..crossword.var_count())
            .flat_map(|x| crossword.neighbors(x).iter().map(move |&y| (x, y)))
            .collect(),
    };

    while let Some((x, y)) = worklist.pop_front() {
        if revise(crossword, domains, x, y) {
            if domains.is_empty(x) {
                return false;
            }
            for &z in crossword.neighbors(x) {
                if z != y {
                    worklist.push_back((z, x));
                }
            }
        }
    }

    (0..crossword.var_count()).all(|var| !domains.is_empty(var))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::variables::Crossword;
    use crate::grid::{Grid, WordList};

    fn crossing_model(words: &str) -> Crossword {
        // Variable 0: (0,1) down, length 3; variable 1: (1,0) across, length 4;
        // they share the second cell of each, so down[1] == across[1]
        Crossword::new(Grid::parse("#_##\n____\n#_##\n").unwrap(), WordList::parse(words))
    }

    fn ids(crossword: &Crossword, words: &[&str]) -> Vec<usize> {
        words
            .iter()
            .map(|w| {
                crossword
                    .words()
                    .ids()
                    .find(|&id| crossword.words().word(id) == *w)
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_node_consistency_filters_by_length() {
        let crossword = crossing_model("cat\ndog\ngoat\nswim\nzebra\n");
        let mut domains = DomainStore::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);

        for (id, var) in crossword.variables().iter().enumerate() {
            for word in domains.candidates(id) {
                assert_eq!(crossword.words().char_len(word), var.length);
            }
        }
        // Length 3 for the down slot, length 4 for the across slot
        assert_eq!(domains.len(0), 2);
        assert_eq!(domains.len(1), 2);
    }

    #[test]
    fn test_node_consistency_is_idempotent() {
        let crossword = crossing_model("cat\ndog\ngoat\nswim\n");
        let mut domains = DomainStore::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);
        let once: Vec<_> = (0..crossword.var_count())
            .map(|id| domains.candidates(id))
            .collect();

        enforce_node_consistency(&crossword, &mut domains);
        let twice: Vec<_> = (0..crossword.var_count())
            .map(|id| domains.candidates(id))
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_revise_removes_unsupported_words() {
        let crossword = crossing_model("rat\ndog\ngoat\nswim\n");
        let mut domains = DomainStore::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);

        // The down slot's second letter must match some across word's second:
        // "dog" has 'o' (supported by "goat"), "rat" has 'a' (no support)
        assert!(revise(&crossword, &mut domains, 0, 1));
        let expected = ids(&crossword, &["dog"]);
        assert_eq!(domains.candidates(0), expected);

        // Across domain must be untouched
        assert_eq!(domains.len(1), 2);
    }

    #[test]
    fn test_revise_without_overlap_is_noop() {
        let crossword = Crossword::new(
            Grid::parse("___\n###\n___\n").unwrap(),
            WordList::parse("cat\ndog\n"),
        );
        let mut domains = DomainStore::new(&crossword);
        assert!(!revise(&crossword, &mut domains, 0, 1));
        assert_eq!(domains.len(0), 2);
    }

    #[test]
    fn test_revise_reports_no_change_when_all_supported() {
        let crossword = crossing_model("dog\ngoat\n");
        let mut domains = DomainStore::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);
        assert!(!revise(&crossword, &mut domains, 0, 1));
    }

    #[test]
    fn test_ac3_prunes_both_directions() {
        let crossword = crossing_model("rat\ndog\ngoat\nswim\n");
        let mut domains = DomainStore::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);

        assert!(ac3(&crossword, &mut domains, None));
        assert_eq!(domains.candidates(0), ids(&crossword, &["dog"]));
        assert_eq!(domains.candidates(1), ids(&crossword, &["goat"]));
    }

    #[test]
    fn test_ac3_detects_wipeout() {
        // No across word agrees with any down word at the shared cell
        let crossword = crossing_model("rat\ncat\nswim\nblip\n");
        let mut domains = DomainStore::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);

        assert!(!ac3(&crossword, &mut domains, None));
    }

    #[test]
    fn test_ac3_fails_on_domain_emptied_before_it_runs() {
        // A single neighbor-less slot of length 5, but only shorter words:
        // node consistency wipes the domain, the worklist is empty, and ac3
        // must still report failure
        let crossword = Crossword::new(
            Grid::parse("_____\n").unwrap(),
            WordList::parse("cat\ngoat\n"),
        );
        let mut domains = DomainStore::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);
        assert!(domains.is_empty(0));

        assert!(!ac3(&crossword, &mut domains, None));
    }

    #[test]
    fn test_ac3_with_explicit_arcs() {
        let crossword = crossing_model("rat\ndog\ngoat\nswim\n");
        let mut domains = DomainStore::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);

        assert!(ac3(&crossword, &mut domains, Some(vec![(0, 1)])));
        assert_eq!(domains.len(0), 1);
    }

    #[test]
    fn test_ac3_keeps_globally_solvable_words() {
        // Both (dog, goat) and (rat, tame) are complete solutions; AC-3 must
        // not prune any word that participates in one
        let crossword = crossing_model("dog\nrat\ngoat\ntame\n");
        let mut domains = DomainStore::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);

        assert!(ac3(&crossword, &mut domains, None));
        assert_eq!(domains.candidates(0), ids(&crossword, &["dog", "rat"]));
        assert_eq!(domains.candidates(1), ids(&crossword, &["goat", "tame"]));
    }
}
