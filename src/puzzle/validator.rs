//! Independent validation of complete assignments

use crate::csp::{Assignment, Crossword};
use std::collections::HashSet;
use std::fmt;

/// Re-checks a finished assignment against every constraint
///
/// The search's own `consistent` predicate already enforces these rules; the
/// validator repeats them from scratch so a solver bug surfaces as a clear
/// report instead of bad output.
pub struct SolutionValidator;

/// Result of validating an assignment
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
    pub slots_checked: usize,
    pub overlaps_checked: usize,
}

impl SolutionValidator {
    /// Validate completeness, lengths, word uniqueness, and overlap agreement
    pub fn validate(crossword: &Crossword, assignment: &Assignment) -> ValidationResult {
        let words = crossword.words();
        let mut slots_checked = 0;
        let mut overlaps_checked = 0;

        if !assignment.is_complete() {
            return Self::failure(
                slots_checked,
                overlaps_checked,
                "assignment is incomplete".to_string(),
            );
        }

        let mut seen = HashSet::new();
        for (var_id, word_id) in assignment.bound_pairs() {
            let var = crossword.variable(var_id);
            slots_checked += 1;

            if words.char_len(word_id) != var.length {
                return Self::failure(
                    slots_checked,
                    overlaps_checked,
                    format!(
                        "slot {} holds \"{}\" of length {}",
                        var,
                        words.word(word_id),
                        words.char_len(word_id)
                    ),
                );
            }

            if !seen.insert(word_id) {
                return Self::failure(
                    slots_checked,
                    overlaps_checked,
                    format!("word \"{}\" is used more than once", words.word(word_id)),
                );
            }
        }

        for (var_id, word_id) in assignment.bound_pairs() {
            for &neighbor in crossword.neighbors(var_id) {
                if neighbor < var_id {
                    continue; // each pair once
                }
                let Some(other) = assignment.get(neighbor) else {
                    continue;
                };
                let Some((i, j)) = crossword.overlap(var_id, neighbor) else {
                    continue;
                };
                overlaps_checked += 1;
                if words.glyphs(word_id).get(i) != words.glyphs(other).get(j) {
                    return Self::failure(
                        slots_checked,
                        overlaps_checked,
                        format!(
                            "slots {} and {} disagree at their shared cell",
                            crossword.variable(var_id),
                            crossword.variable(neighbor)
                        ),
                    );
                }
            }
        }

        ValidationResult {
            is_valid: true,
            error_message: None,
            slots_checked,
            overlaps_checked,
        }
    }

    fn failure(
        slots_checked: usize,
        overlaps_checked: usize,
        message: String,
    ) -> ValidationResult {
        ValidationResult {
            is_valid: false,
            error_message: Some(message),
            slots_checked,
            overlaps_checked,
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            write!(
                f,
                "Valid: {} slots, {} overlaps checked",
                self.slots_checked, self.overlaps_checked
            )
        } else {
            write!(
                f,
                "Invalid: {}",
                self.error_message.as_deref().unwrap_or("unknown error")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, WordId, WordList};

    fn model() -> Crossword {
        Crossword::new(
            Grid::parse("#_##\n____\n#_##\n").unwrap(),
            WordList::parse("dog\nrat\ngoat\nswim\n"),
        )
    }

    fn word_id(crossword: &Crossword, word: &str) -> WordId {
        crossword
            .words()
            .ids()
            .find(|&id| crossword.words().word(id) == word)
            .unwrap()
    }

    #[test]
    fn test_valid_assignment_passes() {
        let crossword = model();
        let mut assignment = Assignment::new(2);
        assignment.bind(0, word_id(&crossword, "dog"));
        assignment.bind(1, word_id(&crossword, "goat"));

        let result = SolutionValidator::validate(&crossword, &assignment);
        assert!(result.is_valid, "{}", result);
        assert_eq!(result.slots_checked, 2);
        assert_eq!(result.overlaps_checked, 1);
    }

    #[test]
    fn test_incomplete_assignment_fails() {
        let crossword = model();
        let mut assignment = Assignment::new(2);
        assignment.bind(0, word_id(&crossword, "dog"));

        let result = SolutionValidator::validate(&crossword, &assignment);
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("incomplete"));
    }

    #[test]
    fn test_overlap_mismatch_fails() {
        let crossword = model();
        let mut assignment = Assignment::new(2);
        assignment.bind(0, word_id(&crossword, "rat"));
        assignment.bind(1, word_id(&crossword, "goat"));

        let result = SolutionValidator::validate(&crossword, &assignment);
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("shared cell"));
    }

    #[test]
    fn test_failure_reports_checked_counts() {
        // Both slots pass the per-slot checks before the shared cell fails
        let crossword = model();
        let mut assignment = Assignment::new(2);
        assignment.bind(0, word_id(&crossword, "rat"));
        assignment.bind(1, word_id(&crossword, "goat"));

        let result = SolutionValidator::validate(&crossword, &assignment);
        assert!(!result.is_valid);
        assert_eq!(result.slots_checked, 2);
        assert_eq!(result.overlaps_checked, 1);
    }

    #[test]
    fn test_length_mismatch_fails() {
        let crossword = model();
        let mut assignment = Assignment::new(2);
        assignment.bind(0, word_id(&crossword, "goat"));
        assignment.bind(1, word_id(&crossword, "swim"));

        let result = SolutionValidator::validate(&crossword, &assignment);
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("length"));
    }

    #[test]
    fn test_duplicate_word_fails() {
        let crossword = Crossword::new(
            Grid::parse("___\n###\n___\n").unwrap(),
            WordList::parse("cat\ndog\n"),
        );
        let cat = word_id(&crossword, "cat");
        let mut assignment = Assignment::new(2);
        assignment.bind(0, cat);
        assignment.bind(1, cat);

        let result = SolutionValidator::validate(&crossword, &assignment);
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("more than once"));
    }
}
