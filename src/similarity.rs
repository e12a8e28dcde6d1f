//! Block-matching string similarity
//!
//! Implements the classic sequence-matcher ratio: twice the number of
//! matching characters over the combined length, where matches come from
//! the longest common contiguous block and the recursion into the
//! unmatched flanks on either side of it.

/// Similarity ratio in [0.0, 1.0] between two strings, case-insensitive.
///
/// `similarity(x, x) == 1.0` for any `x`; symmetric in its arguments.
/// Cost is O(len(a) * len(b)) per longest-block search, so callers looping
/// over large candidate pools pay O(records * candidates) of these.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Count matching characters: longest common block plus matches in the
/// unmatched remainders to its left and right.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + len..], &b[b_start + len..])
}

/// Longest common contiguous block as (start in a, start in b, length).
///
/// Ties keep the earliest start in `a`, then in `b`.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // Rolling row of run lengths ending at (i, j)
    let mut row = vec![0usize; b.len() + 1];

    for i in 0..a.len() {
        let mut diag = 0;
        for j in 0..b.len() {
            let above = row[j + 1];
            if a[i] == b[j] {
                let run = diag + 1;
                row[j + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            } else {
                row[j + 1] = 0;
            }
            diag = above;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_one() {
        assert!((similarity("maria ressa", "maria ressa") - 1.0).abs() < f64::EPSILON);
        assert!((similarity("x", "x") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_case_insensitive() {
        assert!((similarity("Maria Ressa", "maria ressa") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("jamal khashoggi", "jamal k"),
            ("abcd", "bcde"),
            ("anna politkovskaya", "anna p"),
        ];
        for (a, b) in pairs {
            assert!((similarity(a, b) - similarity(b, a)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_known_ratio() {
        // common block "bcd", flanks contribute nothing: 2*3 / (4+4)
        assert!((similarity("abcd", "bcde") - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_recursion_into_flanks() {
        // block "bb", then "a"/"a" on the left: 2*3 / (3+4)
        assert!((similarity("abb", "xabb") - 6.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_strings_score_zero() {
        assert!(similarity("abc", "xyz").abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_inputs() {
        assert!((similarity("", "") - 1.0).abs() < f64::EPSILON);
        assert!(similarity("abc", "").abs() < f64::EPSILON);
    }

    #[test]
    fn test_closer_name_scores_higher() {
        let target = "jamal khashoggi";
        assert!(similarity(target, "jamal khashogi") > similarity(target, "john smith"));
    }
}
