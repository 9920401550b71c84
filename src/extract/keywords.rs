/// Total literal occurrences of every keyword in `text`.
///
/// Both sides are expected to be lowercase already. Occurrences of one
/// keyword are counted left to right without overlap.
pub fn count_keywords(text: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .map(|keyword| text.matches(keyword.as_str()).count())
        .sum()
}

/// Saturating ratio of hits to distinct keywords, in [0, 1].
pub fn keyword_score(hits: usize, keyword_count: usize) -> f64 {
    if keyword_count == 0 {
        return 0.0;
    }
    (hits as f64 / keyword_count as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|keyword| keyword.to_string()).collect()
    }

    #[test]
    fn counts_every_occurrence_of_every_keyword() {
        let text = "python, sql and more python";
        assert_eq!(count_keywords(text, &keywords(&["python", "sql"])), 3);
    }

    #[test]
    fn matches_substrings_and_phrases() {
        let text = "built a data warehouse; warehouses scale. machine learning";
        assert_eq!(
            count_keywords(text, &keywords(&["warehouse", "machine learning"])),
            3
        );
    }

    #[test]
    fn occurrences_do_not_overlap() {
        assert_eq!(count_keywords("aaaa", &keywords(&["aa"])), 2);
    }

    #[test]
    fn score_saturates_at_one_hit_per_keyword() {
        assert_eq!(keyword_score(0, 4), 0.0);
        assert_eq!(keyword_score(2, 4), 0.5);
        assert_eq!(keyword_score(4, 4), 1.0);
        assert_eq!(keyword_score(9, 4), 1.0);
    }
}
