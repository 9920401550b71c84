//! Property-based tests for the scoring invariants.

use proptest::prelude::*;
use screener::{rank, score, Document, JobProfile};

fn keyword_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,6}").unwrap()
}

fn profile_strategy() -> impl Strategy<Value = JobProfile> {
    (prop::collection::vec(keyword_strategy(), 1..5), 1i64..15)
        .prop_map(|(keywords, years)| JobProfile::new(keywords, years).unwrap())
}

/// Free text mixing filler words with the phrases the extractors look for.
fn text_strategy() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        prop::string::string_regex("[a-z ]{0,12}").unwrap(),
        (0u32..40).prop_map(|n| format!("{n} years of experience")),
        (0u32..40).prop_map(|n| format!("worked here {n} yrs")),
        prop::sample::select(vec!["phd", "master", "bachelor", "associate", "diploma"])
            .prop_map(str::to_string),
        keyword_strategy(),
    ];
    prop::collection::vec(fragment, 0..8).prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn scores_stay_in_bounds(profile in profile_strategy(), text in text_strategy()) {
        let breakdown = score(&Document::new("doc", &text), &profile);
        for value in [
            breakdown.composite,
            breakdown.keyword_score,
            breakdown.experience_score,
            breakdown.education_score,
        ] {
            prop_assert!((0.0..=100.0).contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn more_keyword_hits_never_lower_the_keyword_score(
        profile in profile_strategy(),
        text in text_strategy(),
        extra in 0usize..4,
    ) {
        let keyword = profile.keywords()[0].clone();
        let padded = format!("{text} {}", vec![keyword; extra + 1].join(" "));
        let before = score(&Document::new("doc", &text), &profile);
        let after = score(&Document::new("doc", &padded), &profile);
        prop_assert!(after.keyword_score >= before.keyword_score);
        if after.keyword_hits >= profile.keywords().len() {
            prop_assert_eq!(after.keyword_score, 100.0);
        }
    }

    #[test]
    fn experience_score_is_monotone_and_saturates(
        required in 1i64..20,
        low in 0u32..30,
        delta in 0u32..30,
    ) {
        let profile = JobProfile::new(["rust"], required).unwrap();
        let high = low + delta;
        let low_score = score(&Document::new("a", &format!("{low} years of experience")), &profile);
        let high_score = score(&Document::new("b", &format!("{high} years of experience")), &profile);
        prop_assert!(high_score.experience_score >= low_score.experience_score);
        if i64::from(high) >= required {
            prop_assert_eq!(high_score.experience_score, 100.0);
        }
    }

    #[test]
    fn phd_wins_regardless_of_position(prefix in "[a-z ]{0,10}", suffix in "[a-z ]{0,10}") {
        let profile = JobProfile::new(["rust"], 1).unwrap();
        let first = format!("{prefix} bachelor {suffix} phd");
        let second = format!("phd {prefix} bachelor {suffix}");
        prop_assert_eq!(score(&Document::new("a", &first), &profile).education_score, 100.0);
        prop_assert_eq!(score(&Document::new("b", &second), &profile).education_score, 100.0);
    }

    #[test]
    fn scoring_is_idempotent(profile in profile_strategy(), text in text_strategy()) {
        let document = Document::new("doc", &text);
        prop_assert_eq!(score(&document, &profile), score(&document, &profile));
    }

    #[test]
    fn ranking_is_a_stable_descending_sort(
        profile in profile_strategy(),
        texts in prop::collection::vec(text_strategy(), 0..8),
    ) {
        let documents: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| Document::new(i.to_string(), text))
            .collect();
        let ranked = rank(&documents, &profile);
        prop_assert_eq!(ranked.len(), documents.len());

        for pair in ranked.entries().windows(2) {
            prop_assert!(pair[0].composite() >= pair[1].composite());
            if pair[0].composite() == pair[1].composite() {
                let left: usize = pair[0].name().parse().unwrap();
                let right: usize = pair[1].name().parse().unwrap();
                prop_assert!(left < right);
            }
        }
    }
}

#[test]
fn empty_collection_ranks_to_empty_result() {
    let profile = JobProfile::new(["python"], 2).unwrap();
    assert!(rank(&[], &profile).is_empty());
}
