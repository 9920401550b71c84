use crate::types::scoring::RankedEntry;

/// One block per document, best first.
pub fn to_text(entries: &[RankedEntry<'_>]) -> String {
    if entries.is_empty() {
        return "no documents to rank\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let breakdown = &entry.breakdown;
        output.push_str(&format!(
            "#{} {}  score {:.2}\n",
            entry.rank,
            entry.name(),
            breakdown.composite
        ));
        output.push_str(&format!(
            "   keywords:   {:.2}% ({} hits)\n",
            breakdown.keyword_score, breakdown.keyword_hits
        ));
        output.push_str(&format!(
            "   experience: {:.2}% ({} years)\n",
            breakdown.experience_score, breakdown.years
        ));
        output.push_str(&format!(
            "   education:  {:.2}%\n\n",
            breakdown.education_score
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::document::Document;
    use crate::types::scoring::ScoreBreakdown;

    #[test]
    fn text_report_lists_rank_name_and_sub_scores() {
        let document = Document::new("alice", "");
        let entries = [RankedEntry {
            rank: 1,
            document: &document,
            breakdown: ScoreBreakdown {
                composite: 92.0,
                keyword_score: 100.0,
                keyword_hits: 2,
                years: 5,
                experience_score: 100.0,
                education_score: 60.0,
            },
        }];

        let rendered = to_text(&entries);
        assert!(rendered.contains("#1 alice  score 92.00"));
        assert!(rendered.contains("experience: 100.00% (5 years)"));
        assert!(rendered.contains("education:  60.00%"));
    }

    #[test]
    fn text_report_handles_empty_result() {
        assert_eq!(to_text(&[]), "no documents to rank\n");
    }
}
