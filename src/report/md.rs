use crate::types::profile::JobProfile;
use crate::types::scoring::RankedEntry;

pub fn to_markdown(entries: &[RankedEntry<'_>], profile: &JobProfile) -> String {
    let mut output = String::new();
    output.push_str("# Screening Report\n\n");
    output.push_str(&format!(
        "Keywords: {}\n\nRequired experience: {} years\n\n",
        profile.keywords().join(", "),
        profile.required_experience()
    ));

    output.push_str("## Ranking\n\n");
    if entries.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| Rank | Name | Score | Keywords | Experience | Years | Education |\n");
    output.push_str("|---:|---|---:|---:|---:|---:|---:|\n");
    for entry in entries {
        let breakdown = &entry.breakdown;
        output.push_str(&format!(
            "| {} | {} | {:.2} | {:.2} | {:.2} | {} | {:.2} |\n",
            entry.rank,
            entry.name().replace('|', "\\|"),
            breakdown.composite,
            breakdown.keyword_score,
            breakdown.experience_score,
            breakdown.years,
            breakdown.education_score
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use crate::types::document::Document;

    #[test]
    fn markdown_report_contains_sections() {
        let profile = JobProfile::new(["python", "sql"], 2).expect("profile should build");
        let documents = vec![Document::new("a|b", "python")];
        let ranked = engine::rank(&documents, &profile);

        let rendered = to_markdown(ranked.entries(), &profile);
        assert!(rendered.contains("# Screening Report"));
        assert!(rendered.contains("Keywords: python, sql"));
        assert!(rendered.contains("## Ranking"));
        assert!(rendered.contains("| 1 | a\\|b | 29.00 |"));
    }
}
