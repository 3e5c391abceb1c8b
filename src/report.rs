use std::fmt::Write;

use chrono::NaiveDate;

use crate::contact;
use crate::filter::{self, UniversityMatch};
use crate::models::{FilterCriteria, Program, University};

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 university found".to_string()
    } else {
        format!("{count} universities found")
    }
}

pub fn location_line(university: &University) -> String {
    format!(
        "{}, {} County, {}",
        university.location.city, university.location.county, university.location.state
    )
}

pub fn program_line(program: &Program) -> String {
    format!(
        "{} ({}) — {} students; sessions: {}; intl funding: {}; assistantship: {}",
        program.degree_name,
        program.degree_type,
        program.students,
        program.sessions.join(", "),
        yes_no(program.funding_international),
        yes_no(program.assistantship),
    )
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Human-readable summary of the active criteria for report headers.
pub fn describe_criteria(criteria: &FilterCriteria) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !criteria.selected_states.is_empty() {
        parts.push(format!("states: {}", criteria.selected_states.join(", ")));
    }
    if criteria.selected_subjects.is_empty() {
        parts.push("subjects: any".to_string());
    } else {
        parts.push(format!("subjects: {}", criteria.selected_subjects.join(", ")));
    }
    parts.push(format!("degree: {}", criteria.degree_mode));

    let query = criteria.search_text.trim();
    if !query.is_empty() {
        parts.push(format!("name contains \"{query}\""));
    }

    parts.join("; ")
}

pub fn build_report(
    criteria: &FilterCriteria,
    results: &[UniversityMatch<'_>],
    generated: NaiveDate,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Graduate Program Search Report");
    let _ = writeln!(
        output,
        "Generated on {} ({})",
        generated,
        describe_criteria(criteria)
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "{}", count_label(results.len()));

    if results.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "No universities match your filters.");
        return output;
    }

    for entry in results {
        let uni = entry.university;
        let _ = writeln!(output);
        let _ = writeln!(output, "## {}", uni.name);
        let _ = writeln!(output, "{}", location_line(uni));
        let _ = writeln!(output, "{}", uni.address);
        let _ = writeln!(output, "Website: {}", uni.website);
        let _ = writeln!(
            output,
            "Contact: {}",
            contact::mailto_link(&uni.grad_coordinator_email, uni, &criteria.selected_subjects)
        );
        let _ = writeln!(output);

        for program in &entry.programs {
            let _ = writeln!(output, "- {}", program_line(program));
        }

        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "Subjects: {}",
            filter::distinct_subjects(&entry.programs).join(", ")
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::filter::filter_universities;
    use crate::models::DegreeMode;

    #[test]
    fn count_label_uses_singular_for_exactly_one() {
        assert_eq!(count_label(0), "0 universities found");
        assert_eq!(count_label(1), "1 university found");
        assert_eq!(count_label(2), "2 universities found");
    }

    #[test]
    fn location_line_formats_county() {
        let catalog = catalog::universities();
        let austin = catalog.iter().find(|u| u.id == "utaustin").unwrap();
        assert_eq!(location_line(austin), "Austin, Travis County, Texas");
    }

    #[test]
    fn describe_criteria_covers_active_filters() {
        let criteria = FilterCriteria {
            selected_states: vec!["Texas".to_string()],
            selected_subjects: vec!["Statistics".to_string()],
            degree_mode: DegreeMode::PhD,
            search_text: " austin ".to_string(),
        };
        assert_eq!(
            describe_criteria(&criteria),
            "states: Texas; subjects: Statistics; degree: PhD; name contains \"austin\""
        );

        let mut open = FilterCriteria::default();
        open.selected_subjects.clear();
        assert_eq!(describe_criteria(&open), "subjects: any; degree: Any");
    }

    #[test]
    fn report_lists_matched_universities_and_programs() {
        let catalog = catalog::universities();
        let criteria = FilterCriteria {
            selected_states: vec!["Texas".to_string()],
            selected_subjects: vec!["Statistics".to_string()],
            degree_mode: DegreeMode::PhD,
            search_text: String::new(),
        };
        let results = filter_universities(&catalog, &criteria);
        let generated = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        let report = build_report(&criteria, &results, generated);

        assert!(report.contains("2 universities found"));
        assert!(report.contains("## The University of Texas at Austin"));
        assert!(report.contains("## Texas A&M University"));
        assert!(report.contains("PhD in Statistics (PhD)"));
        assert!(report.contains("Subjects: Statistics"));
        assert!(report.contains("mailto:gradcoord@stat.tamu.edu"));
    }

    #[test]
    fn empty_result_report_says_so() {
        let criteria = FilterCriteria {
            selected_states: vec!["Wyoming".to_string()],
            ..FilterCriteria::default()
        };
        let generated = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        let report = build_report(&criteria, &[], generated);
        assert!(report.contains("0 universities found"));
        assert!(report.contains("No universities match your filters."));
    }
}
