use serde::Serialize;

use crate::models::{DegreeMode, DegreeType, FilterCriteria, Program, University};

/// One surviving university with the sub-sequence of its programs that
/// matched the criteria.
#[derive(Debug, Serialize)]
pub struct UniversityMatch<'a> {
    pub university: &'a University,
    pub programs: Vec<&'a Program>,
}

fn has_both_for_subject(pool: &[&Program], subject: &str) -> bool {
    let has_masters = pool
        .iter()
        .any(|p| p.subject == subject && p.degree_type == DegreeType::Masters);
    let has_phd = pool
        .iter()
        .any(|p| p.subject == subject && p.degree_type == DegreeType::PhD);
    has_masters && has_phd
}

/// Programs of `university` surviving the subject and degree-mode
/// filters, in original order. An empty subject set means no subject
/// restriction. `Both` keeps only subjects for which the
/// subject-filtered pool holds a Masters and a PhD; both rows survive.
pub fn matching_programs<'a>(
    university: &'a University,
    selected_subjects: &[String],
    mode: DegreeMode,
) -> Vec<&'a Program> {
    let pool: Vec<&Program> = university
        .programs
        .iter()
        .filter(|p| selected_subjects.is_empty() || selected_subjects.iter().any(|s| s == &p.subject))
        .collect();

    match mode {
        DegreeMode::Any => pool,
        DegreeMode::Masters => pool
            .into_iter()
            .filter(|p| p.degree_type == DegreeType::Masters)
            .collect(),
        DegreeMode::PhD => pool
            .into_iter()
            .filter(|p| p.degree_type == DegreeType::PhD)
            .collect(),
        DegreeMode::Both => {
            let keep: Vec<&str> = distinct_subjects(&pool)
                .into_iter()
                .filter(|s| has_both_for_subject(&pool, s))
                .collect();
            pool.into_iter()
                .filter(|p| keep.contains(&p.subject.as_str()))
                .collect()
        }
    }
}

/// Filters the catalog in order: state membership, then non-empty
/// matched programs, then a case-insensitive substring match of the
/// trimmed search text against the university name. Never re-sorts.
pub fn filter_universities<'a>(
    catalog: &'a [University],
    criteria: &FilterCriteria,
) -> Vec<UniversityMatch<'a>> {
    let query = criteria.search_text.trim().to_lowercase();

    catalog
        .iter()
        .filter_map(|uni| {
            if !criteria.selected_states.is_empty()
                && !criteria.selected_states.iter().any(|s| s == &uni.location.state)
            {
                return None;
            }

            let programs =
                matching_programs(uni, &criteria.selected_subjects, criteria.degree_mode);
            if programs.is_empty() {
                return None;
            }

            if !query.is_empty() && !uni.name.to_lowercase().contains(&query) {
                return None;
            }

            Some(UniversityMatch { university: uni, programs })
        })
        .collect()
}

/// Distinct subjects among `programs` in first-occurrence order, used
/// for the card footer badges.
pub fn distinct_subjects<'a>(programs: &[&'a Program]) -> Vec<&'a str> {
    let mut subjects: Vec<&str> = Vec::new();
    for program in programs {
        if !subjects.contains(&program.subject.as_str()) {
            subjects.push(&program.subject);
        }
    }
    subjects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::Location;

    fn sample_program(subject: &str, degree_type: DegreeType) -> Program {
        Program {
            subject: subject.to_string(),
            degree_type,
            degree_name: format!("{degree_type} in {subject}"),
            sessions: vec!["Fall".to_string()],
            students: 50,
            funding_international: true,
            assistantship: true,
        }
    }

    fn sample_university(name: &str, state: &str, programs: Vec<Program>) -> University {
        University {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            website: "https://example.edu/".to_string(),
            location: Location {
                city: "Sampleton".to_string(),
                county: "Sample".to_string(),
                state: state.to_string(),
            },
            address: "1 Sample Way".to_string(),
            grad_coordinator_email: "gradcoord@example.edu".to_string(),
            programs,
        }
    }

    fn subjects(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_subject_set_matches_all_subjects() {
        let uni = sample_university(
            "Sample University",
            "Texas",
            vec![
                sample_program("Statistics", DegreeType::Masters),
                sample_program("Data Science", DegreeType::Masters),
            ],
        );
        let matched = matching_programs(&uni, &[], DegreeMode::Any);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn subject_filter_excludes_non_members() {
        let uni = sample_university(
            "Sample University",
            "Texas",
            vec![sample_program("Data Science", DegreeType::Masters)],
        );
        let matched = matching_programs(&uni, &subjects(&["Statistics"]), DegreeMode::Any);
        assert!(matched.is_empty());
    }

    #[test]
    fn degree_mode_masters_and_phd_restrict_by_type() {
        let uni = sample_university(
            "Sample University",
            "Texas",
            vec![
                sample_program("Statistics", DegreeType::Masters),
                sample_program("Statistics", DegreeType::PhD),
            ],
        );
        let masters = matching_programs(&uni, &[], DegreeMode::Masters);
        assert_eq!(masters.len(), 1);
        assert_eq!(masters[0].degree_type, DegreeType::Masters);

        let phd = matching_programs(&uni, &[], DegreeMode::PhD);
        assert_eq!(phd.len(), 1);
        assert_eq!(phd[0].degree_type, DegreeType::PhD);
    }

    #[test]
    fn both_mode_drops_subjects_missing_a_degree() {
        let uni = sample_university(
            "Sample University",
            "Texas",
            vec![
                sample_program("Statistics", DegreeType::Masters),
                sample_program("Statistics", DegreeType::PhD),
                sample_program("Biostatistics", DegreeType::Masters),
            ],
        );
        let matched = matching_programs(
            &uni,
            &subjects(&["Statistics", "Biostatistics"]),
            DegreeMode::Both,
        );
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|p| p.subject == "Statistics"));
    }

    #[test]
    fn both_mode_checks_the_filtered_pool_not_the_full_list() {
        // Statistics has both degrees overall, but the subject filter
        // removes it from the pool, so nothing can satisfy Both.
        let uni = sample_university(
            "Sample University",
            "Texas",
            vec![
                sample_program("Statistics", DegreeType::Masters),
                sample_program("Statistics", DegreeType::PhD),
                sample_program("Biostatistics", DegreeType::Masters),
            ],
        );
        let matched = matching_programs(&uni, &subjects(&["Biostatistics"]), DegreeMode::Both);
        assert!(matched.is_empty());
    }

    #[test]
    fn matched_programs_preserve_original_order() {
        let uni = sample_university(
            "Sample University",
            "Texas",
            vec![
                sample_program("Statistics", DegreeType::PhD),
                sample_program("Biostatistics", DegreeType::Masters),
                sample_program("Statistics", DegreeType::Masters),
            ],
        );
        let matched = matching_programs(&uni, &subjects(&["Statistics"]), DegreeMode::Any);
        let names: Vec<&str> = matched.iter().map(|p| p.degree_name.as_str()).collect();
        assert_eq!(names, vec!["PhD in Statistics", "Masters in Statistics"]);
    }

    #[test]
    fn empty_state_set_is_a_no_op() {
        let catalog = catalog::universities();
        let mut criteria = FilterCriteria::default();
        criteria.selected_subjects.clear();

        let results = filter_universities(&catalog, &criteria);
        let expected = catalog
            .iter()
            .filter(|u| !matching_programs(u, &[], DegreeMode::Any).is_empty())
            .count();
        assert_eq!(results.len(), expected);
        assert_eq!(results.len(), catalog.len());
    }

    #[test]
    fn university_without_matched_programs_is_excluded() {
        let catalog = vec![sample_university(
            "Sample University",
            "Texas",
            vec![sample_program("Data Science", DegreeType::Masters)],
        )];
        let criteria = FilterCriteria::default(); // subjects = {Statistics}
        assert!(filter_universities(&catalog, &criteria).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = catalog::universities();
        let mut criteria = FilterCriteria::default();
        criteria.search_text = "texas".to_string();

        let results = filter_universities(&catalog, &criteria);
        assert!(results
            .iter()
            .any(|m| m.university.name == "The University of Texas at Austin"));
        assert!(results
            .iter()
            .all(|m| m.university.name.to_lowercase().contains("texas")));
    }

    #[test]
    fn search_text_is_trimmed_before_matching() {
        let catalog = catalog::universities();
        let mut criteria = FilterCriteria::default();
        criteria.search_text = "  texas  ".to_string();

        let results = filter_universities(&catalog, &criteria);
        assert!(!results.is_empty());
    }

    #[test]
    fn texas_statistics_phd_scenario() {
        let catalog = catalog::universities();
        let criteria = FilterCriteria {
            selected_states: vec!["Texas".to_string()],
            selected_subjects: vec!["Statistics".to_string()],
            degree_mode: DegreeMode::PhD,
            search_text: String::new(),
        };

        let results = filter_universities(&catalog, &criteria);
        assert_eq!(results.len(), 2);
        let names: Vec<&str> = results.iter().map(|m| m.university.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["The University of Texas at Austin", "Texas A&M University"]
        );
        for entry in &results {
            assert_eq!(entry.programs.len(), 1);
            assert_eq!(entry.programs[0].degree_type, DegreeType::PhD);
            assert_eq!(entry.programs[0].subject, "Statistics");
        }
    }

    #[test]
    fn results_keep_catalog_order() {
        let catalog = catalog::universities();
        let mut criteria = FilterCriteria::default();
        criteria.selected_subjects.clear();

        let results = filter_universities(&catalog, &criteria);
        let result_ids: Vec<&str> = results.iter().map(|m| m.university.id.as_str()).collect();
        let catalog_ids: Vec<&str> = catalog.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(result_ids, catalog_ids);
    }

    #[test]
    fn distinct_subjects_keep_first_occurrence_order() {
        let programs = vec![
            sample_program("Biostatistics", DegreeType::Masters),
            sample_program("Statistics", DegreeType::Masters),
            sample_program("Biostatistics", DegreeType::PhD),
        ];
        let refs: Vec<&Program> = programs.iter().collect();
        assert_eq!(distinct_subjects(&refs), vec!["Biostatistics", "Statistics"]);
    }
}
