use std::io;

use anyhow::Context;

use crate::filter::UniversityMatch;

/// Writes one CSV row per matched program. Returns the row count.
pub fn write_csv<W: io::Write>(
    writer: W,
    results: &[UniversityMatch<'_>],
) -> anyhow::Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record([
            "university",
            "state",
            "subject",
            "degree_type",
            "degree_name",
            "students",
            "sessions",
            "funding_international",
            "assistantship",
        ])
        .context("failed to write CSV header")?;

    let mut rows = 0;
    for entry in results {
        for program in &entry.programs {
            csv_writer
                .write_record([
                    entry.university.name.as_str(),
                    entry.university.location.state.as_str(),
                    program.subject.as_str(),
                    &program.degree_type.to_string(),
                    program.degree_name.as_str(),
                    &program.students.to_string(),
                    &program.sessions.join(" · "),
                    if program.funding_international { "true" } else { "false" },
                    if program.assistantship { "true" } else { "false" },
                ])
                .context("failed to write CSV row")?;
            rows += 1;
        }
    }

    csv_writer.flush().context("failed to flush CSV output")?;
    Ok(rows)
}
