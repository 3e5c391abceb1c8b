use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};

mod catalog;
mod contact;
mod export;
mod filter;
mod models;
mod report;

use models::{DegreeMode, FilterCriteria};

#[derive(Parser)]
#[command(name = "stat-program-finder")]
#[command(about = "Graduate program finder for Statistics and related fields", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FilterArgs {
    /// Restrict to universities in this state (repeatable)
    #[arg(long = "state")]
    states: Vec<String>,
    /// Restrict to programs in this subject (repeatable; defaults to Statistics)
    #[arg(long = "subject")]
    subjects: Vec<String>,
    /// Include programs of every subject
    #[arg(long, conflicts_with = "subjects")]
    all_subjects: bool,
    /// Degree availability: any, masters, phd, or both
    #[arg(long, default_value = "any")]
    degree: DegreeMode,
    /// Case-insensitive substring match on the university name
    #[arg(long)]
    name: Option<String>,
}

impl FilterArgs {
    fn into_criteria(self) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        for state in self.states {
            if !criteria.selected_states.contains(&state) {
                criteria.selected_states.push(state);
            }
        }
        if self.all_subjects {
            criteria.selected_subjects.clear();
        } else if !self.subjects.is_empty() {
            criteria.selected_subjects.clear();
            for subject in self.subjects {
                if !criteria.selected_subjects.contains(&subject) {
                    criteria.selected_subjects.push(subject);
                }
            }
        }
        criteria.degree_mode = self.degree;
        criteria.search_text = self.name.unwrap_or_default();
        criteria
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List universities matching the filters
    Search {
        #[command(flatten)]
        filters: FilterArgs,
        /// Emit the matches as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write a markdown report of matching universities
    Report {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Write one CSV row per matched program
    Export {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a pre-filled mailto link for a university's grad coordinator
    Contact {
        /// University id (see `search --json`)
        #[arg(long)]
        id: String,
        /// Subject to mention in the draft (repeatable; defaults to Statistics)
        #[arg(long = "subject")]
        subjects: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let catalog = catalog::universities();
    catalog::validate(&catalog).context("embedded catalog failed validation")?;

    match cli.command {
        Commands::Search { filters, json } => {
            let criteria = filters.into_criteria();
            let results = filter::filter_universities(&catalog, &criteria);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            println!("{}", report::count_label(results.len()));
            if results.is_empty() {
                println!("No universities match your filters.");
                return Ok(());
            }

            for entry in &results {
                let uni = entry.university;
                println!();
                println!("{} — {}", uni.name, report::location_line(uni));
                println!("  {}", uni.address);
                println!("  Website: {}", uni.website);
                println!(
                    "  Contact: {}",
                    contact::mailto_link(
                        &uni.grad_coordinator_email,
                        uni,
                        &criteria.selected_subjects
                    )
                );
                for program in &entry.programs {
                    println!("  - {}", report::program_line(program));
                }
                println!(
                    "  Subjects: {}",
                    filter::distinct_subjects(&entry.programs).join(", ")
                );
            }
        }
        Commands::Report { filters, out } => {
            let criteria = filters.into_criteria();
            let results = filter::filter_universities(&catalog, &criteria);
            let generated = Utc::now().date_naive();
            let report = report::build_report(&criteria, &results, generated);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write report to {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Export { filters, out } => {
            let criteria = filters.into_criteria();
            let results = filter::filter_universities(&catalog, &criteria);
            let file = File::create(&out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            let rows = export::write_csv(file, &results)?;
            println!("Exported {rows} program rows to {}.", out.display());
        }
        Commands::Contact { id, subjects } => {
            let uni = catalog
                .iter()
                .find(|u| u.id == id)
                .with_context(|| format!("no university with id '{id}'"))?;
            println!(
                "{}",
                contact::mailto_link(&uni.grad_coordinator_email, uni, &subjects)
            );
        }
    }

    Ok(())
}
