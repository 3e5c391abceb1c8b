use anyhow::bail;

use crate::models::{DegreeType, Location, Program, University};

pub const SUBJECTS: [&str; 6] = [
    "Statistics",
    "Applied Statistics",
    "Data Science",
    "Biostatistics",
    "Mathematical Statistics",
    "Financial Statistics",
];

pub const STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

fn program(
    subject: &str,
    degree_type: DegreeType,
    degree_name: &str,
    sessions: &[&str],
    students: u32,
    funding_international: bool,
    assistantship: bool,
) -> Program {
    Program {
        subject: subject.to_string(),
        degree_type,
        degree_name: degree_name.to_string(),
        sessions: sessions.iter().map(|s| s.to_string()).collect(),
        students,
        funding_international,
        assistantship,
    }
}

fn university(
    id: &str,
    name: &str,
    website: &str,
    (city, county, state): (&str, &str, &str),
    address: &str,
    grad_coordinator_email: &str,
    programs: Vec<Program>,
) -> University {
    University {
        id: id.to_string(),
        name: name.to_string(),
        website: website.to_string(),
        location: Location {
            city: city.to_string(),
            county: county.to_string(),
            state: state.to_string(),
        },
        address: address.to_string(),
        grad_coordinator_email: grad_coordinator_email.to_string(),
        programs,
    }
}

/// Demo dataset; replace with an NCES/IPEDS-backed source.
pub fn universities() -> Vec<University> {
    use DegreeType::{Masters, PhD};

    vec![
        university(
            "ucb",
            "University of California, Berkeley",
            "https://www.berkeley.edu/",
            ("Berkeley", "Alameda", "California"),
            "200 California Hall, Berkeley, CA 94720 (sample)",
            "gradcoord@stat.berkeley.edu",
            vec![
                program("Statistics", Masters, "MA in Statistics", &["Fall"], 120, true, true),
                program("Statistics", PhD, "PhD in Statistics", &["Fall"], 90, true, true),
                program(
                    "Data Science",
                    Masters,
                    "MIDS (Data Science)",
                    &["Fall", "Spring", "Summer"],
                    300,
                    false,
                    false,
                ),
                program("Biostatistics", PhD, "PhD in Biostatistics", &["Fall"], 60, true, true),
            ],
        ),
        university(
            "utaustin",
            "The University of Texas at Austin",
            "https://www.utexas.edu/",
            ("Austin", "Travis", "Texas"),
            "110 Inner Campus Dr, Austin, TX 78712 (sample)",
            "gradcoord@stat.utexas.edu",
            vec![
                program(
                    "Statistics",
                    Masters,
                    "MS in Statistics & Data Science",
                    &["Fall", "Spring"],
                    150,
                    true,
                    true,
                ),
                program("Statistics", PhD, "PhD in Statistics", &["Fall"], 70, true, true),
                program(
                    "Applied Statistics",
                    Masters,
                    "MS in Applied Statistics",
                    &["Fall", "Spring"],
                    80,
                    true,
                    false,
                ),
            ],
        ),
        university(
            "ncsu",
            "North Carolina State University",
            "https://www.ncsu.edu/",
            ("Raleigh", "Wake", "North Carolina"),
            "2101 Hillsborough St, Raleigh, NC 27695 (sample)",
            "gradcoord@stat.ncsu.edu",
            vec![
                program("Statistics", Masters, "MS in Statistics", &["Fall", "Spring"], 200, true, true),
                program("Statistics", PhD, "PhD in Statistics", &["Fall"], 120, true, true),
                program("Biostatistics", Masters, "MS in Biostatistics", &["Fall"], 60, true, true),
            ],
        ),
        university(
            "ufl",
            "University of Florida",
            "https://www.ufl.edu/",
            ("Gainesville", "Alachua", "Florida"),
            "355 Tigert Hall, Gainesville, FL 32611 (sample)",
            "gradcoord@stat.ufl.edu",
            vec![
                program("Statistics", Masters, "MS in Statistics", &["Fall", "Spring"], 140, true, true),
                program("Biostatistics", PhD, "PhD in Biostatistics", &["Fall"], 55, true, true),
                program(
                    "Data Science",
                    Masters,
                    "MS in Data Science",
                    &["Fall", "Spring", "Summer"],
                    120,
                    false,
                    false,
                ),
            ],
        ),
        university(
            "columbia",
            "Columbia University",
            "https://www.columbia.edu/",
            ("New York", "New York", "New York"),
            "116th and Broadway, New York, NY 10027 (sample)",
            "gradcoord@stat.columbia.edu",
            vec![
                program("Statistics", Masters, "MA in Statistics", &["Fall", "Spring"], 400, false, false),
                program("Statistics", PhD, "PhD in Statistics", &["Fall"], 60, true, true),
                program(
                    "Financial Statistics",
                    Masters,
                    "MA in Financial Statistics",
                    &["Fall"],
                    150,
                    false,
                    false,
                ),
            ],
        ),
        university(
            "umn",
            "University of Minnesota",
            "https://twin-cities.umn.edu/",
            ("Minneapolis", "Hennepin", "Minnesota"),
            "100 Church St SE, Minneapolis, MN 55455 (sample)",
            "gradcoord@stat.umn.edu",
            vec![
                program("Statistics", Masters, "MS in Statistics", &["Fall", "Spring"], 130, true, true),
                program("Statistics", PhD, "PhD in Statistics", &["Fall"], 80, true, true),
                program("Biostatistics", Masters, "MS in Biostatistics", &["Fall"], 70, true, true),
                program("Biostatistics", PhD, "PhD in Biostatistics", &["Fall"], 50, true, true),
            ],
        ),
        university(
            "umass",
            "University of Massachusetts Amherst",
            "https://www.umass.edu/",
            ("Amherst", "Hampshire", "Massachusetts"),
            "300 Massachusetts Ave, Amherst, MA 01003 (sample)",
            "gradcoord@stat.umass.edu",
            vec![
                program(
                    "Applied Statistics",
                    Masters,
                    "MS in Applied Statistics",
                    &["Fall", "Spring"],
                    90,
                    true,
                    false,
                ),
                program("Statistics", PhD, "PhD in Statistics", &["Fall"], 45, true, true),
            ],
        ),
        university(
            "fsu",
            "Florida State University",
            "https://www.fsu.edu/",
            ("Tallahassee", "Leon", "Florida"),
            "600 W College Ave, Tallahassee, FL 32306 (sample)",
            "gradcoord@stat.fsu.edu",
            vec![
                program("Statistics", Masters, "MS in Statistics", &["Fall", "Spring"], 110, true, true),
                program("Statistics", PhD, "PhD in Statistics", &["Fall"], 40, true, true),
                program("Data Science", Masters, "MS in Data Science", &["Fall", "Spring"], 100, false, false),
            ],
        ),
        university(
            "tamu",
            "Texas A&M University",
            "https://www.tamu.edu/",
            ("College Station", "Brazos", "Texas"),
            "400 Bizzell St, College Station, TX 77843 (sample)",
            "gradcoord@stat.tamu.edu",
            vec![
                program("Statistics", Masters, "MS in Statistics", &["Fall", "Spring"], 160, true, true),
                program("Statistics", PhD, "PhD in Statistics", &["Fall"], 90, true, true),
            ],
        ),
        university(
            "uw",
            "University of Washington",
            "https://www.washington.edu/",
            ("Seattle", "King", "Washington"),
            "1400 NE Campus Pkwy, Seattle, WA 98195 (sample)",
            "gradcoord@stat.washington.edu",
            vec![
                program("Biostatistics", Masters, "MS in Biostatistics", &["Fall"], 100, true, true),
                program("Biostatistics", PhD, "PhD in Biostatistics", &["Fall"], 80, true, true),
                program("Statistics", Masters, "MS in Statistics", &["Fall", "Spring"], 150, true, true),
            ],
        ),
    ]
}

/// Data-quality check for the embedded catalog: unique ids, known
/// states and subjects, non-empty session lists.
pub fn validate(catalog: &[University]) -> anyhow::Result<()> {
    let mut seen_ids: Vec<&str> = Vec::new();

    for uni in catalog {
        if seen_ids.contains(&uni.id.as_str()) {
            bail!("duplicate university id '{}'", uni.id);
        }
        seen_ids.push(&uni.id);

        if !STATES.contains(&uni.location.state.as_str()) {
            bail!("university '{}' has unknown state '{}'", uni.id, uni.location.state);
        }

        for prog in &uni.programs {
            if !SUBJECTS.contains(&prog.subject.as_str()) {
                bail!(
                    "university '{}' program '{}' has unknown subject '{}'",
                    uni.id,
                    prog.degree_name,
                    prog.subject
                );
            }
            if prog.sessions.is_empty() {
                bail!(
                    "university '{}' program '{}' has no sessions",
                    uni.id,
                    prog.degree_name
                );
            }
        }
    }

    Ok(())
}
