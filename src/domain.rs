use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Academic track after class 10, decides which subject groups and
/// interest options a student can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stream {
    Science,
    Commerce,
    Arts,
    Vocational,
}

pub const STREAMS: &[Stream] = &[
    Stream::Science,
    Stream::Commerce,
    Stream::Arts,
    Stream::Vocational,
];

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stream::Science => write!(f, "Science"),
            Stream::Commerce => write!(f, "Commerce"),
            Stream::Arts => write!(f, "Arts"),
            Stream::Vocational => write!(f, "Vocational"),
        }
    }
}

impl std::str::FromStr for Stream {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "science" => Ok(Stream::Science),
            "commerce" => Ok(Stream::Commerce),
            "arts" => Ok(Stream::Arts),
            "vocational" => Ok(Stream::Vocational),
            _ => Err(anyhow!("Unknown stream: {}", s)),
        }
    }
}

pub const EDUCATION_BOARDS: &[&str] = &["CBSE", "ICSE", "State Board", "IB", "Other"];

/// A named subject combination within a stream (e.g. PCM under Science).
#[derive(Debug, Clone, Copy)]
pub struct SubjectGroup {
    pub name: &'static str,
    pub subjects: &'static [&'static str],
}

pub fn subject_groups(stream: Stream) -> &'static [SubjectGroup] {
    match stream {
        Stream::Science => &[
            SubjectGroup {
                name: "PCM (Physics, Chemistry, Maths)",
                subjects: &["Physics", "Chemistry", "Maths", "English"],
            },
            SubjectGroup {
                name: "PCB (Physics, Chemistry, Biology)",
                subjects: &["Physics", "Chemistry", "Biology", "English"],
            },
            SubjectGroup {
                name: "PCMB (Physics, Chemistry, Maths, Biology)",
                subjects: &["Physics", "Chemistry", "Maths", "Biology", "English"],
            },
        ],
        Stream::Commerce => &[
            SubjectGroup {
                name: "With Maths",
                subjects: &["Accountancy", "Business Studies", "Economics", "English", "Maths"],
            },
            SubjectGroup {
                name: "Without Maths",
                subjects: &[
                    "Accountancy",
                    "Business Studies",
                    "Economics",
                    "English",
                    "Informatics Practices",
                ],
            },
        ],
        Stream::Arts => &[
            SubjectGroup {
                name: "Humanities",
                subjects: &["History", "Political Science", "Sociology", "English", "Economics"],
            },
            SubjectGroup {
                name: "Fine Arts",
                subjects: &["History", "English", "Fine Arts", "Psychology", "Geography"],
            },
        ],
        Stream::Vocational => &[
            SubjectGroup {
                name: "IT & Computer Science",
                subjects: &["Computer Science", "IT", "English", "Maths"],
            },
            SubjectGroup {
                name: "Agriculture",
                subjects: &["Agriculture", "Biology", "Chemistry", "English"],
            },
        ],
    }
}

pub const SKILL_LABELS: &[&str] = &[
    "Communication",
    "Creativity",
    "Logical Thinking",
    "Leadership",
    "Analytical Skills",
    "Practical / Field Skills",
];

pub fn interest_options(stream: Stream) -> &'static [&'static str] {
    match stream {
        Stream::Science => &[
            "Engineering",
            "Medical",
            "Research",
            "Data Science",
            "Architecture",
            "Aviation",
        ],
        Stream::Commerce => &[
            "Finance",
            "Accounting",
            "Marketing",
            "Management",
            "Banking",
            "Entrepreneurship",
        ],
        Stream::Arts => &[
            "Journalism",
            "Law",
            "Civil Services",
            "Design",
            "Psychology",
            "Teaching",
        ],
        Stream::Vocational => &[
            "Software Development",
            "Agriculture Science",
            "Tourism",
            "Fashion Designing",
        ],
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StateEntry {
    pub name: &'static str,
    pub districts: &'static [&'static str],
}

pub const STATES: &[StateEntry] = &[
    StateEntry {
        name: "Andhra Pradesh",
        districts: &["Visakhapatnam", "Vijayawada", "Guntur"],
    },
    StateEntry {
        name: "Tamil Nadu",
        districts: &["Chennai", "Coimbatore", "Madurai"],
    },
    StateEntry {
        name: "Maharashtra",
        districts: &["Mumbai", "Pune", "Nagpur"],
    },
    StateEntry {
        name: "Karnataka",
        districts: &["Bengaluru", "Mysuru", "Mangaluru"],
    },
    StateEntry {
        name: "Delhi",
        districts: &["New Delhi"],
    },
];

pub fn districts_for(state: &str) -> Option<&'static [&'static str]> {
    STATES
        .iter()
        .find(|entry| entry.name == state)
        .map(|entry| entry.districts)
}
