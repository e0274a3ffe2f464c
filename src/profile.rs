use serde::{Deserialize, Serialize};

use crate::domain::{Stream, SKILL_LABELS};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicRecord {
    pub board: String,
    pub stream: Option<Stream>,
    pub group: String,
    pub subjects: Vec<String>,
    pub marks: u8,
    pub passed: bool,
}

/// Six self-assessed skill flags. Order matches [`SKILL_LABELS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub communication: bool,
    pub creativity: bool,
    pub logical_thinking: bool,
    pub leadership: bool,
    pub analytical: bool,
    pub practical: bool,
}

impl SkillSet {
    pub fn from_indices(indices: &[usize]) -> Self {
        let mut skills = SkillSet::default();
        for index in indices {
            match index {
                0 => skills.communication = true,
                1 => skills.creativity = true,
                2 => skills.logical_thinking = true,
                3 => skills.leadership = true,
                4 => skills.analytical = true,
                5 => skills.practical = true,
                _ => {}
            }
        }
        skills
    }

    pub fn selected_labels(&self) -> Vec<&'static str> {
        let flags = [
            self.communication,
            self.creativity,
            self.logical_thinking,
            self.leadership,
            self.analytical,
            self.practical,
        ];
        flags
            .iter()
            .zip(SKILL_LABELS)
            .filter(|(set, _)| **set)
            .map(|(_, label)| *label)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interests {
    pub primary: String,
    pub other: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationPreference {
    pub state: String,
    pub districts: Vec<String>,
    pub anywhere_in_india: bool,
    pub abroad: bool,
}

/// Everything the wizard collects. Owned by the session state and reset
/// wholesale on restart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub academics: AcademicRecord,
    pub skills: SkillSet,
    pub interests: Interests,
    pub location: LocationPreference,
}
