use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligibilityStatus {
    Eligible,
    #[serde(rename = "Not Eligible")]
    NotEligible,
}

impl EligibilityStatus {
    pub fn badge(&self) -> ColoredString {
        match self {
            EligibilityStatus::Eligible => "Eligible".green(),
            EligibilityStatus::NotEligible => "Not Eligible".red(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn badge(&self) -> ColoredString {
        match self {
            RiskLevel::Low => "Low".green(),
            RiskLevel::Medium => "Medium".yellow(),
            RiskLevel::High => "High".red(),
        }
    }
}

/// One career suggestion from the recommendation call. Field names match
/// the wire format declared in the response schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub career_name: String,
    pub match_percentage: f64,
    pub eligibility_status: EligibilityStatus,
    pub risk_level: RiskLevel,
    pub short_description: String,
    pub why_it_matches: String,
    pub parental_advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub name: String,
    pub location: String,
    pub course_offered: String,
    pub fees: String,
    pub eligibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scholarship {
    pub name: String,
    pub provider: String,
    pub eligibility: String,
    pub amount: String,
}

/// Enrichment content for one selected career, fetched lazily and never
/// cached across selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDetail {
    pub why_this_career_suits_you: String,
    pub courses: Vec<Course>,
    pub entrance_exams: Vec<String>,
    pub colleges: Vec<College>,
    pub scholarships: Vec<Scholarship>,
    pub career_roadmap: Vec<String>,
    pub scope_and_growth: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recommendation_round_trips_without_loss() {
        let wire = json!([{
            "careerName": "Software Engineer",
            "matchPercentage": 92.5,
            "eligibilityStatus": "Eligible",
            "riskLevel": "Low",
            "shortDescription": "Builds software systems.",
            "whyItMatches": "Strong logical thinking and PCM background.",
            "parentalAdvice": "Stable demand and good growth."
        }]);

        let parsed: Vec<CareerRecommendation> = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].career_name, "Software Engineer");
        assert_eq!(parsed[0].match_percentage, 92.5);
        assert_eq!(parsed[0].eligibility_status, EligibilityStatus::Eligible);
        assert_eq!(parsed[0].risk_level, RiskLevel::Low);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), wire);
    }

    #[test]
    fn not_eligible_uses_spaced_wire_name() {
        let parsed: EligibilityStatus = serde_json::from_value(json!("Not Eligible")).unwrap();
        assert_eq!(parsed, EligibilityStatus::NotEligible);
        assert_eq!(
            serde_json::to_value(EligibilityStatus::NotEligible).unwrap(),
            json!("Not Eligible")
        );
    }

    #[test]
    fn career_detail_round_trips_without_loss() {
        let wire = json!({
            "whyThisCareerSuitsYou": "Matches your analytical skills.",
            "courses": [
                {"name": "B.Tech CSE", "duration": "4 years", "description": "Core CS degree."}
            ],
            "entranceExams": ["JEE Main", "State CET"],
            "colleges": [{
                "name": "Sample Institute of Technology",
                "location": "Bengaluru",
                "courseOffered": "B.Tech CSE",
                "fees": "INR 2L/year",
                "eligibility": "PCM with 60%"
            }],
            "scholarships": [{
                "name": "Merit Scholarship",
                "provider": "State Government",
                "eligibility": "Marks above 85%",
                "amount": "INR 50,000"
            }],
            "careerRoadmap": ["Clear JEE", "Finish B.Tech", "Internship", "First job"],
            "scopeAndGrowth": "Growing sector with global demand."
        });

        let parsed: CareerDetail = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(parsed.courses.len(), 1);
        assert_eq!(parsed.entrance_exams.len(), 2);
        assert_eq!(parsed.colleges[0].course_offered, "B.Tech CSE");
        assert_eq!(parsed.career_roadmap.len(), 4);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), wire);
    }
}
