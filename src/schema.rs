use serde_json::{json, Value};

/// Declared output schema for the recommendation call: an array of career
/// objects. The provider is told to emit JSON conforming to this shape.
pub fn recommendation_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "careerName": { "type": "STRING" },
                "matchPercentage": { "type": "NUMBER" },
                "eligibilityStatus": { "type": "STRING", "enum": ["Eligible", "Not Eligible"] },
                "riskLevel": { "type": "STRING", "enum": ["Low", "Medium", "High"] },
                "shortDescription": { "type": "STRING" },
                "whyItMatches": { "type": "STRING" },
                "parentalAdvice": {
                    "type": "STRING",
                    "description": "Advice for parents about this career, focusing on safety, cost, job stability, and growth, in simple, non-technical language."
                }
            },
            "required": [
                "careerName",
                "matchPercentage",
                "eligibilityStatus",
                "riskLevel",
                "shortDescription",
                "whyItMatches",
                "parentalAdvice"
            ]
        }
    })
}

/// Declared output schema for the detail call: one nested object.
pub fn career_detail_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "whyThisCareerSuitsYou": { "type": "STRING" },
            "courses": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "duration": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    },
                    "required": ["name", "duration", "description"]
                }
            },
            "entranceExams": { "type": "ARRAY", "items": { "type": "STRING" } },
            "colleges": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "location": { "type": "STRING" },
                        "courseOffered": { "type": "STRING" },
                        "fees": { "type": "STRING" },
                        "eligibility": { "type": "STRING" }
                    },
                    "required": ["name", "location", "courseOffered", "fees", "eligibility"]
                }
            },
            "scholarships": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "provider": { "type": "STRING" },
                        "eligibility": { "type": "STRING" },
                        "amount": { "type": "STRING" }
                    },
                    "required": ["name", "provider", "eligibility", "amount"]
                }
            },
            "careerRoadmap": { "type": "ARRAY", "items": { "type": "STRING" } },
            "scopeAndGrowth": { "type": "STRING" }
        },
        "required": [
            "whyThisCareerSuitsYou",
            "courses",
            "entranceExams",
            "colleges",
            "scholarships",
            "careerRoadmap",
            "scopeAndGrowth"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_schema_is_an_array_of_objects() {
        let schema = recommendation_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["type"], "OBJECT");
        let required = schema["items"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 7);
        assert!(required.iter().any(|f| f == "eligibilityStatus"));
    }

    #[test]
    fn detail_schema_requires_every_section() {
        let schema = career_detail_schema();
        assert_eq!(schema["type"], "OBJECT");
        let required = schema["required"].as_array().unwrap();
        for field in [
            "whyThisCareerSuitsYou",
            "courses",
            "entranceExams",
            "colleges",
            "scholarships",
            "careerRoadmap",
            "scopeAndGrowth",
        ] {
            assert!(required.iter().any(|f| f == field), "missing {}", field);
        }
    }

    #[test]
    fn eligibility_enum_matches_wire_values() {
        let schema = recommendation_schema();
        let options = schema["items"]["properties"]["eligibilityStatus"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(options, &["Eligible", "Not Eligible"]);
    }
}
