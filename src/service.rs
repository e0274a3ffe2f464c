use crate::gemini::{GenerationError, GenerationRequest, TextGenerator};
use crate::models::{CareerDetail, CareerRecommendation};
use crate::profile::StudentProfile;
use crate::{prompts, schema};

/// Single banner message for any recommendation failure. Sub-causes are
/// not distinguished to the user.
pub const RECOMMENDATION_FAILURE: &str =
    "Failed to generate career recommendations. Please check your inputs and try again.";

/// Single message for any detail failure, shown inside the detail view.
pub const DETAIL_FAILURE: &str = "Could not load career details. Please try again later.";

/// One call: narrate the profile, attach the eligibility instruction and
/// the array schema, parse the returned text as a recommendation batch.
pub async fn fetch_recommendations<G: TextGenerator>(
    generator: &G,
    profile: &StudentProfile,
) -> Result<Vec<CareerRecommendation>, GenerationError> {
    let request = GenerationRequest {
        prompt: prompts::recommendation_prompt(profile),
        system_instruction: Some(prompts::RECOMMENDATION_SYSTEM.to_string()),
        response_schema: schema::recommendation_schema(),
    };

    let text = generator.generate(request).await?;
    let recommendations = serde_json::from_str(&text)?;
    Ok(recommendations)
}

/// One call per selected career; no caching, reselection re-fetches.
pub async fn fetch_career_detail<G: TextGenerator>(
    generator: &G,
    career_name: &str,
    profile: &StudentProfile,
) -> Result<CareerDetail, GenerationError> {
    let request = GenerationRequest {
        prompt: prompts::detail_prompt(career_name, profile),
        system_instruction: None,
        response_schema: schema::career_detail_schema(),
    };

    let text = generator.generate(request).await?;
    let detail = serde_json::from_str(&text)?;
    Ok(detail)
}
