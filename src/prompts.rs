//! Prompt text for the two generation calls.
//!
//! The recommendation call carries a fixed system instruction with the
//! eligibility rules; the detail call carries the locality rules inline.
//! Both expect JSON back, constrained by the schemas in `schema`.

use crate::profile::StudentProfile;

pub const RECOMMENDATION_SYSTEM: &str = "\
You are a world-class career counselor for students who have just completed their +2 education in India. \
Your primary goal is to provide ACCURATE and REALISTIC career recommendations. You must follow these rules strictly:
1.  **Hard Eligibility Filter**: A career is ONLY shown if the student is academically eligible. This is non-negotiable.
    -   Science Stream (PCM/PCMB) is required for Engineering.
    -   Science Stream (PCB/PCMB) is required for Medical (MBBS, etc.).
    -   Commerce stream is required for careers like Chartered Accountancy.
    -   Arts stream is required for careers in humanities, fine arts etc.
    -   A student who failed (+2 marks < 35%) is NOT ELIGIBLE for any degree courses. Suggest diploma or vocational training instead.
2.  **Interest Match**: The recommended career must align with the student's stated interests. Do not suggest careers outside their interest domain.
3.  **Dynamic Generation**: Do not use a fixed list. Generate 3 to 5 diverse recommendations based on the user's complete profile.
4.  **Skills Influence Ranking**: Use the student's skills to rank the recommendations and to formulate the 'whyItMatches' explanation. Skills do NOT override academic eligibility.
5.  **Location is for Details**: Do not filter careers based on location, but keep it in mind for later when generating colleges.
6.  **AI Role**: Your role is to EXPLAIN and RECOMMEND based on rules, not to make decisions. Never override the academic eligibility rules.";

fn join_or(values: &[String], fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_string()
    } else {
        values.join(", ")
    }
}

fn skills_line(profile: &StudentProfile) -> String {
    let selected = profile.skills.selected_labels();
    if selected.is_empty() {
        "None selected".to_string()
    } else {
        selected.join(", ")
    }
}

fn stream_line(profile: &StudentProfile) -> String {
    profile
        .academics
        .stream
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Narrates the full profile and asks for 3-5 recommendations as JSON.
pub fn recommendation_prompt(profile: &StudentProfile) -> String {
    format!(
        "Analyze the following student profile and generate 3 to 5 career recommendations in JSON format.\n\
         \n\
         **Student Profile:**\n\
         - **Academics**:\n\
         \x20 - Board: {board}\n\
         \x20 - Stream: {stream}\n\
         \x20 - Group/Subjects: {subjects}\n\
         \x20 - Marks: {marks}%\n\
         \x20 - Pass/Fail Status: {pass_status}\n\
         - **Skills**: {skills}\n\
         - **Interests**:\n\
         \x20 - Primary: {primary}\n\
         \x20 - Other: {other}\n\
         - **Location Preference**:\n\
         \x20 - State: {state}\n\
         \x20 - Districts: {districts}\n\
         \x20 - Anywhere in India: {anywhere}\n\
         \x20 - Abroad: {abroad}\n\
         \n\
         Based on the system instructions and this profile, generate the JSON output. \
         Ensure 'eligibilityStatus' is 'Not Eligible' if the academic rules are not met for a potential career path.",
        board = profile.academics.board,
        stream = stream_line(profile),
        subjects = join_or(&profile.academics.subjects, "N/A"),
        marks = profile.academics.marks,
        pass_status = if profile.academics.passed { "Pass" } else { "Fail" },
        skills = skills_line(profile),
        primary = profile.interests.primary,
        other = profile.interests.other,
        state = profile.location.state,
        districts = join_or(&profile.location.districts, "N/A"),
        anywhere = profile.location.anywhere_in_india,
        abroad = profile.location.abroad,
    )
}

/// Per-career enrichment prompt. Colleges must honor the locality order
/// district > state > anywhere in India, plus abroad when requested.
pub fn detail_prompt(career_name: &str, profile: &StudentProfile) -> String {
    format!(
        "The user is interested in the career: \"{career}\".\n\
         Based on their full profile below, generate detailed information for this career.\n\
         \n\
         **Student Profile:**\n\
         - Academics: Stream - {stream}, Subjects - {subjects}, Marks - {marks}%\n\
         - Skills: {skills}\n\
         - Location Preference: State - {state}, Districts - {districts}, Anywhere in India - {anywhere}, Abroad - {abroad}\n\
         \n\
         **Generation Instructions:**\n\
         1.  **Courses**: Generate realistic degree/diploma courses for \"{career}\" that fit the student's academic background.\n\
         2.  **Colleges**: Recommend 3-4 real colleges. **Crucially, these colleges MUST be in the user's preferred location (Districts > State > Anywhere in India)**. \
         If 'Abroad' is selected, suggest colleges in popular countries for that field. \
         If no colleges are found in the specific district, broaden the search to the state. Mention this in an alert.\n\
         3.  **Scholarships**: Suggest relevant scholarships based on course, location, and marks. Mention general government and private scholarships.\n\
         4.  **Roadmap**: Provide a step-by-step career roadmap.\n\
         5.  **Why it Suits You**: Personalize this section, connecting the career to the student's specific skills and interests.\n\
         \n\
         Generate the output in the specified JSON format.",
        career = career_name,
        stream = stream_line(profile),
        subjects = join_or(&profile.academics.subjects, "N/A"),
        marks = profile.academics.marks,
        skills = skills_line(profile),
        state = profile.location.state,
        districts = join_or(&profile.location.districts, "N/A"),
        anywhere = profile.location.anywhere_in_india,
        abroad = profile.location.abroad,
    )
}
