use colored::*;

use crate::models::{CareerDetail, CareerRecommendation};
use crate::session::FORM_STEP_LABELS;

pub fn home() {
    println!();
    println!("{}", "💡 Career Compass AI".cyan().bold());
    println!("{}", "Personalized career guidance for students finishing +2".dimmed());
    println!();
    println!("Answer four short sections — academics, skills, interests, location —");
    println!("and get AI-generated career recommendations with colleges, scholarships,");
    println!("and a roadmap for each.");
    println!();
}

/// Stepper line for the four form screens, current step highlighted.
pub fn stepper(step: usize) {
    let mut parts = Vec::new();
    for (index, label) in FORM_STEP_LABELS.iter().enumerate() {
        let number = index + 1;
        let cell = format!("[{}] {}", number, label);
        if number == step {
            parts.push(cell.cyan().bold().to_string());
        } else if number < step {
            parts.push(cell.green().to_string());
        } else {
            parts.push(cell.dimmed().to_string());
        }
    }
    println!();
    println!("{}", parts.join("  "));
    println!("{}", "─".repeat(56).dimmed());
}

pub fn submitting() {
    println!();
    println!("{}", "Generating recommendations...".yellow());
    println!("{}", "Analyzing your profile with the AI counselor.".dimmed());
}

pub fn error_banner(message: &str) {
    println!();
    println!("{} {}", "⚠".red().bold(), message.red());
}

pub fn results(recommendations: &[CareerRecommendation]) {
    println!();
    println!("{}", "Your Career Recommendations".cyan().bold());
    println!();

    if recommendations.is_empty() {
        println!("{}", "No recommendations were returned.".yellow());
        return;
    }

    for (index, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {}  {}",
            (index + 1).to_string().cyan(),
            rec.career_name.bold(),
            format!("{:.0}% match", rec.match_percentage).yellow()
        );
        println!(
            "   {} {}   {} {}",
            "Eligibility:".dimmed(),
            rec.eligibility_status.badge(),
            "Risk:".dimmed(),
            rec.risk_level.badge()
        );
        println!("   {}", rec.short_description);
        println!("   {} {}", "Why it matches:".dimmed(), rec.why_it_matches);
        println!("   {} {}", "For parents:".dimmed(), rec.parental_advice);
        println!();
    }
}

pub fn detail_pending(career_name: &str) {
    println!();
    println!(
        "{}",
        format!("Fetching details for {}...", career_name).yellow()
    );
}

fn section(title: &str) {
    println!();
    println!("{}", title.cyan().bold());
}

pub fn detail(career_name: &str, detail: &CareerDetail) {
    println!();
    println!("{}", "═".repeat(56).dimmed());
    println!("{}", career_name.bold());

    section("Why This Career Suits You");
    println!("{}", detail.why_this_career_suits_you);

    section("Relevant Courses");
    for course in &detail.courses {
        println!(
            "  • {} ({}): {}",
            course.name.bold(),
            course.duration,
            course.description
        );
    }

    section("Entrance Exams");
    println!("  {}", detail.entrance_exams.join(", "));

    section("Recommended Colleges");
    for college in &detail.colleges {
        println!("  {}", college.name.bold());
        println!("    {} {}", "Location:".dimmed(), college.location);
        println!(
            "    {} {} | {} {}",
            "Course:".dimmed(),
            college.course_offered,
            "Fees:".dimmed(),
            college.fees
        );
        println!("    {} {}", "Eligibility:".dimmed(), college.eligibility);
    }

    section("Scholarships");
    for scholarship in &detail.scholarships {
        println!(
            "  {} ({})",
            scholarship.name.bold(),
            scholarship.provider
        );
        println!(
            "    {} {} | {} {}",
            "Eligibility:".dimmed(),
            scholarship.eligibility,
            "Amount:".dimmed(),
            scholarship.amount
        );
    }

    section("Career Roadmap");
    for (index, milestone) in detail.career_roadmap.iter().enumerate() {
        println!("  {}. {}", index + 1, milestone);
    }

    section("Scope & Growth");
    println!("{}", detail.scope_and_growth);
    println!();
    println!("{}", "═".repeat(56).dimmed());
}
