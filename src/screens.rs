use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::*;

use crate::domain::{
    districts_for, interest_options, subject_groups, Stream, EDUCATION_BOARDS, SKILL_LABELS,
    STATES, STREAMS,
};
use crate::gemini::TextGenerator;
use crate::models::CareerRecommendation;
use crate::profile::{AcademicRecord, Interests, LocationPreference, SkillSet, StudentProfile};
use crate::render;
use crate::service;
use crate::session::{Screen, Session};

/// What a form screen hands back: either its filled component or a
/// request to go one step back.
pub enum FormOutcome<T> {
    Filled(T),
    Back,
}

/// Drives the wizard from the home screen to the results view. Both
/// network calls are awaited inline, so at most one request of each kind
/// is ever in flight.
pub async fn run<G: TextGenerator>(generator: &G, dry_run: bool) -> Result<()> {
    let mut session = Session::new();

    loop {
        match session.screen {
            Screen::Home => {
                render::home();
                let input = read_trimmed("Press Enter to begin, or 'q' to quit:")?;
                if input.eq_ignore_ascii_case("q") {
                    break;
                }
                session = session.start();
            }
            Screen::Academics => {
                render::stepper(session.step);
                match collect_academics()? {
                    FormOutcome::Filled(academics) => {
                        session = session.with_academics(academics).advance();
                    }
                    FormOutcome::Back => session = session.retreat(),
                }
            }
            Screen::Skills => {
                render::stepper(session.step);
                match collect_skills()? {
                    FormOutcome::Filled(skills) => {
                        session = session.with_skills(skills).advance();
                    }
                    FormOutcome::Back => session = session.retreat(),
                }
            }
            Screen::Interests => {
                render::stepper(session.step);
                let stream = session
                    .profile
                    .academics
                    .stream
                    .context("stream must be selected before interests")?;
                match collect_interests(stream)? {
                    FormOutcome::Filled(interests) => {
                        session = session.with_interests(interests).advance();
                    }
                    FormOutcome::Back => session = session.retreat(),
                }
            }
            Screen::Location => {
                render::stepper(session.step);
                if let Some(error) = &session.error {
                    render::error_banner(error);
                }
                match collect_location()? {
                    FormOutcome::Filled(location) => {
                        session = session.with_location(location);
                        if dry_run {
                            println!("{}", serde_json::to_string_pretty(&session.profile)?);
                            break;
                        }
                        session = session.begin_submit();
                    }
                    FormOutcome::Back => session = session.retreat(),
                }
            }
            Screen::Submitting => {
                render::submitting();
                match service::fetch_recommendations(generator, &session.profile).await {
                    Ok(results) => session = session.finish_submit(results),
                    Err(_) => session = session.fail_submit(service::RECOMMENDATION_FAILURE),
                }
            }
            Screen::Results => {
                render::results(&session.results);
                let input = read_trimmed(
                    "Enter a number for career details, 'r' to start over, 'q' to quit:",
                )?;
                if input.eq_ignore_ascii_case("q") {
                    break;
                }
                if input.eq_ignore_ascii_case("r") {
                    session = session.restart();
                    continue;
                }
                match parse_choice(&input, session.results.len()) {
                    Some(index) => {
                        let career = session.results[index].clone();
                        open_detail(generator, &career, &session.profile).await?;
                    }
                    None => println!("{}", "Please enter a listed number, 'r', or 'q'.".red()),
                }
            }
        }
    }

    Ok(())
}

/// Detail view: one request per open, pending notice until it settles,
/// failures stay inside this view.
async fn open_detail<G: TextGenerator>(
    generator: &G,
    career: &CareerRecommendation,
    profile: &StudentProfile,
) -> Result<()> {
    render::detail_pending(&career.career_name);
    match service::fetch_career_detail(generator, &career.career_name, profile).await {
        Ok(detail) => render::detail(&career.career_name, &detail),
        Err(_) => render::error_banner(service::DETAIL_FAILURE),
    }
    Ok(())
}

fn collect_academics() -> Result<FormOutcome<AcademicRecord>> {
    // Back is disabled on the first form.
    let boards: Vec<String> = EDUCATION_BOARDS.iter().map(|b| b.to_string()).collect();
    let board = match choose("Education board", &boards, false)? {
        FormOutcome::Filled(index) => boards[index].clone(),
        FormOutcome::Back => return Ok(FormOutcome::Back),
    };

    let stream_names: Vec<String> = STREAMS.iter().map(|s| s.to_string()).collect();
    let stream = match choose("Stream", &stream_names, false)? {
        FormOutcome::Filled(index) => STREAMS[index],
        FormOutcome::Back => return Ok(FormOutcome::Back),
    };

    let groups = subject_groups(stream);
    let group_names: Vec<String> = groups.iter().map(|g| g.name.to_string()).collect();
    let group = match choose("Subject group", &group_names, false)? {
        FormOutcome::Filled(index) => groups[index],
        FormOutcome::Back => return Ok(FormOutcome::Back),
    };

    let marks = match ask_marks(false)? {
        FormOutcome::Filled(marks) => marks,
        FormOutcome::Back => return Ok(FormOutcome::Back),
    };

    let passed = match ask_yes_no("Did you pass your +2 examinations?", false)? {
        FormOutcome::Filled(passed) => passed,
        FormOutcome::Back => return Ok(FormOutcome::Back),
    };

    Ok(FormOutcome::Filled(AcademicRecord {
        board,
        stream: Some(stream),
        group: group.name.to_string(),
        subjects: group.subjects.iter().map(|s| s.to_string()).collect(),
        marks,
        passed,
    }))
}

fn collect_skills() -> Result<FormOutcome<SkillSet>> {
    let labels: Vec<String> = SKILL_LABELS.iter().map(|s| s.to_string()).collect();
    match multi_choose("Which of these describe you?", &labels, true)? {
        FormOutcome::Filled(indices) => Ok(FormOutcome::Filled(SkillSet::from_indices(&indices))),
        FormOutcome::Back => Ok(FormOutcome::Back),
    }
}

fn collect_interests(stream: Stream) -> Result<FormOutcome<Interests>> {
    let options: Vec<String> = interest_options(stream)
        .iter()
        .map(|i| i.to_string())
        .collect();
    let primary = match choose("Primary interest", &options, true)? {
        FormOutcome::Filled(index) => options[index].clone(),
        FormOutcome::Back => return Ok(FormOutcome::Back),
    };

    let other = read_trimmed("Any other interests? (press Enter to skip)")?;

    Ok(FormOutcome::Filled(Interests { primary, other }))
}

fn collect_location() -> Result<FormOutcome<LocationPreference>> {
    let anywhere_in_india = match ask_yes_no("Open to studying anywhere in India?", true)? {
        FormOutcome::Filled(answer) => answer,
        FormOutcome::Back => return Ok(FormOutcome::Back),
    };

    let state_names: Vec<String> = STATES.iter().map(|s| s.name.to_string()).collect();
    let state = match choose("Home state", &state_names, true)? {
        FormOutcome::Filled(index) => state_names[index].clone(),
        FormOutcome::Back => return Ok(FormOutcome::Back),
    };

    let district_options: Vec<String> = districts_for(&state)
        .unwrap_or_default()
        .iter()
        .map(|d| d.to_string())
        .collect();
    let districts = match multi_choose("Preferred districts", &district_options, true)? {
        FormOutcome::Filled(indices) => indices
            .into_iter()
            .map(|index| district_options[index].clone())
            .collect(),
        FormOutcome::Back => return Ok(FormOutcome::Back),
    };

    let abroad = match ask_yes_no("Interested in studying abroad?", true)? {
        FormOutcome::Filled(answer) => answer,
        FormOutcome::Back => return Ok(FormOutcome::Back),
    };

    Ok(FormOutcome::Filled(LocationPreference {
        state,
        districts,
        anywhere_in_india,
        abroad,
    }))
}

fn read_trimmed(prompt: &str) -> Result<String> {
    print!("{} ", prompt.yellow());
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn back_hint(allow_back: bool) -> &'static str {
    if allow_back {
        " (or 'b' to go back)"
    } else {
        ""
    }
}

fn choose(title: &str, options: &[String], allow_back: bool) -> Result<FormOutcome<usize>> {
    println!();
    println!("{}", title.cyan().bold());
    for (index, option) in options.iter().enumerate() {
        println!("  {}. {}", index + 1, option);
    }
    loop {
        let input = read_trimmed(&format!("Enter a number{}:", back_hint(allow_back)))?;
        if allow_back && input.eq_ignore_ascii_case("b") {
            return Ok(FormOutcome::Back);
        }
        match parse_choice(&input, options.len()) {
            Some(index) => return Ok(FormOutcome::Filled(index)),
            None => println!(
                "{}",
                format!("Please enter a number between 1 and {}.", options.len()).red()
            ),
        }
    }
}

fn multi_choose(
    title: &str,
    options: &[String],
    allow_back: bool,
) -> Result<FormOutcome<Vec<usize>>> {
    println!();
    println!("{}", title.cyan().bold());
    for (index, option) in options.iter().enumerate() {
        println!("  {}. {}", index + 1, option);
    }
    loop {
        let input = read_trimmed(&format!(
            "Enter numbers separated by commas, or press Enter to skip{}:",
            back_hint(allow_back)
        ))?;
        if allow_back && input.eq_ignore_ascii_case("b") {
            return Ok(FormOutcome::Back);
        }
        match parse_multi_choice(&input, options.len()) {
            Some(indices) => return Ok(FormOutcome::Filled(indices)),
            None => println!(
                "{}",
                format!("Use numbers between 1 and {}, separated by commas.", options.len()).red()
            ),
        }
    }
}

fn ask_yes_no(question: &str, allow_back: bool) -> Result<FormOutcome<bool>> {
    loop {
        let input = read_trimmed(&format!("{} [y/n]{}:", question, back_hint(allow_back)))?;
        if allow_back && input.eq_ignore_ascii_case("b") {
            return Ok(FormOutcome::Back);
        }
        match parse_yes_no(&input) {
            Some(answer) => return Ok(FormOutcome::Filled(answer)),
            None => println!("{}", "Please answer 'y' or 'n'.".red()),
        }
    }
}

fn ask_marks(allow_back: bool) -> Result<FormOutcome<u8>> {
    loop {
        let input = read_trimmed(&format!(
            "Overall +2 marks percentage (0-100){}:",
            back_hint(allow_back)
        ))?;
        if allow_back && input.eq_ignore_ascii_case("b") {
            return Ok(FormOutcome::Back);
        }
        match parse_marks(&input) {
            Some(marks) => return Ok(FormOutcome::Filled(marks)),
            None => println!("{}", "Please enter a whole number from 0 to 100.".red()),
        }
    }
}

fn parse_choice(input: &str, option_count: usize) -> Option<usize> {
    let number: usize = input.trim().parse().ok()?;
    if number >= 1 && number <= option_count {
        Some(number - 1)
    } else {
        None
    }
}

fn parse_multi_choice(input: &str, option_count: usize) -> Option<Vec<usize>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(Vec::new());
    }
    let mut indices = Vec::new();
    for part in trimmed.split(',') {
        let index = parse_choice(part, option_count)?;
        if !indices.contains(&index) {
            indices.push(index);
        }
    }
    Some(indices)
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn parse_marks(input: &str) -> Option<u8> {
    let marks: u8 = input.trim().parse().ok()?;
    if marks <= 100 {
        Some(marks)
    } else {
        None
    }
}
