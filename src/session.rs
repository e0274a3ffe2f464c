use crate::models::CareerRecommendation;
use crate::profile::{AcademicRecord, Interests, LocationPreference, SkillSet, StudentProfile};

/// Closed set of wizard screens, kept in lockstep with the step counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Academics,
    Skills,
    Interests,
    Location,
    Submitting,
    Results,
}

impl Screen {
    pub fn position(self) -> usize {
        match self {
            Screen::Home => 0,
            Screen::Academics => 1,
            Screen::Skills => 2,
            Screen::Interests => 3,
            Screen::Location => 4,
            Screen::Submitting => 5,
            Screen::Results => 6,
        }
    }
}

/// Stepper labels for the four form screens.
pub const FORM_STEP_LABELS: &[&str] = &["Academics", "Skills", "Interests", "Location"];

const FIRST_FORM_STEP: usize = 1;

/// Whole-session state. Every user action maps to one transition method
/// below, each returning a fresh snapshot; nothing else mutates this.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub screen: Screen,
    pub step: usize,
    pub profile: StudentProfile,
    pub results: Vec<CareerRecommendation>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            screen: Screen::Home,
            step: 0,
            profile: StudentProfile::default(),
            results: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    pub fn start(&self) -> Self {
        let mut next = self.clone();
        next.screen = Screen::Academics;
        next.step = Screen::Academics.position();
        next
    }

    /// Moves to the next form screen. No-op outside the form sequence;
    /// leaving the last form happens through `begin_submit`.
    pub fn advance(&self) -> Self {
        let mut next = self.clone();
        next.screen = match self.screen {
            Screen::Academics => Screen::Skills,
            Screen::Skills => Screen::Interests,
            Screen::Interests => Screen::Location,
            other => other,
        };
        next.step = next.screen.position();
        next
    }

    /// Moves back one form screen; never drops below the first form step.
    pub fn retreat(&self) -> Self {
        if self.step <= FIRST_FORM_STEP {
            return self.clone();
        }
        let mut next = self.clone();
        next.screen = match self.screen {
            Screen::Skills => Screen::Academics,
            Screen::Interests => Screen::Skills,
            Screen::Location => Screen::Interests,
            other => other,
        };
        next.step = next.screen.position();
        next
    }

    pub fn with_academics(&self, academics: AcademicRecord) -> Self {
        let mut next = self.clone();
        next.profile.academics = academics;
        next
    }

    pub fn with_skills(&self, skills: SkillSet) -> Self {
        let mut next = self.clone();
        next.profile.skills = skills;
        next
    }

    pub fn with_interests(&self, interests: Interests) -> Self {
        let mut next = self.clone();
        next.profile.interests = interests;
        next
    }

    pub fn with_location(&self, location: LocationPreference) -> Self {
        let mut next = self.clone();
        next.profile.location = location;
        next
    }

    pub fn begin_submit(&self) -> Self {
        let mut next = self.clone();
        next.screen = Screen::Submitting;
        next.step = Screen::Submitting.position();
        next.is_loading = true;
        next.error = None;
        next
    }

    pub fn finish_submit(&self, results: Vec<CareerRecommendation>) -> Self {
        let mut next = self.clone();
        next.screen = Screen::Results;
        next.step = Screen::Results.position();
        next.results = results;
        next.is_loading = false;
        next
    }

    /// Returns the wizard to the last form with a banner message; the
    /// profile is kept so the user can resubmit.
    pub fn fail_submit(&self, message: &str) -> Self {
        let mut next = self.clone();
        next.screen = Screen::Location;
        next.step = Screen::Location.position();
        next.results = Vec::new();
        next.is_loading = false;
        next.error = Some(message.to_string());
        next
    }

    pub fn restart(&self) -> Self {
        Session::new()
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EligibilityStatus, RiskLevel};

    fn sample_results() -> Vec<CareerRecommendation> {
        vec![CareerRecommendation {
            career_name: "Architect".to_string(),
            match_percentage: 74.0,
            eligibility_status: EligibilityStatus::Eligible,
            risk_level: RiskLevel::Medium,
            short_description: "Designs buildings.".to_string(),
            why_it_matches: "Creative with a science base.".to_string(),
            parental_advice: "Licensing takes time but pays off.".to_string(),
        }]
    }

    #[test]
    fn step_and_screen_stay_in_lockstep() {
        let mut session = Session::new().start();
        let moves: &[fn(&Session) -> Session] = &[
            Session::advance,
            Session::advance,
            Session::retreat,
            Session::advance,
            Session::advance,
            Session::retreat,
            Session::retreat,
            Session::retreat,
            Session::retreat,
        ];
        for step_fn in moves {
            session = step_fn(&session);
            assert_eq!(session.step, session.screen.position());
            assert!(session.step <= Screen::Results.position());
        }
    }

    #[test]
    fn retreat_never_drops_below_the_first_form() {
        let session = Session::new().start();
        let stuck = session.retreat().retreat().retreat();
        assert_eq!(stuck.screen, Screen::Academics);
        assert_eq!(stuck.step, 1);

        let home = Session::new();
        assert_eq!(home.retreat().step, 0);
    }

    #[test]
    fn advance_stops_at_the_last_form() {
        let session = Session::new().start().advance().advance().advance();
        assert_eq!(session.screen, Screen::Location);
        assert_eq!(session.advance().screen, Screen::Location);
    }

    #[test]
    fn submit_cycle_sets_and_clears_loading() {
        let at_location = Session::new().start().advance().advance().advance();
        let submitting = at_location.begin_submit();
        assert_eq!(submitting.screen, Screen::Submitting);
        assert!(submitting.is_loading);
        assert!(submitting.error.is_none());

        let done = submitting.finish_submit(sample_results());
        assert_eq!(done.screen, Screen::Results);
        assert!(!done.is_loading);
        assert_eq!(done.results.len(), 1);
    }

    #[test]
    fn failed_submit_restores_an_actionable_state() {
        let submitting = Session::new().start().advance().advance().advance().begin_submit();
        let failed = submitting.fail_submit("Failed to generate career recommendations.");

        assert_eq!(failed.screen, Screen::Location);
        assert!(failed.results.is_empty());
        assert!(!failed.is_loading);
        assert!(!failed.error.as_deref().unwrap().is_empty());
        // Profile survives so the user can resubmit.
        assert_eq!(failed.profile, submitting.profile);
        // Resubmitting clears the banner.
        assert!(failed.begin_submit().error.is_none());
    }

    #[test]
    fn restart_resets_everything_exactly() {
        let mut session = Session::new().start();
        let mut academics = AcademicRecord::default();
        academics.board = "ICSE".to_string();
        academics.marks = 67;
        academics.passed = true;
        session = session.with_academics(academics).advance();
        session = session
            .with_skills(SkillSet {
                creativity: true,
                ..SkillSet::default()
            })
            .advance();
        session = session.begin_submit().finish_submit(sample_results());
        let session = session.fail_submit("late error");

        assert_eq!(session.restart(), Session::new());
    }

    #[test]
    fn profile_updates_land_on_the_right_component() {
        let session = Session::new().start();
        let updated = session
            .with_interests(Interests {
                primary: "Law".to_string(),
                other: String::new(),
            })
            .with_location(LocationPreference {
                state: "Delhi".to_string(),
                districts: vec!["New Delhi".to_string()],
                anywhere_in_india: false,
                abroad: true,
            });

        assert_eq!(updated.profile.interests.primary, "Law");
        assert_eq!(updated.profile.location.districts, vec!["New Delhi"]);
        assert!(updated.profile.location.abroad);
        // Untouched components keep their defaults.
        assert_eq!(updated.profile.academics, AcademicRecord::default());
    }
}
