// SPDX-License-Identifier: MIT

//! Motivation prompt text shown when reporting today's status.

use rand::seq::SliceRandom;

/// Tone of the prompt copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStyle {
    #[default]
    Motivational,
    Minimal,
    Playful,
}

impl PromptStyle {
    pub fn display_name(&self) -> &'static str {
        match self {
            PromptStyle::Motivational => "Motivational",
            PromptStyle::Minimal => "Minimal",
            PromptStyle::Playful => "Playful",
        }
    }
}

impl std::str::FromStr for PromptStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "motivational" => Ok(PromptStyle::Motivational),
            "minimal" => Ok(PromptStyle::Minimal),
            "playful" => Ok(PromptStyle::Playful),
            other => Err(format!("Unknown prompt style: {other}")),
        }
    }
}

/// A short title/subtitle pair nudging the user to work out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotivationPrompt {
    pub title: &'static str,
    pub subtitle: &'static str,
}

const fn prompt(title: &'static str, subtitle: &'static str) -> MotivationPrompt {
    MotivationPrompt { title, subtitle }
}

const MOTIVATIONAL_PROMPTS: [MotivationPrompt; 5] = [
    prompt("Not yet?", "Make today count."),
    prompt("One set away", "From momentum."),
    prompt("Still quiet", "Break the sweat."),
    prompt("Discipline calls", "Answer it."),
    prompt("No excuses", "Just start."),
];

const MINIMAL_PROMPTS: [MotivationPrompt; 5] = [
    prompt("Not yet", "Go move."),
    prompt("Waiting", "On you."),
    prompt("Zero reps", "Change that."),
    prompt("Rest day?", "Your call."),
    prompt("Idle", "Move soon."),
];

const PLAYFUL_PROMPTS: [MotivationPrompt; 5] = [
    prompt("Couch mode", "Activate legs!"),
    prompt("Muscles miss", "You already."),
    prompt("Plot twist:", "You work out."),
    prompt("Gym misses", "Its favorite."),
    prompt("Snack first?", "Then sweat!"),
];

fn workout_prompts(style: PromptStyle) -> &'static [MotivationPrompt] {
    match style {
        PromptStyle::Motivational => &MOTIVATIONAL_PROMPTS,
        PromptStyle::Minimal => &MINIMAL_PROMPTS,
        PromptStyle::Playful => &PLAYFUL_PROMPTS,
    }
}

fn completed_prompts(style: PromptStyle) -> &'static [&'static str] {
    match style {
        PromptStyle::Motivational => &[
            "Done & dusted",
            "You showed up",
            "Strong move",
            "Workout locked",
            "Momentum built",
        ],
        PromptStyle::Minimal => &["Done", "Checked off", "Complete", "Logged", "Finished"],
        PromptStyle::Playful => &[
            "Nailed it!",
            "Sweat unlocked",
            "Beast mode!",
            "Crushed it!",
            "Level up!",
        ],
    }
}

/// A random nudge for a day without a workout.
pub fn random_workout_prompt(style: PromptStyle) -> MotivationPrompt {
    let prompts = workout_prompts(style);
    // The tables are non-empty constants, so choose always succeeds.
    *prompts.choose(&mut rand::thread_rng()).unwrap_or(&prompts[0])
}

/// A random acknowledgement for a completed workout.
pub fn random_completed_prompt(style: PromptStyle) -> &'static str {
    let prompts = completed_prompts(style);
    *prompts.choose(&mut rand::thread_rng()).unwrap_or(&prompts[0])
}

/// Deterministic first entry, for previews and tests.
pub fn sample_workout_prompt(style: PromptStyle) -> MotivationPrompt {
    workout_prompts(style)[0]
}

/// Deterministic first entry, for previews and tests.
pub fn sample_completed_prompt(style: PromptStyle) -> &'static str {
    completed_prompts(style)[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_styles_have_prompts() {
        for style in [
            PromptStyle::Motivational,
            PromptStyle::Minimal,
            PromptStyle::Playful,
        ] {
            assert_eq!(workout_prompts(style).len(), 5);
            assert_eq!(completed_prompts(style).len(), 5);
        }
    }

    #[test]
    fn test_random_prompt_comes_from_table() {
        let picked = random_workout_prompt(PromptStyle::Minimal);
        assert!(workout_prompts(PromptStyle::Minimal).contains(&picked));

        let completed = random_completed_prompt(PromptStyle::Playful);
        assert!(completed_prompts(PromptStyle::Playful).contains(&completed));
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!(
            "playful".parse::<PromptStyle>().unwrap(),
            PromptStyle::Playful
        );
        assert_eq!(
            "Motivational".parse::<PromptStyle>().unwrap(),
            PromptStyle::Motivational
        );
        assert!("sarcastic".parse::<PromptStyle>().is_err());
    }

    #[test]
    fn test_samples_are_deterministic() {
        assert_eq!(sample_workout_prompt(PromptStyle::Minimal).title, "Not yet");
        assert_eq!(sample_completed_prompt(PromptStyle::Minimal), "Done");
    }
}
