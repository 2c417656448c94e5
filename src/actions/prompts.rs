//! Prompt builders
//!
//! Plain string templates; user-supplied fields are interpolated as-is.

use serde_json::Value;

use super::request::{LearnedWord, Theme};

/// Referee rules appended to the identification prompt in scavenger-hunt mode
fn theme_rules(theme: &Theme) -> String {
    format!(
        "\nGAME MODE: \"{}\"\nGAME RULE DESCRIPTION: \"{}\"\nYOUR ROLE: You are a strict but friendly referee for a children's scavenger hunt.\nOUTPUT: Return JSON with word, definition, visualDetail, matchesTheme(boolean), feedback",
        theme.label.as_deref().unwrap_or_default(),
        theme.description.as_deref().unwrap_or_default(),
    )
}

pub fn identify_object(theme: Option<&Theme>) -> String {
    let rules = theme.map(theme_rules).unwrap_or_default();
    format!(
        "Analyze this image for a child's learning app. {} Return a JSON object with: word, definition, visualDetail, matchesTheme, feedback.",
        rules
    )
}

pub fn lookup_word(word: &str, context: &str, age_group: &str) -> String {
    format!(
        "Explain the word \"{}\" to a {} year old child. Context: \"{}\". Return JSON with definition, funFact, emoji, visualDetail.",
        word, age_group, context
    )
}

pub fn story(
    items: &[LearnedWord],
    theme: Option<&Theme>,
    kid_profile: Option<&Value>,
    user_prompt: Option<&str>,
) -> String {
    let profile = kid_profile
        .map(Value::to_string)
        .unwrap_or_else(|| "{}".to_string());
    let theme_label = theme
        .and_then(|theme| theme.label.as_deref())
        .unwrap_or_default();
    let words = items
        .iter()
        .map(|item| item.word.as_str())
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "You are writing a short story for a child. CHILD PROFILE: {} THEME: {} REQUIRED ITEMS: {} USER'S IDEA: \"{}\". Return JSON with title, mainCharacterVisual, pages (array of {{pageNumber,text}}).",
        profile,
        theme_label,
        words,
        user_prompt.unwrap_or_default()
    )
}

pub fn illustration(prompt: &str, style: &str, character_visual: &str) -> String {
    format!(
        "Kids book illustration, {}. {}. Action: {}. Colorful, cute, high quality. No text, no words, no letters, no labels.",
        style, character_visual, prompt
    )
}

pub fn sticker(word: &str) -> String {
    format!(
        "Create a die-cut sticker of the \"{}\" from this image. 1. Isolate the object on a white background. 2. Add a thick white sticker border. 3. Add a drop shadow. 4. Keep original colors. High quality.",
        word
    )
}
