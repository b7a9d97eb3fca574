/// Main menu entries: (key, description)
pub const MAIN_MENU: &[(&str, &str)] = &[
    ("1", "Interactive Translation"),
    ("2", "Batch File Translation"),
    ("3", "Quick Test"),
    ("q", "Quit"),
];

/// Interactive translation entries: (key, description)
pub const TRANSLATE_MENU: &[(&str, &str)] = &[
    ("1", "English → Pidgin"),
    ("2", "Pidgin → English"),
    ("3", "Auto-detect"),
    ("q", "Back to main menu"),
];

/// A main menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Interactive,
    Batch,
    QuickTest,
    Quit,
    Invalid(String),
}

/// An interactive translation mode selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeChoice {
    ToPidgin,
    ToEnglish,
    AutoDetect,
    Back,
    Invalid(String),
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

pub fn parse_menu_choice(input: &str) -> MenuChoice {
    match normalize(input).as_str() {
        "1" => MenuChoice::Interactive,
        "2" => MenuChoice::Batch,
        "3" => MenuChoice::QuickTest,
        "q" => MenuChoice::Quit,
        other => MenuChoice::Invalid(other.to_string()),
    }
}

pub fn parse_mode_choice(input: &str) -> ModeChoice {
    match normalize(input).as_str() {
        "1" => ModeChoice::ToPidgin,
        "2" => ModeChoice::ToEnglish,
        "3" => ModeChoice::AutoDetect,
        "q" => ModeChoice::Back,
        other => ModeChoice::Invalid(other.to_string()),
    }
}
