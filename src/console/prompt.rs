/// Parsing of what the player types at the console prompts

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    Letter(char),
    NotOneCharacter,
    NotALetter,
}

/// Trims and uppercases a line typed at `Enter a letter:`.
pub fn parse_guess(line: &str) -> GuessInput {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => GuessInput::Letter(c.to_ascii_uppercase()),
        (Some(_), None) => GuessInput::NotALetter,
        _ => GuessInput::NotOneCharacter,
    }
}

/// `Some(true)` for yes, `Some(false)` for no, `None` when the prompt must be repeated.
pub fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
