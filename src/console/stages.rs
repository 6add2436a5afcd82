use crate::core::game::MAX_WRONG;

/// Gallows drawings indexed by wrong guesses, 0 through `MAX_WRONG`.
pub const STAGES: [&str; MAX_WRONG as usize + 1] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

pub fn stage(wrong_guesses: u8) -> &'static str {
    STAGES[usize::from(wrong_guesses.min(MAX_WRONG))]
}
