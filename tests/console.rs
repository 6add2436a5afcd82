use std::io::Cursor;

use hangterm::console::ConsoleGame;
use hangterm::core::terminal::TerminalContext;
use hangterm::{FixedWordSource, Session};

fn play(words: &[&str], input: &str) -> anyhow::Result<String> {
    let session = Session::new(FixedWordSource::new(words.iter().copied()))?;
    let game = ConsoleGame::new(
        session,
        Cursor::new(input.to_owned()),
        TerminalContext::new(Vec::new(), false),
    );
    let out = game.run()?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn winning_round_then_quit() {
    let out = play(&["JAVA"], "j\nz\na\nv\nn\n").unwrap();

    assert!(out.contains("WELCOME TO HANGMAN GAME!"));
    assert!(out.contains("Word length: 4 letters"));
    assert!(out.contains("Good guess! 'J' is in the word."));
    assert!(out.contains("Word: J _ _ _"));
    assert!(out.contains("Sorry! 'Z' is not in the word."));
    assert!(out.contains("Word: J A _ A"));
    assert!(out.contains("Guessed letters: A J Z"));
    assert!(out.contains("CONGRATULATIONS! YOU WON!"));
    assert!(out.contains("You guessed the word: JAVA"));
    assert!(out.contains("Wrong guesses: 1/6"));
    assert!(out.contains("Do you want to play again? (y/n): "));
    assert!(out.trim_end().ends_with("Thanks for playing Hangman! Goodbye!"));
    assert_eq!(out.matches("Enter a letter: ").count(), 4);
}

#[test]
fn bad_input_is_rejected_without_using_a_turn() {
    let out = play(&["GO"], "ab\n\n7\ng\nG\no\nn\n").unwrap();

    assert!(out.contains("Please enter exactly one letter!"));
    assert!(out.contains("Please enter a valid letter!"));
    assert!(out.contains("You already guessed that letter! Try again."));
    assert_eq!(out.matches("Please enter exactly one letter!").count(), 2);
    assert!(out.contains("You guessed the word: GO"));
    assert!(out.contains("Wrong guesses: 0/6"));
}

#[test]
fn losing_round_then_play_again() {
    let input = "b\nc\nd\ne\nf\ng\nmaybe\nY\nr\nu\ns\nt\nno\n";
    let out = play(&["JAVA", "RUST"], input).unwrap();

    assert!(out.contains("GAME OVER! YOU LOST!"));
    assert!(out.contains("The word was: JAVA"));
    assert!(out.contains("Wrong guesses: 6/6"));
    assert!(out.contains(" / \\  |"));
    assert!(out.contains("Please enter 'y' for yes or 'n' for no."));
    assert_eq!(out.matches("New game started!").count(), 2);
    assert!(out.contains("You guessed the word: RUST"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn end_of_input_ends_the_session() {
    let out = play(&["JAVA"], "j\n").unwrap();
    assert!(out.contains("Good guess! 'J' is in the word."));
    assert!(!out.contains("CONGRATULATIONS"));
    assert!(out.trim_end().ends_with("Thanks for playing Hangman! Goodbye!"));

    let out = play(&["GO"], "g\no\n").unwrap();
    assert!(out.contains("CONGRATULATIONS"));
    assert!(out.trim_end().ends_with("Goodbye!"));
}

#[test]
fn invalid_word_from_the_source_is_fatal() {
    let err = play(&["GO", "G0"], "g\no\ny\n").unwrap_err();
    assert!(format!("{:#}", err).contains("G0"));
}
