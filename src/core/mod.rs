pub mod game;
pub mod session;
pub mod terminal; // Line output for the console presentation
pub mod words;
