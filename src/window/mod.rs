/// Full-screen window presentation: canvas figure, clickable letters, end-of-round dialog
pub mod app;
pub mod board;
pub mod figure;
pub mod renderer;
pub mod runner;

pub use app::WindowApp;
pub use renderer::WindowRenderer;
pub use runner::run;
