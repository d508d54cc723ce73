pub mod engine;
pub mod menu;
pub mod outcome;
pub mod render;

pub use engine::{Identity, Session};
pub use outcome::{NavAction, Outcome, UserAction};
pub use render::Renderer;
