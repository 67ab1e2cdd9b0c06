//! Reusable UI controls for the notes app.

mod button;
mod input;
mod loading;
mod select;

pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use loading::LoadingSpinner;
pub use select::Select;
