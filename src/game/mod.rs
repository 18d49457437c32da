pub mod input;
pub mod physics;
pub mod render;
pub mod state;

pub use input::{poll_input, InputAction};
pub use physics::StepEvents;
pub use render::{DrawCommand, Palette, Rgb};
pub use state::{Court, MatchState, Side, Simulation};
