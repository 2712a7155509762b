pub mod cli;
pub mod floor;
pub mod input;
pub mod output;
pub mod present;
pub mod wrapping;

pub use cli::{CliArgs, Program, ReturnCode};
pub use floor::FloorDirections;
pub use present::PresentDimensions;
pub use wrapping::WrappingAnalysis;
