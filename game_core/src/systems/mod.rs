pub mod ai;
pub mod collision;
pub mod input;
pub mod momentum;
pub mod movement;
pub mod scoring;

pub use ai::*;
pub use collision::*;
pub use input::*;
pub use momentum::*;
pub use movement::*;
pub use scoring::*;
