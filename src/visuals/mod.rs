pub mod battery;
pub mod confetti;
pub mod watermark;

pub use battery::BatteryBar;
pub use confetti::{Celebration, ConfettiStage, Particle};
pub use watermark::{WatermarkHandle, WatermarkMover};
