pub mod display;
pub mod duration;
pub mod notification;
pub mod progress;

pub use display::RemainingTime;
pub use duration::QuizDuration;
pub use notification::CompletionMessage;
pub use progress::ProgressPercent;
