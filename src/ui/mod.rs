pub mod display;
pub mod element;
pub mod menu;
pub mod options;

pub use display::ElementDisplay;
pub use element::Element;
pub use menu::{ClickTarget, MenuController};
pub use options::{OptionGroup, QuizOption};
