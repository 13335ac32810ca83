//! Session logic for the quiz pages of an e-learning platform: a countdown
//! timer with a low-time warning, a throttled lecture-progress reporter, menu
//! and option-selection glue over explicit element handles, and decorative
//! visuals (watermark, battery bar, confetti).
//!
//! The [`domain`] module holds the core logic and its ports. Concrete
//! adapters (terminal display, HTTP reporting, cookie tokens, desktop
//! notifications) live in [`platform`], page-element glue in [`ui`] and
//! [`visuals`].

pub mod config;
pub mod domain;
pub mod platform;
pub mod ui;
pub mod utils;
pub mod visuals;
