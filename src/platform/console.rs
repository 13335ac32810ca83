use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use snafu::prelude::*;

use crate::domain::outbound::{DisplayPort, RenderError};

/// ANSI styling for the countdown once remaining time is low.
const WARNING_STYLE: &str = "\x1b[1;31m";
const RESET_STYLE: &str = "\x1b[0m";

/// A [`DisplayPort`] adapter that rewrites one terminal line per tick.
///
/// The warning marker is sticky: once raised, every subsequent render is
/// styled, mirroring a page container that keeps its warning class.
pub struct ConsoleDisplay {
    warning: AtomicBool,
}

impl ConsoleDisplay {
    /// Creates a new [`ConsoleDisplay`].
    pub fn new() -> Self {
        Self {
            warning: AtomicBool::new(false),
        }
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DisplayPort for ConsoleDisplay {
    async fn render_impl(&self, text: String) -> Result<(), RenderError> {
        let mut stdout = std::io::stdout().lock();

        let res = if self.warning.load(Ordering::Relaxed) {
            write!(stdout, "\r{WARNING_STYLE}{text}{RESET_STYLE}")
        } else {
            write!(stdout, "\r{text}")
        };

        let _ = whatever!(res, "Could not write to the terminal");
        let _ = whatever!(stdout.flush(), "Could not flush the terminal");

        Ok(())
    }

    async fn mark_warning(&self) -> Result<(), RenderError> {
        self.warning.store(true, Ordering::Relaxed);
        Ok(())
    }
}
