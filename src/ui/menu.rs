use std::sync::Arc;

use crate::ui::element::Element;

/// Class carried by the toggle button while the menu is open.
const TOGGLE_ACTIVE_CLASS: &str = "is-active";
/// Class carried by the navigation links while the menu is open.
const NAV_ACTIVE_CLASS: &str = "active";

/// Where a click landed, as decided by the host's event wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The menu toggle button.
    Toggle,
    /// A link inside the navigation menu.
    MenuLink,
    /// Anywhere outside both the toggle and the menu.
    Outside,
}

/// Open/close behavior of the mobile navigation menu, driven over two
/// explicitly injected element handles.
pub struct MenuController {
    toggle: Arc<dyn Element>,
    nav: Arc<dyn Element>,
}

impl MenuController {
    /// Creates a new [`MenuController`] over the toggle button and the
    /// navigation links container.
    pub fn new(toggle: Arc<dyn Element>, nav: Arc<dyn Element>) -> Self {
        Self { toggle, nav }
    }

    /// Route one click event. The toggle flips the menu; following a link or
    /// clicking outside closes it.
    pub fn handle_click(&self, target: ClickTarget) {
        match target {
            ClickTarget::Toggle => self.flip(),
            ClickTarget::MenuLink | ClickTarget::Outside => self.close(),
        }
    }

    /// Returns `true` while the menu is open.
    pub fn is_open(&self) -> bool {
        self.nav.has_class(NAV_ACTIVE_CLASS)
    }

    fn flip(&self) {
        self.toggle.toggle_class(TOGGLE_ACTIVE_CLASS);
        self.nav.toggle_class(NAV_ACTIVE_CLASS);
    }

    fn close(&self) {
        self.toggle.remove_class(TOGGLE_ACTIVE_CLASS);
        self.nav.remove_class(NAV_ACTIVE_CLASS);
    }
}
