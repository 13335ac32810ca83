use std::sync::Arc;

use crate::domain::entity::ProgressPercent;
use crate::ui::element::Element;

/// Below this level the bar turns the danger color.
const DANGER_BELOW: u8 = 30;
/// Below this level (and at or above [`DANGER_BELOW`]) the bar turns the
/// warning color.
const WARNING_BELOW: u8 = 60;

/// The dashboard battery bar: width follows the level, color degrades as it
/// drains.
pub struct BatteryBar {
    bar: Arc<dyn Element>,
}

impl BatteryBar {
    /// Creates a new [`BatteryBar`] over the bar's fill element.
    pub fn new(bar: Arc<dyn Element>) -> Self {
        Self { bar }
    }

    /// Render the level. The theme's default background is kept for healthy
    /// levels.
    pub fn render(&self, level: ProgressPercent) {
        self.bar
            .set_style("width", &format!("{}%", level.value()));

        if level.value() < DANGER_BELOW {
            self.bar.set_style("background", "var(--danger)");
        } else if level.value() < WARNING_BELOW {
            self.bar.set_style("background", "var(--warning)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ui::element::fake::FakeElement;

    fn render_level(level: u8) -> Arc<FakeElement> {
        let element = Arc::new(FakeElement::new());
        let bar = BatteryBar::new(Arc::clone(&element) as Arc<dyn Element>);
        bar.render(ProgressPercent::try_new(level).unwrap());
        element
    }

    #[test]
    fn low_level_turns_danger() {
        let element = render_level(20);
        assert_eq!(element.style("width"), Some("20%".into()));
        assert_eq!(element.style("background"), Some("var(--danger)".into()));
    }

    #[test]
    fn middling_level_turns_warning() {
        let element = render_level(45);
        assert_eq!(element.style("width"), Some("45%".into()));
        assert_eq!(element.style("background"), Some("var(--warning)".into()));
    }

    #[test]
    fn healthy_level_keeps_theme_background() {
        let element = render_level(80);
        assert_eq!(element.style("width"), Some("80%".into()));
        assert_eq!(element.style("background"), None);
    }
}
