use std::sync::Arc;

use crate::domain::outbound::{DisplayPort, RenderError};
use crate::ui::element::Element;

/// Class applied to the display's container once remaining time is low.
const WARNING_CLASS: &str = "warning";

/// A [`DisplayPort`] adapter that writes the countdown into a page element
/// and raises the warning on its container element.
pub struct ElementDisplay {
    display: Arc<dyn Element>,
    container: Arc<dyn Element>,
}

impl ElementDisplay {
    /// Creates a new [`ElementDisplay`] over the text target and its
    /// surrounding container.
    pub fn new(display: Arc<dyn Element>, container: Arc<dyn Element>) -> Self {
        Self { display, container }
    }
}

#[async_trait::async_trait]
impl DisplayPort for ElementDisplay {
    async fn render_impl(&self, text: String) -> Result<(), RenderError> {
        self.display.set_text(&text);
        Ok(())
    }

    async fn mark_warning(&self) -> Result<(), RenderError> {
        self.container.add_class(WARNING_CLASS);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::entity::RemainingTime;
    use crate::ui::element::fake::FakeElement;

    #[tokio::test]
    async fn element_display_renders_time() {
        let display = Arc::new(FakeElement::new());
        let container = Arc::new(FakeElement::new());
        let adapter = ElementDisplay::new(
            Arc::clone(&display) as Arc<dyn Element>,
            Arc::clone(&container) as Arc<dyn Element>,
        );

        adapter.render(&RemainingTime::new(125)).await.unwrap();

        assert_eq!(display.text(), Some("02:05".into()));
        assert!(!container.has_class("warning"));
    }

    #[tokio::test]
    async fn element_display_warning_is_idempotent() {
        let display = Arc::new(FakeElement::new());
        let container = Arc::new(FakeElement::new());
        let adapter = ElementDisplay::new(
            Arc::clone(&display) as Arc<dyn Element>,
            Arc::clone(&container) as Arc<dyn Element>,
        );

        adapter.mark_warning().await.unwrap();
        adapter.mark_warning().await.unwrap();

        assert!(container.has_class("warning"));
    }
}
