/// A handle to one page element.
///
/// Controllers never discover elements themselves; the host passes handles
/// in explicitly at setup, so all coupling to the page structure stays on
/// the host's side of this trait.
pub trait Element: Send + Sync + 'static {
    /// Replace the element's text content.
    fn set_text(&self, text: &str);

    /// Add a class to the element. Adding a present class is a no-op.
    fn add_class(&self, class: &str);

    /// Remove a class from the element. Removing an absent class is a no-op.
    fn remove_class(&self, class: &str);

    /// Returns `true` if the element currently carries the class.
    fn has_class(&self, class: &str) -> bool;

    /// Set one inline style property.
    fn set_style(&self, property: &str, value: &str);

    /// Set the checked state of an input element. Meaningless for other
    /// elements.
    fn set_checked(&self, checked: bool);

    /// Add the class if absent, remove it otherwise.
    fn toggle_class(&self, class: &str) {
        if self.has_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeElement;
    use super::*;

    #[test]
    fn toggle_class_flips_presence() {
        let element = FakeElement::new();
        element.toggle_class("active");
        assert!(element.has_class("active"));
        element.toggle_class("active");
        assert!(!element.has_class("active"));
    }
}
