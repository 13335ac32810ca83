mod tracing;
pub mod xdg;
