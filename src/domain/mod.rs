pub mod entity;
pub mod outbound;
pub mod progress;
pub mod repository;
pub mod timer;
