pub mod console;
pub mod cookie;
pub mod http;
pub mod notify;
pub mod repository;

pub use console::ConsoleDisplay;
pub use cookie::CookieTokenSource;
pub use http::HttpReportService;
pub use notify::NotifyService;
