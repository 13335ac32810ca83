use serde::Deserialize;

/// Root of the parsed configuration file.
#[derive(Debug, Deserialize)]
pub struct Configuration {
    pub(crate) timer: TimerContent,
    pub(crate) notification: NotificationContent,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TimerContent {
    pub(crate) minutes: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NotificationContent {
    pub(crate) summary: String,
    pub(crate) body: Option<String>,
}
