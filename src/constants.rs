//! Application-wide constants for tuning and configuration

/// Environment variable holding the API token (overrides the config file).
pub const API_TOKEN_ENV: &str = "REDRAFT_API_TOKEN";

/// Error message display duration in seconds before auto-dismiss.
pub const ERROR_TTL_SECS: u64 = 5;

/// Input poll timeout in milliseconds while idle.
pub const POLL_IDLE_MS: u64 = 150;

/// Input poll timeout in milliseconds while a generation attempt is in
/// flight. Shorter so the spinner keeps animating.
pub const POLL_LOADING_MS: u64 = 50;

/// Spinner animation frame duration in milliseconds.
pub const SPINNER_FRAME_MS: u128 = 80;

/// Lines scrolled by PageUp/PageDown in the reply and drafts panes.
pub const PAGE_SCROLL_LINES: usize = 10;
