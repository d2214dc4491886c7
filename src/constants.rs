//! Application constants and configuration

pub const APP_NAME: &str = "Topic Rating";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Topics offered for rating, in display order
pub const TOPICS: [&str; 9] = [
    "Technology",
    "Space",
    "AI",
    "Sustainability",
    "UNSDG",
    "Geopolitics",
    "Science",
    "Business",
    "Entrepreneurship",
];

/// Slider bounds (step is always 1)
pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 10;

/// Shown for topics the user has not moved yet
pub const RATING_DEFAULT: u8 = 1;

/// Normalized weight above which a topic gets the broad focus description
pub const HIGH_FOCUS_THRESHOLD: f64 = 0.7;

/// Used by the summary prompt when no location is given
pub const DEFAULT_LOCATION: &str = "India";
