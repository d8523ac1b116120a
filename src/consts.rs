pub const GOOGLE_TRANSLATE_ENDPOINT: &str =
    "https://translation.googleapis.com/language/translate/v2";

/// Messages older than this are treated as duplicate webhook deliveries
/// and skipped.
pub const MESSAGE_STALENESS_WINDOW: chrono::TimeDelta = chrono::TimeDelta::seconds(3);
