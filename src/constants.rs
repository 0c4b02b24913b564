//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Hue Harmony";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "hue-harmony";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "HueHarmony";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "HUE_HARMONY_CONFIG_DIR";
