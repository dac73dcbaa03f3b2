pub const DEVICE_ID: &str = "12345";
pub const DEVICE_NAME: &str = "Sensor-X";
pub const DEVICE_TYPE: &str = "Temperature";

pub const SYSTEM_KEY: &str = "system";
pub const SYSTEM_NAME: &str = "kikku";

/// Key read back from the session metadata by the report.
/// Only `SYSTEM_KEY` is ever inserted, so this resolves to the zero value.
pub const LOOKUP_KEY: &str = "name";

pub const DEFAULT_PATHS: [&str; 2] = ["static", "hooks/script.js"];
