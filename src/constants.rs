//! Constants used throughout the application.
//!
//! This module contains all constants used in the emodiary application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "emodiary";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A one-entry-a-day diary that tracks how your days felt";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the data directory.
pub const ENV_VAR_EMODIARY_DIR: &str = "EMODIARY_DIR";
/// Environment variable for selecting the storage backend.
pub const ENV_VAR_EMODIARY_BACKEND: &str = "EMODIARY_BACKEND";
/// Environment variable for the current user identifier.
pub const ENV_VAR_EMODIARY_USER: &str = "EMODIARY_USER";
/// Standard environment variable for the login name.
pub const ENV_VAR_USER: &str = "USER";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for diary data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/emodiary";
/// User identifier used when neither `EMODIARY_USER` nor `USER` is set.
pub const DEFAULT_USER_ID: &str = "default";
/// Maximum length of a user identifier.
pub const MAX_USER_ID_LEN: usize = 64;
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Storage
/// Namespace under which diary collections are stored.
pub const ENTRIES_NAMESPACE: &str = "entries";
/// File name of the SQLite database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "emodiary.db";
/// Sub-directory holding JSON store files for the file backend.
pub const FILE_STORE_SUBDIR: &str = "store";
/// File extension for JSON store files.
pub const FILE_STORE_EXTENSION: &str = "json";
/// Maximum number of pooled SQLite connections.
pub const DB_POOL_MAX_SIZE: u32 = 4;
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Number of months in a year.
pub const MONTHS_PER_YEAR: u32 = 12;
/// Number of days in a week.
pub const DAYS_PER_WEEK: u32 = 7;

// Statistics
/// Maximum number of emotions listed in the "top emotions" summary.
pub const MAX_DISPLAY_EMOTIONS: usize = 4;
/// Fixed divisor used for the weekly average. Every period counts as four weeks.
pub const WEEKS_PER_PERIOD: f64 = 4.0;
/// Year used when a period label cannot be parsed.
pub const DEFAULT_PERIOD_YEAR: i32 = 2025;
/// Zero-based month used when a period label cannot be parsed (June).
pub const DEFAULT_PERIOD_MONTH: u32 = 5;

// Radar Chart Geometry
/// Horizontal centre of the radar canvas.
pub const RADAR_CENTER_X: f64 = 200.0;
/// Vertical centre of the radar canvas.
pub const RADAR_CENTER_Y: f64 = 200.0;
/// Radius of the data polygon at 100%.
pub const RADAR_DATA_RADIUS: f64 = 100.0;
/// Radius of the outer grid ring and axis lines.
pub const RADAR_GRID_RADIUS: f64 = 120.0;
/// Scales of the inner grid rings.
pub const RADAR_INNER_RING_SCALES: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "emodiary";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
