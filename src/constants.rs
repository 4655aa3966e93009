//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the fixed values the sample operations produce.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "cline-test";

/// Crate version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was compiled for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.cline-test.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".cline-test.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "cline-test";

/// The message returned by [`crate::sample::hello_world`].
pub const GREETING: &str = "Hello from Python Cline Test!";

/// Domain used for fabricated user email addresses.
pub const EMAIL_DOMAIN: &str = "example.com";

/// Numbers summed by the `demo` command.
pub const DEMO_NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// User looked up by the `demo` command.
pub const DEMO_USER_ID: i64 = 123;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_LOG: &str = "CLINE_TEST_LOG";
pub const ENV_FORMAT: &str = "CLINE_TEST_FORMAT";
