pub const APP_TITLE: &str = "VelocityNvim";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REPOSITORY_URL: &str = "https://github.com/Maik-0000FF/VelocityNvim";
pub const YOUTUBE_URL: &str = "https://www.youtube.com/@Maik-0000FF";
pub const BITCOIN_ADDRESS: &str = "bc1q6gmpgfn4wx2hx2c3njgpep9tl00etma9k7w6d4";
pub const INSTALL_ONELINER: &str =
    "bash <(curl -fsSL https://raw.githubusercontent.com/Maik-0000FF/VelocityNvim/main/install.sh)";

/// Key under which the language preference is persisted (file key and cookie name).
pub const LANGUAGE_STORAGE_KEY: &str = "velocityLang";

pub const DEFAULT_FEEDBACK_MS: u64 = 2000;
pub const MIN_FEEDBACK_MS: u64 = 100;
pub const MAX_FEEDBACK_MS: u64 = 10_000;

/// Viewport width at or below which nav-link clicks close the mobile menu.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

pub const CONFIG_FILE_NAME: &str = "velocity.toml";
pub const CONFIG_DIR_NAME: &str = ".velocity";
