use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Root folder of the browsable tree
/// Read from TREE_ROOT environment variable
/// Default: bot_structure
pub static TREE_ROOT: Lazy<String> = Lazy::new(|| env::var("TREE_ROOT").unwrap_or_else(|_| "bot_structure".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Custom Bot API server URL (local telegram-bot-api)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_API_URL").ok());

/// Texts shown to the user
pub mod ui {
    /// Prompt attached to every folder menu
    pub const MENU_PROMPT: &str = "Выберите папку:";

    /// Label of the button that goes one level up
    pub const BACK_LABEL: &str = "⬅️ Назад";

    /// Callback token of the back button
    pub const BACK_TOKEN: &str = "BACK";

    /// Sent when a folder has neither subfolders nor exactly one text file
    pub const DEAD_END_MESSAGE: &str = "Ошибка: Нет файлов для отображения!";

    /// Suffix that marks a displayable text file
    pub const TEXT_SUFFIX: &str = ".txt";

    /// Sent instead of a leaf file that has no visible text
    pub const EMPTY_FILE_MESSAGE: &str = "(файл пуст)";
}

/// Session store configuration
pub mod session {
    use once_cell::sync::Lazy;
    use std::env;
    use std::time::Duration;

    /// Maximum number of sessions kept in memory
    /// Read from SESSION_CAPACITY environment variable
    /// 0 means unbounded (plain in-memory map, lives for the process lifetime)
    pub static CAPACITY: Lazy<u64> =
        Lazy::new(|| env::var("SESSION_CAPACITY").ok().and_then(|s| s.parse().ok()).unwrap_or(0));

    /// Seconds of inactivity after which a session is forgotten
    /// Read from SESSION_IDLE_SECS environment variable
    /// 0 means never
    pub static IDLE_SECS: Lazy<u64> =
        Lazy::new(|| env::var("SESSION_IDLE_SECS").ok().and_then(|s| s.parse().ok()).unwrap_or(0));

    /// Whether the bounded (evicting) store should be used
    pub fn is_bounded() -> bool {
        *CAPACITY > 0 || *IDLE_SECS > 0
    }

    /// Idle timeout duration, if configured
    pub fn idle_timeout() -> Option<Duration> {
        match *IDLE_SECS {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Retry configuration
pub mod retry {
    use super::Duration;

    /// Maximum number of retries for dispatcher reconnection
    pub const MAX_DISPATCHER_RETRIES: u32 = 5;

    /// Delay between dispatcher retry attempts (in seconds)
    pub const DISPATCHER_RETRY_DELAY_SECS: u64 = 5;

    /// Dispatcher retry delay duration
    pub fn dispatcher_delay() -> Duration {
        Duration::from_secs(DISPATCHER_RETRY_DELAY_SECS)
    }

    /// Base for exponential backoff calculation
    pub const EXPONENTIAL_BACKOFF_BASE: u64 = 2;

    /// Maximum attempts to reach the Bot API on startup
    pub const STARTUP_MAX_RETRIES: u32 = 60;

    /// Delay between startup attempts (in seconds)
    pub const STARTUP_RETRY_DELAY_SECS: u64 = 5;

    /// Startup retry delay duration
    pub fn startup_delay() -> Duration {
        Duration::from_secs(STARTUP_RETRY_DELAY_SECS)
    }

    /// Backoff delay for the given dispatcher retry attempt
    pub fn backoff(retry_count: u32) -> Duration {
        Duration::from_secs(EXPONENTIAL_BACKOFF_BASE.saturating_pow(retry_count))
    }
}
