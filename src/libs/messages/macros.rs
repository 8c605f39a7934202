//! Convenient macros for application messaging and logging.
//!
//! The macros route every [`Message`](crate::libs::messages::Message) either
//! to `tracing` (debug mode) or to stderr (normal mode). Stdout is never
//! written to, since the `serve` command owns it for bridge responses.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when `SCHEJZUREN_DEBUG` or `RUST_LOG` is set. The check
//! is cached on first use.
//!
//! ## Macro Categories
//!
//! - **`msg_success!`** / **`msg_info!`** / **`msg_warning!`**
//! - **`msg_error!`**
//! - **`msg_debug!`**: silent outside debug mode
//! - **`msg_error_anyhow!`** / **`msg_bail_anyhow!`**: build `anyhow` errors
//!
//! ```rust
//! use schejzuren::libs::messages::Message;
//! use schejzuren::{msg_debug, msg_warning};
//!
//! msg_debug!(Message::QueryCompiled(3));
//! msg_warning!(Message::UnknownSortField("todos".into(), "nope".into()));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether debug output is enabled, cached for the life of the process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("SCHEJZUREN_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            eprintln!("✅ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            eprintln!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            eprintln!("ℹ️ {}", $msg);
        }
    };
}

/// Debug-only message; compiled in, but silent unless debug mode is on.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
