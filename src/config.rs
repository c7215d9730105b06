//! Application configuration baked in at build time.
//!
//! The browser build has no process environment, so values come from
//! `option_env!` at compile time:
//!
//! - `PORTAL_API_BASE`: prefix for API requests (default: same origin)
//! - `PORTAL_TOAST_AUTO_CLOSE_MS`: toast lifetime in ms (default 3000, 0 disables)
//! - `PORTAL_TOAST_POSITION`: `top-right` (default), `top-left`,
//!   `bottom-right` or `bottom-left`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TOAST_AUTO_CLOSE_MS: u32 = 3000;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: `{value}`")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl ToastPosition {
    pub fn class(self) -> &'static str {
        match self {
            Self::TopRight => "toast-container toast-container--top-right",
            Self::TopLeft => "toast-container toast-container--top-left",
            Self::BottomRight => "toast-container toast-container--bottom-right",
            Self::BottomLeft => "toast-container toast-container--bottom-left",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "top-right" => Some(Self::TopRight),
            "top-left" => Some(Self::TopLeft),
            "bottom-right" => Some(Self::BottomRight),
            "bottom-left" => Some(Self::BottomLeft),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastConfig {
    pub position: ToastPosition,
    /// Zero keeps toasts until clicked.
    pub auto_close_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { position: ToastPosition::TopRight, auto_close_ms: DEFAULT_TOAST_AUTO_CLOSE_MS }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub toast: ToastConfig,
}

impl AppConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a variable is set but unparseable.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            "PORTAL_API_BASE" => option_env!("PORTAL_API_BASE"),
            "PORTAL_TOAST_AUTO_CLOSE_MS" => option_env!("PORTAL_TOAST_AUTO_CLOSE_MS"),
            "PORTAL_TOAST_POSITION" => option_env!("PORTAL_TOAST_POSITION"),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a value is present but unparseable.
    pub fn from_lookup<'a, F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let api_base = lookup("PORTAL_API_BASE").map(|v| v.trim().trim_end_matches('/').to_owned()).unwrap_or_default();

        let auto_close_ms = match lookup("PORTAL_TOAST_AUTO_CLOSE_MS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                key: "PORTAL_TOAST_AUTO_CLOSE_MS",
                value: raw.to_owned(),
            })?,
            None => DEFAULT_TOAST_AUTO_CLOSE_MS,
        };

        let position = match lookup("PORTAL_TOAST_POSITION") {
            Some(raw) => ToastPosition::parse(raw).ok_or_else(|| ConfigError::InvalidValue {
                key: "PORTAL_TOAST_POSITION",
                value: raw.to_owned(),
            })?,
            None => ToastPosition::default(),
        };

        Ok(Self { api_base, toast: ToastConfig { position, auto_close_ms } })
    }
}
