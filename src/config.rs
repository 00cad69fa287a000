//! Configuration management for the contact book.
//!
//! All settings are optional and come from environment variables, with a `.env`
//! file loaded first if present. Nothing here is printed to stdout, which
//! belongs to the menu.

use crate::error::ConfigResult;
use crate::presentation::TableStyle;
use std::env;

/// Configuration for the contact book binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Layout of contact tables (default: pretty)
    pub table_style: TableStyle,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging filter (default: "error")
    /// - `CONTACT_BOOK_TABLE_STYLE`: `pretty` or `github` (default: "pretty")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout; a missing file is fine
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let table_style = match env::var("CONTACT_BOOK_TABLE_STYLE") {
            Ok(val) => val.parse::<TableStyle>()?,
            Err(_) => TableStyle::default(),
        };

        Ok(Config {
            log_level,
            table_style,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            table_style: TableStyle::Pretty,
        }
    }
}
