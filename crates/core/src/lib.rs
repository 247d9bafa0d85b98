//! Shared foundations for ChapaShop tools
//!
//! - **Error handling**: errors with codes, context and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//! - **Backend errors**: Supabase/PostgREST error payload shaping
//!
//! # Example
//!
//! ```rust,no_run
//! use chapashop_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("{}", config.schema.general.app_name);
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod config;
pub mod error;

pub use error::{exit_codes, Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::backend::{shape_backend_error, BackendError};
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
