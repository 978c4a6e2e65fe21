pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::driver::sample_request;
pub use crate::core::greeter::{format_date, greet, render_greeting, Greeter};
pub use crate::domain::model::GreetingRequest;
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::{GreeterError, Result};
