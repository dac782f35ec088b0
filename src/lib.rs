pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::buyers::{Boy, Girl};
pub use app::driver::{DemoDriver, DemoInputs};
pub use config::AppConfig;
pub use core::context::{ApplicationContext, ContextBuilder};
pub use core::proxy::BuyProxy;
pub use domain::ports::{Advice, Buy};
pub use utils::error::{AopError, Result};
