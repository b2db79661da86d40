pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod fixtures;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::modules::{
    CustomerAIModule, EmployeeCoPilotModule, MarketPulseModule, ModuleController, PromptSource,
    SmartInventoryModule, StorePerformanceDiagnoserModule,
};
pub use app::state::ModuleState;
pub use config::{GeminiSettings, TomlConfig};
pub use core::{gemini::GeminiClient, generation::generate};
pub use utils::error::{CatalystError, Result};
