pub mod toml_config;

pub use toml_config::{GeminiSection, TomlConfig};

use crate::core::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::domain::ports::GenerationSettings;
use crate::utils::error::{CatalystError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_required_field, validate_url, Validate,
};
use std::fmt;

/// 依序嘗試的 API key 環境變數
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

/// Resolved settings for the generation client: defaults, then the config
/// file, then command-line flags, then the environment for a missing key.
#[derive(Clone, PartialEq)]
pub struct GeminiSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

impl fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl GenerationSettings for GeminiSettings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for GeminiSettings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("model", &self.model)?;

        let key = validate_required_field("api_key", &self.api_key)?;
        if key.trim().is_empty() {
            return Err(CatalystError::MissingConfigError {
                field: "api_key".to_string(),
            });
        }

        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, CopilotArgs, InventoryArgs};

#[cfg(feature = "cli")]
mod cli {
    use super::{api_key_from_env, GeminiSettings, TomlConfig};
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::{Args, Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "catalyst-ai")]
    #[command(about = "AI-assisted retail analytics for a specialty coffee chain")]
    pub struct CliConfig {
        #[arg(long, global = true, help = "TOML config file with a [gemini] section")]
        pub config: Option<String>,

        #[arg(long, global = true)]
        pub endpoint: Option<String>,

        #[arg(long, global = true)]
        pub model: Option<String>,

        #[arg(long, global = true, help = "Defaults to $GEMINI_API_KEY, then $API_KEY")]
        pub api_key: Option<String>,

        #[arg(long, global = true, help = "Request timeout in seconds")]
        pub timeout: Option<u64>,

        #[arg(long, global = true, help = "Print payloads as JSON")]
        pub json: bool,

        #[arg(long, global = true, default_value = "0", help = "Extra attempts after a retryable failure")]
        pub retries: u32,

        #[arg(long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Smart ordering from inventory, sales, weather and events
        Inventory(InventoryArgs),
        /// Proactive customer engagement opportunities
        Customers,
        /// Competitor, trend and strategy summary
        Market,
        /// Answer a staff question from the SOP and product guide
        Copilot(CopilotArgs),
        /// Diagnose a store performance issue
        Diagnose {
            #[arg(long, default_value = "issue1")]
            issue: String,
        },
        /// Print the sales ledger as CSV
        Ledger {
            #[arg(long, help = "Replace the ledger with N random sales")]
            generate: Option<usize>,
        },
        /// List the canned staff questions and performance issues
        Examples,
    }

    #[derive(Debug, Clone, Args)]
    pub struct InventoryArgs {
        #[arg(long = "set", value_name = "NAME=QTY")]
        pub set: Vec<String>,

        #[arg(
            long,
            value_name = "N",
            num_args = 0..=1,
            default_missing_value = DEFAULT_GENERATED_SALES_STR
        )]
        pub generate_sales: Option<usize>,
    }

    const DEFAULT_GENERATED_SALES_STR: &str = "75";

    #[derive(Debug, Clone, Args)]
    #[group(required = true, multiple = false)]
    pub struct CopilotArgs {
        #[arg(long)]
        pub query: Option<String>,

        #[arg(long, value_name = "ID")]
        pub example: Option<String>,
    }

    impl CliConfig {
        /// 合併預設值、設定檔、命令列參數與環境變數
        pub fn resolve_settings(&self) -> Result<GeminiSettings> {
            let mut settings = GeminiSettings::default();

            if let Some(path) = &self.config {
                tracing::debug!("📄 Loading config file {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file.apply_to(&mut settings);
            }

            if let Some(endpoint) = &self.endpoint {
                settings.endpoint = endpoint.clone();
            }
            if let Some(model) = &self.model {
                settings.model = model.clone();
            }
            if let Some(key) = &self.api_key {
                settings.api_key = Some(key.clone());
            }
            if let Some(timeout) = self.timeout {
                settings.timeout_seconds = Some(timeout);
            }
            if settings.api_key.is_none() {
                settings.api_key = api_key_from_env();
            }

            Ok(settings)
        }

        /// ledger 與 examples 不需要呼叫遠端服務
        pub fn needs_generator(&self) -> bool {
            !matches!(self.command, Command::Ledger { .. } | Command::Examples)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_key() -> GeminiSettings {
        GeminiSettings {
            api_key: Some("test-key".to_string()),
            ..GeminiSettings::default()
        }
    }

    #[test]
    fn test_defaults_are_valid_with_key() {
        assert!(settings_with_key().validate().is_ok());
    }

    #[test]
    fn test_missing_or_blank_key_rejected() {
        let missing = GeminiSettings::default();
        assert!(matches!(
            missing.validate(),
            Err(CatalystError::MissingConfigError { ref field }) if field == "api_key"
        ));

        let blank = GeminiSettings {
            api_key: Some("  ".to_string()),
            ..GeminiSettings::default()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut settings = settings_with_key();
        settings.endpoint = "not a url".to_string();
        assert!(settings.validate().is_err());

        let mut settings = settings_with_key();
        settings.model = String::new();
        assert!(settings.validate().is_err());

        let mut settings = settings_with_key();
        settings.timeout_seconds = Some(0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        assert!(!format!("{:?}", settings_with_key()).contains("test-key"));
    }
}
