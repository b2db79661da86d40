use crate::config::GeminiSettings;
use crate::utils::error::{CatalystError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub gemini: GeminiSection,
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct GeminiSection {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl fmt::Debug for GeminiSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiSection")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalystError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalystError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GEMINI_API_KEY})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalystError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 檔案中的 API key；沒被替換掉的 `${VAR}` 視為未設定
    pub fn api_key(&self) -> Option<&str> {
        match self.gemini.api_key.as_deref() {
            Some(key) if key.starts_with("${") => {
                tracing::warn!("⚠️ api_key placeholder {} was not resolved from the environment", key);
                None
            }
            other => other,
        }
    }

    /// 把檔案中有設定的欄位覆蓋到 settings 上
    pub fn apply_to(&self, settings: &mut GeminiSettings) {
        if let Some(endpoint) = &self.gemini.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.gemini.model {
            settings.model = model.clone();
        }
        if let Some(key) = self.api_key() {
            settings.api_key = Some(key.to_string());
        }
        if let Some(timeout) = self.gemini.timeout_seconds {
            settings.timeout_seconds = Some(timeout);
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.gemini.endpoint {
            validate_url("gemini.endpoint", endpoint)?;
        }
        if let Some(model) = &self.gemini.model {
            validate_non_empty_string("gemini.model", model)?;
        }
        if let Some(timeout) = self.gemini.timeout_seconds {
            validate_positive_number("gemini.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
