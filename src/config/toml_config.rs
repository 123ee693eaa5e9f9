use crate::utils::error::{EtlError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub stylesheet: Option<StylesheetSection>,
    pub clients: Option<ClientsSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StylesheetSection {
    pub theme_path: Option<String>,
    pub design_system_path: Option<String>,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientsSection {
    pub input_path: Option<String>,
    pub output_path: Option<String>,
    pub delimiter: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CLIENTS_EXPORT})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn stylesheet(&self) -> StylesheetSection {
        self.stylesheet.clone().unwrap_or_default()
    }

    pub fn clients(&self) -> ClientsSection {
        self.clients.clone().unwrap_or_default()
    }
}
