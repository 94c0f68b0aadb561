use crate::core::json_io::DEFAULT_INDENT;
use crate::core::log_appender::DEFAULT_LOG_PATH;
use crate::domain::ports::{ConfigProvider, RowPolicy};
use crate::utils::error::{FileIoError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const MAX_INDENT: usize = 16;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub converter: ConverterConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub row_policy: RowPolicy,
    pub indent: usize,
    pub compact: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            row_policy: RowPolicy::Strict,
            indent: DEFAULT_INDENT,
            compact: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub path: String,
    pub create_parent_dirs: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_LOG_PATH.to_string(),
            create_parent_dirs: false,
        }
    }
}

impl ToolConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| FileIoError::from_io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| FileIoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Load `path` when given, otherwise fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// 替換環境變數 (例如 ${LOG_DIR})，未設定的變數保持原樣
fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static regex is valid")
    });

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

impl ConfigProvider for ToolConfig {
    fn row_policy(&self) -> RowPolicy {
        self.converter.row_policy
    }

    fn json_indent(&self) -> Option<usize> {
        (!self.converter.compact).then_some(self.converter.indent)
    }

    fn log_path(&self) -> &Path {
        Path::new(&self.log.path)
    }

    fn create_parent_dirs(&self) -> bool {
        self.log.create_parent_dirs
    }
}

impl Validate for ToolConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_file_path("log.path", &self.log.path)?;
        validation::validate_range("converter.indent", self.converter.indent, 0, MAX_INDENT)?;
        Ok(())
    }
}
