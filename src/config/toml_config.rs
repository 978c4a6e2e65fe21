use crate::core::driver::{
    days_before, SAMPLE_AGE, SAMPLE_LOOKBACK_DAYS, SAMPLE_NAME, SAMPLE_PLACE,
};
use crate::domain::model::GreetingRequest;
use crate::domain::ports::Clock;
use crate::utils::error::{GreeterError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_AGE: i64 = 150;
pub const MAX_LOOKBACK_DAYS: u64 = 36_500;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub greeting: GreetingConfig,
}

/// Every field is optional; missing ones fall back to the sample request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreetingConfig {
    pub name: Option<String>,
    pub place: Option<String>,
    pub age: Option<i64>,
    pub from_date: Option<NaiveDate>,
    pub till_date: Option<NaiveDate>,
    pub lookback_days: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GreeterError::ConfigError {
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GreeterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GREETING_NAME})，未設定的變數保持原樣
    ///
    /// The value is pasted into the TOML text as-is, before parsing. A value
    /// containing `"` or `\` is not escaped, so inside a quoted string it
    /// either fails to parse or is read as a TOML escape sequence.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GreeterError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn lookback_days(&self) -> u64 {
        self.greeting.lookback_days.unwrap_or(SAMPLE_LOOKBACK_DAYS)
    }

    /// 以配置值建立問候請求，缺少的欄位使用範例值
    pub fn to_request(&self, clock: &impl Clock) -> Result<GreetingRequest> {
        let greeting = &self.greeting;
        let till_date = greeting.till_date.unwrap_or_else(|| clock.today());
        let from_date = match greeting.from_date {
            Some(date) => date,
            None => days_before(till_date, self.lookback_days())?,
        };

        Ok(GreetingRequest::new(
            greeting.name.as_deref().unwrap_or(SAMPLE_NAME),
            greeting.place.as_deref().unwrap_or(SAMPLE_PLACE),
            greeting.age.unwrap_or(SAMPLE_AGE),
            from_date,
            till_date,
        ))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let greeting = &self.greeting;

        if let Some(name) = &greeting.name {
            validation::validate_non_empty_string("greeting.name", name)?;
            validation::validate_single_line("greeting.name", name)?;
        }

        if let Some(place) = &greeting.place {
            validation::validate_single_line("greeting.place", place)?;
        }

        if let Some(age) = greeting.age {
            validation::validate_range("greeting.age", age, 0, MAX_AGE)?;
        }

        if let Some(days) = greeting.lookback_days {
            validation::validate_range("greeting.lookback_days", days, 0, MAX_LOOKBACK_DAYS)?;
        }

        if let (Some(from), Some(till)) = (greeting.from_date, greeting.till_date) {
            validation::validate_date_order("greeting.till_date", from, till)?;
        }

        Ok(())
    }
}
