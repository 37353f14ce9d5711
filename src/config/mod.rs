use crate::core::{AppError, PropertySource, Result};
use serde::Deserialize;
use std::env;

use crate::modules::amounts::services::{DecimalScaler, DEFAULT_SCALE, MAX_SCALE};
use crate::modules::jurisdictions::models::UnifyMatching;
use crate::modules::jurisdictions::services::state_codes;
use crate::modules::mapping::services::DEFAULT_TRANS_TYPE;

// Integration-platform property keys, as the source documents name them
pub const PROP_USERNAME: &str = "sureTaxUsername";
pub const PROP_PASSWORD: &str = "sureTaxPassword";
pub const PROP_BASE_URL: &str = "sureTaxUrl";
pub const PROP_UNIFY_INDICATOR: &str = "exchangejcdunifyind";
pub const PROP_ENABLE_ADDRESS_VALIDATION: &str = "exchangeEnableAV";
pub const PROP_CURRENCY_DECIMALS: &str = "exchangecurrdec";

/// Main engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub engine: EngineSettings,
}

/// Credentials and endpoint consumed by the ServiceCaller implementation
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub username: String,
    pub password: String,
    pub base_url: String,
}

/// Per-document normalization settings
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Raw unify-indicator flag value carried by the document
    pub unify_indicator: String,
    pub unify_matching: UnifyMatching,
    pub enable_address_validation: bool,
    pub currency_decimals: u32,
    pub default_trans_type: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            service: ServiceConfig {
                username: env::var("SURETAX_USERNAME")
                    .map_err(|_| AppError::Configuration("SURETAX_USERNAME not set".to_string()))?,
                password: env::var("SURETAX_PASSWORD")
                    .map_err(|_| AppError::Configuration("SURETAX_PASSWORD not set".to_string()))?,
                base_url: env::var("SURETAX_BASE_URL")
                    .unwrap_or_else(|_| "https://testapi.taxrating.net".to_string()),
            },
            engine: EngineSettings {
                unify_indicator: env::var("SURETAX_UNIFY_JCD_IND").unwrap_or_default(),
                unify_matching: match env::var("SURETAX_UNIFY_MATCHING").as_deref() {
                    Ok("case_insensitive") => UnifyMatching::CaseInsensitive,
                    _ => UnifyMatching::CaseSensitive,
                },
                enable_address_validation: env::var("SURETAX_ENABLE_AV")
                    .map(|v| flag_enabled(&v))
                    .unwrap_or(false),
                currency_decimals: env::var("SURETAX_CURRENCY_DECIMALS")
                    .map(|v| DecimalScaler::parse_scale(&v))
                    .unwrap_or(DEFAULT_SCALE),
                default_trans_type: env::var("SURETAX_DEFAULT_TRANS_TYPE")
                    .unwrap_or_else(|_| DEFAULT_TRANS_TYPE.to_string()),
            },
        };

        Ok(config)
    }

    /// Resolve configuration from integration-platform properties.
    ///
    /// This is the path the orchestration layer takes: the platform's
    /// MessageContext is exposed through `PropertySource` and resolved into
    /// typed settings here, before any engine function runs.
    pub fn from_properties(props: &dyn PropertySource) -> Result<Self> {
        let require = |key: &str| {
            props
                .get_property(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::configuration(format!("property {} not set", key)))
        };

        let config = Config {
            service: ServiceConfig {
                username: require(PROP_USERNAME)?,
                password: require(PROP_PASSWORD)?,
                base_url: require(PROP_BASE_URL)?,
            },
            engine: EngineSettings {
                unify_indicator: props
                    .get_property(PROP_UNIFY_INDICATOR)
                    .unwrap_or_default(),
                unify_matching: UnifyMatching::default(),
                enable_address_validation: props
                    .get_property(PROP_ENABLE_ADDRESS_VALIDATION)
                    .map(|v| flag_enabled(&v))
                    .unwrap_or(false),
                currency_decimals: props
                    .get_property(PROP_CURRENCY_DECIMALS)
                    .map(|v| DecimalScaler::parse_scale(&v))
                    .unwrap_or(DEFAULT_SCALE),
                default_trans_type: DEFAULT_TRANS_TYPE.to_string(),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        state_codes::verify_table()?;

        if self.engine.currency_decimals > MAX_SCALE {
            return Err(AppError::Configuration(format!(
                "Currency decimal count must not exceed {}",
                MAX_SCALE
            )));
        }

        if self.engine.default_trans_type.trim().is_empty() {
            return Err(AppError::Configuration(
                "Default transaction type cannot be blank".to_string(),
            ));
        }

        Ok(())
    }
}

/// Platform flags arrive either as the literal "X" or as a boolean word
fn flag_enabled(value: &str) -> bool {
    value == "X" || value.eq_ignore_ascii_case("true")
}
