use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Settings for the outbound WhatsApp gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct WhatsAppConfig {
    /// Gateway credential. Its absence is detected at dispatch time and
    /// reported as a configuration failure, never as a panic.
    pub api_key: Option<String>,
    /// Full URL of the gateway send endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Optional origin number, included in the payload only when set.
    pub from_number: Option<String>,
    /// When enabled, every dispatch is redirected to `test_number`.
    #[serde(default)]
    pub test_mode: bool,
    /// Destination override used in test mode.
    #[serde(default = "default_test_number")]
    pub test_number: String,
    /// Gateway request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

fn default_api_url() -> String {
    "https://901.factura.com.bo/as/whatsapp/send".to_string()
}

fn default_test_number() -> String {
    "+59179397462".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8081)?
            .set_default("whatsapp.api_url", default_api_url())?
            .set_default("whatsapp.test_number", default_test_number())?
            .set_default("whatsapp.timeout_seconds", 10)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // SERVER__HOST, SERVER__PORT, WHATSAPP__API_KEY, WHATSAPP__FROM_NUMBER,
            // WHATSAPP__TEST_MODE, etc.
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(","),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            from_number: None,
            test_mode: false,
            test_number: default_test_number(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
