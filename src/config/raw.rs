use serde::Deserialize;
use std::net::IpAddr;

const DEFAULT_CONFIG_FILE: &str = include_str!("feedbackdb.default.toml");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub webserver: Option<WebServer>,
    pub feedback: Option<Feedback>,
}

impl Config {
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: Option<IpAddr>,
    pub port: Option<u16>,
    pub cors: Option<bool>,
    pub max_body_size: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Feedback {
    pub date_format: Option<String>,
    pub utc_offset: Option<String>,
}
