use anyhow::{anyhow, Result};
use fbdb_entities::time::{parse_utc_offset, DateFormat};
use std::{
    env, fs,
    io::ErrorKind,
    net::{IpAddr, SocketAddr},
    path::Path,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "feedbackdb.toml";

const ENV_NAME_PORT: &str = "FEEDBACKDB_PORT";

#[derive(Debug)]
pub struct Config {
    pub webserver: WebServer,
    pub feedback: Feedback,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::try_default()?
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(port) = env::var(ENV_NAME_PORT) {
            cfg.webserver.port = port
                .parse()
                .map_err(|err| anyhow!("Invalid {ENV_NAME_PORT} '{port}': {err}"))?;
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

impl WebServer {
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

#[derive(Debug)]
pub struct Feedback {
    pub date_format: DateFormat,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            webserver,
            feedback,
        } = from;

        // Missing values are taken from the embedded defaults
        let raw::Config {
            webserver: default_webserver,
            feedback: default_feedback,
        } = raw::Config::try_default()?;
        let default_webserver = default_webserver.unwrap_or_default();

        let raw::WebServer {
            address,
            port,
            cors,
            max_body_size,
        } = webserver.unwrap_or_default();

        let webserver = WebServer {
            address: address
                .or(default_webserver.address)
                .ok_or_else(|| anyhow!("Missing webserver address"))?,
            port: port
                .or(default_webserver.port)
                .ok_or_else(|| anyhow!("Missing webserver port"))?,
            enable_cors: cors.or(default_webserver.cors).unwrap_or_default(),
            max_body_size: max_body_size
                .or(default_webserver.max_body_size)
                .ok_or_else(|| anyhow!("Missing webserver max. body size"))?,
        };

        let raw::Feedback {
            date_format,
            utc_offset,
        } = feedback.unwrap_or_default();
        let default_feedback = default_feedback.unwrap_or_default();
        let date_format = date_format.or(default_feedback.date_format);
        let utc_offset = utc_offset.or(default_feedback.utc_offset);

        let date_format = match date_format {
            Some(description) => {
                log::info!("Use date format '{description}'");
                DateFormat::parse(&description)
                    .map_err(|err| anyhow!("Invalid date format '{description}': {err}"))?
            }
            None => DateFormat::default(),
        };
        let date_format = match utc_offset {
            Some(offset) => {
                let offset = parse_utc_offset(&offset)
                    .map_err(|err| anyhow!("Invalid UTC offset '{offset}': {err}"))?;
                log::info!("Render dates with UTC offset {offset}");
                date_format.with_utc_offset(offset)
            }
            None => date_format,
        };
        let feedback = Feedback { date_format };

        Ok(Self {
            webserver,
            feedback,
        })
    }
}
