use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(version, about = "Collect and show feedback")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, short, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(long, short)]
    port: Option<u16>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(port) = args.port {
        cfg.webserver.port = port;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    let Config {
        webserver,
        feedback,
    } = cfg;
    let address = webserver.socket_addr();
    log::info!("Listening on {address}");

    let connections = fbdb_db_memory::Connections::init();
    let web_cfg = fbdb_webserver::Cfg {
        date_format: feedback.date_format,
        max_body_size: webserver.max_body_size,
    };
    fbdb_webserver::run(
        connections,
        address,
        webserver.enable_cors,
        web_cfg,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_cli_overrides() {
        let args = Args::parse_from(["feedbackdb", "--port", "9090", "--enable-cors"]);
        assert_eq!(args.port, Some(9090));
        assert!(args.enable_cors);
        assert!(args.config.is_none());
    }
}
