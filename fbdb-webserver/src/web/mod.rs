use std::net::SocketAddr;

use rocket::{
    config::Config as RocketCfg,
    data::{Limits, ToByteUnit},
    Rocket, Route,
};

use crate::core::prelude::*;

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;
mod memory;

#[cfg(test)]
pub mod tests;

pub const DEFAULT_MAX_BODY_SIZE: u64 = 8 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub date_format: DateFormat,
    /// Limit for form and JSON request bodies in bytes.
    pub max_body_size: u64,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            date_format: DateFormat::default(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

// Comments are not limited, so the request bodies
// carrying them get a configurable limit.
fn body_limits(max_body_size: u64) -> Limits {
    Limits::default()
        .limit("form", max_body_size.bytes())
        .limit("json", max_body_size.bytes())
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    connections: memory::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    info!("Accept request bodies up to {} bytes", cfg.max_body_size);
    match connections.shared().count_feedback() {
        Ok(count) => info!("Serving {count} feedback records"),
        Err(err) => warn!("Unable to count feedback records: {err}"),
    }

    info!("Initialization finished");

    let limits = body_limits(cfg.max_body_size);
    let r = match rocket_cfg {
        Some(rocket_cfg) => rocket::custom(RocketCfg {
            limits,
            ..rocket_cfg
        }),
        None => rocket::custom(RocketCfg::figment().merge(("limits", limits))),
    };

    let version = guards::Version(version);

    let mut instance = r.manage(connections).manage(cfg).manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub async fn run(
    connections: memory::Connections,
    address: SocketAddr,
    enable_cors: bool,
    cfg: Cfg,
    version: &'static str,
) {
    let rocket_cfg = RocketCfg {
        address: address.ip(),
        port: address.port(),
        ..RocketCfg::default()
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        cfg,
        version,
    };

    let instance = rocket_instance(options, connections);
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                log::error!("Invalid CORS configuration: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
