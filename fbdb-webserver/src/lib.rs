#[macro_use]
extern crate log;

use std::net::SocketAddr;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: fbdb_db_memory::Connections,
    address: SocketAddr,
    enable_cors: bool,
    cfg: Cfg,
    version: &'static str,
) {
    web::run(connections.into(), address, enable_cors, cfg, version).await;
}
