#[macro_use]
extern crate log;

use reloc_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(connections: Connections, enable_cors: bool, cfg: Cfg, version: &'static str) {
    web::run(connections.into(), enable_cors, cfg, version).await;
}
