use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Parser;

mod config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Community & payments REST backend",
    long_about = "REST backend for community posts, nested comments and media uploads, \
                  backed by an embedded SQLite database."
)]
struct CmdArgs {
    /// Path to a TOML configuration file.
    #[arg(long, env = "RELOC_CONFIG")]
    config: Option<PathBuf>,

    /// Don't run embedded database migrations at startup.
    #[arg(long, default_value_t = false)]
    skip_migrations: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = CmdArgs::parse();
    let cfg = config::load(args.config.as_deref())?;

    if !cfg.uploads_dir.exists() {
        fs::create_dir_all(&cfg.uploads_dir)?;
        log::info!("Created uploads directory {}", cfg.uploads_dir.display());
    }

    log::info!("Opening database {}", cfg.database_url);
    let connections =
        reloc_db_sqlite::Connections::init(&cfg.database_url, cfg.database_pool_size)?;
    if !args.skip_migrations {
        reloc_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);
    }

    let web_cfg = reloc_webserver::Cfg {
        uploads_dir: cfg.uploads_dir,
        allowed_origins: cfg.allowed_origins,
    };
    reloc_webserver::run(connections, cfg.enable_cors, web_cfg, VERSION).await;
    Ok(())
}
