use std::{path::PathBuf, time::Instant};

use rocket::{config::Config as RocketCfg, fs::FileServer, Rocket, Route};

pub mod api;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub uploads_dir: PathBuf,
    pub allowed_origins: Vec<String>,
}

// Process start time used by the health endpoint.
pub(crate) struct StartTime(pub Instant);

pub(crate) struct Version(pub &'static str);

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let uploads_dir = cfg.uploads_dir.clone();
    let mut instance = r
        .manage(db)
        .manage(cfg)
        .manage(StartTime(Instant::now()))
        .manage(Version(version));

    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance.mount("/uploads", FileServer::from(uploads_dir))
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::root_routes()), ("/api", api::routes())]
}

fn cors_options(allowed_origins: &[String]) -> rocket_cors::CorsOptions {
    if allowed_origins.is_empty() {
        rocket_cors::CorsOptions::default()
    } else {
        rocket_cors::CorsOptions {
            allowed_origins: rocket_cors::AllowedOrigins::some_exact(allowed_origins),
            ..Default::default()
        }
    }
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg, version: &'static str) {
    let allowed_origins = cfg.allowed_origins.clone();
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };

    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        let cors = cors_options(&allowed_origins).to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
