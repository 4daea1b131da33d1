use super::*;
use crate::web::{StartTime, Version};
use reloc_core::{entities::Timestamp, repositories::PostRepository as _};

#[get("/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}

#[get("/")]
pub fn get_index(version: &State<Version>) -> Json<json::ApiOverview> {
    Json(json::ApiOverview {
        message: "Reloc Community & Payments API is running".into(),
        version: version.0.to_string(),
    })
}

#[get("/health")]
pub fn get_health(start_time: &State<StartTime>) -> Json<json::HealthStatus> {
    Json(json::HealthStatus {
        status: "OK".into(),
        timestamp: Timestamp::now().as_millis(),
        uptime_secs: start_time.0.elapsed().as_secs(),
    })
}

#[get("/db-test")]
pub fn get_db_test(db: sqlite::Connections) -> Json<json::DbTestResult> {
    let connected = db
        .shared()
        .map(|conn| conn.all_posts().is_ok())
        .unwrap_or(false);
    Json(json::DbTestResult { connected })
}
