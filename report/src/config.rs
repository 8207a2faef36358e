use anyhow::Result;
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, LevelFilter};
use std::env;
use std::time::Duration;

lazy_static! {
    pub static ref BACKEND_URL: String =
        env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:8000/api".to_string());
    // Channel-wide comment collection walks every video, so it can be slow
    pub static ref REQUEST_TIMEOUT_SECS: u64 = env::var("REQUEST_TIMEOUT_SECS")
        .unwrap_or_else(|_| "120".to_string())
        .parse::<u64>()
        .unwrap_or(120);
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("Starting channel report...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_http_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(*REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}
