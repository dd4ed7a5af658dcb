use dotenv::dotenv;
use tracing::{info, warn};

use auto_reparis::app::App;
use auto_reparis::config::{AppConfig, SubmissionConfig};
use auto_reparis::util::logger::Logger;

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment, logging included.
    let dotenv_result = dotenv();

    let app_config = AppConfig::from_env();
    let _logger = Logger::new(&app_config).expect("Failed to initialize logging");

    info!("🚀 Starting Auto Reparis quote desk");

    match dotenv_result {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    let submission_config = SubmissionConfig::from_env().expect("Submission config error");

    let app = App::new(&submission_config);
    app.run().await;
}
