// HTTP client utilities
use crate::domain::error::MoodError;
use reqwest::Client;
use std::time::Duration;

/// Create an HTTP client for one upstream service
pub fn create_client(timeout: Duration) -> Result<Client, MoodError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(timeout)
        .user_agent(concat!("sentimood/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
