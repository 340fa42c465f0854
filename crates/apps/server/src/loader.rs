//! Startup dataset loading.
//!
//! Each resource has an ordered candidate list (CDN mirror first, origin
//! fallback). One GET per candidate, no retries beyond the list; the
//! first successful parse wins and every failure is logged. Running out
//! of candidates is fatal for the caller.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use areas::{Dataset, FilterOptions};
use formats::{boundaries_to_geojson_value, parse_boundaries, parse_records};
use panel::DashboardVariant;

use crate::Board;

/// Browser-like agent; GitHub raw throttles default HTTP clients hard.
const USER_AGENT: &str = "Mozilla/5.0";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub struct LoadError {
    pub resource: String,
    pub attempts: usize,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "all {} candidate URLs failed for {}",
            self.attempts, self.resource
        )
    }
}

impl std::error::Error for LoadError {}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .expect("build http client")
}

pub async fn load_board(
    client: &reqwest::Client,
    variant: &'static DashboardVariant,
) -> Result<Board, LoadError> {
    let shapes = fetch_first(
        client,
        variant.boundary_urls,
        format!("{} boundaries", variant.slug),
        |text| parse_boundaries(text).map_err(|e| e.to_string()),
    )
    .await?;

    let records = fetch_first(
        client,
        variant.table_urls,
        format!("{} table", variant.slug),
        |text| parse_records(text).map_err(|e| e.to_string()),
    )
    .await?;

    let options = FilterOptions::derive(&records, variant.secondary_filter);
    let dataset = Dataset::new(records, shapes);
    let boundaries = boundaries_to_geojson_value(dataset.shapes()).to_string();

    Ok(Board {
        variant,
        dataset: Arc::new(dataset),
        options: Arc::new(options),
        boundaries: Arc::new(boundaries),
    })
}

async fn fetch_first<T>(
    client: &reqwest::Client,
    urls: &[&str],
    resource: String,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, LoadError> {
    for url in urls {
        match fetch_text(client, url).await.and_then(|text| parse(&text)) {
            Ok(parsed) => {
                info!("loaded {resource} from {url}");
                return Ok(parsed);
            }
            Err(err) => warn!("{resource}: {url}: {err}"),
        }
    }
    Err(LoadError {
        resource,
        attempts: urls.len(),
    })
}

async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String, String> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("fetch failed: {e}"))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(format!("upstream HTTP {}", status.as_u16()));
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| format!("read failed: {e}"))?;

    String::from_utf8(bytes.to_vec()).map_err(|_| "response was not valid UTF-8".to_string())
}
