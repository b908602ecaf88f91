use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value as Json;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://api.materialsproject.org";

/// What to ask the provider for.
#[derive(Debug, Clone)]
pub struct SummaryQuery {
    /// Every returned material must contain all of these elements.
    pub elements: Vec<String>,
    /// Top-level document fields to return.
    pub fields: Vec<String>,
}

/// A source of material summary documents, read one page at a time.
pub trait SummaryProvider {
    fn fetch_page(&mut self, query: &SummaryQuery, skip: usize, limit: usize) -> Result<Vec<Json>>;
}

/// Page through `provider` until `max_rows` documents are collected or a page
/// comes back short.
pub fn collect_documents(
    provider: &mut dyn SummaryProvider,
    query: &SummaryQuery,
    max_rows: usize,
    page_size: usize,
) -> Result<Vec<Json>> {
    if page_size == 0 {
        bail!("page size must be positive");
    }
    let mut docs = Vec::new();
    while docs.len() < max_rows {
        let limit = page_size.min(max_rows - docs.len());
        let page = provider.fetch_page(query, docs.len(), limit)?;
        let short = page.len() < limit;
        debug!(skip = docs.len(), received = page.len(), "fetched page");
        docs.extend(page);
        if short {
            break;
        }
    }
    docs.truncate(max_rows);
    Ok(docs)
}

#[derive(Debug, Deserialize)]
struct SummaryPage {
    data: Vec<Json>,
}

/// The provider's REST summary endpoint.
pub struct HttpProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl HttpProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            bail!("missing API key (pass --api-key or set MP_API_KEY)");
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("failed to build HTTP client")?;
        Ok(HttpProvider {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

impl SummaryProvider for HttpProvider {
    fn fetch_page(&mut self, query: &SummaryQuery, skip: usize, limit: usize) -> Result<Vec<Json>> {
        let url = format!("{}/materials/summary/", self.base_url);
        let params = [
            ("elements", query.elements.join(",")),
            ("_fields", query.fields.join(",")),
            ("_skip", skip.to_string()),
            ("_limit", limit.to_string()),
        ];
        let page: SummaryPage = self
            .client
            .get(&url)
            .header("X-API-KEY", &self.api_key)
            .query(&params)
            .send()
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("provider rejected request to {url}"))?
            .json()
            .context("unexpected response body")?;
        Ok(page.data)
    }
}

/// A local export: a JSON array, an object with a `data` array, or one JSON
/// document per line. Documents are assumed to be pre-filtered.
pub struct FileProvider {
    docs: Vec<Json>,
}

impl FileProvider {
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let docs = parse_export(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        info!(path = %path.display(), documents = docs.len(), "loaded export");
        Ok(FileProvider { docs })
    }

    #[cfg(test)]
    pub fn from_documents(docs: Vec<Json>) -> Self {
        FileProvider { docs }
    }
}

impl SummaryProvider for FileProvider {
    fn fetch_page(&mut self, _query: &SummaryQuery, skip: usize, limit: usize) -> Result<Vec<Json>> {
        Ok(self.docs.iter().skip(skip).take(limit).cloned().collect())
    }
}

fn parse_export(content: &str) -> Result<Vec<Json>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        if let Ok(value) = serde_json::from_str::<Json>(content) {
            return match value {
                Json::Array(docs) => Ok(docs),
                Json::Object(mut obj) => match obj.remove("data") {
                    Some(Json::Array(docs)) => Ok(docs),
                    _ => Ok(vec![Json::Object(obj)]),
                },
                _ => bail!("expected a JSON array or object"),
            };
        }
    }
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str(line).with_context(|| format!("line {}", n + 1))
        })
        .collect()
}
