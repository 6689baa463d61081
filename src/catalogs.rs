use std::cmp::Reverse;
use std::time::Duration;

use anyhow::Result;
use log::warn;
use reqwest::header;
use serde_json::Value;

use crate::links::links_from_field;
use crate::models::{Candidate, CatalogSource};
use crate::score::score_title;

/// Default endpoints; overridable from the CLI for tests and mirrors.
pub const SVGL_API_URL: &str = "https://api.svgl.app";
pub const SIMPLE_ICONS_CDN_URL: &str = "https://cdn.simpleicons.org";
pub const SIMPLE_ICONS_SITE_URL: &str = "https://simpleicons.org";

pub const DEFAULT_USER_AGENT: &str = "logo-search/0.1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Fixed score for a Simple Icons hit: the CDN matches by slug only, so a
/// hit ranks below direct title matches but above the baseline.
const SIMPLE_ICONS_SCORE: u32 = 60;

/// Shared HTTP client plus the configured catalog endpoints.
pub struct CatalogClient {
    http: reqwest::Client,
    svgl_api_url: String,
    simpleicons_cdn_url: String,
}

impl CatalogClient {
    pub fn new(
        svgl_api_url: &str,
        simpleicons_cdn_url: &str,
        user_agent: &str,
        timeout_secs: u64,
    ) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, user_agent.parse()?);
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http,
            svgl_api_url: svgl_api_url.trim_end_matches('/').to_string(),
            simpleicons_cdn_url: simpleicons_cdn_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Search the SVGL catalog. Any transport or payload problem degrades to
    /// an empty result set so the report still covers the brand.
    pub async fn svgl_candidates(&self, query: &str) -> Vec<Candidate> {
        let url = format!("{}?search={}", self.svgl_api_url, urlencoding::encode(query));
        let payload = match self.fetch_json(&url).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("svgl search failed for {query:?}: {e:#}");
                return Vec::new();
            }
        };
        candidates_from_svgl_payload(&payload, query)
    }

    async fn fetch_json(&self, url: &str) -> Result<Value> {
        let payload = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(payload)
    }

    /// Probe the Simple Icons CDN for a slug derived from the query. A probe
    /// failure of any kind means no candidate from this catalog.
    pub async fn simpleicons_candidate(&self, query: &str) -> Option<Candidate> {
        let slug = slugify(query);
        if slug.is_empty() {
            return None;
        }
        let url = format!("{}/{}", self.simpleicons_cdn_url, slug);
        match self.http.head(&url).send().await {
            Ok(resp) if resp.status().is_success() => {}
            Ok(resp) => {
                warn!("simpleicons probe for {slug:?} returned {}", resp.status());
                return None;
            }
            Err(e) => {
                warn!("simpleicons probe for {slug:?} failed: {e:#}");
                return None;
            }
        }
        Some(Candidate {
            brand_query: query.to_string(),
            source: CatalogSource::SimpleIcons,
            title: query.to_string(),
            recommended: Some(url),
            fallbacks: Vec::new(),
            official_url: Some(format!(
                "{}/?q={}",
                SIMPLE_ICONS_SITE_URL,
                urlencoding::encode(query)
            )),
            brand_url: None,
            score: SIMPLE_ICONS_SCORE,
        })
    }

    /// Query both catalogs sequentially and return the ranked, truncated
    /// candidate list for the brand.
    pub async fn find_candidates(&self, query: &str, limit: usize) -> Vec<Candidate> {
        let mut candidates = self.svgl_candidates(query).await;
        if let Some(candidate) = self.simpleicons_candidate(query).await {
            candidates.push(candidate);
        }
        rank_candidates(candidates, limit)
    }
}

/// Stable sort by descending score, truncated to `limit`. Equal scores keep
/// their original relative order.
pub fn rank_candidates(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    candidates.sort_by_key(|c| Reverse(c.score));
    candidates.truncate(limit);
    candidates
}

/// Turn a raw SVGL search payload into scored candidates, best first.
/// Non-array payloads, non-object items and title-less items yield nothing.
pub fn candidates_from_svgl_payload(payload: &Value, query: &str) -> Vec<Candidate> {
    let Some(items) = payload.as_array() else {
        return Vec::new();
    };
    let mut results = Vec::new();
    for item in items {
        if !item.is_object() {
            continue;
        }
        let title = item
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim();
        if title.is_empty() {
            continue;
        }

        let mut all_links = links_from_field(item.get("route"));
        for link in links_from_field(item.get("wordmark")) {
            if !all_links.contains(&link) {
                all_links.push(link);
            }
        }
        let mut links = all_links.into_iter();
        let recommended = links.next();
        let fallbacks: Vec<String> = links.collect();

        results.push(Candidate {
            brand_query: query.to_string(),
            source: CatalogSource::Svgl,
            title: title.to_string(),
            recommended,
            fallbacks,
            official_url: item.get("url").and_then(Value::as_str).map(str::to_string),
            brand_url: item
                .get("brandUrl")
                .and_then(Value::as_str)
                .map(str::to_string),
            score: score_title(title, query),
        });
    }
    results.sort_by_key(|c| Reverse(c.score));
    results
}

/// Lowercase the query and keep only ASCII letters and digits; this is the
/// Simple Icons slug convention.
pub fn slugify(query: &str) -> String {
    query
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
