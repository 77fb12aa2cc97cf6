//! HTTP client for the hosted content database.
//!
//! The backing store speaks a PostgREST-style REST dialect: one route per
//! table, filters in the query string, and exact row counts via the
//! `Content-Range` response header.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{header, Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::models::{ContactMessage, Experience, HeroProfile, Project, Skill, Stats};

use super::{ApiError, ContentStore};

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of retries for rate-limited (429) requests.
/// 3 retries with exponential backoff usually succeeds without excessive delay.
const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds for rate limiting.
/// 1 second is polite to the server while not making users wait too long.
const INITIAL_BACKOFF_MS: u64 = 1000;

/// API client for the content database.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Create a new API client against the given project URL.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert("apikey", header::HeaderValue::from_str(&self.api_key)?);
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    /// Returns Ok(Some(response)) for success, Ok(None) for rate limit (should retry),
    /// or Err for other errors.
    async fn check_response_for_retry(
        response: reqwest::Response,
    ) -> Result<Option<reqwest::Response>> {
        if response.status().is_success() {
            Ok(Some(response))
        } else if response.status().as_u16() == 429 {
            // Rate limited - signal to retry
            Ok(None)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    /// Issue a GET and parse the JSON body, retrying on rate limits.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            let response = self
                .client
                .get(url)
                .headers(self.auth_headers()?)
                .send()
                .await
                .with_context(|| format!("Failed to send GET request to {}", url))?;

            match Self::check_response_for_retry(response).await? {
                Some(response) => {
                    return response
                        .json()
                        .await
                        .with_context(|| format!("Failed to parse JSON response from {}", url));
                }
                None => {
                    retries += 1;
                    if retries > MAX_RATE_LIMIT_RETRIES {
                        return Err(ApiError::RateLimited.into());
                    }
                    warn!(url = url, retry = retries, backoff_ms = backoff_ms, "Rate limited, backing off");
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2; // Exponential backoff
                }
            }
        }
    }

    /// Issue a write (POST/PATCH/DELETE), retrying on rate limits.
    ///
    /// The store is asked for a minimal response; only the status matters.
    async fn mutate<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<()> {
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            let mut request = self
                .client
                .request(method.clone(), url)
                .headers(self.auth_headers()?)
                .header("Prefer", "return=minimal");
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request
                .send()
                .await
                .with_context(|| format!("Failed to send {} request to {}", method, url))?;

            match Self::check_response_for_retry(response).await? {
                Some(_) => return Ok(()),
                None => {
                    retries += 1;
                    if retries > MAX_RATE_LIMIT_RETRIES {
                        return Err(ApiError::RateLimited.into());
                    }
                    warn!(url = url, retry = retries, backoff_ms = backoff_ms, "Rate limited, backing off");
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2;
                }
            }
        }
    }

    /// Insert a new row or update the existing one, keyed on `id`.
    async fn upsert<T: Serialize + Entity>(&self, table: &str, entity: &T) -> Result<()> {
        match entity.entity_id() {
            Some(id) => {
                let url = format!("{}?id=eq.{}", self.table_url(table), id);
                self.mutate(Method::PATCH, &url, Some(entity)).await
            }
            None => {
                self.mutate(Method::POST, &self.table_url(table), Some(entity))
                    .await
            }
        }
    }

    async fn delete_row(&self, table: &str, id: &str) -> Result<()> {
        let url = format!("{}?id=eq.{}", self.table_url(table), id);
        self.mutate::<serde_json::Value>(Method::DELETE, &url, None)
            .await
    }

    /// Ask the store for the exact row count of a table without fetching rows.
    async fn count_rows(&self, table: &str) -> Result<usize> {
        let url = format!("{}?select=id", self.table_url(table));
        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .header("Prefer", "count=exact")
            .header(header::RANGE, "0-0")
            .send()
            .await
            .with_context(|| format!("Failed to count rows in {}", table))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body).into());
        }

        let content_range = response
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        parse_content_range_total(&content_range).ok_or_else(|| {
            ApiError::InvalidResponse(format!(
                "Missing row count in Content-Range for {}: {:?}",
                table, content_range
            ))
            .into()
        })
    }
}

/// Extract the total row count from a `Content-Range` value like `0-0/57`.
fn parse_content_range_total(value: &str) -> Option<usize> {
    value.rsplit('/').next()?.trim().parse().ok()
}

/// Rows addressable by the store-assigned `id` column.
trait Entity {
    fn entity_id(&self) -> Option<&str>;
}

impl Entity for HeroProfile {
    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Entity for Project {
    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Entity for Skill {
    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Entity for Experience {
    fn entity_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[async_trait]
impl ContentStore for ApiClient {
    async fn fetch_hero(&self) -> Result<Option<HeroProfile>> {
        let url = format!("{}?select=*&limit=1", self.table_url("hero"));
        let rows: Vec<HeroProfile> = self.get_json(&url).await?;
        debug!(found = !rows.is_empty(), "Hero profile fetched");
        Ok(rows.into_iter().next())
    }

    async fn save_hero(&self, hero: &HeroProfile) -> Result<()> {
        self.upsert("hero", hero).await
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let url = format!("{}?select=*&order=created_at.asc", self.table_url("projects"));
        self.get_json(&url).await
    }

    async fn save_project(&self, project: &Project) -> Result<()> {
        self.upsert("projects", project).await
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        self.delete_row("projects", id).await
    }

    async fn fetch_skills(&self) -> Result<Vec<Skill>> {
        let url = format!("{}?select=*&order=level.desc", self.table_url("skills"));
        self.get_json(&url).await
    }

    async fn save_skill(&self, skill: &Skill) -> Result<()> {
        self.upsert("skills", skill).await
    }

    async fn delete_skill(&self, id: &str) -> Result<()> {
        self.delete_row("skills", id).await
    }

    async fn fetch_experiences(&self) -> Result<Vec<Experience>> {
        let url = format!(
            "{}?select=*&order=created_at.asc",
            self.table_url("experiences")
        );
        self.get_json(&url).await
    }

    async fn save_experience(&self, experience: &Experience) -> Result<()> {
        self.upsert("experiences", experience).await
    }

    async fn delete_experience(&self, id: &str) -> Result<()> {
        self.delete_row("experiences", id).await
    }

    async fn fetch_messages(&self) -> Result<Vec<ContactMessage>> {
        let url = format!(
            "{}?select=*&order=created_at.desc",
            self.table_url("messages")
        );
        self.get_json(&url).await
    }

    async fn save_message(&self, sender: &str, email: &str, body: &str) -> Result<()> {
        // id and created_at are assigned by the store
        let row = json!({
            "sender": sender,
            "email": email,
            "message": body,
            "is_read": false,
        });
        self.mutate(Method::POST, &self.table_url("messages"), Some(&row))
            .await
    }

    async fn mark_message_read(&self, id: &str) -> Result<()> {
        let url = format!("{}?id=eq.{}", self.table_url("messages"), id);
        self.mutate(Method::PATCH, &url, Some(&json!({ "is_read": true })))
            .await
    }

    async fn delete_message(&self, id: &str) -> Result<()> {
        self.delete_row("messages", id).await
    }

    async fn fetch_stats(&self) -> Result<Stats> {
        let (messages, projects, skills, experiences) = futures::join!(
            self.count_rows("messages"),
            self.count_rows("projects"),
            self.count_rows("skills"),
            self.count_rows("experiences"),
        );

        Ok(Stats {
            messages_received: messages?,
            projects_count: projects?,
            skills_count: skills?,
            experiences_count: experiences?,
            last_sync: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
