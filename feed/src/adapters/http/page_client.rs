//! HTTP page fetcher
//!
//! Fetches feed pages from the site's JSON endpoints. Every feed view answers
//! `GET <path>?page=<n>&...` with `{"posts": [...], "has_next": bool}`.

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::{FeedParams, ModerationStatus, OwnedPostSummary, Page, PostSummary};
use crate::domain::ports::PageFetcher;
use crate::error::FetchError;

/// Options shared by every feed client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout: Duration,
    /// Django session id, sent as the `sessionid` cookie
    pub session: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            session: None,
        }
    }
}

/// A feed record as it appears on the wire
pub trait WireItem: Sized + Send {
    type Raw: DeserializeOwned + Send;

    fn from_wire(raw: Self::Raw) -> Self;
}

impl WireItem for PostSummary {
    type Raw = PostSummary;

    fn from_wire(raw: Self::Raw) -> Self {
        raw
    }
}

/// Owned post as serialized by the my-posts endpoint
#[derive(Debug, Deserialize)]
pub struct RawOwnedPost {
    meme_url: String,
    post_created_at: String,
    #[serde(default)]
    is_waiting_moderation: bool,
    #[serde(default)]
    is_moderating: bool,
    #[serde(default)]
    is_denied: bool,
    #[serde(default)]
    status_created_at: String,
    #[serde(default)]
    denial_reason: String,
    #[serde(default)]
    denial_details: String,
}

impl WireItem for OwnedPostSummary {
    type Raw = RawOwnedPost;

    fn from_wire(raw: Self::Raw) -> Self {
        // The flags are not exclusive on the wire; the first one set wins
        // and anything else counts as approved.
        let status = if raw.is_waiting_moderation {
            ModerationStatus::WaitingModeration
        } else if raw.is_moderating {
            ModerationStatus::Moderating {
                since: raw.status_created_at,
            }
        } else if raw.is_denied {
            ModerationStatus::Denied {
                since: raw.status_created_at,
                reason: raw.denial_reason,
                details: raw.denial_details,
            }
        } else {
            ModerationStatus::Approved {
                since: raw.status_created_at,
            }
        };

        OwnedPostSummary {
            meme_url: raw.meme_url,
            post_created_at: raw.post_created_at,
            status,
        }
    }
}

#[derive(Deserialize)]
struct Envelope<R> {
    posts: Vec<R>,
    has_next: bool,
}

/// Page fetcher for one feed endpoint
pub struct HttpPageFetcher<T> {
    http: Client,
    url: String,
    _item: PhantomData<fn() -> T>,
}

impl<T: WireItem> HttpPageFetcher<T> {
    /// Client for the feed served at `path` below `base_url`
    pub fn new(base_url: &str, path: &str, options: &ClientOptions) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        if let Some(session) = &options.session {
            let cookie = HeaderValue::from_str(&format!("sessionid={}", session))
                .map_err(|_| FetchError::Setup("session id is not a valid header value".into()))?;
            headers.insert(COOKIE, cookie);
        }

        let http = Client::builder()
            .timeout(options.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            url: format!("{}{}", base_url.trim_end_matches('/'), path),
            _item: PhantomData,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl HttpPageFetcher<PostSummary> {
    /// The home feed of approved posts
    pub fn home(base_url: &str, options: &ClientOptions) -> Result<Self, FetchError> {
        Self::new(base_url, "/", options)
    }

    /// Approved posts of one author
    pub fn author(
        base_url: &str,
        username: &str,
        options: &ClientOptions,
    ) -> Result<Self, FetchError> {
        Self::new(base_url, &format!("/author/{}/", encode(username)), options)
    }
}

impl HttpPageFetcher<OwnedPostSummary> {
    /// The signed-in user's own posts; needs a session
    pub fn my_posts(base_url: &str, options: &ClientOptions) -> Result<Self, FetchError> {
        Self::new(base_url, "/my-posts/", options)
    }
}

#[async_trait]
impl<T: WireItem> PageFetcher for HttpPageFetcher<T> {
    type Item = T;

    async fn fetch_page(&self, page: u32, params: &FeedParams) -> Result<Page<T>, FetchError> {
        tracing::debug!(url = %self.url, page, ?params, "Fetching page");

        let response = self
            .http
            .get(&self.url)
            .query(&params.query(page))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: Envelope<T::Raw> = serde_json::from_str(&body)?;

        Ok(Page {
            number: page,
            items: envelope.posts.into_iter().map(T::from_wire).collect(),
            has_next: envelope.has_next,
        })
    }
}
