use std::env;
use std::time::Duration;

use chrono::Local;

use crate::error::ConfigError;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 20;
const DEFAULT_VIEWPORT_ROWS: usize = 3;

/// Which of the site's feed views to drive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteView {
    /// Approved posts, searchable
    Home,
    /// Approved posts of one author, searchable
    Author(String),
    /// The signed-in user's own posts with moderation status
    MyPosts,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub view: SiteView,
    /// Initial search filter (home and author views)
    pub search: String,
    /// Minutes, UTC minus local time
    pub timezone: i32,
    pub timeout: Duration,
    /// How many feed entries fit on one screen of the terminal viewport
    pub viewport_rows: usize,
    /// Session cookie value for the login-protected my-posts view
    pub session: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let view = match env::var("MEMES_FEED_VIEW")
            .unwrap_or_else(|_| "home".to_string())
            .as_str()
        {
            "home" => SiteView::Home,
            "author" => SiteView::Author(
                env::var("MEMES_FEED_AUTHOR")
                    .map_err(|_| ConfigError::Missing("MEMES_FEED_AUTHOR"))?,
            ),
            "my-posts" => SiteView::MyPosts,
            other => {
                return Err(ConfigError::Invalid {
                    key: "MEMES_FEED_VIEW",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            base_url: env::var("MEMES_FEED_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            view,
            search: env::var("MEMES_FEED_SEARCH").unwrap_or_default(),
            timezone: parse_var("MEMES_FEED_TIMEZONE")?.unwrap_or_else(local_timezone_offset),
            timeout: Duration::from_secs(
                parse_var("MEMES_FEED_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            viewport_rows: parse_var("MEMES_FEED_VIEWPORT_ROWS")?
                .unwrap_or(DEFAULT_VIEWPORT_ROWS)
                .max(1),
            session: env::var("MEMES_FEED_SESSION").ok().filter(|s| !s.is_empty()),
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(None),
    }
}

/// Local offset in the sign convention the server expects: a zone east of
/// UTC yields a negative number of minutes.
pub fn local_timezone_offset() -> i32 {
    -Local::now().offset().local_minus_utc() / 60
}
