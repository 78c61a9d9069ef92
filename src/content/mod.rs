// SPDX-License-Identifier: MPL-2.0
//! Content source client for the headless CMS.
//!
//! All content is fetched once at startup: the wallpaper catalog (the
//! `wallpaper` single type, one media list per device category) and the
//! shared layout content (the `global` single type: navbar links, social
//! links, logos). Wallpaper image bytes are fetched lazily afterwards, as
//! the gallery needs them.

pub mod download;
pub mod images;
pub mod types;

pub use images::ImageCache;
pub use types::{Logos, NavLink, PageContent, SiteContent, SocialLink};

use crate::error::{ContentError, Error, Result};
use iced::widget::image;

const WALLPAPERS_ENDPOINT: &str = "/api/wallpaper?populate[mobile]=*&populate[desktop]=*";
const GLOBAL_ENDPOINT: &str =
    "/api/global?populate[navbarLinks]=*&populate[socialLinks]=*&populate[logos][populate]=*";

const USER_AGENT: &str = concat!("Paperview/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to a CMS base URL.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ContentClient {
    fn default() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: String::new(),
        }
    }
}

impl ContentClient {
    /// Builds a client with an explicit redirect policy and user agent.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The CMS base URL this client was built for.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Raw HTTP client, shared with the download task.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Fetches everything the page needs: catalog + shared layout content.
    pub async fn fetch_page_content(&self) -> Result<PageContent> {
        let catalog_body = self.get_text(WALLPAPERS_ENDPOINT).await?;
        let global_body = self.get_text(GLOBAL_ENDPOINT).await?;

        Ok(PageContent {
            catalog: types::parse_catalog(&catalog_body, &self.base_url)?,
            site: types::parse_site_content(&global_body, &self.base_url)?,
        })
    }

    /// Fetches image bytes and wraps them in an iced image handle.
    ///
    /// Handles are cheap to clone; the app layer caches them per URL so each
    /// image is fetched at most once while it stays in the cache.
    pub async fn fetch_image(&self, url: &str) -> Result<image::Handle> {
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ContentError::BadStatus(response.status().as_u16()).into());
        }

        let bytes = response.bytes().await?;
        Ok(image::Handle::from_bytes(bytes))
    }

    async fn get_text(&self, endpoint: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ContentError::BadStatus(response.status().as_u16()).into());
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_maps_connection_errors_to_unreachable() {
        // Port 9 (discard) is closed on any sane test machine.
        let client = ContentClient::new("http://127.0.0.1:9").expect("client build failed");
        let err = client.fetch_page_content().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Content(ContentError::Unreachable(_))
        ));
    }

    #[test]
    fn client_strips_trailing_slash_from_base_url() {
        let client = ContentClient::new("https://cms.example/").expect("client build failed");
        assert_eq!(client.base_url(), "https://cms.example");
    }

    #[test]
    fn endpoints_populate_media_relations() {
        // The media lists are relations; without populate the CMS omits them.
        assert!(WALLPAPERS_ENDPOINT.contains("populate[mobile]"));
        assert!(WALLPAPERS_ENDPOINT.contains("populate[desktop]"));
        assert!(GLOBAL_ENDPOINT.contains("populate[logos]"));
    }
}
