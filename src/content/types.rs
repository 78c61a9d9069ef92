// SPDX-License-Identifier: MPL-2.0
//! Content types delivered by the CMS, and the raw Strapi envelope they
//! arrive in.
//!
//! The CMS nests every document in `data`/`attributes` layers and media
//! relations one level deeper (`field.data[].attributes`). The raw structs
//! below mirror that envelope exactly; the public types are the flattened
//! view the rest of the application consumes.

use crate::catalog::{Wallpaper, WallpaperCatalog, WallpaperId};
use crate::error::{ContentError, Result};
use serde::Deserialize;

/// A navigation entry in the site header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub url: String,
}

/// A social profile link shown in the site header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Logo image URLs used across the layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Logos {
    /// Full wordmark, black variant (header on light background).
    pub full_black: Option<String>,
    /// Icon-only mark, white variant (overlaid on the mobile mockup).
    pub logo_only_white: Option<String>,
}

/// Shared layout content passed down to the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteContent {
    pub navbar_links: Vec<NavLink>,
    pub social_links: Vec<SocialLink>,
    pub logos: Logos,
}

/// Everything the page needs, fetched once before the UI is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    pub site: SiteContent,
    pub catalog: WallpaperCatalog,
}

// ---------------------------------------------------------------------------
// Raw Strapi envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Document<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct Entry<T> {
    id: u64,
    attributes: T,
}

#[derive(Debug, Deserialize)]
struct MediaRelation {
    #[serde(default)]
    data: Vec<Entry<MediaAttributes>>,
}

#[derive(Debug, Deserialize)]
struct SingleMediaRelation {
    data: Option<Entry<MediaAttributes>>,
}

#[derive(Debug, Deserialize)]
struct MediaAttributes {
    #[serde(default)]
    name: String,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WallpapersAttributes {
    #[serde(default = "empty_relation")]
    mobile: MediaRelation,
    #[serde(default = "empty_relation")]
    desktop: MediaRelation,
}

fn empty_relation() -> MediaRelation {
    MediaRelation { data: Vec::new() }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GlobalAttributes {
    #[serde(default)]
    navbar_links: Vec<NavLink>,
    #[serde(default)]
    social_links: Vec<SocialLink>,
    logos: Option<LogosAttributes>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogosAttributes {
    full_black: Option<SingleMediaRelation>,
    logo_only_white: Option<SingleMediaRelation>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses the wallpapers single-type payload into a catalog, resolving media
/// URLs against `base_url` (the CMS serves uploads host-relative).
pub fn parse_catalog(body: &str, base_url: &str) -> Result<WallpaperCatalog> {
    let document: Document<Entry<WallpapersAttributes>> = serde_json::from_str(body)?;
    let attributes = document.data.attributes;

    Ok(WallpaperCatalog {
        mobile: into_wallpapers(attributes.mobile, base_url)?,
        desktop: into_wallpapers(attributes.desktop, base_url)?,
    })
}

/// Parses the global single-type payload into the shared layout content.
pub fn parse_site_content(body: &str, base_url: &str) -> Result<SiteContent> {
    let document: Document<Entry<GlobalAttributes>> = serde_json::from_str(body)?;
    let attributes = document.data.attributes;

    let logos = match attributes.logos {
        Some(raw) => Logos {
            full_black: single_media_url(raw.full_black, base_url),
            logo_only_white: single_media_url(raw.logo_only_white, base_url),
        },
        None => Logos::default(),
    };

    Ok(SiteContent {
        navbar_links: attributes.navbar_links,
        social_links: attributes.social_links,
        logos,
    })
}

fn into_wallpapers(relation: MediaRelation, base_url: &str) -> Result<Vec<Wallpaper>> {
    relation
        .data
        .into_iter()
        .map(|entry| {
            let url = entry
                .attributes
                .url
                .ok_or_else(|| ContentError::MissingImageUrl(entry.attributes.name.clone()))?;
            Ok(Wallpaper {
                id: WallpaperId(entry.id),
                name: entry.attributes.name,
                image_url: resolve_url(base_url, &url),
            })
        })
        .collect()
}

fn single_media_url(relation: Option<SingleMediaRelation>, base_url: &str) -> Option<String> {
    let entry = relation?.data?;
    entry.attributes.url.map(|url| resolve_url(base_url, &url))
}

/// Resolves a possibly host-relative media URL against the API base URL.
pub fn resolve_url(base_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            url.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DeviceCategory;
    use crate::error::{ContentError, Error};

    const BASE: &str = "https://cms.example";

    fn wallpapers_body() -> &'static str {
        r#"{
            "data": {
                "id": 1,
                "attributes": {
                    "mobile": {
                        "data": [
                            { "id": 7, "attributes": { "name": "dunes", "url": "/uploads/dunes.jpg" } },
                            { "id": 8, "attributes": { "name": "tide", "url": "https://cdn.example/tide.jpg" } }
                        ]
                    },
                    "desktop": { "data": [] }
                }
            }
        }"#
    }

    #[test]
    fn parse_catalog_reads_both_sequences() {
        let catalog = parse_catalog(wallpapers_body(), BASE).expect("parse failed");

        assert_eq!(catalog.mobile.len(), 2);
        assert!(catalog.sequence(DeviceCategory::Desktop).is_empty());
        assert_eq!(catalog.mobile[0].id, WallpaperId(7));
        assert_eq!(catalog.mobile[0].name, "dunes");
    }

    #[test]
    fn parse_catalog_resolves_relative_urls_only() {
        let catalog = parse_catalog(wallpapers_body(), BASE).expect("parse failed");

        assert_eq!(
            catalog.mobile[0].image_url,
            "https://cms.example/uploads/dunes.jpg"
        );
        // Absolute URLs pass through untouched.
        assert_eq!(catalog.mobile[1].image_url, "https://cdn.example/tide.jpg");
    }

    #[test]
    fn parse_catalog_preserves_sequence_order() {
        let catalog = parse_catalog(wallpapers_body(), BASE).expect("parse failed");
        let ids: Vec<u64> = catalog.mobile.iter().map(|w| w.id.0).collect();
        assert_eq!(ids, vec![7, 8]);
    }

    #[test]
    fn parse_catalog_rejects_entry_without_url() {
        let body = r#"{
            "data": {
                "id": 1,
                "attributes": {
                    "mobile": { "data": [ { "id": 7, "attributes": { "name": "dunes", "url": null } } ] },
                    "desktop": { "data": [] }
                }
            }
        }"#;

        let err = parse_catalog(body, BASE).unwrap_err();
        assert!(matches!(
            err,
            Error::Content(ContentError::MissingImageUrl(name)) if name == "dunes"
        ));
    }

    #[test]
    fn parse_catalog_rejects_broken_envelope() {
        let err = parse_catalog(r#"{ "data": null }"#, BASE).unwrap_err();
        assert!(matches!(
            err,
            Error::Content(ContentError::MalformedPayload(_))
        ));
    }

    #[test]
    fn parse_site_content_reads_links_and_logos() {
        let body = r#"{
            "data": {
                "id": 1,
                "attributes": {
                    "navbarLinks": [
                        { "label": "Home", "url": "https://site.example/" },
                        { "label": "Wallpapers", "url": "https://site.example/wallpapers" }
                    ],
                    "socialLinks": [
                        { "name": "Mastodon", "url": "https://social.example/@site" }
                    ],
                    "logos": {
                        "fullBlack": { "data": { "id": 2, "attributes": { "name": "logo", "url": "/uploads/logo_black.png" } } },
                        "logoOnlyWhite": { "data": null }
                    }
                }
            }
        }"#;

        let site = parse_site_content(body, BASE).expect("parse failed");
        assert_eq!(site.navbar_links.len(), 2);
        assert_eq!(site.navbar_links[1].label, "Wallpapers");
        assert_eq!(site.social_links[0].name, "Mastodon");
        assert_eq!(
            site.logos.full_black.as_deref(),
            Some("https://cms.example/uploads/logo_black.png")
        );
        assert!(site.logos.logo_only_white.is_none());
    }

    #[test]
    fn parse_site_content_tolerates_missing_sections() {
        let body = r#"{ "data": { "id": 1, "attributes": {} } }"#;
        let site = parse_site_content(body, BASE).expect("parse failed");
        assert!(site.navbar_links.is_empty());
        assert!(site.social_links.is_empty());
        assert!(site.logos.full_black.is_none());
    }

    #[test]
    fn resolve_url_joins_without_doubled_slash() {
        assert_eq!(
            resolve_url("https://cms.example/", "/uploads/a.jpg"),
            "https://cms.example/uploads/a.jpg"
        );
        assert_eq!(
            resolve_url("https://cms.example", "uploads/a.jpg"),
            "https://cms.example/uploads/a.jpg"
        );
    }
}
