// SPDX-License-Identifier: MPL-2.0
//! Streaming download of a wallpaper to disk.

use crate::catalog::Wallpaper;
use crate::error::{ContentError, Error, Result};
use std::path::Path;

/// Downloads the wallpaper at `url` to `destination`, streaming chunks to
/// disk as they arrive.
///
/// The parent directory is created if missing. On any failure after the file
/// was created, the partial file is removed so a broken image never stays
/// behind. Returns the number of bytes written.
pub async fn download_wallpaper(
    client: &reqwest::Client,
    url: &str,
    destination: &Path,
) -> Result<u64> {
    use futures_util::StreamExt;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(ContentError::BadStatus(response.status().as_u16()).into());
    }

    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::Io(e.to_string()))?;
    }

    let mut file = std::fs::File::create(destination).map_err(|e| Error::Io(e.to_string()))?;

    let mut written: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                let _ = std::fs::remove_file(destination);
                return Err(e.into());
            }
        };
        if let Err(e) = std::io::Write::write_all(&mut file, &chunk) {
            let _ = std::fs::remove_file(destination);
            return Err(Error::Io(e.to_string()));
        }
        written += chunk.len() as u64;
    }

    Ok(written)
}

/// Derives the filename offered in the save dialog.
///
/// Prefers the last path segment of the image URL (it carries the real
/// extension); falls back to the wallpaper name with a `.jpg` extension.
pub fn suggested_filename(wallpaper: &Wallpaper) -> String {
    let from_url = wallpaper
        .image_url
        .split('/')
        .next_back()
        .map(|segment| segment.split('?').next().unwrap_or(segment))
        .filter(|segment| !segment.is_empty() && segment.contains('.'));

    match from_url {
        Some(name) => name.to_string(),
        None => format!("{}.jpg", sanitize(&wallpaper.name)),
    }
}

fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "wallpaper".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Wallpaper, WallpaperId};

    fn wallpaper(url: &str, name: &str) -> Wallpaper {
        Wallpaper {
            id: WallpaperId(1),
            name: name.to_string(),
            image_url: url.to_string(),
        }
    }

    #[test]
    fn filename_comes_from_url_segment() {
        let w = wallpaper("https://cms.example/uploads/dunes_4k.jpg", "Dunes");
        assert_eq!(suggested_filename(&w), "dunes_4k.jpg");
    }

    #[test]
    fn filename_strips_query_string() {
        let w = wallpaper("https://cdn.example/tide.png?width=3840", "Tide");
        assert_eq!(suggested_filename(&w), "tide.png");
    }

    #[test]
    fn filename_falls_back_to_sanitized_name() {
        let w = wallpaper("https://cms.example/uploads/", "Night / Sky");
        assert_eq!(suggested_filename(&w), "Night___Sky.jpg");
    }

    #[test]
    fn filename_falls_back_when_segment_has_no_extension() {
        let w = wallpaper("https://cms.example/uploads/dunes", "Dunes");
        assert_eq!(suggested_filename(&w), "Dunes.jpg");
    }

    #[test]
    fn empty_name_still_produces_a_filename() {
        let w = wallpaper("https://cms.example/x/", "");
        assert_eq!(suggested_filename(&w), "wallpaper.jpg");
    }

}
