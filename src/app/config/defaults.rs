// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

/// CMS base URL used when the config file does not name one.
///
/// A local Strapi development server listens here out of the box.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:1337";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_base_url_has_no_trailing_slash() {
        assert!(!DEFAULT_API_BASE_URL.ends_with('/'));
    }
}
