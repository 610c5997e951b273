//! Provider constants for the supported video hosts
//!
//! Everything a placeholder needs to know about its host is a fixed string:
//! the CSS class contract, the embed base URL, the iframe `allow` policy, and
//! the preconnect origin list. There is exactly one implementation per
//! provider, so these are plain const accessors rather than a trait.

/// Video host a placeholder element embeds from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    YouTube,
    Vimeo,
}

impl Provider {
    /// CSS class the component binds to
    pub const fn class_name(self) -> &'static str {
        match self {
            Provider::YouTube => "n-ham-c-lite-yt",
            Provider::Vimeo => "n-ham-c-lite-vi",
        }
    }

    /// Selector matching placeholder container elements
    pub fn selector(self) -> String {
        format!(".{}", self.class_name())
    }

    /// Selector matching the interaction anchor inside a placeholder
    pub fn anchor_selector(self) -> String {
        format!(".{}__link", self.class_name())
    }

    /// Class added to the container once the real iframe is in place
    pub fn activated_class(self) -> String {
        format!("{}--activated", self.class_name())
    }

    /// Base URL the iframe `src` is built from
    pub const fn embed_base(self) -> &'static str {
        match self {
            Provider::YouTube => "https://www.youtube-nocookie.com/embed/",
            Provider::Vimeo => "https://player.vimeo.com/video/",
        }
    }

    /// Value for the iframe `allow` attribute
    pub const fn allow_attribute(self) -> &'static str {
        match self {
            Provider::YouTube => "autoplay; encrypted-media; picture-in-picture",
            Provider::Vimeo => "autoplay; picture-in-picture",
        }
    }

    /// Origins in the critical path of the eventual iframe load
    ///
    /// The embed's network requests happen inside its iframe, so preloading
    /// them from outside would only cause double-downloads. Warming the
    /// connections to these origins is the best available option.
    pub const fn preconnect_origins(self) -> &'static [&'static str] {
        match self {
            Provider::YouTube => &[
                // The iframe document and most of its subresources
                "https://www.youtube-nocookie.com",
                // The botguard script comes off google.com
                "https://www.google.com",
            ],
            Provider::Vimeo => &[
                // The iframe document and most of its subresources
                "https://player.vimeo.com",
                // Images
                "https://i.vimeocdn.com",
                // Files .js, .css
                "https://f.vimeocdn.com",
                // Metrics
                "https://fresnel.vimeocdn.com",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_contract() {
        assert_eq!(Provider::YouTube.class_name(), "n-ham-c-lite-yt");
        assert_eq!(Provider::YouTube.selector(), ".n-ham-c-lite-yt");
        assert_eq!(
            Provider::YouTube.anchor_selector(),
            ".n-ham-c-lite-yt__link"
        );
        assert_eq!(
            Provider::YouTube.activated_class(),
            "n-ham-c-lite-yt--activated"
        );
    }

    #[test]
    fn test_vimeo_class_contract() {
        assert_eq!(Provider::Vimeo.class_name(), "n-ham-c-lite-vi");
        assert_eq!(Provider::Vimeo.anchor_selector(), ".n-ham-c-lite-vi__link");
    }

    #[test]
    fn test_preconnect_origins() {
        let yt = Provider::YouTube.preconnect_origins();
        assert_eq!(yt.len(), 2);
        assert!(yt.contains(&"https://www.youtube-nocookie.com"));
        assert!(yt.contains(&"https://www.google.com"));

        let vi = Provider::Vimeo.preconnect_origins();
        assert_eq!(vi.len(), 4);
        assert!(vi.contains(&"https://player.vimeo.com"));
        assert!(vi.contains(&"https://fresnel.vimeocdn.com"));
    }

    #[test]
    fn test_embed_bases_are_https() {
        for provider in [Provider::YouTube, Provider::Vimeo] {
            assert!(provider.embed_base().starts_with("https://"));
            assert!(provider.embed_base().ends_with('/'));
        }
    }
}
