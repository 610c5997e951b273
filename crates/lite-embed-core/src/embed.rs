//! Embed source validation and iframe URL building

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, Result};
use crate::provider::Provider;

/// Element attribute holding the video identifier
pub const ATTR_VIDEO_ID: &str = "videoid";

/// Element attribute holding extra query parameters (YouTube only)
pub const ATTR_VIDEO_PARAMS: &str = "videoparams";

/// Inline sizing applied to the generated iframe
pub const IFRAME_STYLE: &str = "width:100%;height:100%;border:none;";

/// Escapes everything `encodeURIComponent` escapes: alphanumerics and
/// `- _ . ! ~ * ' ( )` pass through, the rest is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a raw video identifier for use in a URL path segment
pub fn encode_video_id(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// A validated embed source for one placeholder element
///
/// Construction validates the required element attributes and escapes the
/// video identifier once; the value is immutable afterwards. A missing or
/// empty attribute fails construction with [`Error::MissingAttribute`] -
/// callers log a warning and leave the placeholder inert, siblings are
/// unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSource {
    provider: Provider,
    video_id: String,
    extra_params: Option<String>,
}

impl EmbedSource {
    /// Build a YouTube source from the placeholder's attribute values
    ///
    /// Both `videoid` and `videoparams` are required for YouTube. The params
    /// string is appended verbatim to the query string; the caller is
    /// responsible for producing a valid query fragment.
    pub fn youtube(video_id: Option<&str>, video_params: Option<&str>) -> Result<Self> {
        let vid = required(video_id, ATTR_VIDEO_ID)?;
        let vparams = required(video_params, ATTR_VIDEO_PARAMS)?;
        Ok(Self {
            provider: Provider::YouTube,
            video_id: encode_video_id(vid),
            extra_params: Some(vparams.to_string()),
        })
    }

    /// Build a Vimeo source from the placeholder's attribute value
    pub fn vimeo(video_id: Option<&str>) -> Result<Self> {
        let vid = required(video_id, ATTR_VIDEO_ID)?;
        Ok(Self {
            provider: Provider::Vimeo,
            video_id: encode_video_id(vid),
            extra_params: None,
        })
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// The percent-encoded video identifier
    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    /// The `src` URL of the real player iframe
    ///
    /// Autoplay is always requested: by the time the iframe exists the user
    /// has clicked the placeholder, so the video should start immediately.
    pub fn iframe_src(&self) -> String {
        match self.provider {
            Provider::YouTube => {
                let mut params = vec!["autoplay=1"];
                if let Some(extra) = self.extra_params.as_deref() {
                    params.push(extra);
                }
                format!(
                    "{}{}?{}",
                    self.provider.embed_base(),
                    self.video_id,
                    params.join("&")
                )
            }
            Provider::Vimeo => format!(
                "{}{}?color=ffffff&title=0&byline=0&portrait=0&autoplay=1",
                self.provider.embed_base(),
                self.video_id
            ),
        }
    }
}

/// Treats a missing or empty attribute value as absent
fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingAttribute { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_iframe_src() {
        let source = EmbedSource::youtube(Some("abc123"), Some("start=30")).unwrap();
        assert_eq!(
            source.iframe_src(),
            "https://www.youtube-nocookie.com/embed/abc123?autoplay=1&start=30"
        );
    }

    #[test]
    fn test_vimeo_iframe_src() {
        let source = EmbedSource::vimeo(Some("76979871")).unwrap();
        assert_eq!(
            source.iframe_src(),
            "https://player.vimeo.com/video/76979871?color=ffffff&title=0&byline=0&portrait=0&autoplay=1"
        );
    }

    #[test]
    fn test_video_id_is_escaped() {
        let source = EmbedSource::vimeo(Some("a/b?c=d&e")).unwrap();
        assert_eq!(source.video_id(), "a%2Fb%3Fc%3Dd%26e");
    }

    #[test]
    fn test_encode_matches_encode_uri_component() {
        // Characters encodeURIComponent leaves alone
        assert_eq!(encode_video_id("Az09-_.!~*'()"), "Az09-_.!~*'()");
        // Characters it escapes
        assert_eq!(encode_video_id("a b"), "a%20b");
        assert_eq!(encode_video_id("a+b"), "a%2Bb");
        assert_eq!(encode_video_id("a#b"), "a%23b");
    }

    #[test]
    fn test_missing_video_id() {
        let err = EmbedSource::vimeo(None).unwrap_err();
        assert_eq!(err, Error::MissingAttribute { name: ATTR_VIDEO_ID });
    }

    #[test]
    fn test_empty_video_id_is_missing() {
        let err = EmbedSource::vimeo(Some("")).unwrap_err();
        assert_eq!(err, Error::MissingAttribute { name: ATTR_VIDEO_ID });
    }

    #[test]
    fn test_youtube_requires_params_attribute() {
        let err = EmbedSource::youtube(Some("abc123"), None).unwrap_err();
        assert_eq!(
            err,
            Error::MissingAttribute {
                name: ATTR_VIDEO_PARAMS
            }
        );
    }

    #[test]
    fn test_iframe_src_parses_as_url() {
        let source = EmbedSource::youtube(Some("dQw4w9WgXcQ"), Some("start=30")).unwrap();
        let parsed = url::Url::parse(&source.iframe_src()).unwrap();
        assert_eq!(parsed.host_str(), Some("www.youtube-nocookie.com"));
        assert_eq!(parsed.path(), "/embed/dQw4w9WgXcQ");
        let query: Vec<_> = parsed.query_pairs().collect();
        assert_eq!(query[0], ("autoplay".into(), "1".into()));
        assert_eq!(query[1], ("start".into(), "30".into()));
    }
}
