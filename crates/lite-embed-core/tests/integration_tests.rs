//! Integration tests for Lite Embed Core

use lite_embed_core::{
    encode_video_id, EmbedSource, Error, LogFormat, LogLevel, Prefix, Provider, ATTR_VIDEO_ID,
    IFRAME_STYLE,
};

// =============================================================================
// Provider Tests
// =============================================================================

#[test]
fn test_provider_css_contract() {
    assert_eq!(Provider::YouTube.selector(), ".n-ham-c-lite-yt");
    assert_eq!(Provider::Vimeo.selector(), ".n-ham-c-lite-vi");
    assert_eq!(
        Provider::Vimeo.activated_class(),
        "n-ham-c-lite-vi--activated"
    );
}

#[test]
fn test_provider_allow_attributes() {
    assert_eq!(
        Provider::YouTube.allow_attribute(),
        "autoplay; encrypted-media; picture-in-picture"
    );
    assert_eq!(
        Provider::Vimeo.allow_attribute(),
        "autoplay; picture-in-picture"
    );
}

#[test]
fn test_preconnect_origins_parse_as_urls() {
    for provider in [Provider::YouTube, Provider::Vimeo] {
        for origin in provider.preconnect_origins() {
            let parsed = url::Url::parse(origin).unwrap();
            assert_eq!(parsed.scheme(), "https");
            assert_eq!(parsed.path(), "/");
        }
    }
}

// =============================================================================
// Embed Source Tests
// =============================================================================

#[test]
fn test_youtube_src_with_extra_params() {
    let source = EmbedSource::youtube(Some("abc123"), Some("start=30")).unwrap();
    assert_eq!(
        source.iframe_src(),
        "https://www.youtube-nocookie.com/embed/abc123?autoplay=1&start=30"
    );
}

#[test]
fn test_vimeo_src_fixed_query() {
    let source = EmbedSource::vimeo(Some("76979871")).unwrap();
    let parsed = url::Url::parse(&source.iframe_src()).unwrap();

    assert_eq!(parsed.host_str(), Some("player.vimeo.com"));
    assert_eq!(parsed.path(), "/video/76979871");

    let query: Vec<_> = parsed.query_pairs().collect();
    assert_eq!(query.len(), 5);
    assert_eq!(query[4], ("autoplay".into(), "1".into()));
}

#[test]
fn test_missing_attribute_is_the_only_failure() {
    assert_eq!(
        EmbedSource::vimeo(None).unwrap_err(),
        Error::MissingAttribute {
            name: ATTR_VIDEO_ID
        }
    );
    // Whitespace is a value; only absent or empty fails
    assert!(EmbedSource::vimeo(Some(" ")).is_ok());
}

#[test]
fn test_video_id_escaping_round_trip() {
    let escaped = encode_video_id("id with spaces/and?query");
    assert_eq!(escaped, "id%20with%20spaces%2Fand%3Fquery");

    // The escaped id embeds into a URL path without introducing new segments
    let source = EmbedSource::vimeo(Some("id with spaces/and?query")).unwrap();
    let parsed = url::Url::parse(&source.iframe_src()).unwrap();
    assert_eq!(parsed.path_segments().unwrap().count(), 2);
}

#[test]
fn test_iframe_style_fills_container() {
    assert!(IFRAME_STYLE.contains("width:100%"));
    assert!(IFRAME_STYLE.contains("height:100%"));
    assert!(IFRAME_STYLE.contains("border:none"));
}

// =============================================================================
// Log Format Tests
// =============================================================================

#[test]
fn test_log_level_threshold() {
    let mut fmt = LogFormat::new();
    fmt.set_log_level(LogLevel::Warn);

    assert!(!fmt.enabled(LogLevel::Debug));
    assert!(!fmt.enabled(LogLevel::Info));
    assert!(!fmt.enabled(LogLevel::Log));
    assert!(fmt.enabled(LogLevel::Warn));
    assert!(fmt.enabled(LogLevel::Error));
    assert!(fmt.enabled(LogLevel::Group));
}

#[test]
fn test_prefix_strategies() {
    let mut fmt = LogFormat::new();
    assert_eq!(fmt.tag(LogLevel::Warn), LogLevel::Warn.default_tag());

    fmt.set_prefix(Prefix::Fixed("lite-embed/youtube".to_string()));
    let (text, _) = fmt.styled_prefix(LogLevel::Warn);
    assert_eq!(text, "%clite-embed/youtube");
}

#[test]
fn test_level_parsing() {
    assert_eq!(LogLevel::from_name("debug"), Some(LogLevel::Debug));
    assert_eq!(LogLevel::from_name("group"), Some(LogLevel::Group));
    assert_eq!(LogLevel::from_name("trace"), None);
}
