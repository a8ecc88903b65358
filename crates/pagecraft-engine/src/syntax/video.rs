use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::VideoContent;

use super::inline::encode_attribute;

/// Embedded player for recognized hosts, plain link otherwise.
pub struct VideoEmbed;

fn youtube_regex() -> &'static Regex {
    static YOUTUBE_REGEX: OnceLock<Regex> = OnceLock::new();
    YOUTUBE_REGEX.get_or_init(|| {
        Regex::new(
            r"(?:youtube\.com/watch\?(?:[^#\s]*&)?v=|youtu\.be/|youtube\.com/embed/)([A-Za-z0-9_-]+)",
        )
        .expect("Invalid youtube regex")
    })
}

/// Extracts the video id from `youtube.com/watch?v=`, `youtu.be/` and
/// `youtube.com/embed/` urls.
pub fn youtube_id(url: &str) -> Option<&str> {
    youtube_regex()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

impl VideoEmbed {
    pub const EMBED_BASE: &'static str = "https://www.youtube.com/embed/";

    /// Empty when the url is blank.
    pub fn render(content: &VideoContent) -> String {
        let url = content.url.trim();
        if url.is_empty() {
            return String::new();
        }

        match youtube_id(url) {
            Some(id) => format!(
                "<div class=\"video-embed\"><iframe src=\"{}{id}\" title=\"Embedded video\" frameborder=\"0\" allowfullscreen></iframe></div>",
                Self::EMBED_BASE
            ),
            None => format!(
                "<p><a href=\"{}\">{}</a></p>",
                encode_attribute(url),
                html_escape::encode_text(url)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://www.youtube.com/watch?v=abc123", Some("abc123"))]
    #[case("https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=10", Some("dQw4w9WgXcQ"))]
    #[case("https://youtu.be/xyz_-9?si=tracking", Some("xyz_-9"))]
    #[case("https://www.youtube.com/embed/EMB3D", Some("EMB3D"))]
    #[case("https://example.com/video.mp4", None)]
    #[case("https://vimeo.com/12345", None)]
    #[case("https://www.youtube.com/channel/UC123", None)]
    fn extracts_youtube_ids(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(youtube_id(url), expected);
    }

    fn video(url: &str) -> VideoContent {
        VideoContent {
            url: url.into(),
            provider: "youtube".into(),
        }
    }

    #[test]
    fn youtube_url_renders_player() {
        let html = VideoEmbed::render(&video("https://www.youtube.com/watch?v=abc123"));
        assert!(html.contains("<iframe"));
        assert!(html.contains(r#"src="https://www.youtube.com/embed/abc123""#));
    }

    #[test]
    fn other_url_renders_link() {
        assert_eq!(
            VideoEmbed::render(&video("https://example.com/video.mp4")),
            r#"<p><a href="https://example.com/video.mp4">https://example.com/video.mp4</a></p>"#
        );
    }

    #[test]
    fn blank_url_renders_nothing() {
        assert_eq!(VideoEmbed::render(&video("")), "");
        assert_eq!(VideoEmbed::render(&video("  ")), "");
    }
}
