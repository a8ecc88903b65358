//! Block sequence to markup.

use crate::blocks::{Block, BlockContent};
use crate::syntax::{
    BlockQuote, CallToAction, Figure, HeadingTag, Rule, Spacer, TocPlaceholder, VideoEmbed,
};

/// Renders one block. Blocks with nothing to show render to `""`.
pub fn serialize_block(block: &Block) -> String {
    match block.content() {
        BlockContent::Heading(c) => HeadingTag::render(c),
        BlockContent::Text(c) => c.html.clone(),
        BlockContent::Image(c) => Figure::render(c),
        BlockContent::Video(c) => VideoEmbed::render(c),
        BlockContent::Html(c) => c.code.clone(),
        BlockContent::Button(c) => CallToAction::render(c),
        BlockContent::Divider(_) => Rule::TAG.to_string(),
        BlockContent::Spacer(c) => Spacer::render(c),
        BlockContent::Toc(_) => TocPlaceholder::TOKEN.to_string(),
        BlockContent::Quote(c) => BlockQuote::render(c),
    }
}

/// Renders blocks in order, one per line, dropping those that render empty.
pub fn serialize_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(serialize_block)
        .filter(|html| !html.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{
        BlockKind, DividerContent, HeadingLevel, IdGenerator, ImageContent, SequentialIdGenerator,
        TextContent, VideoContent,
    };
    use pretty_assertions::assert_eq;

    fn block(ids: &mut SequentialIdGenerator, content: BlockContent) -> Block {
        Block::new(ids.next_id(), content)
    }

    #[test]
    fn empty_sequence_serializes_to_empty_string() {
        assert_eq!(serialize_blocks(&[]), "");
    }

    #[test]
    fn every_default_block_serializes() {
        let mut ids = SequentialIdGenerator::new("b");
        let blocks: Vec<_> = BlockKind::ALL
            .into_iter()
            .map(|kind| Block::with_defaults(kind, &mut ids))
            .collect();

        // image and video defaults are blank and drop out
        assert_eq!(
            serialize_blocks(&blocks),
            [
                r#"<h2 id="new-heading">New Heading</h2>"#,
                "<p>Start typing...</p>",
                "<div>Custom HTML</div>",
                r##"<p><a href="#" class="btn btn-primary">Click Here</a></p>"##,
                "<hr />",
                r#"<div class="spacer" style="height: 40px"></div>"#,
                "<!-- TOC -->",
                "<blockquote><p>Quote text here...</p></blockquote>",
            ]
            .join("\n")
        );
    }

    #[test]
    fn image_without_source_is_dropped() {
        let mut ids = SequentialIdGenerator::new("b");
        let blocks = vec![
            block(
                &mut ids,
                BlockContent::Text(TextContent {
                    html: "<p>Before</p>".into(),
                }),
            ),
            block(
                &mut ids,
                BlockContent::Image(ImageContent {
                    src: String::new(),
                    alt: "Missing".into(),
                    caption: "Nothing here".into(),
                }),
            ),
            block(
                &mut ids,
                BlockContent::Text(TextContent {
                    html: "<p>After</p>".into(),
                }),
            ),
        ];

        assert_eq!(serialize_block(&blocks[1]), "");
        assert_eq!(serialize_blocks(&blocks), "<p>Before</p>\n<p>After</p>");
    }

    #[test]
    fn video_links_or_embeds() {
        let mut ids = SequentialIdGenerator::new("b");
        let youtube = block(
            &mut ids,
            BlockContent::Video(VideoContent {
                url: "https://www.youtube.com/watch?v=abc123".into(),
                provider: "youtube".into(),
            }),
        );
        let other = block(
            &mut ids,
            BlockContent::Video(VideoContent {
                url: "https://example.com/video.mp4".into(),
                provider: "youtube".into(),
            }),
        );

        assert!(serialize_block(&youtube).contains("https://www.youtube.com/embed/abc123"));
        assert_eq!(
            serialize_block(&other),
            r#"<p><a href="https://example.com/video.mp4">https://example.com/video.mp4</a></p>"#
        );
    }

    #[test]
    fn divider_style_does_not_change_output() {
        let mut ids = SequentialIdGenerator::new("b");
        let dashed = block(
            &mut ids,
            BlockContent::Divider(DividerContent {
                style: "dashed".into(),
            }),
        );
        assert_eq!(serialize_block(&dashed), "<hr />");
    }

    #[test]
    fn text_and_html_pass_through_verbatim() {
        let mut ids = SequentialIdGenerator::new("b");
        let text = block(
            &mut ids,
            BlockContent::Text(TextContent {
                html: "<ul>\n<li>One</li>\n</ul>".into(),
            }),
        );
        assert_eq!(serialize_blocks(&[text]), "<ul>\n<li>One</li>\n</ul>");
    }

    #[test]
    fn heading_text_is_verbatim_and_anchor_derived() {
        let mut ids = SequentialIdGenerator::new("b");
        let heading = block(
            &mut ids,
            BlockContent::Heading(crate::blocks::HeadingContent {
                text: "Buying in 78704: A Guide".into(),
                level: HeadingLevel::H3,
            }),
        );
        assert_eq!(
            serialize_block(&heading),
            r#"<h3 id="buying-in-78704-a-guide">Buying in 78704: A Guide</h3>"#
        );
    }
}
