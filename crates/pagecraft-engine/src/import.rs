//! Markdown migration into blocks.
//!
//! Used by content-migration scripts that move markdown posts into the block
//! store. Each top-level markdown construct becomes one block; constructs
//! without a dedicated block kind (lists, tables, code) are kept as rendered
//! HTML.

use pulldown_cmark::{
    Event, HeadingLevel as MdHeadingLevel, Options, Parser, Tag, TagEnd, html,
};

use crate::blocks::{
    Block, BlockContent, DividerContent, HeadingContent, HeadingLevel, HtmlContent, IdGenerator,
    ImageContent, QuoteContent, TextContent,
};

/// Prefixes that mark the last paragraph of a block quote as its citation.
const CITATION_MARKERS: [&str; 3] = ["— ", "-- ", "~ "];

pub fn import_markdown(markdown: &str, ids: &mut impl IdGenerator) -> Vec<Block> {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let mut events = Parser::new_ext(markdown, options);
    let mut blocks = Vec::new();

    while let Some(event) = events.next() {
        let content = match event {
            Event::Start(tag) => {
                let inner = collect_until_end(&mut events);
                convert(tag, inner)
            }
            Event::Rule => Some(BlockContent::Divider(DividerContent::default())),
            Event::Html(raw) | Event::InlineHtml(raw) => Some(BlockContent::Html(HtmlContent {
                code: raw.trim_end().to_string(),
            })),
            Event::Text(text) => Some(BlockContent::Text(TextContent {
                html: format!("<p>{}</p>", html_escape::encode_text(&text)),
            })),
            _ => None,
        };

        if let Some(content) = content {
            blocks.push(Block::new(ids.next_id(), content));
        }
    }

    log::debug!("imported {} blocks from markdown", blocks.len());
    blocks
}

/// Collects events up to the `End` closing the tag just opened.
fn collect_until_end<'a>(events: &mut Parser<'a>) -> Vec<Event<'a>> {
    let mut depth = 0usize;
    let mut inner = Vec::new();

    for event in events.by_ref() {
        match &event {
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => break,
            Event::End(_) => depth -= 1,
            _ => {}
        }
        inner.push(event);
    }

    inner
}

fn convert<'a>(tag: Tag<'a>, inner: Vec<Event<'a>>) -> Option<BlockContent> {
    match tag {
        Tag::Heading { level, .. } => Some(BlockContent::Heading(HeadingContent {
            text: plain_text(&inner).trim().to_string(),
            level: heading_level(level),
        })),
        Tag::Paragraph => {
            if let Some(image) = standalone_image(&inner) {
                return Some(BlockContent::Image(image));
            }
            let html = render_html(Tag::Paragraph, TagEnd::Paragraph, inner);
            Some(BlockContent::Text(TextContent { html }))
        }
        Tag::BlockQuote(_) => Some(BlockContent::Quote(quote(&inner))),
        Tag::HtmlBlock => Some(BlockContent::Html(HtmlContent {
            code: plain_text(&inner).trim_end().to_string(),
        })),
        Tag::CodeBlock(kind) => Some(BlockContent::Html(HtmlContent {
            code: render_html(Tag::CodeBlock(kind), TagEnd::CodeBlock, inner)
                .trim_end()
                .to_string(),
        })),
        Tag::List(start) => {
            let end = TagEnd::List(start.is_some());
            Some(BlockContent::Text(TextContent {
                html: render_html(Tag::List(start), end, inner).trim_end().to_string(),
            }))
        }
        Tag::Table(alignments) => Some(BlockContent::Text(TextContent {
            html: render_html(Tag::Table(alignments), TagEnd::Table, inner)
                .trim_end()
                .to_string(),
        })),
        _ => None,
    }
}

fn heading_level(level: MdHeadingLevel) -> HeadingLevel {
    match level {
        MdHeadingLevel::H1 => HeadingLevel::H1,
        MdHeadingLevel::H2 => HeadingLevel::H2,
        MdHeadingLevel::H3 => HeadingLevel::H3,
        MdHeadingLevel::H4 => HeadingLevel::H4,
        MdHeadingLevel::H5 => HeadingLevel::H5,
        MdHeadingLevel::H6 => HeadingLevel::H6,
    }
}

fn render_html<'a>(open: Tag<'a>, close: TagEnd, inner: Vec<Event<'a>>) -> String {
    let mut out = String::new();
    let events = std::iter::once(Event::Start(open))
        .chain(inner)
        .chain(std::iter::once(Event::End(close)));
    html::push_html(&mut out, events);
    out.trim_end().to_string()
}

fn render_inline(inner: &[Event<'_>]) -> String {
    let mut out = String::new();
    html::push_html(&mut out, inner.iter().cloned());
    out.trim().to_string()
}

fn plain_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) | Event::Html(t) | Event::InlineHtml(t) => {
                text.push_str(t)
            }
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text
}

/// A paragraph holding nothing but one image becomes an image block.
fn standalone_image(inner: &[Event<'_>]) -> Option<ImageContent> {
    let significant: Vec<_> = inner
        .iter()
        .filter(|e| !matches!(e, Event::Text(t) if t.trim().is_empty()))
        .filter(|e| !matches!(e, Event::SoftBreak))
        .collect();

    let (first, rest) = significant.split_first()?;
    let Event::Start(Tag::Image {
        dest_url, title, ..
    }) = first
    else {
        return None;
    };
    let (last, middle) = rest.split_last()?;
    if !matches!(last, Event::End(TagEnd::Image))
        || middle
            .iter()
            .any(|e| matches!(e, Event::Start(_) | Event::End(_)))
    {
        return None;
    }

    let alt: Vec<Event<'_>> = middle.iter().map(|e| (*e).clone()).collect();
    Some(ImageContent {
        src: dest_url.to_string(),
        alt: plain_text(&alt),
        caption: title.to_string(),
    })
}

/// Splits a container's events into its top-level children.
fn children<'e, 'a>(inner: &'e [Event<'a>]) -> Vec<&'e [Event<'a>]> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, event) in inner.iter().enumerate() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }
        if depth == 0 {
            out.push(&inner[start..=i]);
            start = i + 1;
        }
    }

    out
}

/// Paragraphs become the quote text; other children (lists, headings, code)
/// are kept as rendered HTML in place.
fn quote(inner: &[Event<'_>]) -> QuoteContent {
    // Paragraph parts keep their events for citation detection.
    let mut parts: Vec<(Option<&[Event<'_>]>, String)> = Vec::new();

    for child in children(inner) {
        match child {
            [Event::Start(Tag::Paragraph), body @ .., Event::End(TagEnd::Paragraph)] => {
                parts.push((Some(body), render_inline(body)));
            }
            other => {
                let html = render_inline(other);
                if !html.is_empty() {
                    parts.push((None, html));
                }
            }
        }
    }

    let mut citation = String::new();
    if parts.len() > 1
        && let Some((Some(last), _)) = parts.last()
    {
        let last_text = plain_text(last);
        if let Some(marker) = CITATION_MARKERS
            .iter()
            .find(|m| last_text.starts_with(**m))
        {
            citation = last_text[marker.len()..].trim().to_string();
            parts.pop();
        }
    }

    let text = parts
        .into_iter()
        .map(|(_, html)| html)
        .collect::<Vec<_>>()
        .join(" ");

    QuoteContent { text, citation }
}
