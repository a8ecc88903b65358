//! Parser tests: recognition, degradation and ordering.


use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::blocks::{
    BlockContent, BlockKind, HeadingContent, HeadingLevel, ImageContent, QuoteContent,
    SequentialIdGenerator,
};
use crate::parsing::{parse_markup, parse_markup_report, parse_rope};

fn kinds(markup: &str) -> Vec<BlockKind> {
    let mut ids = SequentialIdGenerator::new("p");
    parse_markup(markup, &mut ids)
        .iter()
        .map(|b| b.kind())
        .collect()
}

fn checked_report(markup: &str) -> crate::parsing::ParseReport {
    let rope = Rope::from(markup);
    let mut ids = SequentialIdGenerator::new("p");
    let report = parse_rope(&rope, &mut ids);
    invariants::check(&rope, &report);
    report
}

#[test]
fn empty_markup() {
    assert!(kinds("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(kinds("\n  \n\t\n").is_empty());
}

#[test]
fn mixed_document_in_order() {
    let markup = r#"<h2 id="intro">Intro</h2>
<p>Welcome to Zilker.</p>

<figure><img src="/z.jpg" alt="Zilker Park" /><figcaption>Summer</figcaption></figure>
<blockquote><p>Great neighborhood.</p><cite>A buyer</cite></blockquote>
<hr />
<!-- TOC -->
<ul>
<li>Trails</li>
</ul>"#;

    let report = checked_report(markup);
    let got: Vec<_> = report.blocks().map(|b| b.kind()).collect();
    assert_eq!(
        got,
        vec![
            BlockKind::Heading,
            BlockKind::Text,
            BlockKind::Image,
            BlockKind::Quote,
            BlockKind::Divider,
            BlockKind::Toc,
            BlockKind::Text,
            BlockKind::Text,
            BlockKind::Text,
        ]
    );
}

#[test]
fn recovered_content() {
    let markup = r#"<h3 id="x">Parks &amp; <em>Trails</em></h3>
<figure><img src="/z.jpg" alt="Zilker Park" /><figcaption>Summer</figcaption></figure>
<blockquote><p>Great neighborhood.</p><cite>A buyer</cite></blockquote>"#;
    let mut ids = SequentialIdGenerator::new("p");
    let blocks = parse_markup(markup, &mut ids);

    assert_eq!(
        blocks[0].content(),
        &BlockContent::Heading(HeadingContent {
            text: "Parks &amp; Trails".into(),
            level: HeadingLevel::H3,
        })
    );
    assert_eq!(
        blocks[1].content(),
        &BlockContent::Image(ImageContent {
            src: "/z.jpg".into(),
            alt: "Zilker Park".into(),
            caption: "Summer".into(),
        })
    );
    assert_eq!(
        blocks[2].content(),
        &BlockContent::Quote(QuoteContent {
            text: "Great neighborhood.".into(),
            citation: "A buyer".into(),
        })
    );
}

#[test]
fn text_lines_are_kept_verbatim() {
    let markup = "  <p>Indented <b>bold</b></p>   \r\n<div>";
    let mut ids = SequentialIdGenerator::new("p");
    let blocks = parse_markup(markup, &mut ids);

    assert_eq!(blocks.len(), 2);
    match blocks[0].content() {
        BlockContent::Text(t) => assert_eq!(t.html, "  <p>Indented <b>bold</b></p>   "),
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn multi_line_list_fragments_per_line() {
    let markup = "<ul>\n  <li>One</li>\n  <li>Two</li>\n</ul>";
    assert_eq!(kinds(markup), vec![BlockKind::Text; 4]);
}

#[test]
fn multi_line_blockquote_degrades_to_text() {
    let markup = "<blockquote>\n<p>Split</p>\n</blockquote>";
    assert_eq!(kinds(markup), vec![BlockKind::Text; 3]);
}

#[test]
fn two_headings_on_one_line_degrade_to_text() {
    let report = checked_report("<h2>A</h2><h2>B</h2>\n<h3>C</h3>");
    let degraded: Vec<_> = report.fallbacks().map(|l| l.number).collect();
    assert_eq!(degraded, vec![1]);
    match report.lines[0].block().content() {
        BlockContent::Text(t) => assert_eq!(t.html, "<h2>A</h2><h2>B</h2>"),
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn report_flags_degraded_lines() {
    let report = checked_report("<h2>Title</h2>\n\n<p>Body</p>\n<hr>\n<section>");
    let degraded: Vec<_> = report.fallbacks().map(|l| l.number).collect();
    assert_eq!(degraded, vec![3, 5]);
    assert!(!report.lines[0].is_fallback());
    assert_eq!(report.lines[1].span.start, "<h2>Title</h2>\n\n".len());
}

#[test]
fn report_and_plain_parse_agree() {
    let markup = "<h2>A</h2>\n<p>b</p>\n<!-- TOC -->";
    let mut ids = SequentialIdGenerator::new("p");
    let from_report = parse_markup_report(markup, &mut ids).into_blocks();
    let mut ids = SequentialIdGenerator::new("p");
    assert_eq!(from_report, parse_markup(markup, &mut ids));
}

#[test]
fn ids_are_fresh_per_block() {
    let mut ids = SequentialIdGenerator::new("p");
    let blocks = parse_markup("<hr />\n<hr />\n<hr />", &mut ids);
    let got: Vec<_> = blocks.iter().map(|b| b.id().as_str()).collect();
    assert_eq!(got, vec!["p-1", "p-2", "p-3"]);
}

#[rstest]
#[case("<p>a</p>")]
#[case("<<<>>>")]
#[case("<h2>unterminated")]
#[case("<img src=\"broken")]
#[case("</blockquote></blockquote>")]
#[case("<!-- TOC")]
#[case("\u{0}\u{1}binary")]
#[case("<h1></h1>\n\n\n<h9>nine</h9>\n<hr class=\"x\">")]
fn malformed_markup_never_fails(#[case] markup: &str) {
    checked_report(markup);
}
