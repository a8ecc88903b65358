// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_page_markup(sections: usize) -> String {
    let mut markup = String::from("<!-- TOC -->\n");

    for section in 0..sections {
        markup.push_str(&format!(
            "<h2 id=\"section-{section}\">Section {section}</h2>\n"
        ));
        markup.push_str(
            "<p>Paragraph with some content about the neighborhood and its schools.</p>\n",
        );
        markup.push_str(&format!(
            "<figure><img src=\"/img/{section}.jpg\" alt=\"Photo {section}\" /><figcaption>Photo {section}</figcaption></figure>\n"
        ));
        markup.push_str(&format!("<h3 id=\"details-{section}\">Details {section}</h3>\n"));
        markup.push_str(
            "<blockquote><p>Great place to live.</p><cite>A neighbor</cite></blockquote>\n",
        );
        markup.push_str("<ul>\n<li>Walkable</li>\n<li>Quiet</li>\n</ul>\n");
        markup.push_str("<hr />\n\n");
    }

    markup
}
