use crate::blocks::ButtonContent;

use super::inline::encode_attribute;

/// Call-to-action link styled as a button.
pub struct CallToAction;

impl CallToAction {
    pub fn render(content: &ButtonContent) -> String {
        let variant = match content.variant.trim() {
            "" => "primary",
            v => v,
        };
        format!(
            "<p><a href=\"{}\" class=\"btn btn-{}\">{}</a></p>",
            encode_attribute(&content.href),
            encode_attribute(variant),
            content.text
        )
    }
}
