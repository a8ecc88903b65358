use crate::blocks::SpacerContent;

/// Empty block-level element of fixed pixel height.
pub struct Spacer;

impl Spacer {
    pub fn render(content: &SpacerContent) -> String {
        format!(
            "<div class=\"spacer\" style=\"height: {}px\"></div>",
            content.height
        )
    }
}
