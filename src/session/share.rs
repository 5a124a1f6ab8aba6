use anyhow::Result;

/// What gets handed to a native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
}

impl SharePayload {
    pub fn for_verse(reference: &str, text: &str) -> Self {
        Self {
            title: "Bible Verse".to_string(),
            text: share_text(reference, text),
        }
    }
}

/// `"<text>" - <reference>`
pub fn share_text(reference: &str, text: &str) -> String {
    format!("\"{text}\" - {reference}")
}

/// Platform hooks used for sharing: a native share action when the platform
/// has one, and the clipboard as fallback.
pub trait SharePlatform {
    fn supports_native_share(&self) -> bool;
    fn share(&mut self, payload: &SharePayload) -> Result<()>;
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_text_quotes_the_verse_before_the_reference() {
        assert_eq!(
            share_text("John 11:35", "Jesus wept."),
            "\"Jesus wept.\" - John 11:35"
        );
        assert_eq!(SharePayload::for_verse("John 11:35", "Jesus wept.").title, "Bible Verse");
    }
}
