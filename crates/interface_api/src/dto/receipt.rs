//! Receipt parsing DTOs

use domain_receipt::{group_into_lines, TextFragment};
use serde::Deserialize;
use validator::Validate;

/// Recognised receipt text in any of the shapes a recognition engine emits
///
/// Positioned fragments take precedence over plain lines, which take
/// precedence over a text block.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ParseReceiptRequest {
    #[validate(length(max = 2000, message = "at most 2000 lines"))]
    pub lines: Option<Vec<String>>,
    #[validate(length(max = 200000, message = "at most 200000 characters"))]
    pub text: Option<String>,
    #[validate(length(max = 10000, message = "at most 10000 fragments"))]
    pub fragments: Option<Vec<TextFragment>>,
}

impl ParseReceiptRequest {
    /// Flattens the request to text lines, `None` when nothing was sent
    pub fn into_lines(self) -> Option<Vec<String>> {
        match (self.fragments, self.lines, self.text) {
            (Some(fragments), _, _) => Some(group_into_lines(&fragments)),
            (None, Some(lines), _) => Some(lines),
            (None, None, Some(text)) => Some(text.lines().map(str::to_string).collect()),
            (None, None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_split_into_lines() {
        let request = ParseReceiptRequest {
            text: Some("Tea 2.00\nTotal 2.00".to_string()),
            ..Default::default()
        };

        assert_eq!(request.into_lines(), Some(vec!["Tea 2.00".to_string(), "Total 2.00".to_string()]));
    }

    #[test]
    fn test_lines_win_over_text() {
        let request = ParseReceiptRequest {
            lines: Some(vec!["Tea 2.00".to_string()]),
            text: Some("ignored".to_string()),
            ..Default::default()
        };

        assert_eq!(request.into_lines(), Some(vec!["Tea 2.00".to_string()]));
    }

    #[test]
    fn test_empty_request() {
        assert_eq!(ParseReceiptRequest::default().into_lines(), None);
    }
}
