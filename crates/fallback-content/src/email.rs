//! Email Draft Template

use crate::subject::ContentContext;
use serde::{Deserialize, Serialize};

/// A complete email draft: subject through postscript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailContentDraft {
    pub subject: String,
    pub preheader: String,
    pub headline: String,
    pub body: String,
    pub cta: String,
    pub ps: String,
    #[serde(default)]
    pub is_fallback: bool,
}

/// One fixed draft regardless of context.
pub(crate) fn draft(_context: &ContentContext) -> EmailContentDraft {
    EmailContentDraft {
        subject: "Something special just for you".to_string(),
        preheader: "You don't want to miss this...".to_string(),
        headline: "Your Exclusive Offer Awaits".to_string(),
        body: "We've noticed you've been interested in our products, and we wanted to \
            reach out with something special. For a limited time, enjoy exclusive access \
            to our latest collection."
            .to_string(),
        cta: "Shop Now".to_string(),
        ps: "P.S. This offer expires in 48 hours!".to_string(),
        is_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_ignores_context() {
        let empty = draft(&ContentContext::default());
        let full = draft(&ContentContext {
            purpose: Some("welcome".to_string()),
            audience: Some("VIPs".to_string()),
            message: Some("new drop".to_string()),
            tone: Some("playful".to_string()),
        });
        assert_eq!(empty, full);
        assert!(empty.is_fallback);
        assert_eq!(empty.cta, "Shop Now");
    }
}
