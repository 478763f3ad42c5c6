//! Subject Line Catalogs
//!
//! Three fixed catalogs of five subject lines each, selected by the
//! campaign purpose.

use serde::{Deserialize, Serialize};

/// Free-form campaign context accepted by the content generators.
/// Absent fields fall back to neutral defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentContext {
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
}

/// Copywriting style of a subject line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Urgency,
    Curiosity,
    Benefit,
    Personalization,
    SocialProof,
}

/// Coarse open-rate prediction bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenRate {
    Low,
    Medium,
    High,
}

/// A single generated subject line with its rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectLine {
    pub text: String,
    pub style: Style,
    pub predicted_open_rate: OpenRate,
    pub reasoning: String,
}

/// Ordered set of generated subject lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectLineSet {
    #[serde(rename = "subjectLines")]
    pub lines: Vec<SubjectLine>,
    #[serde(rename = "isFallback", default)]
    pub is_fallback: bool,
}

type CatalogEntry = (&'static str, Style, OpenRate, &'static str);

const GENERIC: [CatalogEntry; 5] = [
    (
        "You're going to love this \u{2192}",
        Style::Curiosity,
        OpenRate::High,
        "Creates intrigue with arrow CTA",
    ),
    (
        "Quick question for you...",
        Style::Personalization,
        OpenRate::High,
        "Conversational opener drives opens",
    ),
    (
        "Last chance: ends tonight",
        Style::Urgency,
        OpenRate::High,
        "Time pressure creates FOMO",
    ),
    (
        "Here's what you missed",
        Style::Curiosity,
        OpenRate::Medium,
        "Fear of missing out on content",
    ),
    (
        "A little something just for you",
        Style::Personalization,
        OpenRate::Medium,
        "Exclusive feel increases engagement",
    ),
];

const WELCOME: [CatalogEntry; 5] = [
    (
        "Welcome to the family \u{1F389}",
        Style::Personalization,
        OpenRate::High,
        "Warm welcome with celebration",
    ),
    (
        "You're in! Here's what's next",
        Style::Benefit,
        OpenRate::High,
        "Confirms action and sets expectations",
    ),
    (
        "Thanks for joining us",
        Style::Personalization,
        OpenRate::Medium,
        "Simple gratitude message",
    ),
    (
        "Your exclusive access starts now",
        Style::Benefit,
        OpenRate::High,
        "Emphasizes exclusivity",
    ),
    (
        "Let's get started (it only takes 2 min)",
        Style::Benefit,
        OpenRate::Medium,
        "Low-commitment CTA",
    ),
];

const CART_RECOVERY: [CatalogEntry; 5] = [
    (
        "Forgot something?",
        Style::Curiosity,
        OpenRate::High,
        "Direct reminder without pressure",
    ),
    (
        "Your cart is feeling lonely",
        Style::Personalization,
        OpenRate::Medium,
        "Playful personification",
    ),
    (
        "Still thinking it over?",
        Style::Curiosity,
        OpenRate::Medium,
        "Acknowledges hesitation",
    ),
    (
        "Complete your order before it sells out",
        Style::Urgency,
        OpenRate::High,
        "Scarcity drives action",
    ),
    (
        "Here's 10% off to help you decide",
        Style::Benefit,
        OpenRate::High,
        "Incentive removes friction",
    ),
];

/// Select a catalog by campaign purpose and materialize it.
pub(crate) fn subject_lines(context: &ContentContext) -> SubjectLineSet {
    let purpose = context
        .purpose
        .as_deref()
        .unwrap_or("promotional")
        .to_lowercase();

    let catalog: &[CatalogEntry; 5] = if purpose.contains("welcome") {
        &WELCOME
    } else if purpose.contains("abandon") || purpose.contains("cart") {
        &CART_RECOVERY
    } else {
        &GENERIC
    };

    SubjectLineSet {
        lines: catalog
            .iter()
            .map(|(text, style, rate, reasoning)| SubjectLine {
                text: (*text).to_string(),
                style: *style,
                predicted_open_rate: *rate,
                reasoning: (*reasoning).to_string(),
            })
            .collect(),
        is_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(purpose: &str) -> ContentContext {
        ContentContext {
            purpose: Some(purpose.to_string()),
            ..ContentContext::default()
        }
    }

    #[test]
    fn test_always_five_lines() {
        for purpose in ["welcome email", "cart recovery", "promo", ""] {
            assert_eq!(subject_lines(&context(purpose)).lines.len(), 5);
        }
        assert_eq!(subject_lines(&ContentContext::default()).lines.len(), 5);
    }

    #[test]
    fn test_welcome_catalog_differs_from_generic() {
        let welcome = subject_lines(&context("welcome email"));
        let generic = subject_lines(&context("promo"));
        assert_ne!(welcome.lines[0].text, generic.lines[0].text);
    }

    #[test]
    fn test_cart_keywords_select_recovery_catalog() {
        let by_cart = subject_lines(&context("cart reminder"));
        let by_abandon = subject_lines(&context("abandoned checkout"));
        assert_eq!(by_cart.lines[0].text, "Forgot something?");
        assert_eq!(by_abandon.lines[0].text, by_cart.lines[0].text);
    }

    #[test]
    fn test_catalog_style_mix() {
        let generic = subject_lines(&context("promotional"));
        assert!(generic.lines.iter().any(|l| l.style == Style::Curiosity));
        assert!(generic
            .lines
            .iter()
            .any(|l| l.style == Style::Personalization));
        assert!(generic.lines.iter().any(|l| l.style == Style::Urgency));

        let welcome = subject_lines(&context("welcome"));
        assert!(welcome
            .lines
            .iter()
            .any(|l| l.style == Style::Personalization));
        assert!(welcome.lines.iter().any(|l| l.style == Style::Benefit));
    }

    #[test]
    fn test_marked_as_fallback() {
        assert!(subject_lines(&ContentContext::default()).is_fallback);
    }

    #[test]
    fn test_wire_format_field_names() {
        let json = serde_json::to_value(subject_lines(&ContentContext::default())).unwrap();
        assert!(json.get("subjectLines").is_some());
        assert_eq!(json["isFallback"], serde_json::Value::Bool(true));
        assert!(json["subjectLines"][0].get("predictedOpenRate").is_some());
    }
}
