//! Segment Query Classifier
//!
//! Converts a natural-language audience description into a segment
//! definition by folding an ordered cascade of keyword rules over an
//! accumulator. Later rules may overwrite the name and explanation set
//! by earlier ones.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One atomic filter clause within a segment definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

impl Condition {
    fn new(field: &str, operator: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
            timeframe: None,
        }
    }
}

/// Estimated build complexity of a segment, derived from its condition count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    /// More than two conditions is complex, more than one is medium.
    pub fn from_condition_count(count: usize) -> Self {
        if count > 2 {
            Complexity::Complex
        } else if count > 1 {
            Complexity::Medium
        } else {
            Complexity::Simple
        }
    }
}

/// Parsed segment definition returned to the segment builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentQueryResult {
    pub name: String,
    /// JSON-serialized condition list, suitable for segment creation.
    pub definition: String,
    pub explanation: String,
    pub estimated_complexity: Complexity,
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub is_fallback: bool,
}

/// Accumulator threaded through the rule cascade.
#[derive(Debug, Default)]
struct Draft {
    name: Option<String>,
    explanation: Option<String>,
    conditions: Vec<Condition>,
}

type Rule = fn(&str, Draft) -> Draft;

/// Rules run in this order; each examines the lowercased query and the
/// accumulator so far.
const RULES: &[Rule] = &[
    purchase,
    lifetime_value,
    cart_abandonment,
    inactivity,
    open_without_click,
    never_engaged,
];

fn contains_any(query: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| query.contains(needle))
}

fn purchase(query: &str, mut draft: Draft) -> Draft {
    if !contains_any(query, &["purchas", "bought", "order"]) {
        return draft;
    }
    let mut condition = Condition::new("Placed Order", "has done", "at least 1 time");
    draft.name = Some("Purchasers".to_string());
    draft.explanation = Some("Customers who have made at least one purchase".to_string());

    if contains_any(query, &["30 day", "last month"]) {
        condition.timeframe = Some("in the last 30 days".to_string());
        draft.name = Some("Recent Purchasers (30 days)".to_string());
        draft.explanation = Some("Customers who purchased in the last 30 days".to_string());
    } else if query.contains("90 day") {
        condition.timeframe = Some("in the last 90 days".to_string());
        draft.name = Some("Recent Purchasers (90 days)".to_string());
    }

    draft.conditions.push(condition);
    draft
}

fn lifetime_value(query: &str, mut draft: Draft) -> Draft {
    if !contains_any(query, &["vip", "high value", "loyal"]) {
        return draft;
    }
    draft
        .conditions
        .push(Condition::new("Lifetime Value", "greater than", "$500"));
    draft.name = Some("VIP Customers".to_string());
    draft.explanation =
        Some("High-value customers with significant lifetime value".to_string());
    draft
}

fn cart_abandonment(query: &str, mut draft: Draft) -> Draft {
    if !contains_any(query, &["abandon", "cart"]) {
        return draft;
    }
    draft
        .conditions
        .push(Condition::new("Started Checkout", "has done", "at least 1 time"));
    draft.conditions.push(Condition::new(
        "Placed Order",
        "has not done",
        "since starting checkout",
    ));
    draft.name = Some("Cart Abandoners".to_string());
    draft.explanation =
        Some("Customers who started checkout but did not complete purchase".to_string());
    draft
}

fn inactivity(query: &str, mut draft: Draft) -> Draft {
    if !contains_any(query, &["inactive", "haven't", "dormant"]) {
        return draft;
    }
    draft
        .conditions
        .push(Condition::new("Any Activity", "has not done", "in the last 90 days"));
    draft.name = Some("Inactive Subscribers".to_string());
    draft.explanation =
        Some("Subscribers with no activity in the last 90 days".to_string());
    draft
}

fn open_without_click(query: &str, mut draft: Draft) -> Draft {
    if !(query.contains("open") && query.contains("click")) {
        return draft;
    }
    draft
        .conditions
        .push(Condition::new("Opened Email", "has done", "at least 1 time"));
    draft
        .conditions
        .push(Condition::new("Clicked Email", "has not done", "ever"));
    draft.name = Some("Openers Who Never Click".to_string());
    draft.explanation =
        Some("Subscribers who open emails but never click links".to_string());
    draft
}

fn never_engaged(query: &str, mut draft: Draft) -> Draft {
    if !(query.contains("email") && query.contains("never")) {
        return draft;
    }
    draft
        .conditions
        .push(Condition::new("Opened Email", "has not done", "ever"));
    draft.name = Some("Never Engaged".to_string());
    draft.explanation =
        Some("Subscribers who have never opened any email".to_string());
    draft
}

/// Derive a generic segment name from the first few significant words.
fn generic_name(query: &str) -> String {
    let words: Vec<String> = query
        .split_whitespace()
        .filter(|word| word.len() > 3)
        .take(3)
        .map(title_case)
        .collect();
    format!("{} Segment", words.join(" "))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Classify a natural-language query into a segment definition.
pub(crate) fn parse_query(query: &str) -> SegmentQueryResult {
    let lowered = query.to_lowercase();
    let mut draft = RULES
        .iter()
        .fold(Draft::default(), |acc, rule| rule(&lowered, acc));

    if draft.conditions.is_empty() {
        draft.name = Some(generic_name(query));
        draft.explanation = Some(format!("Segment based on: {query}"));
        draft.conditions.push(Condition {
            field: "Custom Filter".to_string(),
            operator: "matches".to_string(),
            value: query.to_string(),
            timeframe: None,
        });
    }

    debug!(
        conditions = draft.conditions.len(),
        "classified segment query"
    );

    let definition = serde_json::to_string(&draft.conditions).unwrap_or_default();
    SegmentQueryResult {
        name: draft.name.unwrap_or_else(|| "Custom Segment".to_string()),
        definition,
        explanation: draft.explanation.unwrap_or_default(),
        estimated_complexity: Complexity::from_condition_count(draft.conditions.len()),
        conditions: draft.conditions,
        is_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_recent_purchasers_30_days() {
        let result = parse_query("I want customers who purchased in the last 30 days");
        assert_eq!(result.name, "Recent Purchasers (30 days)");
        assert_eq!(result.conditions.len(), 1);
        assert_eq!(
            result.conditions[0].timeframe.as_deref(),
            Some("in the last 30 days")
        );
        assert!(result.is_fallback);
    }

    #[test]
    fn test_90_day_window_keeps_purchase_explanation() {
        let result = parse_query("shoppers who bought in the past 90 days");
        assert_eq!(result.name, "Recent Purchasers (90 days)");
        assert_eq!(
            result.explanation,
            "Customers who have made at least one purchase"
        );
        assert_eq!(
            result.conditions[0].timeframe.as_deref(),
            Some("in the last 90 days")
        );
    }

    #[test]
    fn test_vip_customers() {
        let result = parse_query("vip high value loyal customers");
        assert_eq!(result.name, "VIP Customers");
        let condition = result
            .conditions
            .iter()
            .find(|c| c.field == "Lifetime Value")
            .unwrap();
        assert_eq!(condition.operator, "greater than");
        assert_eq!(condition.value, "$500");
    }

    #[test]
    fn test_cart_abandoners_two_conditions() {
        let result = parse_query("people who abandoned their cart");
        assert_eq!(result.name, "Cart Abandoners");
        assert_eq!(result.conditions.len(), 2);
        assert_eq!(result.estimated_complexity, Complexity::Medium);
    }

    #[test]
    fn test_openers_who_never_click_needs_both_keywords() {
        let result = parse_query("subscribers who open but do not click");
        assert_eq!(result.name, "Openers Who Never Click");
        assert_eq!(result.conditions.len(), 2);

        let open_only = parse_query("subscribers who open everything");
        assert_ne!(open_only.name, "Openers Who Never Click");
    }

    #[test]
    fn test_later_rule_overwrites_name() {
        // Purchase rule fires first, cart rule fires later and wins the name.
        let result = parse_query("ordered something but abandoned the cart");
        assert_eq!(result.name, "Cart Abandoners");
        assert_eq!(result.conditions.len(), 3);
        assert_eq!(result.estimated_complexity, Complexity::Complex);
        // Purchase condition still comes first.
        assert_eq!(result.conditions[0].field, "Placed Order");
    }

    #[test]
    fn test_unmatched_query_gets_custom_filter() {
        let query = "sneaker enthusiasts from Portland";
        let result = parse_query(query);
        assert_eq!(result.conditions.len(), 1);
        assert_eq!(result.conditions[0].field, "Custom Filter");
        assert_eq!(result.conditions[0].value, query);
        assert_eq!(result.name, "Sneaker Enthusiasts From Segment");
        assert_eq!(result.explanation, format!("Segment based on: {query}"));
        assert_eq!(result.estimated_complexity, Complexity::Simple);
    }

    #[test]
    fn test_empty_query_is_total() {
        let result = parse_query("");
        assert_eq!(result.conditions.len(), 1);
        assert_eq!(result.conditions[0].field, "Custom Filter");
        assert_eq!(result.conditions[0].value, "");
    }

    #[test]
    fn test_definition_round_trips() {
        let result = parse_query("vip customers who purchased in the last 30 days");
        let parsed: Vec<Condition> = serde_json::from_str(&result.definition).unwrap();
        assert_eq!(parsed, result.conditions);
    }

    #[test]
    fn test_complexity_thresholds() {
        assert_eq!(Complexity::from_condition_count(0), Complexity::Simple);
        assert_eq!(Complexity::from_condition_count(1), Complexity::Simple);
        assert_eq!(Complexity::from_condition_count(2), Complexity::Medium);
        assert_eq!(Complexity::from_condition_count(3), Complexity::Complex);
        assert_eq!(Complexity::from_condition_count(7), Complexity::Complex);
    }

    proptest! {
        #[test]
        fn prop_total_over_arbitrary_queries(query in ".{0,200}") {
            let result = parse_query(&query);
            prop_assert!(!result.conditions.is_empty());
            prop_assert!(result.is_fallback);
            prop_assert_eq!(
                result.estimated_complexity,
                Complexity::from_condition_count(result.conditions.len())
            );
        }

        #[test]
        fn prop_conditions_round_trip(query in ".{0,200}") {
            let result = parse_query(&query);
            let parsed: Vec<Condition> = serde_json::from_str(&result.definition).unwrap();
            prop_assert_eq!(parsed, result.conditions);
        }
    }
}
