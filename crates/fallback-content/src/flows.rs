//! Flow Recommendation Catalog
//!
//! Fixed catalog of five high-impact automation flows: Welcome Series,
//! Abandoned Cart Recovery, Post-Purchase Nurture, Win-Back Campaign,
//! Browse Abandonment. Order is part of the contract.

use serde::{Deserialize, Serialize};

/// Expected business impact of a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// One timed step within a flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowStep {
    pub action: String,
    pub delay: String,
    pub description: String,
}

/// A recommended automation flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRecommendation {
    pub name: String,
    pub trigger: String,
    pub description: String,
    pub expected_impact: Impact,
    pub expected_revenue: String,
    pub steps: Vec<FlowStep>,
}

/// Ordered set of flow recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRecommendationSet {
    pub recommendations: Vec<FlowRecommendation>,
    #[serde(default)]
    pub is_fallback: bool,
}

struct CatalogFlow {
    name: &'static str,
    trigger: &'static str,
    description: &'static str,
    impact: Impact,
    revenue: &'static str,
    steps: &'static [(&'static str, &'static str, &'static str)],
}

static CATALOG: [CatalogFlow; 5] = [
    CatalogFlow {
        name: "Welcome Series",
        trigger: "Subscribes to list",
        description: "Convert new subscribers into customers with a strategic 5-email \
            welcome sequence that builds trust and drives first purchase.",
        impact: Impact::High,
        revenue: "$2,500/month",
        steps: &[
            ("Send Email", "Immediate", "Welcome + brand story + 10% first order discount"),
            ("Send Email", "2 days", "Best sellers showcase + social proof"),
            ("Conditional Split", "3 days", "Check if purchased"),
            ("Send Email", "4 days", "Discount reminder (non-purchasers only)"),
            ("Send Email", "7 days", "Educational content + soft CTA"),
        ],
    },
    CatalogFlow {
        name: "Abandoned Cart Recovery",
        trigger: "Started Checkout \u{2192} No Purchase (1 hour)",
        description: "Recover 10-15% of abandoned carts with timely, personalized reminders.",
        impact: Impact::High,
        revenue: "$4,200/month",
        steps: &[
            ("Send Email", "1 hour", "Gentle reminder with cart contents"),
            ("Send Email", "24 hours", "Social proof + reviews"),
            ("Send Email", "72 hours", "Final reminder + 5% discount"),
        ],
    },
    CatalogFlow {
        name: "Post-Purchase Nurture",
        trigger: "Placed Order",
        description: "Turn one-time buyers into repeat customers through strategic follow-up.",
        impact: Impact::Medium,
        revenue: "$1,800/month",
        steps: &[
            ("Send Email", "Immediate", "Order confirmation + what to expect"),
            ("Send Email", "3 days", "Shipping update + usage tips"),
            ("Send Email", "14 days", "Review request + referral program"),
            ("Send Email", "30 days", "Cross-sell recommendations"),
        ],
    },
    CatalogFlow {
        name: "Win-Back Campaign",
        trigger: "No purchase in 90 days (previous customer)",
        description: "Re-engage lapsed customers before they churn permanently.",
        impact: Impact::Medium,
        revenue: "$1,200/month",
        steps: &[
            ("Send Email", "90 days", "We miss you + what's new"),
            ("Send Email", "97 days", "Exclusive return offer (15% off)"),
            ("Send Email", "104 days", "Last chance + survey"),
        ],
    },
    CatalogFlow {
        name: "Browse Abandonment",
        trigger: "Viewed Product \u{2192} No Add to Cart (30 min)",
        description: "Capture interest from window shoppers with targeted follow-up.",
        impact: Impact::Medium,
        revenue: "$950/month",
        steps: &[
            ("Send Email", "30 minutes", "Still interested? + product highlight"),
            ("Send Email", "24 hours", "Similar products you might love"),
        ],
    },
];

/// Materialize the fixed catalog. Customer data only matters when a real
/// generative backend is available.
pub(crate) fn recommendations() -> FlowRecommendationSet {
    FlowRecommendationSet {
        recommendations: CATALOG
            .iter()
            .map(|flow| FlowRecommendation {
                name: flow.name.to_string(),
                trigger: flow.trigger.to_string(),
                description: flow.description.to_string(),
                expected_impact: flow.impact,
                expected_revenue: flow.revenue.to_string(),
                steps: flow
                    .steps
                    .iter()
                    .map(|(action, delay, description)| FlowStep {
                        action: action.to_string(),
                        delay: delay.to_string(),
                        description: description.to_string(),
                    })
                    .collect(),
            })
            .collect(),
        is_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let set = recommendations();
        let names: Vec<&str> = set
            .recommendations
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Welcome Series",
                "Abandoned Cart Recovery",
                "Post-Purchase Nurture",
                "Win-Back Campaign",
                "Browse Abandonment",
            ]
        );
    }

    #[test]
    fn test_every_flow_has_steps() {
        let set = recommendations();
        assert_eq!(set.recommendations.len(), 5);
        assert!(set.recommendations.iter().all(|r| !r.steps.is_empty()));
        assert!(set.is_fallback);
    }

    #[test]
    fn test_abandoned_cart_steps_verbatim() {
        let set = recommendations();
        let cart = &set.recommendations[1];
        assert_eq!(cart.trigger, "Started Checkout \u{2192} No Purchase (1 hour)");
        assert_eq!(cart.expected_impact, Impact::High);
        assert_eq!(cart.expected_revenue, "$4,200/month");
        assert_eq!(cart.steps.len(), 3);
        assert_eq!(cart.steps[0].delay, "1 hour");
        assert_eq!(cart.steps[2].description, "Final reminder + 5% discount");
    }

    #[test]
    fn test_welcome_series_verbatim() {
        let set = recommendations();
        let welcome = &set.recommendations[0];
        assert_eq!(welcome.trigger, "Subscribes to list");
        assert_eq!(welcome.steps.len(), 5);
        assert_eq!(welcome.steps[2].action, "Conditional Split");
        assert_eq!(welcome.expected_revenue, "$2,500/month");
    }
}
