//! Rule-Based Fallback Content
//!
//! Deterministic generation of marketing artifacts (segment definitions,
//! subject lines, send-time predictions, flow recommendations, campaign
//! analysis, email drafts) for when no generative AI backend is configured
//! or reachable. Every generator is pure and total over its input.

mod analysis;
mod email;
mod engine;
mod flows;
mod segment;
mod send_time;
mod subject;

pub use analysis::{CampaignAnalysis, CampaignData, CampaignStats, Grade, Insight, InsightType};
pub use email::EmailContentDraft;
pub use engine::FallbackEngine;
pub use flows::{FlowRecommendation, FlowRecommendationSet, FlowStep, Impact};
pub use segment::{Complexity, Condition, SegmentQueryResult};
pub use send_time::SendTimePrediction;
pub use subject::{ContentContext, OpenRate, Style, SubjectLine, SubjectLineSet};
