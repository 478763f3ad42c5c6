//! Fallback Engine

use crate::analysis::{self, CampaignAnalysis, CampaignData};
use crate::email::{self, EmailContentDraft};
use crate::flows::{self, FlowRecommendationSet};
use crate::segment::{self, SegmentQueryResult};
use crate::send_time::{self, SendTimePrediction};
use crate::subject::{self, ContentContext, SubjectLineSet};

/// Stateless generator for demo-quality marketing artifacts.
///
/// Every method is pure and total: absent or malformed fields fall back to
/// documented defaults, and no call can fail. Safe to share across
/// concurrent requests; the only data it touches are call-scoped inputs
/// and process-wide read-only catalogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackEngine;

impl FallbackEngine {
    pub fn new() -> Self {
        Self
    }

    /// Classify a natural-language audience query into a segment definition.
    pub fn parse_segment_query(&self, query: &str) -> SegmentQueryResult {
        segment::parse_query(query)
    }

    /// Five subject lines from the catalog matching the campaign purpose.
    pub fn subject_lines(&self, context: &ContentContext) -> SubjectLineSet {
        subject::subject_lines(context)
    }

    /// Fixed industry-benchmark send-time prediction.
    pub fn send_time(&self) -> SendTimePrediction {
        send_time::prediction()
    }

    /// The fixed five-flow recommendation catalog.
    pub fn flow_recommendations(&self) -> FlowRecommendationSet {
        flows::recommendations()
    }

    /// Benchmark-based campaign scoring.
    pub fn campaign_analysis(&self, data: &CampaignData) -> CampaignAnalysis {
        analysis::analyze(data)
    }

    /// One fixed email draft.
    pub fn email_content(&self, context: &ContentContext) -> EmailContentDraft {
        email::draft(context)
    }
}
