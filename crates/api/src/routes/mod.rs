//! Route Handlers

pub mod ai;
pub mod analytics;
pub mod campaigns;
pub mod events;
pub mod flows;
pub mod profiles;
pub mod segments;
