//! Demo Dataset
//!
//! Sample data served when no upstream marketing key is configured, so the
//! dashboard is fully explorable out of the box.

use serde_json::{json, Value};

pub fn profiles() -> Value {
    json!([
        { "id": "demo-1", "attributes": { "email": "sarah.johnson@email.com", "first_name": "Sarah", "last_name": "Johnson", "properties": { "total_orders": 12, "lifetime_value": 1250 } } },
        { "id": "demo-2", "attributes": { "email": "michael.chen@email.com", "first_name": "Michael", "last_name": "Chen", "properties": { "total_orders": 8, "lifetime_value": 890 } } },
        { "id": "demo-3", "attributes": { "email": "emily.rodriguez@email.com", "first_name": "Emily", "last_name": "Rodriguez", "properties": { "total_orders": 23, "lifetime_value": 3200 } } },
        { "id": "demo-4", "attributes": { "email": "david.kim@email.com", "first_name": "David", "last_name": "Kim", "properties": { "total_orders": 5, "lifetime_value": 420 } } },
        { "id": "demo-5", "attributes": { "email": "lisa.patel@email.com", "first_name": "Lisa", "last_name": "Patel", "properties": { "total_orders": 15, "lifetime_value": 1850 } } },
        { "id": "demo-6", "attributes": { "email": "james.wilson@email.com", "first_name": "James", "last_name": "Wilson", "properties": { "total_orders": 3, "lifetime_value": 275 } } },
        { "id": "demo-7", "attributes": { "email": "amanda.taylor@email.com", "first_name": "Amanda", "last_name": "Taylor", "properties": { "total_orders": 19, "lifetime_value": 2100 } } },
        { "id": "demo-8", "attributes": { "email": "robert.brown@email.com", "first_name": "Robert", "last_name": "Brown", "properties": { "total_orders": 7, "lifetime_value": 680 } } },
    ])
}

/// Number of profiles in [`profiles`].
pub const PROFILE_COUNT: u64 = 8;

pub fn campaigns() -> Value {
    json!([
        { "id": "camp-1", "attributes": { "name": "Spring Collection Launch", "status": "sent", "send_time": "2024-03-15T10:00:00Z", "stats": { "open_rate": 0.42, "click_rate": 0.12, "revenue": 8500 } } },
        { "id": "camp-2", "attributes": { "name": "VIP Early Access Sale", "status": "sent", "send_time": "2024-03-10T14:00:00Z", "stats": { "open_rate": 0.56, "click_rate": 0.18, "revenue": 12300 } } },
        { "id": "camp-3", "attributes": { "name": "Weekend Flash Sale", "status": "sent", "send_time": "2024-03-08T09:00:00Z", "stats": { "open_rate": 0.38, "click_rate": 0.09, "revenue": 5200 } } },
        { "id": "camp-4", "attributes": { "name": "New Arrivals Newsletter", "status": "sent", "send_time": "2024-03-05T11:00:00Z", "stats": { "open_rate": 0.35, "click_rate": 0.08, "revenue": 3100 } } },
        { "id": "camp-5", "attributes": { "name": "Customer Appreciation Week", "status": "draft", "stats": {} } },
    ])
}

pub fn flows() -> Value {
    json!([
        { "id": "flow-1", "attributes": { "name": "Welcome Series", "status": "live", "trigger_type": "List trigger", "created": "2024-01-15" } },
        { "id": "flow-2", "attributes": { "name": "Abandoned Cart", "status": "live", "trigger_type": "Metric trigger", "created": "2024-01-20" } },
        { "id": "flow-3", "attributes": { "name": "Post-Purchase Follow-up", "status": "live", "trigger_type": "Metric trigger", "created": "2024-02-01" } },
        { "id": "flow-4", "attributes": { "name": "Win-Back Campaign", "status": "draft", "trigger_type": "Segment trigger", "created": "2024-02-15" } },
        { "id": "flow-5", "attributes": { "name": "Birthday Celebration", "status": "live", "trigger_type": "Date trigger", "created": "2024-03-01" } },
    ])
}

pub fn segments() -> Value {
    json!([
        { "id": "seg-1", "attributes": { "name": "Active Subscribers", "created": "2024-01-10", "profile_count": 2340 } },
        { "id": "seg-2", "attributes": { "name": "VIP Customers", "created": "2024-01-15", "profile_count": 456 } },
        { "id": "seg-3", "attributes": { "name": "Recent Purchasers", "created": "2024-02-01", "profile_count": 890 } },
        { "id": "seg-4", "attributes": { "name": "Cart Abandoners", "created": "2024-02-10", "profile_count": 234 } },
    ])
}

pub fn engagement_trend() -> Value {
    json!([
        { "date": "2024-03-01", "opens": 1240, "clicks": 320, "revenue": 4500 },
        { "date": "2024-03-02", "opens": 1580, "clicks": 410, "revenue": 5800 },
        { "date": "2024-03-03", "opens": 1320, "clicks": 340, "revenue": 4200 },
        { "date": "2024-03-04", "opens": 1680, "clicks": 480, "revenue": 6700 },
        { "date": "2024-03-05", "opens": 1890, "clicks": 520, "revenue": 7200 },
        { "date": "2024-03-06", "opens": 2100, "clicks": 580, "revenue": 8100 },
        { "date": "2024-03-07", "opens": 1750, "clicks": 450, "revenue": 6400 },
    ])
}

/// Look up a demo profile by id, defaulting to the first one.
pub fn profile_by_id(id: &str) -> Value {
    let all = profiles();
    let list = all.as_array().cloned().unwrap_or_default();
    list.iter()
        .find(|profile| profile["id"] == id)
        .or_else(|| list.first())
        .cloned()
        .unwrap_or(Value::Null)
}

/// First `count` demo profiles, for segment previews.
pub fn sample_profiles(count: usize) -> Value {
    let all = profiles();
    let list = all.as_array().cloned().unwrap_or_default();
    Value::Array(list.into_iter().take(count).collect())
}

/// Deterministic estimated segment size in the 150..450 range, derived
/// from an FNV-1a hash of the query so previews are reproducible.
pub fn estimated_size(query: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in query.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    150 + hash % 300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shapes() {
        assert_eq!(profiles().as_array().unwrap().len(), PROFILE_COUNT as usize);
        assert_eq!(campaigns().as_array().unwrap().len(), 5);
        assert_eq!(flows().as_array().unwrap().len(), 5);
        assert_eq!(segments().as_array().unwrap().len(), 4);
        assert_eq!(engagement_trend().as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_profile_lookup() {
        assert_eq!(profile_by_id("demo-3")["id"], "demo-3");
        // Unknown ids fall back to the first profile.
        assert_eq!(profile_by_id("nope")["id"], "demo-1");
    }

    #[test]
    fn test_estimated_size_is_deterministic_and_bounded() {
        let a = estimated_size("vip customers");
        assert_eq!(a, estimated_size("vip customers"));
        for query in ["", "a", "recent purchasers", "openers who never click"] {
            let size = estimated_size(query);
            assert!((150..450).contains(&size));
        }
    }
}
