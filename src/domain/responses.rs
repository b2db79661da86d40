//! Payload shapes returned by the generation service, one per module.
//!
//! The service gives no structural guarantee, so every field is optional and
//! a malformed field (wrong type, bad list element) degrades to `None` or is
//! skipped instead of failing the whole reply.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// 欄位型別不符時視為缺漏
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// 陣列中格式錯誤的元素直接略過
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

// Smart inventory

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartOrder {
    #[serde(default, deserialize_with = "lenient")]
    pub product: Option<String>,
    /// e.g. "+30%" or "-15%"
    #[serde(default, deserialize_with = "lenient")]
    pub change: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartInventoryResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub projected_monthly_savings: Option<f64>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub smart_orders: Vec<SmartOrder>,
}

// Customer AI

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "Push Notification")]
    PushNotification,
    #[serde(rename = "Email")]
    Email,
    #[serde(rename = "Staff Alert", alias = "In-Store Staff Alert")]
    StaffAlert,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PushNotification => "Push Notification",
            Self::Email => "Email",
            Self::StaffAlert => "Staff Alert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOpportunity {
    #[serde(default, deserialize_with = "lenient")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub insight: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub channel: Option<Channel>,
    #[serde(default, deserialize_with = "lenient")]
    pub generated_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerAIResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub opportunities: Vec<CustomerOpportunity>,
}

// Market pulse

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trend {
    #[serde(default, deserialize_with = "lenient")]
    pub trend: Option<String>,
    /// 1 (emerging) to 3 (trending hot)
    #[serde(default, deserialize_with = "lenient")]
    pub heat: Option<u8>,
}

impl Trend {
    /// Heat within 1..=3, or `None` when the model sent something else.
    pub fn heat_level(&self) -> Option<u8> {
        self.heat.filter(|h| (1..=3).contains(h))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPulseResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub competitor_watch: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub trend_radar: Vec<Trend>,
    #[serde(default, deserialize_with = "lenient")]
    pub strategy_brief: Option<String>,
}

// Employee co-pilot

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmployeeCoPilotResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub query: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub references: Vec<String>,
}

// Store performance diagnoser

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootCause {
    #[serde(default, deserialize_with = "lenient")]
    pub cause: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub supporting_data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnaroundRecommendation {
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub rationale: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub expected_impact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePerformanceDiagnoserResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub store: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub concern: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub root_causes: Vec<RootCause>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub recommendations: Vec<TurnaroundRecommendation>,
}
