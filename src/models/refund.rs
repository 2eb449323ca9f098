//! Refund records

use super::common::OrderLine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A refund of a captured amount
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_id: Option<String>,
    /// Refunded amount in minor units
    pub refunded_amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_lines: Vec<OrderLine>,
}
