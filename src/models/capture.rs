//! Capture records

use super::common::{Address, OrderLine, ShippingInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A capture of (part of) an authorized order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub klarna_reference: Option<String>,
    /// Captured amount in minor units
    pub captured_amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_lines: Vec<OrderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shipping_info: Vec<ShippingInfo>,
}

/// Body of `POST {capture}/shipping-info`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddShippingInfo {
    pub shipping_info: Vec<ShippingInfo>,
}
