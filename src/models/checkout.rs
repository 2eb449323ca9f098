//! Checkout order records

use super::common::{Address, OrderLine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Merchant URLs the checkout redirects to or notifies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MerchantUrls {
    pub terms: String,
    pub checkout: String,
    pub confirmation: String,
    pub push: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_update: Option<String>,
}

/// A checkout order as sent to and returned by `/checkout/v3/orders`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutOrderData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// ISO 3166 alpha-2 purchase country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_country: Option<String>,
    /// ISO 4217 purchase currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_currency: Option<String>,
    /// RFC 1766 customer locale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// "checkout_incomplete", "checkout_complete" or "created"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    /// Total order amount in minor units, tax included
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_tax_amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_lines: Vec<OrderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_urls: Option<MerchantUrls>,
    /// HTML snippet to embed on the checkout page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_reference1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_reference2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
    /// Free-form merchant data, passed through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}
