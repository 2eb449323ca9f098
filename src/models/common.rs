//! Records shared by the checkout and order management APIs

use serde::{Deserialize, Serialize};

/// Postal address of a customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// ISO 3166 alpha-2 country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A single line of an order
///
/// All amounts are in minor units of the purchase currency, and `tax_rate`
/// is expressed in basis points (2500 = 25%).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Line type (e.g. "physical", "discount", "shipping_fee")
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub name: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_unit: Option<String>,
    pub unit_price: i64,
    pub tax_rate: i64,
    pub total_amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount_amount: Option<i64>,
    pub total_tax_amount: i64,
}

impl OrderLine {
    /// Create an order line for `quantity` items at `unit_price`, computing the totals
    pub fn new(name: impl Into<String>, quantity: i64, unit_price: i64, tax_rate: i64) -> Self {
        let total_amount = quantity * unit_price;
        // Tax included in the total: total - total * 10000 / (10000 + rate)
        let total_tax_amount = total_amount - total_amount * 10_000 / (10_000 + tax_rate);

        Self {
            kind: None,
            reference: None,
            name: name.into(),
            quantity,
            quantity_unit: None,
            unit_price,
            tax_rate,
            total_amount,
            total_discount_amount: None,
            total_tax_amount,
        }
    }

    /// Set the line reference (SKU)
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Set the line type
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// Shipping details for a capture
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_shipping_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_tracking_uri: Option<String>,
}
