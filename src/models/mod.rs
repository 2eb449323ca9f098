//! Data records exchanged with the API
//!
//! These are plain serde records with no behavior. Resources serialize them
//! into request bodies and decode responses into them.
//!
//! - [`checkout`] - Checkout order records
//! - [`order`] - Order management records and update requests
//! - [`capture`] - Captures and shipping information
//! - [`refund`] - Refunds
//! - [`common`] - Addresses, order lines and shipping details
//! - [`error`] - Error payload of rejected requests

pub mod capture;
pub mod checkout;
pub mod common;
pub mod error;
pub mod order;
pub mod refund;

pub use capture::{AddShippingInfo, CaptureData};
pub use checkout::{CheckoutOrderData, MerchantUrls};
pub use common::{Address, OrderLine, ShippingInfo};
pub use error::ErrorMessage;
pub use order::{
    Customer, OrderData, UpdateAuthorization, UpdateCustomerDetails, UpdateMerchantReferences,
};
pub use refund::RefundData;
