use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Result of `ecommOrders` and `campaignEcommOrders`.
pub struct EcommOrdersResponse {
    pub total: i64,
    pub data: Vec<EcommOrder>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EcommOrder {
    pub store_id: String,
    pub store_name: String,
    pub order_id: String,
    pub email: String,
    pub order_total: f64,
    pub tax_total: f64,
    pub ship_total: f64,
    pub order_date: String,
    pub lines: Vec<EcommOrderLine>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EcommOrderLine {
    pub line_num: i64,
    pub product_id: i64,
    pub product_name: String,
    pub product_sku: String,
    pub product_category_id: i64,
    pub product_category_name: String,
    pub qty: i64,
    pub cost: f64,
}
