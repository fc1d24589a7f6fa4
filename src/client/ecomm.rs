//! Ecommerce360 order tracking.

use super::{MailChimpClient, MailChimpError};
use crate::domain::{EcommOrdersResponse, Method, Params};

impl MailChimpClient {
    /// Record an `order` that did not come from a campaign.
    pub async fn ecomm_order_add(&self, params: Option<&Params>) -> Result<bool, MailChimpError> {
        self.call_bool(Method::EcommOrderAdd, params).await
    }

    /// Delete an order by `store_id` and `order_id`.
    pub async fn ecomm_order_del(&self, params: Option<&Params>) -> Result<bool, MailChimpError> {
        self.call_bool(Method::EcommOrderDel, params).await
    }

    /// Orders recorded for the account, across all stores.
    pub async fn ecomm_orders(
        &self,
        params: Option<&Params>,
    ) -> Result<EcommOrdersResponse, MailChimpError> {
        self.call_json(Method::EcommOrders, params).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::testing::{FakeTransport, make_client};
    use super::*;

    #[tokio::test]
    async fn order_delete_uses_del_wire_name() {
        let transport = FakeTransport::new(200, "true");
        let client = make_client(transport.clone());

        let params = Params::new().with("store_id", "s1").with("order_id", "o1");
        assert!(client.ecomm_order_del(Some(&params)).await.unwrap());

        let (url, body) = transport.last_request().unwrap();
        assert!(url.ends_with("?method=ecommOrderDel"));
        assert_eq!(body["order_id"], json!("o1"));
    }

    #[tokio::test]
    async fn orders_decode_with_lines() {
        let body = r#"{"total":1,"data":[{
          "store_id":"s1","store_name":"Shop","order_id":"o1","email":"a@example.com",
          "order_total":12.5,"tax_total":1.0,"ship_total":0,"order_date":"2012-01-05 10:00:00",
          "lines":[{"line_num":1,"product_id":7,"product_name":"Mug","product_sku":"M-1",
                    "product_category_id":3,"product_category_name":"Kitchen","qty":2,"cost":5.75}]
        }]}"#;
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport);

        let orders = client.ecomm_orders(None).await.unwrap();
        assert_eq!(orders.total, 1);
        let line = &orders.data[0].lines[0];
        assert_eq!(line.product_category_name, "Kitchen");
        assert_eq!(line.qty, 2);
        assert!((line.cost - 5.75).abs() < 1e-12);
    }
}
