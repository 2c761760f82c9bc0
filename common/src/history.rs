//! Fetch lifecycle for the order-history view.
//!
//! The view drives one fetch per linked-account change and folds the
//! outcome into a single state value. Keeping the fold here, away from
//! any UI types, makes the whole contract testable natively.

use serde::Deserialize;

use crate::order::Order;

/// Shown when the transport itself fails. The underlying cause is
/// deliberately not surfaced to shoppers.
pub const FETCH_FAILED: &str = "Failed to load orders";

/// Response envelope from `GET /v1/clients/{id}/orders`.
///
/// A present `error` is an application-level failure even when the HTTP
/// call itself succeeded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub data: Option<Vec<Order>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Lifecycle of one order-history fetch.
///
/// `Error` and `Loaded` are terminal; only a full reload (or a change of
/// linked account) re-enters `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum OrdersFetch {
    Loading,
    Error(String),
    Loaded(Vec<Order>),
}

impl OrdersFetch {
    /// Terminal state for shoppers with no linked ordering account.
    /// An unlinked account has no orders; it is not an error.
    pub fn unlinked() -> Self {
        OrdersFetch::Loaded(Vec::new())
    }

    /// Fold a fetch outcome into the next state.
    ///
    /// An application-reported error string is surfaced verbatim; a
    /// transport failure collapses to [`FETCH_FAILED`].
    pub fn settle(outcome: Result<OrdersResponse, String>) -> Self {
        match outcome {
            Ok(response) => {
                if let Some(message) = response.error {
                    OrdersFetch::Error(message)
                } else {
                    OrdersFetch::Loaded(response.data.unwrap_or_default())
                }
            }
            Err(_) => OrdersFetch::Error(FETCH_FAILED.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, OrdersFetch::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderId;

    fn order(id: &str) -> Order {
        Order {
            order_id: OrderId(id.into()),
            status: "PENDING".into(),
            payment_status: "PAID".into(),
            total_amount: 10.0,
            created_at: "2026-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_unlinked_is_empty_success() {
        assert_eq!(OrdersFetch::unlinked(), OrdersFetch::Loaded(Vec::new()));
    }

    #[test]
    fn test_settle_preserves_result_order() {
        let response = OrdersResponse {
            data: Some(vec![order("o1"), order("o2")]),
            error: None,
        };
        match OrdersFetch::settle(Ok(response)) {
            OrdersFetch::Loaded(orders) => {
                let ids: Vec<_> = orders.iter().map(|o| o.order_id.0.as_str()).collect();
                assert_eq!(ids, ["o1", "o2"]);
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn test_settle_empty_data_is_loaded_not_error() {
        let response = OrdersResponse {
            data: Some(Vec::new()),
            error: None,
        };
        assert_eq!(
            OrdersFetch::settle(Ok(response)),
            OrdersFetch::Loaded(Vec::new())
        );
    }

    #[test]
    fn test_settle_missing_data_defaults_to_empty() {
        assert_eq!(
            OrdersFetch::settle(Ok(OrdersResponse::default())),
            OrdersFetch::Loaded(Vec::new())
        );
    }

    #[test]
    fn test_settle_surfaces_application_error_verbatim() {
        let response = OrdersResponse {
            data: None,
            error: Some("X".into()),
        };
        assert_eq!(
            OrdersFetch::settle(Ok(response)),
            OrdersFetch::Error("X".into())
        );
    }

    #[test]
    fn test_settle_collapses_transport_failures() {
        for detail in ["HTTP 503 from /api: upstream down", "", "boom"] {
            assert_eq!(
                OrdersFetch::settle(Err(detail.to_string())),
                OrdersFetch::Error(FETCH_FAILED.to_string())
            );
        }
    }

    #[test]
    fn test_envelope_decodes_data_form() {
        let json = r#"{"data": [{
            "orderId": "ord-1",
            "status": "COMPLETED",
            "paymentStatus": "PAID",
            "totalAmount": 19.5,
            "createdAt": "2026-02-02T12:00:00Z"
        }]}"#;
        let response: OrdersResponse = serde_json::from_str(json).unwrap();
        let orders = response.data.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id.0, "ord-1");
        assert!(response.error.is_none());
    }

    #[test]
    fn test_envelope_decodes_error_form() {
        let json = r#"{"error": "client not found"}"#;
        let response: OrdersResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.error.as_deref(), Some("client not found"));
    }
}
