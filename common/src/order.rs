use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Unique order identifier assigned by the ordering service.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    /// Display form for order cards: `#` plus the first 8 characters,
    /// with a trailing ellipsis when the id is longer than that.
    pub fn short(&self) -> String {
        if self.0.chars().count() > 8 {
            let head: String = self.0.chars().take(8).collect();
            format!("#{head}...")
        } else {
            format!("#{}", self.0)
        }
    }
}

/// An order as returned by the ordering service.
///
/// `status` and `payment_status` are free text: the service adds labels
/// without coordinating a release with this UI, so classification happens
/// at render time and unknown labels must still display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: OrderId,
    pub status: String,
    pub payment_status: String,
    pub total_amount: f64,
    pub created_at: String,
}

/// Format an order timestamp as e.g. "6 Mar 2026, 14:05".
///
/// Accepts RFC 3339 or a plain `YYYY-MM-DD HH:MM:SS`. Anything else is
/// shown verbatim; an odd timestamp must not take the order list down.
pub fn format_order_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%-d %b %Y, %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%-d %b %Y, %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id_truncates_long_ids() {
        assert_eq!(OrderId("abcdefgh12345".into()).short(), "#abcdefgh...");
    }

    #[test]
    fn test_short_id_keeps_short_ids_whole() {
        assert_eq!(OrderId("ab12".into()).short(), "#ab12");
        assert_eq!(OrderId("abcdefgh".into()).short(), "#abcdefgh");
    }

    #[test]
    fn test_format_rfc3339_date() {
        assert_eq!(
            format_order_date("2026-03-06T14:05:00+00:00"),
            "6 Mar 2026, 14:05"
        );
    }

    #[test]
    fn test_format_plain_date() {
        assert_eq!(
            format_order_date("2025-12-24 09:30:00"),
            "24 Dec 2025, 09:30"
        );
    }

    #[test]
    fn test_unparseable_date_shown_verbatim() {
        assert_eq!(format_order_date("last tuesday"), "last tuesday");
        assert_eq!(format_order_date(""), "");
    }

    #[test]
    fn test_order_wire_format_is_camel_case() {
        let json = r#"{
            "orderId": "ord-2491",
            "status": "SHIPPED",
            "paymentStatus": "PAID",
            "totalAmount": 42.9,
            "createdAt": "2026-01-15T08:00:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, OrderId("ord-2491".into()));
        assert_eq!(order.status, "SHIPPED");
        assert_eq!(order.payment_status, "PAID");
        assert_eq!(order.total_amount, 42.9);
    }
}
