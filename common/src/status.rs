//! Classification of free-text order and payment status labels.
//!
//! The ordering service reports statuses as plain strings. The UI coarsens
//! them into a visual category for badge styling and picks a glyph per
//! label. Both lookups are case-insensitive and total: an unrecognized
//! label renders as a neutral badge with a generic glyph.

/// Coarse badge classification, independent of the literal status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualCategory {
    Success,
    Pending,
    Failed,
    Neutral,
}

impl VisualCategory {
    /// CSS class for the status badge.
    pub fn css_class(self) -> &'static str {
        match self {
            VisualCategory::Success => "badge badge-success",
            VisualCategory::Pending => "badge badge-pending",
            VisualCategory::Failed => "badge badge-failed",
            VisualCategory::Neutral => "badge badge-neutral",
        }
    }
}

/// Classify an order or payment status label.
///
/// PAID belongs to the payment vocabulary but is matched here too; the
/// two label sets are disjoint, so one table serves both badges.
pub fn visual_category(label: &str) -> VisualCategory {
    match label.to_ascii_uppercase().as_str() {
        "COMPLETED" | "DELIVERED" | "PAID" => VisualCategory::Success,
        "PENDING" | "PROCESSING" => VisualCategory::Pending,
        "CANCELLED" | "FAILED" => VisualCategory::Failed,
        _ => VisualCategory::Neutral,
    }
}

/// Glyph shown next to the order status label.
///
/// SHIPPED gets its own glyph even though it styles as neutral; the two
/// mappings are deliberately independent.
pub fn status_icon(label: &str) -> &'static str {
    match label.to_ascii_uppercase().as_str() {
        "COMPLETED" | "DELIVERED" => "✓",
        "PENDING" | "PROCESSING" => "🕒",
        "SHIPPED" => "🚚",
        "CANCELLED" | "FAILED" => "✕",
        _ => "📦",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_labels() {
        for label in ["COMPLETED", "DELIVERED", "PAID"] {
            assert_eq!(visual_category(label), VisualCategory::Success);
        }
    }

    #[test]
    fn test_pending_labels() {
        for label in ["PENDING", "PROCESSING"] {
            assert_eq!(visual_category(label), VisualCategory::Pending);
        }
    }

    #[test]
    fn test_failed_labels() {
        for label in ["CANCELLED", "FAILED"] {
            assert_eq!(visual_category(label), VisualCategory::Failed);
        }
    }

    #[test]
    fn test_unrecognized_labels_are_neutral() {
        for label in ["", "SHIPPED", "ON_HOLD", "weird status", "🤷"] {
            assert_eq!(visual_category(label), VisualCategory::Neutral);
        }
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(visual_category("completed"), visual_category("COMPLETED"));
        assert_eq!(visual_category("Delivered"), VisualCategory::Success);
        assert_eq!(visual_category("pRoCeSsInG"), VisualCategory::Pending);
        assert_eq!(visual_category("failed"), VisualCategory::Failed);
    }

    #[test]
    fn test_icons_cover_every_label() {
        assert_eq!(status_icon("COMPLETED"), "✓");
        assert_eq!(status_icon("delivered"), "✓");
        assert_eq!(status_icon("PENDING"), "🕒");
        assert_eq!(status_icon("PROCESSING"), "🕒");
        assert_eq!(status_icon("shipped"), "🚚");
        assert_eq!(status_icon("CANCELLED"), "✕");
        assert_eq!(status_icon("FAILED"), "✕");
        assert_eq!(status_icon("ANYTHING_ELSE"), "📦");
    }

    #[test]
    fn test_shipped_has_an_icon_but_neutral_styling() {
        assert_eq!(status_icon("SHIPPED"), "🚚");
        assert_eq!(visual_category("SHIPPED"), VisualCategory::Neutral);
    }
}
