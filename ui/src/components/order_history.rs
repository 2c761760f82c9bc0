use dioxus::prelude::*;

use orchard_common::currency::format_amount;
use orchard_common::history::OrdersFetch;
use orchard_common::order::{format_order_date, Order};
use orchard_common::status::{status_icon, visual_category};

use super::app::Route;
use super::orders_api::OrdersClient;
use super::shop_context::use_shop_context;

/// Order history for the linked ordering account.
///
/// Owns nothing but presentation state: one [`OrdersFetch`] value driven
/// by a fetch per linked-account change. Wrapped by `MembersGate`, so it
/// never renders for shoppers without an account.
#[component]
pub fn OrderHistoryView() -> Element {
    let shop = use_shop_context();
    let nav = use_navigator();
    let mut fetch = use_signal(|| OrdersFetch::Loading);

    // Memoized so the effect re-runs only when the linked account itself
    // changes identity, not on every context write.
    let client_id = use_memo(move || shop.read().client_id.clone());

    // Overlapping triggers are not cancelled; the latest resolution wins.
    use_effect(move || {
        let client_id = client_id();
        fetch.set(OrdersFetch::Loading);
        spawn(async move {
            let next = match client_id {
                // No linked account means no orders yet, not a failure.
                None => OrdersFetch::unlinked(),
                Some(id) => {
                    let client = OrdersClient::from_env();
                    OrdersFetch::settle(client.get_orders(&id).await)
                }
            };
            fetch.set(next);
        });
    });

    let body = match fetch.read().clone() {
        OrdersFetch::Loading => rsx! {
            div { class: "loading-indicator",
                span { class: "spinner" }
                p { "Loading your orders..." }
            }
        },
        OrdersFetch::Error(message) => rsx! {
            div { class: "order-error",
                p { class: "error-text", "{message}" }
                button { onclick: move |_| reload_page(), "Reload" }
            }
        },
        OrdersFetch::Loaded(orders) if orders.is_empty() => rsx! {
            div { class: "empty-state",
                p { "You haven't placed any orders yet. Browse the catalog to get started!" }
                button {
                    onclick: move |_| { nav.push(Route::Catalog {}); },
                    "Browse the Catalog"
                }
            }
        },
        OrdersFetch::Loaded(orders) => rsx! {
            div { class: "order-list",
                {orders.into_iter().map(|order| rsx! {
                    OrderCard { key: "{order.order_id.0}", order: order.clone() }
                })}
            }
        },
    };

    rsx! {
        div { class: "order-history",
            h2 { "My Orders" }
            {body}
        }
    }
}

/// One row of the order list, in the order the service returned it.
#[component]
fn OrderCard(order: Order) -> Element {
    let id_short = order.order_id.short();
    let icon = status_icon(&order.status);
    let status_class = visual_category(&order.status).css_class();
    let payment_class = visual_category(&order.payment_status).css_class();
    let placed = format_order_date(&order.created_at);
    let total = format_amount(order.total_amount);

    rsx! {
        div { class: "order-card",
            div { class: "order-header",
                span { class: "order-id", "{id_short}" }
                span { class: "{status_class}", "{icon} {order.status}" }
                span { class: "{payment_class}", "{order.payment_status}" }
            }
            div { class: "order-meta",
                span { class: "order-date", "Placed {placed}" }
                span { class: "order-total", "{total}" }
            }
        }
    }
}

/// Recovery from a failed fetch is a full reload of the page, not a
/// re-fetch in place.
fn reload_page() {
    #[cfg(target_family = "wasm")]
    if let Some(window) = web_sys::window() {
        if window.location().reload().is_err() {
            tracing::warn!("Page reload rejected by browser");
        }
    }
}
