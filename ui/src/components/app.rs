use dioxus::prelude::*;

use super::catalog_view::CatalogView;
use super::members_gate::MembersGate;
use super::order_history::OrderHistoryView;
use super::research_view::ResearchView;
use super::shop_context::{use_shop_context, ShopContext};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Catalog {},
    #[route("/orders")]
    Orders {},
    #[route("/research")]
    Research {},
    #[end_layout]
    #[route("/setup")]
    Setup {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(ShopContext::load()));

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let shop = use_shop_context();
    let nav = use_navigator();

    // Redirect to setup if no shopper profile yet
    if shop.read().shopper_name.is_none() {
        nav.replace(Route::Setup {});
        return rsx! {};
    }

    let state = shop.read();
    let shopper = state.shopper_name.clone().unwrap_or_default();
    let linked = state.client_id.is_some();
    drop(state);

    rsx! {
        div { class: "orchard-app",
            header { class: "app-header",
                div { class: "header-top",
                    h1 { "ORCHARD" }
                    div { class: "user-info",
                        span { class: "user-name", "{shopper}" }
                        if linked {
                            span { class: "linked-badge", " [Linked]" }
                        }
                    }
                }
                p { "Seasonal produce, straight from the growers" }
                nav {
                    button {
                        onclick: move |_| { nav.push(Route::Catalog {}); },
                        "Browse Catalog"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Orders {}); },
                        "My Orders"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Research {}); },
                        "Research"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Setup {}); },
                        "Account"
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: renders the catalog view.
#[component]
fn Catalog() -> Element {
    rsx! { CatalogView {} }
}

/// Route component: renders the order history behind the members gate.
#[component]
fn Orders() -> Element {
    rsx! {
        MembersGate {
            OrderHistoryView {}
        }
    }
}

/// Route component: renders the research page.
#[component]
fn Research() -> Element {
    rsx! { ResearchView {} }
}

#[component]
fn Setup() -> Element {
    rsx! { AccountSetup {} }
}

#[component]
fn AccountSetup() -> Element {
    let mut shop = use_shop_context();
    let nav = use_navigator();
    let mut name_input = use_signal(|| shop.peek().shopper_name.clone().unwrap_or_default());
    let mut client_input = use_signal(|| shop.peek().client_id.clone().unwrap_or_default());

    let can_submit = use_memo(move || !name_input.read().trim().is_empty());

    let submit = move |_| {
        let name = name_input.read().trim().to_string();
        if name.is_empty() {
            return;
        }
        let client_ref = client_input.read().trim().to_string();

        let mut state = shop.write();
        state.shopper_name = Some(name);
        // Changing the reference re-runs the order fetch on next visit
        // to My Orders; clearing it reads as "no orders yet".
        state.client_id = if client_ref.is_empty() {
            None
        } else {
            Some(client_ref)
        };
        state.save();
        drop(state);

        nav.replace(Route::Catalog {});
    };

    rsx! {
        div { class: "orchard-app",
            div { class: "account-setup",
                h1 { "Welcome to Orchard" }
                p { "Seasonal produce, straight from the growers" }

                div { class: "form-group",
                    label { "Your name:" }
                    input {
                        r#type: "text",
                        placeholder: "Name or nickname...",
                        value: "{name_input}",
                        oninput: move |evt| name_input.set(evt.value()),
                    }
                }

                div { class: "form-group",
                    label { "Order account reference (optional):" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. cl-9f3a21c407",
                        value: "{client_input}",
                        oninput: move |evt| client_input.set(evt.value()),
                    }
                    span { class: "field-hint",
                        "Found in your order confirmation emails. Link it to see your order history."
                    }
                }

                button {
                    disabled: !can_submit(),
                    onclick: submit,
                    "Save"
                }
            }
        }
    }
}
