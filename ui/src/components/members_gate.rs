use dioxus::prelude::*;

use super::app::Route;
use super::shop_context::use_shop_context;

/// Restricts account-area content to shoppers who completed setup.
///
/// Renders its children only for members; everyone else sees a prompt to
/// create an account. Gated content never has to check eligibility
/// itself.
#[component]
pub fn MembersGate(children: Element) -> Element {
    let shop = use_shop_context();
    let nav = use_navigator();

    if !shop.read().is_member() {
        return rsx! {
            div { class: "members-gate",
                h2 { "Members only" }
                p { "Create a free Orchard account to see your order history." }
                button {
                    onclick: move |_| { nav.push(Route::Setup {}); },
                    "Create Account"
                }
            }
        };
    }

    rsx! { {children} }
}
