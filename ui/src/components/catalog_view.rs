use dioxus::prelude::*;

use orchard_common::currency::format_amount;

/// A catalog entry. The catalog is marketing content: a fixed seasonal
/// selection, refreshed with releases rather than fetched.
#[derive(Clone, Debug)]
struct CatalogItem {
    name: &'static str,
    grower: &'static str,
    description: &'static str,
    price: f64,
    unit: &'static str,
}

#[component]
pub fn CatalogView() -> Element {
    let mut search_query = use_signal(String::new);

    let query = search_query.read().to_lowercase();
    let items: Vec<CatalogItem> = seasonal_catalog()
        .into_iter()
        .filter(|item| {
            query.is_empty()
                || item.name.to_lowercase().contains(&query)
                || item.grower.to_lowercase().contains(&query)
                || item.description.to_lowercase().contains(&query)
        })
        .collect();

    rsx! {
        div { class: "catalog-view",
            h2 { "This Season's Catalog" }
            div { class: "search-bar",
                input {
                    r#type: "text",
                    placeholder: "Search produce...",
                    value: "{search_query}",
                    oninput: move |evt| search_query.set(evt.value()),
                }
            }
            div { class: "catalog-list",
                if items.is_empty() {
                    p { class: "empty-state", "Nothing matches that search." }
                } else {
                    {items.into_iter().map(|item| {
                        let price_str = format_amount(item.price);
                        rsx! {
                            div { class: "catalog-card",
                                key: "{item.name}",
                                h3 { "{item.name}" }
                                p { class: "grower", "From {item.grower}" }
                                p { "{item.description}" }
                                p { class: "price", "{price_str} / {item.unit}" }
                            }
                        }
                    })}
                }
            }
        }
    }
}

/// Current seasonal selection shown on the catalog page.
fn seasonal_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            name: "Braeburn Apples",
            grower: "Ahrens Orchard, Altes Land",
            description: "Crisp, late-season dessert apples picked at full colour.",
            price: 3.20,
            unit: "kg",
        },
        CatalogItem {
            name: "Conference Pears",
            grower: "Van Leeuwen Fruit, Betuwe",
            description: "Buttery when ripe; we ship them firm so they arrive intact.",
            price: 3.80,
            unit: "kg",
        },
        CatalogItem {
            name: "Heritage Carrots",
            grower: "Ferme du Vallon, Normandy",
            description: "Mixed purple, yellow and orange roots, field-stored.",
            price: 2.45,
            unit: "kg",
        },
        CatalogItem {
            name: "Wildflower Honey",
            grower: "Imkerei Brandt, Lüneburg Heath",
            description: "Raw, coarse-filtered, from summer heathland hives.",
            price: 8.90,
            unit: "500 g jar",
        },
        CatalogItem {
            name: "Green Kale",
            grower: "Hof Siebert, Dithmarschen",
            description: "Frost-sweetened winter kale, cut to order.",
            price: 2.10,
            unit: "bunch",
        },
        CatalogItem {
            name: "Cider Vinegar",
            grower: "Ahrens Orchard, Altes Land",
            description: "Unpasteurised, barrel-aged from windfall apples.",
            price: 5.50,
            unit: "750 ml bottle",
        },
    ]
}
