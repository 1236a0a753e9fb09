//! Live market rates.
//!
//! The price list is refreshed every `polling.market_secs` while the search
//! box is empty. Typing sends each keystroke to the backend search; clearing
//! the box reloads the full list.

use std::time::Duration;

use api::models::MarketPriceEntry;
use dioxus::prelude::*;

use super::common::{EmptyState, LoadingPanel, PageHeader};
use crate::auth::{use_auth, Auth};
use crate::charts::{Bar, BarChart};
use crate::components::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input};
use crate::context::use_config;
use crate::icons::{FaArrowTrendDown, FaArrowTrendUp, FaArrowsRotate, FaDollarSign, FaMagnifyingGlass};
use crate::{platform, Icon};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

const TOP_GAINERS: usize = 3;

/// Headlines shown beside the gainers list.
const MARKET_NEWS: &[(&str, &str)] = &[
    ("Wheat Prices Rise Due to Strong Demand", "Procurement centres report steady arrivals"),
    ("Government Announces MSP Increase", "Support prices revised for the coming season"),
    ("Export Opportunities for Cotton Farmers", "Buyers report demand for long-staple lint"),
];

#[derive(Clone, Debug, Default, PartialEq)]
struct MarketState {
    prices: Vec<MarketPriceEntry>,
    gainers: Vec<MarketPriceEntry>,
    loaded: bool,
}

async fn load_market(auth: Auth) -> Option<MarketState> {
    let client = auth.client();
    match client.market_prices().await {
        Ok(prices) => {
            let gainers = client.top_gainers(TOP_GAINERS, &prices).await;
            Some(MarketState { prices, gainers, loaded: true })
        }
        Err(e) => {
            if !auth.check(&e) {
                tracing::error!("failed to load market prices: {e}");
            }
            None
        }
    }
}

/// A search in progress owns the price list until the box is cleared.
pub fn poll_owns_list(query: &str) -> bool {
    query.trim().is_empty()
}

pub fn history_bars(points: &[api::models::PricePoint]) -> Vec<Bar> {
    points
        .iter()
        .map(|p| Bar::new(p.date.clone(), p.price, 0))
        .collect()
}

#[component]
fn PriceCard(entry: MarketPriceEntry, selected: bool, onclick: EventHandler<()>) -> Element {
    let rising = entry.is_rising();
    let tone = if rising { "text-green" } else { "text-red" };
    let class = if selected { "clickable selected" } else { "clickable" };
    rsx! {
        Card { class, onclick: move |_| onclick.call(()),
            CardContent {
                div { class: "row-between",
                    div {
                        h4 { "{entry.crop}" }
                        p { class: "price", "{entry.price_label()}" }
                        p { class: "muted small", "{entry.unit_label()}" }
                    }
                    span { class: "stat-icon {tone}",
                        if rising {
                            Icon { icon: FaArrowTrendUp, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaArrowTrendDown, width: 16, height: 16 }
                        }
                    }
                }
                p { class: "small",
                    span { class: "{tone}", "{entry.change}" }
                    span { class: "muted", " vs last week" }
                }
            }
        }
    }
}

#[component]
fn PriceHistory(crop: String, on_close: EventHandler<()>) -> Element {
    let auth = use_auth();
    let name = crop.clone();
    let history = use_resource(move || {
        let crop = name.clone();
        async move {
            match auth.client().price_history(&crop).await {
                Ok(points) => points,
                Err(e) => {
                    tracing::debug!("no price history for {crop}: {e}");
                    Vec::new()
                }
            }
        }
    });

    rsx! {
        Card {
            CardHeader {
                div { class: "row-between",
                    CardTitle { "Price Trend - {crop}" }
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Close" }
                }
            }
            CardContent {
                {match history() {
                    None => rsx! { LoadingPanel {} },
                    Some(points) if points.is_empty() => rsx! { EmptyState { message: "No price history available for {crop}." } },
                    Some(points) => rsx! { BarChart { bars: history_bars(&points), unit: "Rs" } },
                }}
            }
        }
    }
}

#[component]
pub fn MarketView() -> Element {
    let auth = use_auth();
    let config = use_config();
    let mut market = use_signal(MarketState::default);
    let mut search = use_signal(String::new);
    let mut searching = use_signal(|| false);
    let mut refreshing = use_signal(|| false);
    let mut selected = use_signal(|| Option::<String>::None);
    let interval = Duration::from_secs(u64::from(config.polling.market_secs.max(1)));

    use_effect(move || {
        spawn(async move {
            loop {
                // Checked again after the fetch: a search typed meanwhile wins
                if poll_owns_list(&search.peek()) {
                    if let Some(state) = load_market(auth).await {
                        if poll_owns_list(&search.peek()) {
                            market.set(state);
                        }
                    }
                }
                platform::sleep(interval).await;
            }
        });
    });

    let on_search = move |evt: FormEvent| {
        let query = evt.value();
        search.set(query.clone());
        searching.set(true);
        spawn(async move {
            match auth.client().search_market(&query).await {
                Ok(found) => {
                    // Drop answers to stale keystrokes
                    if *search.peek() == query {
                        market.write().prices = found;
                    }
                }
                Err(e) => {
                    if !auth.check(&e) {
                        tracing::warn!("market search for {query:?} failed: {e}");
                    }
                }
            }
            searching.set(false);
        });
    };

    let on_refresh = move |_| {
        refreshing.set(true);
        spawn(async move {
            if let Some(state) = load_market(auth).await {
                search.set(String::new());
                market.set(state);
            }
            refreshing.set(false);
        });
    };

    let state = market.read().clone();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "page",
            PageHeader { title: "Market Prices", subtitle: "Live market rates and price trends for major crops",
                Button { disabled: refreshing(), onclick: on_refresh,
                    Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                    if refreshing() { " Refreshing..." } else { " Refresh Prices" }
                }
            }

            Card {
                CardContent {
                    div { class: "search-box",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                        Input { placeholder: "Search crop...", value: search(), oninput: on_search }
                        if searching() {
                            span { class: "muted small", "Searching..." }
                        }
                    }
                }
            }

            if !state.loaded && search().is_empty() {
                LoadingPanel { label: "Loading market prices..." }
            } else if state.prices.is_empty() {
                EmptyState { message: "No crops match your search." }
            }
            div { class: "card-grid",
                for entry in state.prices.iter().cloned() {
                    PriceCard {
                        key: "{entry.crop}",
                        selected: selected().as_deref() == Some(entry.crop.as_str()),
                        onclick: {
                            let crop = entry.crop.clone();
                            move |_| selected.set(Some(crop.clone()))
                        },
                        entry,
                    }
                }
            }

            if let Some(crop) = selected() {
                PriceHistory { key: "{crop}", crop: crop.clone(), on_close: move |_| selected.set(None) }
            }

            div { class: "grid-2",
                Card {
                    CardHeader { CardTitle { "Top Gainers" } }
                    CardContent {
                        if state.gainers.is_empty() {
                            p { class: "muted small", "No rising prices right now." }
                        }
                        for item in state.gainers.iter() {
                            div { key: "{item.crop}", class: "list-row tone-green",
                                div {
                                    p { "{item.crop}" }
                                    p { class: "muted small", "{item.price_label()}/{item.unit_label()}" }
                                }
                                span { class: "text-green",
                                    "{item.change} "
                                    Icon { icon: FaArrowTrendUp, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
                Card {
                    CardHeader { CardTitle { "Market News" } }
                    CardContent {
                        for (headline, detail) in MARKET_NEWS {
                            div { key: "{headline}", class: "list-row",
                                div {
                                    h4 { class: "small", "{headline}" }
                                    p { class: "muted small", "{detail}" }
                                }
                            }
                        }
                    }
                }
            }

            Card { class: "info-card",
                CardContent {
                    div { class: "row",
                        Icon { icon: FaDollarSign, width: 20, height: 20 }
                        div {
                            h4 { "Market Information" }
                            p { class: "muted small",
                                "Prices shown are indicative market rates and may vary by location and quality. "
                                "For actual selling prices, please contact your local mandi or agricultural market."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::PricePoint;

    #[test]
    fn history_becomes_bars_in_order() {
        let points = vec![
            PricePoint { date: "Jul".into(), price: 2000.0 },
            PricePoint { date: "Aug".into(), price: 2050.0 },
        ];
        let bars = history_bars(&points);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].label, "Jul");
        assert_eq!(bars[1].value, 2050.0);
    }

    #[test]
    fn polling_yields_to_a_search() {
        assert!(poll_owns_list(""));
        assert!(poll_owns_list("   "));
        assert!(!poll_owns_list("rice"));
        assert!(!poll_owns_list(" w "));
    }

    #[test]
    fn empty_history_has_no_bars() {
        assert!(history_bars(&[]).is_empty());
    }
}
