use api::models::{ConnectivityStat, HealthMetric, IspStat};
use api::User;
use dioxus::prelude::*;

use super::common::{EmptyState, LoadingPanel, PageHeader};
use super::users::{UserRow, UserTotals};
use crate::auth::{use_auth, Auth};
use crate::charts::{Bar, BarChart, ShareChart};
use crate::components::{Button, Card, CardContent, CardHeader, CardTitle};
use crate::icons::{FaArrowRight, FaLocationDot, FaServer, FaShieldHalved, FaTerminal, FaUserCheck, FaUserXmark, FaUsers, FaWifi};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

const RECENT_USERS: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
struct AdminOverview {
    users: Vec<User>,
    connectivity: Vec<ConnectivityStat>,
    isps: Vec<IspStat>,
    health: Vec<HealthMetric>,
}

/// Each panel loads on its own; one failing endpoint leaves only its panel empty.
async fn load_overview(auth: Auth) -> AdminOverview {
    let client = auth.client();
    let mut overview = AdminOverview::default();

    match client.list_users().await {
        Ok(users) => overview.users = users,
        Err(e) => {
            if auth.check(&e) {
                return overview;
            }
            tracing::error!("failed to load users: {e}");
        }
    }
    match client.connectivity_stats().await {
        Ok(stats) => overview.connectivity = stats,
        Err(e) => tracing::warn!("connectivity stats unavailable: {e}"),
    }
    match client.isp_performance().await {
        Ok(isps) => overview.isps = isps,
        Err(e) => tracing::warn!("ISP performance unavailable: {e}"),
    }
    match client.system_health().await {
        Ok(health) => overview.health = health,
        Err(e) => tracing::warn!("system health unavailable: {e}"),
    }
    overview
}

pub fn quality_tone(quality: &str) -> &'static str {
    match quality {
        "Excellent" => "tone-green",
        "Good" => "tone-blue",
        "Fair" => "tone-yellow",
        _ => "tone-red",
    }
}

/// Users per location, largest first. Spellings that differ only in case or
/// surrounding spaces share a bucket under the first spelling seen.
pub fn users_by_location(rows: &[UserRow]) -> Vec<(String, usize)> {
    let mut buckets: Vec<(String, usize)> = Vec::new();
    for row in rows {
        let place = match row.location.trim() {
            "" => "Unknown",
            place => place,
        };
        match buckets.iter_mut().find(|(name, _)| name.eq_ignore_ascii_case(place)) {
            Some((_, count)) => *count += 1,
            None => buckets.push((place.to_string(), 1)),
        }
    }
    buckets.sort_by(|a, b| b.1.cmp(&a.1));
    buckets
}

fn location_bars(rows: &[UserRow]) -> Vec<Bar> {
    users_by_location(rows)
        .into_iter()
        .enumerate()
        .map(|(i, (place, count))| Bar::new(place, count as f64, i))
        .collect()
}

fn isp_bars(isps: &[IspStat]) -> Vec<Bar> {
    isps.iter()
        .enumerate()
        .map(|(i, isp)| Bar::new(isp.isp.clone(), isp.avg_latency, i))
        .collect()
}

#[component]
fn TotalCard(label: &'static str, value: usize, note: &'static str, tone: &'static str, icon: Element) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardContent {
                p { class: "muted", "{label}" }
                h3 { "{value}" }
                p { class: "small {tone}", "{note}" }
                span { class: "stat-icon {tone}", {icon} }
            }
        }
    }
}

#[component]
pub fn AdminDashboardView(on_navigate: EventHandler<String>) -> Element {
    let auth = use_auth();
    let overview = use_resource(move || load_overview(auth));

    let Some(data) = overview.read().clone() else {
        return rsx! {
            document::Stylesheet { href: VIEWS_CSS }
            LoadingPanel { label: "Loading admin overview..." }
        };
    };

    let rows: Vec<UserRow> = data.users.iter().map(UserRow::from_user).collect();
    let totals = UserTotals::count(&rows);
    let status_bars = vec![
        Bar::new("Active", totals.active as f64, 0),
        Bar::new("Inactive", totals.inactive as f64, 1).with_color(Some("#ef4444".to_string())),
    ];

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "page",
            PageHeader { title: "Admin Dashboard", subtitle: "Monitor users, connectivity and system health",
                span { class: "pill tone-blue",
                    Icon { icon: FaShieldHalved, width: 12, height: 12 }
                    " Administrator"
                }
            }

            div { class: "stat-grid",
                TotalCard { label: "Total Users", value: totals.total, note: "Registered farmers", tone: "tone-blue",
                    icon: rsx! { Icon { icon: FaUsers, width: 20, height: 20 } } }
                TotalCard { label: "Active Users", value: totals.active, note: "Currently active", tone: "tone-green",
                    icon: rsx! { Icon { icon: FaUserCheck, width: 20, height: 20 } } }
                TotalCard { label: "Inactive Users", value: totals.inactive, note: "Need attention", tone: "tone-red",
                    icon: rsx! { Icon { icon: FaUserXmark, width: 20, height: 20 } } }
            }

            div { class: "grid-2",
                Card {
                    CardHeader { CardTitle { "User Status Distribution" } }
                    CardContent {
                        if totals.total == 0 {
                            EmptyState { message: "No users yet." }
                        } else {
                            ShareChart { bars: status_bars }
                        }
                    }
                }
                Card {
                    CardHeader { CardTitle { "System Health" } }
                    CardContent {
                        if data.health.is_empty() {
                            EmptyState { message: "Health metrics unavailable." }
                        }
                        for metric in data.health.iter() {
                            div { key: "{metric.metric}", class: "list-row",
                                span {
                                    Icon { icon: FaServer, width: 12, height: 12 }
                                    " {metric.metric}"
                                }
                                span { class: if metric.is_good() { "pill tone-green" } else { "pill tone-red" },
                                    "{metric.value_label()}"
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon { icon: FaLocationDot, width: 14, height: 14 }
                        " Users by Location"
                    }
                }
                CardContent {
                    if rows.is_empty() {
                        EmptyState { message: "No users yet." }
                    } else {
                        BarChart { bars: location_bars(&rows), unit: "users" }
                    }
                }
            }

            Card {
                CardHeader {
                    div { class: "row-between",
                        CardTitle { "Recent Users" }
                        Button { onclick: move |_| on_navigate.call("/admin/users".to_string()), "View All Users" }
                    }
                }
                CardContent {
                    div { class: "table-wrap",
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Location" }
                                    th { "Farm Size" }
                                    th { "Status" }
                                    th { "Last Login" }
                                }
                            }
                            tbody {
                                for row in rows.iter().take(RECENT_USERS) {
                                    tr { key: "{row.id}",
                                        td { "{row.name}" }
                                        td { class: "muted", "{row.email}" }
                                        td { "{row.location}" }
                                        td { "{row.farm_size}" }
                                        td {
                                            span { class: if row.is_active() { "pill tone-green" } else { "pill tone-red" }, "{row.status}" }
                                        }
                                        td { class: "muted", "{row.last_login}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            h2 { class: "section-heading", "Network Monitoring" }
            div { class: "grid-2",
                Card {
                    CardHeader { CardTitle { "Regional Reachability" } }
                    CardContent {
                        if data.connectivity.is_empty() {
                            EmptyState { message: "No connectivity reports yet." }
                        } else {
                            table { class: "table",
                                thead {
                                    tr {
                                        th { "Region" }
                                        th { "Latency" }
                                        th { "Packet Loss" }
                                        th { "Users" }
                                        th { "Quality" }
                                    }
                                }
                                tbody {
                                    for stat in data.connectivity.iter() {
                                        tr { key: "{stat.region}",
                                            td { "{stat.region}" }
                                            td { "{stat.latency}ms" }
                                            td { "{stat.packet_loss}%" }
                                            td { "{stat.users}" }
                                            td { span { class: "pill {quality_tone(&stat.quality)}", "{stat.quality}" } }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle {
                            Icon { icon: FaWifi, width: 14, height: 14 }
                            " ISP Performance (avg latency)"
                        }
                    }
                    CardContent {
                        if data.isps.is_empty() {
                            EmptyState { message: "No ISP data yet." }
                        } else {
                            BarChart { bars: isp_bars(&data.isps), unit: "ms" }
                            for isp in data.isps.iter() {
                                p { key: "{isp.isp}", class: "muted small",
                                    "{isp.isp}: {isp.reliability}% reliable, {isp.users} users"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "grid-2",
                Card { class: "clickable", onclick: move |_| on_navigate.call("/admin/users".to_string()),
                    CardContent {
                        div { class: "row-between",
                            div {
                                h4 { "Manage Users" }
                                p { class: "muted small", "Add, edit, or remove users" }
                            }
                            Icon { icon: FaArrowRight, width: 14, height: 14 }
                        }
                    }
                }
                Card { class: "clickable", onclick: move |_| on_navigate.call("/admin/logs".to_string()),
                    CardContent {
                        div { class: "row-between",
                            div {
                                h4 {
                                    Icon { icon: FaTerminal, width: 12, height: 12 }
                                    " System Logs"
                                }
                                p { class: "muted small", "View activity logs" }
                            }
                            Icon { icon: FaArrowRight, width: 14, height: 14 }
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

    #[test]
    fn connectivity_quality_tones() {
        assert_eq!(quality_tone("Excellent"), "tone-green");
        assert_eq!(quality_tone("Good"), "tone-blue");
        assert_eq!(quality_tone("Fair"), "tone-yellow");
        assert_eq!(quality_tone("Poor"), "tone-red");
        assert_eq!(quality_tone(""), "tone-red");
    }

    fn row(location: &str) -> UserRow {
        UserRow { location: location.to_string(), ..Default::default() }
    }

    #[test]
    fn users_grouped_by_location() {
        let rows = vec![row("Lahore"), row("Multan"), row(" lahore "), row(""), row("LAHORE"), row("Multan")];
        assert_eq!(
            users_by_location(&rows),
            vec![("Lahore".to_string(), 3), ("Multan".to_string(), 2), ("Unknown".to_string(), 1)]
        );
        assert!(users_by_location(&[]).is_empty());
        assert_eq!(location_bars(&rows)[1].value, 2.0);
    }

    #[test]
    fn isp_bars_use_latency() {
        let isps = vec![
            IspStat { isp: "Jazz".into(), avg_latency: 45.0, ..Default::default() },
            IspStat { isp: "Zong".into(), avg_latency: 60.0, ..Default::default() },
        ];
        let bars = isp_bars(&isps);
        assert_eq!(bars[1].label, "Zong");
        assert_eq!(bars[1].value, 60.0);
    }
}
