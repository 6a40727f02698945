//! Small labeled number used on the dashboards.

use leptos::prelude::*;

#[component]
pub fn StatTile(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__value">{value}</span>
            <span class="stat-tile__label">{label}</span>
        </div>
    }
}
