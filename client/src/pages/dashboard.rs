//! Dashboard page: monitoring placeholder with the chat widget on top.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::state::dashboard::DashboardSummary;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let summary = DashboardSummary::default();

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>"감염병 모니터링 대시보드"</h1>
                <p class="dashboard__note">"대시보드 시각화가 이 영역에 표시됩니다."</p>
            </header>

            <div class="dashboard__cards">
                {summary
                    .cards()
                    .into_iter()
                    .map(|(label, value)| view! { <SummaryCard label=label value=value/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>

        <ChatWidget/>
    }
}

#[component]
fn SummaryCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="dashboard__card">
            <span class="dashboard__card-label">{label}</span>
            <span class="dashboard__card-value">{value}</span>
        </div>
    }
}
