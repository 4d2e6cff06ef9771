use shared::{RevenueAnalysis, RevenueRecord};
use yew::prelude::*;

use super::revenue_chart::RevenueChart;
use crate::services::format::{format_currency, format_growth, format_percent, growth_class};

#[derive(Properties, PartialEq)]
pub struct RevenuePanelProps {
    pub records: Vec<RevenueRecord>,
}

#[function_component(RevenuePanel)]
pub fn revenue_panel(props: &RevenuePanelProps) -> Html {
    let analysis = use_memo(props.records.clone(), |records| RevenueAnalysis::from_records(records));
    let growth = analysis.month_over_month_growth();

    html! {
        <section class="revenue-section">
            <h2>{"Revenue Analysis"}</h2>

            <div class="kpi-grid">
                <div class="kpi-card">
                    <span class="kpi-label">{"Total Revenue"}</span>
                    <span class="kpi-value">{format_currency(analysis.total())}</span>
                </div>
                <div class="kpi-card">
                    <span class="kpi-label">{"Monthly Average"}</span>
                    <span class="kpi-value">{format_currency(analysis.average_per_month())}</span>
                </div>
                <div class="kpi-card">
                    <span class="kpi-label">{"Month over Month"}</span>
                    <span class={growth_class(growth)}>{format_growth(growth)}</span>
                </div>
                <div class="kpi-card">
                    <span class="kpi-label">{"Best Month"}</span>
                    <span class="kpi-value">
                        {match analysis.best_month() {
                            Some(best) => format!("{} ({})", best.month.short_label(), format_currency(best.total)),
                            None => "n/a".to_string(),
                        }}
                    </span>
                </div>
            </div>

            <RevenueChart monthly={analysis.monthly().to_vec()} />

            {if analysis.by_category().is_empty() {
                html! {}
            } else {
                html! {
                    <div class="table-container">
                        <table class="revenue-category-table">
                            <thead>
                                <tr>
                                    <th>{"Category"}</th>
                                    <th>{"Revenue"}</th>
                                    <th>{"Share"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for analysis.by_category().iter().map(|category| html! {
                                    <tr key={category.category.label()}>
                                        <td class="category">{category.category.label()}</td>
                                        <td class="amount">{format_currency(category.total)}</td>
                                        <td class="share">
                                            <div class="share-bar">
                                                <div class="share-fill" style={format!("width: {:.1}%;", category.share_percent)}></div>
                                            </div>
                                            <span class="share-label">{format_percent(category.share_percent)}</span>
                                        </td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
