use chrono::NaiveDate;
use shared::Task;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{Header, Leaderboard, MemberList, ProgressChecklist, RevenuePanel, ServiceCatalogView};
use services::{sample_data, Logger};

/// Today's date from the browser clock
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

#[function_component(App)]
fn app() -> Html {
    let members = use_memo((), |_| sample_data::members());
    let leaderboard = use_memo((), |_| sample_data::leaderboard());
    let revenue = use_memo((), |_| sample_data::revenue_records());
    let last_action = use_state(|| Option::<String>::None);

    let on_checklist_action = {
        let last_action = last_action.clone();
        Callback::from(move |task: Task| {
            Logger::info_with_component("app", &format!("Checklist action for task '{}'", task.id));
            let action_label = task.action_label.unwrap_or_default();
            last_action.set(Some(format!("{}: {}", task.label, action_label)));
        })
    };

    html! {
        <>
            <Header gym_name="Iron Oak Fitness" member_count={members.len()} today={today()} />
            <main class="main">
                <div class="container dashboard-grid">
                    <div class="dashboard-column">
                        <ProgressChecklist
                            title="New Member Onboarding"
                            tasks={sample_data::onboarding_tasks()}
                            on_action={on_checklist_action}
                        />
                        {if let Some(action) = (*last_action).clone() {
                            html! { <div class="action-notice">{format!("Opened {}", action)}</div> }
                        } else {
                            html! {}
                        }}
                        <Leaderboard entries={(*leaderboard).clone()} limit={Some(10)} />
                    </div>
                    <div class="dashboard-column wide">
                        <RevenuePanel records={(*revenue).clone()} />
                        <MemberList members={(*members).clone()} />
                        <ServiceCatalogView />
                    </div>
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
