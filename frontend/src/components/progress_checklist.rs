use shared::{ChecklistConfig, Task};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_checklist;

#[derive(Properties, PartialEq)]
pub struct ProgressChecklistProps {
    pub title: String,
    pub tasks: Vec<Task>,
    #[prop_or_default]
    pub config: ChecklistConfig,
    /// Invoked with the task when its action button is pressed
    #[prop_or_default]
    pub on_action: Option<Callback<Task>>,
}

#[function_component(ProgressChecklist)]
pub fn progress_checklist(props: &ProgressChecklistProps) -> Html {
    let handle = use_checklist(
        props.title.clone(),
        props.tasks.clone(),
        props.config.clone(),
        props.on_action.clone(),
    );

    let checklist = match handle.checklist() {
        Ok(checklist) => checklist,
        Err(e) => {
            return html! {
                <section class="checklist checklist-error">
                    <h2>{&props.title}</h2>
                    <div class="error-message">{format!("Checklist unavailable: {}", e)}</div>
                </section>
            };
        }
    };

    let summary = checklist.summary();
    let collapsed = checklist.is_collapsed();

    let on_collapse_click = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| {
            handle.set_collapsed(!collapsed);
        })
    };

    let header_class = if summary.is_complete() {
        "checklist-header complete"
    } else {
        "checklist-header"
    };

    html! {
        <section class="checklist">
            <div class={header_class}>
                <div class="checklist-title-row">
                    <h2>{checklist.title().to_string()}</h2>
                    <button
                        type="button"
                        class="btn btn-link checklist-collapse-toggle"
                        onclick={on_collapse_click}
                        aria-expanded={(!collapsed).to_string()}
                    >
                        {if collapsed { "Show tasks" } else { "Hide tasks" }}
                    </button>
                </div>
                <div class="checklist-summary">
                    <span class="checklist-count">
                        {format!("{} of {} complete", summary.completed, summary.total)}
                    </span>
                    <span class="checklist-percent">{format!("{}%", summary.rounded_percent())}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {:.1}%;", summary.percent)}></div>
                </div>
                {if summary.is_complete() {
                    html! { <p class="checklist-done">{"🎉 All done!"}</p> }
                } else {
                    html! {}
                }}
            </div>

            {if collapsed {
                html! {}
            } else if checklist.tasks().is_empty() {
                html! { <p class="checklist-empty">{"No tasks yet"}</p> }
            } else {
                html! {
                    <ul class="checklist-tasks">
                        {for checklist.tasks().iter().map(|task| {
                            let on_toggle = {
                                let handle = handle.clone();
                                let id = task.id.clone();
                                Callback::from(move |_: Event| handle.toggle(id.clone()))
                            };

                            let action_button = match (&task.action_label, task.action_available()) {
                                (Some(action_label), true) => {
                                    let handle = handle.clone();
                                    let id = task.id.clone();
                                    let on_click = Callback::from(move |_: MouseEvent| handle.trigger_action(&id));
                                    html! {
                                        <button type="button" class="btn btn-secondary task-action" onclick={on_click}>
                                            {action_label}
                                        </button>
                                    }
                                }
                                _ => html! {},
                            };

                            let item_class = if task.completed { "task done" } else { "task" };
                            let checkbox_id = format!("task-{}", task.id);

                            html! {
                                <li key={task.id.clone()} class={item_class}>
                                    <input
                                        type="checkbox"
                                        id={checkbox_id.clone()}
                                        checked={task.completed}
                                        onchange={on_toggle}
                                    />
                                    <label for={checkbox_id} class="task-label">{&task.label}</label>
                                    {action_button}
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
        </section>
    }
}
