use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::{
    Checklist, ChecklistConfig, ChecklistError, ChecklistEvent, CollapseTicket, PendingCollapse, Task,
};
use yew::prelude::*;

use crate::services::logging::Logger;

const COMPONENT: &str = "progress-checklist";

pub enum ChecklistAction {
    Toggle(String),
    SetCollapsed(bool),
    FireAutoCollapse(CollapseTicket),
}

/// Reducer state; an invalid task list stays an error for the component's lifetime
#[derive(Clone, PartialEq)]
pub struct ChecklistState {
    checklist: Result<Checklist, ChecklistError>,
}

impl Reducible for ChecklistState {
    type Action = ChecklistAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let Ok(current) = &self.checklist else {
            return self;
        };

        let mut checklist = current.clone();
        let events = match action {
            ChecklistAction::Toggle(id) => checklist.toggle(&id),
            ChecklistAction::SetCollapsed(collapsed) => checklist.set_collapsed(collapsed),
            ChecklistAction::FireAutoCollapse(ticket) => checklist.fire_auto_collapse(ticket),
        };

        // Nothing changed, keep the old state so the view doesn't re-render
        if events.is_empty() {
            return self;
        }

        for event in &events {
            log_event(event);
        }

        Rc::new(Self {
            checklist: Ok(checklist),
        })
    }
}

fn log_event(event: &ChecklistEvent) {
    let message = match event {
        ChecklistEvent::TaskToggled { id, completed, summary } => format!(
            "Task '{}' marked {} ({}/{} done)",
            id,
            if *completed { "complete" } else { "incomplete" },
            summary.completed,
            summary.total
        ),
        ChecklistEvent::ActionRequested { id } => format!("Action requested for task '{}'", id),
        ChecklistEvent::CollapseChanged(state) => format!("Task list now {:?}", state),
        ChecklistEvent::AutoCollapseArmed(pending) => {
            format!("Auto-collapse {} armed for {}ms", pending.ticket, pending.delay_ms)
        }
        ChecklistEvent::AutoCollapseCancelled(ticket) => format!("Auto-collapse {} cancelled", ticket),
    };
    Logger::debug_with_component(COMPONENT, &message);
}

#[derive(Clone)]
pub struct UseChecklistHandle {
    state: UseReducerHandle<ChecklistState>,
    on_action: Option<Callback<Task>>,
}

impl UseChecklistHandle {
    pub fn checklist(&self) -> Result<&Checklist, &ChecklistError> {
        self.state.checklist.as_ref()
    }

    pub fn toggle(&self, id: String) {
        self.state.dispatch(ChecklistAction::Toggle(id));
    }

    pub fn set_collapsed(&self, collapsed: bool) {
        self.state.dispatch(ChecklistAction::SetCollapsed(collapsed));
    }

    /// Forward the task to the host's action callback, if the task allows it
    pub fn trigger_action(&self, id: &str) {
        let Ok(checklist) = self.checklist() else {
            return;
        };

        let result = checklist.trigger_action(id, |task| {
            if let Some(on_action) = &self.on_action {
                on_action.emit(task.clone());
            }
        });

        match result {
            Ok(event) => log_event(&event),
            Err(e) => Logger::warn_with_component(COMPONENT, &format!("Action rejected: {}", e)),
        }
    }
}

/// Start the timer for `pending`. Dropping the returned `Timeout` cancels it.
fn schedule_collapse<F>(pending: Option<PendingCollapse>, on_fire: F) -> Option<Timeout>
where
    F: FnOnce(CollapseTicket) + 'static,
{
    pending.map(|pending| {
        let ticket = pending.ticket;
        Timeout::new(pending.delay_ms, move || on_fire(ticket))
    })
}

/// Hook owning a checklist and its auto-collapse timer.
///
/// The checklist is built once from the first render's arguments. The
/// pending auto-collapse, if any, is backed by a `Timeout` owned by an effect;
/// the effect cleanup drops it (cancelling the timer) whenever the pending
/// ticket changes or the component unmounts.
#[hook]
pub fn use_checklist(
    title: String,
    tasks: Vec<Task>,
    config: ChecklistConfig,
    on_action: Option<Callback<Task>>,
) -> UseChecklistHandle {
    let state = use_reducer_eq(move || {
        let checklist = Checklist::with_config(title, tasks, config);
        if let Err(e) = &checklist {
            Logger::error_with_component(COMPONENT, &format!("Invalid checklist: {}", e));
        }
        ChecklistState { checklist }
    });

    let pending = state
        .checklist
        .as_ref()
        .ok()
        .and_then(|checklist| checklist.pending_collapse());

    {
        let dispatcher = state.dispatcher();
        use_effect_with(pending, move |pending| {
            let timeout = schedule_collapse(*pending, move |ticket| {
                dispatcher.dispatch(ChecklistAction::FireAutoCollapse(ticket));
            });

            move || drop(timeout)
        });
    }

    // Latest checklist, read by the unmount cleanup
    let latest = use_mut_ref(|| None::<Checklist>);
    *latest.borrow_mut() = state.checklist.as_ref().ok().cloned();

    use_effect_with((), move |_| {
        move || {
            if let Some(event) = latest.borrow_mut().as_mut().and_then(Checklist::teardown) {
                log_event(&event);
            }
            Logger::debug_with_component(COMPONENT, "Checklist torn down");
        }
    });

    UseChecklistHandle { state, on_action }
}
