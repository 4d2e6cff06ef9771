//! Progress checklist state for the onboarding widget.
//!
//! The checklist owns an ordered list of [`Task`]s, derives its progress on
//! every read, and drives a single edge-triggered auto-collapse timer. The
//! timer itself belongs to the host view: the checklist only says which
//! [`PendingCollapse`] should be running, and ignores any ticket that is no
//! longer pending when it fires.
//!
//! Every mutating operation returns the [`ChecklistEvent`]s it produced so the
//! host can log them or re-render.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque key, unique within one checklist
    pub id: String,
    pub label: String,
    pub completed: bool,
    /// When present, an action button is offered while the task is open
    pub action_label: Option<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            completed: false,
            action_label: None,
        }
    }

    pub fn with_action(mut self, action_label: impl Into<String>) -> Self {
        self.action_label = Some(action_label.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Whether the action trigger should be offered for this task
    pub fn action_available(&self) -> bool {
        !self.completed && self.action_label.is_some()
    }
}

/// Tunables for the checklist widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    /// Delay between reaching 100% and the automatic collapse
    pub auto_collapse_delay_ms: u32,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            auto_collapse_delay_ms: 2000,
        }
    }
}

/// Whether the task list below the summary header is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollapseState {
    Expanded,
    Collapsed,
}

impl CollapseState {
    pub fn is_collapsed(&self) -> bool {
        matches!(self, CollapseState::Collapsed)
    }
}

/// Identifies one armed auto-collapse timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollapseTicket(u64);

impl fmt::Display for CollapseTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collapse#{}", self.0)
    }
}

/// The auto-collapse timer the host is expected to be running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCollapse {
    pub ticket: CollapseTicket,
    pub delay_ms: u32,
}

/// Aggregate progress, computed from the tasks on every read
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    /// 0.0 to 100.0, defined as 0.0 for an empty checklist
    pub percent: f64,
}

impl ProgressSummary {
    fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        let percent = if total == 0 {
            0.0
        } else {
            completed as f64 * 100.0 / total as f64
        };

        Self {
            completed,
            total,
            percent,
        }
    }

    /// All tasks done. An empty checklist is never complete.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    /// Percentage for display. Never reads 100 until every task is done.
    pub fn rounded_percent(&self) -> u32 {
        let rounded = self.percent.round() as u32;
        if self.is_complete() {
            rounded
        } else {
            rounded.min(99)
        }
    }
}

/// Notifications emitted by checklist operations
#[derive(Debug, Clone, PartialEq)]
pub enum ChecklistEvent {
    TaskToggled {
        id: String,
        completed: bool,
        summary: ProgressSummary,
    },
    ActionRequested {
        id: String,
    },
    CollapseChanged(CollapseState),
    AutoCollapseArmed(PendingCollapse),
    AutoCollapseCancelled(CollapseTicket),
}

/// Why a task's action could not be triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionUnavailableReason {
    AlreadyCompleted,
    NoAction,
}

impl fmt::Display for ActionUnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionUnavailableReason::AlreadyCompleted => write!(f, "task is already completed"),
            ActionUnavailableReason::NoAction => write!(f, "task has no action"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(String),
    #[error("Unknown task: {0}")]
    UnknownTask(String),
    #[error("Action unavailable for task {id}: {reason}")]
    ActionUnavailable {
        id: String,
        reason: ActionUnavailableReason,
    },
}

/// Ordered, owned task list with collapse state and auto-collapse policy
#[derive(Debug, Clone, PartialEq)]
pub struct Checklist {
    title: String,
    tasks: Vec<Task>,
    collapse: CollapseState,
    config: ChecklistConfig,
    pending: Option<PendingCollapse>,
    // The current 100% episode already armed (or skipped) its auto-collapse
    episode_handled: bool,
    next_ticket: u64,
}

impl Checklist {
    /// Build a checklist with the default configuration
    pub fn new(title: impl Into<String>, tasks: Vec<Task>) -> Result<Self, ChecklistError> {
        Self::with_config(title, tasks, ChecklistConfig::default())
    }

    /// Build a checklist, rejecting duplicate task ids.
    ///
    /// A checklist that starts out fully complete counts as having just
    /// entered the completed state, so its auto-collapse is armed right away.
    pub fn with_config(
        title: impl Into<String>,
        tasks: Vec<Task>,
        config: ChecklistConfig,
    ) -> Result<Self, ChecklistError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id.as_str()) {
                return Err(ChecklistError::DuplicateTaskId(task.id.clone()));
            }
        }

        let mut checklist = Self {
            title: title.into(),
            tasks,
            collapse: CollapseState::Expanded,
            config,
            pending: None,
            episode_handled: false,
            next_ticket: 0,
        };

        let summary = checklist.summary();
        info!(
            title = %checklist.title,
            completed = summary.completed,
            total = summary.total,
            "Checklist initialized"
        );
        for event in checklist.on_progress_changed(false) {
            debug!(?event, "Checklist initialized with event");
        }

        Ok(checklist)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Tasks in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn config(&self) -> &ChecklistConfig {
        &self.config
    }

    pub fn collapse_state(&self) -> CollapseState {
        self.collapse
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapse.is_collapsed()
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::from_tasks(&self.tasks)
    }

    pub fn percent_complete(&self) -> f64 {
        self.summary().percent
    }

    /// The timer the host should currently be running, if any
    pub fn pending_collapse(&self) -> Option<PendingCollapse> {
        self.pending
    }

    /// Flip a task's completion flag. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) -> Vec<ChecklistEvent> {
        let was_complete = self.summary().is_complete();

        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(task_id = id, "Toggle ignored for unknown task");
            return Vec::new();
        };
        task.completed = !task.completed;
        let completed = task.completed;

        let summary = self.summary();
        debug!(
            task_id = id,
            completed,
            percent = summary.percent,
            "Task toggled"
        );

        let mut events = vec![ChecklistEvent::TaskToggled {
            id: id.to_string(),
            completed,
            summary,
        }];
        events.extend(self.on_progress_changed(was_complete));
        events
    }

    /// Hand the task to `on_action` if its action can be triggered.
    ///
    /// The task itself is left untouched; completing it is up to the caller.
    pub fn trigger_action<F>(&self, id: &str, on_action: F) -> Result<ChecklistEvent, ChecklistError>
    where
        F: FnOnce(&Task),
    {
        let task = self
            .task(id)
            .ok_or_else(|| ChecklistError::UnknownTask(id.to_string()))?;

        if task.completed {
            return Err(ChecklistError::ActionUnavailable {
                id: id.to_string(),
                reason: ActionUnavailableReason::AlreadyCompleted,
            });
        }
        if task.action_label.is_none() {
            return Err(ChecklistError::ActionUnavailable {
                id: id.to_string(),
                reason: ActionUnavailableReason::NoAction,
            });
        }

        debug!(task_id = id, "Task action requested");
        on_action(task);

        Ok(ChecklistEvent::ActionRequested { id: id.to_string() })
    }

    /// Show or hide the task list. Any pending auto-collapse is dropped,
    /// since the user has taken over.
    pub fn set_collapsed(&mut self, collapsed: bool) -> Vec<ChecklistEvent> {
        let mut events: Vec<ChecklistEvent> = self.cancel_pending().into_iter().collect();

        let target = if collapsed {
            CollapseState::Collapsed
        } else {
            CollapseState::Expanded
        };
        if self.collapse != target {
            self.collapse = target;
            events.push(ChecklistEvent::CollapseChanged(target));
        }

        events
    }

    /// Called by the host when the timer for `ticket` elapses.
    /// Tickets that were cancelled or superseded are ignored.
    pub fn fire_auto_collapse(&mut self, ticket: CollapseTicket) -> Vec<ChecklistEvent> {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                info!(%ticket, title = %self.title, "Auto-collapsing completed checklist");
                if self.collapse.is_collapsed() {
                    Vec::new()
                } else {
                    self.collapse = CollapseState::Collapsed;
                    vec![ChecklistEvent::CollapseChanged(CollapseState::Collapsed)]
                }
            }
            _ => {
                debug!(%ticket, "Ignoring stale auto-collapse");
                Vec::new()
            }
        }
    }

    /// Drop any pending timer before the owning view goes away
    pub fn teardown(&mut self) -> Option<ChecklistEvent> {
        self.cancel_pending()
    }

    fn on_progress_changed(&mut self, was_complete: bool) -> Vec<ChecklistEvent> {
        let is_complete = self.summary().is_complete();

        match (was_complete, is_complete) {
            (false, true) if !self.episode_handled => {
                self.episode_handled = true;
                if self.collapse.is_collapsed() {
                    Vec::new()
                } else {
                    vec![self.arm()]
                }
            }
            (true, false) => {
                self.episode_handled = false;
                self.cancel_pending().into_iter().collect()
            }
            _ => Vec::new(),
        }
    }

    fn arm(&mut self) -> ChecklistEvent {
        let pending = PendingCollapse {
            ticket: CollapseTicket(self.next_ticket),
            delay_ms: self.config.auto_collapse_delay_ms,
        };
        self.next_ticket += 1;
        self.pending = Some(pending);

        debug!(ticket = %pending.ticket, delay_ms = pending.delay_ms, "Auto-collapse armed");
        ChecklistEvent::AutoCollapseArmed(pending)
    }

    fn cancel_pending(&mut self) -> Option<ChecklistEvent> {
        let pending = self.pending.take()?;
        debug!(ticket = %pending.ticket, "Auto-collapse cancelled");
        Some(ChecklistEvent::AutoCollapseCancelled(pending.ticket))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn two_tasks() -> Vec<Task> {
        vec![Task::new("a", "A"), Task::new("b", "B")]
    }

    fn armed_ticket(checklist: &Checklist) -> CollapseTicket {
        checklist
            .pending_collapse()
            .expect("auto-collapse should be armed")
            .ticket
    }

    #[test]
    fn test_new_checklist_starts_expanded() {
        let checklist = Checklist::new("Onboarding", two_tasks()).unwrap();

        assert_eq!(checklist.title(), "Onboarding");
        assert_eq!(checklist.collapse_state(), CollapseState::Expanded);
        assert_eq!(checklist.percent_complete(), 0.0);
        assert!(checklist.pending_collapse().is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let tasks = vec![Task::new("a", "A"), Task::new("b", "B"), Task::new("a", "Again")];

        let result = Checklist::new("Onboarding", tasks);

        assert_eq!(result.unwrap_err(), ChecklistError::DuplicateTaskId("a".to_string()));
    }

    #[test]
    fn test_empty_checklist_is_zero_percent() {
        let checklist = Checklist::new("Nothing to do", Vec::new()).unwrap();
        let summary = checklist.summary();

        assert_eq!(summary.total, 0);
        assert_eq!(summary.percent, 0.0);
        assert!(!summary.is_complete());
        assert!(checklist.tasks().is_empty());
        assert!(checklist.pending_collapse().is_none());
    }

    #[test]
    fn test_percentage_follows_every_toggle() {
        let tasks = vec![Task::new("a", "A"), Task::new("b", "B"), Task::new("c", "C")];
        let mut checklist = Checklist::new("Three", tasks).unwrap();

        checklist.toggle("a");
        assert!((checklist.percent_complete() - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(checklist.summary().rounded_percent(), 33);

        checklist.toggle("c");
        assert!((checklist.percent_complete() - 200.0 / 3.0).abs() < 1e-9);

        checklist.toggle("a");
        assert!((checklist.percent_complete() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_nearly_done_checklist_never_shows_full_percent() {
        let tasks: Vec<Task> = (0..200)
            .map(|i| Task::new(format!("t{}", i), format!("Task {}", i)).with_completed(i != 0))
            .collect();
        let mut checklist = Checklist::new("Long", tasks).unwrap();

        let summary = checklist.summary();
        assert_eq!(summary.completed, 199);
        assert!(!summary.is_complete());
        assert_eq!(summary.rounded_percent(), 99);

        checklist.toggle("t0");
        assert_eq!(checklist.summary().rounded_percent(), 100);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut checklist = Checklist::new("Onboarding", two_tasks()).unwrap();
        let before = checklist.tasks().to_vec();

        checklist.toggle("b");
        assert!(checklist.task("b").unwrap().completed);
        assert!(!checklist.task("a").unwrap().completed);

        checklist.toggle("b");
        assert_eq!(checklist.tasks(), before.as_slice());
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut checklist = Checklist::new("Onboarding", two_tasks()).unwrap();
        let before = checklist.clone();

        let events = checklist.toggle("missing");

        assert!(events.is_empty());
        assert_eq!(checklist, before);
    }

    #[test]
    fn test_toggle_reports_progress() {
        let mut checklist = Checklist::new("Onboarding", two_tasks()).unwrap();

        let events = checklist.toggle("a");

        assert_eq!(
            events,
            vec![ChecklistEvent::TaskToggled {
                id: "a".to_string(),
                completed: true,
                summary: ProgressSummary {
                    completed: 1,
                    total: 2,
                    percent: 50.0,
                },
            }]
        );
    }

    #[test]
    fn test_toggle_preserves_order() {
        let tasks = vec![Task::new("z", "Last alphabetically"), Task::new("a", "First")];
        let mut checklist = Checklist::new("Order", tasks).unwrap();

        checklist.toggle("z");

        let ids: Vec<&str> = checklist.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a"]);
    }

    #[test]
    fn test_trigger_action_passes_task_once() {
        let tasks = vec![Task::new("waiver", "Sign waiver").with_action("Open waiver")];
        let checklist = Checklist::new("Onboarding", tasks).unwrap();
        let received = RefCell::new(Vec::new());

        let event = checklist
            .trigger_action("waiver", |task| received.borrow_mut().push(task.clone()))
            .unwrap();

        assert_eq!(event, ChecklistEvent::ActionRequested { id: "waiver".to_string() });
        assert_eq!(received.borrow().len(), 1);
        assert_eq!(received.borrow()[0], checklist.tasks()[0]);
        assert!(!checklist.task("waiver").unwrap().completed);
    }

    #[test]
    fn test_trigger_action_rejected_when_completed() {
        let tasks = vec![Task::new("waiver", "Sign waiver")
            .with_action("Open waiver")
            .with_completed(true)];
        let checklist = Checklist::new("Onboarding", tasks).unwrap();
        let mut calls = 0;

        let result = checklist.trigger_action("waiver", |_| calls += 1);

        assert_eq!(
            result.unwrap_err(),
            ChecklistError::ActionUnavailable {
                id: "waiver".to_string(),
                reason: ActionUnavailableReason::AlreadyCompleted,
            }
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_trigger_action_rejected_without_action_label() {
        let checklist = Checklist::new("Onboarding", two_tasks()).unwrap();
        let mut calls = 0;

        let result = checklist.trigger_action("a", |_| calls += 1);

        assert!(matches!(
            result,
            Err(ChecklistError::ActionUnavailable {
                reason: ActionUnavailableReason::NoAction,
                ..
            })
        ));
        assert_eq!(calls, 0);

        let result = checklist.trigger_action("missing", |_| calls += 1);
        assert_eq!(result.unwrap_err(), ChecklistError::UnknownTask("missing".to_string()));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_completion_scenario_collapses_after_timer() {
        let mut checklist = Checklist::new("Onboarding", two_tasks()).unwrap();
        assert_eq!(checklist.percent_complete(), 0.0);

        checklist.toggle("a");
        assert_eq!(checklist.percent_complete(), 50.0);
        assert!(checklist.task("a").unwrap().completed);
        assert!(checklist.pending_collapse().is_none());

        let events = checklist.toggle("b");
        assert_eq!(checklist.percent_complete(), 100.0);
        let pending = checklist.pending_collapse().unwrap();
        assert_eq!(pending.delay_ms, 2000);
        assert!(events.contains(&ChecklistEvent::AutoCollapseArmed(pending)));
        assert_eq!(checklist.collapse_state(), CollapseState::Expanded);

        let events = checklist.fire_auto_collapse(pending.ticket);
        assert_eq!(events, vec![ChecklistEvent::CollapseChanged(CollapseState::Collapsed)]);
        assert!(checklist.is_collapsed());
        assert!(checklist.pending_collapse().is_none());
    }

    #[test]
    fn test_expanding_before_timer_cancels_collapse() {
        let mut checklist = Checklist::new("Onboarding", two_tasks()).unwrap();
        checklist.toggle("a");
        checklist.toggle("b");
        let ticket = armed_ticket(&checklist);

        let events = checklist.set_collapsed(false);
        assert_eq!(events, vec![ChecklistEvent::AutoCollapseCancelled(ticket)]);

        assert!(checklist.fire_auto_collapse(ticket).is_empty());
        assert_eq!(checklist.collapse_state(), CollapseState::Expanded);
    }

    #[test]
    fn test_untoggle_before_timer_cancels_collapse() {
        let mut checklist = Checklist::new("Onboarding", two_tasks()).unwrap();
        checklist.toggle("a");
        checklist.toggle("b");
        let ticket = armed_ticket(&checklist);

        let events = checklist.toggle("b");
        assert!(events.contains(&ChecklistEvent::AutoCollapseCancelled(ticket)));
        assert!(checklist.pending_collapse().is_none());

        assert!(checklist.fire_auto_collapse(ticket).is_empty());
        assert_eq!(checklist.collapse_state(), CollapseState::Expanded);
    }

    #[test]
    fn test_manual_expand_after_auto_collapse_does_not_rearm() {
        let mut checklist = Checklist::new("Onboarding", two_tasks()).unwrap();
        checklist.toggle("a");
        checklist.toggle("b");
        let ticket = armed_ticket(&checklist);
        checklist.fire_auto_collapse(ticket);

        checklist.set_collapsed(false);
        assert!(!checklist.is_collapsed());
        assert!(checklist.pending_collapse().is_none());

        // Still at 100%: toggling an unknown task must not re-arm either
        checklist.toggle("missing");
        assert!(checklist.pending_collapse().is_none());
    }

    #[test]
    fn test_reentering_completion_rearms_with_new_ticket() {
        let mut checklist = Checklist::new("Onboarding", two_tasks()).unwrap();
        checklist.toggle("a");
        checklist.toggle("b");
        let first = armed_ticket(&checklist);
        checklist.fire_auto_collapse(first);
        checklist.set_collapsed(false);

        checklist.toggle("b");
        checklist.toggle("b");

        let second = armed_ticket(&checklist);
        assert_ne!(first, second);
        assert!(checklist.fire_auto_collapse(first).is_empty());
        assert!(!checklist.is_collapsed());

        checklist.fire_auto_collapse(second);
        assert!(checklist.is_collapsed());
    }

    #[test]
    fn test_completing_while_collapsed_does_not_arm() {
        let mut checklist = Checklist::new("Onboarding", two_tasks()).unwrap();
        checklist.set_collapsed(true);

        checklist.toggle("a");
        checklist.toggle("b");
        assert!(checklist.pending_collapse().is_none());

        checklist.set_collapsed(false);
        assert!(checklist.pending_collapse().is_none());
        assert!(!checklist.is_collapsed());
    }

    #[test]
    fn test_initially_complete_checklist_arms_once() {
        let tasks = vec![Task::new("a", "A").with_completed(true)];
        let config = ChecklistConfig {
            auto_collapse_delay_ms: 500,
        };
        let mut checklist = Checklist::with_config("Done", tasks, config).unwrap();

        let pending = checklist.pending_collapse().unwrap();
        assert_eq!(pending.delay_ms, 500);

        checklist.fire_auto_collapse(pending.ticket);
        assert!(checklist.is_collapsed());
        assert!(checklist.pending_collapse().is_none());
    }

    #[test]
    fn test_collapse_round_trip_keeps_tasks() {
        let mut checklist = Checklist::new("Onboarding", two_tasks()).unwrap();
        checklist.toggle("a");
        let before = checklist.tasks().to_vec();

        assert_eq!(
            checklist.set_collapsed(true),
            vec![ChecklistEvent::CollapseChanged(CollapseState::Collapsed)]
        );
        assert!(checklist.is_collapsed());

        assert_eq!(
            checklist.set_collapsed(false),
            vec![ChecklistEvent::CollapseChanged(CollapseState::Expanded)]
        );
        assert!(!checklist.is_collapsed());
        assert_eq!(checklist.tasks(), before.as_slice());
    }

    #[test]
    fn test_set_collapsed_to_current_state_emits_nothing() {
        let mut checklist = Checklist::new("Onboarding", two_tasks()).unwrap();

        assert!(checklist.set_collapsed(false).is_empty());
    }

    #[test]
    fn test_teardown_cancels_pending_timer() {
        let mut checklist = Checklist::new("Onboarding", two_tasks()).unwrap();
        checklist.toggle("a");
        checklist.toggle("b");
        let ticket = armed_ticket(&checklist);

        assert_eq!(
            checklist.teardown(),
            Some(ChecklistEvent::AutoCollapseCancelled(ticket))
        );
        assert!(checklist.pending_collapse().is_none());
        assert!(checklist.teardown().is_none());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ChecklistConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ChecklistConfig::default());

        let config: ChecklistConfig =
            serde_json::from_str(r#"{"auto_collapse_delay_ms": 750}"#).unwrap();
        assert_eq!(config.auto_collapse_delay_ms, 750);
    }
}
