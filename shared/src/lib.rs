//! Domain models and view logic shared by the gym manager frontend.
//!
//! Everything in this crate is plain data plus arithmetic over it, so it can
//! be unit tested natively without a browser.

pub mod catalog;
pub mod checklist;
pub mod leaderboard;
pub mod member;
pub mod revenue;

pub use catalog::{CatalogError, Service, ServiceCatalog, ServiceCategory};
pub use checklist::{
    ActionUnavailableReason, Checklist, ChecklistConfig, ChecklistError, ChecklistEvent,
    CollapseState, CollapseTicket, PendingCollapse, ProgressSummary, Task,
};
pub use leaderboard::{rank_entries, LeaderboardEntry, RankedEntry};
pub use member::{Member, MembershipPlan};
pub use revenue::{CategoryRevenue, MonthlyRevenue, RevenueAnalysis, RevenueRecord, YearMonth};
