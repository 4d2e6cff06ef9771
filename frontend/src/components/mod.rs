pub mod delete_member_modal;
pub mod header;
pub mod leaderboard;
pub mod member_list;
pub mod progress_checklist;
pub mod revenue;
pub mod service_catalog;

pub use header::Header;
pub use leaderboard::Leaderboard;
pub use member_list::MemberList;
pub use progress_checklist::ProgressChecklist;
pub use revenue::RevenuePanel;
pub use service_catalog::ServiceCatalogView;
