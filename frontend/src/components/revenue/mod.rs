pub mod revenue_chart;
pub mod revenue_panel;

pub use revenue_panel::RevenuePanel;
