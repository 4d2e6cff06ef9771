pub mod use_checklist;

pub use use_checklist::use_checklist;
