use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Membership plan a member is enrolled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipPlan {
    Basic,
    Premium,
    Elite,
}

impl MembershipPlan {
    pub fn label(&self) -> &'static str {
        match self {
            MembershipPlan::Basic => "Basic",
            MembershipPlan::Premium => "Premium",
            MembershipPlan::Elite => "Elite",
        }
    }
}

/// A gym member as shown in the admin views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub plan: MembershipPlan,
    pub joined_on: NaiveDate,
}

impl Member {
    /// Generate a member ID based on timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("member::{}", epoch_millis)
    }

    /// Whether the text typed into the delete dialog confirms this member.
    /// Surrounding whitespace and letter case are ignored.
    pub fn confirms_deletion(&self, typed: &str) -> bool {
        let typed = typed.trim();
        !typed.is_empty() && typed.to_lowercase() == self.name.trim().to_lowercase()
    }

    /// "March 3, 2024"
    pub fn joined_display(&self) -> String {
        self.joined_on.format("%B %-d, %Y").to_string()
    }
}
