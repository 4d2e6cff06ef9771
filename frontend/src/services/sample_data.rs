//! Demo data for the dashboard. The app has no backend, so the host view
//! hands these fixed records to each panel.

use chrono::NaiveDate;
use shared::{LeaderboardEntry, Member, MembershipPlan, RevenueRecord, ServiceCategory, Task};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn onboarding_tasks() -> Vec<Task> {
    vec![
        Task::new("profile", "Complete member profile").with_completed(true),
        Task::new("waiver", "Sign liability waiver").with_action("Open waiver"),
        Task::new("assessment", "Book fitness assessment").with_action("Book now"),
        Task::new("tour", "Take the facility tour"),
        Task::new("app", "Install the member app").with_action("Get the app"),
    ]
}

pub fn members() -> Vec<Member> {
    vec![
        Member {
            id: Member::generate_id(1704103200000),
            name: "Jordan Lee".to_string(),
            email: "jordan.lee@example.com".to_string(),
            plan: MembershipPlan::Premium,
            joined_on: date(2024, 1, 1),
        },
        Member {
            id: Member::generate_id(1706781600000),
            name: "Sam Rivera".to_string(),
            email: "sam.rivera@example.com".to_string(),
            plan: MembershipPlan::Basic,
            joined_on: date(2024, 2, 1),
        },
        Member {
            id: Member::generate_id(1709287200000),
            name: "Priya Shah".to_string(),
            email: "priya.shah@example.com".to_string(),
            plan: MembershipPlan::Elite,
            joined_on: date(2024, 3, 1),
        },
        Member {
            id: Member::generate_id(1711965600000),
            name: "Alex Kim".to_string(),
            email: "alex.kim@example.com".to_string(),
            plan: MembershipPlan::Premium,
            joined_on: date(2024, 4, 1),
        },
    ]
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    members()
        .into_iter()
        .zip([(420, 22), (310, 18), (420, 22), (275, 15)])
        .map(|(member, (points, check_ins))| LeaderboardEntry {
            member_id: member.id,
            name: member.name,
            points,
            check_ins,
        })
        .collect()
}

pub fn revenue_records() -> Vec<RevenueRecord> {
    let monthly = [
        (1, 4200.0, 1300.0, 640.0, 380.0),
        (2, 4350.0, 1560.0, 710.0, 300.0),
        (3, 4610.0, 1170.0, 820.0, 455.0),
        (4, 4780.0, 1820.0, 905.0, 520.0),
        (5, 4920.0, 1950.0, 860.0, 610.0),
        (6, 5100.0, 2210.0, 990.0, 575.0),
    ];

    monthly
        .into_iter()
        .flat_map(|(month, membership, training, classes, wellness)| {
            [
                (ServiceCategory::Membership, membership),
                (ServiceCategory::PersonalTraining, training),
                (ServiceCategory::GroupClass, classes),
                (ServiceCategory::Wellness, wellness),
            ]
            .into_iter()
            .map(move |(category, amount)| RevenueRecord {
                date: date(2024, month, 15),
                category,
                amount,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{rank_entries, Checklist, RevenueAnalysis};

    #[test]
    fn test_onboarding_tasks_form_valid_checklist() {
        let checklist = Checklist::new("Onboarding", onboarding_tasks()).unwrap();
        assert_eq!(checklist.summary().completed, 1);
        assert!(checklist.pending_collapse().is_none());
    }

    #[test]
    fn test_leaderboard_has_shared_first_place() {
        let ranked = rank_entries(&leaderboard());
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_revenue_covers_six_months() {
        let analysis = RevenueAnalysis::from_records(&revenue_records());
        assert_eq!(analysis.monthly().len(), 6);
        assert!(analysis.month_over_month_growth().unwrap() > 0.0);
    }
}
