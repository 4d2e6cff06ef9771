use shared::{rank_entries, LeaderboardEntry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LeaderboardProps {
    pub entries: Vec<LeaderboardEntry>,
    #[prop_or(AttrValue::Static("Top Members"))]
    pub title: AttrValue,
    /// Show at most this many rows
    #[prop_or_default]
    pub limit: Option<usize>,
}

#[function_component(Leaderboard)]
pub fn leaderboard(props: &LeaderboardProps) -> Html {
    let ranked = use_memo(props.entries.clone(), |entries| rank_entries(entries));
    let limit = props.limit.unwrap_or(ranked.len());

    html! {
        <section class="leaderboard-section">
            <h2>{props.title.clone()}</h2>

            {if ranked.is_empty() {
                html! { <div class="empty-state">{"No check-ins recorded yet"}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="leaderboard-table">
                            <thead>
                                <tr>
                                    <th>{"Rank"}</th>
                                    <th>{"Member"}</th>
                                    <th>{"Check-ins"}</th>
                                    <th>{"Points"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for ranked.iter().take(limit).map(|ranked_entry| {
                                    let row_class = if ranked_entry.is_podium() { "podium" } else { "" };
                                    let rank_label = match ranked_entry.medal() {
                                        Some(medal) => format!("{} {}", medal, ranked_entry.rank),
                                        None => ranked_entry.rank.to_string(),
                                    };

                                    html! {
                                        <tr key={ranked_entry.entry.member_id.clone()} class={row_class}>
                                            <td class="rank">{rank_label}</td>
                                            <td class="name">{&ranked_entry.entry.name}</td>
                                            <td class="check-ins">{ranked_entry.entry.check_ins.to_string()}</td>
                                            <td class="points">{ranked_entry.entry.points.to_string()}</td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
