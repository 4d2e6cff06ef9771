use chrono::NaiveDate;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub gym_name: AttrValue,
    pub member_count: usize,
    pub today: NaiveDate,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{format!("{} Manager", props.gym_name)}</h1>
                <div class="header-right">
                    <div class="member-count">
                        <span class="member-count-label">{"Active Members:"}</span>
                        <span class="member-count-value">{props.member_count.to_string()}</span>
                    </div>
                    <div class="header-date">{props.today.format("%A, %B %-d, %Y").to_string()}</div>
                </div>
            </div>
        </header>
    }
}
