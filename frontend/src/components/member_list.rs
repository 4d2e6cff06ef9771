use shared::Member;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::delete_member_modal::DeleteMemberModal;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct MemberListProps {
    pub members: Vec<Member>,
}

/// Member table with per-row delete. Deletions only affect this view's copy.
#[function_component(MemberList)]
pub fn member_list(props: &MemberListProps) -> Html {
    let members = use_state(|| props.members.clone());
    let pending_delete = use_state(|| Option::<Member>::None);

    let on_close = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| {
            pending_delete.set(None);
        })
    };

    let on_confirm = {
        let members = members.clone();
        let pending_delete = pending_delete.clone();
        Callback::from(move |member_id: String| {
            Logger::info_with_component("member-list", &format!("Deleting member {}", member_id));
            let remaining: Vec<Member> = members
                .iter()
                .filter(|member| member.id != member_id)
                .cloned()
                .collect();
            members.set(remaining);
            pending_delete.set(None);
        })
    };

    html! {
        <section class="members-section">
            <h2>{"Members"}</h2>

            {if members.is_empty() {
                html! { <div class="empty-state">{"No members"}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="members-table">
                            <thead>
                                <tr>
                                    <th>{"Name"}</th>
                                    <th>{"Email"}</th>
                                    <th>{"Plan"}</th>
                                    <th>{"Joined"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for members.iter().map(|member| {
                                    let on_delete = {
                                        let pending_delete = pending_delete.clone();
                                        let member = member.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            pending_delete.set(Some(member.clone()));
                                        })
                                    };

                                    html! {
                                        <tr key={member.id.clone()}>
                                            <td class="name">{&member.name}</td>
                                            <td class="email">{&member.email}</td>
                                            <td class="plan">{member.plan.label()}</td>
                                            <td class="date">{member.joined_display()}</td>
                                            <td class="actions">
                                                <button type="button" class="btn btn-link delete-btn" onclick={on_delete}>
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}

            <DeleteMemberModal
                is_open={pending_delete.is_some()}
                member={(*pending_delete).clone()}
                on_confirm={on_confirm}
                on_close={on_close}
            />
        </section>
    }
}
