use shared::Member;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DeleteMemberModalProps {
    pub is_open: bool,
    pub member: Option<Member>,
    /// Receives the id of the member to delete
    pub on_confirm: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(DeleteMemberModal)]
pub fn delete_member_modal(props: &DeleteMemberModalProps) -> Html {
    let confirmation = use_state(String::new);

    // Reset typed confirmation when modal opens
    use_effect_with(props.is_open, {
        let confirmation = confirmation.clone();
        move |is_open| {
            if *is_open {
                confirmation.set(String::new());
            }
            || ()
        }
    });

    let on_input = {
        let confirmation = confirmation.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            confirmation.set(input.value());
        })
    };

    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    if !props.is_open {
        return html! {};
    }

    let body = match &props.member {
        Some(member) => {
            let confirmed = member.confirms_deletion(&confirmation);

            let on_delete_click = {
                let on_confirm = props.on_confirm.clone();
                let member_id = member.id.clone();
                Callback::from(move |_: MouseEvent| {
                    if confirmed {
                        on_confirm.emit(member_id.clone());
                    }
                })
            };

            html! {
                <>
                    <p class="delete-warning">
                        {"This permanently removes "}
                        <strong>{&member.name}</strong>
                        {format!(" ({} plan, member since {}) and cannot be undone.", member.plan.label(), member.joined_display())}
                    </p>
                    <label class="delete-confirm-label" for="delete-member-confirm">
                        {"Type the member's name to confirm:"}
                    </label>
                    <input
                        id="delete-member-confirm"
                        type="text"
                        class="delete-confirm-input"
                        placeholder={member.name.clone()}
                        value={(*confirmation).clone()}
                        oninput={on_input}
                        autofocus=true
                    />
                    <div class="delete-modal-buttons">
                        <button
                            type="button"
                            class="btn btn-danger"
                            disabled={!confirmed}
                            onclick={on_delete_click}
                        >
                            {"Delete member"}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                            {"Cancel"}
                        </button>
                    </div>
                </>
            }
        }
        None => html! {
            <>
                <div class="delete-no-member">
                    <p>{"No member selected"}</p>
                </div>
                <div class="delete-modal-buttons">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                        {"Close"}
                    </button>
                </div>
            </>
        },
    };

    html! {
        <div class="delete-modal-backdrop" onclick={on_backdrop_click}>
            <div class="delete-modal" onclick={on_modal_click}>
                <div class="delete-modal-content">
                    <h3 class="delete-title">{"🗑️ Delete Member"}</h3>
                    {body}
                </div>
            </div>
        </div>
    }
}
