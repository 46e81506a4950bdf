//! Task Form Button Component
//!
//! "Add another card" / "Add another list" trigger that opens into a small
//! creation form with a pomodoro counter. The modifier key on Enter keeps the
//! form open for the next entry.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::outside_click::{node_contains, use_activation_region, use_is_active};
use crate::components::{AutoGrowingTextEditor, PomodoroCounter};
use crate::interaction::EditSession;
use crate::settings::use_settings;

/// Creation form with a closed trigger state
///
/// # Arguments
/// * `for_list` - list variant: single-line title input, no scrolling
/// * `on_submit` - called with `(value, pomodoros)` for each accepted entry
#[component]
pub fn TaskFormButton(
    #[prop(optional)] for_list: bool,
    #[prop(into)] on_submit: Callback<(String, u32)>,
) -> impl IntoView {
    let settings = use_settings();
    let form_ref = NodeRef::<html::Form>::new();
    let session = RwSignal::new(EditSession::for_form(settings.new_card_pomodoros));
    let is_open = use_is_active(session);

    use_activation_region(session, move |node| {
        node_contains(form_ref.get_untracked().map(|el| el.unchecked_into()), node)
    });

    // Card forms open at the bottom of a column; bring them into view
    Effect::new(move |_| {
        if !is_open.get() || for_list {
            return;
        }
        if let Some(form) = form_ref.get() {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_block(web_sys::ScrollLogicalPosition::Center);
            form.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let do_submit = move |keep_open: bool| -> bool {
        match session.try_update(|s| s.commit(keep_open)).flatten() {
            Some(committed) => {
                tracing::debug!(keep_open, pomodoros = committed.pomodoros, "creation form submitted");
                on_submit.run((committed.text, committed.pomodoros));
                true
            }
            None => false,
        }
    };

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        do_submit(false);
    };

    let (open_label, placeholder, submit_label) = if for_list {
        ("Add another list", "Enter list title", "Add List")
    } else {
        ("Add another card", "Enter a title for this card...", "Add Card")
    };

    view! {
        <Show
            when=move || is_open.get()
            fallback=move || view! {
                <button
                    class=if for_list { "add-trigger list" } else { "add-trigger card" }
                    on:click=move |_| session.update(|s| s.open_blank())
                >
                    "+ " {open_label}
                </button>
            }
        >
            <form
                class=if for_list { "task-form list" } else { "task-form card" }
                node_ref=form_ref
                on:submit=on_form_submit
            >
                <AutoGrowingTextEditor
                    session=session
                    single_line=for_list
                    reset_height_on_commit=true
                    placeholder=placeholder
                    class="task-form-input"
                    on_enter=move |keep_open: bool| do_submit(keep_open)
                />
                <div class="task-form-pomodoro">
                    <PomodoroCounter session=session />
                </div>
                <div class="task-form-actions">
                    <button type="submit" class="btn-primary">{submit_label}</button>
                    <button
                        type="button"
                        class="btn-cancel"
                        on:click=move |_| session.update(|s| s.close())
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
    }
}
