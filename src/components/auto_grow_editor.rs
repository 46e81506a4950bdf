//! Auto-Growing Text Editor
//!
//! Text input bound to an `EditSession` buffer. Focuses itself when it mounts
//! (which happens when its owner enters edit mode), grows with its content
//! and turns Enter into a commit request.

use leptos::html;
use leptos::prelude::*;

use crate::interaction::{enter_action, EditSession};
use crate::settings::use_settings;

/// Resize a textarea to its content height
fn fit_to_content(area: &web_sys::HtmlTextAreaElement) {
    let style = web_sys::HtmlElement::style(area);
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", area.scroll_height()));
}

/// Editor for the buffer of `session`.
///
/// # Arguments
/// * `single_line` - render an `<input>` instead of a growing `<textarea>`
/// * `reset_height_on_commit` - shrink back to the intrinsic height after a
///   successful commit (creation forms)
/// * `on_enter` - called with `keep_open` on Enter; returns whether the commit
///   was accepted
#[component]
pub fn AutoGrowingTextEditor(
    session: RwSignal<EditSession>,
    #[prop(into)] on_enter: Callback<bool, bool>,
    #[prop(optional)] single_line: bool,
    #[prop(optional)] reset_height_on_commit: bool,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let settings = use_settings();
    let area_ref = NodeRef::<html::Textarea>::new();
    let line_ref = NodeRef::<html::Input>::new();

    // Focus and size once mounted
    Effect::new(move |_| {
        if let Some(area) = area_ref.get() {
            let _ = area.focus();
            fit_to_content(&area);
        }
        if let Some(line) = line_ref.get() {
            let _ = line.focus();
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let modifier_held = settings.keep_open_modifier.is_held(&ev);
        let Some(action) = enter_action(&ev.key(), modifier_held) else {
            return;
        };
        ev.prevent_default();
        ev.stop_propagation();

        let accepted = on_enter.run(action.keep_open);
        tracing::debug!(accepted, keep_open = action.keep_open, "enter in editor");
        if accepted && reset_height_on_commit {
            if let Some(area) = area_ref.get_untracked() {
                let _ = web_sys::HtmlElement::style(&area).set_property("height", "inherit");
            }
        }
    };

    let on_input = move |ev: web_sys::Event| {
        session.update(|s| s.set_buffer(event_target_value(&ev)));
        if let Some(area) = area_ref.get_untracked() {
            fit_to_content(&area);
        }
    };

    let value = move || session.with(|s| s.buffer().to_string());

    if single_line {
        view! {
            <input
                type="text"
                class=class
                node_ref=line_ref
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                on:keydown=on_keydown
                on:click=|ev| ev.stop_propagation()
            />
        }
        .into_any()
    } else {
        view! {
            <textarea
                class=class
                node_ref=area_ref
                placeholder=placeholder
                rows="1"
                prop:value=value
                on:input=on_input
                on:keydown=on_keydown
                on:click=|ev| ev.stop_propagation()
            ></textarea>
        }
        .into_any()
    }
}
