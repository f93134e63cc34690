//! Modal create forms
//!
//! A dialog is opened by linking to its page with `?dialog=new` and closed by
//! linking back without it. Submitting posts the form to the page itself.

use super::filter_bar::SelectOption;
use leptos::prelude::*;

/// Query value that opens a page's create dialog
pub const OPEN_DIALOG: &str = "new";

/// Link that opens the dialog on `page`
#[must_use]
pub fn open_href(page: &str) -> String {
    format!("{page}?dialog={OPEN_DIALOG}")
}

/// Modal frame with a title, a form body and Cancel/submit actions
#[component]
pub fn Dialog(
    /// Heading of the modal
    title: &'static str,
    /// Page the form posts to and Cancel returns to
    action: &'static str,
    /// Text of the submit button
    submit_label: &'static str,
    /// Form fields
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop">
            <div class="dialog" role="dialog" aria-modal="true">
                <h2 class="dialog-title">{title}</h2>
                <form method="post" action=action class="dialog-form">
                    {children()}
                    <div class="dialog-actions">
                        <a href=action class="btn btn-outline">"Cancel"</a>
                        <button type="submit" class="btn btn-primary">{submit_label}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Labelled single-line input
#[component]
pub fn TextField(
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=name>{label}</label>
            <input type="text" id=name name=name placeholder=placeholder/>
        </div>
    }
}

/// Labelled multi-line input
#[component]
pub fn TextAreaField(
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=name>{label}</label>
            <textarea id=name name=name placeholder=placeholder rows="3"></textarea>
        </div>
    }
}

/// Labelled dropdown with a disabled prompt option
#[component]
pub fn SelectField(
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: Vec<SelectOption>,
) -> impl IntoView {
    let rows = options
        .into_iter()
        .map(|option| view! { <option value=option.value>{option.label}</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="field">
            <label for=name>{label}</label>
            <select id=name name=name>
                <option value="" disabled=true selected=true>{placeholder}</option>
                {rows}
            </select>
        </div>
    }
}
