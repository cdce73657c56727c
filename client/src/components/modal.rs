//! Form modal shell: title, body fields, and Cancel/Save actions.

use leptos::prelude::*;

/// Submitting the form (button or Enter) runs `on_submit`; clicking the
/// backdrop or Cancel runs `on_close`.
#[component]
pub fn FormModal(
    title: Signal<String>,
    #[prop(default = "Save")] submit_label: &'static str,
    on_submit: Callback<()>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form
                class="dialog dialog--form"
                on:click=move |ev| ev.stop_propagation()
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <h2>{move || title.get()}</h2>
                <div class="dialog__body">{children()}</div>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit">
                        {submit_label}
                    </button>
                </div>
            </form>
        </div>
    }
}
