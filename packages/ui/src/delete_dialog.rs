use dioxus::prelude::*;

/// Confirmation dialog shown before deleting an entity.
#[component]
pub fn DeleteConfirm(
    heading: String,
    message: String,
    busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "modal-dialog",
                h2 { "{heading}" }
                p { "{message}" }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
