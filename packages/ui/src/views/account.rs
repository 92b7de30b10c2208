use dioxus::prelude::*;

use crate::use_auth;

/// Account summary shown after a profile update.
#[component]
pub fn AccountView(
    /// Called when the user asks to edit their profile.
    on_edit: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let name = auth().display_name.unwrap_or_else(|| "there".to_string());

    rsx! {
        div {
            class: "view-page max-w-3xl mx-auto w-full",

            h1 { class: "view-title", "Account" }

            p { "Hello, {name}!" }

            button {
                class: "btn btn-primary mt-3",
                onclick: move |_| on_edit.call(()),
                "Edit Profile"
            }
        }
    }
}
