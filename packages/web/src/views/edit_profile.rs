//! Profile editing page.

use dioxus::prelude::*;
use ui::views::EditProfileView;

use crate::Route;

/// Edit page; returns to the account summary once the update is saved.
#[component]
pub fn EditProfile() -> Element {
    let nav = use_navigator();

    rsx! {
        EditProfileView {
            on_saved: move |_| {
                nav.push(Route::Account {});
            },
        }
    }
}
