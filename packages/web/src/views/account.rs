use dioxus::prelude::*;
use ui::views::AccountView;

use crate::Route;

#[component]
pub fn Account() -> Element {
    let nav = use_navigator();

    rsx! {
        AccountView {
            on_edit: move |_| {
                nav.push(Route::EditProfile {});
            },
        }
    }
}
