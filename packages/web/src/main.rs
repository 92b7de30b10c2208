use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Account, EditProfile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/account")]
    Account {},
    #[route("/account/edit")]
    EditProfile {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/account`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Account {});
    rsx! {}
}
