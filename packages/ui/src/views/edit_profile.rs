use api::models::parse_date;
use api::{submit_attempt, EditSession, LoadError, LoadState, ProfileLoader, UserRecord};
use dioxus::prelude::*;

use crate::{account_client, notify, use_auth, AuthIdentity};

/// Shared profile editing view.
///
/// Loads the signed-in account once, lets the user edit name, email,
/// qualification, date of birth and password, and submits a partial update.
/// Platform packages decide where to go once the update is saved.
#[component]
pub fn EditProfileView(
    /// Called after the server accepted the update.
    on_saved: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let mut load_state = use_signal(LoadState::default);
    let mut session = use_signal(|| Option::<EditSession>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Runs once on mount; `peek` keeps renames from triggering a reload.
    let _loader = use_resource(move || async move {
        let Some((user_id, token)) = auth.peek().credentials() else {
            load_state.set(LoadState::Failed(LoadError::Status(401)));
            return;
        };

        let loader = ProfileLoader::new(account_client());
        let result = loader.load(&user_id, &token).await;
        if let Ok(record) = &result {
            session.set(Some(EditSession::new(user_id, record.clone())));
        }
        load_state.set(result.into());
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(attempt) = session.write().as_mut().and_then(EditSession::begin_submit) else {
                return;
            };
            error.set(None);

            let token = auth.peek().auth_token.clone().unwrap_or_default();
            let mut identity = AuthIdentity::new(auth);
            let today = chrono::Local::now().date_naive();
            let outcome =
                submit_attempt(&account_client(), &mut identity, &token, attempt, today).await;

            if let Some(current) = session.write().as_mut() {
                current.finish_submit();
            }

            match outcome {
                Ok(_) => {
                    notify("Profile updated successfully!");
                    on_saved.call(());
                }
                Err(e) => {
                    let message = e.to_string();
                    notify(&message);
                    error.set(Some(message));
                }
            }
        });
    };

    let current = session.read().clone();

    rsx! {
        div {
            class: "view-page max-w-3xl mx-auto w-full",

            h1 { class: "view-title", "Edit Profile" }

            if let Some(current) = current {
                form {
                    onsubmit: handle_submit,
                    class: "flex flex-col gap-3",

                    if let Some(err) = error() {
                        div {
                            class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                            "{err}"
                        }
                    }

                    label { r#for: "full_name", "Full Name" }
                    input {
                        id: "full_name",
                        r#type: "text",
                        value: text(&current.edited.full_name),
                        oninput: move |evt: FormEvent| edit(session, |s| s.edited.full_name = Some(evt.value())),
                    }

                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        value: text(&current.edited.email),
                        oninput: move |evt: FormEvent| edit(session, |s| s.edited.email = Some(evt.value())),
                    }

                    label { r#for: "qualification", "Qualification" }
                    input {
                        id: "qualification",
                        r#type: "text",
                        value: text(&current.edited.qualification),
                        oninput: move |evt: FormEvent| edit(session, |s| s.edited.qualification = Some(evt.value())),
                    }

                    label { r#for: "dob", "Date of Birth" }
                    input {
                        id: "dob",
                        r#type: "date",
                        value: date_text(&current.edited),
                        oninput: move |evt: FormEvent| edit(session, |s| s.edited.date_of_birth = parse_date(&evt.value())),
                    }

                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        value: current.password.clone(),
                        oninput: move |evt: FormEvent| edit(session, |s| s.password = evt.value()),
                    }

                    label { r#for: "confirm_password", "Confirm Password" }
                    input {
                        id: "confirm_password",
                        r#type: "password",
                        value: current.confirm_password.clone(),
                        oninput: move |evt: FormEvent| edit(session, |s| s.confirm_password = evt.value()),
                    }

                    button {
                        class: "btn btn-primary mt-3",
                        r#type: "submit",
                        disabled: current.is_submitting(),
                        if current.is_submitting() { "Updating..." } else { "Update Profile" }
                    }
                }
            } else if let LoadState::Failed(_) = load_state() {
                div { class: "alert alert-danger", "Failed to load account details." }
            } else {
                p { class: "view-muted", "Loading account..." }
            }
        }
    }
}

fn edit(mut session: Signal<Option<EditSession>>, apply: impl FnOnce(&mut EditSession)) {
    if let Some(current) = session.write().as_mut() {
        apply(current);
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn date_text(record: &UserRecord) -> String {
    record
        .date_of_birth
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
