// src/session.rs
//
// MediClinic Web - Session manager
// Persists the auth token and user record in localStorage under fixed keys.
//

use gloo_storage::{LocalStorage, Storage};
use leptos::SignalGetUntracked;

use crate::api;
use crate::models::{AuthAction, AuthRequest, User};
use crate::state::ClinicState;

const TOKEN_KEY: &str = "authToken";
const USER_KEY: &str = "user";

/// Restore the session at startup. The stored record is trusted without a
/// round-trip to the server; both keys must be present, otherwise the
/// session stays anonymous.
pub fn restore(state: ClinicState) {
    let token: Result<String, _> = LocalStorage::get(TOKEN_KEY);
    let user: Result<User, _> = LocalStorage::get(USER_KEY);

    if let (Ok(_token), Ok(user)) = (token, user) {
        log::info!("session restored for {}", user.email);
        state.set_user(Some(user));
    }
}

/// Login or register, depending on `req.action`. Returns true on success so
/// the dialog can close and clear itself.
pub async fn authenticate(state: ClinicState, req: AuthRequest) -> bool {
    let cfg = state.config.get_untracked();

    match api::authenticate(&cfg, &req).await {
        Ok(auth) => {
            if let Err(err) = persist(&auth.token, &auth.user) {
                log::warn!("session persist failed: {err}");
            }

            let title = match req.action {
                AuthAction::Login => "Вход выполнен",
                AuthAction::Register => "Регистрация успешна",
            };
            state.notify_success(title, &format!("Добро пожаловать, {}!", auth.user.full_name));
            state.set_user(Some(auth.user));
            true
        }
        Err(err) => {
            // Rejected credentials and transport failures share this path
            state.notify_error("Ошибка", &err.to_string());
            false
        }
    }
}

/// Unconditional: clears storage and the in-memory session.
pub fn logout(state: ClinicState) {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
    state.set_user(None);
    state.notify_success("Выход выполнен", "");
}

fn persist(token: &str, user: &User) -> Result<(), gloo_storage::errors::StorageError> {
    LocalStorage::set(TOKEN_KEY, token)?;
    LocalStorage::set(USER_KEY, user)?;
    Ok(())
}
