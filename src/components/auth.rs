// src/components/auth.rs
//
// MediClinic Web - Login / registration dialog
//

use leptos::*;

use crate::models::{AuthAction, AuthRequest};
use crate::session;
use crate::state::ClinicState;

#[component]
pub fn AuthDialog(state: ClinicState) -> impl IntoView {
    let mode = create_rw_signal(AuthAction::Login);
    let full_name = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    let clear_fields = move || {
        full_name.set(String::new());
        phone.set(String::new());
        email.set(String::new());
        password.set(String::new());
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let req = match mode.get_untracked() {
            AuthAction::Login => {
                AuthRequest::login(email.get_untracked(), password.get_untracked())
            }
            AuthAction::Register => AuthRequest::register(
                full_name.get_untracked(),
                phone.get_untracked(),
                email.get_untracked(),
                password.get_untracked(),
            ),
        };

        spawn_local(async move {
            if session::authenticate(state, req).await {
                state.auth_open.set(false);
                clear_fields();
            }
        });
    };

    view! {
        <Show when=move || state.auth_open.get() fallback=|| view! {}>
            <div class="dialog-overlay" on:click=move |_| state.auth_open.set(false)>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="dialog-header">
                        <h3 class="dialog-title">
                            {move || match mode.get() {
                                AuthAction::Login => "Вход",
                                AuthAction::Register => "Регистрация",
                            }}
                        </h3>
                        <p class="dialog-subtitle">
                            {move || match mode.get() {
                                AuthAction::Login => "Войдите в личный кабинет",
                                AuthAction::Register => "Создайте учетную запись",
                            }}
                        </p>
                    </div>

                    <form class="dialog-form" on:submit=on_submit>
                        <Show when=move || mode.get() == AuthAction::Register fallback=|| view! {}>
                            <label class="field">
                                <span class="field-label">"ФИО"</span>
                                <input
                                    type="text"
                                    required
                                    prop:value=move || full_name.get()
                                    on:input=move |ev| full_name.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                <span class="field-label">"Телефон"</span>
                                <input
                                    type="tel"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                />
                            </label>
                        </Show>

                        <label class="field">
                            <span class="field-label">"Email"</span>
                            <input
                                type="email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="field">
                            <span class="field-label">"Пароль"</span>
                            <input
                                type="password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>

                        <button type="submit" class="btn btn-primary btn-block">
                            {move || match mode.get() {
                                AuthAction::Login => "Войти",
                                AuthAction::Register => "Зарегистрироваться",
                            }}
                        </button>

                        <button
                            type="button"
                            class="btn-link"
                            on:click=move |_| {
                                mode.update(|m| {
                                    *m = match m {
                                        AuthAction::Login => AuthAction::Register,
                                        AuthAction::Register => AuthAction::Login,
                                    }
                                })
                            }
                        >
                            {move || match mode.get() {
                                AuthAction::Login => "Нет аккаунта? Зарегистрируйтесь",
                                AuthAction::Register => "Уже есть аккаунт? Войдите",
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
