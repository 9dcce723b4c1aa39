// src/components/header.rs
//
// MediClinic Web - Header with navigation and session box
//

use leptos::*;

use crate::session;
use crate::state::{ClinicState, Section};

#[component]
pub fn Header(state: ClinicState) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-brand" on:click=move |_| state.navigate(Section::Home)>
                <span class="header-icon">"♥"</span>
                <h1 class="header-title">"МедиКлиника"</h1>
            </div>

            <nav class="header-nav">
                <For
                    each=|| Section::ALL
                    key=|section| section.label()
                    children=move |section| {
                        view! {
                            <button
                                class=move || {
                                    if state.section.get() == section {
                                        "nav-link active"
                                    } else {
                                        "nav-link"
                                    }
                                }
                                on:click=move |_| state.navigate(section)
                            >
                                {section.label()}
                            </button>
                        }
                    }
                />
            </nav>

            <div class="header-session">
                <Show
                    when=move || state.user.get().is_some()
                    fallback=move || {
                        view! {
                            <button class="btn btn-primary" on:click=move |_| state.auth_open.set(true)>
                                "Войти"
                            </button>
                        }
                    }
                >
                    <span class="session-name">
                        {move || state.user.get().map(|u| u.full_name).unwrap_or_default()}
                    </span>
                    <button class="btn btn-outline" on:click=move |_| session::logout(state)>
                        "Выйти"
                    </button>
                </Show>
            </div>
        </header>
    }
}
