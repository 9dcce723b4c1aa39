// src/app.rs
//
// MediClinic Web - Application shell
//

use leptos::*;

use crate::components::{
    AppointmentsPanel, AuthDialog, DoctorsGrid, FaqList, Header, Home, Schedule, ServicesGrid,
    Toasts,
};
use crate::state::{use_clinic_state, Section};
use crate::{booking, content, session};

#[component]
pub fn App() -> impl IntoView {
    let state = use_clinic_state();

    // Restore the persisted session, then fetch the public content once
    session::restore(state);
    content::load_content(state);

    // Whenever the session holds a user, (re)fetch their appointments.
    // `set_user` already cleared the list on any identity change.
    create_effect(move |_| {
        if let Some(user) = state.user.get() {
            spawn_local(booking::load_appointments(state, user.id));
        }
    });

    view! {
        <div class="clinic-app">
            <Header state=state />
            <Toasts state=state />
            <AuthDialog state=state />

            <main class="page">
                {move || match state.section.get() {
                    Section::Home => view! { <Home state=state /> }.into_view(),
                    Section::Doctors => view! { <DoctorsGrid state=state /> }.into_view(),
                    Section::Services => view! { <ServicesGrid state=state /> }.into_view(),
                    Section::Schedule => view! { <Schedule /> }.into_view(),
                    Section::Appointments => view! { <AppointmentsPanel state=state /> }.into_view(),
                    Section::Faq => view! { <FaqList state=state /> }.into_view(),
                }}
            </main>

            <footer class="footer">
                <div class="footer-columns">
                    <div class="footer-block">
                        <h3 class="footer-heading">"МедиКлиника"</h3>
                        <p>"Забота о вашем здоровье — наша главная миссия"</p>
                    </div>
                    <div class="footer-block">
                        <h4 class="footer-heading">"Контакты"</h4>
                        <p>"+7 (495) 123-45-67"</p>
                        <p>"info@mediclinic.ru"</p>
                        <p>"г. Москва, ул. Здоровья, д. 1"</p>
                    </div>
                    <div class="footer-block">
                        <h4 class="footer-heading">"Режим работы"</h4>
                        <p>"Пн-Пт: 8:00 - 21:00"</p>
                        <p>"Сб: 9:00 - 18:00"</p>
                        <p>"Вс: 10:00 - 16:00"</p>
                    </div>
                </div>
                <p class="footer-note">"© 2025 МедиКлиника. Все права защищены."</p>
            </footer>
        </div>
    }
}
