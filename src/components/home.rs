// src/components/home.rs
//
// MediClinic Web - Landing panel
//

use leptos::*;

use crate::state::{ClinicState, Section};

#[component]
pub fn Home(state: ClinicState) -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero">
                <h2 class="hero-title">"Забота о вашем здоровье"</h2>
                <p class="hero-lead">
                    "Современная медицинская клиника с опытными врачами и новейшим оборудованием"
                </p>
                <div class="hero-actions">
                    <button
                        class="btn btn-primary btn-lg"
                        on:click=move |_| state.navigate(Section::Appointments)
                    >
                        "Записаться на прием"
                    </button>
                    <button
                        class="btn btn-outline btn-lg"
                        on:click=move |_| state.navigate(Section::Doctors)
                    >
                        "Наши врачи"
                    </button>
                </div>
            </section>

            <section class="feature-grid">
                <FeatureCard
                    title="Опытные специалисты"
                    text="Врачи высшей категории с многолетним стажем"
                />
                <FeatureCard
                    title="Удобное время"
                    text="Работаем ежедневно с 8:00 до 21:00"
                />
                <FeatureCard
                    title="Гарантия качества"
                    text="Современное оборудование и проверенные методики"
                />
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="card feature-card">
            <h3 class="card-title">{title}</h3>
            <p class="card-text">{text}</p>
        </div>
    }
}
