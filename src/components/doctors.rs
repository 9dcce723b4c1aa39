// src/components/doctors.rs
//
// MediClinic Web - Doctors panel
//

use leptos::*;

use crate::state::ClinicState;

#[component]
pub fn DoctorsGrid(state: ClinicState) -> impl IntoView {
    view! {
        <div class="panel-page">
            <h2 class="panel-heading">"Наши врачи"</h2>
            <div class="card-grid">
                <For
                    each=move || state.doctors.get()
                    key=|doctor| doctor.id
                    children=move |doctor| {
                        view! {
                            <div class="card doctor-card">
                                <div class="doctor-avatar">"👨‍⚕️"</div>
                                <h3 class="card-title">{doctor.full_name.clone()}</h3>
                                <p class="doctor-specialization">{doctor.specialization.clone()}</p>
                                <p class="doctor-experience">
                                    {format!("Стаж: {} лет", doctor.experience_years)}
                                </p>
                                <p class="card-text">{doctor.description.clone()}</p>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
