// src/booking.rs
//
// MediClinic Web - Appointment manager
//

use leptos::{SignalGetUntracked, SignalSet};

use crate::api;
use crate::models::NewAppointment;
use crate::state::ClinicState;

/// Refresh the appointment history for `user_id`. The list is scoped to the
/// session user, so a response that arrives after the session changed is
/// dropped rather than applied.
pub async fn load_appointments(state: ClinicState, user_id: i64) {
    let cfg = state.config.get_untracked();

    match api::fetch_appointments(&cfg, user_id).await {
        Ok(list) => {
            let still_current = state.user.get_untracked().map(|u| u.id) == Some(user_id);
            if still_current {
                state.appointments.set(list);
            }
        }
        Err(err) => {
            log::warn!("appointments load failed: {err}");
            state.notify_error("Ошибка", "Не удалось загрузить обращения");
        }
    }
}

/// Create an appointment request for the session user. Returns true on
/// success so the form can reset. No-ops silently while anonymous.
pub async fn submit_appointment(state: ClinicState, service_id: i64, symptoms: String) -> bool {
    let Some(user) = state.user.get_untracked() else {
        return false;
    };

    let cfg = state.config.get_untracked();
    let req = NewAppointment {
        user_id: user.id,
        service_id,
        symptoms,
    };

    match api::create_appointment(&cfg, &req).await {
        Ok(created) => {
            log::info!(
                "appointment {} scheduled for {}",
                created.id,
                created.scheduled_date
            );
            state.notify_success(
                "Обращение создано",
                &format!("Вам назначен врач: {}", created.doctor.name),
            );
            load_appointments(state, user.id).await;
            true
        }
        Err(err) => {
            state.notify_error("Ошибка", &err.to_string());
            false
        }
    }
}
