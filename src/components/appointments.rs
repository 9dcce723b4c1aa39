// src/components/appointments.rs
//
// MediClinic Web - Appointment panel: creation form plus history.
// Anonymous visitors get a login prompt instead.
//

use chrono::{NaiveDate, NaiveDateTime};
use leptos::*;

use crate::booking;
use crate::models::AppointmentStatus;
use crate::state::ClinicState;

#[component]
pub fn AppointmentsPanel(state: ClinicState) -> impl IntoView {
    view! {
        <div class="panel-page">
            <h2 class="panel-heading">"Обращения"</h2>

            <Show
                when=move || state.user.get().is_some()
                fallback=move || {
                    view! {
                        <div class="card login-prompt">
                            <div class="login-prompt-icon">"🔒"</div>
                            <p class="login-prompt-text">"Войдите, чтобы создать обращение"</p>
                            <button class="btn btn-primary" on:click=move |_| state.auth_open.set(true)>
                                "Войти"
                            </button>
                        </div>
                    }
                }
            >
                <div class="appointments-layout">
                    <AppointmentForm state=state />
                    <AppointmentHistory state=state />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn AppointmentForm(state: ClinicState) -> impl IntoView {
    let service_id = create_rw_signal(String::new());
    let symptoms = create_rw_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        // The placeholder option is empty; anything else is a fetched id
        let Ok(id) = service_id.get_untracked().parse::<i64>() else {
            return;
        };
        let text = symptoms.get_untracked();

        spawn_local(async move {
            if booking::submit_appointment(state, id, text).await {
                // try_set: the panel may have been left while the request ran
                service_id.try_set(String::new());
                symptoms.try_set(String::new());
            }
        });
    };

    view! {
        <div class="card appointment-form-card">
            <h3 class="card-title">"Создать обращение"</h3>
            <p class="card-text">"Опишите ваши симптомы, и мы назначим подходящего врача"</p>

            <form class="appointment-form" on:submit=on_submit>
                <label class="field">
                    <span class="field-label">"Услуга"</span>
                    <select
                        required
                        prop:value=move || service_id.get()
                        on:change=move |ev| service_id.set(event_target_value(&ev))
                    >
                        <option value="">"Выберите услугу"</option>
                        <For
                            each=move || state.services.get()
                            key=|service| service.id
                            children=move |service| {
                                view! {
                                    <option value=service.id.to_string()>
                                        {service.title.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>

                <label class="field">
                    <span class="field-label">"Симптомы / Жалобы"</span>
                    <textarea
                        rows="5"
                        required
                        placeholder="Опишите, что вас беспокоит..."
                        prop:value=move || symptoms.get()
                        on:input=move |ev| symptoms.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <button type="submit" class="btn btn-primary btn-block">
                    "Отправить обращение"
                </button>
            </form>
        </div>
    }
}

#[component]
fn AppointmentHistory(state: ClinicState) -> impl IntoView {
    view! {
        <div class="appointment-history">
            <h3 class="history-heading">"Мои обращения"</h3>

            <Show
                when=move || !state.appointments.get().is_empty()
                fallback=|| {
                    view! {
                        <div class="card history-empty">"У вас пока нет обращений"</div>
                    }
                }
            >
                <For
                    each=move || state.appointments.get()
                    key=|appt| appt.id
                    children=move |appt| {
                        let doctor = appt.doctor_name.clone().unwrap_or_else(|| "Врач назначается".to_string());
                        let specialization = appt.specialization.clone().unwrap_or_default();
                        let badge_class = match appt.status {
                            AppointmentStatus::Confirmed => "badge badge-confirmed",
                            AppointmentStatus::Pending => "badge badge-pending",
                        };

                        view! {
                            <div class="card history-card">
                                <div class="history-head">
                                    <div>
                                        <h4 class="card-title">{doctor}</h4>
                                        <p class="doctor-specialization">{specialization}</p>
                                    </div>
                                    <span class=badge_class>{appt.status.label()}</span>
                                </div>
                                <p class="history-symptoms">
                                    <strong>"Симптомы: "</strong>
                                    {appt.symptoms.clone()}
                                </p>
                                <p class="history-date">{format_schedule_date(&appt.scheduled_date)}</p>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}

/// Render the server's timestamp string ("2025-03-02 14:30:00[.ffffff]",
/// occasionally ISO-T-separated or date-only) as "02.03.2025 14:30".
/// Unrecognized input is shown verbatim.
fn format_schedule_date(raw: &str) -> String {
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.format("%d.%m.%Y %H:%M").to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_timestamp() {
        assert_eq!(format_schedule_date("2025-03-02 14:30:00"), "02.03.2025 14:30");
    }

    #[test]
    fn formats_fractional_and_iso_timestamps() {
        assert_eq!(
            format_schedule_date("2025-03-02 14:30:00.123456"),
            "02.03.2025 14:30"
        );
        assert_eq!(format_schedule_date("2025-12-31T09:05:00"), "31.12.2025 09:05");
    }

    #[test]
    fn date_only_and_garbage() {
        assert_eq!(format_schedule_date("2025-03-02"), "02.03.2025");
        assert_eq!(format_schedule_date("завтра"), "завтра");
    }
}
