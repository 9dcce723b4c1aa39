// src/state.rs
//
// MediClinic Web - Reactive application state
//

use leptos::*;

use crate::config::{self, ApiConfig};
use crate::models::{Appointment, Doctor, FaqEntry, Service, User};

/// Which content panel is visible. Navigation just overwrites this value;
/// it never re-triggers the one-time content fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Doctors,
    Services,
    Schedule,
    Appointments,
    Faq,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Doctors,
        Section::Services,
        Section::Schedule,
        Section::Appointments,
        Section::Faq,
    ];

    /// Nav link text.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Doctors => "Врачи",
            Section::Services => "Услуги",
            Section::Schedule => "Расписание",
            Section::Appointments => "Обращения",
            Section::Faq => "FAQ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Main application state.
/// All fields are RwSignal which is Copy, so ClinicState is Copy.
#[derive(Clone, Copy)]
pub struct ClinicState {
    // Endpoint configuration for this build
    pub config: RwSignal<ApiConfig>,

    // Session principal, if any
    pub user: RwSignal<Option<User>>,

    // Content lists, fetched once at startup
    pub doctors: RwSignal<Vec<Doctor>>,
    pub services: RwSignal<Vec<Service>>,
    pub faq: RwSignal<Vec<FaqEntry>>,

    // Current user's appointment history
    pub appointments: RwSignal<Vec<Appointment>>,

    // View routing
    pub section: RwSignal<Section>,
    pub auth_open: RwSignal<bool>,

    // Transient notifications
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast_id: RwSignal<u32>,

    // Standalone demo mode
    pub is_mock: RwSignal<bool>,
}

impl ClinicState {
    pub fn new() -> Self {
        Self {
            config: create_rw_signal(ApiConfig::from_env()),
            user: create_rw_signal(None),
            doctors: create_rw_signal(vec![]),
            services: create_rw_signal(vec![]),
            faq: create_rw_signal(vec![]),
            appointments: create_rw_signal(vec![]),
            section: create_rw_signal(Section::default()),
            auth_open: create_rw_signal(false),
            toasts: create_rw_signal(vec![]),
            next_toast_id: create_rw_signal(0),
            is_mock: create_rw_signal(config::mock_mode()),
        }
    }

    /// Switch the visible panel.
    pub fn navigate(&self, section: Section) {
        self.section.set(section);
    }

    /// Replace the session principal. The appointment list is scoped to the
    /// current user, so any identity change clears it; the refetch for a new
    /// user is driven by the effect in `App`.
    pub fn set_user(&self, user: Option<User>) {
        self.appointments.set(vec![]);
        self.user.set(user);
    }

    pub fn notify_success(&self, title: &str, message: &str) {
        self.notify(ToastKind::Success, title, message);
    }

    pub fn notify_error(&self, title: &str, message: &str) {
        self.notify(ToastKind::Error, title, message);
    }

    fn notify(&self, kind: ToastKind, title: &str, message: &str) {
        let id = self.next_toast_id.get_untracked();
        self.next_toast_id.set(id + 1);

        let toast = Toast {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
        };

        self.toasts.update(|toasts| {
            toasts.push(toast);
            // Keep only the last few; expiry is scheduled by the Toasts view
            if toasts.len() > 4 {
                toasts.remove(0);
            }
        });
    }

    pub fn dismiss_toast(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for ClinicState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to create the clinic state.
pub fn use_clinic_state() -> ClinicState {
    ClinicState::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use crate::models::AppointmentStatus;

    fn with_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    fn sample_appointments() -> Vec<Appointment> {
        vec![Appointment {
            id: 1,
            symptoms: "Головная боль, слабость".to_string(),
            status: AppointmentStatus::Confirmed,
            scheduled_date: "2025-03-02 14:30:00".to_string(),
            doctor_name: Some("Козлова Елена Сергеевна".to_string()),
            specialization: Some("Невролог".to_string()),
        }]
    }

    #[test]
    fn user_change_clears_appointments() {
        with_runtime(|| {
            let state = ClinicState::new();
            state.appointments.set(sample_appointments());
            assert!(!state.appointments.get_untracked().is_empty());

            state.set_user(Some(User {
                id: 2,
                email: "new@clinic.ru".into(),
                full_name: "Новый Пациент".into(),
            }));
            assert!(state.appointments.get_untracked().is_empty());

            state.appointments.set(sample_appointments());
            state.set_user(None);
            assert!(state.appointments.get_untracked().is_empty());
        });
    }

    #[test]
    fn navigation_only_changes_section() {
        with_runtime(|| {
            let state = ClinicState::new();
            state.doctors.set(mock::sample_doctors());
            assert_eq!(state.section.get_untracked(), Section::Home);

            state.navigate(Section::Faq);
            assert_eq!(state.section.get_untracked(), Section::Faq);
            // Content survives navigation untouched
            assert_eq!(state.doctors.get_untracked(), mock::sample_doctors());
        });
    }

    #[test]
    fn toast_backlog_is_bounded() {
        with_runtime(|| {
            let state = ClinicState::new();
            for i in 0..10 {
                state.notify_error("Ошибка", &format!("сообщение {i}"));
            }

            let toasts = state.toasts.get_untracked();
            assert_eq!(toasts.len(), 4);
            // Oldest entries were dropped, ids keep increasing
            assert_eq!(toasts.first().unwrap().message, "сообщение 6");

            let last_id = toasts.last().unwrap().id;
            state.dismiss_toast(last_id);
            assert!(state
                .toasts
                .get_untracked()
                .iter()
                .all(|t| t.id != last_id));
        });
    }

    #[test]
    fn section_labels_are_distinct() {
        let mut labels: Vec<&str> = Section::ALL.iter().map(|s| s.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Section::ALL.len());
    }
}
