// src/models.rs
//
// MediClinic Web - Wire models
// Shapes mirror the clinic backend's JSON responses; unknown fields are ignored.
//

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authenticated user, as returned by the auth endpoint and persisted locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub full_name: String,
    pub specialization: String,
    pub experience_years: u32,
    pub description: String,
}

/// Clinic service. `price` is a decimal string ("1500.00"); it is kept
/// verbatim and only re-grouped for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: String,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
}

impl AppointmentStatus {
    /// Badge text shown in the history list.
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "Подтверждено",
            AppointmentStatus::Pending => "В обработке",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// Appointment as listed for the current user. Doctor columns are nullable
/// on the wire (left join on the server side).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub symptoms: String,
    pub status: AppointmentStatus,
    pub scheduled_date: String,
    pub doctor_name: Option<String>,
    pub specialization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: String,
}

/// Discriminator for the single auth endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthAction {
    Login,
    Register,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    pub action: AuthAction,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl AuthRequest {
    pub fn login(email: String, password: String) -> Self {
        Self {
            action: AuthAction::Login,
            email,
            password,
            full_name: None,
            phone: None,
        }
    }

    pub fn register(full_name: String, phone: String, email: String, password: String) -> Self {
        Self {
            action: AuthAction::Register,
            email,
            password,
            full_name: Some(full_name),
            phone: Some(phone),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSuccess {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAppointment {
    pub user_id: i64,
    pub service_id: i64,
    pub symptoms: String,
}

/// Doctor assigned by the server at creation time.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignedDoctor {
    pub name: String,
}

/// Creation response; the full record is re-read via the list fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedAppointment {
    pub id: i64,
    pub scheduled_date: String,
    pub doctor: AssignedDoctor,
}

/// Error body of every non-OK endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_list_ignores_extra_columns() {
        // The backend also ships photo_url/available; the client drops them.
        let json = r#"[{
            "id": 3,
            "full_name": "Иванова Мария Петровна",
            "specialization": "Терапевт",
            "experience_years": 12,
            "photo_url": null,
            "available": true,
            "description": "Врач высшей категории"
        }]"#;

        let doctors: Vec<Doctor> = serde_json::from_str(json).unwrap();
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].id, 3);
        assert_eq!(doctors[0].experience_years, 12);
    }

    #[test]
    fn appointment_row_tolerates_missing_doctor() {
        let json = r#"{
            "id": 7,
            "symptoms": "Головная боль",
            "status": "pending",
            "scheduled_date": "2025-03-02 14:30:00",
            "created_at": "2025-03-01 10:00:00",
            "doctor_name": null,
            "specialization": null,
            "service_name": "Консультация"
        }"#;

        let appt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appt.status, AppointmentStatus::Pending);
        assert!(appt.doctor_name.is_none());
    }

    #[test]
    fn auth_request_login_omits_profile_fields() {
        let req = AuthRequest::login("a@b.ru".into(), "secret".into());
        let json = serde_json::to_string(&req).unwrap();

        assert!(json.contains(r#""action":"login""#));
        assert!(!json.contains("full_name"));
        assert!(!json.contains("phone"));
    }

    #[test]
    fn auth_request_register_carries_profile_fields() {
        let req = AuthRequest::register(
            "Петров Пётр".into(),
            "+7 900 000-00-00".into(),
            "p@b.ru".into(),
            "secret".into(),
        );
        let json = serde_json::to_string(&req).unwrap();

        assert!(json.contains(r#""action":"register""#));
        assert!(json.contains(r#""full_name":"Петров Пётр""#));
        assert!(json.contains("phone"));
    }

    #[test]
    fn creation_response_names_assigned_doctor() {
        let json = r#"{
            "id": 12,
            "symptoms": "Кашель",
            "status": "confirmed",
            "scheduled_date": "2025-03-02 14:30:00.123456",
            "doctor": {"name": "Сидоров А.А.", "specialization": "ЛОР"}
        }"#;

        let created: CreatedAppointment = serde_json::from_str(json).unwrap();
        assert_eq!(created.id, 12);
        assert_eq!(created.doctor.name, "Сидоров А.А.");
        assert_eq!(created.scheduled_date, "2025-03-02 14:30:00.123456");
    }

    #[test]
    fn status_labels() {
        assert_eq!(AppointmentStatus::Confirmed.label(), "Подтверждено");
        assert_eq!(AppointmentStatus::Pending.label(), "В обработке");
        assert_eq!(AppointmentStatus::Confirmed.to_string(), "confirmed");
    }
}
