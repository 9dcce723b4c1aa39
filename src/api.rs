// src/api.rs
//
// MediClinic Web - Typed HTTP client for the clinic endpoints
//

use gloo_net::http::{Request, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    Appointment, AuthRequest, AuthSuccess, CreatedAppointment, Doctor, ErrorBody, FaqEntry,
    NewAppointment, Service,
};

pub async fn fetch_doctors(cfg: &ApiConfig) -> Result<Vec<Doctor>, ApiError> {
    get_list(&cfg.doctors_url).await
}

pub async fn fetch_services(cfg: &ApiConfig) -> Result<Vec<Service>, ApiError> {
    get_list(&cfg.services_url).await
}

pub async fn fetch_faq(cfg: &ApiConfig) -> Result<Vec<FaqEntry>, ApiError> {
    get_list(&cfg.faq_url).await
}

/// Appointment history, scoped server-side by `user_id`.
pub async fn fetch_appointments(cfg: &ApiConfig, user_id: i64) -> Result<Vec<Appointment>, ApiError> {
    let resp = Request::get(&cfg.appointments_url)
        .query([("user_id", user_id.to_string())])
        .send()
        .await?;
    decode(resp).await
}

pub async fn authenticate(cfg: &ApiConfig, req: &AuthRequest) -> Result<AuthSuccess, ApiError> {
    let resp = Request::post(&cfg.auth_url).json(req)?.send().await?;
    decode(resp).await
}

pub async fn create_appointment(
    cfg: &ApiConfig,
    req: &NewAppointment,
) -> Result<CreatedAppointment, ApiError> {
    let resp = Request::post(&cfg.appointments_url).json(req)?.send().await?;
    decode(resp).await
}

async fn get_list<T: serde::de::DeserializeOwned>(url: &str) -> Result<Vec<T>, ApiError> {
    let resp = Request::get(url).send().await?;
    decode(resp).await
}

/// OK responses decode into `T`; everything else carries `{"error": ...}`
/// or, failing that, just the status code.
async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if resp.ok() {
        Ok(resp.json::<T>().await?)
    } else {
        match resp.json::<ErrorBody>().await {
            Ok(body) => Err(ApiError::Rejected(body.error)),
            Err(_) => Err(ApiError::Status(resp.status())),
        }
    }
}
