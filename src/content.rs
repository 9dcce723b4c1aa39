// src/content.rs
//
// MediClinic Web - Content loader
// The three public lists are fetched once at startup, concurrently and
// unordered. A failed fetch keeps the previous list value.
//

use leptos::{spawn_local, SignalGetUntracked, SignalSet};

use crate::api;
use crate::mock;
use crate::state::ClinicState;

/// Kick off the one-time content loads (or install sample data in demo mode).
pub fn load_content(state: ClinicState) {
    if state.is_mock.get_untracked() {
        log::info!("demo mode: rendering sample content");
        mock::load_sample_content(state);
        return;
    }

    spawn_local(load_doctors(state));
    spawn_local(load_services(state));
    spawn_local(load_faq(state));
}

async fn load_doctors(state: ClinicState) {
    let cfg = state.config.get_untracked();
    match api::fetch_doctors(&cfg).await {
        Ok(doctors) => state.doctors.set(doctors),
        Err(err) => {
            log::warn!("doctors load failed: {err}");
            state.notify_error("Ошибка", "Не удалось загрузить список врачей");
        }
    }
}

async fn load_services(state: ClinicState) {
    let cfg = state.config.get_untracked();
    match api::fetch_services(&cfg).await {
        Ok(services) => state.services.set(services),
        Err(err) => {
            log::warn!("services load failed: {err}");
            state.notify_error("Ошибка", "Не удалось загрузить список услуг");
        }
    }
}

async fn load_faq(state: ClinicState) {
    let cfg = state.config.get_untracked();
    match api::fetch_faq(&cfg).await {
        Ok(faq) => state.faq.set(faq),
        Err(err) => {
            log::warn!("faq load failed: {err}");
            state.notify_error("Ошибка", "Не удалось загрузить вопросы и ответы");
        }
    }
}
