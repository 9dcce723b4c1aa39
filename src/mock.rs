// src/mock.rs
//
// MediClinic Web - Sample data for standalone demo mode and tests
//

use leptos::SignalSet;

use crate::models::{Doctor, FaqEntry, Service};
use crate::state::ClinicState;

/// Install the sample content lists (demo builds only).
pub fn load_sample_content(state: ClinicState) {
    state.doctors.set(sample_doctors());
    state.services.set(sample_services());
    state.faq.set(sample_faq());
}

pub fn sample_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: 1,
            full_name: "Иванова Мария Петровна".to_string(),
            specialization: "Терапевт".to_string(),
            experience_years: 15,
            description: "Врач высшей категории, специалист по общей терапии".to_string(),
        },
        Doctor {
            id: 2,
            full_name: "Смирнов Алексей Викторович".to_string(),
            specialization: "Кардиолог".to_string(),
            experience_years: 12,
            description: "Кандидат медицинских наук, диагностика и лечение сердечно-сосудистых заболеваний".to_string(),
        },
        Doctor {
            id: 3,
            full_name: "Козлова Елена Сергеевна".to_string(),
            specialization: "Невролог".to_string(),
            experience_years: 9,
            description: "Лечение головных болей, нарушений сна и заболеваний нервной системы".to_string(),
        },
    ]
}

pub fn sample_services() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            title: "Первичная консультация".to_string(),
            description: "Приём врача-терапевта с осмотром и сбором анамнеза".to_string(),
            price: "1500.00".to_string(),
            duration_minutes: 30,
        },
        Service {
            id: 2,
            title: "ЭКГ с расшифровкой".to_string(),
            description: "Электрокардиограмма с заключением кардиолога".to_string(),
            price: "2200.00".to_string(),
            duration_minutes: 20,
        },
        Service {
            id: 3,
            title: "УЗИ органов брюшной полости".to_string(),
            description: "Комплексное ультразвуковое исследование".to_string(),
            price: "3400.50".to_string(),
            duration_minutes: 40,
        },
        Service {
            id: 4,
            title: "Консультация невролога".to_string(),
            description: "Осмотр, диагностика, назначение лечения".to_string(),
            price: "1800.00".to_string(),
            duration_minutes: 30,
        },
    ]
}

pub fn sample_faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            id: 1,
            question: "Как записаться на приём?".to_string(),
            answer: "Зарегистрируйтесь на сайте, выберите услугу и опишите симптомы — врач будет назначен автоматически.".to_string(),
            category: "Запись".to_string(),
        },
        FaqEntry {
            id: 2,
            question: "Нужно ли брать с собой документы?".to_string(),
            answer: "Возьмите паспорт и, при наличии, результаты предыдущих обследований.".to_string(),
            category: "Приём".to_string(),
        },
        FaqEntry {
            id: 3,
            question: "Можно ли отменить обращение?".to_string(),
            answer: "Да, позвоните в регистратуру не позднее чем за 2 часа до назначенного времени.".to_string(),
            category: "Запись".to_string(),
        },
        FaqEntry {
            id: 4,
            question: "Принимаете ли вы по полису ДМС?".to_string(),
            answer: "Да, мы работаем с большинством страховых компаний. Уточните детали у администратора.".to_string(),
            category: "Оплата".to_string(),
        },
    ]
}
