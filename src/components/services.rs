// src/components/services.rs
//
// MediClinic Web - Services panel
//

use leptos::*;

use crate::state::ClinicState;

#[component]
pub fn ServicesGrid(state: ClinicState) -> impl IntoView {
    view! {
        <div class="panel-page">
            <h2 class="panel-heading">"Услуги"</h2>
            <div class="card-grid card-grid-wide">
                <For
                    each=move || state.services.get()
                    key=|service| service.id
                    children=move |service| {
                        view! {
                            <div class="card service-card">
                                <div class="service-head">
                                    <div>
                                        <h3 class="card-title">{service.title.clone()}</h3>
                                        <p class="card-text">{service.description.clone()}</p>
                                    </div>
                                    <span class="price-badge">{format_price(&service.price)}</span>
                                </div>
                                <p class="service-duration">
                                    {format!("Продолжительность: {} мин", service.duration_minutes)}
                                </p>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

/// Format a decimal price string the way ru-RU locale output looks:
/// non-breaking-space thousands grouping, comma decimal separator,
/// trailing zeros dropped, "₽" suffix. Digits pass through untouched.
fn format_price(price: &str) -> String {
    let (int_part, frac_part) = match price.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (price, ""),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return format!("{price} ₽");
    }

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(c);
    }

    if frac_part.is_empty() {
        format!("{sign}{grouped} ₽")
    } else {
        format!("{sign}{grouped},{frac_part} ₽")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_drops_zero_fraction() {
        assert_eq!(format_price("1500.00"), "1\u{a0}500 ₽");
        assert_eq!(format_price("12345678.00"), "12\u{a0}345\u{a0}678 ₽");
    }

    #[test]
    fn keeps_significant_fraction() {
        assert_eq!(format_price("3400.50"), "3\u{a0}400,5 ₽");
        assert_eq!(format_price("199.99"), "199,99 ₽");
    }

    #[test]
    fn small_and_edge_values() {
        assert_eq!(format_price("800.00"), "800 ₽");
        assert_eq!(format_price("1000"), "1\u{a0}000 ₽");
        assert_eq!(format_price("0.00"), "0 ₽");
    }

    #[test]
    fn non_numeric_passes_through() {
        assert_eq!(format_price("договорная"), "договорная ₽");
    }
}
