// src/components/schedule.rs
//
// MediClinic Web - Static schedule and contacts panel
//

use leptos::*;

#[component]
pub fn Schedule() -> impl IntoView {
    view! {
        <div class="panel-page">
            <h2 class="panel-heading">"Расписание работы"</h2>
            <div class="card schedule-card">
                <div class="schedule-columns">
                    <div class="schedule-block">
                        <h3 class="schedule-subheading">"Режим работы"</h3>
                        <div class="schedule-rows">
                            <p class="schedule-row">
                                <span>"Понедельник - Пятница:"</span>
                                <span class="schedule-hours">"8:00 - 21:00"</span>
                            </p>
                            <p class="schedule-row">
                                <span>"Суббота:"</span>
                                <span class="schedule-hours">"9:00 - 18:00"</span>
                            </p>
                            <p class="schedule-row">
                                <span>"Воскресенье:"</span>
                                <span class="schedule-hours">"10:00 - 16:00"</span>
                            </p>
                        </div>
                    </div>

                    <div class="schedule-block">
                        <h3 class="schedule-subheading">"Контакты"</h3>
                        <div class="schedule-rows">
                            <p>"+7 (495) 123-45-67"</p>
                            <p>"info@mediclinic.ru"</p>
                            <p>"г. Москва, ул. Здоровья, д. 1"</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
