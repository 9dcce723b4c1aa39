// src/components/faq.rs
//
// MediClinic Web - FAQ accordion
//

use leptos::*;

use crate::state::ClinicState;

#[component]
pub fn FaqList(state: ClinicState) -> impl IntoView {
    // Single-open accordion: id of the expanded entry
    let open = create_rw_signal(None::<i64>);

    view! {
        <div class="panel-page">
            <h2 class="panel-heading">"Вопросы и ответы"</h2>
            <div class="faq-list">
                <For
                    each=move || state.faq.get()
                    key=|entry| entry.id
                    children=move |entry| {
                        let id = entry.id;
                        let is_open = move || open.get() == Some(id);

                        view! {
                            <div class="faq-item" class:open=is_open>
                                <button
                                    class="faq-question"
                                    on:click=move |_| {
                                        open.update(|current| {
                                            *current = if *current == Some(id) { None } else { Some(id) };
                                        })
                                    }
                                >
                                    <span class="faq-question-text">{entry.question.clone()}</span>
                                    <span class="faq-category">{entry.category.clone()}</span>
                                </button>
                                <Show when=is_open fallback=|| view! {}>
                                    <p class="faq-answer">{entry.answer.clone()}</p>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
