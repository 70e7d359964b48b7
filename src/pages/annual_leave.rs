//! Annual-leave summary view: pick an employee, see quota, used, and
//! remaining days.

use leptos::prelude::*;

use crate::net::api;
use crate::state::session::Session;

#[component]
pub fn AnnualLeavePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let employees = LocalResource::new(move || api::fetch_employees(session));
    let selected = RwSignal::new(None::<i64>);

    let summary = LocalResource::new(move || {
        let id = selected.get();
        async move {
            match id {
                Some(id) => Some(api::fetch_annual_leave(session, id).await),
                None => None,
            }
        }
    });

    view! {
        <section class="annual-leave">
            <h2>"Annual Leave"</h2>
            <Suspense fallback=move || view! { <p>"Loading employees..."</p> }>
                {move || {
                    employees.get().map(|result| match result {
                        Ok(list) => {
                            view! {
                                <label class="field">
                                    "Employee"
                                    <select
                                        class="field__input"
                                        on:change=move |ev| {
                                            selected.set(event_target_value(&ev).parse::<i64>().ok());
                                        }
                                    >
                                        <option value="">"Choose an employee"</option>
                                        {list
                                            .into_iter()
                                            .map(|employee| {
                                                view! {
                                                    <option value=employee.id.to_string()>
                                                        {employee.english_name.clone()}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </label>
                            }
                                .into_any()
                        }
                        Err(e) => {
                            view! { <p class="error">{format!("Failed to load employees: {e}")}</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>

            <Suspense fallback=move || view! { <p>"Loading summary..."</p> }>
                {move || {
                    summary.get().map(|state| match state {
                        None => {
                            view! { <p class="hint">"Pick an employee to see the quota."</p> }
                                .into_any()
                        }
                        Some(Ok(summary)) => {
                            view! {
                                <div class="summary-cards">
                                    <div class="summary-card">
                                        <span class="summary-card__label">"Quota"</span>
                                        <span class="summary-card__value">{summary.total_quota_days}</span>
                                    </div>
                                    <div class="summary-card">
                                        <span class="summary-card__label">"Used"</span>
                                        <span class="summary-card__value">{summary.used_days}</span>
                                    </div>
                                    <div class="summary-card">
                                        <span class="summary-card__label">"Remaining"</span>
                                        <span class="summary-card__value">{summary.remaining_days}</span>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        Some(Err(e)) => {
                            view! { <p class="error">{format!("Failed to load summary: {e}")}</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
