//! New-leave-request form.

#[cfg(test)]
#[path = "create_leave_test.rs"]
mod create_leave_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{LEAVE_KINDS, NewLeaveRequest};
use crate::state::session::Session;

/// Validate the form fields into a request payload, or return a
/// user-facing hint.
///
/// `start`/`end` are `datetime-local` values; equal-length ISO strings, so
/// string order is chronological order.
fn validate_request(
    english_name: &str,
    start: &str,
    end: &str,
    hours: &str,
    kind: &str,
) -> Result<NewLeaveRequest, &'static str> {
    let english_name = english_name.trim();
    if english_name.is_empty() {
        return Err("Choose an employee.");
    }
    if kind.is_empty() {
        return Err("Choose a leave type.");
    }
    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() || end.is_empty() {
        return Err("Enter both start and end times.");
    }
    if end <= start {
        return Err("End time must be after the start time.");
    }
    let Ok(hours) = hours.trim().parse::<f64>() else {
        return Err("Enter the leave hours.");
    };
    if hours < 1.0 {
        return Err("Hours must be at least 1.");
    }
    Ok(NewLeaveRequest {
        english_name: english_name.to_owned(),
        start_time: start.to_owned(),
        end_time: end.to_owned(),
        hours,
        kind: kind.to_owned(),
    })
}

#[component]
pub fn CreateLeavePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let employees = LocalResource::new(move || api::fetch_employees(session));

    let english_name = RwSignal::new(String::new());
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let hours = RwSignal::new(String::new());
    let kind = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_request(
            &english_name.get(),
            &start.get(),
            &end.get(),
            &hours.get(),
            &kind.get(),
        ) {
            Ok(request) => request,
            Err(hint) => {
                message.set(hint.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::create_leave_request(session, &request).await {
                    Ok(_) => {
                        navigate("/leave-records", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("create leave request failed: {e}");
                        message.set(format!("Request failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <section class="create-leave">
            <h2>"New Leave Request"</h2>
            <form class="leave-form" on:submit=on_submit>
                <label class="field">
                    "Employee"
                    <Suspense fallback=move || view! { <select class="field__input"></select> }>
                        {move || {
                            employees.get().map(|result| {
                                let list = result.unwrap_or_default();
                                view! {
                                    <select
                                        class="field__input"
                                        on:change=move |ev| english_name.set(event_target_value(&ev))
                                    >
                                        <option value="">"Choose an employee"</option>
                                        {list
                                            .into_iter()
                                            .map(|employee| {
                                                view! {
                                                    <option value=employee.english_name.clone()>
                                                        {employee.english_name.clone()}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                }
                            })
                        }}
                    </Suspense>
                </label>
                <label class="field">
                    "Type"
                    <select
                        class="field__input"
                        on:change=move |ev| kind.set(event_target_value(&ev))
                    >
                        <option value="">"Choose a type"</option>
                        {LEAVE_KINDS
                            .iter()
                            .map(|label| view! { <option value=*label>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="field">
                    "Start"
                    <input
                        class="field__input"
                        type="datetime-local"
                        prop:value=move || start.get()
                        on:input=move |ev| start.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "End"
                    <input
                        class="field__input"
                        type="datetime-local"
                        prop:value=move || end.get()
                        on:input=move |ev| end.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Hours"
                    <input
                        class="field__input"
                        type="number"
                        min="1"
                        step="0.5"
                        prop:value=move || hours.get()
                        on:input=move |ev| hours.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Submit"
                </button>
            </form>
            <Show when=move || !message.get().is_empty()>
                <p class="form-message">{move || message.get()}</p>
            </Show>
        </section>
    }
}
