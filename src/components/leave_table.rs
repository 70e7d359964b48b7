//! Table of leave records with an optional delete action.

use leptos::prelude::*;

use crate::net::types::LeaveRecord;

/// Record table. `can_delete` reflects the admin predicate of the current
/// session; the backend enforces the same rule server-side.
#[component]
pub fn LeaveTable(
    records: Vec<LeaveRecord>,
    can_delete: bool,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <table class="leave-table">
            <thead>
                <tr>
                    <th>"Employee"</th>
                    <th>"Type"</th>
                    <th>"Start"</th>
                    <th>"End"</th>
                    <th>"Hours"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {records
                    .into_iter()
                    .map(|record| {
                        let LeaveRecord {
                            id,
                            english_name,
                            start_time,
                            end_time,
                            hours,
                            kind,
                            ..
                        } = record;
                        view! {
                            <tr>
                                <td>{english_name}</td>
                                <td>{kind}</td>
                                <td>{start_time}</td>
                                <td>{end_time}</td>
                                <td>{hours}</td>
                                <td>
                                    <Show when=move || can_delete>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| on_delete.run(id)
                                        >
                                            "Delete"
                                        </button>
                                    </Show>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
