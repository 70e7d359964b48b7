//! Leave-record search view with filters, paging, and admin-only deletion.

#[cfg(test)]
#[path = "leave_records_test.rs"]
mod leave_records_test;

use leptos::prelude::*;

use crate::components::leave_table::LeaveTable;
use crate::net::api::{self, RecordQuery};
use crate::net::types::{LEAVE_KINDS, RecordPage};
use crate::state::session::Session;

fn total_pages(page: &RecordPage) -> u32 {
    if page.size == 0 {
        return 1;
    }
    let total = u64::try_from(page.total_elements).unwrap_or(0);
    let pages = total.div_ceil(u64::from(page.size)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

fn page_label(page: &RecordPage) -> String {
    format!(
        "Page {} of {} ({} records)",
        page.number + 1,
        total_pages(page),
        page.total_elements
    )
}

fn has_next(page: &RecordPage) -> bool {
    page.number + 1 < total_pages(page)
}

#[component]
pub fn LeaveRecordsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    // Draft filter inputs, applied as one query on search so typing does
    // not refetch per keystroke.
    let name = RwSignal::new(String::new());
    let kind = RwSignal::new(String::new());
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let applied = RwSignal::new(RecordQuery::default());

    let records = LocalResource::new(move || {
        let query = applied.get();
        async move { api::fetch_leave_records(session, &query).await }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        applied.set(RecordQuery {
            english_name: name.get().trim().to_owned(),
            kind: kind.get(),
            start: start.get(),
            end: end.get(),
            ..RecordQuery::default()
        });
    };

    let on_prev = move |_| {
        applied.update(|query| query.page = query.page.saturating_sub(1));
    };
    let on_next = move |_| {
        applied.update(|query| query.page += 1);
    };

    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let records = records.clone();
            leptos::task::spawn_local(async move {
                match api::delete_leave_record(session, id).await {
                    Ok(()) => records.refetch(),
                    Err(e) => leptos::logging::warn!("delete failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <section class="leave-records">
            <h2>"Leave Records"</h2>
            <form class="record-filters" on:submit=on_search>
                <input
                    class="field__input"
                    type="text"
                    placeholder="English name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <select
                    class="field__input"
                    on:change=move |ev| kind.set(event_target_value(&ev))
                >
                    <option value="">"All types"</option>
                    {LEAVE_KINDS
                        .iter()
                        .map(|label| view! { <option value=*label>{*label}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    class="field__input"
                    type="datetime-local"
                    prop:value=move || start.get()
                    on:input=move |ev| start.set(event_target_value(&ev))
                />
                <input
                    class="field__input"
                    type="datetime-local"
                    prop:value=move || end.get()
                    on:input=move |ev| end.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Search"
                </button>
            </form>

            <Suspense fallback=move || view! { <p>"Loading records..."</p> }>
                {move || {
                    records.get().map(|result| match result {
                        Ok(page) => {
                            let label = page_label(&page);
                            let more = has_next(&page);
                            let at_start = page.number == 0;
                            view! {
                                <LeaveTable
                                    records=page.content
                                    can_delete=session.get().is_admin()
                                    on_delete=on_delete
                                />
                                <div class="pager">
                                    <button class="btn" disabled=at_start on:click=on_prev>
                                        "Previous"
                                    </button>
                                    <span class="pager__label">{label}</span>
                                    <button class="btn" disabled=move || !more on:click=on_next>
                                        "Next"
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                        Err(e) => {
                            view! { <p class="error">{format!("Failed to load records: {e}")}</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
