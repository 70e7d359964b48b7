//! Dashboard shell for the authenticated area: header, navigation, and the
//! outlet the leave views render into.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::state::session::{self, Session};
use crate::util::guard;

/// Authenticated shell. Installing the guard here covers every child leaf;
/// signing out mutates the session and the same guard forwards to login.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    guard::install(session);

    let role = move || session.get().role;
    let on_logout = move |_| session::logout(session);

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1 class="dashboard__title">"Attendance"</h1>
                <nav class="dashboard__nav">
                    <A href="/annual-leave">"Annual Leave"</A>
                    <A href="/leave-records">"Leave Records"</A>
                    <A href="/create-leave">"New Request"</A>
                </nav>
                <span class="dashboard__role">{role}</span>
                <button class="btn" on:click=on_logout>
                    "Sign Out"
                </button>
            </header>
            <main class="dashboard__content">
                <Outlet/>
            </main>
        </div>
    }
}
