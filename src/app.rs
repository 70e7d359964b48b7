//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::pages::{
    annual_leave::AnnualLeavePage, create_leave::CreateLeavePage, dashboard::DashboardPage,
    leave_records::LeaveRecordsPage, login::LoginPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the session from durable storage once at startup and provides
/// it as the single shared context. The route declarations mirror
/// `routes::ROUTE_TABLE`; the index leaf forwards to the landing route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::restore());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/attendance-client.css"/>
        <Title text="Attendance"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=DashboardPage>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Redirect path="/annual-leave"/> }
                    />
                    <Route path=StaticSegment("annual-leave") view=AnnualLeavePage/>
                    <Route path=StaticSegment("leave-records") view=LeaveRecordsPage/>
                    <Route path=StaticSegment("create-leave") view=CreateLeavePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
