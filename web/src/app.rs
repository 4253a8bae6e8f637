use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::{provide_toaster, Navbar, ToastHost};
use crate::views::booking_calendar::BookingCalendar;
use crate::views::checkin::CheckinScanner;
use crate::views::clubs::ClubsManager;
use crate::views::home::HomePage;
use crate::views::municipalities::MunicipalitiesManager;
use crate::views::not_found::NotFoundPage;
use crate::views::post_editor::PostEditor;
use crate::views::posts::PostsManager;
use crate::views::tags::TagsManager;
use crate::views::users::UsersManager;
use crate::views::visits::VisitsManager;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();

    view! {
        <Stylesheet id="leptos" href="/pkg/web.css"/>

        <Title text="klubb"/>

        <ConfigProvider>
            <Router>
                <Navbar/>
                <main>
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("users") view=UsersManager/>
                        <Route path=StaticSegment("posts") view=PostsManager/>
                        <Route
                            path=(StaticSegment("posts"), StaticSegment("new"))
                            view=PostEditor
                        />
                        <Route
                            path=(
                                StaticSegment("posts"),
                                ParamSegment("id"),
                                StaticSegment("edit"),
                            )
                            view=PostEditor
                        />
                        <Route path=StaticSegment("clubs") view=ClubsManager/>
                        <Route path=StaticSegment("municipalities") view=MunicipalitiesManager/>
                        <Route path=StaticSegment("tags") view=TagsManager/>
                        <Route path=StaticSegment("bookings") view=BookingCalendar/>
                        <Route path=StaticSegment("visits") view=VisitsManager/>
                        <Route path=StaticSegment("checkin") view=CheckinScanner/>
                    </Routes>
                </main>
                <ToastHost/>
            </Router>
        </ConfigProvider>
    }
}
