use leptos::prelude::*;
use leptos_router::components::A;

const LINKS: &[(&str, &str)] = &[
    ("/users", "Users"),
    ("/posts", "Posts"),
    ("/clubs", "Clubs"),
    ("/municipalities", "Municipalities"),
    ("/tags", "Tags"),
    ("/bookings", "Bookings"),
    ("/visits", "Visits"),
    ("/checkin", "Check-in"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "klubb"
                    </A>
                </div>

                <div class="navbar__links">
                    {LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <A href=*href attr:class="navbar__link">
                                    {*label}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
