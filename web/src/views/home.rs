use leptos::prelude::*;
use leptos_router::components::A;

struct Section {
    href: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const SECTIONS: &[Section] = &[
    Section {
        href: "/users",
        title: "Members",
        blurb: "Manage member accounts, roles and verification",
    },
    Section {
        href: "/posts",
        title: "Posts",
        blurb: "Publish news and announcements to clubs",
    },
    Section {
        href: "/clubs",
        title: "Clubs",
        blurb: "Club locations and contact details",
    },
    Section {
        href: "/municipalities",
        title: "Municipalities",
        blurb: "Municipalities and their clubs",
    },
    Section {
        href: "/tags",
        title: "Tags",
        blurb: "News tags used to categorize posts",
    },
    Section {
        href: "/bookings",
        title: "Bookings",
        blurb: "Week calendar for bookable resources",
    },
    Section {
        href: "/visits",
        title: "Visits",
        blurb: "Check-in history across clubs",
    },
    Section {
        href: "/checkin",
        title: "Check-in",
        blurb: "Scan member QR codes at the door",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Administration"</h1>
            <div class="home-grid">
                {SECTIONS
                    .iter()
                    .map(|section| {
                        view! {
                            <A href=section.href attr:class="home-card">
                                <h2>{section.title}</h2>
                                <p>{section.blurb}</p>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
