use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// (href, title, description, icon)
const SECTIONS: [(&str, &str, &str, &str); 3] = [
    (
        "/dashboard/hajj-umrah",
        "হজ্জ ও ওমরাহ",
        "গ্রাহক, হোটেল চুক্তি ও SAR রেট",
        "users",
    ),
    (
        "/dashboard/air-ticketing",
        "এয়ার টিকেটিং",
        "এজেন্ট, রিফান্ড, রিইস্যু ও GDS ইনসেনটিভ",
        "plane",
    ),
    (
        "/dashboard/assets",
        "সম্পদ ও বিনিয়োগ",
        "অফিসের সম্পদ ও IATA বিনিয়োগ",
        "briefcase",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="স্বাগতম".to_string() subtitle="ট্রাভেল এজেন্সি ব্যবস্থাপনা".to_string()>
                {()}
            </PageHeader>
            <div class="home__sections">
                {SECTIONS
                    .iter()
                    .map(|(href, title, description, icon_name)| {
                        view! {
                            <a class="home__card" href=*href>
                                <div class="home__card-icon">{icon(icon_name)}</div>
                                <div class="home__card-title">{*title}</div>
                                <div class="home__card-text">{*description}</div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
