pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +--------------------------------+
/// |           TopHeader            |
/// +--------------------------------+
/// |  Sidebar  |      Content       |
/// +--------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>
                    <left::sidebar::Sidebar />
                </left::Left>
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
