//! Sidebar with collapsible menu groups

use crate::shared::icons::icon;
use contracts::domain::a001_asset::aggregate::Asset;
use contracts::domain::a002_vendor::aggregate::Vendor;
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a004_air_agent::aggregate::AirAgent;
use contracts::domain::a005_gds_record::aggregate::GdsRecord;
use contracts::domain::a006_investment::aggregate::Investment;
use contracts::domain::a007_sar_rate::aggregate::SarRate;
use contracts::domain::a008_markup_rule::aggregate::MarkupRule;
use contracts::domain::a009_expense_category::aggregate::ExpenseCategory;
use contracts::domain::a010_air_refund::aggregate::AirRefund;
use contracts::domain::a011_air_reissue::aggregate::AirReissue;
use contracts::domain::a012_hotel_contract::aggregate::HotelContract;
use contracts::domain::a013_employee::aggregate::Employee;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    href: String,
    label: &'static str,
    icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn link(href: &str, label: &'static str, icon: &'static str) -> MenuItem {
    MenuItem {
        href: href.to_string(),
        label,
        icon,
    }
}

fn collection<A: AggregateRoot>(icon: &'static str) -> MenuItem {
    MenuItem {
        href: A::list_route(),
        label: A::list_name(),
        icon,
    }
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "ড্যাশবোর্ড",
            icon: "bar-chart",
            items: vec![
                link("/dashboard/hajj-umrah", "হজ্জ ও ওমরাহ", "users"),
                link("/dashboard/assets", "সম্পদ ও বিনিয়োগ", "briefcase"),
                link("/dashboard/air-ticketing", "এয়ার টিকেটিং", "plane"),
            ],
        },
        MenuGroup {
            id: "hajj-umrah",
            label: "হজ্জ ও ওমরাহ",
            icon: "users",
            items: vec![
                collection::<Customer>("users"),
                collection::<HotelContract>("building"),
                collection::<SarRate>("trending-up"),
            ],
        },
        MenuGroup {
            id: "air-ticketing",
            label: "এয়ার টিকেটিং",
            icon: "plane",
            items: vec![
                collection::<AirAgent>("users"),
                collection::<AirRefund>("refresh"),
                collection::<AirReissue>("file-text"),
                collection::<GdsRecord>("bar-chart"),
            ],
        },
        MenuGroup {
            id: "accounts",
            label: "হিসাব",
            icon: "wallet",
            items: vec![
                collection::<Vendor>("building"),
                collection::<Asset>("briefcase"),
                collection::<Investment>("trending-up"),
                collection::<ExpenseCategory>("wallet"),
            ],
        },
        MenuGroup {
            id: "settings",
            label: "সেটিংস",
            icon: "settings",
            items: vec![collection::<MarkupRule>("percent"), collection::<Employee>("users")],
        },
    ]
}

/// `/hajj-umrah/customers/list` belongs to `/hajj-umrah/customers/...`
fn is_active(item_href: &str, path: &str) -> bool {
    let section = item_href.strip_suffix("/list").unwrap_or(item_href);
    path == section || path.starts_with(&format!("{}/", section))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let expanded_groups = RwSignal::new(
        menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <nav class="app-sidebar__content">
            <a
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || pathname.get() == "/"
                href="/"
            >
                <div class="app-sidebar__item-content">
                    {icon("home")}
                    <span>"হোম"</span>
                </div>
            </a>
            {menu_groups().into_iter().map(|group| {
                let gid = group.id.to_string();
                let gid_click = gid.clone();
                let gid_chevron = gid.clone();
                let items = StoredValue::new(group.items);
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |open| {
                                    if let Some(pos) = open.iter().position(|x| x == &gid) {
                                        open.remove(pos);
                                    } else {
                                        open.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_chevron)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=move || expanded_groups.get().contains(&gid)>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|item| {
                                    let href = StoredValue::new(item.href.clone());
                                    view! {
                                        <a
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                href.with_value(|h| is_active(h, &pathname.get()))
                                            }
                                            href=item.href
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(item.icon)}
                                                <span>{item.label}</span>
                                            </div>
                                        </a>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_item_covers_its_pages() {
        let list = "/hajj-umrah/customers/list";
        assert!(is_active(list, "/hajj-umrah/customers/list"));
        assert!(is_active(list, "/hajj-umrah/customers/42/edit"));
        assert!(!is_active(list, "/hajj-umrah/customers-old"));
        assert!(is_active("/dashboard/assets", "/dashboard/assets"));
        assert!(!is_active("/dashboard/assets", "/assets/list"));
    }

    #[test]
    fn every_collection_is_in_the_menu() {
        let count: usize = menu_groups().iter().map(|g| g.items.len()).sum();
        assert_eq!(count, 3 + 12);
    }
}
