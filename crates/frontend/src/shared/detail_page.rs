//! Generic read-only detail page of one record

use crate::shared::api_utils::{delete, fetch_by_id};
use crate::shared::components::detail_grid::{DetailField, DetailGrid};
use crate::shared::components::dialogs::{AlertDialog, ConfirmDialog};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_box::{EmptyBox, ErrorBox, LoadingBox};
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

/// Remote record as seen by a page
#[derive(Debug, Clone)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    NotFound,
    Failed(String),
}

/// `:id` segment of the current route
pub fn route_id() -> Signal<Option<String>> {
    let params = use_params_map();
    Signal::derive(move || params.read().get("id").filter(|id| !id.is_empty()))
}

/// Record timestamps appended to every detail grid
fn timestamp_fields<A: AggregateRoot>(item: &A) -> Vec<DetailField> {
    let meta = item.metadata();
    vec![
        ("তৈরির সময়", format_timestamp(meta.created_at)),
        ("সর্বশেষ আপডেট", format_timestamp(meta.updated_at)),
    ]
}

/// Detail page of `A`: field grid, Edit and Delete actions
///
/// `extra` renders entity specific actions (for example a PDF download) under
/// the grid.
pub fn entity_detail_page<A: AggregateRoot>(
    fields: fn(&A) -> Vec<DetailField>,
    extra: Option<fn(&A) -> AnyView>,
) -> impl IntoView {
    let id = route_id();
    let record = RwSignal::new(Loadable::<A>::Loading);
    let confirming = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let action_error = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    let load = move || {
        let Some(current) = id.get_untracked() else {
            record.set(Loadable::NotFound);
            return;
        };
        record.set(Loadable::Loading);
        spawn_local(async move {
            let state = match fetch_by_id::<A>(&current).await {
                Ok(Some(item)) => Loadable::Ready(item),
                Ok(None) => Loadable::NotFound,
                Err(e) => Loadable::Failed(e),
            };
            record.set(state);
        });
    };

    Effect::new(move |_| {
        id.track();
        load();
    });

    let on_confirm = Callback::new(move |_: ()| {
        let Some(current) = id.get_untracked() else {
            return;
        };
        deleting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = delete::<A>(&current).await;
            deleting.set(false);
            confirming.set(false);
            match result {
                Ok(()) => navigate(&A::list_route(), NavigateOptions::default()),
                Err(e) => action_error.set(Some(e)),
            }
        });
    });

    let title = Signal::derive(move || match record.get() {
        Loadable::Ready(item) => item.title(),
        _ => A::element_name().to_string(),
    });

    let body = move || match record.get() {
        Loadable::Loading => view! { <LoadingBox /> }.into_any(),
        Loadable::NotFound => {
            view! { <EmptyBox message=format!("{} খুঁজে পাওয়া যায়নি", A::element_name()) /> }.into_any()
        }
        Loadable::Failed(message) => {
            view! { <ErrorBox message=message on_retry=Callback::new(move |_| load()) /> }.into_any()
        }
        Loadable::Ready(item) => {
            let mut grid = fields(&item);
            grid.extend(timestamp_fields(&item));
            let edit_href = A::edit_route(item.id());
            view! {
                <div class="detail-card">
                    <DetailGrid fields=grid />
                    <div class="detail-card__actions">
                        <a class="button button--primary" href=edit_href>
                            {icon("edit")}
                            "সম্পাদনা"
                        </a>
                        <button class="button button--danger" on:click=move |_| confirming.set(true)>
                            {icon("delete")}
                            "মুছে ফেলুন"
                        </button>
                        {extra.map(|render| render(&item))}
                    </div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="page">
            <PageHeader title=title subtitle=A::element_name().to_string() back=A::list_route()>
                {()}
            </PageHeader>
            {body}
            <Show when=move || confirming.get()>
                <ConfirmDialog
                    title="মুছে ফেলা নিশ্চিত করুন"
                    message=format!("এই {} মুছে ফেলতে চান?", A::element_name())
                    busy=deleting
                    on_confirm=on_confirm
                    on_cancel=Callback::new(move |_| confirming.set(false))
                />
            </Show>
            {move || action_error.get().map(|message| view! {
                <AlertDialog message=message on_close=Callback::new(move |_| action_error.set(None)) />
            })}
        </div>
    }
}
