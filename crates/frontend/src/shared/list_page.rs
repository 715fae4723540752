//! Generic list page of an aggregate
//!
//! Every collection page is the same table: a search box, a few select
//! filters, pagination and per-row view/edit/delete actions. Entities only
//! describe their columns and filters.

use crate::shared::api_utils::{delete, fetch_page};
use crate::shared::components::dialogs::{AlertDialog, ConfirmDialog};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::status_box::{EmptyBox, ErrorBox, LoadingBox};
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::domain::common::AggregateRoot;
use contracts::shared::format::{format_bdt, to_bengali_digits};
use contracts::shared::list::{ListEnvelope, ListQuery, Pagination};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

// ============================================================================
// Columns
// ============================================================================

enum Cell<A> {
    Text(fn(&A) -> String),
    Money(fn(&A) -> f64),
    /// (label, badge variant)
    Badge(fn(&A) -> (&'static str, &'static str)),
}

impl<A> Clone for Cell<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Cell<A> {}

/// One table column: a header and how to render the cell of a record
pub struct Column<A> {
    header: &'static str,
    cell: Cell<A>,
}

impl<A> Column<A> {
    pub fn text(header: &'static str, value: fn(&A) -> String) -> Self {
        Self {
            header,
            cell: Cell::Text(value),
        }
    }

    /// Taka amount, right aligned (`৳৫০,০০০`)
    pub fn money(header: &'static str, value: fn(&A) -> f64) -> Self {
        Self {
            header,
            cell: Cell::Money(value),
        }
    }

    pub fn badge(header: &'static str, value: fn(&A) -> (&'static str, &'static str)) -> Self {
        Self {
            header,
            cell: Cell::Badge(value),
        }
    }

    fn render(&self, item: &A) -> AnyView {
        match self.cell {
            Cell::Text(value) => {
                let text = value(item);
                view! {
                    <TableCell><TableCellLayout>{text}</TableCellLayout></TableCell>
                }
                .into_any()
            }
            Cell::Money(value) => {
                let amount = format_bdt(value(item));
                view! {
                    <TableCell class="table__cell--number">
                        <TableCellLayout>{amount}</TableCellLayout>
                    </TableCell>
                }
                .into_any()
            }
            Cell::Badge(value) => {
                let (text, variant) = value(item);
                view! {
                    <TableCell><TableCellLayout><Badge variant=variant text=text /></TableCellLayout></TableCell>
                }
                .into_any()
            }
        }
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Query parameter a select filter drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterParam {
    Status,
    Kind,
    Year,
    Provider,
}

#[derive(Debug, Clone)]
pub struct ListFilter {
    pub param: FilterParam,
    pub label: &'static str,
    /// (query value, label)
    pub options: Vec<(String, String)>,
}

impl ListFilter {
    pub fn new(param: FilterParam, label: &'static str, options: Vec<(String, String)>) -> Self {
        Self {
            param,
            label,
            options,
        }
    }
}

/// (code, display name) options of an enum
pub fn enum_options<T>(
    all: Vec<T>,
    code: fn(&T) -> &'static str,
    name: fn(&T) -> &'static str,
) -> Vec<(String, String)> {
    all.iter()
        .map(|v| (code(v).to_string(), name(v).to_string()))
        .collect()
}

/// Current value of a filter, empty when unset
pub fn filter_value(query: &ListQuery, param: FilterParam) -> String {
    match param {
        FilterParam::Status => query.status.clone().unwrap_or_default(),
        FilterParam::Kind => query.kind.clone().unwrap_or_default(),
        FilterParam::Provider => query.provider.clone().unwrap_or_default(),
        FilterParam::Year => query.year.map(|y| y.to_string()).unwrap_or_default(),
    }
}

/// Change one filter and go back to the first page
pub fn set_filter(query: &mut ListQuery, param: FilterParam, value: &str) {
    let value = Some(value.trim().to_string()).filter(|v| !v.is_empty());
    match param {
        FilterParam::Status => query.status = value,
        FilterParam::Kind => query.kind = value,
        FilterParam::Provider => query.provider = value,
        FilterParam::Year => query.year = value.and_then(|v| v.parse().ok()),
    }
    query.page = 1;
}

/// Change the search text and go back to the first page
pub fn set_search(query: &mut ListQuery, text: &str) {
    query.q = Some(text.trim().to_string()).filter(|t| !t.is_empty());
    query.page = 1;
}

fn filter_select(filter: ListFilter, query: RwSignal<ListQuery>) -> impl IntoView {
    let param = filter.param;
    view! {
        <select
            class="form__select filter-bar__select"
            prop:value=move || query.with(|q| filter_value(q, param))
            on:change=move |ev| {
                let value = event_target_value(&ev);
                query.update(|q| set_filter(q, param, &value));
            }
        >
            <option value="">{format!("সকল {}", filter.label)}</option>
            {filter
                .options
                .into_iter()
                .map(|(value, label)| view! { <option value=value>{label}</option> })
                .collect_view()}
        </select>
    }
}

// ============================================================================
// Page
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum ListState<A> {
    Loading,
    Loaded(ListEnvelope<A>),
    Failed(String),
}

fn render_table<A: AggregateRoot>(
    columns: &[Column<A>],
    rows: Vec<A>,
    pending_delete: RwSignal<Option<(String, String)>>,
) -> AnyView {
    let headers = columns
        .iter()
        .map(|c| {
            let header = c.header;
            view! { <TableHeaderCell resizable=true>{header}</TableHeaderCell> }
        })
        .collect_view();

    let body = rows
        .into_iter()
        .map(|item| {
            let cells = columns.iter().map(|c| c.render(&item)).collect_view();
            let id = item.id().to_string();
            let title = item.title();
            let detail_href = A::detail_route(&id);
            let edit_href = A::edit_route(&id);
            view! {
                <TableRow>
                    {cells}
                    <TableCell class="table__cell--actions">
                        <a class="button button--icon" href=detail_href title="বিস্তারিত">{icon("eye")}</a>
                        <a class="button button--icon" href=edit_href title="সম্পাদনা">{icon("edit")}</a>
                        <button
                            class="button button--icon button--danger"
                            title="মুছে ফেলুন"
                            on:click=move |_| pending_delete.set(Some((id.clone(), title.clone())))
                        >
                            {icon("delete")}
                        </button>
                    </TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="table">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {headers}
                        <TableHeaderCell class="table__header-cell--actions">"অ্যাকশন"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{body}</TableBody>
            </Table>
        </div>
    }
    .into_any()
}

/// List page of `A` with the given columns and filters
pub fn entity_list_page<A: AggregateRoot>(columns: Vec<Column<A>>, filters: Vec<ListFilter>) -> impl IntoView {
    let query = RwSignal::new(ListQuery::default());
    let state = RwSignal::new(ListState::<A>::Loading);
    let pagination = RwSignal::new(Pagination::default());
    let pending_delete = RwSignal::new(None::<(String, String)>);
    let deleting = RwSignal::new(false);
    let action_error = RwSignal::new(None::<String>);
    let columns = StoredValue::new(columns);

    let load = move || {
        let requested = query.get_untracked();
        state.set(ListState::Loading);
        spawn_local(async move {
            let result = fetch_page::<A>(&requested).await;
            // a newer query was issued while this one was in flight
            if query.get_untracked() != requested {
                return;
            }
            match result {
                Ok(page) => {
                    let last = page.pagination.total_pages.max(1);
                    if page.is_empty() && requested.page > last {
                        // the last row of the last page was deleted
                        query.update(|q| q.page = last);
                        return;
                    }
                    pagination.set(page.pagination);
                    state.set(ListState::Loaded(page));
                }
                Err(e) => state.set(ListState::Failed(e)),
            }
        });
    };

    Effect::new(move |_| {
        query.track();
        load();
    });

    let confirm_delete = move || {
        let Some((id, title)) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        spawn_local(async move {
            let result = delete::<A>(&id).await;
            deleting.set(false);
            pending_delete.set(None);
            match result {
                Ok(()) => {
                    log::info!("Deleted {} {} ({})", A::element_name(), id, title);
                    load();
                }
                Err(e) => action_error.set(Some(e)),
            }
        });
    };

    let table = move || match state.get() {
        ListState::Loading => view! { <LoadingBox /> }.into_any(),
        ListState::Failed(message) => {
            view! { <ErrorBox message=message on_retry=Callback::new(move |_| load()) /> }.into_any()
        }
        ListState::Loaded(page) if page.is_empty() => {
            view! { <EmptyBox message="কোনো তথ্য পাওয়া যায়নি" /> }.into_any()
        }
        ListState::Loaded(page) => columns.with_value(|cols| render_table(cols, page.data, pending_delete)),
    };

    let subtitle = Signal::derive(move || {
        Some(to_bengali_digits(&format!("মোট {} টি", pagination.get().total)))
    });

    view! {
        <div class="page">
            <PageHeader title=A::list_name().to_string() subtitle=subtitle>
                <a class="button button--primary" href=A::add_route()>
                    {icon("plus")}
                    "নতুন যোগ করুন"
                </a>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "রিফ্রেশ"
                </button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput on_search=Callback::new(move |text: String| query.update(|q| set_search(q, &text))) />
                {filters.into_iter().map(|f| filter_select(f, query)).collect_view()}
            </div>

            {table}

            <PaginationControls
                pagination=pagination
                on_page_change=Callback::new(move |page| query.update(|q| q.page = page))
                on_page_size_change=Callback::new(move |limit| {
                    query.update(|q| {
                        q.limit = limit;
                        q.page = 1;
                    })
                })
            />

            {move || pending_delete.get().map(|(_, title)| view! {
                <ConfirmDialog
                    title="মুছে ফেলা নিশ্চিত করুন"
                    message=format!("\"{}\" মুছে ফেলতে চান? এই কাজটি ফেরানো যাবে না।", title)
                    busy=deleting
                    on_confirm=Callback::new(move |_| confirm_delete())
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            })}
            {move || action_error.get().map(|message| view! {
                <AlertDialog message=message on_close=Callback::new(move |_| action_error.set(None)) />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_reset_to_first_page() {
        let mut query = ListQuery::new(3, 10);
        set_filter(&mut query, FilterParam::Status, "active");
        assert_eq!(query.page, 1);
        assert_eq!(filter_value(&query, FilterParam::Status), "active");

        query.page = 4;
        set_filter(&mut query, FilterParam::Year, "2024");
        assert_eq!((query.page, query.year), (1, Some(2024)));

        set_filter(&mut query, FilterParam::Status, "");
        assert_eq!(query.status, None);
        set_filter(&mut query, FilterParam::Year, "abc");
        assert_eq!(filter_value(&query, FilterParam::Year), "");
    }

    #[test]
    fn blank_search_clears_query() {
        let mut query = ListQuery::new(2, 10);
        set_search(&mut query, "  রহিম ");
        assert_eq!(query.q.as_deref(), Some("রহিম"));
        set_search(&mut query, "   ");
        assert_eq!(query.q, None);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_enum_options() {
        use contracts::enums::ActiveStatus;
        let options = enum_options(ActiveStatus::all(), ActiveStatus::code, ActiveStatus::display_name);
        assert_eq!(options[0], ("active".to_string(), "সক্রিয়".to_string()));
        assert_eq!(options.len(), 2);
    }
}
