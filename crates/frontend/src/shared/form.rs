//! Add/edit form of an aggregate
//!
//! [`FormViewModel`] owns the DTO being edited, its validation errors and the
//! submit state. Field builders bind one DTO field to an input through plain
//! getter/setter functions, so entity forms are just a list of fields.

use crate::shared::api_utils::{create, fetch_by_id, update, GENERIC_ERROR};
use crate::shared::components::dialogs::AlertDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_box::{EmptyBox, LoadingBox};
use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::shared::date_utils::input_value;
use chrono::NaiveDate;
use contracts::domain::common::{AggregateRoot, FormDto};
use contracts::shared::calc::parse_amount;
use contracts::shared::validation::FieldErrors;
use contracts::shared::wire::parse_date;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Text shown in a number input for a stored amount (blank for zero)
pub fn amount_input(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Blank input is `None`
fn optional_text(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

pub struct FormViewModel<A: AggregateRoot> {
    /// `None` while adding a record
    pub id: StoredValue<Option<String>>,
    pub form: RwSignal<A::Dto>,
    pub errors: RwSignal<FieldErrors>,
    /// Server error shown in the alert dialog
    pub alert: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub not_found: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl<A: AggregateRoot> Clone for FormViewModel<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: AggregateRoot> Copy for FormViewModel<A> {}

impl<A: AggregateRoot> FormViewModel<A> {
    pub fn new(id: Option<String>) -> Self {
        Self {
            loading: RwSignal::new(id.is_some()),
            id: StoredValue::new(id),
            form: RwSignal::new(A::Dto::blank()),
            errors: RwSignal::new(FieldErrors::new()),
            alert: RwSignal::new(None),
            not_found: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    /// Fill the form from the stored record when editing
    pub fn load(&self) {
        let Some(id) = self.id.get_value() else {
            return;
        };
        let vm = *self;
        spawn_local(async move {
            match fetch_by_id::<A>(&id).await {
                Ok(Some(record)) => vm.form.set(record.to_dto()),
                Ok(None) => vm.not_found.set(true),
                Err(e) => vm.alert.set(Some(e)),
            }
            vm.loading.set(false);
        });
    }

    /// Apply an edit and drop the stale message of that field
    pub fn edit(&self, field: &str, apply: impl FnOnce(&mut A::Dto)) {
        self.form.update(apply);
        if self.errors.with_untracked(|e| e.contains(field)) {
            self.errors.update(|e| e.clear_field(field));
        }
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Validate, then POST or PUT; `on_saved` runs after a 2xx answer
    pub fn submit(&self, on_saved: impl FnOnce() + 'static) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = self.form.get_untracked();
        if let Err(errors) = dto.validate() {
            log::debug!("{} form invalid: {}", A::element_name(), errors);
            self.errors.set(errors);
            return;
        }
        self.errors.set(FieldErrors::new());
        self.saving.set(true);

        let vm = *self;
        let id = self.id.get_value();
        spawn_local(async move {
            let result = match id {
                Some(id) => update::<A>(&id, &dto).await,
                None => create::<A>(&dto).await,
            };
            vm.saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("Saved {} {}", A::element_name(), saved.id());
                    on_saved();
                }
                Err(e) if e.trim().is_empty() => vm.alert.set(Some(GENERIC_ERROR.to_string())),
                Err(e) => vm.alert.set(Some(e)),
            }
        });
    }

    // ------------------------------------------------------------------
    // Field builders
    // ------------------------------------------------------------------

    pub fn text(
        &self,
        label: &'static str,
        field: &'static str,
        get: fn(&A::Dto) -> String,
        set: fn(&mut A::Dto, String),
    ) -> AnyView {
        self.text_input(label, field, "text", true, get, set)
    }

    /// Required text input of a given type ("tel", "email")
    pub fn text_input(
        &self,
        label: &'static str,
        field: &'static str,
        input_type: &'static str,
        required: bool,
        get: fn(&A::Dto) -> String,
        set: fn(&mut A::Dto, String),
    ) -> AnyView {
        let vm = *self;
        view! {
            <Input
                label=label
                input_type=input_type
                required=required
                value=Signal::derive(move || vm.form.with(get))
                on_input=Callback::new(move |v: String| vm.edit(field, |d| set(d, v)))
                error=vm.error(field)
            />
        }
        .into_any()
    }

    pub fn optional(
        &self,
        label: &'static str,
        field: &'static str,
        get: fn(&A::Dto) -> Option<String>,
        set: fn(&mut A::Dto, Option<String>),
    ) -> AnyView {
        self.optional_input(label, field, "text", get, set)
    }

    pub fn optional_input(
        &self,
        label: &'static str,
        field: &'static str,
        input_type: &'static str,
        get: fn(&A::Dto) -> Option<String>,
        set: fn(&mut A::Dto, Option<String>),
    ) -> AnyView {
        let vm = *self;
        view! {
            <Input
                label=label
                input_type=input_type
                value=Signal::derive(move || vm.form.with(get).unwrap_or_default())
                on_input=Callback::new(move |v: String| vm.edit(field, |d| set(d, optional_text(v))))
                error=vm.error(field)
            />
        }
        .into_any()
    }

    /// Number input; keeps the typed text so "12." or "০" stay editable
    pub fn amount(
        &self,
        label: &'static str,
        field: &'static str,
        required: bool,
        get: fn(&A::Dto) -> f64,
        set: fn(&mut A::Dto, f64),
    ) -> AnyView {
        let vm = *self;
        let raw = RwSignal::new(String::new());
        // follow the model when it changes from outside (record loaded)
        Effect::new(move |_| {
            let value = vm.form.with(get);
            if parse_amount(&raw.get_untracked()) != value {
                raw.set(amount_input(value));
            }
        });
        view! {
            <Input
                label=label
                input_type="text"
                required=required
                value=raw
                on_input=Callback::new(move |v: String| {
                    let parsed = parse_amount(&v);
                    raw.set(v);
                    vm.edit(field, |d| set(d, parsed));
                })
                error=vm.error(field)
            />
        }
        .into_any()
    }

    /// Whole number input (rooms, segments, year)
    pub fn integer(
        &self,
        label: &'static str,
        field: &'static str,
        required: bool,
        get: fn(&A::Dto) -> i64,
        set: fn(&mut A::Dto, i64),
    ) -> AnyView {
        let vm = *self;
        view! {
            <Input
                label=label
                input_type="number"
                required=required
                value=Signal::derive(move || vm.form.with(get).to_string())
                on_input=Callback::new(move |v: String| {
                    let parsed = parse_amount(&v).trunc() as i64;
                    vm.edit(field, |d| set(d, parsed));
                })
                error=vm.error(field)
            />
        }
        .into_any()
    }

    pub fn date(
        &self,
        label: &'static str,
        field: &'static str,
        required: bool,
        get: fn(&A::Dto) -> Option<NaiveDate>,
        set: fn(&mut A::Dto, Option<NaiveDate>),
    ) -> AnyView {
        let vm = *self;
        view! {
            <Input
                label=label
                input_type="date"
                required=required
                value=Signal::derive(move || input_value(vm.form.with(get)))
                on_input=Callback::new(move |v: String| vm.edit(field, |d| set(d, parse_date(&v))))
                error=vm.error(field)
            />
        }
        .into_any()
    }

    /// Select over `(code, label)` options; `set` receives the chosen code
    pub fn select(
        &self,
        label: &'static str,
        field: &'static str,
        options: Vec<(String, String)>,
        get: fn(&A::Dto) -> String,
        set: fn(&mut A::Dto, &str),
    ) -> AnyView {
        let vm = *self;
        view! {
            <Select
                label=label
                required=true
                options=options
                value=Signal::derive(move || vm.form.with(get))
                on_change=Callback::new(move |v: String| vm.edit(field, |d| set(d, &v)))
                error=vm.error(field)
            />
        }
        .into_any()
    }

    pub fn checkbox(
        &self,
        label: &'static str,
        field: &'static str,
        get: fn(&A::Dto) -> bool,
        set: fn(&mut A::Dto, bool),
    ) -> AnyView {
        let vm = *self;
        view! {
            <Checkbox
                label=label
                checked=Signal::derive(move || vm.form.with(get))
                on_change=Callback::new(move |v: bool| vm.edit(field, |d| set(d, v)))
            />
        }
        .into_any()
    }

    pub fn textarea(
        &self,
        label: &'static str,
        field: &'static str,
        get: fn(&A::Dto) -> Option<String>,
        set: fn(&mut A::Dto, Option<String>),
    ) -> AnyView {
        let vm = *self;
        view! {
            <Textarea
                label=label
                value=Signal::derive(move || vm.form.with(get).unwrap_or_default())
                on_input=Callback::new(move |v: String| vm.edit(field, |d| set(d, optional_text(v))))
                error=vm.error(field)
            />
        }
        .into_any()
    }
}

/// Read-only computed value shown inside a form (refund amount, totals)
pub fn computed_field(label: &'static str, value: Signal<String>) -> AnyView {
    view! {
        <div class="form__group form__group--computed">
            <label class="form__label">{label}</label>
            <div class="form__computed">{move || value.get()}</div>
        </div>
    }
    .into_any()
}

/// Add/edit page of `A`
///
/// `fields` renders the inputs; it is called again only if the page is
/// recreated. A successful save returns to the list page.
pub fn entity_form_page<A, F>(vm: FormViewModel<A>, fields: F) -> impl IntoView
where
    A: AggregateRoot,
    F: Fn() -> AnyView + Send + Sync + 'static,
{
    let navigate = use_navigate();
    vm.load();

    let title = if vm.is_edit() {
        format!("{} সম্পাদনা", A::element_name())
    } else {
        format!("নতুন {}", A::element_name())
    };
    let back = match vm.id.get_value() {
        Some(id) => A::detail_route(&id),
        None => A::list_route(),
    };
    let cancel_href = back.clone();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        vm.submit(move || navigate(&A::list_route(), NavigateOptions::default()));
    };

    let body = move || {
        if vm.loading.get() {
            view! { <LoadingBox /> }.into_any()
        } else if vm.not_found.get() {
            view! { <EmptyBox message=format!("{} খুঁজে পাওয়া যায়নি", A::element_name()) /> }.into_any()
        } else {
            fields()
        }
    };

    view! {
        <div class="page">
            <PageHeader title=title back=back>
                {()}
            </PageHeader>
            <form class="form" novalidate=true on:submit=on_submit>
                <div class="form__grid">{body}</div>
                <div class="form__actions">
                    <a class="button button--secondary" href=cancel_href>"বাতিল"</a>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.saving.get() || vm.loading.get() || vm.not_found.get()
                    >
                        {move || if vm.saving.get() { "সংরক্ষণ হচ্ছে..." } else { "সংরক্ষণ করুন" }}
                    </button>
                </div>
            </form>
            {move || vm.alert.get().map(|message| view! {
                <AlertDialog message=message on_close=Callback::new(move |_| vm.alert.set(None)) />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_input() {
        assert_eq!(amount_input(0.0), "");
        assert_eq!(amount_input(50000.0), "50000");
        assert_eq!(amount_input(31.25), "31.25");
        assert_eq!(parse_amount(&amount_input(1234.5)), 1234.5);
    }

    #[test]
    fn blank_optional_text_is_none() {
        assert_eq!(optional_text("  ".into()), None);
        assert_eq!(optional_text("Dhaka".into()), Some("Dhaka".to_string()));
    }
}
