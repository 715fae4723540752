pub mod badge;
pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::Badge;
pub use checkbox::Checkbox;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;

use leptos::prelude::*;

/// Label with the required marker
fn field_label(label: String, required: bool) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            {required.then(|| view! { <span class="form__required">" *"</span> })}
        </label>
    }
}

/// Validation message under a field
fn field_error(error: MaybeProp<String>) -> impl IntoView {
    move || error.get().map(|e| view! { <div class="form__error">{e}</div> })
}
