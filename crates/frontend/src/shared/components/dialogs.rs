//! Confirmation and alert dialogs on thaw's [`Dialog`]
//!
//! Both are mounted only while they are shown: the caller keeps the pending
//! action in a signal and renders the dialog when it is `Some`.

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Dialog, DialogActions, DialogBody, DialogContent, DialogSurface, DialogTitle,
};

/// Open state of a mounted dialog; Escape or a click on the mask runs `on_dismiss`
fn dismissable(on_dismiss: Callback<()>) -> RwSignal<bool> {
    let open = RwSignal::new(true);
    Effect::new(move |_| {
        if !open.get() {
            on_dismiss.run(());
        }
    });
    open
}

/// Asks before a destructive action
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    #[prop(optional, into)]
    confirm_label: MaybeProp<String>,
    /// Disables the buttons while the action runs
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let open = dismissable(on_cancel);
    let confirm_text = move || confirm_label.get().unwrap_or_else(|| "মুছে ফেলুন".to_string());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <div class="dialog__message">
                            {icon("alert-triangle")}
                            <p>{message}</p>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=busy
                            on_click=move |_| on_cancel.run(())
                        >
                            "বাতিল"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=busy
                            on_click=move |_| on_confirm.run(())
                            attr:class="button--danger"
                        >
                            {icon("delete")}
                            {confirm_text}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// Shows an error message with a single OK button
#[component]
pub fn AlertDialog(
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(into)]
    message: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let open = dismissable(on_close);

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || title.get().unwrap_or_else(|| "ত্রুটি".to_string())}</DialogTitle>
                    <DialogContent>
                        <div class="dialog__message dialog__message--error">
                            {icon("alert-triangle")}
                            <p>{message}</p>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                            "ঠিক আছে"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
