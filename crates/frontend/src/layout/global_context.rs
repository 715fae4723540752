use leptos::prelude::*;

/// UI state shared by the layout regions
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Context installed by `App`; a fresh one when rendered standalone
pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_default()
}
