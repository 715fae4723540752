use leptos::prelude::*;

/// CSS modifier of a status badge; unknown variants are neutral
pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    }
}

#[component]
pub fn Badge(
    /// "primary", "success", "warning", "error" or "neutral"
    variant: &'static str,
    #[prop(into)]
    text: String,
) -> impl IntoView {
    view! { <span class=badge_class(variant)>{text}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_is_neutral() {
        assert_eq!(badge_class("success"), "badge badge--success");
        assert_eq!(badge_class("posted"), "badge badge--neutral");
    }
}
