use crate::shared::list_page::{entity_list_page, enum_options, Column, FilterParam, ListFilter};
use contracts::domain::a008_markup_rule::aggregate::{MarkupRule, MarkupType};
use contracts::shared::format::{format_bdt, format_number_bn};
use leptos::prelude::*;

/// `১০%` or `৳৫০০`
pub fn markup_value(rule: &MarkupRule) -> String {
    match rule.markup_type {
        MarkupType::Percentage => format!("{}%", format_number_bn(rule.value)),
        MarkupType::Fixed => format_bdt(rule.value),
    }
}

/// Empty airline or route matches everything
pub fn scope_label(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "সকল".to_string(),
    }
}

fn active_badge(rule: &MarkupRule) -> (&'static str, &'static str) {
    if rule.is_active {
        ("সক্রিয়", "success")
    } else {
        ("নিষ্ক্রিয়", "neutral")
    }
}

#[component]
pub fn MarkupRuleList() -> impl IntoView {
    entity_list_page::<MarkupRule>(
        vec![
            Column::text("নিয়মের নাম", |r: &MarkupRule| r.name.clone()),
            Column::text("এয়ারলাইন", |r: &MarkupRule| scope_label(r.airline.as_deref())),
            Column::text("রুট", |r: &MarkupRule| scope_label(r.route.as_deref())),
            Column::text("ধরন", |r: &MarkupRule| r.markup_type.display_name().to_string()),
            Column::text("মার্কআপ", markup_value),
            Column::badge("স্ট্যাটাস", active_badge),
        ],
        vec![
            ListFilter::new(
                FilterParam::Kind,
                "ধরন",
                enum_options(MarkupType::all(), MarkupType::code, MarkupType::display_name),
            ),
            ListFilter::new(
                FilterParam::Status,
                "স্ট্যাটাস",
                vec![
                    ("active".to_string(), "সক্রিয়".to_string()),
                    ("inactive".to_string(), "নিষ্ক্রিয়".to_string()),
                ],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_value() {
        let mut rule = MarkupRule {
            markup_type: MarkupType::Percentage,
            value: 10.0,
            ..Default::default()
        };
        assert_eq!(markup_value(&rule), "১০%");
        rule.markup_type = MarkupType::Fixed;
        rule.value = 500.0;
        assert_eq!(markup_value(&rule), "৳৫০০");
        assert_eq!(scope_label(Some(" ")), "সকল");
        assert_eq!(scope_label(Some("BG")), "BG");
        assert_eq!(scope_label(None), "সকল");
    }
}
