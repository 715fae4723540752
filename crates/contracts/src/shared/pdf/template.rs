use std::collections::BTreeMap;

use super::PdfError;

/// Replace every `{{key}}` in `template` with its value
///
/// Keys are trimmed, so `{{ hotelName }}` works too. A key with no value is an
/// error rather than an empty gap in a signed document.
pub fn render_template(
    template: &str,
    values: &BTreeMap<String, String>,
) -> Result<String, PdfError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut consumed = 0usize;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            return Err(PdfError::UnterminatedPlaceholder(consumed + start));
        };
        let key = after[..end].trim();
        let value = values
            .get(key)
            .ok_or_else(|| PdfError::MissingField(key.to_string()))?;
        out.push_str(value);
        let advance = start + 2 + end + 2;
        consumed += advance;
        rest = &rest[advance..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn fills_placeholders() {
        let text = render_template(
            "Hotel: {{hotelName}} ({{ city }})",
            &values(&[("hotelName", "Hilton"), ("city", "Makkah")]),
        )
        .unwrap();
        assert_eq!(text, "Hotel: Hilton (Makkah)");
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        assert_eq!(render_template("plain", &BTreeMap::new()).unwrap(), "plain");
    }

    #[test]
    fn missing_value_is_an_error() {
        assert_eq!(
            render_template("{{a}} {{b}}", &values(&[("a", "1")])),
            Err(PdfError::MissingField("b".into()))
        );
    }

    #[test]
    fn unterminated_placeholder_reports_offset() {
        assert_eq!(
            render_template("ok {{a}} then {{b", &values(&[("a", "1")])),
            Err(PdfError::UnterminatedPlaceholder(14))
        );
    }
}
