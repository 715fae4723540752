//! Minimal PDF 1.4 writer: one content stream per page, the two base-14
//! Helvetica fonts, uncompressed streams and a classic xref table

use super::layout::{LineStyle, PageLayout, TextLine};

const FOOTER_SIZE: f32 = 9.0;

/// Serialize laid-out pages to PDF bytes
pub fn write_pdf(pages: &[Vec<TextLine>], layout: &PageLayout, title: &str) -> Vec<u8> {
    // Fixed objects: 1 catalog, 2 page tree, 3 body font, 4 bold font, 5 info.
    // Each page adds a page object and its content stream.
    let page_count = pages.len();
    let first_page_obj = 6;
    let page_ids: Vec<usize> = (0..page_count).map(|i| first_page_obj + i * 2).collect();

    let mut objects: Vec<Vec<u8>> = Vec::with_capacity(5 + page_count * 2);
    objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());

    let kids = page_ids
        .iter()
        .map(|id| format!("{} 0 R", id))
        .collect::<Vec<_>>()
        .join(" ");
    objects.push(format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, page_count).into_bytes());

    objects.push(font_object("Helvetica"));
    objects.push(font_object("Helvetica-Bold"));

    let mut info = b"<< /Title ".to_vec();
    info.extend(pdf_string(title));
    info.extend(b" /Producer (travel-erp) >>");
    objects.push(info);

    for (index, lines) in pages.iter().enumerate() {
        let content_id = page_ids[index] + 1;
        objects.push(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                fmt_num(layout.width),
                fmt_num(layout.height),
                content_id
            )
            .into_bytes(),
        );

        let stream = page_stream(lines, layout, index + 1, page_count);
        let mut content = format!("<< /Length {} >>\nstream\n", stream.len()).into_bytes();
        content.extend(stream);
        content.extend(b"\nendstream");
        objects.push(content);
    }

    let mut out: Vec<u8> = Vec::new();
    out.extend(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend(format!("{} 0 obj\n", i + 1).into_bytes());
        out.extend(body);
        out.extend(b"\nendobj\n");
    }

    let xref_offset = out.len();
    out.extend(format!("xref\n0 {}\n", objects.len() + 1).into_bytes());
    // Every xref entry is exactly 20 bytes including the line end
    out.extend(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend(format!("{:010} 00000 n \n", offset).into_bytes());
    }
    out.extend(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R /Info 5 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .into_bytes(),
    );
    out
}

fn font_object(base: &str) -> Vec<u8> {
    format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
        base
    )
    .into_bytes()
}

fn page_stream(lines: &[TextLine], layout: &PageLayout, page: usize, total: usize) -> Vec<u8> {
    let mut s: Vec<u8> = Vec::new();
    let mut y = layout.height - layout.margin_top;
    for line in lines {
        if !line.text.is_empty() {
            let (font, size) = match line.style {
                LineStyle::Heading => ("F2", layout.heading_size),
                _ => ("F1", layout.font_size),
            };
            s.extend(
                format!(
                    "BT /{} {} Tf {} {} Td ",
                    font,
                    fmt_num(size),
                    fmt_num(layout.margin_left),
                    fmt_num(y)
                )
                .into_bytes(),
            );
            s.extend(pdf_string(&line.text));
            s.extend(b" Tj ET\n");
        }
        y -= layout.leading;
    }

    let footer = format!("Page {} of {}", page, total);
    let footer_x = layout.width / 2.0 - footer.len() as f32 * FOOTER_SIZE * 0.25;
    s.extend(
        format!(
            "BT /F1 {} Tf {} {} Td ",
            fmt_num(FOOTER_SIZE),
            fmt_num(footer_x),
            fmt_num(layout.margin_bottom / 2.0)
        )
        .into_bytes(),
    );
    s.extend(pdf_string(&footer));
    s.extend(b" Tj ET");
    s
}

/// Literal string in WinAnsi: `( ) \` escaped, other Latin-1 characters as
/// octal escapes, everything outside Latin-1 becomes `?`
fn pdf_string(text: &str) -> Vec<u8> {
    let mut out = vec![b'('];
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(c as u8);
            }
            ' '..='~' => out.push(c as u8),
            '\u{a0}'..='\u{ff}' => out.extend(format!("\\{:03o}", c as u32).into_bytes()),
            '\t' => out.push(b' '),
            _ => out.push(b'?'),
        }
    }
    out.push(b')');
    out
}

fn fmt_num(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(text: &str) -> TextLine {
        TextLine {
            text: text.into(),
            style: LineStyle::Body,
        }
    }

    fn as_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn escapes_strings() {
        assert_eq!(as_text(&pdf_string("a(b)\\c")), "(a\\(b\\)\\\\c)");
        assert_eq!(as_text(&pdf_string("é")), "(\\351)");
        assert_eq!(as_text(&pdf_string("৳")), "(?)");
    }

    #[test]
    fn writes_one_page_object_per_page() {
        let pages = vec![vec![body("first")], vec![body("second")]];
        let bytes = write_pdf(&pages, &PageLayout::a4(), "Contract");
        let text = as_text(&bytes);
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.trim_end().ends_with("%%EOF"));
        assert_eq!(text.matches("/Type /Page ").count(), 2);
        assert!(text.contains("/Count 2"));
        assert!(text.contains("(Page 2 of 2)"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
    }

    #[test]
    fn startxref_points_at_xref_table() {
        let bytes = write_pdf(&[vec![body("x")]], &PageLayout::a4(), "T");
        let text = as_text(&bytes);
        let tail = text.rsplit("startxref\n").next().unwrap();
        let offset: usize = tail.lines().next().unwrap().trim().parse().unwrap();
        assert_eq!(&bytes[offset..offset + 4], b"xref");
    }
}
