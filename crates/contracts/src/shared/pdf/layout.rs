/// Geometry of a page, in PDF points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub font_size: f32,
    pub heading_size: f32,
    pub leading: f32,
    /// Characters that fit on one body line
    pub max_chars: usize,
}

impl PageLayout {
    /// A4 portrait, 11pt Helvetica body
    pub fn a4() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            margin_left: 50.0,
            margin_top: 60.0,
            margin_bottom: 60.0,
            font_size: 11.0,
            heading_size: 14.0,
            leading: 14.0,
            max_chars: 90,
        }
    }

    /// Lines that fit between the top and bottom margins
    pub fn lines_per_page(&self) -> usize {
        let usable = self.height - self.margin_top - self.margin_bottom;
        ((usable / self.leading).floor() as usize).max(1)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::a4()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    Body,
    /// Forces the next line onto a new page
    PageBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub style: LineStyle,
}

impl TextLine {
    fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LineStyle::Body,
        }
    }
}

/// Split `text` into laid-out lines
///
/// `# ` starts a heading, a line holding only `---page---` forces a page
/// break, long lines wrap at word boundaries. Blank lines at the start and
/// end are dropped.
pub fn layout_text(text: &str, layout: &PageLayout) -> Vec<TextLine> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        let raw = raw.trim_end();
        if raw.trim() == "---page---" {
            lines.push(TextLine {
                text: String::new(),
                style: LineStyle::PageBreak,
            });
        } else if let Some(heading) = raw.strip_prefix("# ") {
            lines.push(TextLine {
                text: heading.trim().to_string(),
                style: LineStyle::Heading,
            });
        } else if raw.is_empty() {
            lines.push(TextLine::body(""));
        } else {
            lines.extend(wrap(raw, layout.max_chars).into_iter().map(TextLine::body));
        }
    }

    let is_blank = |l: &TextLine| l.style == LineStyle::Body && l.text.trim().is_empty();
    while lines.first().is_some_and(is_blank) {
        lines.remove(0);
    }
    while lines.last().is_some_and(is_blank) {
        lines.pop();
    }
    lines
}

/// Wrap a line at word boundaries; words longer than a line are cut
fn wrap(line: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let indent: String = line.chars().take_while(|c| *c == ' ').collect();
    let mut result = Vec::new();
    let mut current = indent.clone();

    for word in line.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let current_len = current.chars().count();
            let needs_space = current_len > indent.len();
            let extra = word.len() + usize::from(needs_space);
            if current_len + extra <= max_chars {
                if needs_space {
                    current.push(' ');
                }
                current.extend(word.iter());
                break;
            }
            if current_len > indent.len() {
                result.push(std::mem::replace(&mut current, indent.clone()));
                continue;
            }
            // Word alone does not fit: cut it
            let room = max_chars.saturating_sub(current_len).max(1);
            let rest = word.split_off(room.min(word.len()));
            current.extend(word.iter());
            result.push(std::mem::replace(&mut current, indent.clone()));
            if rest.is_empty() {
                break;
            }
            word = rest;
        }
    }
    if current.chars().count() > indent.len() || result.is_empty() {
        result.push(current);
    }
    result
}

/// Slice lines into pages of at most `per_page` lines
pub fn paginate(lines: Vec<TextLine>, per_page: usize) -> Vec<Vec<TextLine>> {
    let per_page = per_page.max(1);
    let mut pages = Vec::new();
    let mut current: Vec<TextLine> = Vec::new();
    for line in lines {
        if line.style == LineStyle::PageBreak {
            if !current.is_empty() {
                pages.push(std::mem::take(&mut current));
            }
            continue;
        }
        // Blank lines do not open a new page
        if current.is_empty() && line.text.is_empty() && !pages.is_empty() {
            continue;
        }
        current.push(line);
        if current.len() == per_page {
            pages.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        pages.push(current);
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_fits_51_lines() {
        assert_eq!(PageLayout::a4().lines_per_page(), 51);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        for l in &lines {
            assert!(l.chars().count() <= 9);
        }
    }

    #[test]
    fn wrap_cuts_long_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_keeps_indent() {
        assert_eq!(wrap("  alpha beta", 8), vec!["  alpha", "  beta"]);
    }

    #[test]
    fn layout_recognises_headings_and_breaks() {
        let layout = PageLayout::a4();
        let lines = layout_text("\n# Title\nbody\n---page---\nnext\n\n", &layout);
        let styles: Vec<LineStyle> = lines.iter().map(|l| l.style).collect();
        assert_eq!(
            styles,
            vec![LineStyle::Heading, LineStyle::Body, LineStyle::PageBreak, LineStyle::Body]
        );
        assert_eq!(lines[0].text, "Title");
    }

    #[test]
    fn paginate_splits_and_honours_breaks() {
        let lines: Vec<TextLine> = (0..5).map(|i| TextLine::body(i.to_string())).collect();
        let pages = paginate(lines, 2);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2][0].text, "4");

        let layout = PageLayout::a4();
        let pages = paginate(layout_text("a\n---page---\nb", &layout), 50);
        assert_eq!(pages.len(), 2);
        assert!(paginate(Vec::new(), 10).is_empty());
    }
}
