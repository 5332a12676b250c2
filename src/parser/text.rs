use super::lines::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinStyle {
    /// Prose: paragraphs separated by one blank line.
    #[default]
    Paragraphs,
    /// Running notes: non-empty lines joined with `\n`.
    Lines,
}

/// Narrative lines collected for one target field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBuffer {
    style: JoinStyle,
    paragraphs: Vec<Vec<String>>,
    at_break: bool,
}

impl TextBuffer {
    pub fn new(style: JoinStyle) -> Self {
        TextBuffer {
            style,
            paragraphs: Vec::new(),
            at_break: false,
        }
    }

    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            self.at_break = true;
            return;
        }
        match self.paragraphs.last_mut() {
            Some(last) if !self.at_break => last.push(line.to_string()),
            _ => self.paragraphs.push(vec![line.to_string()]),
        }
        self.at_break = false;
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Joined text; the buffer is left empty.
    pub fn take(&mut self) -> String {
        let paragraphs = std::mem::take(&mut self.paragraphs);
        self.at_break = false;
        let sep = match self.style {
            JoinStyle::Paragraphs => "\n\n",
            JoinStyle::Lines => "\n",
        };
        paragraphs
            .iter()
            .map(|p| p.join("\n"))
            .collect::<Vec<_>>()
            .join(sep)
            .trim()
            .to_string()
    }
}

/// Adds a flushed block to a narrative field. Earlier blocks for the same
/// field are kept, one blank line apart.
pub fn extend_paragraphs(target: &mut String, block: &str) {
    let block = block.trim();
    if block.is_empty() {
        return;
    }
    if !target.trim().is_empty() {
        target.push_str("\n\n");
    }
    target.push_str(block);
}

/// Same as [`extend_paragraphs`] for an optional field.
pub fn extend_narrative(slot: &mut Option<String>, block: &str) {
    if block.trim().is_empty() {
        return;
    }
    extend_paragraphs(slot.get_or_insert_with(String::new), block);
}

/// The text a line contributes to a narrative field. Headers never do.
pub fn narrative_text(line: &Line) -> Option<String> {
    match line {
        Line::Text(t) => Some(t.clone()),
        Line::Field { text, .. } | Line::Bullet(text) => Some(format!("- {}", text)),
        Line::NumberedBold { raw, .. } => Some(raw.clone()),
        Line::Question(q) => Some(format!("**Q: {}**", q)),
        Line::Answer(a) => Some(format!("A: {}", a)),
        Line::Title(_) | Line::Section(_) | Line::Subsection(_) | Line::Minor(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lines::classify_line;

    fn buffer(style: JoinStyle, lines: &[&str]) -> String {
        let mut buf = TextBuffer::new(style);
        for l in lines {
            buf.push(l);
        }
        buf.take()
    }

    #[test]
    fn paragraphs_get_one_blank_line() {
        let text = buffer(JoinStyle::Paragraphs, &["a", "b", "", "", "c", "d"]);
        assert_eq!(text, "a\nb\n\nc\nd");
    }

    #[test]
    fn leading_and_trailing_breaks_dropped() {
        let text = buffer(JoinStyle::Paragraphs, &["", "a", ""]);
        assert_eq!(text, "a");
    }

    #[test]
    fn line_style_ignores_breaks() {
        let text = buffer(JoinStyle::Lines, &["24 hours", "", "Menu in cabin"]);
        assert_eq!(text, "24 hours\nMenu in cabin");
    }

    #[test]
    fn take_clears() {
        let mut buf = TextBuffer::default();
        buf.push("once");
        assert_eq!(buf.take(), "once");
        assert!(buf.is_empty());
        assert_eq!(buf.take(), "");
    }

    #[test]
    fn later_blocks_extend_earlier_ones() {
        let mut slot = None;
        extend_narrative(&mut slot, "First intro paragraph.");
        extend_narrative(&mut slot, "Second.");
        assert_eq!(slot.as_deref(), Some("First intro paragraph.\n\nSecond."));

        let mut description = String::new();
        extend_paragraphs(&mut description, "  ");
        assert!(description.is_empty());
    }

    #[test]
    fn narrative_keeps_bullets() {
        assert_eq!(narrative_text(&classify_line("- Step-free: yes")).as_deref(), Some("- Step-free: yes"));
        assert_eq!(narrative_text(&classify_line("### Next")), None);
    }
}
