use std::sync::LazyLock;

use regex::Regex;

static NUMBERED_BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+\*\*(.*?)\*\*(.*)$").unwrap());
static NUMBERED_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+\*\*").unwrap());
static FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][A-Za-z0-9 /&()'.+-]{0,40}?):(.*)$").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// `# Name`
    Title(String),
    /// `## Section`
    Section(String),
    /// `### Subsection`
    Subsection(String),
    /// `#### Heading`, only meaningful for cabin categories
    Minor(String),
    /// `- Label: value`. `rest` is everything after the first colon, untrimmed;
    /// `text` is the whole bullet after `- `.
    Field { label: String, rest: String, text: String },
    /// `- value`
    Bullet(String),
    /// `1. **Name** rest`
    NumberedBold { name: String, rest: String, raw: String },
    /// `**Q: question**`
    Question(String),
    /// `A: answer`
    Answer(String),
    /// Anything else; empty marks a paragraph break.
    Text(String),
}

pub fn classify_lines(markdown: &str) -> Vec<Line> {
    markdown.lines().map(classify_line).collect()
}

pub fn classify_line(raw: &str) -> Line {
    // Title is checked on the raw line so an indented `# ` stays plain text.
    if let Some(rest) = raw.strip_prefix("# ") {
        return Line::Title(rest.trim().to_string());
    }

    let line = raw.trim();

    if let Some(rest) = line.strip_prefix("#### ") {
        return Line::Minor(rest.trim().to_string());
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return Line::Subsection(rest.trim().to_string());
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Line::Section(rest.trim().to_string());
    }

    if let Some(item) = line.strip_prefix("- ") {
        let item = item.trim();
        if let Some(caps) = FIELD_RE.captures(item) {
            return Line::Field {
                label: caps[1].trim().to_string(),
                rest: caps[2].to_string(),
                text: item.to_string(),
            };
        }
        return Line::Bullet(item.to_string());
    }

    if NUMBERED_START_RE.is_match(line) {
        if let Some(caps) = NUMBERED_BOLD_RE.captures(line) {
            return Line::NumberedBold {
                name: caps[1].trim().to_string(),
                rest: caps[2].trim().to_string(),
                raw: line.to_string(),
            };
        }
        // Unclosed bold: take everything after the opening `**`.
        let name = line.split_once("**").map(|(_, n)| n.trim()).unwrap_or_default();
        return Line::NumberedBold {
            name: name.to_string(),
            rest: String::new(),
            raw: line.to_string(),
        };
    }

    if let Some(q) = line.strip_prefix("**Q:") {
        let q = q.trim();
        let q = q.strip_suffix("**").unwrap_or(q);
        return Line::Question(q.trim().to_string());
    }
    if let Some(a) = line.strip_prefix("A:") {
        return Line::Answer(a.trim().to_string());
    }

    Line::Text(line.to_string())
}

impl Line {
    /// True for `##`/`###` lines, the ones that move the cursor.
    #[cfg(test)]
    pub fn is_header(&self) -> bool {
        matches!(self, Line::Section(_) | Line::Subsection(_))
    }

    /// The bullet text regardless of whether it looked like `Label: value`.
    pub fn bullet_text(&self) -> Option<&str> {
        match self {
            Line::Field { text, .. } | Line::Bullet(text) => Some(text),
            _ => None,
        }
    }
}
