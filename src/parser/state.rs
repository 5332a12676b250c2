use super::lines::{classify_lines, Line};

/// Where the scan currently is in the heading tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cursor {
    pub section: String,
    pub subsection: String,
    lines_seen: usize,
    titles_seen: usize,
    first_line_title: Option<String>,
}

impl Cursor {
    pub fn enter_section(&mut self, name: String) {
        self.section = name;
        self.subsection.clear();
    }

    pub fn enter_subsection(&mut self, name: String) {
        self.subsection = name;
    }

    pub fn in_section(&self, name: &str) -> bool {
        self.section.eq_ignore_ascii_case(name)
    }

    /// True while handling the first `# ` line of the document.
    pub fn is_first_title(&self) -> bool {
        self.titles_seen == 1
    }

    /// The H1 payload when the document's very first line was an H1.
    pub fn first_line_title(&self) -> Option<&str> {
        self.first_line_title.as_deref()
    }

    fn advance(&mut self, line: &Line) {
        if let Line::Title(t) = line {
            self.titles_seen += 1;
            if self.lines_seen == 0 {
                self.first_line_title = Some(t.clone());
            }
        }
        self.lines_seen += 1;
    }
}

/// `(section, subsection) → route`, matched case-insensitively in order.
/// A subsection of `*` matches anything, `""` matches section-level lines.
pub struct RouteTable<R: 'static>(pub &'static [(&'static str, &'static str, R)]);

impl<R: Copy> RouteTable<R> {
    pub fn lookup(&self, cursor: &Cursor) -> Option<R> {
        self.0
            .iter()
            .find(|(section, subsection, _)| {
                section.eq_ignore_ascii_case(&cursor.section)
                    && (*subsection == "*" || subsection.eq_ignore_ascii_case(&cursor.subsection))
            })
            .map(|(_, _, route)| *route)
    }
}

/// One guide kind's accumulator. `step` owns header transitions; the
/// implementor handles everything routed below a header.
pub trait Scanner: Default {
    type Output;

    fn cursor(&self) -> &Cursor;
    fn cursor_mut(&mut self) -> &mut Cursor;

    /// Close the open record and narrative buffer, if any.
    fn flush(&mut self);
    fn title(&mut self, text: &str);
    fn minor_heading(&mut self, text: &str);
    fn body(&mut self, line: Line);
    fn finish(self) -> Self::Output;

    fn step(mut self, line: Line) -> Self {
        self.cursor_mut().advance(&line);
        match line {
            Line::Title(text) => self.title(&text),
            Line::Section(name) => {
                self.flush();
                self.cursor_mut().enter_section(name);
            }
            Line::Subsection(name) => {
                self.flush();
                self.cursor_mut().enter_subsection(name);
            }
            Line::Minor(text) => self.minor_heading(&text),
            other => self.body(other),
        }
        self
    }
}

/// Classify `markdown` and fold every line through a fresh scanner.
pub fn scan<S: Scanner>(markdown: &str) -> S::Output {
    feed(S::default(), markdown).finish()
}

/// Fold `markdown` into an existing scanner without finishing it.
pub fn feed<S: Scanner>(scanner: S, markdown: &str) -> S {
    classify_lines(markdown).into_iter().fold(scanner, S::step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Probe {
        Basic,
        Any,
        Intro,
    }

    static TABLE: RouteTable<Probe> = RouteTable(&[
        ("Basic Information", "*", Probe::Basic),
        ("Dining", "", Probe::Intro),
        ("Dining", "Introduction", Probe::Intro),
        ("Dining", "*", Probe::Any),
    ]);

    fn at(section: &str, subsection: &str) -> Cursor {
        let mut c = Cursor::default();
        c.enter_section(section.into());
        c.enter_subsection(subsection.into());
        c
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(TABLE.lookup(&at("basic information", "")), Some(Probe::Basic));
    }

    #[test]
    fn specific_rows_win_over_wildcards() {
        assert_eq!(TABLE.lookup(&at("Dining", "")), Some(Probe::Intro));
        assert_eq!(TABLE.lookup(&at("Dining", "introduction")), Some(Probe::Intro));
        assert_eq!(TABLE.lookup(&at("Dining", "Bars")), Some(Probe::Any));
    }

    #[test]
    fn unknown_section_has_no_route() {
        assert_eq!(TABLE.lookup(&at("Gallery", "")), None);
    }

    #[test]
    fn entering_section_clears_subsection() {
        let mut c = at("Dining", "Bars");
        c.enter_section("Kids".into());
        assert!(c.in_section("kids"));
        assert!(c.subsection.is_empty());
    }

    #[test]
    fn first_line_title_only_from_line_one() {
        let mut c = Cursor::default();
        c.advance(&Line::Text(String::new()));
        c.advance(&Line::Title("Late".into()));
        assert_eq!(c.first_line_title(), None);
        assert!(c.is_first_title());

        let mut c = Cursor::default();
        c.advance(&Line::Title("Iona".into()));
        assert_eq!(c.first_line_title(), Some("Iona"));
    }
}
