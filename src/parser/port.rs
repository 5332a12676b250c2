//! Port guide importer. Same scan as ship guides with a smaller table.

use tracing::debug;

use crate::guide::port::{Attraction, Beach, PortGuide};
use crate::guide::FaqPair;
use crate::parser::fields::{
    self, append_spaced, normalize_label, parse_bool, parse_float, split_list, truncate_chars, ValueRule,
};
use crate::parser::lines::Line;
use crate::parser::state::{Cursor, RouteTable, Scanner};
use crate::parser::text::{extend_narrative, extend_paragraphs, narrative_text, TextBuffer};
use crate::parser::tidy::Tidy;

const META_DESCRIPTION_CHARS: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldGroup {
    Basic,
    Overview,
    Practical,
    Seo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Narrative {
    Description,
    GettingAround,
    FromThePort,
    Climate,
    BestTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BulletList {
    Highlights,
    Transport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordKind {
    Attraction,
    Beach,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Fields(FieldGroup),
    Narrative(Narrative),
    Bullets(BulletList),
    Records(RecordKind),
    Faq,
}

static ROUTES: RouteTable<Route> = RouteTable(&[
    ("Basic Information", "*", Route::Fields(FieldGroup::Basic)),
    ("Port Overview", "Description", Route::Narrative(Narrative::Description)),
    ("Port Overview", "Highlights", Route::Bullets(BulletList::Highlights)),
    ("Port Overview", "*", Route::Fields(FieldGroup::Overview)),
    ("Getting Around", "", Route::Narrative(Narrative::GettingAround)),
    ("Getting Around", "Overview", Route::Narrative(Narrative::GettingAround)),
    ("Getting Around", "From the Port", Route::Narrative(Narrative::FromThePort)),
    ("Getting Around", "Transport Options", Route::Bullets(BulletList::Transport)),
    ("Getting Around", "Transport", Route::Bullets(BulletList::Transport)),
    ("Top Attractions", "*", Route::Records(RecordKind::Attraction)),
    ("Things to Do", "*", Route::Records(RecordKind::Attraction)),
    ("Beaches", "*", Route::Records(RecordKind::Beach)),
    ("Practical Information", "*", Route::Fields(FieldGroup::Practical)),
    ("Weather", "", Route::Narrative(Narrative::Climate)),
    ("Weather", "Climate", Route::Narrative(Narrative::Climate)),
    ("Weather", "Best Time to Visit", Route::Narrative(Narrative::BestTime)),
    ("FAQ", "*", Route::Faq),
    ("FAQs", "*", Route::Faq),
    ("Frequently Asked Questions", "*", Route::Faq),
    ("SEO Metadata", "*", Route::Fields(FieldGroup::Seo)),
    ("SEO", "*", Route::Fields(FieldGroup::Seo)),
]);

/// Sections only a port guide has.
pub const PORT_SECTIONS: &[&str] = &[
    "Port Overview",
    "Getting Around",
    "Top Attractions",
    "Things to Do",
    "Beaches",
    "Practical Information",
];

#[derive(Debug, Clone, PartialEq)]
enum PortRecord {
    Attraction(Attraction),
    Beach(Beach),
    Faq(FaqPair),
}

impl PortRecord {
    fn open(kind: RecordKind, name: &str) -> PortRecord {
        let name = name.trim().to_string();
        match kind {
            RecordKind::Attraction => PortRecord::Attraction(Attraction { name, ..Default::default() }),
            RecordKind::Beach => PortRecord::Beach(Beach { name, ..Default::default() }),
        }
    }

    fn set_field(&mut self, label: &str, rest: &str) -> bool {
        let label = normalize_label(label);
        let seg = || fields::value(rest, ValueRule::Segment);
        let full = || fields::value(rest, ValueRule::Rejoined);
        match self {
            PortRecord::Attraction(a) => match label.as_str() {
                "type" | "category" => a.kind = seg(),
                "distance" | "distance from port" => a.distance = seg(),
                "duration" | "time needed" => a.duration = full(),
                "price" | "cost" | "entry" => a.price = full(),
                "description" => a.description = full(),
                _ => return false,
            },
            PortRecord::Beach(b) => match label.as_str() {
                "distance" | "distance from port" => b.distance = seg(),
                "description" => b.description = full(),
                _ => return false,
            },
            PortRecord::Faq(_) => return false,
        }
        true
    }

    fn append_text(&mut self, text: &str) {
        match self {
            PortRecord::Attraction(a) => append_spaced(&mut a.description, text),
            PortRecord::Beach(b) => append_spaced(&mut b.description, text),
            PortRecord::Faq(f) => append_spaced(&mut f.answer, text),
        }
    }

    fn flush_into(self, guide: &mut PortGuide) {
        match self {
            PortRecord::Attraction(a) => guide.attractions.push(a),
            PortRecord::Beach(b) => guide.beaches.push(b),
            PortRecord::Faq(f) => guide.faq.push(f),
        }
    }
}

#[derive(Debug, Default)]
pub struct PortScanner {
    cursor: Cursor,
    guide: PortGuide,
    open: Option<PortRecord>,
    text: Option<(Narrative, TextBuffer)>,
}

impl PortScanner {
    fn flush_record(&mut self) {
        if let Some(record) = self.open.take() {
            record.flush_into(&mut self.guide);
        }
    }

    fn flush_text(&mut self) {
        let Some((target, mut buf)) = self.text.take() else {
            return;
        };
        if buf.is_empty() {
            return;
        }
        let text = buf.take();
        let g = &mut self.guide;
        match target {
            Narrative::Description => extend_paragraphs(&mut g.description, &text),
            Narrative::GettingAround => extend_narrative(&mut g.getting_around.overview, &text),
            Narrative::FromThePort => extend_narrative(&mut g.getting_around.from_the_port, &text),
            Narrative::Climate => extend_narrative(&mut g.weather.climate, &text),
            Narrative::BestTime => extend_narrative(&mut g.weather.best_time, &text),
        }
    }

    fn apply_field(&mut self, group: FieldGroup, label: &str, rest: &str) -> bool {
        let label = normalize_label(label);
        let seg = || fields::value(rest, ValueRule::Segment);
        let full = || fields::value(rest, ValueRule::Rejoined);
        let g = &mut self.guide;

        match group {
            FieldGroup::Basic => match label.as_str() {
                "slug" => g.slug = seg(),
                "name" | "port name" => g.name = seg(),
                "country" => g.country = seg(),
                "region" => g.region = seg(),
                "port code" => g.port_code = seg(),
                "latitude" => g.latitude = parse_float(&seg()),
                "longitude" => g.longitude = parse_float(&seg()),
                "status" => {
                    let status = seg().to_lowercase();
                    if !status.is_empty() {
                        g.status = status;
                    }
                }
                "featured" => g.featured = parse_bool(&seg()),
                _ => return false,
            },
            FieldGroup::Overview => match label.as_str() {
                "tagline" => g.tagline = full(),
                "description" => g.description = full(),
                _ => return false,
            },
            FieldGroup::Practical => {
                let v = Some(full());
                let p = &mut g.practical;
                match label.as_str() {
                    "currency" => p.currency = v,
                    "language" | "languages" => p.language = v,
                    "time zone" | "timezone" => p.time_zone = v,
                    "tipping" | "gratuities" => p.tipping = v,
                    "wifi" | "wi-fi" => p.wifi = v,
                    _ => return false,
                }
            }
            FieldGroup::Seo => match label.as_str() {
                "title" | "meta title" => g.meta.title = full(),
                "description" | "meta description" => g.meta.description = full(),
                "keywords" => g.meta.keywords = split_list(&full()),
                _ => return false,
            },
        }
        true
    }

    fn record_line(&mut self, kind: RecordKind, line: Line) {
        match line {
            Line::NumberedBold { name, rest, .. } => {
                self.flush_record();
                let mut record = PortRecord::open(kind, &name);
                record.append_text(rest.trim_start_matches(['-', '–', '—', ':', ' ']));
                self.open = Some(record);
            }
            Line::Field { label, rest, .. } => match self.open.as_mut() {
                Some(record) => {
                    if !record.set_field(&label, &rest) {
                        debug!(%label, "field not used by record");
                    }
                }
                None => debug!(%label, "field outside any record"),
            },
            Line::Bullet(text) | Line::Text(text) if !text.is_empty() => {
                if let Some(record) = self.open.as_mut() {
                    record.append_text(&text);
                }
            }
            _ => {}
        }
    }

    fn faq_line(&mut self, line: Line) {
        match line {
            Line::Question(q) => {
                self.flush_record();
                self.open = Some(PortRecord::Faq(FaqPair {
                    question: q,
                    answer: String::new(),
                }));
            }
            Line::Answer(a) | Line::Text(a) => match self.open.as_mut() {
                Some(record) if matches!(record, PortRecord::Faq(_)) => record.append_text(&a),
                _ if a.is_empty() => {}
                _ => debug!(text = %a, "answer without a question"),
            },
            _ => {}
        }
    }
}

impl Scanner for PortScanner {
    type Output = PortGuide;

    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn flush(&mut self) {
        self.flush_record();
        self.flush_text();
    }

    fn title(&mut self, text: &str) {
        if self.cursor.is_first_title() && self.guide.name.is_empty() {
            self.guide.name = text.to_string();
        }
    }

    fn minor_heading(&mut self, text: &str) {
        self.flush();
        debug!(heading = %text, "minor heading ignored in port guide");
    }

    fn body(&mut self, line: Line) {
        let Some(route) = ROUTES.lookup(&self.cursor) else {
            if !matches!(&line, Line::Text(t) if t.is_empty()) {
                debug!(section = %self.cursor.section, subsection = %self.cursor.subsection, "no route, line dropped");
            }
            return;
        };

        match route {
            Route::Fields(group) => {
                if let Line::Field { label, rest, .. } = &line {
                    if !self.apply_field(group, label, rest) {
                        debug!(%label, ?group, "unknown field");
                    }
                }
            }
            Route::Narrative(target) => {
                let Some(text) = narrative_text(&line) else {
                    return;
                };
                if !matches!(&self.text, Some((t, _)) if *t == target) {
                    self.flush_text();
                    self.text = Some((target, TextBuffer::default()));
                }
                if let Some((_, buf)) = self.text.as_mut() {
                    buf.push(&text);
                }
            }
            Route::Bullets(list) => {
                if let Some(item) = line.bullet_text() {
                    let target = match list {
                        BulletList::Highlights => &mut self.guide.highlights,
                        BulletList::Transport => &mut self.guide.getting_around.transport,
                    };
                    target.push(item.to_string());
                }
            }
            Route::Records(kind) => self.record_line(kind, line),
            Route::Faq => self.faq_line(line),
        }
    }

    fn finish(mut self) -> PortGuide {
        self.flush();
        let mut guide = self.guide;

        if guide.name.trim().is_empty() {
            if let Some(title) = self.cursor.first_line_title() {
                guide.name = title.to_string();
            }
        }
        let name = guide.name.trim().to_string();
        if guide.meta.title.trim().is_empty() {
            guide.meta.title = format!("{} Cruise Port Guide | Things to Do, Getting Around", name);
        }
        if guide.meta.description.trim().is_empty() {
            guide.meta.description = truncate_chars(guide.description.trim(), META_DESCRIPTION_CHARS);
        }

        guide.tidy();
        guide
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_port_guide;

    #[test]
    fn basic_information() {
        let md = "# Barcelona\n## Basic Information\n- Slug: barcelona\n- Country: Spain\n- Latitude: 41.38\n- Longitude: not known\n";
        let g = parse_port_guide(md);
        assert_eq!(g.name, "Barcelona");
        assert_eq!(g.slug, "barcelona");
        assert_eq!(g.country, "Spain");
        assert_eq!(g.latitude, Some(41.38));
        assert_eq!(g.longitude, None);
        assert_eq!(g.status, "draft");
    }

    #[test]
    fn attractions_flush_between_markers() {
        let md = "## Top Attractions\n1. **Sagrada Familia**\n- Distance: 5 km\n- Duration: 1:30 hours\n2. **Park Güell**\n- Distance: 7 km\n";
        let g = parse_port_guide(md);
        assert_eq!(g.attractions.len(), 2);
        assert_eq!(g.attractions[0].duration, "1:30 hours");
        assert_eq!(g.attractions[1].name, "Park Güell");
        assert_eq!(g.attractions[1].distance, "7 km");
    }

    #[test]
    fn meta_title_default() {
        let g = parse_port_guide("# Palma\n");
        assert_eq!(g.meta.title, "Palma Cruise Port Guide | Things to Do, Getting Around");
    }

    #[test]
    fn meta_title_derived_without_name() {
        let g = parse_port_guide("## Basic Information\n- Slug: palma\n");
        assert_eq!(g.meta.title, "Cruise Port Guide | Things to Do, Getting Around");
    }

    #[test]
    fn getting_around_intro_and_overview_both_kept() {
        let g = parse_port_guide("## Getting Around\nCompact centre.\n### Overview\nTaxis queue at the gate.");
        assert_eq!(
            g.getting_around.overview.as_deref(),
            Some("Compact centre.\n\nTaxis queue at the gate.")
        );
    }

    #[test]
    fn minor_heading_closes_narrative_block() {
        let md = "## Weather\n### Climate\nHot summers.\n#### Winter\nMild winters.";
        let g = parse_port_guide(md);
        assert_eq!(g.weather.climate.as_deref(), Some("Hot summers.\n\nMild winters."));
    }

    #[test]
    fn trailing_faq_kept() {
        let g = parse_port_guide("## FAQ\n**Q: Is the port walkable?**\nA: Partly.");
        assert_eq!(g.faq.len(), 1);
        assert_eq!(g.faq[0].answer, "Partly.");
    }

    #[test]
    fn barcelona_fixture() {
        let md = std::fs::read_to_string("tests/fixtures/barcelona.md").unwrap();
        let g = parse_port_guide(&md);
        assert_eq!(g.slug, "barcelona");
        assert_eq!(g.tagline, "Gaudí, tapas and the Med: all from the terminal");
        assert_eq!(g.highlights.len(), 3);
        assert_eq!(g.getting_around.transport.len(), 3);
        assert!(g.getting_around.from_the_port.is_some());
        assert_eq!(g.attractions.len(), 3);
        assert_eq!(g.beaches.len(), 2);
        assert_eq!(g.practical.currency.as_deref(), Some("Euro (EUR)"));
        assert_eq!(g.practical.time_zone.as_deref(), Some("CET (UTC+1)"));
        assert!(g.weather.best_time.is_some());
        assert_eq!(g.faq.len(), 2);
        assert_eq!(g.description.matches("\n\n").count(), 1);
    }
}
