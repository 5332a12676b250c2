//! Ship guide importer: routes each line of a ship guide document to the
//! field, list or narrative it fills.

pub mod finalize;
pub mod records;

use tracing::debug;

use crate::guide::ShipGuide;
use crate::parser::fields::{self, normalize_label, parse_bool, parse_float, parse_int, split_list, ValueRule};
use crate::parser::lines::Line;
use crate::parser::state::{Cursor, RouteTable, Scanner};
use crate::parser::text::{extend_narrative, extend_paragraphs, narrative_text, JoinStyle, TextBuffer};

pub use records::{RecordKind, ShipRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Basic,
    Specifications,
    Overview,
    Onboard,
    Seo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrative {
    Description,
    CabinsOverview,
    Atmosphere,
    DiningIntroduction,
    RoomService,
    DiningTips,
    EntertainmentIntroduction,
    ActivitiesOverview,
    FamilyOverview,
    KidsOverview,
    AccessibilityOverview,
    AccessibleCabins,
    Spa,
    Fitness,
}

impl Narrative {
    fn style(self) -> JoinStyle {
        match self {
            Narrative::RoomService => JoinStyle::Lines,
            _ => JoinStyle::Paragraphs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletList {
    Highlights,
    Shows,
    Sports,
    OtherActivities,
    FamilyFeatures,
    AccessibilityFeatures,
    Treatments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Fields(FieldGroup),
    Narrative(Narrative),
    Bullets(BulletList),
    Records(RecordKind),
    Faq,
}

pub static ROUTES: RouteTable<Route> = RouteTable(&[
    ("Basic Information", "*", Route::Fields(FieldGroup::Basic)),
    ("Ship Specifications", "*", Route::Fields(FieldGroup::Specifications)),
    ("Ship Overview", "Description", Route::Narrative(Narrative::Description)),
    ("Ship Overview", "Highlights", Route::Bullets(BulletList::Highlights)),
    ("Ship Overview", "*", Route::Fields(FieldGroup::Overview)),
    ("Cabins", "Overview", Route::Narrative(Narrative::CabinsOverview)),
    ("Cabins", "*", Route::Records(RecordKind::CabinCategory)),
    ("Onboard Experience", "Atmosphere", Route::Narrative(Narrative::Atmosphere)),
    ("Onboard Experience", "*", Route::Fields(FieldGroup::Onboard)),
    ("Dining", "", Route::Narrative(Narrative::DiningIntroduction)),
    ("Dining", "Introduction", Route::Narrative(Narrative::DiningIntroduction)),
    ("Dining", "Restaurants", Route::Records(RecordKind::Restaurant)),
    ("Dining", "Bars", Route::Records(RecordKind::Bar)),
    ("Dining", "Bars and Lounges", Route::Records(RecordKind::Bar)),
    ("Dining", "Restaurants and Bars", Route::Records(RecordKind::RestaurantOrBar)),
    ("Dining", "Room Service", Route::Narrative(Narrative::RoomService)),
    ("Dining", "Dining Tips", Route::Narrative(Narrative::DiningTips)),
    ("Dining", "Tips", Route::Narrative(Narrative::DiningTips)),
    ("Entertainment", "", Route::Narrative(Narrative::EntertainmentIntroduction)),
    ("Entertainment", "Introduction", Route::Narrative(Narrative::EntertainmentIntroduction)),
    ("Entertainment", "Venues", Route::Records(RecordKind::Venue)),
    ("Entertainment", "Shows", Route::Bullets(BulletList::Shows)),
    ("Activities", "", Route::Narrative(Narrative::ActivitiesOverview)),
    ("Activities", "Overview", Route::Narrative(Narrative::ActivitiesOverview)),
    ("Activities", "Pools", Route::Records(RecordKind::Pool)),
    ("Activities", "Sports and Fitness", Route::Bullets(BulletList::Sports)),
    ("Activities", "Sports", Route::Bullets(BulletList::Sports)),
    ("Activities", "Other Activities", Route::Bullets(BulletList::OtherActivities)),
    ("Family", "", Route::Narrative(Narrative::FamilyOverview)),
    ("Family", "Overview", Route::Narrative(Narrative::FamilyOverview)),
    ("Family", "Features", Route::Bullets(BulletList::FamilyFeatures)),
    ("Kids", "", Route::Narrative(Narrative::KidsOverview)),
    ("Kids", "Overview", Route::Narrative(Narrative::KidsOverview)),
    ("Kids", "Kids Clubs", Route::Records(RecordKind::KidsClub)),
    ("Kids", "Clubs", Route::Records(RecordKind::KidsClub)),
    ("Kids Clubs", "*", Route::Records(RecordKind::KidsClub)),
    ("Accessibility", "", Route::Narrative(Narrative::AccessibilityOverview)),
    ("Accessibility", "Overview", Route::Narrative(Narrative::AccessibilityOverview)),
    ("Accessibility", "Accessible Cabins", Route::Narrative(Narrative::AccessibleCabins)),
    ("Accessibility", "Features", Route::Bullets(BulletList::AccessibilityFeatures)),
    ("Wellness", "Spa", Route::Narrative(Narrative::Spa)),
    ("Wellness", "Fitness", Route::Narrative(Narrative::Fitness)),
    ("Wellness", "Treatments", Route::Bullets(BulletList::Treatments)),
    ("Spa and Wellness", "Spa", Route::Narrative(Narrative::Spa)),
    ("Spa and Wellness", "Fitness", Route::Narrative(Narrative::Fitness)),
    ("Spa and Wellness", "Treatments", Route::Bullets(BulletList::Treatments)),
    ("Deck Plans", "*", Route::Records(RecordKind::DeckPlan)),
    ("FAQ", "*", Route::Faq),
    ("FAQs", "*", Route::Faq),
    ("Frequently Asked Questions", "*", Route::Faq),
    ("SEO Metadata", "*", Route::Fields(FieldGroup::Seo)),
    ("SEO", "*", Route::Fields(FieldGroup::Seo)),
]);

/// Accumulator for one ship guide scan.
#[derive(Debug, Default)]
pub struct ShipScanner {
    cursor: Cursor,
    guide: ShipGuide,
    open: Option<ShipRecord>,
    /// The open record came from a shared restaurants and bars list.
    shared_list: bool,
    text: Option<(Narrative, TextBuffer)>,
}

impl ShipScanner {
    #[cfg(test)]
    pub fn guide(&self) -> &ShipGuide {
        &self.guide
    }

    #[cfg(test)]
    pub fn open_record(&self) -> Option<&ShipRecord> {
        self.open.as_ref()
    }

    fn open_record_with(&mut self, record: ShipRecord) {
        self.flush_record();
        self.open = Some(record);
    }

    fn flush_record(&mut self) {
        let shared = std::mem::take(&mut self.shared_list);
        if let Some(record) = self.open.take() {
            let record = if shared { record.retag() } else { record };
            record.flush_into(&mut self.guide);
        }
    }

    fn flush_text(&mut self) {
        if let Some((target, mut buf)) = self.text.take() {
            if !buf.is_empty() {
                assign_narrative(&mut self.guide, target, &buf.take());
            }
        }
    }

    fn push_narrative(&mut self, target: Narrative, line: &Line) {
        let Some(text) = narrative_text(line) else {
            return;
        };
        if !matches!(&self.text, Some((t, _)) if *t == target) {
            self.flush_text();
            self.text = Some((target, TextBuffer::new(target.style())));
        }
        if let Some((_, buf)) = self.text.as_mut() {
            buf.push(&text);
        }
    }

    fn record_line(&mut self, kind: RecordKind, line: Line) {
        match line {
            Line::NumberedBold { name, rest, raw } => {
                let record = if kind == RecordKind::DeckPlan {
                    match ShipRecord::deck_plan(&raw) {
                        Some(r) => r,
                        None => {
                            debug!(line = %raw, "numbered line is not a deck marker");
                            self.flush_record();
                            return;
                        }
                    }
                } else {
                    let mut r = ShipRecord::open(kind, &name);
                    r.append_text(rest.trim_start_matches(['-', '–', '—', ':', ' ']));
                    r
                };
                self.open_record_with(record);
                self.shared_list = kind == RecordKind::RestaurantOrBar;
            }
            Line::Field { label, rest, .. } => {
                let Some(record) = self.open.as_mut() else {
                    debug!(%label, section = %self.cursor.section, "field outside any record");
                    return;
                };
                if !record.set_field(&label, &rest) {
                    debug!(%label, section = %self.cursor.section, "field not used by record");
                }
            }
            Line::Bullet(item) => match self.open.as_mut() {
                Some(record) => record.push_bullet(&item),
                None => debug!(%item, "bullet outside any record"),
            },
            Line::Text(text) if !text.is_empty() => match self.open.as_mut() {
                Some(record) => record.append_text(&text),
                None => debug!(%text, "text outside any record"),
            },
            _ => {}
        }
    }

    fn faq_line(&mut self, line: Line) {
        match line {
            Line::Question(q) => self.open_record_with(ShipRecord::faq(&q)),
            Line::Answer(a) | Line::Text(a) => match self.open.as_mut() {
                Some(record) if matches!(record, ShipRecord::Faq(_)) => record.append_text(&a),
                _ if a.is_empty() => {}
                _ => debug!(text = %a, "answer without a question"),
            },
            _ => {}
        }
    }

    fn bullet(&mut self, list: BulletList, line: &Line) {
        let Some(item) = line.bullet_text() else {
            return;
        };
        let g = &mut self.guide;
        let target = match list {
            BulletList::Highlights => &mut g.highlights,
            BulletList::Shows => &mut g.entertainment.shows,
            BulletList::Sports => &mut g.activities.sports,
            BulletList::OtherActivities => &mut g.activities.other,
            BulletList::FamilyFeatures => &mut g.family.features,
            BulletList::AccessibilityFeatures => &mut g.accessibility.features,
            BulletList::Treatments => &mut g.wellness.treatments,
        };
        target.push(item.to_string());
    }
}

impl Scanner for ShipScanner {
    type Output = ShipGuide;

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
        if self.cursor.in_section("Cabins") {
            self.open = Some(ShipRecord::open(RecordKind::CabinCategory, text));
        } else {
            debug!(heading = %text, section = %self.cursor.section, "minor heading outside cabins");
        }
    }

    fn body(&mut self, line: Line) {
        let Some(route) = ROUTES.lookup(&self.cursor) else {
            if !matches!(&line, Line::Text(t) if t.is_empty()) {
                debug!(
                    section = %self.cursor.section,
                    subsection = %self.cursor.subsection,
                    ?line,
                    "no route, line dropped"
                );
            }
            return;
        };

        // A cabin category opened by `####` owns the lines below it even
        // under a narrative subsection.
        if matches!(self.open, Some(ShipRecord::CabinCategory(_)))
            && !matches!(route, Route::Records(_))
        {
            self.record_line(RecordKind::CabinCategory, line);
            return;
        }

        match route {
            Route::Fields(group) => match &line {
                Line::Field { label, rest, .. } => {
                    if !apply_field(&mut self.guide, group, label, rest) {
                        debug!(%label, ?group, "unknown field");
                    }
                }
                Line::Text(t) if t.is_empty() => {}
                other => debug!(line = ?other, ?group, "non-field line in field section"),
            },
            Route::Narrative(target) => self.push_narrative(target, &line),
            Route::Bullets(list) => self.bullet(list, &line),
            Route::Records(kind) => self.record_line(kind, line),
            Route::Faq => self.faq_line(line),
        }
    }

    fn finish(mut self) -> ShipGuide {
        self.flush();
        finalize::finalize(self.guide, self.cursor.first_line_title())
    }
}

/// Scalar field assignment for `- Label: value` bullets. Returns false for
/// labels the group does not know.
pub fn apply_field(guide: &mut ShipGuide, group: FieldGroup, label: &str, rest: &str) -> bool {
    let label = normalize_label(label);
    let seg = || fields::value(rest, ValueRule::Segment);
    let full = || fields::value(rest, ValueRule::Rejoined);

    match group {
        FieldGroup::Basic => match label.as_str() {
            "slug" => guide.slug = seg(),
            "name" | "ship name" => guide.name = seg(),
            "cruise line slug" => guide.cruise_line_slug = seg(),
            "cruise line name" | "cruise line" => guide.cruise_line_name = seg(),
            "year built" => {
                if let Some(y) = parse_int(&seg()) {
                    guide.year_built = Some(y);
                }
            }
            "year refurbished" | "last refurbished" => {
                if let Some(y) = parse_int(&seg()) {
                    guide.year_refurbished = Some(y);
                }
            }
            "status" => {
                let status = seg().to_lowercase();
                if !status.is_empty() {
                    guide.status = status;
                }
            }
            "featured" => guide.featured = parse_bool(&seg()),
            _ => return false,
        },
        FieldGroup::Specifications => {
            let v = seg();
            match label.as_str() {
                "gross tonnage" | "tonnage" => guide.gross_tonnage = parse_int(&v),
                l if l.starts_with("length") => guide.length_meters = parse_int(&v),
                l if l.starts_with("beam") => guide.beam_meters = parse_int(&v),
                "passenger capacity" | "passengers" => guide.passenger_capacity = parse_int(&v),
                "crew count" | "crew" => guide.crew_count = parse_int(&v),
                "deck count" | "decks" => guide.deck_count = parse_int(&v),
                l if l.starts_with("speed") => guide.speed_knots = parse_float(&v),
                _ => return false,
            }
        }
        FieldGroup::Overview => match label.as_str() {
            "tagline" => guide.tagline = full(),
            "display name" => guide.display_name = full(),
            "description" => guide.description = full(),
            "highlights" => guide.highlights.extend(split_list(&full())),
            _ => return false,
        },
        FieldGroup::Onboard => {
            let v = Some(full());
            let onboard = &mut guide.onboard;
            match label.as_str() {
                "dress code" => onboard.dress_code = v,
                "currency" => onboard.currency = v,
                "gratuities" | "tipping" => onboard.gratuities = v,
                "wifi" | "wi-fi" | "internet" => onboard.wifi = v,
                "smoking" | "smoking policy" => onboard.smoking = v,
                _ => return false,
            }
        }
        FieldGroup::Seo => match label.as_str() {
            "title" | "meta title" => guide.meta.title = full(),
            "description" | "meta description" => guide.meta.description = full(),
            "keywords" => guide.meta.keywords = split_list(&full()),
            _ => return false,
        },
    }
    true
}

fn assign_narrative(guide: &mut ShipGuide, target: Narrative, text: &str) {
    match target {
        Narrative::Description => extend_paragraphs(&mut guide.description, text),
        Narrative::CabinsOverview => extend_narrative(&mut guide.cabins.overview, text),
        Narrative::Atmosphere => extend_narrative(&mut guide.onboard.atmosphere, text),
        Narrative::DiningIntroduction => extend_narrative(&mut guide.dining.introduction, text),
        Narrative::RoomService => extend_narrative(&mut guide.dining.room_service, text),
        Narrative::DiningTips => extend_narrative(&mut guide.dining.tips, text),
        Narrative::EntertainmentIntroduction => extend_narrative(&mut guide.entertainment.introduction, text),
        Narrative::ActivitiesOverview => extend_narrative(&mut guide.activities.overview, text),
        Narrative::FamilyOverview => extend_narrative(&mut guide.family.overview, text),
        Narrative::KidsOverview => extend_narrative(&mut guide.kids.overview, text),
        Narrative::AccessibilityOverview => extend_narrative(&mut guide.accessibility.overview, text),
        Narrative::AccessibleCabins => extend_narrative(&mut guide.accessibility.cabins, text),
        Narrative::Spa => extend_narrative(&mut guide.wellness.spa, text),
        Narrative::Fitness => extend_narrative(&mut guide.wellness.fitness, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_ship_guide;
    use crate::parser::state::feed;

    #[test]
    fn parse_is_idempotent() {
        let md = std::fs::read_to_string("tests/fixtures/iona.md").unwrap();
        assert_eq!(parse_ship_guide(&md), parse_ship_guide(&md));
    }

    #[test]
    fn required_fields() {
        let g = parse_ship_guide("# Iona\n## Basic Information\n- Slug: iona\n");
        assert_eq!(g.name, "Iona");
        assert_eq!(g.slug, "iona");
    }

    #[test]
    fn numeric_default_on_failure() {
        let g = parse_ship_guide("# A\n## Basic Information\n- Year Built: unknown\n");
        assert_eq!(g.year_built, None);
        let g = parse_ship_guide("# A\n## Basic Information\n- Year Built: 2020\n");
        assert_eq!(g.year_built, Some(2020));
    }

    #[test]
    fn specifications() {
        let md = "## Ship Specifications\n- Gross Tonnage: 184,089\n- Length (meters): 345\n- Beam (meters): 42\n- Passenger Capacity: 5,200\n- Crew Count: 1,800\n- Deck Count: 19\n- Speed (knots): 22.6\n";
        let g = parse_ship_guide(md);
        assert_eq!(g.gross_tonnage, Some(184089));
        assert_eq!(g.length_meters, Some(345));
        assert_eq!(g.beam_meters, Some(42));
        assert_eq!(g.passenger_capacity, Some(5200));
        assert_eq!(g.crew_count, Some(1800));
        assert_eq!(g.deck_count, Some(19));
        assert_eq!(g.speed_knots, Some(22.6));
    }

    #[test]
    fn restaurants_do_not_share_fields() {
        let md = "## Dining\n### Restaurants\n1. **The Olive Grove**\n- Cuisine: Mediterranean\n2. **Sindhu**\n- Cuisine: Indian\n";
        let g = parse_ship_guide(md);
        let r = &g.dining.restaurants;
        assert_eq!(r.len(), 2);
        assert_eq!((r[0].name.as_str(), r[0].cuisine.as_str()), ("The Olive Grove", "Mediterranean"));
        assert_eq!((r[1].name.as_str(), r[1].cuisine.as_str()), ("Sindhu", "Indian"));
    }

    #[test]
    fn trailing_faq_is_flushed() {
        let md = "# A\n## FAQ\n**Q: Is Wi-Fi free?**\nA: No.";
        let g = parse_ship_guide(md);
        assert_eq!(g.faq.len(), 1);
        assert_eq!(g.faq[0].question, "Is Wi-Fi free?");
        assert_eq!(g.faq[0].answer, "No.");
    }

    #[test]
    fn faq_answers_wrap() {
        let md = "## FAQ\n**Q: Dress code?**\nA: Smart casual\nmost nights.\n**Q: Kids?**\nA: Yes.\n";
        let g = parse_ship_guide(md);
        assert_eq!(g.faq.len(), 2);
        assert_eq!(g.faq[0].answer, "Smart casual most nights.");
    }

    #[test]
    fn description_keeps_paragraphs() {
        let md = "## Ship Overview\n### Description\nLine one.\nLine two.\n\nLine three.\nLine four.\n";
        let g = parse_ship_guide(md);
        assert_eq!(g.description, "Line one.\nLine two.\n\nLine three.\nLine four.");
        assert_eq!(g.description.matches("\n\n").count(), 1);
    }

    #[test]
    fn room_service_is_line_joined() {
        let md = "## Dining\n### Room Service\n24 hours\n\nContinental breakfast free\n";
        let g = parse_ship_guide(md);
        assert_eq!(g.dining.room_service.as_deref(), Some("24 hours\nContinental breakfast free"));
    }

    #[test]
    fn highlights_in_order() {
        let md = "## Ship Overview\n### Highlights\n- SkyDome\n- Sea View pool\n- Gin distillery: on board\n";
        let g = parse_ship_guide(md);
        assert_eq!(g.highlights, vec!["SkyDome", "Sea View pool", "Gin distillery: on board"]);
    }

    #[test]
    fn end_to_end() {
        let md = "# Test Ship\n## Basic Information\n- Slug: test-ship\n- Cruise Line Name: Test Line\n## Ship Overview\n- Tagline: A lovely ship\n";
        let g = parse_ship_guide(md);
        assert_eq!(g.name, "Test Ship");
        assert_eq!(g.slug, "test-ship");
        assert_eq!(g.cruise_line_name, "Test Line");
        assert_eq!(g.tagline, "A lovely ship");
        assert_eq!(g.display_name, "Test Line Test Ship");
    }

    #[test]
    fn tagline_keeps_colons_slug_does_not() {
        let md = "## Basic Information\n- Slug: iona:old\n## Ship Overview\n- Tagline: Sun: sea and sky\n";
        let g = parse_ship_guide(md);
        assert_eq!(g.slug, "iona");
        assert_eq!(g.tagline, "Sun: sea and sky");
    }

    #[test]
    fn only_first_title_counts() {
        let g = parse_ship_guide("# First\n# Second\n");
        assert_eq!(g.name, "First");
    }

    #[test]
    fn seo_metadata() {
        let md = "# Iona\n## SEO Metadata\n- Meta Title: Iona: the guide\n- Keywords: iona, p&o, , cruise\n";
        let g = parse_ship_guide(md);
        assert_eq!(g.meta.title, "Iona: the guide");
        assert_eq!(g.meta.keywords, vec!["iona", "p&o", "cruise"]);
    }

    #[test]
    fn cabin_categories_from_minor_headings() {
        let md = "## Cabins\n### Overview\nPlenty of choice.\n#### Inside\n- Size: 150 sq ft\n#### Balcony\n- Size: 190 sq ft\nPrivate balcony.\n";
        let g = parse_ship_guide(md);
        assert_eq!(g.cabins.overview.as_deref(), Some("Plenty of choice."));
        let c = &g.cabins.categories;
        assert_eq!(c.len(), 2);
        assert_eq!(c[0].size, "150 sq ft");
        assert_eq!(c[1].description, "Private balcony.");
    }

    #[test]
    fn deck_plans() {
        let md = "## Deck Plans\n1. **Deck 5 - Atrium**\n- Highlights: Shops, Guest Services\n2. **Sun Loungers**\n- Highlights: ignored\n3. **Deck 17 - Sun Deck**\n";
        let g = parse_ship_guide(md);
        assert_eq!(g.deck_plans.len(), 2);
        assert_eq!(g.deck_plans[0].number, Some(5));
        assert_eq!(g.deck_plans[0].name, "Atrium");
        assert_eq!(g.deck_plans[0].highlights, vec!["Shops", "Guest Services"]);
        assert_eq!(g.deck_plans[1].name, "Sun Deck");
    }

    #[test]
    fn subsection_change_flushes_record() {
        let md = "## Dining\n### Restaurants\n1. **Epicurean**\n### Bars\n1. **Anderson's**\n- Hours: 17:00-late\n";
        let g = parse_ship_guide(md);
        assert_eq!(g.dining.restaurants.len(), 1);
        assert_eq!(g.dining.bars.len(), 1);
        assert_eq!(g.dining.bars[0].hours, "17:00-late");
    }

    #[test]
    fn unrouted_lines_are_dropped() {
        let md = "# A\n## Gallery\n- Image: https://img\nSome caption\n## Basic Information\n- Slug: a\n- Colour: blue\n";
        let g = parse_ship_guide(md);
        assert_eq!(g.slug, "a");
        assert!(g.highlights.is_empty());
    }

    #[test]
    fn scanner_state_between_lines() {
        let scanner = feed(ShipScanner::default(), "## Kids\n### Kids Clubs\n1. **Reef**\n- Ages: 2-5");
        assert_eq!(scanner.cursor().subsection, "Kids Clubs");
        assert!(matches!(scanner.open_record(), Some(ShipRecord::KidsClub(k)) if k.ages == "2-5"));
        assert!(scanner.guide().kids.clubs.is_empty());

        let guide = scanner.finish();
        assert_eq!(guide.kids.clubs.len(), 1);
    }

    #[test]
    fn barbecue_stays_a_restaurant() {
        let md = "## Dining\n### Restaurants and Bars\n1. **Smokehouse**\n- Type: Barbecue\n- Cuisine: American\n";
        let g = parse_ship_guide(md);
        assert!(g.dining.bars.is_empty());
        assert_eq!(g.dining.restaurants.len(), 1);
        assert_eq!(g.dining.restaurants[0].cuisine, "American");
    }

    #[test]
    fn lounge_in_shared_list_keeps_every_field() {
        let md = "## Dining\n### Restaurants and Bars\n1. **Crow's Nest**\n- Price: $$\n- Type: Lounge\n- Cuisine: Tapas\n2. **Sindhu**\n- Type: Speciality\n";
        let g = parse_ship_guide(md);
        assert_eq!(g.dining.bars.len(), 1);
        let bar = &g.dining.bars[0];
        assert_eq!(bar.name, "Crow's Nest");
        assert_eq!(bar.kind, "Lounge");
        assert_eq!(bar.price, "$$");
        assert_eq!(bar.cuisine, "Tapas");
        assert_eq!(g.dining.restaurants.len(), 1);
        assert_eq!(g.dining.restaurants[0].name, "Sindhu");
    }

    #[test]
    fn section_intro_and_introduction_subsection_both_kept() {
        let g = parse_ship_guide("## Dining\nFirst intro paragraph.\n### Introduction\nSecond.");
        assert_eq!(g.dining.introduction.as_deref(), Some("First intro paragraph.\n\nSecond."));
    }

    #[test]
    fn description_split_by_other_subsection_is_kept() {
        let md = "## Ship Overview\n### Description\nOne.\n### Highlights\n- Rope course\n### Description\nTwo.";
        let g = parse_ship_guide(md);
        assert_eq!(g.description, "One.\n\nTwo.");
    }

    #[test]
    fn iona_fixture() {
        let md = std::fs::read_to_string("tests/fixtures/iona.md").unwrap();
        let g = parse_ship_guide(&md);
        assert_eq!(g.slug, "iona");
        assert_eq!(g.display_name, "P&O Cruises Iona");
        assert_eq!(g.year_built, Some(2020));
        assert_eq!(g.highlights.len(), 3);
        assert_eq!(g.cabins.categories.len(), 3);
        assert_eq!(g.dining.restaurants.len(), 2);
        assert_eq!(g.dining.bars.len(), 2);
        assert_eq!(g.entertainment.venues.len(), 2);
        assert_eq!(g.activities.pools.len(), 2);
        assert_eq!(g.kids.clubs.len(), 2);
        assert_eq!(g.deck_plans.len(), 2);
        assert_eq!(g.faq.len(), 3);
        assert_eq!(g.meta.keywords.len(), 3);
        assert!(g.featured);
        assert_eq!(g.status, "published");
    }
}
