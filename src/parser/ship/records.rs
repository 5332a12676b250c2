use std::sync::LazyLock;

use regex::Regex;

use crate::guide::ship::{Bar, CabinCategory, DeckPlan, KidsClub, Pool, Restaurant, ShipGuide, Venue};
use crate::guide::FaqPair;
use crate::parser::fields::{self, append_spaced, normalize_label, parse_bool, split_list, ValueRule};

static DECK_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+\*\*Deck").unwrap());
static DECK_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Deck\s+(\d+)").unwrap());
static DECK_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*.*?-\s*(.+?)\*\*").unwrap());

/// Which record a marker opens in the current subsection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Restaurant,
    /// Shared "Restaurants and Bars" list; `Type: Bar` re-tags the record.
    RestaurantOrBar,
    Bar,
    Venue,
    Pool,
    KidsClub,
    CabinCategory,
    DeckPlan,
}

/// The single open record of a ship guide scan.
#[derive(Debug, Clone, PartialEq)]
pub enum ShipRecord {
    Restaurant(Restaurant),
    Bar(Bar),
    Venue(Venue),
    Pool(Pool),
    KidsClub(KidsClub),
    CabinCategory(CabinCategory),
    DeckPlan(DeckPlan),
    Faq(FaqPair),
}

impl ShipRecord {
    pub fn open(kind: RecordKind, name: &str) -> ShipRecord {
        let name = name.trim().to_string();
        match kind {
            RecordKind::Restaurant | RecordKind::RestaurantOrBar => {
                ShipRecord::Restaurant(Restaurant { name, ..Default::default() })
            }
            RecordKind::Bar => ShipRecord::Bar(Bar { name, ..Default::default() }),
            RecordKind::Venue => ShipRecord::Venue(Venue { name, ..Default::default() }),
            RecordKind::Pool => ShipRecord::Pool(Pool { name, ..Default::default() }),
            RecordKind::KidsClub => ShipRecord::KidsClub(KidsClub { name, ..Default::default() }),
            RecordKind::CabinCategory => {
                ShipRecord::CabinCategory(CabinCategory { name, ..Default::default() })
            }
            RecordKind::DeckPlan => ShipRecord::DeckPlan(DeckPlan { name, ..Default::default() }),
        }
    }

    /// `3. **Deck 5 - Promenade**` → deck 5, "Promenade". Anything that is
    /// not a deck marker yields `None`.
    pub fn deck_plan(raw: &str) -> Option<ShipRecord> {
        if !DECK_MARKER_RE.is_match(raw) {
            return None;
        }
        let number = DECK_NUMBER_RE
            .captures(raw)
            .and_then(|c| c[1].parse::<i64>().ok());
        let name = DECK_NAME_RE
            .captures(raw)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default();
        Some(ShipRecord::DeckPlan(DeckPlan {
            number,
            name,
            highlights: Vec::new(),
        }))
    }

    pub fn faq(question: &str) -> ShipRecord {
        ShipRecord::Faq(FaqPair {
            question: question.trim().to_string(),
            answer: String::new(),
        })
    }

    /// Apply a `- Label: value` bullet. Returns false when the label means
    /// nothing for this kind of record.
    pub fn set_field(&mut self, label: &str, rest: &str) -> bool {
        let label = normalize_label(label);
        let seg = || fields::value(rest, ValueRule::Segment);
        let full = || fields::value(rest, ValueRule::Rejoined);

        match self {
            ShipRecord::Restaurant(r) => match label.as_str() {
                "cuisine" => r.cuisine = seg(),
                "type" => r.kind = seg(),
                "price" | "cost" => r.price = full(),
                "hours" | "opening hours" => r.hours = full(),
                "dress code" => r.dress_code = full(),
                "description" => r.description = full(),
                _ => return false,
            },
            ShipRecord::Bar(b) => match label.as_str() {
                "type" => b.kind = seg(),
                "cuisine" => b.cuisine = seg(),
                "price" | "cost" => b.price = full(),
                "hours" | "opening hours" => b.hours = full(),
                "dress code" => b.dress_code = full(),
                "description" => b.description = full(),
                _ => return false,
            },
            ShipRecord::Venue(v) => match label.as_str() {
                "type" => v.kind = seg(),
                "capacity" => v.capacity = seg(),
                "description" => v.description = full(),
                _ => return false,
            },
            ShipRecord::Pool(p) => match label.as_str() {
                "location" | "deck" => p.location = seg(),
                "adults only" => p.adults_only = parse_bool(&seg()),
                "description" => p.description = full(),
                _ => return false,
            },
            ShipRecord::KidsClub(k) => match label.as_str() {
                "ages" | "age range" => k.ages = seg(),
                "hours" | "opening hours" => k.hours = full(),
                "description" => k.description = full(),
                _ => return false,
            },
            ShipRecord::CabinCategory(c) => match label.as_str() {
                "size" => c.size = seg(),
                "occupancy" => c.occupancy = seg(),
                "price from" | "price" => c.price_from = full(),
                "description" => c.description = full(),
                "features" => c.features = split_list(&full()),
                _ => return false,
            },
            ShipRecord::DeckPlan(d) => match label.as_str() {
                "highlights" => d.highlights = split_list(&full()),
                _ => return false,
            },
            ShipRecord::Faq(_) => return false,
        }
        true
    }

    /// Loose text under an open record. FAQ answers wrap; everything else
    /// continues its description.
    pub fn append_text(&mut self, text: &str) {
        match self {
            ShipRecord::Faq(f) => append_spaced(&mut f.answer, text),
            ShipRecord::Restaurant(r) => append_spaced(&mut r.description, text),
            ShipRecord::Bar(b) => append_spaced(&mut b.description, text),
            ShipRecord::Venue(v) => append_spaced(&mut v.description, text),
            ShipRecord::Pool(p) => append_spaced(&mut p.description, text),
            ShipRecord::KidsClub(k) => append_spaced(&mut k.description, text),
            ShipRecord::CabinCategory(c) => append_spaced(&mut c.description, text),
            ShipRecord::DeckPlan(_) => {}
        }
    }

    /// A plain `- item` bullet under an open record.
    pub fn push_bullet(&mut self, item: &str) {
        match self {
            ShipRecord::CabinCategory(c) => c.features.push(item.trim().to_string()),
            ShipRecord::DeckPlan(d) => d.highlights.push(item.trim().to_string()),
            other => other.append_text(item),
        }
    }

    /// In a shared restaurants/bars list, a restaurant typed as a bar moves
    /// to the bar list. Applied when the record is flushed, so every field
    /// is known by then.
    pub fn retag(self) -> ShipRecord {
        match self {
            ShipRecord::Restaurant(r) if looks_like_bar(&r.kind) => ShipRecord::Bar(Bar::from(r)),
            other => other,
        }
    }

    /// Append the record to its list in `guide`.
    pub fn flush_into(self, guide: &mut ShipGuide) {
        match self {
            ShipRecord::Restaurant(r) => guide.dining.restaurants.push(r),
            ShipRecord::Bar(b) => guide.dining.bars.push(b),
            ShipRecord::Venue(v) => guide.entertainment.venues.push(v),
            ShipRecord::Pool(p) => guide.activities.pools.push(p),
            ShipRecord::KidsClub(k) => guide.kids.clubs.push(k),
            ShipRecord::CabinCategory(c) => guide.cabins.categories.push(c),
            ShipRecord::DeckPlan(d) => guide.deck_plans.push(d),
            ShipRecord::Faq(f) => guide.faq.push(f),
        }
    }
}

/// Whole words only: "Cocktail Bar" and "Lounge" are bars, "Barbecue" is not.
fn looks_like_bar(kind: &str) -> bool {
    kind.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| matches!(word, "bar" | "lounge" | "pub"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_marker() {
        let rec = ShipRecord::deck_plan("5. **Deck 7 - Promenade Deck**").unwrap();
        assert_eq!(
            rec,
            ShipRecord::DeckPlan(DeckPlan {
                number: Some(7),
                name: "Promenade Deck".into(),
                highlights: vec![],
            })
        );
    }

    #[test]
    fn deck_marker_without_name() {
        let rec = ShipRecord::deck_plan("1. **Deck 2**").unwrap();
        assert!(matches!(rec, ShipRecord::DeckPlan(d) if d.number == Some(2) && d.name.is_empty()));
    }

    #[test]
    fn non_deck_marker_rejected() {
        assert!(ShipRecord::deck_plan("1. **Sun Terrace**").is_none());
    }

    #[test]
    fn restaurant_fields() {
        let mut rec = ShipRecord::open(RecordKind::Restaurant, "The Olive Grove");
        assert!(rec.set_field("Cuisine", " Mediterranean"));
        assert!(rec.set_field("Hours", " 18:00 - 22:00"));
        assert!(!rec.set_field("Capacity", " 120"));
        let ShipRecord::Restaurant(r) = rec else { panic!("not a restaurant") };
        assert_eq!(r.cuisine, "Mediterranean");
        assert_eq!(r.hours, "18:00 - 22:00");
    }

    #[test]
    fn segment_rule_truncates_at_colon() {
        let mut rec = ShipRecord::open(RecordKind::KidsClub, "Reef");
        rec.set_field("Ages", " 3-6: toddlers");
        assert!(matches!(rec, ShipRecord::KidsClub(k) if k.ages == "3-6"));
    }

    #[test]
    fn retag_moves_typed_bar() {
        let mut rec = ShipRecord::open(RecordKind::RestaurantOrBar, "Crow's Nest");
        rec.set_field("Type", " Cocktail Bar");
        rec.set_field("Description", " Views forward");
        let rec = rec.retag();
        let mut guide = ShipGuide::default();
        rec.flush_into(&mut guide);
        assert!(guide.dining.restaurants.is_empty());
        assert_eq!(guide.dining.bars.len(), 1);
        assert_eq!(guide.dining.bars[0].description, "Views forward");
    }

    #[test]
    fn retag_carries_restaurant_fields() {
        let mut rec = ShipRecord::open(RecordKind::RestaurantOrBar, "Crow's Nest");
        rec.set_field("Price", " $$");
        rec.set_field("Cuisine", " Tapas");
        rec.set_field("Type", " Lounge");
        let ShipRecord::Bar(b) = rec.retag() else { panic!("not a bar") };
        assert_eq!(b.kind, "Lounge");
        assert_eq!(b.price, "$$");
        assert_eq!(b.cuisine, "Tapas");
    }

    #[test]
    fn bar_words_matched_whole() {
        assert!(looks_like_bar("Cocktail Bar"));
        assert!(looks_like_bar("pub"));
        assert!(looks_like_bar("Wine bar & lounge"));
        assert!(!looks_like_bar("Barbecue"));
        assert!(!looks_like_bar("Publican's Grill"));
    }

    #[test]
    fn retag_keeps_restaurants() {
        let mut rec = ShipRecord::open(RecordKind::RestaurantOrBar, "Keel & Cow");
        rec.set_field("Type", " Speciality");
        assert!(matches!(rec.retag(), ShipRecord::Restaurant(_)));
    }

    #[test]
    fn faq_answer_wraps() {
        let mut rec = ShipRecord::faq("Is there Wi-Fi?");
        rec.append_text("Yes.");
        rec.append_text("Packages are sold onboard.");
        assert!(matches!(rec, ShipRecord::Faq(f) if f.answer == "Yes. Packages are sold onboard."));
    }

    #[test]
    fn cabin_bullets_are_features() {
        let mut rec = ShipRecord::open(RecordKind::CabinCategory, "Balcony");
        rec.set_field("Features", " TV, safe");
        rec.push_bullet("Sofa bed");
        assert!(matches!(rec, ShipRecord::CabinCategory(c) if c.features == vec!["TV", "safe", "Sofa bed"]));
    }
}
