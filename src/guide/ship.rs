use serde::{Deserialize, Serialize};

use super::{FaqPair, Meta, DEFAULT_STATUS};
use crate::parser::tidy::impl_tidy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShipGuide {
    pub name: String,
    pub slug: String,
    pub cruise_line_slug: String,
    pub cruise_line_name: String,
    pub year_built: Option<i64>,
    pub year_refurbished: Option<i64>,
    pub gross_tonnage: Option<i64>,
    pub length_meters: Option<i64>,
    pub beam_meters: Option<i64>,
    pub passenger_capacity: Option<i64>,
    pub crew_count: Option<i64>,
    pub deck_count: Option<i64>,
    pub speed_knots: Option<f64>,
    pub tagline: String,
    pub display_name: String,
    pub description: String,
    pub status: String,
    pub featured: bool,
    pub highlights: Vec<String>,
    pub cabins: Cabins,
    pub onboard: Onboard,
    pub dining: Dining,
    pub entertainment: Entertainment,
    pub activities: Activities,
    pub family: Family,
    pub kids: Kids,
    pub accessibility: Accessibility,
    pub wellness: Wellness,
    pub meta: Meta,
    pub deck_plans: Vec<DeckPlan>,
    pub faq: Vec<FaqPair>,
}

impl Default for ShipGuide {
    fn default() -> Self {
        ShipGuide {
            name: String::new(),
            slug: String::new(),
            cruise_line_slug: String::new(),
            cruise_line_name: String::new(),
            year_built: None,
            year_refurbished: None,
            gross_tonnage: None,
            length_meters: None,
            beam_meters: None,
            passenger_capacity: None,
            crew_count: None,
            deck_count: None,
            speed_knots: None,
            tagline: String::new(),
            display_name: String::new(),
            description: String::new(),
            status: DEFAULT_STATUS.to_string(),
            featured: false,
            highlights: Vec::new(),
            cabins: Cabins::default(),
            onboard: Onboard::default(),
            dining: Dining::default(),
            entertainment: Entertainment::default(),
            activities: Activities::default(),
            family: Family::default(),
            kids: Kids::default(),
            accessibility: Accessibility::default(),
            wellness: Wellness::default(),
            meta: Meta::default(),
            deck_plans: Vec::new(),
            faq: Vec::new(),
        }
    }
}

impl_tidy!(ShipGuide {
    name, slug, cruise_line_slug, cruise_line_name, tagline, display_name, description, status,
    highlights, cabins, onboard, dining, entertainment, activities, family, kids, accessibility,
    wellness, meta, deck_plans, faq,
});

// ── Cabins ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cabins {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CabinCategory>,
}

impl_tidy!(Cabins { overview, categories });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CabinCategory {
    pub name: String,
    pub size: String,
    pub occupancy: String,
    pub price_from: String,
    pub description: String,
    pub features: Vec<String>,
}

impl_tidy!(CabinCategory { name, size, occupancy, price_from, description, features });

// ── Onboard ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Onboard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dress_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gratuities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<String>,
}

impl_tidy!(Onboard { atmosphere, dress_code, currency, gratuities, wifi, smoking });

// ── Dining ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dining {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub restaurants: Vec<Restaurant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bars: Vec<Bar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

impl_tidy!(Dining { introduction, restaurants, bars, room_service, tips });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: String,
    pub hours: String,
    pub dress_code: String,
    pub description: String,
}

impl_tidy!(Restaurant { name, cuisine, kind, price, hours, dress_code, description });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bar {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub hours: String,
    pub description: String,
    /// Set when the bar came from a shared restaurants and bars list.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cuisine: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub price: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dress_code: String,
}

impl_tidy!(Bar { name, kind, hours, description, cuisine, price, dress_code });

impl From<Restaurant> for Bar {
    fn from(r: Restaurant) -> Self {
        Bar {
            name: r.name,
            kind: r.kind,
            hours: r.hours,
            description: r.description,
            cuisine: r.cuisine,
            price: r.price,
            dress_code: r.dress_code,
        }
    }
}

// ── Entertainment ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Entertainment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub venues: Vec<Venue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shows: Vec<String>,
}

impl_tidy!(Entertainment { introduction, venues, shows });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Venue {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: String,
    pub description: String,
}

impl_tidy!(Venue { name, kind, capacity, description });

// ── Activities ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Activities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pools: Vec<Pool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sports: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other: Vec<String>,
}

impl_tidy!(Activities { overview, pools, sports, other });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pool {
    pub name: String,
    pub location: String,
    pub adults_only: bool,
    pub description: String,
}

impl_tidy!(Pool { name, location, description });

// ── Family & kids ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Family {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl_tidy!(Family { overview, features });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Kids {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clubs: Vec<KidsClub>,
}

impl_tidy!(Kids { overview, clubs });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KidsClub {
    pub name: String,
    pub ages: String,
    pub hours: String,
    pub description: String,
}

impl_tidy!(KidsClub { name, ages, hours, description });

// ── Accessibility & wellness ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Accessibility {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabins: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl_tidy!(Accessibility { overview, cabins, features });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Wellness {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub treatments: Vec<String>,
}

impl_tidy!(Wellness { spa, fitness, treatments });

// ── Deck plans ──

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeckPlan {
    pub number: Option<i64>,
    pub name: String,
    pub highlights: Vec<String>,
}

impl_tidy!(DeckPlan { name, highlights });
