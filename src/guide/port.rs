use serde::{Deserialize, Serialize};

use super::{FaqPair, Meta, DEFAULT_STATUS};
use crate::parser::tidy::impl_tidy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortGuide {
    pub name: String,
    pub slug: String,
    pub country: String,
    pub region: String,
    pub port_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub tagline: String,
    pub description: String,
    pub status: String,
    pub featured: bool,
    pub highlights: Vec<String>,
    pub getting_around: GettingAround,
    pub attractions: Vec<Attraction>,
    pub beaches: Vec<Beach>,
    pub practical: Practical,
    pub weather: Weather,
    pub faq: Vec<FaqPair>,
    pub meta: Meta,
}

impl Default for PortGuide {
    fn default() -> Self {
        PortGuide {
            name: String::new(),
            slug: String::new(),
            country: String::new(),
            region: String::new(),
            port_code: String::new(),
            latitude: None,
            longitude: None,
            tagline: String::new(),
            description: String::new(),
            status: DEFAULT_STATUS.to_string(),
            featured: false,
            highlights: Vec::new(),
            getting_around: GettingAround::default(),
            attractions: Vec::new(),
            beaches: Vec::new(),
            practical: Practical::default(),
            weather: Weather::default(),
            faq: Vec::new(),
            meta: Meta::default(),
        }
    }
}

impl_tidy!(PortGuide {
    name, slug, country, region, port_code, tagline, description, status, highlights,
    getting_around, attractions, beaches, practical, weather, faq, meta,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GettingAround {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_the_port: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transport: Vec<String>,
}

impl_tidy!(GettingAround { overview, from_the_port, transport });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attraction {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub price: String,
    pub description: String,
}

impl_tidy!(Attraction { name, kind, distance, duration, price, description });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Beach {
    pub name: String,
    pub distance: String,
    pub description: String,
}

impl_tidy!(Beach { name, distance, description });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Practical {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipping: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi: Option<String>,
}

impl_tidy!(Practical { currency, language, time_zone, tipping, wifi });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Weather {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>,
}

impl_tidy!(Weather { climate, best_time });
