//! Guide documents produced by the Markdown importers.

pub mod port;
pub mod ship;

use serde::{Deserialize, Serialize};

use crate::parser::tidy::impl_tidy;

pub use port::PortGuide;
pub use ship::ShipGuide;

pub const DEFAULT_STATUS: &str = "draft";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl_tidy!(Meta { title, description, keywords });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqPair {
    pub question: String,
    pub answer: String,
}

impl_tidy!(FaqPair { question, answer });

/// Fields every guide kind shares, for the import layer.
pub trait Guide {
    fn slug(&self) -> &str;
    fn name(&self) -> &str;
    fn status(&self) -> &str;
    fn featured(&self) -> bool;
}

impl Guide for ShipGuide {
    fn slug(&self) -> &str {
        &self.slug
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn status(&self) -> &str {
        &self.status
    }
    fn featured(&self) -> bool {
        self.featured
    }
}

impl Guide for PortGuide {
    fn slug(&self) -> &str {
        &self.slug
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn status(&self) -> &str {
        &self.status
    }
    fn featured(&self) -> bool {
        self.featured
    }
}
