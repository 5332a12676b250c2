pub mod fields;
pub mod lines;
pub mod port;
pub mod ship;
pub mod state;
pub mod text;
pub mod tidy;

use crate::guide::{PortGuide, ShipGuide};
use lines::{classify_lines, Line};

/// Markdown → classified lines → scanner fold → finalized ship guide.
/// Never fails; missing data shows up as defaults.
pub fn parse_ship_guide(markdown: &str) -> ShipGuide {
    state::scan::<ship::ShipScanner>(markdown)
}

/// Same pipeline for port guides.
pub fn parse_port_guide(markdown: &str) -> PortGuide {
    state::scan::<port::PortScanner>(markdown)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GuideKind {
    Ship,
    Port,
}

impl GuideKind {
    /// A document with any port-only section is a port guide.
    pub fn detect(markdown: &str) -> GuideKind {
        let is_port = classify_lines(markdown).iter().any(|line| match line {
            Line::Section(name) => port::PORT_SECTIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(name)),
            _ => false,
        });
        if is_port {
            GuideKind::Port
        } else {
            GuideKind::Ship
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GuideKind::Ship => "ship",
            GuideKind::Port => "port",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_port() {
        assert_eq!(GuideKind::detect("# Palma\n## Getting Around\nWalk."), GuideKind::Port);
    }

    #[test]
    fn detect_defaults_to_ship() {
        assert_eq!(GuideKind::detect("# Iona\n## Dining\n"), GuideKind::Ship);
        assert_eq!(GuideKind::detect(""), GuideKind::Ship);
    }

    #[test]
    fn empty_input_is_total() {
        let g = parse_ship_guide("");
        assert!(g.slug.is_empty());
        assert!(g.name.is_empty());
        assert_eq!(g.status, "draft");
        let p = parse_port_guide("");
        assert!(p.slug.is_empty());
    }

    #[test]
    fn fixtures_detect_their_kind() {
        let ship = std::fs::read_to_string("tests/fixtures/iona.md").unwrap();
        let port = std::fs::read_to_string("tests/fixtures/barcelona.md").unwrap();
        assert_eq!(GuideKind::detect(&ship), GuideKind::Ship);
        assert_eq!(GuideKind::detect(&port), GuideKind::Port);
    }
}
