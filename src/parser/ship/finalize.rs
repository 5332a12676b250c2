use crate::guide::ShipGuide;
use crate::parser::fields::truncate_chars;
use crate::parser::tidy::Tidy;

pub const META_DESCRIPTION_CHARS: usize = 160;

/// Derived defaults and the final trim. The open record must already be
/// flushed.
pub fn finalize(mut guide: ShipGuide, first_line_title: Option<&str>) -> ShipGuide {
    if guide.name.trim().is_empty() {
        if let Some(title) = first_line_title {
            guide.name = title.to_string();
        }
    }

    let name = guide.name.trim().to_string();
    let line = guide.cruise_line_name.trim();

    if guide.display_name.trim().is_empty() {
        guide.display_name = if line.is_empty() {
            name.clone()
        } else {
            format!("{} {}", line, name)
        };
    }

    if guide.meta.title.trim().is_empty() {
        guide.meta.title = format!("{} Ship Guide | Cabins, Dining, Entertainment", name);
    }
    if guide.meta.description.trim().is_empty() {
        guide.meta.description = truncate_chars(guide.description.trim(), META_DESCRIPTION_CHARS);
    }

    guide.tidy();
    guide
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ShipGuide {
        ShipGuide {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn display_name_with_line() {
        let mut g = named("Iona");
        g.cruise_line_name = "P&O Cruises".into();
        assert_eq!(finalize(g, None).display_name, "P&O Cruises Iona");
    }

    #[test]
    fn display_name_without_line() {
        assert_eq!(finalize(named("Iona"), None).display_name, "Iona");
    }

    #[test]
    fn explicit_display_name_kept() {
        let mut g = named("Iona");
        g.cruise_line_name = "P&O Cruises".into();
        g.display_name = "P&O Iona".into();
        assert_eq!(finalize(g, None).display_name, "P&O Iona");
    }

    #[test]
    fn meta_defaults() {
        let mut g = named("Iona");
        g.description = "x".repeat(200);
        let g = finalize(g, None);
        assert_eq!(g.meta.title, "Iona Ship Guide | Cabins, Dining, Entertainment");
        assert_eq!(g.meta.description.chars().count(), 160);
    }

    #[test]
    fn explicit_meta_kept() {
        let mut g = named("Iona");
        g.meta.title = "Custom".into();
        g.meta.description = "Short".into();
        let g = finalize(g, None);
        assert_eq!(g.meta.title, "Custom");
        assert_eq!(g.meta.description, "Short");
    }

    #[test]
    fn first_line_title_fills_empty_name() {
        let g = finalize(ShipGuide::default(), Some("Arvia"));
        assert_eq!(g.name, "Arvia");
        assert_eq!(g.display_name, "Arvia");
    }

    #[test]
    fn empty_guide_stays_total() {
        let g = finalize(ShipGuide::default(), None);
        assert!(g.name.is_empty());
        assert_eq!(g.status, "draft");
    }

    #[test]
    fn meta_title_derived_without_name() {
        let g = finalize(ShipGuide { slug: "iona".into(), ..Default::default() }, None);
        assert_eq!(g.meta.title, "Ship Guide | Cabins, Dining, Entertainment");
    }

    #[test]
    fn nested_strings_trimmed() {
        let mut g = named("Iona");
        g.dining.tips = Some("  book early\n\nuse the app  ".into());
        let g = finalize(g, None);
        assert_eq!(g.dining.tips.as_deref(), Some("book early\n\nuse the app"));
    }
}
