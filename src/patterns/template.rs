//! Front-page template sequencing.
//!
//! Maps an ordered list of section names onto block references: template
//! parts for the chrome (header, footer) and pattern references for
//! everything else.

use crate::constants::PATTERN_NAMESPACE;

/// Builds the front-page template body for an ordered section list.
///
/// Each section name emits one reference line, in input order, duplicates
/// included. `header` and `footer` resolve to template parts; the known
/// content sections (`hero`, `benefits`, `about`, `services`, `contact`)
/// resolve to their registered patterns; any other name falls through to a
/// generic pattern reference using the name itself as the slug, so custom
/// sections render without special-casing here.
#[must_use]
pub fn front_page_template(sections: &[String]) -> String {
    sections
        .iter()
        .map(|name| section_reference(name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn section_reference(name: &str) -> String {
    match name {
        "header" => "<!-- wp:template-part {\"slug\":\"header\",\"tagName\":\"header\"} /-->"
            .to_string(),
        "footer" => "<!-- wp:template-part {\"slug\":\"footer\",\"tagName\":\"footer\"} /-->"
            .to_string(),
        "hero" | "benefits" | "about" | "services" | "contact" => pattern_reference(name),
        unknown => pattern_reference(unknown),
    }
}

fn pattern_reference(slug: &str) -> String {
    format!("<!-- wp:pattern {{\"slug\":\"{PATTERN_NAMESPACE}/{slug}\"}} /-->")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_order_preserved() {
        let template = front_page_template(&sections(&["hero", "header", "contact"]));
        let lines: Vec<_> = template.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("wp:pattern"));
        assert!(lines[0].contains("blocksmith/hero"));
        assert!(lines[1].contains("wp:template-part"));
        assert!(lines[1].contains("\"slug\":\"header\""));
        assert!(lines[2].contains("blocksmith/contact"));
    }

    #[test]
    fn test_header_footer_are_template_parts() {
        let template = front_page_template(&sections(&["header", "footer"]));
        let lines: Vec<_> = template.lines().collect();
        assert!(lines[0].contains("\"tagName\":\"header\""));
        assert!(lines[1].contains("\"tagName\":\"footer\""));
        assert!(!template.contains("wp:pattern"));
    }

    #[test]
    fn test_unknown_section_falls_through() {
        let template = front_page_template(&sections(&["testimonials"]));
        assert_eq!(
            template,
            "<!-- wp:pattern {\"slug\":\"blocksmith/testimonials\"} /-->"
        );
    }

    #[test]
    fn test_duplicates_kept_verbatim() {
        let template = front_page_template(&sections(&["hero", "hero"]));
        let lines: Vec<_> = template.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1]);
    }

    #[test]
    fn test_empty_sections_empty_template() {
        assert_eq!(front_page_template(&[]), "");
    }
}
