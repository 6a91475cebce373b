//! Block pattern composition from project content.
//!
//! Each pattern is a fixed Gutenberg markup skeleton with content fields
//! substituted in. All six patterns are always produced; which of them the
//! front page actually renders is the template sequencer's concern.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{Palette, ProjectConfig};

/// A named, reusable block-markup fragment for one page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Pattern slug (e.g. "hero").
    pub slug: String,
    /// Human-readable pattern title.
    pub title: String,
    /// Gutenberg block markup.
    pub html: String,
}

impl Pattern {
    fn new(slug: &str, title: &str, html: String) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            html,
        }
    }
}

/// Composes the six block patterns for a project.
///
/// `palette` is the harmonized palette driving color bindings (hero overlay
/// from `primary`, about background from `secondary`). `year` is stamped
/// into the footer copyright line. Output order is fixed: header, hero,
/// benefits, about, contact, footer.
#[must_use]
pub fn compose_patterns(project: &ProjectConfig, palette: &Palette, year: i32) -> Vec<Pattern> {
    vec![
        Pattern::new("header", "Header", header_html()),
        Pattern::new("hero", "Hero", hero_html(project, palette)),
        Pattern::new("benefits", "Benefits", benefits_html(project)),
        Pattern::new("about", "About", about_html(palette)),
        Pattern::new("contact", "Contact", contact_html(project)),
        Pattern::new("footer", "Footer", footer_html(project, year)),
    ]
}

/// Site logo and navigation; no content substitution.
fn header_html() -> String {
    "<!-- wp:group {\"layout\":{\"type\":\"flex\",\"justifyContent\":\"space-between\"}} -->\n\
     <div class=\"wp-block-group\"><!-- wp:site-logo {\"width\":48} /-->\n\
     <!-- wp:navigation /--></div>\n\
     <!-- /wp:group -->"
        .to_string()
}

fn hero_html(project: &ProjectConfig, palette: &Palette) -> String {
    let headline = project
        .content
        .headline
        .as_deref()
        .unwrap_or(defaults::HEADLINE);
    let cta = project.content.cta.as_deref().unwrap_or(defaults::CTA);
    let overlay = palette
        .color_of("primary")
        .unwrap_or(defaults::PRIMARY_COLOR);

    // The cover image markup is only emitted when a hero image exists.
    let (url_attr, image_tag) = match project.hero_image_path.as_deref() {
        Some(path) => (
            format!("\"url\":\"{path}\","),
            format!(
                "<img class=\"wp-block-cover__image-background\" alt=\"\" src=\"{path}\" data-object-fit=\"cover\"/>"
            ),
        ),
        None => (String::new(), String::new()),
    };

    format!(
        "<!-- wp:cover {{{url_attr}\"dimRatio\":60,\"customOverlayColor\":\"{overlay}\",\"minHeight\":80,\"minHeightUnit\":\"vh\",\"align\":\"full\"}} -->\n\
         <div class=\"wp-block-cover alignfull\"><span aria-hidden=\"true\" class=\"wp-block-cover__background has-background-dim-60 has-background-dim\" style=\"background-color:{overlay}\"></span>{image_tag}<div class=\"wp-block-cover__inner-container\">\n\
         <!-- wp:heading {{\"textAlign\":\"center\",\"level\":1}} -->\n\
         <h1 class=\"wp-block-heading has-text-align-center\">{headline}</h1>\n\
         <!-- /wp:heading -->\n\
         <!-- wp:paragraph {{\"align\":\"center\"}} -->\n\
         <p class=\"has-text-align-center\">{subheading}</p>\n\
         <!-- /wp:paragraph -->\n\
         <!-- wp:buttons {{\"layout\":{{\"type\":\"flex\",\"justifyContent\":\"center\"}}}} -->\n\
         <div class=\"wp-block-buttons\"><!-- wp:button -->\n\
         <div class=\"wp-block-button\"><a class=\"wp-block-button__link wp-element-button\">{cta}</a></div>\n\
         <!-- /wp:button --></div>\n\
         <!-- /wp:buttons -->\n\
         </div></div>\n\
         <!-- /wp:cover -->",
        subheading = defaults::SUBHEADING,
    )
}

fn benefits_html(project: &ProjectConfig) -> String {
    // At most three cards render; fewer stay fewer (no placeholder padding).
    // Only a fully empty list falls back to the default triple.
    let cards: Vec<(String, String)> = if project.content.benefits.is_empty() {
        defaults::BENEFITS
            .iter()
            .map(|(title, description)| ((*title).to_string(), (*description).to_string()))
            .collect()
    } else {
        project
            .content
            .benefits
            .iter()
            .take(3)
            .map(|benefit| (benefit.title.clone(), benefit.description.clone()))
            .collect()
    };

    let columns: String = cards
        .iter()
        .map(|(title, description)| {
            format!(
                "<!-- wp:column -->\n\
                 <div class=\"wp-block-column\"><!-- wp:heading {{\"level\":3}} -->\n\
                 <h3 class=\"wp-block-heading\">{title}</h3>\n\
                 <!-- /wp:heading -->\n\
                 <!-- wp:paragraph -->\n\
                 <p>{description}</p>\n\
                 <!-- /wp:paragraph --></div>\n\
                 <!-- /wp:column -->"
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<!-- wp:group {{\"align\":\"wide\"}} -->\n\
         <div class=\"wp-block-group alignwide\"><!-- wp:heading {{\"textAlign\":\"center\"}} -->\n\
         <h2 class=\"wp-block-heading has-text-align-center\">Why Choose Us</h2>\n\
         <!-- /wp:heading -->\n\
         <!-- wp:columns -->\n\
         <div class=\"wp-block-columns\">\n{columns}\n</div>\n\
         <!-- /wp:columns --></div>\n\
         <!-- /wp:group -->"
    )
}

/// Fixed copy; only the background color is palette-driven.
fn about_html(palette: &Palette) -> String {
    let background = palette
        .color_of("secondary")
        .unwrap_or(defaults::SECONDARY_COLOR);

    format!(
        "<!-- wp:group {{\"align\":\"full\",\"style\":{{\"color\":{{\"background\":\"{background}\"}}}}}} -->\n\
         <div class=\"wp-block-group alignfull has-background\" style=\"background-color:{background}\"><!-- wp:heading {{\"textAlign\":\"center\"}} -->\n\
         <h2 class=\"wp-block-heading has-text-align-center\">About Us</h2>\n\
         <!-- /wp:heading -->\n\
         <!-- wp:paragraph {{\"align\":\"center\"}} -->\n\
         <p class=\"has-text-align-center\">{body}</p>\n\
         <!-- /wp:paragraph --></div>\n\
         <!-- /wp:group -->",
        body = defaults::ABOUT_BODY,
    )
}

fn contact_html(project: &ProjectConfig) -> String {
    let contact = &project.content.contact;
    let phone = contact.phone.as_deref().unwrap_or(defaults::PHONE);
    let address = contact.address.as_deref().unwrap_or(defaults::ADDRESS);

    format!(
        "<!-- wp:group {{\"align\":\"wide\"}} -->\n\
         <div class=\"wp-block-group alignwide\"><!-- wp:heading {{\"textAlign\":\"center\"}} -->\n\
         <h2 class=\"wp-block-heading has-text-align-center\">Get in Touch</h2>\n\
         <!-- /wp:heading -->\n\
         <!-- wp:paragraph {{\"align\":\"center\"}} -->\n\
         <p class=\"has-text-align-center\">Phone: {phone}</p>\n\
         <!-- /wp:paragraph -->\n\
         <!-- wp:paragraph {{\"align\":\"center\"}} -->\n\
         <p class=\"has-text-align-center\">Email: {email}</p>\n\
         <!-- /wp:paragraph -->\n\
         <!-- wp:paragraph {{\"align\":\"center\"}} -->\n\
         <p class=\"has-text-align-center\">Address: {address}</p>\n\
         <!-- /wp:paragraph --></div>\n\
         <!-- /wp:group -->",
        email = defaults::EMAIL,
    )
}

fn footer_html(project: &ProjectConfig, year: i32) -> String {
    format!(
        "<!-- wp:group {{\"align\":\"full\"}} -->\n\
         <div class=\"wp-block-group alignfull\"><!-- wp:paragraph {{\"align\":\"center\"}} -->\n\
         <p class=\"has-text-align-center\">© {year} {name}. All rights reserved.</p>\n\
         <!-- /wp:paragraph --></div>\n\
         <!-- /wp:group -->",
        name = project.name,
    )
}
