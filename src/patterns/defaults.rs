//! Default copy substituted for missing content fields.
//!
//! Every placeholder the pattern composer can fall back to lives here, so
//! the full default surface is auditable and testable in one place.

/// Hero headline when the project has none.
pub const HEADLINE: &str = "Welcome to Our Amazing Service";

/// Hero subheading (always fixed, not content-driven).
pub const SUBHEADING: &str = "Professional solutions tailored to your business";

/// Call-to-action button text when the project has none.
pub const CTA: &str = "Get Started Today";

/// Overlay color for the hero when the palette has no `primary` token.
pub const PRIMARY_COLOR: &str = "#3b82f6";

/// Background color for the about section when the palette has no
/// `secondary` token.
pub const SECONDARY_COLOR: &str = "#f3f4f6";

/// Benefit cards used when the project supplies none at all.
pub const BENEFITS: [(&str, &str); 3] = [
    (
        "Fast Performance",
        "Optimized for speed so your visitors never wait.",
    ),
    (
        "Mobile First",
        "Looks great on every screen, from phones to desktops.",
    ),
    ("SEO Ready", "Structured markup that search engines understand."),
];

/// Phone number placeholder for the contact section.
pub const PHONE: &str = "+1 (555) 123-4567";

/// Street address placeholder for the contact section.
pub const ADDRESS: &str = "123 Main Street, Your City";

/// Email shown in the contact section. Contact details carry no email
/// field, so this placeholder is always rendered.
pub const EMAIL: &str = "hello@example.com";

/// About-section copy (fixed, not content-driven).
pub const ABOUT_BODY: &str = "We are a dedicated team committed to delivering \
exceptional results for our clients. With years of experience and a passion \
for quality, we turn ideas into outcomes.";
