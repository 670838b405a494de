//! String helpers for names derived from a section identifier.

use inflector::cases::classcase::to_class_case;

/// Derive the javascript class symbol for a section name
///
/// Class-cases the name and singularizes its last word, the same way a Rails
/// `classify` does: `hero_banner` -> `HeroBanner`, `testimonials` ->
/// `Testimonial`. Dashes count as word separators (`two-col` -> `TwoCol`) so
/// the symbol is always a valid javascript identifier.
pub fn section_symbol(name: &str) -> String {
    to_class_case(name)
}
