//! # Service Catalog
//!
//! Marketing-facing service definitions: what we do, how the job runs,
//! and the published per-tier price ranges. This is the content behind
//! the services pages and the intake form's service picker.
//!
//! Published tier ranges here are copy, not pricing logic; the numbers an
//! estimate is computed from live in [`crate::pricing::rates`].
//!
//! ## Example
//!
//! ```rust
//! use quote_core::services::find_by_slug;
//!
//! let service = find_by_slug("stamped-concrete").unwrap();
//! assert_eq!(service.title, "Stamped Decorative Concrete");
//! assert_eq!(service.process.len(), 5);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};

/// Broad service category used for filtering the services grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    Residential,
    Commercial,
    Decorative,
    Structural,
}

impl ServiceCategory {
    /// All categories for UI selection
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Residential,
        ServiceCategory::Commercial,
        ServiceCategory::Decorative,
        ServiceCategory::Structural,
    ];
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ServiceCategory::Residential => "Residential",
            ServiceCategory::Commercial => "Commercial",
            ServiceCategory::Decorative => "Decorative",
            ServiceCategory::Structural => "Structural",
        };
        write!(f, "{}", name)
    }
}

/// One step of a service's delivery process, as shown on its detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step: String,
    pub description: String,
    /// Human-readable duration ("1-2 hours", "7-28 days")
    pub duration: String,
}

/// A published pricing tier for a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub tier: String,
    /// Display range, e.g. "$12-18/sq ft"
    pub price_range: String,
    pub description: String,
}

/// A frequently asked question on a service's detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A fully-described service offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// URL/form slug, matches `pricing::ServiceType` slugs where both exist
    pub slug: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub category: ServiceCategory,
    pub features: Vec<String>,
    pub process: Vec<ProcessStep>,
    pub pricing: Vec<PricingTier>,
    /// Gallery image paths, relative to the site root
    pub gallery: Vec<String>,
    pub faq: Vec<FaqEntry>,
}

fn step(step: &str, description: &str, duration: &str) -> ProcessStep {
    ProcessStep {
        step: step.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
    }
}

fn tier(tier: &str, price_range: &str, description: &str) -> PricingTier {
    PricingTier {
        tier: tier.to_string(),
        price_range: price_range.to_string(),
        description: description.to_string(),
    }
}

fn faq(question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static CATALOG: Lazy<Vec<Service>> = Lazy::new(|| {
    vec![
        Service {
            slug: "driveways-walkways".to_string(),
            title: "Driveways & Walkways".to_string(),
            description: "Custom concrete driveways and walkways with various finishes and patterns.".to_string(),
            long_description: "Transform your property with our premium driveway and walkway solutions. \
                We specialize in creating durable, beautiful concrete surfaces that enhance curb appeal \
                and provide long-lasting functionality. From simple stamped patterns to complex decorative \
                designs, we deliver craftsmanship that stands the test of time.".to_string(),
            category: ServiceCategory::Residential,
            features: strings(&[
                "Stamped concrete patterns",
                "Colored concrete options",
                "Custom border designs",
                "Non-slip surface treatments",
                "Integrated drainage solutions",
                "Lifetime warranty",
            ]),
            process: vec![
                step("Site Assessment", "We evaluate your property and discuss design preferences", "1-2 hours"),
                step("Design & Planning", "Custom design creation with material selection", "2-3 days"),
                step("Site Preparation", "Excavation and base preparation", "1 day"),
                step("Pour & Finish", "Concrete pouring and stamping/finishing", "1-2 days"),
                step("Curing & Sealing", "Proper curing time and protective sealing", "7-28 days"),
            ],
            pricing: vec![
                tier("Basic", "$8-12/sq ft", "Plain concrete with basic finish"),
                tier("Standard", "$12-18/sq ft", "Stamped or colored concrete"),
                tier("Premium", "$18-25/sq ft", "Custom designs with decorative elements"),
            ],
            gallery: strings(&[
                "/images/projects/driveway-1.svg",
                "/images/projects/driveway-2.svg",
                "/images/projects/driveway-3.svg",
            ]),
            faq: vec![
                faq(
                    "How long does a driveway installation take?",
                    "Most driveway projects take 3-5 days from start to finish, depending on size and complexity.",
                ),
                faq(
                    "Can I use my driveway during curing?",
                    "We recommend waiting 7 days before driving on new concrete, and 28 days for full curing.",
                ),
            ],
        },
        Service {
            slug: "stamped-concrete".to_string(),
            title: "Stamped Decorative Concrete".to_string(),
            description: "Beautiful patterns that mimic stone, brick, or tile for stunning results.".to_string(),
            long_description: "Our stamped concrete service transforms ordinary concrete into extraordinary \
                works of art. Using advanced stamping techniques and premium materials, we create surfaces \
                that look like natural stone, brick, or tile while maintaining the durability and low \
                maintenance of concrete.".to_string(),
            category: ServiceCategory::Decorative,
            features: strings(&[
                "Authentic stone patterns",
                "Brick and tile designs",
                "Custom color options",
                "Texture variations",
                "Seamless integration",
                "Fade-resistant colors",
            ]),
            process: vec![
                step("Design Consultation", "Pattern and color selection with 3D visualization", "1-2 hours"),
                step("Color & Release Agent", "Application of coloring and release agents", "1 day"),
                step("Stamping Process", "Artistic stamping with multiple pattern layers", "1-2 days"),
                step("Detail Work", "Hand detailing and touch-ups", "1 day"),
                step("Sealing", "Protective sealing and final inspection", "1 day"),
            ],
            pricing: vec![
                tier("Standard Patterns", "$12-18/sq ft", "Popular brick and stone patterns"),
                tier("Premium Patterns", "$18-25/sq ft", "Complex or custom designs"),
                tier("Luxury Finishes", "$25-35/sq ft", "Multi-layer stamping with custom colors"),
            ],
            gallery: strings(&[
                "/images/projects/stamped-1.svg",
                "/images/projects/stamped-2.svg",
                "/images/projects/stamped-3.svg",
            ]),
            faq: vec![
                faq(
                    "How long does stamped concrete last?",
                    "With proper maintenance, stamped concrete can last 20-30 years or more.",
                ),
                faq(
                    "Can stamped concrete be repaired?",
                    "Yes, small repairs are possible, though large areas may need full replacement.",
                ),
            ],
        },
    ]
});

/// All published services.
pub fn catalog() -> &'static [Service] {
    &CATALOG
}

/// Look up a service by slug.
pub fn find_by_slug(slug: &str) -> Option<&'static Service> {
    CATALOG.iter().find(|service| service.slug == slug)
}

/// Look up a service by slug, erroring when it isn't published.
///
/// Use this on paths that must resolve (detail pages); the pricing path
/// never uses it - unknown slugs price at the default rate instead.
pub fn require_by_slug(slug: &str) -> QuoteResult<&'static Service> {
    find_by_slug(slug).ok_or_else(|| QuoteError::service_not_found(slug))
}

/// Slugs of all published services.
pub fn all_slugs() -> Vec<&'static str> {
    CATALOG.iter().map(|service| service.slug.as_str()).collect()
}
