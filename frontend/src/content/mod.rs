//! Typed copy for each skin of the site.
//!
//! The text lives in JSON next to this module and is compiled into the
//! binary; [`SiteContent::load`] parses and checks it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::config::SiteVariant;
use crate::drivers::playback::ScriptEntry;
use crate::drivers::scroll_spy::{validate_sections, NavSection};
use crate::drivers::DriverError;

/// Anchor ids the landing page renders, top to bottom.
pub const SECTION_ANCHORS: [&str; 7] = [
    "home",
    "products",
    "services",
    "about",
    "testimonials",
    "faq",
    "contact",
];

const AUPA_JSON: &str = include_str!("aupa.json");
const LAWYER_JSON: &str = include_str!("lawyer.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse {variant} content: {source}")]
    Parse {
        variant: SiteVariant,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid {variant} navigation: {source}")]
    Navigation {
        variant: SiteVariant,
        #[source]
        source: DriverError,
    },
    #[error("{variant} content links to `{id}`, which is not a section on the page")]
    UnknownAnchor { variant: SiteVariant, id: String },
    #[error("{variant} FAQ id {id} is used more than once")]
    DuplicateFaq { variant: SiteVariant, id: u32 },
    #[error("{variant} testimonial from {name} has rating {rating}, expected 1 to 5")]
    Rating {
        variant: SiteVariant,
        name: String,
        rating: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Globe,
    Shield,
    Zap,
    Users,
    Scale,
    Search,
    Brain,
    Gavel,
    FileText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Social {
    Linkedin,
    Twitter,
    Github,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavSection>,
    pub hero: Hero,
    pub products: ProductsSection,
    pub services: ServicesSection,
    pub about: AboutSection,
    pub testimonials: TestimonialsSection,
    pub faq: FaqSection,
    pub chat: ChatDemoContent,
    pub contact: ContactSection,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub get_started: String,
    /// Anchor the "get started" button jumps to.
    pub get_started_target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub headline_lead: String,
    pub headline_emphasis: String,
    pub subtitle: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsSection {
    pub heading: String,
    pub intro: String,
    pub cards: Vec<ProductCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub features: Vec<String>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicesSection {
    pub heading: String,
    pub intro: String,
    pub items: Vec<ServiceItem>,
    pub callout: Callout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callout {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub cta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    pub heading: String,
    pub body: String,
    pub stats: Vec<Stat>,
    pub mission: Callout,
    pub team: TeamBadge,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamBadge {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsSection {
    pub heading: String,
    pub intro: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub name: String,
    pub role: String,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqSection {
    pub heading: String,
    pub intro: String,
    pub items: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatDemoContent {
    pub title: String,
    pub cta: String,
    pub script: Vec<ScriptEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSection {
    pub heading: String,
    pub intro: String,
    pub pitch: String,
    pub details: Vec<ContactDetail>,
    pub socials: Vec<SocialLink>,
    pub form: ContactForm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDetail {
    pub kind: ContactKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: Social,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub message_placeholder: String,
    pub submit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub blurb: String,
    pub columns: Vec<FooterColumn>,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<String>,
}

impl SiteContent {
    pub fn load(variant: SiteVariant) -> Result<Self, ContentError> {
        let raw = match variant {
            SiteVariant::Aupa => AUPA_JSON,
            SiteVariant::Lawyer => LAWYER_JSON,
        };
        Self::parse(variant, raw)
    }

    fn parse(variant: SiteVariant, raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)
            .map_err(|source| ContentError::Parse { variant, source })?;
        content.validate(variant)?;
        log::debug!(
            "loaded {variant} content: {} sections, {} testimonials, {} script entries",
            content.nav.len(),
            content.testimonials.items.len(),
            content.chat.script.len()
        );
        Ok(content)
    }

    fn validate(&self, variant: SiteVariant) -> Result<(), ContentError> {
        validate_sections(&self.nav)
            .map_err(|source| ContentError::Navigation { variant, source })?;

        if let Some(id) = self
            .nav
            .iter()
            .map(|s| s.id.as_str())
            .chain(std::iter::once(self.brand.get_started_target.as_str()))
            .find(|id| !SECTION_ANCHORS.contains(id))
        {
            return Err(ContentError::UnknownAnchor {
                variant,
                id: id.to_string(),
            });
        }

        let mut faq_ids = HashSet::new();
        for entry in &self.faq.items {
            if !faq_ids.insert(entry.id) {
                return Err(ContentError::DuplicateFaq {
                    variant,
                    id: entry.id,
                });
            }
        }

        if let Some(t) = self
            .testimonials
            .items
            .iter()
            .find(|t| !(1..=5).contains(&t.rating))
        {
            return Err(ContentError::Rating {
                variant,
                name: t.name.clone(),
                rating: t.rating,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn edited(edit: impl FnOnce(&mut Value)) -> String {
        let mut value: Value = serde_json::from_str(AUPA_JSON).unwrap();
        edit(&mut value);
        value.to_string()
    }

    #[test]
    fn every_bundled_variant_loads() {
        for variant in SiteVariant::ALL {
            let content = SiteContent::load(variant)
                .unwrap_or_else(|e| panic!("{variant} content failed to load: {e}"));
            assert!(!content.nav.is_empty());
            assert!(!content.chat.script.is_empty());
            assert!(!content.testimonials.items.is_empty());
        }
    }

    #[test]
    fn variants_are_distinct_skins() {
        let aupa = SiteContent::load(SiteVariant::Aupa).unwrap();
        let lawyer = SiteContent::load(SiteVariant::Lawyer).unwrap();
        assert_eq!(aupa.brand.name, "Aupa AI");
        assert_eq!(lawyer.brand.name, "Ask AI Lawyer");
        assert_ne!(aupa.chat.script, lawyer.chat.script);
    }

    #[test]
    fn nav_follows_page_order() {
        let content = SiteContent::load(SiteVariant::Aupa).unwrap();
        let positions: Vec<usize> = content
            .nav
            .iter()
            .map(|s| SECTION_ANCHORS.iter().position(|a| *a == s.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SiteContent::parse(SiteVariant::Aupa, "{").unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn rejects_duplicate_nav_ids() {
        let raw = edited(|v| {
            v["nav"][1]["id"] = Value::from("home");
        });
        let err = SiteContent::parse(SiteVariant::Aupa, &raw).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Navigation {
                source: DriverError::DuplicateSection(_),
                ..
            }
        ));
    }

    #[test]
    fn rejects_nav_without_section() {
        let raw = edited(|v| {
            v["nav"][0]["id"] = Value::from("pricing");
        });
        let err = SiteContent::parse(SiteVariant::Aupa, &raw).unwrap_err();
        assert!(matches!(err, ContentError::UnknownAnchor { ref id, .. } if id == "pricing"));
    }

    #[test]
    fn get_started_targets_a_rendered_section() {
        for variant in SiteVariant::ALL {
            let content = SiteContent::load(variant).unwrap();
            assert_eq!(content.brand.get_started_target, "contact");
        }

        let raw = edited(|v| {
            v["brand"]["get_started_target"] = Value::from("signup");
        });
        let err = SiteContent::parse(SiteVariant::Aupa, &raw).unwrap_err();
        assert!(matches!(err, ContentError::UnknownAnchor { ref id, .. } if id == "signup"));
    }

    #[test]
    fn rejects_duplicate_faq_ids_and_bad_ratings() {
        let raw = edited(|v| {
            let first = v["faq"]["items"][0]["id"].clone();
            v["faq"]["items"][1]["id"] = first;
        });
        assert!(matches!(
            SiteContent::parse(SiteVariant::Aupa, &raw),
            Err(ContentError::DuplicateFaq { .. })
        ));

        let raw = edited(|v| {
            v["testimonials"]["items"][0]["rating"] = Value::from(9);
        });
        assert!(matches!(
            SiteContent::parse(SiteVariant::Aupa, &raw),
            Err(ContentError::Rating { rating: 9, .. })
        ));
    }
}
