//! Maps the window's scroll offset to the navigation section in view.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::DriverError;

/// Height of the fixed navigation bar; sections count as "in view" this far
/// before their top edge reaches the top of the viewport.
pub const DEFAULT_THRESHOLD_PX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    /// Anchor id of the section element.
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, offset: f64, threshold: f64) -> bool {
        offset >= self.top - threshold && offset < self.top + self.height - threshold
    }
}

/// Source of section geometry. Sections it cannot find are skipped.
pub trait SectionGeometry {
    fn bounds(&self, id: &str) -> Option<SectionBounds>;
}

pub fn validate_sections(sections: &[NavSection]) -> Result<(), DriverError> {
    if sections.is_empty() {
        return Err(DriverError::NoSections);
    }
    let mut seen = HashSet::new();
    for section in sections {
        if !seen.insert(section.id.as_str()) {
            return Err(DriverError::DuplicateSection(section.id.clone()));
        }
    }
    Ok(())
}

/// First section, in navigation order, whose shifted range contains `offset`.
pub fn locate<'a, G>(
    sections: &'a [NavSection],
    geometry: &G,
    offset: f64,
    threshold: f64,
) -> Option<&'a NavSection>
where
    G: SectionGeometry + ?Sized,
{
    sections.iter().find(|section| {
        geometry
            .bounds(&section.id)
            .map_or(false, |bounds| bounds.contains(offset, threshold))
    })
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    sections: Vec<NavSection>,
    threshold: f64,
    active: usize,
}

impl ScrollSpy {
    /// `initial` falls back to the first section when it names no section.
    pub fn new(
        sections: Vec<NavSection>,
        initial: Option<&str>,
        threshold: f64,
    ) -> Result<Self, DriverError> {
        validate_sections(&sections)?;
        let active = initial
            .and_then(|id| sections.iter().position(|s| s.id == id))
            .unwrap_or(0);
        Ok(Self {
            sections,
            threshold,
            active,
        })
    }

    pub fn active(&self) -> &str {
        &self.sections[self.active].id
    }

    /// Re-evaluates the active section for `offset`. Returns the new id when
    /// it changed. With no matching section the previous one stays active.
    pub fn observe<G>(&mut self, offset: f64, geometry: &G) -> Option<&str>
    where
        G: SectionGeometry + ?Sized,
    {
        let found = locate(&self.sections, geometry, offset, self.threshold)?;
        let index = self.sections.iter().position(|s| s.id == found.id)?;
        if index == self.active {
            return None;
        }
        log::debug!(
            "scroll spy: {} -> {} at offset {offset}",
            self.sections[self.active].id,
            found.id
        );
        self.active = index;
        Some(&self.sections[index].id)
    }
}
