//! Brand profiles and the in-memory registry that holds them.
//!
//! The registry is session-local state: profiles live in an ordered
//! collection for the lifetime of the process and are never persisted.

use crate::catalog::Tone;
use serde::{Deserialize, Serialize};

/// Reusable identity context applied to generation requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandProfile {
    /// Caller-supplied identifier. Uniqueness is not enforced; removal
    /// deletes the first entry with a matching id.
    pub id: String,
    pub name: String,
    pub industry: String,
    pub description: String,
    pub default_tone: Tone,
    pub default_audience: String,
}

/// Ordered, mutable collection of brand profiles with an optional selection.
#[derive(Debug, Clone, Default)]
pub struct BrandRegistry {
    brands: Vec<BrandProfile>,
    selected: Option<String>,
}

impl BrandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a profile and auto-select it.
    pub fn add(&mut self, profile: BrandProfile) {
        self.selected = Some(profile.id.clone());
        self.brands.push(profile);
    }

    /// Remove a profile by id, deselecting it if it was selected.
    /// Returns the removed profile, if any.
    pub fn remove(&mut self, id: &str) -> Option<BrandProfile> {
        let index = self.brands.iter().position(|brand| brand.id == id)?;
        let removed = self.brands.remove(index);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Some(removed)
    }

    /// Select a profile by id. Returns false when no such profile exists.
    pub fn select(&mut self, id: &str) -> bool {
        if self.brands.iter().any(|brand| brand.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&BrandProfile> {
        let id = self.selected.as_deref()?;
        self.brands.iter().find(|brand| brand.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BrandProfile> {
        self.brands.iter()
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}
