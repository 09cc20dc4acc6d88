//! Ordered node sequences that make up a spell glyph.

use glam::DVec2;
use thiserror::Error;

use crate::region::HitRegion;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("region index {index} out of range for pattern of {len}")]
    IndexOutOfRange { index: u32, len: u32 },
}

/// Regions in required trace order. Declaration order is trace order.
#[derive(Debug, Clone, PartialEq)]
pub struct TracePattern {
    pub name: String,
    regions: Vec<HitRegion>,
}

impl TracePattern {
    /// Build a pattern with one region per center, indexed in order.
    ///
    /// # Panics
    /// If `centers` is empty.
    pub fn new(name: impl Into<String>, centers: &[DVec2], radius: f64) -> Self {
        assert!(!centers.is_empty(), "a trace pattern needs at least one region");
        let regions = centers
            .iter()
            .enumerate()
            .map(|(i, &c)| HitRegion::new(c, radius, i as u32))
            .collect();
        Self {
            name: name.into(),
            regions,
        }
    }

    /// Clear every region's traced flag.
    pub fn reset(&mut self) {
        for region in &mut self.regions {
            region.traced = false;
        }
    }

    pub fn region_at(&self, index: u32) -> Result<&HitRegion, PatternError> {
        self.regions
            .get(index as usize)
            .ok_or(PatternError::IndexOutOfRange { index, len: self.len() })
    }

    pub(crate) fn region_at_mut(&mut self, index: u32) -> Result<&mut HitRegion, PatternError> {
        let len = self.len();
        self.regions
            .get_mut(index as usize)
            .ok_or(PatternError::IndexOutOfRange { index, len })
    }

    pub fn len(&self) -> u32 {
        self.regions.len() as u32
    }

    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// Index of the first region, in declared order, that contains `point`.
    pub fn hovered(&self, point: DVec2) -> Option<u32> {
        self.regions
            .iter()
            .find(|r| r.contains(point))
            .map(|r| r.order_index)
    }

    /// Region centers in trace order.
    pub fn path(&self) -> Vec<DVec2> {
        self.regions.iter().map(|r| r.center).collect()
    }
}
