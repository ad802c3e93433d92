use std::collections::HashMap;

use slotmap::SlotMap;
use tracing::debug;

use crate::error::{RegionError, Result};
use crate::geometry::{Borderline, LatLng, Region};
use crate::operations::frontline::{advance, FrontlineParams};
use crate::operations::query::{longest_borderline, ReshapeRegion};
use crate::operations::shared_border::{ExtractParams, SharedBorders};

slotmap::new_key_type! {
    /// Unique identifier for a region in a [`Theater`].
    pub struct RegionId;
}

/// A map session: a region arena plus selection and animation state.
#[derive(Debug, Default)]
pub struct Theater {
    regions: SlotMap<RegionId, Region>,
    selection: Vec<RegionId>,
    border_cache: HashMap<(RegionId, RegionId), Vec<Borderline>>,
    frontline: Borderline,
    poi: Option<LatLng>,
    running: bool,
    extract: ExtractParams,
    animate: FrontlineParams,
}

impl Theater {
    /// Creates an empty session with the given parameters.
    #[must_use]
    pub fn new(extract: ExtractParams, animate: FrontlineParams) -> Self {
        Self {
            extract,
            animate,
            ..Self::default()
        }
    }

    /// Inserts a region and returns its ID.
    pub fn add_region(&mut self, region: Region) -> RegionId {
        self.regions.insert(region)
    }

    /// Returns a reference to the region, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::NotFound` if the ID is unknown.
    pub fn region(&self, id: RegionId) -> Result<&Region> {
        self.regions
            .get(id)
            .ok_or_else(|| RegionError::NotFound.into())
    }

    /// Currently selected regions, in selection order. At most two.
    #[must_use]
    pub fn selection(&self) -> &[RegionId] {
        &self.selection
    }

    /// Toggles a region's selection and returns whether it is now selected.
    ///
    /// A selected region is deselected. An unselected region is selected only
    /// while fewer than two are selected; a third pick is ignored. When a
    /// change leaves exactly two regions selected, the frontline is reseeded
    /// with their longest shared borderline (empty if they share none); a
    /// change that leaves fewer than two selected clears it. Any selection
    /// change stops the animation.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::NotFound` if the ID is unknown.
    pub fn toggle_selection(&mut self, id: RegionId) -> Result<bool> {
        if !self.regions.contains_key(id) {
            return Err(RegionError::NotFound.into());
        }

        let selected = if let Some(pos) = self.selection.iter().position(|&s| s == id) {
            self.selection.remove(pos);
            false
        } else if self.selection.len() < 2 {
            self.selection.push(id);
            true
        } else {
            debug!(?id, "selection full, ignoring pick");
            return Ok(false);
        };

        self.running = false;
        let &[a, b] = self.selection.as_slice() else {
            self.frontline = Borderline::default();
            return Ok(selected);
        };
        let (count, frontline) = {
            let borders = self.shared_borders(a, b)?;
            (borders.len(), longest_borderline(borders).cloned().unwrap_or_default())
        };
        self.frontline = frontline;
        debug!(
            borderlines = count,
            frontline = self.frontline.len(),
            "selected region pair"
        );
        Ok(selected)
    }

    /// Returns the shared borderlines of two regions, memoized per ordered pair.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::NotFound` if either ID is unknown.
    pub fn shared_borders(&mut self, a: RegionId, b: RegionId) -> Result<&[Borderline]> {
        let region_a = self.regions.get(a).ok_or(RegionError::NotFound)?;
        let region_b = self.regions.get(b).ok_or(RegionError::NotFound)?;
        let extract = self.extract;
        let borders = self
            .border_cache
            .entry((a, b))
            .or_insert_with(|| SharedBorders::new(region_a, region_b, extract).execute());
        Ok(borders.as_slice())
    }

    /// The current frontline.
    #[must_use]
    pub fn frontline(&self) -> &Borderline {
        &self.frontline
    }

    /// The current point of interest.
    #[must_use]
    pub fn poi(&self) -> Option<LatLng> {
        self.poi
    }

    /// Places or moves the point of interest. Takes effect on the next tick.
    pub fn place_poi(&mut self, poi: LatLng) {
        self.poi = Some(poi);
    }

    /// Returns `true` while the animation runs.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts the animation.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::NoPointOfInterest` without a point of interest,
    /// or `RegionError::NoFrontline` when the frontline is empty.
    pub fn start(&mut self) -> Result<()> {
        if self.poi.is_none() {
            return Err(RegionError::NoPointOfInterest.into());
        }
        if self.frontline.is_empty() {
            return Err(RegionError::NoFrontline.into());
        }
        self.running = true;
        Ok(())
    }

    /// Stops the animation. The current frontline is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stops the animation and drops the point of interest and frontline.
    pub fn clear(&mut self) {
        self.running = false;
        self.poi = None;
        self.frontline = Borderline::default();
    }

    /// Advances the animation to `time` (milliseconds, caller-supplied).
    ///
    /// Moves the frontline one step toward the point of interest and drags
    /// the vertices of both selected regions that lie within the matching
    /// tolerance of the previous frame along. Returns the new
    /// frame, or `None` when the animation is stopped.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::NoPointOfInterest` if the point of interest was
    /// removed while running, or an error if a selected region vanished.
    pub fn tick(&mut self, time: f64) -> Result<Option<&Borderline>> {
        if !self.running {
            return Ok(None);
        }
        let poi = self.poi.ok_or(RegionError::NoPointOfInterest)?;

        let next = advance(&self.frontline, poi, &self.animate, time);
        let reshape = ReshapeRegion::new(&self.frontline, &next, self.extract.tolerance);
        let mut moved = 0;
        for &id in &self.selection {
            let region = self.regions.get_mut(id).ok_or(RegionError::NotFound)?;
            moved += reshape.execute(region)?;
        }

        // Reshaped regions no longer match their memoized borders.
        let selection = &self.selection;
        self.border_cache
            .retain(|(a, b), _| !selection.contains(a) && !selection.contains(b));

        self.frontline = next;
        debug!(time, points = self.frontline.len(), moved, "frontline tick");
        Ok(Some(&self.frontline))
    }
}
