use crate::error::{OperationError, Result};
use crate::geometry::{Borderline, Region};

/// Moves region vertices that sit on a frontline along with it.
///
/// Every ring vertex within `tolerance` of point `i` of the previous
/// frame is replaced by point `i` of the next frame. When a vertex is near
/// several frame points, the lowest index wins. Vertices off the frontline
/// are left untouched.
#[derive(Debug)]
pub struct ReshapeRegion<'a> {
    previous: &'a Borderline,
    next: &'a Borderline,
    tolerance: f64,
}

impl<'a> ReshapeRegion<'a> {
    /// Creates a new reshape operation.
    #[must_use]
    pub fn new(previous: &'a Borderline, next: &'a Borderline, tolerance: f64) -> Self {
        Self {
            previous,
            next,
            tolerance,
        }
    }

    /// Executes the reshape in place, returning the number of moved vertices.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the two frames differ in
    /// point count.
    pub fn execute(&self, region: &mut Region) -> Result<usize> {
        if self.previous.len() != self.next.len() {
            return Err(OperationError::InvalidInput(format!(
                "frame length mismatch: {} vs {}",
                self.previous.len(),
                self.next.len()
            ))
            .into());
        }

        let mut moved = 0;
        for ring in &mut region.rings {
            for vertex in &mut ring.points {
                let hit = self
                    .previous
                    .points
                    .iter()
                    .position(|p| p.approx_eq(*vertex, self.tolerance));
                if let Some(i) = hit {
                    *vertex = self.next.points[i];
                    moved += 1;
                }
            }
        }
        Ok(moved)
    }
}
