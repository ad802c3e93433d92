use crate::geometry::Borderline;

/// Returns the borderline with the most points. Ties go to the first.
///
/// `None` when there are no borderlines.
#[must_use]
pub fn longest_borderline(borderlines: &[Borderline]) -> Option<&Borderline> {
    borderlines
        .iter()
        .reduce(|best, line| if line.len() > best.len() { line } else { best })
}
