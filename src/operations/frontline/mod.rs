use crate::error::{GeometryError, Result};
use crate::geometry::{Borderline, LatLng};

/// Parameters for one frontline animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrontlineParams {
    /// Fraction of the remaining distance to the target closed per tick.
    pub progress_rate: f64,
    /// Peak latitude offset of the ripple, in degrees.
    pub wave_amplitude: f64,
    /// Ripple phase advance per point index, in radians.
    pub phase_step: f64,
    /// Time units per radian of ripple travel.
    pub wave_period: f64,
}

impl Default for FrontlineParams {
    fn default() -> Self {
        Self {
            progress_rate: 0.01,
            wave_amplitude: 0.002,
            phase_step: 0.5,
            wave_period: 300.0,
        }
    }
}

impl FrontlineParams {
    /// Creates validated parameters with the default ripple shape.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `progress_rate` is not
    /// strictly inside `(0, 1)` or `wave_amplitude` is negative or not finite.
    pub fn new(progress_rate: f64, wave_amplitude: f64) -> Result<Self> {
        if !(progress_rate > 0.0 && progress_rate < 1.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "progress_rate",
                value: progress_rate,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        if !(wave_amplitude.is_finite() && wave_amplitude >= 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "wave_amplitude",
                value: wave_amplitude,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(Self {
            progress_rate,
            wave_amplitude,
            ..Self::default()
        })
    }

    /// Returns a copy with a different ripple shape.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonPositive` if `wave_period` is not a finite
    /// positive number, or `GeometryError::ParameterOutOfRange` if
    /// `phase_step` is not finite.
    pub fn with_wave(self, phase_step: f64, wave_period: f64) -> Result<Self> {
        if !(wave_period.is_finite() && wave_period > 0.0) {
            return Err(GeometryError::NonPositive("wave_period").into());
        }
        if !phase_step.is_finite() {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "phase_step",
                value: phase_step,
                min: f64::MIN,
                max: f64::MAX,
            }
            .into());
        }
        Ok(Self {
            phase_step,
            wave_period,
            ..self
        })
    }

    /// Latitude offset of the ripple at point `index` and time `time`.
    #[must_use]
    pub fn wave_offset(&self, index: usize, time: f64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let i = index as f64;
        self.wave_amplitude * (i * self.phase_step + time / self.wave_period).sin()
    }
}

/// Advances a frontline one tick toward `poi`.
///
/// Each point moves `progress_rate` of the way to `poi` (so the approach
/// decays exponentially and never overshoots), then its latitude gets a
/// ripple offset that depends on the point's index and on `time`. `time` is
/// supplied by the caller in milliseconds; nothing here reads a clock.
///
/// The result has the same point count and order as the input. Lines with
/// fewer than two points are returned unchanged.
#[must_use]
pub fn advance(borderline: &Borderline, poi: LatLng, params: &FrontlineParams, time: f64) -> Borderline {
    if borderline.len() < 2 {
        return borderline.clone();
    }

    let target = poi.to_point();
    let points = borderline
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let current = p.to_point();
            let mut next = current + (target - current) * params.progress_rate;
            next.x += params.wave_offset(i, time);
            LatLng::from_point(next)
        })
        .collect();

    Borderline::new(points)
}

/// Advances every borderline independently.
#[must_use]
pub fn advance_all(
    borderlines: &[Borderline],
    poi: LatLng,
    params: &FrontlineParams,
    time: f64,
) -> Vec<Borderline> {
    borderlines
        .iter()
        .map(|line| advance(line, poi, params, time))
        .collect()
}
