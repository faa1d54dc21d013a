//! Staircase path generator
//!
//! Produces a random polyline walking from `(-H, -H)` to at least `(H, H)`,
//! alternating X and Y steps. The resulting geometry spans `2H x 2H` units,
//! much larger than the viewport it is rendered into.

use glam::IVec2;
use pathview_config::PathConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tiny_skia::PathBuilder;
use tracing::debug;

use crate::constants::MIN_PATH_STEP;

/// Immutable polyline in virtual surface coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPath {
    points: Vec<IVec2>,
    half_extent: i32,
}

impl StepPath {
    /// Generate a staircase path.
    ///
    /// Starts at `(-H, -H)` and advances X and Y in turn (X first) by a
    /// random step in `1..step`, appending a point after every advance. Stops
    /// once both coordinates have reached `H`. Steps are never zero, so the
    /// path has at most `2 * (2H + 1)` segments.
    pub fn generate<R: Rng>(half_extent: i32, step: IVec2, rng: &mut R) -> Self {
        let start = IVec2::splat(half_extent.saturating_neg());
        let max_step = step
            .saturating_sub(IVec2::ONE)
            .max(IVec2::splat(MIN_PATH_STEP));

        let mut points = vec![start];
        let mut cursor = start;
        let mut advance_x = true;

        while cursor.x < half_extent || cursor.y < half_extent {
            if advance_x {
                cursor.x = cursor.x.saturating_add(rng.gen_range(MIN_PATH_STEP..=max_step.x));
            } else {
                cursor.y = cursor.y.saturating_add(rng.gen_range(MIN_PATH_STEP..=max_step.y));
            }
            points.push(cursor);
            advance_x = !advance_x;
        }

        debug!(
            "StepPath::generate: H={}, step={}, {} segments, end={}",
            half_extent,
            step,
            points.len() - 1,
            cursor
        );

        Self {
            points,
            half_extent,
        }
    }

    /// Generate a path from configuration. A configured seed makes the path
    /// reproducible; otherwise the generator is seeded from OS entropy.
    pub fn from_config(config: &PathConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate(
            config.half_extent,
            IVec2::new(config.step_x, config.step_y),
            &mut rng,
        )
    }

    /// Build a path from explicit points
    pub fn from_points(points: Vec<IVec2>) -> Self {
        let half_extent = points
            .iter()
            .map(|p| p.x.saturating_abs().max(p.y.saturating_abs()))
            .max()
            .unwrap_or(0);
        Self {
            points,
            half_extent,
        }
    }

    #[inline]
    pub fn points(&self) -> &[IVec2] {
        &self.points
    }

    #[inline]
    pub fn half_extent(&self) -> i32 {
        self.half_extent
    }

    /// Number of line segments (one less than the number of points)
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Min and max corners of the geometry, or `None` for an empty path
    pub fn bounds(&self) -> Option<(IVec2, IVec2)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
        )
    }

    /// Convert to a rasterizable path. Returns `None` when there is no
    /// segment to draw.
    pub fn to_skia_path(&self) -> Option<tiny_skia::Path> {
        let (first, rest) = self.points.split_first()?;
        if rest.is_empty() {
            return None;
        }

        let mut pb = PathBuilder::with_capacity(self.points.len(), self.points.len());
        pb.move_to(first.x as f32, first.y as f32);
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
        pb.finish()
    }
}
