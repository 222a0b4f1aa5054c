//! Flattened "rectangular" cross-section.
//!
//! Keeps the first point, the point(s) around the middle index and the last
//! point of the regular polygon. Even side counts give 4 points, odd side
//! counts give 3. Only `sides = 4` yields an actual square.

use super::polygon::polygon_points;
use glam::DVec3;

/// Returns the retained subset of the regular polygon's points.
///
/// # Example
///
/// ```rust
/// use mobius_mesh::cross_section::{polygon_points, rectangular_points};
///
/// let hexagon = polygon_points(6, 1.0);
/// let flat = rectangular_points(6, 1.0);
/// assert_eq!(flat, vec![hexagon[0], hexagon[2], hexagon[3], hexagon[5]]);
/// ```
pub fn rectangular_points(sides: u32, radius: f64) -> Vec<DVec3> {
    let full = polygon_points(sides, radius);
    retained_indices(full.len())
        .into_iter()
        .map(|i| full[i])
        .collect()
}

fn retained_indices(sides: usize) -> Vec<usize> {
    if sides == 0 {
        return Vec::new();
    }
    let half = sides / 2;
    let last = sides - 1;
    if sides % 2 == 0 {
        vec![0, half - 1, half, last]
    } else {
        vec![0, half, last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retained_indices_even() {
        assert_eq!(retained_indices(4), vec![0, 1, 2, 3]);
        assert_eq!(retained_indices(6), vec![0, 2, 3, 5]);
        assert_eq!(retained_indices(10), vec![0, 4, 5, 9]);
    }

    #[test]
    fn test_retained_indices_odd() {
        assert_eq!(retained_indices(3), vec![0, 1, 2]);
        assert_eq!(retained_indices(5), vec![0, 2, 4]);
        assert_eq!(retained_indices(7), vec![0, 3, 6]);
    }

    #[test]
    fn test_retained_indices_empty() {
        assert!(retained_indices(0).is_empty());
    }
}
