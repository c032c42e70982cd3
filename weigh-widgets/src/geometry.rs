//! Tile geometry and point-in-polygon hit testing.
//!
//! The cloud tile surface is split diagonally into two quadrilaterals whose
//! vertices are fractions of the measured surface size, so they are recomputed
//! from the live rect on every gesture. Between them sits a deliberate seam
//! band of [`TILE_SEAM_MARGIN`] units on each side of the diagonal where
//! neither polygon reaches.

use makepad_widgets::*;

/// Vertical slack either side of the diagonal seam, in layout units.
pub const TILE_SEAM_MARGIN: f64 = 8.0;

/// The two clickable cloud-service regions on the tile surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    Dropbox,
    ICloud,
}

impl TileKind {
    pub fn label(&self) -> &'static str {
        match self {
            TileKind::Dropbox => "dropbox",
            TileKind::ICloud => "icloud",
        }
    }
}

/// Ray-cast point-in-polygon test.
///
/// Casts a horizontal ray from `point` towards +x and counts edge crossings;
/// odd = inside. Boundary policy: edges are treated half-open (an edge
/// crossing uses `a.y > p.y != b.y > p.y` with a strict `p.x < x` test), so a
/// point exactly on an edge classifies with the region the edge spans from
/// above — deterministic, and consistent between the two tiles.
///
/// Degenerate input (fewer than 3 vertices) is "no region matched", not an
/// error; the surrounding UI has to stay responsive.
pub fn point_in_polygon(point: DVec2, polygon: &[DVec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Quadrilateral for one tile, given the measured surface size.
///
/// The dropbox tile owns the top of the surface down to a sloped lower edge
/// (30% of the height on the left, 50% on the right); the icloud tile owns
/// everything below the matching sloped upper edge. Both edges back off the
/// seam by [`TILE_SEAM_MARGIN`].
pub fn tile_polygon(kind: TileKind, size: DVec2) -> [DVec2; 4] {
    let (w, h) = (size.x, size.y);
    match kind {
        TileKind::Dropbox => [
            dvec2(0.0, 0.0),
            dvec2(w, 0.0),
            dvec2(w, h * 0.5 - TILE_SEAM_MARGIN),
            dvec2(0.0, h * 0.3 - TILE_SEAM_MARGIN),
        ],
        TileKind::ICloud => [
            dvec2(0.0, h * 0.3 + TILE_SEAM_MARGIN),
            dvec2(w, h * 0.5 + TILE_SEAM_MARGIN),
            dvec2(w, h),
            dvec2(0.0, h),
        ],
    }
}

/// Which tile, if any, contains `point`. Dropbox is tested first; inside the
/// seam band neither polygon matches.
pub fn hit_tile(point: DVec2, size: DVec2) -> Option<TileKind> {
    if point_in_polygon(point, &tile_polygon(TileKind::Dropbox, size)) {
        Some(TileKind::Dropbox)
    } else if point_in_polygon(point, &tile_polygon(TileKind::ICloud, size)) {
        Some(TileKind::ICloud)
    } else {
        None
    }
}

/// Vertex average; interior for the convex tile quads.
pub fn centroid(polygon: &[DVec2]) -> DVec2 {
    let mut sum = dvec2(0.0, 0.0);
    for v in polygon {
        sum = sum + *v;
    }
    sum / polygon.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: DVec2 = DVec2 { x: 400.0, y: 400.0 };

    #[test]
    fn test_degenerate_polygon_matches_nothing() {
        assert!(!point_in_polygon(dvec2(1.0, 1.0), &[]));
        assert!(!point_in_polygon(
            dvec2(1.0, 1.0),
            &[dvec2(0.0, 0.0), dvec2(2.0, 2.0)]
        ));
    }

    #[test]
    fn test_centroids_hit_their_own_tile() {
        for kind in [TileKind::Dropbox, TileKind::ICloud] {
            let poly = tile_polygon(kind, SIZE);
            let c = centroid(&poly);
            // centroid plus a small jitter stays interior
            for jitter in [
                dvec2(0.0, 0.0),
                dvec2(3.0, 3.0),
                dvec2(-3.0, 3.0),
                dvec2(3.0, -3.0),
                dvec2(-3.0, -3.0),
            ] {
                assert_eq!(hit_tile(c + jitter, SIZE), Some(kind));
            }
        }
    }

    #[test]
    fn test_tiles_do_not_claim_each_other() {
        let dropbox = tile_polygon(TileKind::Dropbox, SIZE);
        let icloud = tile_polygon(TileKind::ICloud, SIZE);
        assert!(!point_in_polygon(centroid(&dropbox), &icloud));
        assert!(!point_in_polygon(centroid(&icloud), &dropbox));
    }

    #[test]
    fn test_seam_band_matches_neither() {
        // Points on the diagonal itself sit inside the margin band.
        for t in [0.1, 0.5, 0.9] {
            let x = SIZE.x * t;
            let y = SIZE.y * (0.3 + 0.2 * t);
            assert_eq!(hit_tile(dvec2(x, y), SIZE), None);
        }
    }

    #[test]
    fn test_points_outside_the_surface() {
        assert_eq!(hit_tile(dvec2(-1.0, -1.0), SIZE), None);
        assert_eq!(hit_tile(dvec2(SIZE.x + 1.0, SIZE.y * 0.5), SIZE), None);
    }

    #[test]
    fn test_top_and_bottom_bands() {
        // Well above the seam: dropbox. Well below: icloud.
        assert_eq!(hit_tile(dvec2(200.0, 20.0), SIZE), Some(TileKind::Dropbox));
        assert_eq!(hit_tile(dvec2(200.0, 380.0), SIZE), Some(TileKind::ICloud));
    }

    #[test]
    fn test_zero_size_surface() {
        assert_eq!(hit_tile(dvec2(0.0, 0.0), dvec2(0.0, 0.0)), None);
    }
}
