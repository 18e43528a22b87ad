//! Web Mercator Tile Math
//!
//! Just enough projection support for a fixed-zoom slippy layer:
//! coordinate to world pixel, world pixel back to coordinate, and the
//! tile containing a world pixel.

use std::f64::consts::PI;

use crate::models::LatLng;

/// Tile edge length in CSS pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Web Mercator latitude bound; the poles project to infinity, so
/// latitudes are clamped here before projecting.
pub const MAX_LATITUDE: f64 = 85.051_128_779_8;

/// A projected position in world pixels at some zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPx {
    pub x: f64,
    pub y: f64,
}

impl WorldPx {
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom)
}

/// Project a coordinate to world pixels at `zoom`.
pub fn project(pos: LatLng, zoom: u8) -> WorldPx {
    let n = world_size(zoom);
    let lat = pos.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    WorldPx {
        x: (pos.lng + 180.0) / 360.0 * n,
        y: (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * n,
    }
}

/// Inverse of [`project`].
pub fn unproject(px: WorldPx, zoom: u8) -> LatLng {
    let n = world_size(zoom);
    let lng = px.x / n * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * px.y / n)).sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

/// Tile column/row containing a world pixel.
pub fn tile_at(px: WorldPx) -> (i32, i32) {
    (
        (px.x / TILE_SIZE).floor() as i32,
        (px.y / TILE_SIZE).floor() as i32,
    )
}

/// Number of tiles along one axis at `zoom`.
pub fn tile_count(zoom: u8) -> i32 {
    1 << zoom
}

/// OSM tile URL, sharded across the a/b/c mirrors. `x` wraps around the
/// antimeridian; callers skip rows outside `0..tile_count`.
pub fn tile_url(x: i32, y: i32, zoom: u8) -> String {
    let x = x.rem_euclid(tile_count(zoom));
    let shard = ["a", "b", "c"][(x + y).rem_euclid(3) as usize];
    format!("https://{}.tile.openstreetmap.org/{}/{}/{}.png", shard, zoom, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn origin_projects_to_world_center() {
        let px = project(LatLng::new(0.0, 0.0), 1);
        assert!((px.x - 256.0).abs() < EPS);
        assert!((px.y - 256.0).abs() < EPS);
        assert_eq!(tile_at(px), (1, 1));
    }

    #[test]
    fn project_unproject_round_trips() {
        for &(lat, lng) in &[
            (41.015137, 28.97953),
            (40.5, 28.5),
            (-33.86, 151.21),
            (0.0, 0.0),
        ] {
            let back = unproject(project(LatLng::new(lat, lng), 13), 13);
            assert!((back.lat - lat).abs() < 1e-6, "lat {} -> {}", lat, back.lat);
            assert!((back.lng - lng).abs() < 1e-6, "lng {} -> {}", lng, back.lng);
        }
    }

    #[test]
    fn pixel_drag_moves_south_east() {
        // +x is east, +y is south in screen space.
        let start = LatLng::new(41.0, 29.0);
        let moved = unproject(project(start, 13).offset(100.0, 100.0), 13);
        assert!(moved.lng > start.lng);
        assert!(moved.lat < start.lat);
    }

    #[test]
    fn poles_clamp_to_the_mercator_bound() {
        let north = project(LatLng::new(90.0, 0.0), 13);
        let south = project(LatLng::new(-90.0, 0.0), 13);
        assert!(north.y.is_finite() && south.y.is_finite());
        // Top and bottom edges of the world, to sub-pixel precision.
        assert!(north.y.abs() < 0.01);
        assert!((south.y - TILE_SIZE * 8192.0).abs() < 0.01);
        let back = unproject(north, 13);
        assert!((back.lat - MAX_LATITUDE).abs() < 1e-6);
    }

    #[test]
    fn tile_url_wraps_and_shards_deterministically() {
        assert_eq!(tile_url(0, 0, 1), tile_url(2, 0, 1));
        let url = tile_url(4755, 3070, 13);
        assert!(url.ends_with("/13/4755/3070.png"));
        assert!(url.starts_with("https://"));
        assert!(url.contains(".tile.openstreetmap.org/"));
    }
}
