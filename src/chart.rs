//! Chart Generator
//!
//! The only generated visual in a report: an allocation pie splitting the
//! estate into the freely disposable share (fixed at 50%) and one reserve
//! wedge per child (50/N% each).
//!
//! The pie itself is rasterized here; the title and the per-wedge labels
//! are laid out as document text next to it so they stay selectable and
//! localized. The raster is written to a uniquely named temporary PNG,
//! embedded, then removed when the [`TransientChart`] is dropped.

use std::f64::consts::PI;
use std::path::Path;

use image::{Rgb as Pixel, RgbImage};
use serde::Serialize;
use tempfile::{Builder, NamedTempFile};

use crate::error::Result;
use crate::render::Rgb;

/// Share of the estate outside the children's reserve, in percent.
pub const DISPOSABLE_SHARE: f64 = 50.0;

/// Largest child count the chart is drawn for.
pub const MAX_CHILDREN: usize = 20;

pub const DISPOSABLE_COLOR: Rgb = Rgb(0xC2, 0x9E, 0x75);

/// Reserve wedge colors, indexed by `child % len`.
pub const RESERVE_PALETTE: [Rgb; 5] = [
    Rgb(0x6A, 0x1B, 0x1B),
    Rgb(0x7B, 0x2D, 0x26),
    Rgb(0x8C, 0x3F, 0x32),
    Rgb(0x9E, 0x50, 0x40),
    Rgb(0xB5, 0x65, 0x1D),
];

/// Raster size. The pie sits in the left square; the right band is left
/// blank for the legend drawn over it.
pub const RASTER_WIDTH: u32 = 800;
pub const RASTER_HEIGHT: u32 = 600;
const CENTER: (f64, f64) = (300.0, 300.0);
const RADIUS: f64 = 280.0;
/// Separator half-width in pixels (white edge between wedges).
const EDGE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wedge {
    pub label: String,
    /// Percentage of the whole pie.
    pub share: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub wedges: Vec<Wedge>,
}

impl ChartSpec {
    /// Reserve chart for `children` heirs; `None` when there are none or
    /// more than [`MAX_CHILDREN`].
    ///
    /// `child_label` receives the 1-based child index.
    pub fn reserve(
        children: usize,
        title: impl Into<String>,
        disposable_label: impl Into<String>,
        child_label: impl Fn(usize) -> String,
    ) -> Option<Self> {
        if children == 0 || children > MAX_CHILDREN {
            return None;
        }
        let child_share = (100.0 - DISPOSABLE_SHARE) / children as f64;
        let mut wedges = Vec::with_capacity(children + 1);
        wedges.push(Wedge {
            label: disposable_label.into(),
            share: DISPOSABLE_SHARE,
            color: DISPOSABLE_COLOR,
        });
        for i in 1..=children {
            wedges.push(Wedge {
                label: child_label(i),
                share: child_share,
                color: RESERVE_PALETTE[i % RESERVE_PALETTE.len()],
            });
        }
        Some(Self {
            title: title.into(),
            wedges,
        })
    }

    pub fn total_share(&self) -> f64 {
        self.wedges.iter().map(|w| w.share).sum()
    }

    /// Legend line for one wedge, e.g. `Reserve child 1: 25.0%`.
    pub fn legend_entry(wedge: &Wedge) -> String {
        format!("{}: {:.1}%", wedge.label, wedge.share)
    }
}

// ============================================================================
// RASTERIZATION
// ============================================================================

/// Angle of a pixel measured counter-clockwise from 12 o'clock, in degrees.
fn angle_from_top(dx: f64, dy_up: f64) -> f64 {
    let deg = dy_up.atan2(dx) * 180.0 / PI; // 0 = 3 o'clock, ccw positive
    (deg - 90.0).rem_euclid(360.0)
}

/// Draw the pie: wedges start at 12 o'clock and run counter-clockwise.
pub fn rasterize(spec: &ChartSpec) -> RgbImage {
    let total = spec.total_share();
    let mut bounds = Vec::with_capacity(spec.wedges.len());
    let mut acc = 0.0;
    for w in &spec.wedges {
        acc += w.share / total * 360.0;
        bounds.push(acc);
    }

    let white = Pixel([255, 255, 255]);
    let mut img = RgbImage::from_pixel(RASTER_WIDTH, RASTER_HEIGHT, white);
    if spec.wedges.is_empty() || total <= 0.0 {
        return img;
    }

    let (cx, cy) = CENTER;
    for y in 0..RASTER_HEIGHT {
        for x in 0..RASTER_WIDTH {
            let dx = x as f64 + 0.5 - cx;
            let dy_up = cy - (y as f64 + 0.5);
            let r = (dx * dx + dy_up * dy_up).sqrt();
            if r > RADIUS {
                continue;
            }
            let angle = angle_from_top(dx, dy_up);
            let index = bounds.partition_point(|b| *b <= angle).min(bounds.len() - 1);

            // White separators along the two boundary rays of this wedge.
            let start = if index == 0 { 0.0 } else { bounds[index - 1] };
            let near_edge = spec.wedges.len() > 1
                && [start, bounds[index]].into_iter().any(|b| {
                    let diff = (angle - b).rem_euclid(360.0);
                    let diff = diff.min(360.0 - diff);
                    (diff * PI / 180.0).sin().abs() * r <= EDGE && diff < 90.0
                });
            if near_edge {
                continue;
            }
            let Rgb(r8, g8, b8) = spec.wedges[index].color;
            img.put_pixel(x, y, Pixel([r8, g8, b8]));
        }
    }
    img
}

/// A rendered chart on disk. The file is deleted on drop.
#[derive(Debug)]
pub struct TransientChart {
    file: NamedTempFile,
}

impl TransientChart {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Rasterize `spec` into a uniquely named PNG inside `work_dir`.
///
/// `tag` is folded into the file name so concurrent requests sharing a
/// work directory never collide.
pub fn write_transient(spec: &ChartSpec, work_dir: &Path, tag: &str) -> Result<TransientChart> {
    std::fs::create_dir_all(work_dir)?;
    let file = Builder::new()
        .prefix(&format!("reserve_chart_{}_", tag))
        .suffix(".png")
        .tempfile_in(work_dir)?;
    rasterize(spec).save_with_format(file.path(), image::ImageFormat::Png)?;
    tracing::debug!("chart written to {:?} ({} wedges)", file.path(), spec.wedges.len());
    Ok(TransientChart { file })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spec(n: usize) -> Option<ChartSpec> {
        ChartSpec::reserve(n, "Estate", "Disposable", |i| format!("Child {}", i))
    }

    #[test]
    fn test_no_children_no_chart() {
        assert!(spec(0).is_none());
    }

    #[test]
    fn test_child_count_cap() {
        assert_eq!(spec(MAX_CHILDREN).unwrap().wedges.len(), MAX_CHILDREN + 1);
        assert!(spec(MAX_CHILDREN + 1).is_none());
        assert!(spec(usize::MAX).is_none());
    }

    #[test]
    fn test_wedge_shares() {
        for n in 1..=MAX_CHILDREN {
            let s = spec(n).unwrap();
            assert_eq!(s.wedges.len(), n + 1);
            assert_relative_eq!(s.wedges[0].share, 50.0);
            for w in &s.wedges[1..] {
                assert_relative_eq!(w.share, 50.0 / n as f64, epsilon = 1e-12);
            }
            assert_relative_eq!(s.total_share(), 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_palette_cycles() {
        let s = spec(7).unwrap();
        assert_eq!(s.wedges[0].color, DISPOSABLE_COLOR);
        assert_eq!(s.wedges[1].color, RESERVE_PALETTE[1]);
        assert_eq!(s.wedges[5].color, RESERVE_PALETTE[0]);
        assert_eq!(s.wedges[6].color, RESERVE_PALETTE[1]);
    }

    #[test]
    fn test_legend_entry() {
        let s = spec(3).unwrap();
        assert_eq!(ChartSpec::legend_entry(&s.wedges[0]), "Disposable: 50.0%");
        assert_eq!(ChartSpec::legend_entry(&s.wedges[1]), "Child 1: 16.7%");
    }

    #[test]
    fn test_angle_from_top() {
        assert_relative_eq!(angle_from_top(0.0, 1.0), 0.0);
        assert_relative_eq!(angle_from_top(-1.0, 0.0), 90.0);
        assert_relative_eq!(angle_from_top(0.0, -1.0), 180.0);
        assert_relative_eq!(angle_from_top(1.0, 0.0), 270.0);
    }

    #[test]
    fn test_rasterize_halves() {
        let img = rasterize(&spec(1).unwrap());
        let (cx, cy) = (CENTER.0 as u32, CENTER.1 as u32);
        // Disposable half runs counter-clockwise from the top: left side.
        let Rgb(r, g, b) = DISPOSABLE_COLOR;
        assert_eq!(img.get_pixel(cx - 150, cy).0, [r, g, b]);
        let Rgb(r, g, b) = RESERVE_PALETTE[1];
        assert_eq!(img.get_pixel(cx + 150, cy).0, [r, g, b]);
        // Outside the disc stays white.
        assert_eq!(img.get_pixel(RASTER_WIDTH - 1, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_transient_file_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let chart = write_transient(&spec(2).unwrap(), dir.path(), "req1").unwrap();
        let path = chart.path().to_path_buf();
        assert!(path.exists());
        assert!(path.file_name().unwrap().to_string_lossy().contains("req1"));
        drop(chart);
        assert!(!path.exists());
    }

    #[test]
    fn test_transient_names_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let s = spec(1).unwrap();
        let a = write_transient(&s, dir.path(), "same").unwrap();
        let b = write_transient(&s, dir.path(), "same").unwrap();
        assert_ne!(a.path(), b.path());
    }
}
