//! Donut-style category sector diagram.
//!
//! # Responsibility
//! - Lay out one sector per nonzero category, proportional to its share.
//! - Render the layout through the injected [`DrawSurface`].
//!
//! # Invariants
//! - Sectors start at 12 o'clock and proceed clockwise in fixed category
//!   order (Study, Event, Personal); zero-count categories are skipped.
//! - Angles use canvas convention: radians, y-axis pointing down, so
//!   increasing angle is visually clockwise.
//! - The donut hole is drawn last, over the sectors.

use std::f64::consts::PI;

use crate::model::activity::Category;
use crate::view::projector::TagShare;

/// 2D point in surface coordinates.
pub type Point = (f64, f64);

const SECTOR_RADIUS: f64 = 90.0;
const LEADER_START_RADIUS: f64 = 95.0;
const LABEL_RADIUS: f64 = 110.0;
const HOLE_RADIUS: f64 = 25.0;
const LABEL_BOX_WIDTH: f64 = 70.0;
const LABEL_BOX_HEIGHT: f64 = 20.0;

const LEADER_COLOR: &str = "#334155";
const LABEL_BOX_FILL: &str = "rgba(255, 255, 255, 0.9)";
const HOLE_FILL: &str = "#f1f5f9";
const HOLE_STROKE: &str = "#e2e8f0";
const PLACEHOLDER_COLOR: &str = "#666";
const TOTAL_COLOR: &str = "#475569";

const PLACEHOLDER_MESSAGE: &str = "No activities yet";

/// Sector fill color for each fixed category.
pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Study => "#3b82f6",
        Category::Event => "#10b981",
        Category::Personal => "#f59e0b",
    }
}

/// Which side of the circle a label sits on, decided by the sector's
/// angular midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    Left,
    Right,
}

/// Geometry for one drawn sector.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorLayout {
    pub category: Category,
    pub color: &'static str,
    /// Share of the full circle in `0.0..=1.0`.
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    /// Leader line runs from just outside the rim to the label point.
    pub leader_from: Point,
    pub label_at: Point,
    pub side: LabelSide,
    /// Label text, e.g. `Study 67%`.
    pub label: String,
}

/// Complete chart geometry, independent of any drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum PieLayout {
    /// Empty collection: centered placeholder message, no sectors.
    Empty {
        center: Point,
        message: &'static str,
    },
    Sectors {
        center: Point,
        sectors: Vec<SectorLayout>,
        total: usize,
    },
}

/// Computes the sector diagram geometry for the given category shares.
pub fn layout(shares: &[TagShare; 3], total: usize, center: Point) -> PieLayout {
    if total == 0 {
        return PieLayout::Empty {
            center,
            message: PLACEHOLDER_MESSAGE,
        };
    }

    let (cx, cy) = center;
    let mut sectors = Vec::new();
    let mut start_angle = -PI / 2.0;

    for share in shares {
        if share.count == 0 {
            continue;
        }
        let fraction = share.count as f64 / total as f64;
        let end_angle = start_angle + fraction * 2.0 * PI;
        let mid_angle = (start_angle + end_angle) / 2.0;
        let label_at = (
            cx + mid_angle.cos() * LABEL_RADIUS,
            cy + mid_angle.sin() * LABEL_RADIUS,
        );
        let side = if label_at.0 > cx {
            LabelSide::Right
        } else {
            LabelSide::Left
        };
        sectors.push(SectorLayout {
            category: share.category,
            color: category_color(share.category),
            fraction,
            start_angle,
            end_angle,
            mid_angle,
            leader_from: (
                cx + mid_angle.cos() * LEADER_START_RADIUS,
                cy + mid_angle.sin() * LEADER_START_RADIUS,
            ),
            label_at,
            side,
            label: format!("{} {}%", share.category.label(), share.percent),
        });
        start_angle = end_angle;
    }

    PieLayout::Sectors {
        center,
        sectors,
        total,
    }
}

/// Horizontal text anchoring on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Injected 2D drawing surface.
///
/// Primitive granularity follows what the chart needs; implementations map
/// these onto their actual canvas API.
pub trait DrawSurface {
    fn clear(&mut self);
    /// Fills a circle sector from `start_angle` to `end_angle` (canvas
    /// angle convention) around `center`.
    fn fill_sector(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64, color: &str);
    fn stroke_line(&mut self, from: Point, to: Point, color: &str, width: f64);
    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: &str);
    fn fill_circle(&mut self, center: Point, radius: f64, fill: &str, stroke: &str, stroke_width: f64);
    fn draw_text(&mut self, text: &str, at: Point, align: TextAlign, color: &str, font: &str);
}

/// Draws the category chart for the given aggregates.
///
/// Pure presentation: everything is derived from `shares` and `total`.
pub fn render(surface: &mut dyn DrawSurface, center: Point, shares: &[TagShare; 3], total: usize) {
    surface.clear();

    let plan = layout(shares, total, center);
    match plan {
        PieLayout::Empty { center, message } => {
            surface.draw_text(message, center, TextAlign::Center, PLACEHOLDER_COLOR, "16px Arial");
        }
        PieLayout::Sectors {
            center,
            sectors,
            total,
        } => {
            for sector in &sectors {
                surface.fill_sector(
                    center,
                    SECTOR_RADIUS,
                    sector.start_angle,
                    sector.end_angle,
                    sector.color,
                );
            }
            for sector in &sectors {
                surface.stroke_line(sector.leader_from, sector.label_at, LEADER_COLOR, 1.0);
                let (label_x, label_y) = sector.label_at;
                let (box_x, align, text_x) = match sector.side {
                    LabelSide::Right => (label_x - 5.0, TextAlign::Left, label_x + 2.0),
                    LabelSide::Left => (label_x - LABEL_BOX_WIDTH, TextAlign::Right, label_x - 2.0),
                };
                surface.fill_rect(
                    (box_x, label_y - LABEL_BOX_HEIGHT / 2.0),
                    LABEL_BOX_WIDTH,
                    LABEL_BOX_HEIGHT,
                    LABEL_BOX_FILL,
                );
                surface.draw_text(
                    &sector.label,
                    (text_x, label_y),
                    align,
                    sector.color,
                    "bold 11px Arial",
                );
            }
            // Donut hole last, over the sector tips.
            surface.fill_circle(center, HOLE_RADIUS, HOLE_FILL, HOLE_STROKE, 2.0);
            let (cx, cy) = center;
            surface.draw_text(
                &total.to_string(),
                (cx, cy - 5.0),
                TextAlign::Center,
                TOTAL_COLOR,
                "bold 14px Arial",
            );
            surface.draw_text(
                "activities",
                (cx, cy + 8.0),
                TextAlign::Center,
                TOTAL_COLOR,
                "10px Arial",
            );
        }
    }
}
