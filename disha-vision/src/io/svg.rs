//! SVG visualization for direction estimation audit.
//!
//! Renders the planar (x-y) projection of a depth-derived point cloud
//! together with the 18-slice fan, shaded by projection score, and the
//! advised heading ray. The SVG serves as an audit file for a single
//! estimation: it shows which slice won and how the alternatives scored.

use crate::core::cloud::PointCloud;
use crate::estimator::direction::DirectionEstimate;
use std::fmt::Write;
use std::path::Path;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Background color
    pub background: &'static str,
    /// Point cloud color
    pub points: &'static str,
    /// Slice wedge fill color (opacity scaled by score)
    pub slice_fill: &'static str,
    /// Winning slice outline color
    pub winner: &'static str,
    /// Heading ray color
    pub heading: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            background: "#FFFFFF",
            points: "#555555",
            slice_fill: "#4488CC",
            winner: "#CC4422",
            heading: "#CC4422",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per scene unit
    pub scale: f32,
    /// Point marker radius in pixels
    pub point_radius: f32,
    /// Heading ray width in pixels
    pub ray_width: f32,
    /// Padding around the drawing in pixels
    pub padding: f32,
    /// Upper bound on rendered cloud points; larger clouds are strided
    pub max_points: usize,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 12.0,
            point_radius: 1.0,
            ray_width: 2.0,
            padding: 20.0,
            max_points: 4000,
            colors: SvgColorScheme::default(),
        }
    }
}

/// SVG visualization builder for one estimation.
pub struct SvgVisualizer {
    config: SvgConfig,
    cloud: PointCloud,
    estimate: DirectionEstimate,
    title: Option<String>,
}

impl SvgVisualizer {
    /// Create a new visualizer for a cloud and its estimate.
    pub fn new(cloud: PointCloud, estimate: DirectionEstimate, config: SvgConfig) -> Self {
        Self {
            config,
            cloud,
            estimate,
            title: None,
        }
    }

    /// Set a title rendered at the top of the SVG.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render the SVG document to a string.
    pub fn render(&self) -> String {
        // Drawing bounds: the planar cloud plus the full fan half-disc, so
        // wedges near 0° and 180° stay inside the viewBox.
        let radius = self.fan_radius();
        let ((mut min_x, mut min_y), (mut max_x, mut max_y)) = self
            .cloud
            .planar_bounds()
            .unwrap_or(((-1.0, -1.0), (1.0, 1.0)));
        min_x = min_x.min(-radius);
        min_y = min_y.min(0.0);
        max_x = max_x.max(radius);
        max_y = max_y.max(radius);

        let scale = self.config.scale;
        let pad = self.config.padding;
        let width = (max_x - min_x) * scale + 2.0 * pad;
        let height = (max_y - min_y) * scale + 2.0 * pad;

        // World (x, y) to screen pixels; screen y grows downward.
        let to_px = |x: f32, y: f32| -> (f32, f32) {
            ((x - min_x) * scale + pad, (max_y - y) * scale + pad)
        };

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            self.config.colors.background
        );

        self.render_slice_fan(&mut svg, &to_px);
        self.render_points(&mut svg, &to_px);
        self.render_heading(&mut svg, &to_px);

        if let Some(ref title) = self.title {
            let _ = writeln!(
                svg,
                r#"  <text x="{:.1}" y="{:.1}" font-family="monospace" font-size="12">{}</text>"#,
                pad,
                pad * 0.7,
                title
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Render and save to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }

    fn fan_radius(&self) -> f32 {
        let mut radius = 0.0f32;
        for i in 0..self.cloud.len() {
            let (x, y, _) = self.cloud.point(i);
            radius = radius.max((x * x + y * y).sqrt());
        }
        radius.max(1.0)
    }

    fn render_slice_fan(&self, svg: &mut String, to_px: &dyn Fn(f32, f32) -> (f32, f32)) {
        let radius = self.fan_radius();
        let max_score = self
            .estimate
            .scores
            .iter()
            .map(|s| s.score)
            .fold(0.0f32, f32::max);

        for (idx, entry) in self.estimate.scores.iter().enumerate() {
            let low = entry.slice.low_deg.to_radians();
            let high = entry.slice.high_deg.to_radians();
            let (x1, y1) = to_px(radius * low.cos(), radius * low.sin());
            let (x2, y2) = to_px(radius * high.cos(), radius * high.sin());
            let (ox, oy) = to_px(0.0, 0.0);
            let r_px = radius * self.config.scale;

            let opacity = if max_score > 0.0 {
                0.05 + 0.45 * (entry.score / max_score)
            } else {
                0.05
            };
            let stroke = if self.estimate.winner == Some(idx) {
                format!(
                    r#" stroke="{}" stroke-width="1.5""#,
                    self.config.colors.winner
                )
            } else {
                r##" stroke="#999999" stroke-width="0.3""##.to_string()
            };

            // World angles are CCW; with screen y flipped the arc from low
            // to high runs counterclockwise on screen (sweep flag 0).
            let _ = writeln!(
                svg,
                r#"  <path d="M {:.1} {:.1} L {:.1} {:.1} A {:.1} {:.1} 0 0 0 {:.1} {:.1} Z" fill="{}" fill-opacity="{:.3}"{}/>"#,
                ox,
                oy,
                x1,
                y1,
                r_px,
                r_px,
                x2,
                y2,
                self.config.colors.slice_fill,
                opacity,
                stroke
            );
        }
    }

    fn render_points(&self, svg: &mut String, to_px: &dyn Fn(f32, f32) -> (f32, f32)) {
        let stride = (self.cloud.len() / self.config.max_points.max(1)).max(1);
        let mut i = 0;
        while i < self.cloud.len() {
            let (x, y, _) = self.cloud.point(i);
            let (px, py) = to_px(x, y);
            let _ = writeln!(
                svg,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
                px, py, self.config.point_radius, self.config.colors.points
            );
            i += stride;
        }
    }

    fn render_heading(&self, svg: &mut String, to_px: &dyn Fn(f32, f32) -> (f32, f32)) {
        let radius = self.fan_radius();
        let theta = self.estimate.angle_deg.to_radians();
        let (ox, oy) = to_px(0.0, 0.0);
        let (hx, hy) = to_px(radius * theta.cos(), radius * theta.sin());
        let _ = writeln!(
            svg,
            r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
            ox, oy, hx, hy, self.config.colors.heading, self.config.ray_width
        );
    }
}
