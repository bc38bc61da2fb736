//! SVG rendering for [`Figure`]s.
//!
//! Projects every trace through a fixed azimuth/elevation camera, fits the
//! projected scene into the viewport, and emits one path per trace plus
//! markers, screen-space grid lines, the optional title/axis labels, and a
//! deduplicated legend block.

use crate::float_types::Real;
use crate::plot::{Figure, GridStyle, LinePattern, Marker, Trace, TraceStyle};
use nalgebra::Point3;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path, Rectangle, Text};

/// Orthographic camera described by the conventional azimuth/elevation pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub azimuth_deg: Real,
    pub elevation_deg: Real,
}

impl Default for Projection {
    /// The stock three-quarter view: azimuth −60°, elevation 30°.
    fn default() -> Self {
        Self {
            azimuth_deg: -60.0,
            elevation_deg: 30.0,
        }
    }
}

impl Projection {
    /// Projects a 3D point to unscaled view-plane coordinates. The +Z axis
    /// always maps to straight up on screen.
    pub fn project(&self, point: &Point3<Real>) -> (Real, Real) {
        let (sin_a, cos_a) = self.azimuth_deg.to_radians().sin_cos();
        let (sin_e, cos_e) = self.elevation_deg.to_radians().sin_cos();

        // Rotate the scene around Z by the azimuth, then tilt by the
        // elevation and drop the depth coordinate.
        let x_rotated = point.x * cos_a + point.y * sin_a;
        let y_rotated = -point.x * sin_a + point.y * cos_a;
        let up = point.z * cos_e - y_rotated * sin_e;

        (x_rotated, up)
    }
}

/// Renders a [`Figure`] to an [`svg::Document`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgRenderer {
    pub projection: Projection,
    pub width: u32,
    pub height: u32,
    /// Blank border kept around the fitted drawing, in pixels.
    pub margin: Real,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            projection: Projection::default(),
            width: 800,
            height: 600,
            margin: 60.0,
        }
    }
}

impl SvgRenderer {
    pub fn render(&self, figure: &Figure) -> Document {
        let width = self.width as Real;
        let height = self.height as Real;

        let mut document = Document::new()
            .set("viewBox", (0u32, 0u32, self.width, self.height))
            .set("width", self.width)
            .set("height", self.height)
            .add(
                Rectangle::new()
                    .set("x", 0u32)
                    .set("y", 0u32)
                    .set("width", self.width)
                    .set("height", self.height)
                    .set("fill", "white"),
            );

        document = self.grid_lines(document, &figure.axis.minor_grid, 25);
        document = self.grid_lines(document, &figure.axis.major_grid, 100);

        // Project every trace up front so the viewport can be fitted around
        // the whole scene at once.
        let projected: Vec<Vec<(Real, Real)>> = figure
            .traces
            .iter()
            .map(|trace| {
                trace
                    .polyline
                    .points
                    .iter()
                    .map(|point| self.projection.project(point))
                    .collect()
            })
            .collect();

        if let Some(mapping) = Viewport::fit(&projected, width, height, self.margin) {
            for (trace, points) in figure.traces.iter().zip(&projected) {
                document = draw_trace(document, trace, points, &mapping);
            }
        }

        self.decorations(document, figure)
    }

    /// Horizontal and vertical screen-space grid at the given pixel spacing.
    fn grid_lines(&self, mut document: Document, style: &GridStyle, spacing: u32) -> Document {
        let mut x = spacing;
        while x < self.width {
            document = document.add(grid_line(x, 0, x, self.height, style));
            x += spacing;
        }
        let mut y = spacing;
        while y < self.height {
            document = document.add(grid_line(0, y, self.width, y, style));
            y += spacing;
        }
        document
    }

    /// Title, optional axis labels, and the deduplicated legend.
    fn decorations(&self, mut document: Document, figure: &Figure) -> Document {
        let width = self.width as Real;
        let height = self.height as Real;

        if let Some(title) = &figure.axis.title {
            document = document.add(
                text_at(title.clone(), width / 2.0, 24.0, 16).set("text-anchor", "middle"),
            );
        }
        if let Some(x_label) = &figure.axis.x_label {
            document = document.add(
                text_at(x_label.clone(), width / 2.0, height - 8.0, 12)
                    .set("text-anchor", "middle"),
            );
        }
        if let Some(y_label) = &figure.axis.y_label {
            document = document.add(
                text_at(y_label.clone(), width - 16.0, height - 8.0, 12)
                    .set("text-anchor", "end"),
            );
        }
        if let Some(z_label) = &figure.axis.z_label {
            document = document.add(
                text_at(z_label.clone(), 16.0, height / 2.0, 12)
                    .set("transform", format!("rotate(-90 16 {})", height / 2.0)),
            );
        }

        let entries = figure.legend(false);
        let legend_x = width - self.margin - 200.0;
        let mut legend_y = self.margin / 2.0;
        for entry in entries {
            let color = figure.traces[entry.trace].style.color.clone();
            document = document
                .add(
                    Line::new()
                        .set("x1", legend_x)
                        .set("y1", legend_y - 4.0)
                        .set("x2", legend_x + 24.0)
                        .set("y2", legend_y - 4.0)
                        .set("stroke", color)
                        .set("stroke-width", 2.0),
                )
                .add(text_at(entry.label, legend_x + 30.0, legend_y, 12));
            legend_y += 18.0;
        }

        document
    }
}

/// Mapping from projected view-plane coordinates to the SVG pixel grid,
/// centered and uniformly scaled with the Y axis flipped.
struct Viewport {
    min_x: Real,
    min_y: Real,
    scale: Real,
    offset_x: Real,
    offset_y: Real,
    height: Real,
}

impl Viewport {
    fn fit(
        projected: &[Vec<(Real, Real)>],
        width: Real,
        height: Real,
        margin: Real,
    ) -> Option<Self> {
        let mut min_x = Real::MAX;
        let mut min_y = Real::MAX;
        let mut max_x = Real::MIN;
        let mut max_y = Real::MIN;
        let mut seen = false;
        for points in projected {
            for &(x, y) in points {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
                seen = true;
            }
        }
        if !seen {
            return None;
        }

        // Degenerate (single point / collinear) scenes still get a viewport.
        let span_x = (max_x - min_x).max(1e-9);
        let span_y = (max_y - min_y).max(1e-9);
        let scale = ((width - 2.0 * margin) / span_x).min((height - 2.0 * margin) / span_y);

        Some(Self {
            min_x,
            min_y,
            scale,
            offset_x: (width - span_x * scale) / 2.0,
            offset_y: (height - span_y * scale) / 2.0,
            height,
        })
    }

    fn map(&self, x: Real, y: Real) -> (Real, Real) {
        (
            self.offset_x + (x - self.min_x) * self.scale,
            self.height - (self.offset_y + (y - self.min_y) * self.scale),
        )
    }
}

fn draw_trace(
    mut document: Document,
    trace: &Trace,
    projected: &[(Real, Real)],
    viewport: &Viewport,
) -> Document {
    let mapped: Vec<(Real, Real)> = projected
        .iter()
        .map(|&(x, y)| viewport.map(x, y))
        .collect();

    if mapped.len() >= 2 {
        let mut data = Data::new().move_to(mapped[0]);
        for &point in &mapped[1..] {
            data = data.line_to(point);
        }
        document = document.add(styled_path(data, &trace.style));
    }

    if let Some(marker) = trace.style.marker {
        for &(x, y) in &mapped {
            document = draw_marker(document, marker, x, y, &trace.style);
        }
    }

    document
}

fn styled_path(data: Data, style: &TraceStyle) -> Path {
    let mut path = Path::new()
        .set("d", data)
        .set("fill", "none")
        .set("stroke", style.color.clone())
        .set("stroke-width", 1.5)
        .set("stroke-opacity", style.alpha);
    if let Some(dashes) = dash_array(style.pattern) {
        path = path.set("stroke-dasharray", dashes);
    }
    path
}

fn draw_marker(
    document: Document,
    marker: Marker,
    x: Real,
    y: Real,
    style: &TraceStyle,
) -> Document {
    match marker {
        Marker::Circle => document.add(
            Circle::new()
                .set("cx", x)
                .set("cy", y)
                .set("r", 3.0)
                .set("fill", style.color.clone())
                .set("fill-opacity", style.alpha),
        ),
        Marker::Square => document.add(marker_square(x, y, style)),
        Marker::Diamond => document.add(
            marker_square(x, y, style).set("transform", format!("rotate(45 {} {})", x, y)),
        ),
    }
}

fn marker_square(x: Real, y: Real, style: &TraceStyle) -> Rectangle {
    Rectangle::new()
        .set("x", x - 3.0)
        .set("y", y - 3.0)
        .set("width", 6.0)
        .set("height", 6.0)
        .set("fill", style.color.clone())
        .set("fill-opacity", style.alpha)
}

fn grid_line(x1: u32, y1: u32, x2: u32, y2: u32, style: &GridStyle) -> Line {
    let mut line = Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", style.color.clone())
        .set("stroke-width", 0.5)
        .set("stroke-opacity", style.alpha);
    if let Some(dashes) = dash_array(style.pattern) {
        line = line.set("stroke-dasharray", dashes);
    }
    line
}

fn text_at(content: String, x: Real, y: Real, size: u32) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("font-family", "monospace")
        .set("font-size", size)
        .set("fill", "black")
}

const fn dash_array(pattern: LinePattern) -> Option<&'static str> {
    match pattern {
        LinePattern::Solid => None,
        LinePattern::Dashed => Some("6,3"),
        LinePattern::Dotted => Some("1.5,3"),
    }
}
