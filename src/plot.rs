//! Figure assembly: trace styling, scene builders, and legend handling.
//!
//! The rendering boundary is deliberately opaque: a backend consumes the
//! figure's `(points, style)` traces and produces whatever output it likes.
//! Everything here is plain data; no drawing happens in this module.

use crate::cone::Cone;
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::polyline::Polyline3;
use crate::spiral::ConicalSpiral;

/// Stroke pattern for a trace or grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePattern {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Point marker drawn at each vertex of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Diamond,
}

/// Style metadata attached to one trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStyle {
    /// Stroke color, as a CSS color name or `#rrggbb` string.
    pub color: String,
    pub pattern: LinePattern,
    /// Marker drawn at every vertex, if any.
    pub marker: Option<Marker>,
    /// Stroke opacity in `[0, 1]`.
    pub alpha: Real,
    /// Legend label; unlabeled traces never appear in the legend.
    pub label: Option<String>,
}

impl Default for TraceStyle {
    /// Solid black line, full opacity, no marker, no label.
    fn default() -> Self {
        Self {
            color: "black".into(),
            pattern: LinePattern::Solid,
            marker: None,
            alpha: 1.0,
            label: None,
        }
    }
}

/// Grid line styling for one grid level.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    pub color: String,
    pub pattern: LinePattern,
    pub alpha: Real,
}

impl GridStyle {
    /// Default major grid: solid black at 0.6 opacity.
    pub fn major() -> Self {
        Self {
            color: "black".into(),
            pattern: LinePattern::Solid,
            alpha: 0.6,
        }
    }

    /// Default minor grid: solid black at 0.2 opacity.
    pub fn minor() -> Self {
        Self {
            color: "black".into(),
            pattern: LinePattern::Solid,
            alpha: 0.2,
        }
    }
}

/// Axis decoration. Optional labels are applied by a backend only when
/// present.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisStyle {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub z_label: Option<String>,
    pub major_grid: GridStyle,
    pub minor_grid: GridStyle,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            z_label: None,
            major_grid: GridStyle::major(),
            minor_grid: GridStyle::minor(),
        }
    }
}

/// One renderable curve: an ordered point sequence plus its style.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub polyline: Polyline3,
    pub style: TraceStyle,
}

/// Handle to a trace within a [`Figure`], in insertion order.
pub type TraceId = usize;

/// A legend entry after deduplication.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    /// The first trace that carried this label.
    pub trace: TraceId,
}

/// A retained scene: axis decoration plus an ordered list of traces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    pub axis: AxisStyle,
    pub traces: Vec<Trace>,
}

impl Figure {
    #[inline]
    pub fn new(axis: AxisStyle) -> Self {
        Self {
            axis,
            traces: Vec::new(),
        }
    }

    /// Adds one trace, returning its handle.
    pub fn add_trace(&mut self, polyline: Polyline3, style: TraceStyle) -> TraceId {
        self.traces.push(Trace { polyline, style });
        self.traces.len() - 1
    }

    /// Adds the stacked-circle cone approximation: one trace per circle, all
    /// sharing a label (the legend collapses them to a single entry), plus an
    /// explicit marker at the degenerate apex circle.
    pub fn add_cone(&mut self, cone: &Cone) -> Vec<TraceId> {
        let label = format!("Cone r={:.2} h={:.2}", cone.radius(), cone.height());
        let sampling = cone.sample();

        let mut handles = Vec::with_capacity(sampling.rings.len() + 1);
        for ring in sampling.rings {
            handles.push(self.add_trace(
                ring,
                TraceStyle {
                    color: "blue".into(),
                    alpha: 0.25,
                    label: Some(label.clone()),
                    ..TraceStyle::default()
                },
            ));
        }
        if let Some(apex) = sampling.apex {
            handles.push(self.add_trace(
                Polyline3::from_points(vec![apex]),
                TraceStyle {
                    color: "blue".into(),
                    marker: Some(Marker::Circle),
                    alpha: 0.15,
                    label: Some(label),
                    ..TraceStyle::default()
                },
            ));
        }
        handles
    }

    /// Adds the spiral curve.
    pub fn add_spiral(&mut self, spiral: &ConicalSpiral) -> TraceId {
        let cone = spiral.cone();
        let label = format!(
            "Spiral r={:.2} h={:.2} d={:.2}",
            cone.radius(),
            cone.height(),
            spiral.pitch()
        );
        self.add_trace(
            spiral.sample(),
            TraceStyle {
                color: "red".into(),
                label: Some(label),
                ..TraceStyle::default()
            },
        )
    }

    /// Adds the vertical reference pole through the cone axis.
    pub fn add_center_pole(&mut self, cone: &Cone) -> TraceId {
        self.add_trace(
            cone.center_pole(),
            TraceStyle {
                marker: Some(Marker::Circle),
                ..TraceStyle::default()
            },
        )
    }

    /// Adds the spiral's support points at `delta_h` height intervals.
    pub fn add_support_points(
        &mut self,
        spiral: &ConicalSpiral,
        delta_h: Real,
    ) -> Result<TraceId, GeometryError> {
        let points = spiral.support_points(delta_h)?;
        Ok(self.add_trace(
            points,
            TraceStyle {
                color: "green".into(),
                pattern: LinePattern::Dotted,
                marker: Some(Marker::Diamond),
                label: Some("Supports".into()),
                ..TraceStyle::default()
            },
        ))
    }

    /// Assembles the full scene for one spiral: cone shell, spiral curve and
    /// center pole, with a legend naming the cone dimensions and the spiral's
    /// pitch plus its computed arc length.
    pub fn cone_and_spiral(spiral: &ConicalSpiral) -> Self {
        let cone = spiral.cone();
        let mut figure = Figure::new(AxisStyle {
            title: Some(format!(
                "Cone r={:.2} h={:.2}, spiral d={:.2}",
                cone.radius(),
                cone.height(),
                spiral.pitch()
            )),
            x_label: Some("x".into()),
            y_label: Some("y".into()),
            z_label: Some("z".into()),
            ..AxisStyle::default()
        });

        figure.add_cone(&cone);
        figure.add_trace(
            spiral.sample(),
            TraceStyle {
                color: "red".into(),
                label: Some(format!(
                    "Spiral d={:.2} length={:.2}",
                    spiral.pitch(),
                    spiral.arc_length()
                )),
                ..TraceStyle::default()
            },
        );
        figure.add_center_pole(&cone);
        figure
    }

    /// Legend entries with duplicate labels removed; the first trace bearing
    /// a label wins. With `normalize`, labels are title-cased first.
    pub fn legend(&self, normalize: bool) -> Vec<LegendEntry> {
        let mut entries: Vec<LegendEntry> = Vec::new();
        for (index, trace) in self.traces.iter().enumerate() {
            let Some(label) = &trace.style.label else {
                continue;
            };
            let label = if normalize {
                title_case(label)
            } else {
                label.clone()
            };
            if !entries.iter().any(|entry| entry.label == label) {
                entries.push(LegendEntry {
                    label,
                    trace: index,
                });
            }
        }
        entries
    }
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
