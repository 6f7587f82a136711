//! Style configuration for the progress circle.
//!
//! [`FabProgressStyle`] is an immutable value. Each `with_*` method returns a
//! new style with one field changed and every other field preserved, so the
//! host can swap the whole value when a setter is called.
//!
//! Styles load from YAML with camelCase keys:
//!
//! ```
//! use fab_progress_widgets::{CircleSize, FabProgressStyle};
//!
//! let style = FabProgressStyle::from_yaml(
//!     "arcWidth: 6\ncircleSize: mini\nsweepRange: {min: 30, max: 270}\n",
//! )
//! .unwrap();
//! assert_eq!(style.arc_width(), 6.0);
//! assert_eq!(style.circle_size(), CircleSize::Mini);
//! assert_eq!(style.sweep_range().max(), 270.0);
//! ```

use crate::error::{FabProgressError, Result};
use fab_progress_core::{Color, Point};
use serde::{Deserialize, Serialize};

/// Default arc color (`#f57c00`).
pub const DEFAULT_ARC_COLOR: &str = "#f57c00";
/// Default arc stroke width in pixels.
pub const DEFAULT_ARC_WIDTH: f32 = 4.0;
/// Default time the final icon stays up on a reusable widget (ms).
pub const DEFAULT_FINAL_ICON_DURATION_MS: u32 = 3000;

// =============================================================================
// CircleSize
// =============================================================================

/// Preset button diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleSize {
    /// 56px action button
    #[default]
    Normal,
    /// 40px action button
    Mini,
}

impl CircleSize {
    /// Button diameter in pixels.
    #[must_use]
    pub const fn diameter(self) -> f32 {
        match self {
            Self::Normal => 56.0,
            Self::Mini => 40.0,
        }
    }

    /// Map the integer attribute form: 1 = normal, 2 = mini.
    pub fn from_attr(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Self::Normal),
            2 => Ok(Self::Mini),
            other => Err(FabProgressError::InvalidCircleSize(other)),
        }
    }
}

// =============================================================================
// SweepRange
// =============================================================================

/// Bounds of the arc sweep during the indeterminate loop, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SweepRangeAttr")]
pub struct SweepRange {
    min: f32,
    max: f32,
}

#[derive(Deserialize)]
struct SweepRangeAttr {
    min: f32,
    max: f32,
}

impl TryFrom<SweepRangeAttr> for SweepRange {
    type Error = FabProgressError;

    fn try_from(attr: SweepRangeAttr) -> Result<Self> {
        Self::new(attr.min, attr.max)
    }
}

impl SweepRange {
    /// Create a range, requiring `0 <= min < max <= 360`.
    pub fn new(min: f32, max: f32) -> Result<Self> {
        let valid = min.is_finite() && max.is_finite() && min >= 0.0 && min < max && max <= 360.0;
        if valid {
            Ok(Self { min, max })
        } else {
            Err(FabProgressError::InvalidSweepRange { min, max })
        }
    }

    /// Minimum sweep angle.
    #[must_use]
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Maximum sweep angle.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Whether `angle` lies within the range (inclusive).
    #[must_use]
    pub fn contains(&self, angle: f32) -> bool {
        angle >= self.min && angle <= self.max
    }
}

impl Default for SweepRange {
    fn default() -> Self {
        Self {
            min: 20.0,
            max: 300.0,
        }
    }
}

// =============================================================================
// ArcDurations
// =============================================================================

/// Per-phase arc timings in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcDurations {
    /// One full turn of the indeterminate spin
    pub rotation_ms: u32,
    /// Sweep growing from min to max
    pub grow_ms: u32,
    /// Sweep shrinking from max to min
    pub shrink_ms: u32,
    /// Sweep closing to a full circle
    pub complete_ms: u32,
}

impl Default for ArcDurations {
    fn default() -> Self {
        Self {
            rotation_ms: 2000,
            grow_ms: 1000,
            shrink_ms: 1000,
            complete_ms: 2000,
        }
    }
}

impl ArcDurations {
    /// Rotation period in seconds.
    #[must_use]
    pub fn rotation_secs(&self) -> f64 {
        ms_to_secs(self.rotation_ms)
    }

    /// Grow duration in seconds.
    #[must_use]
    pub fn grow_secs(&self) -> f64 {
        ms_to_secs(self.grow_ms)
    }

    /// Shrink duration in seconds.
    #[must_use]
    pub fn shrink_secs(&self) -> f64 {
        ms_to_secs(self.shrink_ms)
    }

    /// Complete duration in seconds.
    #[must_use]
    pub fn complete_secs(&self) -> f64 {
        ms_to_secs(self.complete_ms)
    }

    fn validate(&self) -> Result<()> {
        let fields = [
            ("rotationArcDuration", self.rotation_ms),
            ("growArcDuration", self.grow_ms),
            ("shrinkArcDuration", self.shrink_ms),
            ("completeArcDuration", self.complete_ms),
        ];
        for (field, ms) in fields {
            if ms == 0 {
                return Err(FabProgressError::InvalidValue {
                    field: field.to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}

pub(crate) fn ms_to_secs(ms: u32) -> f64 {
    f64::from(ms) / 1000.0
}

// =============================================================================
// FinalIcon
// =============================================================================

/// Icon drawn on the completion overlay.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "FinalIconAttr", into = "FinalIconAttr")]
pub enum FinalIcon {
    /// Built-in checkmark stroke
    #[default]
    Checkmark,
    /// A text glyph centered in the overlay
    Glyph(String),
    /// Polyline in unit coordinates (0..1 across the icon box)
    Path(Vec<Point>),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FinalIconAttr {
    Name(String),
    Glyph { glyph: String },
    Path { path: Vec<Point> },
}

impl TryFrom<FinalIconAttr> for FinalIcon {
    type Error = FabProgressError;

    fn try_from(attr: FinalIconAttr) -> Result<Self> {
        let icon = match attr {
            FinalIconAttr::Name(name) if name == "checkmark" => Self::Checkmark,
            FinalIconAttr::Name(name) => {
                return Err(FabProgressError::InvalidIcon(format!(
                    "unknown icon name '{name}'"
                )))
            }
            FinalIconAttr::Glyph { glyph } => Self::Glyph(glyph),
            FinalIconAttr::Path { path } => Self::Path(path),
        };
        icon.validate()?;
        Ok(icon)
    }
}

impl From<FinalIcon> for FinalIconAttr {
    fn from(icon: FinalIcon) -> Self {
        match icon {
            FinalIcon::Checkmark => Self::Name("checkmark".to_string()),
            FinalIcon::Glyph(glyph) => Self::Glyph { glyph },
            FinalIcon::Path(path) => Self::Path { path },
        }
    }
}

impl FinalIcon {
    /// Unit-space points of the default checkmark.
    pub const CHECKMARK: [Point; 3] = [
        Point::new(0.2, 0.52),
        Point::new(0.42, 0.72),
        Point::new(0.8, 0.3),
    ];

    /// Check that the icon can be drawn.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Checkmark => Ok(()),
            Self::Glyph(glyph) if glyph.trim().is_empty() => Err(FabProgressError::InvalidIcon(
                "glyph must not be empty".to_string(),
            )),
            Self::Glyph(_) => Ok(()),
            Self::Path(points) if points.len() < 2 => Err(FabProgressError::InvalidIcon(
                format!("path needs at least 2 points, found {}", points.len()),
            )),
            Self::Path(points) => {
                let in_unit = |v: f32| (0.0..=1.0).contains(&v);
                match points.iter().find(|p| !in_unit(p.x) || !in_unit(p.y)) {
                    Some(p) => Err(FabProgressError::InvalidIcon(format!(
                        "path point ({}, {}) outside the unit square",
                        p.x, p.y
                    ))),
                    None => Ok(()),
                }
            }
        }
    }
}

// =============================================================================
// FabProgressStyle
// =============================================================================

/// Immutable style of a progress circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StyleAttrs", into = "StyleAttrs")]
pub struct FabProgressStyle {
    arc_color: Color,
    arc_width: f32,
    circle_size: CircleSize,
    rounded_stroke: bool,
    reusable: bool,
    final_icon: FinalIcon,
    show_final_icon: bool,
    final_icon_duration_ms: u32,
    durations: ArcDurations,
    sweep_range: SweepRange,
}

impl Default for FabProgressStyle {
    fn default() -> Self {
        Self {
            arc_color: Color::from_hex(DEFAULT_ARC_COLOR).unwrap_or(Color::BLACK),
            arc_width: DEFAULT_ARC_WIDTH,
            circle_size: CircleSize::Normal,
            rounded_stroke: false,
            reusable: false,
            final_icon: FinalIcon::Checkmark,
            show_final_icon: true,
            final_icon_duration_ms: DEFAULT_FINAL_ICON_DURATION_MS,
            durations: ArcDurations::default(),
            sweep_range: SweepRange::default(),
        }
    }
}

impl FabProgressStyle {
    /// Default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a YAML style document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let attrs: StyleAttrs = serde_yaml_ng::from_str(yaml)?;
        Self::try_from(attrs)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check field invariants that the `with_*` methods do not enforce.
    pub fn validate(&self) -> Result<()> {
        if !self.arc_width.is_finite() || self.arc_width <= 0.0 {
            return Err(FabProgressError::InvalidValue {
                field: "arcWidth".to_string(),
                message: format!("must be a positive number, got {}", self.arc_width),
            });
        }
        self.durations.validate()?;
        self.final_icon.validate()
    }

    /// Set arc color.
    #[must_use]
    pub fn with_arc_color(self, arc_color: Color) -> Self {
        Self { arc_color, ..self }
    }

    /// Set arc stroke width.
    #[must_use]
    pub fn with_arc_width(self, arc_width: f32) -> Self {
        Self { arc_width, ..self }
    }

    /// Set circle size.
    #[must_use]
    pub fn with_circle_size(self, circle_size: CircleSize) -> Self {
        Self {
            circle_size,
            ..self
        }
    }

    /// Use a round stroke cap instead of butt.
    #[must_use]
    pub fn with_rounded_stroke(self, rounded_stroke: bool) -> Self {
        Self {
            rounded_stroke,
            ..self
        }
    }

    /// Reset to idle after each completion.
    #[must_use]
    pub fn with_reusable(self, reusable: bool) -> Self {
        Self { reusable, ..self }
    }

    /// Set the overlay icon.
    #[must_use]
    pub fn with_final_icon(self, final_icon: FinalIcon) -> Self {
        Self { final_icon, ..self }
    }

    /// Show the overlay on completion.
    #[must_use]
    pub fn with_show_final_icon(self, show_final_icon: bool) -> Self {
        Self {
            show_final_icon,
            ..self
        }
    }

    /// Time the overlay stays up before a reusable widget hides it (ms).
    #[must_use]
    pub fn with_final_icon_duration(self, final_icon_duration_ms: u32) -> Self {
        Self {
            final_icon_duration_ms,
            ..self
        }
    }

    /// Replace all arc durations.
    #[must_use]
    pub fn with_durations(self, durations: ArcDurations) -> Self {
        Self { durations, ..self }
    }

    /// Set the rotation period (ms).
    #[must_use]
    pub fn with_rotation_duration(self, rotation_ms: u32) -> Self {
        let durations = ArcDurations {
            rotation_ms,
            ..self.durations
        };
        self.with_durations(durations)
    }

    /// Set the grow duration (ms).
    #[must_use]
    pub fn with_grow_duration(self, grow_ms: u32) -> Self {
        let durations = ArcDurations {
            grow_ms,
            ..self.durations
        };
        self.with_durations(durations)
    }

    /// Set the shrink duration (ms).
    #[must_use]
    pub fn with_shrink_duration(self, shrink_ms: u32) -> Self {
        let durations = ArcDurations {
            shrink_ms,
            ..self.durations
        };
        self.with_durations(durations)
    }

    /// Set the complete duration (ms).
    #[must_use]
    pub fn with_complete_duration(self, complete_ms: u32) -> Self {
        let durations = ArcDurations {
            complete_ms,
            ..self.durations
        };
        self.with_durations(durations)
    }

    /// Set the sweep bounds.
    #[must_use]
    pub fn with_sweep_range(self, sweep_range: SweepRange) -> Self {
        Self {
            sweep_range,
            ..self
        }
    }

    /// Arc color.
    #[must_use]
    pub const fn arc_color(&self) -> Color {
        self.arc_color
    }

    /// Arc stroke width.
    #[must_use]
    pub const fn arc_width(&self) -> f32 {
        self.arc_width
    }

    /// Circle size.
    #[must_use]
    pub const fn circle_size(&self) -> CircleSize {
        self.circle_size
    }

    /// Whether the stroke cap is round.
    #[must_use]
    pub const fn rounded_stroke(&self) -> bool {
        self.rounded_stroke
    }

    /// Whether the widget resets after completion.
    #[must_use]
    pub const fn reusable(&self) -> bool {
        self.reusable
    }

    /// Overlay icon.
    #[must_use]
    pub const fn final_icon(&self) -> &FinalIcon {
        &self.final_icon
    }

    /// Whether the overlay is shown on completion.
    #[must_use]
    pub const fn show_final_icon(&self) -> bool {
        self.show_final_icon
    }

    /// Overlay display time in milliseconds.
    #[must_use]
    pub const fn final_icon_duration_ms(&self) -> u32 {
        self.final_icon_duration_ms
    }

    /// Arc timings.
    #[must_use]
    pub const fn durations(&self) -> ArcDurations {
        self.durations
    }

    /// Sweep bounds.
    #[must_use]
    pub const fn sweep_range(&self) -> SweepRange {
        self.sweep_range
    }
}

/// Flat attribute form of [`FabProgressStyle`], as written in YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
struct StyleAttrs {
    #[serde(with = "hex_color")]
    arc_color: Color,
    arc_width: f32,
    circle_size: CircleSize,
    rounded_stroke: bool,
    reusable: bool,
    final_icon: FinalIcon,
    show_final_icon: bool,
    final_icon_duration: u32,
    complete_arc_duration: u32,
    rotation_arc_duration: u32,
    grow_arc_duration: u32,
    shrink_arc_duration: u32,
    sweep_range: SweepRange,
}

impl Default for StyleAttrs {
    fn default() -> Self {
        FabProgressStyle::default().into()
    }
}

impl From<FabProgressStyle> for StyleAttrs {
    fn from(style: FabProgressStyle) -> Self {
        Self {
            arc_color: style.arc_color,
            arc_width: style.arc_width,
            circle_size: style.circle_size,
            rounded_stroke: style.rounded_stroke,
            reusable: style.reusable,
            final_icon: style.final_icon,
            show_final_icon: style.show_final_icon,
            final_icon_duration: style.final_icon_duration_ms,
            complete_arc_duration: style.durations.complete_ms,
            rotation_arc_duration: style.durations.rotation_ms,
            grow_arc_duration: style.durations.grow_ms,
            shrink_arc_duration: style.durations.shrink_ms,
            sweep_range: style.sweep_range,
        }
    }
}

impl TryFrom<StyleAttrs> for FabProgressStyle {
    type Error = FabProgressError;

    fn try_from(attrs: StyleAttrs) -> Result<Self> {
        let style = Self {
            arc_color: attrs.arc_color,
            arc_width: attrs.arc_width,
            circle_size: attrs.circle_size,
            rounded_stroke: attrs.rounded_stroke,
            reusable: attrs.reusable,
            final_icon: attrs.final_icon,
            show_final_icon: attrs.show_final_icon,
            final_icon_duration_ms: attrs.final_icon_duration,
            durations: ArcDurations {
                rotation_ms: attrs.rotation_arc_duration,
                grow_ms: attrs.grow_arc_duration,
                shrink_ms: attrs.shrink_arc_duration,
                complete_ms: attrs.complete_arc_duration,
            },
            sweep_range: attrs.sweep_range,
        };
        style.validate()?;
        Ok(style)
    }
}

mod hex_color {
    use fab_progress_core::Color;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        if color.a < 1.0 {
            serializer.serialize_str(&color.to_hex_with_alpha())
        } else {
            serializer.serialize_str(&color.to_hex())
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).map_err(|e| D::Error::custom(format!("arcColor '{hex}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_style_defaults() {
        let style = FabProgressStyle::default();
        assert_eq!(style.arc_color().to_hex(), "#f57c00");
        assert_eq!(style.arc_width(), 4.0);
        assert_eq!(style.circle_size(), CircleSize::Normal);
        assert!(!style.rounded_stroke());
        assert!(!style.reusable());
        assert_eq!(style.final_icon(), &FinalIcon::Checkmark);
        assert!(style.show_final_icon());
        assert_eq!(style.final_icon_duration_ms(), 3000);
        assert_eq!(style.durations(), ArcDurations::default());
        assert_eq!(style.sweep_range(), SweepRange::default());
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_with_preserves_other_fields() {
        let style = FabProgressStyle::default()
            .with_reusable(true)
            .with_arc_width(8.0)
            .with_grow_duration(400);
        let changed = style.clone().with_shrink_duration(700);

        assert!(changed.reusable());
        assert_eq!(changed.arc_width(), 8.0);
        assert_eq!(changed.durations().grow_ms, 400);
        assert_eq!(changed.durations().shrink_ms, 700);
        assert_eq!(changed.durations().rotation_ms, 2000);
        assert_eq!(changed.durations().complete_ms, 2000);
        assert_eq!(style.durations().shrink_ms, 1000);
    }

    #[test]
    fn test_circle_size() {
        assert_eq!(CircleSize::Normal.diameter(), 56.0);
        assert_eq!(CircleSize::Mini.diameter(), 40.0);
        assert_eq!(CircleSize::from_attr(1).unwrap(), CircleSize::Normal);
        assert_eq!(CircleSize::from_attr(2).unwrap(), CircleSize::Mini);
        assert!(matches!(
            CircleSize::from_attr(0),
            Err(FabProgressError::InvalidCircleSize(0))
        ));
    }

    #[test]
    fn test_sweep_range_validation() {
        assert!(SweepRange::new(0.0, 360.0).is_ok());
        assert!(SweepRange::new(20.0, 20.0).is_err());
        assert!(SweepRange::new(-1.0, 100.0).is_err());
        assert!(SweepRange::new(10.0, 361.0).is_err());
        assert!(SweepRange::new(f32::NAN, 100.0).is_err());
        let range = SweepRange::default();
        assert!(range.contains(20.0));
        assert!(range.contains(300.0));
        assert!(!range.contains(301.0));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let err = FabProgressStyle::default().with_arc_width(0.0).validate();
        assert!(matches!(err, Err(FabProgressError::InvalidValue { .. })));

        let err = FabProgressStyle::default()
            .with_rotation_duration(0)
            .validate();
        assert!(matches!(
            err,
            Err(FabProgressError::InvalidValue { field, .. }) if field == "rotationArcDuration"
        ));

        let err = FabProgressStyle::default()
            .with_final_icon(FinalIcon::Glyph("  ".to_string()))
            .validate();
        assert!(matches!(err, Err(FabProgressError::InvalidIcon(_))));
    }

    #[test]
    fn test_icon_validation() {
        assert!(FinalIcon::Checkmark.validate().is_ok());
        assert!(FinalIcon::Glyph("★".to_string()).validate().is_ok());
        assert!(FinalIcon::Path(vec![Point::ORIGIN]).validate().is_err());
        assert!(FinalIcon::Path(vec![Point::ORIGIN, Point::new(1.5, 0.5)])
            .validate()
            .is_err());
        assert!(FinalIcon::Path(FinalIcon::CHECKMARK.to_vec()).validate().is_ok());
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = r##"
arcColor: "#2196f3"
arcWidth: 6
circleSize: mini
roundedStroke: true
reusable: true
finalIcon: {glyph: "★"}
showFinalIcon: false
finalIconDuration: 1500
completeArcDuration: 1200
rotationArcDuration: 1800
growArcDuration: 700
shrinkArcDuration: 600
sweepRange: {min: 30, max: 270}
"##;
        let style = FabProgressStyle::from_yaml(yaml).unwrap();
        assert_eq!(style.arc_color().to_hex(), "#2196f3");
        assert_eq!(style.arc_width(), 6.0);
        assert_eq!(style.circle_size(), CircleSize::Mini);
        assert!(style.rounded_stroke());
        assert!(style.reusable());
        assert_eq!(style.final_icon(), &FinalIcon::Glyph("★".to_string()));
        assert!(!style.show_final_icon());
        assert_eq!(style.final_icon_duration_ms(), 1500);
        assert_eq!(
            style.durations(),
            ArcDurations {
                rotation_ms: 1800,
                grow_ms: 700,
                shrink_ms: 600,
                complete_ms: 1200,
            }
        );
        assert_eq!(style.sweep_range().min(), 30.0);
    }

    #[test]
    fn test_from_yaml_empty_is_default() {
        let style = FabProgressStyle::from_yaml("{}").unwrap();
        assert_eq!(style, FabProgressStyle::default());
    }

    #[test]
    fn test_from_yaml_path_icon() {
        let yaml = "finalIcon:\n  path:\n    - {x: 0.1, y: 0.1}\n    - {x: 0.9, y: 0.9}\n";
        let style = FabProgressStyle::from_yaml(yaml).unwrap();
        assert!(matches!(style.final_icon(), FinalIcon::Path(points) if points.len() == 2));
    }

    #[test]
    fn test_from_yaml_errors() {
        assert!(matches!(
            FabProgressStyle::from_yaml("sweepRange: {min: 300, max: 20}"),
            Err(FabProgressError::Yaml(_))
        ));
        assert!(matches!(
            FabProgressStyle::from_yaml("arcWidth: -2"),
            Err(FabProgressError::InvalidValue { .. })
        ));
        assert!(FabProgressStyle::from_yaml("arcColour: red").is_err());
        assert!(FabProgressStyle::from_yaml("arcColor: \"#zzzzzz\"").is_err());
        assert!(FabProgressStyle::from_yaml("finalIcon: star").is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let style = FabProgressStyle::default()
            .with_final_icon(FinalIcon::Path(FinalIcon::CHECKMARK.to_vec()))
            .with_reusable(true);
        let yaml = style.to_yaml().unwrap();
        assert!(yaml.contains("arcColor"));
        assert_eq!(FabProgressStyle::from_yaml(&yaml).unwrap(), style);
    }

    proptest! {
        #[test]
        fn prop_sweep_range_accepts_ordered_bounds(min in 0.0f32..359.0, gap in 0.5f32..360.0) {
            let max = (min + gap).min(360.0);
            prop_assume!(min < max);
            let range = SweepRange::new(min, max).unwrap();
            prop_assert!(range.contains(min));
            prop_assert!(range.contains(max));
        }

        #[test]
        fn prop_sweep_range_rejects_inverted(min in 0.0f32..360.0, max in 0.0f32..360.0) {
            prop_assume!(min >= max);
            prop_assert!(SweepRange::new(min, max).is_err());
        }
    }
}
