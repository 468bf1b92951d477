// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable-identity drawing commands.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};

/// A stable mark identity used for diffing and deterministic render ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Horizontal text anchoring relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the start of the text run.
    Start,
    /// The position is the horizontal middle of the text run.
    Middle,
    /// The position is the end of the text run.
    End,
}

/// Vertical text baseline relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// The position is the vertical middle of the text run.
    Middle,
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the hanging baseline.
    Hanging,
    /// The position is the ideographic baseline.
    Ideographic,
}

/// A filled and/or stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint. A fully transparent solid disables filling.
    pub fill: Brush,
    /// Stroke paint, applied when `stroke_width > 0`.
    pub stroke: Brush,
    /// Stroke width in scene coordinates; `0` disables stroking.
    pub stroke_width: f64,
}

/// A positioned text run (unshaped).
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Rotation angle in degrees about `pos`.
    pub angle: f64,
}

/// The drawable payload of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A filled/stroked path.
    Path(PathMark),
    /// A text run.
    Text(TextMark),
}

impl MarkPayload {
    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns geometric bounds, where cheaply known.
    ///
    /// Text bounds require shaping and are reported as `None`; renderers that
    /// need them can estimate from the font size.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// Discriminant for [`MarkPayload`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkKind {
    /// A path payload.
    Path,
    /// A text payload.
    Text,
}

/// One retained drawing command.
///
/// Renderers should sort marks by `(z_index, id)` for a deterministic paint
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable mark id.
    pub id: MarkId,
    /// Rendering order hint.
    pub z_index: i32,
    /// Drawable payload.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a path mark with no fill and no stroke.
    pub fn path(id: MarkId, path: BezPath) -> Self {
        Self {
            id,
            z_index: 0,
            payload: MarkPayload::Path(PathMark {
                path,
                fill: Brush::Solid(Color::TRANSPARENT),
                stroke: Brush::Solid(Color::TRANSPARENT),
                stroke_width: 0.0,
            }),
        }
    }

    /// Creates a text mark with default styling (12px, centered, black).
    pub fn text(id: MarkId, pos: Point, text: impl Into<String>) -> Self {
        Self {
            id,
            z_index: 0,
            payload: MarkPayload::Text(TextMark {
                pos,
                text: text.into(),
                font_size: 12.0,
                fill: Brush::Solid(Color::BLACK),
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Middle,
                angle: 0.0,
            }),
        }
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the fill paint (path and text payloads).
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        let fill = fill.into();
        match &mut self.payload {
            MarkPayload::Path(p) => p.fill = fill,
            MarkPayload::Text(t) => t.fill = fill,
        }
        self
    }

    /// Sets the stroke paint and width (path payloads only).
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        if let MarkPayload::Path(p) = &mut self.payload {
            p.stroke = stroke.into();
            p.stroke_width = stroke_width;
        }
        self
    }

    /// Sets the font size (text payloads only).
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.font_size = font_size;
        }
        self
    }

    /// Sets the text anchor (text payloads only).
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.anchor = anchor;
        }
        self
    }

    /// Sets the text baseline (text payloads only).
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.baseline = baseline;
        }
        self
    }

    /// Boxes the payload, as carried by [`crate::MarkDiff`].
    pub fn boxed_payload(&self) -> Box<MarkPayload> {
        Box::new(self.payload.clone())
    }
}
