//! Draw output of the sheet.

use crate::layout::SheetLayout;
use crate::style::SheetStyle;
use bottomsheet_graphics::{
    Appearance, Color, Path, Point, Rect, Shape, TopRoundedShape,
};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    FillRect { rect: Rect, color: Color },
    /// Fully rounded rectangle (drag indicator).
    Capsule { rect: Rect, color: Color },
    FillPath { path: Path, color: Color },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShadowPrimitive {
    pub path: Path,
    pub color: Color,
    pub blur_radius: f32,
    pub offset: Point,
}

/// Everything a renderer needs to paint one frame of the sheet.
///
/// The shadow is painted first and unclipped; `primitives` are painted in
/// order, clipped to `clip`.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetScene {
    pub layout: SheetLayout,
    pub shadow: Option<ShadowPrimitive>,
    pub clip: Path,
    pub primitives: Vec<DrawPrimitive>,
}

impl SheetScene {
    /// Sheet chrome for `layout`; content primitives are appended afterwards.
    pub fn chrome(layout: SheetLayout, style: &SheetStyle, appearance: Appearance) -> Self {
        let clip = TopRoundedShape::new(style.corner_radius).path(layout.sheet);
        let shadow = (style.shadow.color.a() > 0.0).then(|| ShadowPrimitive {
            path: clip.clone(),
            color: style.shadow.color,
            blur_radius: style.shadow.radius,
            offset: style.shadow.offset,
        });
        let primitives = vec![
            DrawPrimitive::FillPath {
                path: clip.clone(),
                color: style.background.resolve(appearance),
            },
            DrawPrimitive::FillRect {
                rect: layout.indicator_strip,
                color: style.indicator_background.resolve(appearance),
            },
            DrawPrimitive::Capsule {
                rect: layout.indicator,
                color: style.indicator_color.resolve(appearance),
            },
        ];
        Self {
            layout,
            shadow,
            clip,
            primitives,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.layout.is_visible()
    }
}
