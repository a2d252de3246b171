//! Jump label overlay
//!
//! Lays out one box per labelled target at the target's anchor and paints the
//! boxes into an ARGB framebuffer. Glyph drawing is left to the host; the
//! layout reports which part of each label has already been typed.

use serde::{Deserialize, Serialize};

use crate::editor::LayoutMetrics;
use crate::jump::{JumpIndex, Label, LABEL_LEN};

/// Horizontal padding around label text in pixels
pub const LABEL_PADDING: usize = 2;

/// Overlay colors in ARGB format (alpha in high byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayColors {
    /// Background of labels that do not match the typed prefix
    pub label_background: u32,
    /// Background of labels that match the typed prefix
    pub highlight_background: u32,
    /// Fill behind the already typed characters of a matching label
    pub typed_background: u32,
    /// 1px border around every label
    pub border: u32,
}

impl Default for OverlayColors {
    fn default() -> Self {
        Self {
            label_background: 0xC8FFFF64, // 78% alpha yellow
            highlight_background: 0xDCFFA500, // 86% alpha orange
            typed_background: 0xFFFF0000,
            border: 0xFF404040,
        }
    }
}

/// Computed overlay bounds (screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayBounds {
    /// X position in pixels
    pub x: usize,
    /// Y position in pixels
    pub y: usize,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl OverlayBounds {
    /// Get the right edge X coordinate
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// Get the bottom edge Y coordinate
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }
}

/// One label ready to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelBox {
    pub label: Label,
    /// Document offset of the target
    pub offset: usize,
    pub bounds: OverlayBounds,
    /// Label starts with the typed prefix (and the prefix is non-empty)
    pub highlighted: bool,
    /// Characters of the label already typed; zero unless highlighted
    pub typed_len: usize,
    /// Area behind the typed characters, if any
    pub typed_bounds: Option<OverlayBounds>,
}

impl LabelBox {
    /// Typed portion of the label
    pub fn typed(&self) -> &str {
        &self.label.as_str()[..self.typed_len]
    }

    /// Portion of the label still to type
    pub fn remaining(&self) -> &str {
        &self.label.as_str()[self.typed_len..]
    }
}

/// Lay out every anchored label in `index`, highlighting those matching `prefix`
pub fn layout_labels(index: &JumpIndex, prefix: &str, metrics: &LayoutMetrics) -> Vec<LabelBox> {
    let text_width = |chars: usize| (chars as f32 * metrics.char_width).round() as usize;

    index
        .iter()
        .filter_map(|(label, position)| {
            let anchor = position.anchor?;
            let bounds = OverlayBounds {
                x: (anchor.x.max(0) as usize).saturating_sub(LABEL_PADDING),
                y: anchor.y.max(0) as usize,
                width: text_width(LABEL_LEN) + LABEL_PADDING * 2,
                height: metrics.line_height,
            };

            let highlighted = !prefix.is_empty() && label.starts_with(prefix);
            let typed_len = if highlighted { prefix.len() } else { 0 };
            let typed_bounds = (typed_len > 0).then(|| OverlayBounds {
                x: bounds.x + 1,
                y: bounds.y + 1,
                width: text_width(typed_len) + 2,
                height: bounds.height.saturating_sub(2),
            });

            Some(LabelBox {
                label: *label,
                offset: position.offset,
                bounds,
                highlighted,
                typed_len,
                typed_bounds,
            })
        })
        .collect()
}

/// Blend a source pixel (with alpha) onto a destination pixel
///
/// Both colors are in ARGB format. The source alpha determines
/// the blend ratio.
#[inline]
pub fn blend_pixel(src: u32, dst: u32) -> u32 {
    let alpha = (src >> 24) & 0xFF;
    if alpha == 0 {
        return dst;
    }
    if alpha == 255 {
        return src | 0xFF000000;
    }

    let inv_alpha = 255 - alpha;

    let r = ((((src >> 16) & 0xFF) * alpha + ((dst >> 16) & 0xFF) * inv_alpha) / 255) & 0xFF;
    let g = ((((src >> 8) & 0xFF) * alpha + ((dst >> 8) & 0xFF) * inv_alpha) / 255) & 0xFF;
    let b = (((src & 0xFF) * alpha + (dst & 0xFF) * inv_alpha) / 255) & 0xFF;

    0xFF000000 | (r << 16) | (g << 8) | b
}

/// Fill `bounds` with `color`, alpha blended, clipped to the buffer
pub fn fill_rect(
    buffer: &mut [u32],
    bounds: &OverlayBounds,
    color: u32,
    buffer_width: usize,
    buffer_height: usize,
) {
    let y_end = bounds.bottom().min(buffer_height);
    let x_end = bounds.right().min(buffer_width);

    for py in bounds.y..y_end {
        for px in bounds.x..x_end {
            let idx = py * buffer_width + px;
            if let Some(pixel) = buffer.get_mut(idx) {
                *pixel = blend_pixel(color, *pixel);
            }
        }
    }
}

/// Draw a 1px opaque border around `bounds`, clipped to the buffer
pub fn stroke_rect(
    buffer: &mut [u32],
    bounds: &OverlayBounds,
    color: u32,
    buffer_width: usize,
    buffer_height: usize,
) {
    let y_end = bounds.bottom().min(buffer_height);
    let x_end = bounds.right().min(buffer_width);
    if bounds.x >= x_end || bounds.y >= y_end {
        return;
    }

    let opaque = color | 0xFF000000;
    let mut put = |px: usize, py: usize| {
        if let Some(pixel) = buffer.get_mut(py * buffer_width + px) {
            *pixel = opaque;
        }
    };

    for px in bounds.x..x_end {
        put(px, bounds.y);
        put(px, y_end - 1);
    }
    for py in bounds.y..y_end {
        put(bounds.x, py);
        put(x_end - 1, py);
    }
}

/// Paint label backgrounds, typed-prefix fills and borders
pub fn render_labels(
    buffer: &mut [u32],
    boxes: &[LabelBox],
    colors: &OverlayColors,
    buffer_width: usize,
    buffer_height: usize,
) {
    for label_box in boxes {
        let background = if label_box.highlighted {
            colors.highlight_background
        } else {
            colors.label_background
        };
        fill_rect(
            buffer,
            &label_box.bounds,
            background,
            buffer_width,
            buffer_height,
        );

        if let Some(typed) = &label_box.typed_bounds {
            fill_rect(
                buffer,
                typed,
                colors.typed_background,
                buffer_width,
                buffer_height,
            );
        }

        stroke_rect(
            buffer,
            &label_box.bounds,
            colors.border,
            buffer_width,
            buffer_height,
        );
    }
}
