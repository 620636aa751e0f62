// Copyright 2026 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for chart layout.
//!
//! Chart layout in `plotline` is circular: the left padding of a plot depends
//! on the width of the widest y-axis tick label, which depends on the computed
//! scale, which is independent of padding. The layout engine resolves this
//! with a bounded multi-pass procedure, and every pass needs text metrics.
//!
//! Shaping and glyph layout stay downstream (in whatever renders the chart),
//! so chart code depends only on this tiny measurement interface.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned font family names), and
//! - renderer-agnostic (native shaping engines and web canvas measurement can
//!   both implement the same trait).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface used by chart layout.
///
/// The layout engine calls this to size paddings before any drawing happens.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine, or
/// - backed by web platform text measurement (e.g. HTML canvas).
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if
    /// they want multi-line layout.
    fn measure(&self, text: &str, style: TextStyle) -> TextMetrics;
}

/// Text styling inputs relevant to measurement.
///
/// This is intentionally minimal: just enough to make chart layout
/// consistent. Richer typography belongs in a higher-level text system.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width (useful for horizontal layout).
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// A tiny heuristic text measurer suitable for tests and early layout.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> TextMetrics {
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        TextMetrics {
            advance_width,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}
