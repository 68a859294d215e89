// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pure panel phase function.
//!
//! Every panel's visual state is a periodic function of the timeline
//! position alone; there is no per-panel animation state. Panel `i` is
//! offset by `i / len` of a loop, and its pass across the stage is one unit
//! of local progress: it enters from the right at `u = 0`, is centered at
//! `u = 0.5`, and has left to the left by `u = 1`.
//!
//! Because the function is pure, any renderer can evaluate it every frame
//! from a single scalar — a smoothed position from [`crate::Scrub`], a raw
//! one in tests — and always get the same strip.

use crate::ease::{ease_in_cubic, ease_in_out_cubic, ease_out_cubic};
use crate::wrap::{round, wrap};

/// Horizontal travel: enters at `+200%`, exits at `-200%` of panel width.
const X_SPAN_PERCENT: f64 = 200.0;
/// Maximum Y-axis rotation at either edge, in degrees.
const ROTATE_Y_DEG: f64 = 45.0;
/// Local progress at which the fade/grow-in completes.
const FADE_IN_END: f64 = 0.3;
/// Local progress at which the fade/shrink-out begins.
const FADE_OUT_START: f64 = 0.7;
/// Scale of a fully faded panel.
const MIN_SCALE: f64 = 0.5;
/// Stacking order ramps up across this window of local progress.
const STACK_START: f64 = 0.25;
/// End of the stacking-order ramp.
const STACK_END: f64 = 0.75;

/// Visual state of one panel at one timeline position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelTransform {
    /// Horizontal offset in percent of panel width; `0` is centered.
    pub x_percent: f64,
    /// Rotation around the vertical axis, in degrees.
    pub rotate_y_deg: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale in `[0.5, 1]`.
    pub scale: f64,
    /// Stacking order in `[1, len]`; larger values draw on top.
    pub z_index: usize,
}

/// Local progress of panel `index` at the given timeline position.
///
/// Wrapped into `[0, 1)`, with `0.5` meaning centered; the panel whose slot
/// the position is snapped to always reads `0.5` exactly.
#[must_use]
pub fn panel_progress(position: f64, index: usize, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    wrap(position - index as f64 / len as f64 + 0.5, 0.0, 1.0)
}

/// Evaluates the full transform for panel `index` of `len`.
///
/// A `len` of zero yields the hidden entry pose.
#[must_use]
pub fn panel_transform(position: f64, index: usize, len: usize) -> PanelTransform {
    let u = panel_progress(position, index, len);
    let sweep = ease_in_out_cubic(u);
    let fade = fade_level(u);

    PanelTransform {
        x_percent: X_SPAN_PERCENT - 2.0 * X_SPAN_PERCENT * sweep,
        rotate_y_deg: -ROTATE_Y_DEG + 2.0 * ROTATE_Y_DEG * sweep,
        opacity: fade,
        scale: MIN_SCALE + (1.0 - MIN_SCALE) * fade,
        z_index: stack_order(u, len),
    }
}

/// Fade/grow factor: eases in over the first window, out over the last.
fn fade_level(u: f64) -> f64 {
    if u < FADE_IN_END {
        ease_out_cubic(u / FADE_IN_END)
    } else if u > FADE_OUT_START {
        1.0 - ease_in_cubic((u - FADE_OUT_START) / (1.0 - FADE_OUT_START))
    } else {
        1.0
    }
}

/// Stacking order: `1` before the ramp, `len` after it, linear between.
fn stack_order(u: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if u <= STACK_START {
        1
    } else if u >= STACK_END {
        len
    } else {
        let ramp = (u - STACK_START) / (STACK_END - STACK_START);
        1 + round((len - 1) as f64 * ramp) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::snap_to_slot;

    const LEN: usize = 10;

    #[test]
    fn snapped_panel_is_centered() {
        for index in 0..LEN {
            let position = snap_to_slot(index as f64 / LEN as f64, LEN);
            let transform = panel_transform(position, index, LEN);
            assert_eq!(transform.x_percent, 0.0, "panel {index} x");
            assert_eq!(transform.rotate_y_deg, 0.0, "panel {index} rotation");
            assert_eq!(transform.opacity, 1.0, "panel {index} opacity");
            assert_eq!(transform.scale, 1.0, "panel {index} scale");
        }
    }

    #[test]
    fn transform_is_periodic_in_whole_loops() {
        for step in 0..40 {
            let position = step as f64 * 0.077;
            for index in [0, 3, 9] {
                let base = panel_transform(position, index, LEN);
                let ahead = panel_transform(position + 1.0, index, LEN);
                let behind = panel_transform(position - 1.0, index, LEN);
                assert!((base.x_percent - ahead.x_percent).abs() < 1e-9);
                assert!((base.x_percent - behind.x_percent).abs() < 1e-9);
                assert!((base.opacity - ahead.opacity).abs() < 1e-9);
                assert_eq!(base.z_index, ahead.z_index);
            }
        }
    }

    #[test]
    fn entry_pose_is_offscreen_right_and_hidden() {
        // Panel 5 is at u = 0 when the position sits exactly opposite it.
        let transform = panel_transform(0.0, 5, LEN);
        assert_eq!(transform.x_percent, X_SPAN_PERCENT);
        assert_eq!(transform.rotate_y_deg, -ROTATE_Y_DEG);
        assert_eq!(transform.opacity, 0.0);
        assert_eq!(transform.scale, MIN_SCALE);
        assert_eq!(transform.z_index, 1);
    }

    #[test]
    fn x_sweeps_monotonically_right_to_left() {
        let mut prev = f64::INFINITY;
        for step in 0..100 {
            let u = step as f64 / 100.0;
            // Drive panel 0 through its pass directly via position.
            let transform = panel_transform(u - 0.5, 0, LEN);
            assert!(transform.x_percent <= prev);
            prev = transform.x_percent;
        }
    }

    #[test]
    fn fade_windows_bound_full_opacity() {
        let at = |u: f64| panel_transform(u - 0.5, 0, LEN);
        assert!(at(0.15).opacity < 1.0);
        assert_eq!(at(0.3).opacity, 1.0);
        assert_eq!(at(0.5).opacity, 1.0);
        assert_eq!(at(0.7).opacity, 1.0);
        assert!(at(0.85).opacity < 1.0);
    }

    #[test]
    fn stack_order_rises_across_the_ramp() {
        let at = |u: f64| panel_transform(u - 0.5, 0, LEN).z_index;
        assert_eq!(at(0.1), 1);
        assert_eq!(at(0.25), 1);
        assert_eq!(at(0.9), LEN);
        let mut prev = 0;
        for step in 0..=20 {
            let u = STACK_START + (STACK_END - STACK_START) * step as f64 / 20.0;
            let z = at(u);
            assert!(z >= prev, "stacking fell at u = {u}");
            prev = z;
        }
    }

    #[test]
    fn empty_deck_yields_the_hidden_pose() {
        let transform = panel_transform(0.3, 0, 0);
        assert_eq!(transform.opacity, 0.0);
        assert_eq!(transform.z_index, 0);
    }
}
