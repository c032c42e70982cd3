//! Horizontal weight scale widget.
//!
//! A draggable ruler under a fixed center indicator. Ticks are drawn
//! procedurally in the pixel shader from a scroll offset expressed in weight
//! units; tick prominence follows the [`LineType`] classification (every
//! fifth and tenth value gets a longer mark). Dragging emits
//! [`WeightScaleAction::Changed`] once per integer crossed, in drag order.

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::theme::*;

    pub WeightScale = {{WeightScale}} {
        width: Fill, height: 200
        show_bg: true

        draw_bg: {
            instance dark_mode: 0.0
            // scroll position of the value under the indicator, in units
            instance offset: 80.0
            instance spacing: 20.0
            instance track_height: 140.0
            instance len_normal: 49.0
            instance len_five: 77.0
            instance len_ten: 112.0

            fn pixel(self) -> vec4 {
                let p = self.pos * self.rect_size;
                let center_x = self.rect_size.x * 0.5;
                let track_top = (self.rect_size.y - self.track_height) * 0.5;

                // Position in tick-index space; n is the nearest tick.
                let u = (p.x - center_x) / self.spacing + self.offset;
                let n = floor(u + 0.5);
                let dist_px = abs(u - n) * self.spacing;

                // Tick class: ten beats five beats normal.
                let is_ten = 1.0 - min(mod(n, 10.0), 1.0);
                let is_five = (1.0 - min(mod(n, 5.0), 1.0)) * (1.0 - is_ten);
                let is_normal = (1.0 - is_ten) * (1.0 - is_five);

                let len = is_normal * self.len_normal
                    + is_five * self.len_five
                    + is_ten * self.len_ten;
                let half_w = 1.0 + is_ten * 0.5;

                let tick = step(dist_px, half_w)
                    * step(track_top, p.y)
                    * step(p.y, track_top + len);

                let ten_col = mix((TICK_TEN), (TICK_TEN_DARK), self.dark_mode);
                let tick_col = is_normal * (TICK_NORMAL)
                    + is_five * (TICK_FIVE)
                    + is_ten * ten_col;

                // Fixed center indicator spans the whole track.
                let ind = step(abs(p.x - center_x), 1.5)
                    * step(track_top, p.y)
                    * step(p.y, track_top + self.track_height);

                let col = mix(tick_col, (SCALE_INDICATOR), ind);
                let alpha = max(tick, ind);
                return vec4(col.xyz * alpha, alpha);
            }
        }
    }
}

/// Tick prominence class for one integer value on the ruler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineType {
    Normal,
    FiveStep,
    TenStep,
}

impl LineType {
    /// Classify a scale value: multiples of ten beat multiples of five.
    pub fn for_value(value: i64) -> Self {
        if value % 10 == 0 {
            LineType::TenStep
        } else if value % 5 == 0 {
            LineType::FiveStep
        } else {
            LineType::Normal
        }
    }

    /// Tick length as a fraction of the track height.
    pub fn length_frac(&self) -> f64 {
        match self {
            LineType::Normal => 0.35,
            LineType::FiveStep => 0.55,
            LineType::TenStep => 0.8,
        }
    }
}

/// One in-progress horizontal drag. Values move against the drag direction:
/// pulling the ruler right slides smaller values under the indicator.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    start_x: f64,
    start_offset: f64,
}

impl DragSession {
    pub fn begin(start_x: f64, start_offset: f64) -> Self {
        Self {
            start_x,
            start_offset,
        }
    }

    /// Unclamped fractional scroll position for the finger at `x`.
    pub fn offset_at(&self, x: f64, px_per_unit: f64) -> f64 {
        self.start_offset - (x - self.start_x) / px_per_unit
    }
}

/// Nearest legal integer weight for a scroll position.
pub fn snap_weight(offset: f64, min: i64, max: i64) -> i64 {
    (offset.round() as i64).clamp(min, max)
}

/// Every integer crossed moving from `from` (exclusive) to `to` (inclusive),
/// in drag order. Empty when the value did not change.
pub fn unit_steps(from: i64, to: i64) -> impl Iterator<Item = i64> {
    let step = if to >= from { 1 } else { -1 };
    let count = (to - from).abs();
    (1..=count).map(move |i| from + step * i)
}

/// Actions emitted by [`WeightScale`].
#[derive(Clone, Debug, DefaultNone)]
pub enum WeightScaleAction {
    None,
    /// The selected weight crossed onto a new integer value.
    Changed(i64),
}

#[derive(Live, Widget)]
pub struct WeightScale {
    #[deref]
    view: View,

    /// Pixels of ruler per weight unit.
    #[live(20.0)]
    spacing: f64,

    /// Height of the visible track inside the widget.
    #[live(140.0)]
    scale_width: f64,

    #[live(20)]
    min_weight: i64,

    #[live(250)]
    max_weight: i64,

    #[live(80)]
    initial_weight: i64,

    #[rust]
    weight: i64,

    /// Fractional scroll position while a drag is live.
    #[rust]
    offset: f64,

    #[rust]
    drag: Option<DragSession>,
}

impl LiveHook for WeightScale {
    fn after_new_from_doc(&mut self, cx: &mut Cx) {
        self.weight = self.initial_weight.clamp(self.min_weight, self.max_weight);
        self.offset = self.weight as f64;
        self.view.apply_over(
            cx,
            live! {
                draw_bg: {
                    offset: (self.offset),
                    track_height: (self.scale_width),
                    spacing: (self.spacing),
                    len_normal: (LineType::Normal.length_frac() * self.scale_width),
                    len_five: (LineType::FiveStep.length_frac() * self.scale_width),
                    len_ten: (LineType::TenStep.length_frac() * self.scale_width),
                }
            },
        );
    }
}

impl Widget for WeightScale {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        match event.hits(cx, self.view.area()) {
            Hit::FingerDown(fe) => {
                self.drag = Some(DragSession::begin(fe.abs.x, self.offset));
            }
            Hit::FingerMove(fe) => {
                if let Some(drag) = self.drag {
                    let raw = drag.offset_at(fe.abs.x, self.spacing);
                    self.offset = raw.clamp(self.min_weight as f64, self.max_weight as f64);
                    let target = snap_weight(self.offset, self.min_weight, self.max_weight);
                    for value in unit_steps(self.weight, target) {
                        cx.widget_action(
                            self.widget_uid(),
                            &scope.path,
                            WeightScaleAction::Changed(value),
                        );
                    }
                    self.weight = target;
                    self.apply_scroll(cx);
                }
            }
            Hit::FingerUp(_) => {
                if self.drag.take().is_some() {
                    // Settle the ruler on the selected integer.
                    self.offset = self.weight as f64;
                    self.apply_scroll(cx);
                }
            }
            _ => {}
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl WeightScale {
    fn apply_scroll(&mut self, cx: &mut Cx) {
        self.view.apply_over(
            cx,
            live! {
                draw_bg: { offset: (self.offset) }
            },
        );
        self.view.redraw(cx);
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Apply dark mode to the ruler shader.
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.view.apply_over(
            cx,
            live! {
                draw_bg: { dark_mode: (dark_mode) }
            },
        );
        self.view.redraw(cx);
    }
}

impl WeightScaleRef {
    pub fn weight(&self) -> i64 {
        self.borrow().map(|inner| inner.weight()).unwrap_or(0)
    }

    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_type_classification() {
        assert_eq!(LineType::for_value(80), LineType::TenStep);
        assert_eq!(LineType::for_value(75), LineType::FiveStep);
        assert_eq!(LineType::for_value(77), LineType::Normal);
        assert_eq!(LineType::for_value(100), LineType::TenStep);
    }

    #[test]
    fn test_ten_step_is_the_longest_mark() {
        assert!(LineType::TenStep.length_frac() > LineType::FiveStep.length_frac());
        assert!(LineType::FiveStep.length_frac() > LineType::Normal.length_frac());
    }

    #[test]
    fn test_drag_moves_against_finger() {
        let drag = DragSession::begin(100.0, 80.0);
        // 40 px right at 20 px/unit: two units down.
        assert_eq!(drag.offset_at(140.0, 20.0), 78.0);
        assert_eq!(drag.offset_at(60.0, 20.0), 82.0);
    }

    #[test]
    fn test_snap_clamps_to_range() {
        assert_eq!(snap_weight(80.4, 20, 250), 80);
        assert_eq!(snap_weight(80.6, 20, 250), 81);
        assert_eq!(snap_weight(10.0, 20, 250), 20);
        assert_eq!(snap_weight(900.0, 20, 250), 250);
    }

    #[test]
    fn test_unit_steps_cover_every_value_once() {
        let up: Vec<i64> = unit_steps(78, 81).collect();
        assert_eq!(up, vec![79, 80, 81]);
        let down: Vec<i64> = unit_steps(81, 78).collect();
        assert_eq!(down, vec![80, 79, 78]);
        assert_eq!(unit_steps(80, 80).count(), 0);
    }

    #[test]
    fn test_continuous_drag_emits_monotonic_changes() {
        // Simulate a single-direction drag sampled at uneven finger positions
        // and collect what the widget would emit.
        let drag = DragSession::begin(0.0, 80.0);
        let mut weight = 80i64;
        let mut emitted = Vec::new();
        for x in [5.0, 18.0, 44.0, 90.0, 131.0, 180.0] {
            let offset = drag.offset_at(x, 20.0).clamp(20.0, 250.0);
            let target = snap_weight(offset, 20, 250);
            emitted.extend(unit_steps(weight, target));
            weight = target;
        }
        // 180 px at 20 px/unit is nine units down from 80.
        assert_eq!(weight, 71);
        assert_eq!(emitted.len(), 9);
        // one notification per unit, strictly descending
        for pair in emitted.windows(2) {
            assert_eq!(pair[1], pair[0] - 1);
        }
        assert_eq!(*emitted.first().unwrap(), 79);
        assert_eq!(*emitted.last().unwrap(), 71);
    }

    #[test]
    fn test_drag_clamps_at_range_ends() {
        let drag = DragSession::begin(0.0, 22.0);
        let offset = drag.offset_at(400.0, 20.0).clamp(20.0, 250.0);
        assert_eq!(snap_weight(offset, 20, 250), 20);
    }
}
