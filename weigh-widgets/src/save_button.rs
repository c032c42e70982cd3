//! Save/refresh toggle button.
//!
//! Two representations: a text label ("Refresh") on a wide pill, and a
//! spinning refresh glyph on a compact one. Tapping flips the state; the
//! pill width springs between the measured label width and the compact
//! width, the background tone and the content cross-fade over half a
//! second, and while the icon is showing it rotates on a 1.5 s linear loop.
//! All motion is stepped from `NextFrame`; frames are only requested while
//! something is actually moving or the icon is visible.

use crate::anim::{Spring, SpringState, Tween, STIFFNESS_LOW};
use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::theme::*;

    pub SaveButton = {{SaveButton}} {
        width: 200, height: 40
        flow: Overlay

        bg_slot = <View> {
            width: Fill, height: Fill
            align: {x: 0.5, y: 0.5}

            bg = <View> {
                width: 140, height: 40
                show_bg: true
                draw_bg: {
                    instance dark_mode: 0.0
                    // 0 = text-state tone, 1 = icon-state tone
                    instance checked: 0.0

                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 20.0);
                        let active = mix(
                            (BUTTON_ACTIVE_BG),
                            (BUTTON_ACTIVE_BG_DARK),
                            self.dark_mode
                        );
                        sdf.fill(mix((BUTTON_IDLE_BG), active, self.checked));
                        return sdf.result;
                    }
                }
            }
        }

        label_slot = <View> {
            width: Fill, height: Fill
            align: {x: 0.5, y: 0.5}

            label = <Label> {
                text: "Refresh"
                draw_text: {
                    instance dark_mode: 0.0
                    instance vis: 1.0
                    text_style: { font_size: 14.0 }
                    fn get_color(self) -> vec4 {
                        let col = mix((BUTTON_ACCENT), (BUTTON_ACCENT_DARK), self.dark_mode);
                        return vec4(col.xyz, col.w * self.vis);
                    }
                }
            }
        }

        icon_slot = <View> {
            width: Fill, height: Fill
            align: {x: 0.5, y: 0.5}

            icon = <View> {
                width: 40, height: 40
                show_bg: true
                draw_bg: {
                    instance dark_mode: 0.0
                    instance vis: 0.0
                    instance angle: 0.0

                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        let c = self.rect_size * 0.5;
                        sdf.rotate(self.angle, c.x, c.y);

                        // arc: ring with a gap at the upper right
                        let r = min(c.x, c.y) * 0.55 * max(self.vis, 0.001);
                        sdf.circle(c.x, c.y, r + 1.2);
                        sdf.circle(c.x, c.y, r - 1.2);
                        sdf.subtract();
                        sdf.box(c.x + r * 0.15, c.y - r - 3.0, r + 3.0, r * 0.85, 1.0);
                        sdf.subtract();

                        let col = mix((BUTTON_ACCENT), (BUTTON_ACCENT_DARK), self.dark_mode);
                        sdf.fill(col);

                        // arrowhead at the open end of the arc
                        sdf.move_to(c.x + r * 1.35, c.y - r * 0.35);
                        sdf.line_to(c.x + r * 0.70, c.y - r * 0.55);
                        sdf.line_to(c.x + r * 1.00, c.y - r * 1.10);
                        sdf.close_path();
                        sdf.fill(col);

                        return sdf.result * self.vis;
                    }
                }
            }
        }
    }
}

/// The two representations of the toggle button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveButtonState {
    #[default]
    Text,
    Icon,
}

impl SaveButtonState {
    pub fn opposite(&self) -> Self {
        match self {
            SaveButtonState::Text => SaveButtonState::Icon,
            SaveButtonState::Icon => SaveButtonState::Text,
        }
    }
}

/// Pill width the spring heads for in a given state. Falls back to the
/// as-designed width until the label has been measured.
pub fn width_target(state: SaveButtonState, measured_text: Option<f64>, compact: f64) -> f64 {
    match state {
        SaveButtonState::Text => measured_text.unwrap_or(140.0),
        SaveButtonState::Icon => compact,
    }
}

/// Actions emitted by [`SaveButton`].
#[derive(Clone, Debug, DefaultNone)]
pub enum SaveButtonAction {
    None,
    Toggled(SaveButtonState),
}

/// Horizontal padding added around the measured label width.
const LABEL_PADDING: f64 = 24.0;

const WIDTH_SPRING: Spring = Spring {
    damping_ratio: 0.8,
    stiffness: STIFFNESS_LOW,
};

/// Background tone and content cross-fade.
const FADE: Tween = Tween { duration: 0.5 };

/// One full icon revolution.
const SPIN: Tween = Tween { duration: 1.5 };

#[derive(Live, LiveHook, Widget)]
pub struct SaveButton {
    #[deref]
    view: View,

    #[live(50.0)]
    compact_width: f64,

    #[rust]
    state: SaveButtonState,

    /// Width of the label as laid out, cached once; stable for a fixed
    /// label string and text style.
    #[rust]
    text_width: Option<f64>,

    #[rust(SpringState { value: 140.0, velocity: 0.0 })]
    width_anim: SpringState,

    /// 0 = fully text, 1 = fully icon; eased towards the current state.
    #[rust]
    checked: f64,

    #[rust]
    fade_from: f64,

    #[rust]
    fade_start: f64,

    #[rust]
    spin_start: f64,

    #[rust]
    last_frame_time: f64,
}

impl Widget for SaveButton {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        if let Event::NextFrame(nf) = event {
            self.step_animations(cx, nf.time);
        }

        let bg = self.view.view(ids!(bg_slot.bg));
        match event.hits(cx, bg.area()) {
            Hit::FingerUp(fe) if fe.was_tap() => {
                self.toggle(cx);
                cx.widget_action(
                    self.widget_uid(),
                    &scope.path,
                    SaveButtonAction::Toggled(self.state),
                );
            }
            _ => {}
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        let step = self.view.draw_walk(cx, scope, walk);
        if self.text_width.is_none() {
            let label_rect = self.view.label(ids!(label_slot.label)).area().rect(cx);
            if label_rect.size.x > 0.0 {
                self.text_width = Some(label_rect.size.x + LABEL_PADDING);
                self.width_anim = SpringState::at(self.width_target());
                self.view.view(ids!(bg_slot.bg)).apply_over(
                    cx,
                    live! {
                        width: (self.width_anim.value)
                    },
                );
            }
        }
        step
    }
}

impl SaveButton {
    pub fn state(&self) -> SaveButtonState {
        self.state
    }

    fn width_target(&self) -> f64 {
        width_target(self.state, self.text_width, self.compact_width)
    }

    fn toggle(&mut self, cx: &mut Cx) {
        self.state = self.state.opposite();
        ::log::debug!("save button toggled to {:?}", self.state);

        let now = Cx::time_now();
        self.fade_from = self.checked;
        self.fade_start = now;
        if self.state == SaveButtonState::Icon {
            self.spin_start = now;
        }
        self.last_frame_time = 0.0;
        cx.new_next_frame();
    }

    /// Step the width spring, the cross-fade and the icon spin, push the
    /// results into the shaders, and keep the frame loop alive while needed.
    fn step_animations(&mut self, cx: &mut Cx, time: f64) {
        let dt = if self.last_frame_time == 0.0 {
            1.0 / 60.0
        } else {
            (time - self.last_frame_time).clamp(0.0, 0.1)
        };
        self.last_frame_time = time;

        let width_target = self.width_target();
        WIDTH_SPRING.step(&mut self.width_anim, width_target, dt);

        let fade_target = match self.state {
            SaveButtonState::Text => 0.0,
            SaveButtonState::Icon => 1.0,
        };
        let t = FADE.progress(time - self.fade_start);
        self.checked = self.fade_from + (fade_target - self.fade_from) * t;

        // Rotation only applies in the icon state; in the text state the
        // glyph is hidden and the loop is simply not driven.
        let angle = if self.state == SaveButtonState::Icon {
            SPIN.loop_progress(time - self.spin_start) * std::f64::consts::TAU
        } else {
            0.0
        };

        self.view.view(ids!(bg_slot.bg)).apply_over(
            cx,
            live! {
                width: (self.width_anim.value),
                draw_bg: { checked: (self.checked) }
            },
        );
        self.view.label(ids!(label_slot.label)).apply_over(
            cx,
            live! {
                draw_text: { vis: (1.0 - self.checked) }
            },
        );
        self.view.view(ids!(icon_slot.icon)).apply_over(
            cx,
            live! {
                draw_bg: { vis: (self.checked), angle: (angle) }
            },
        );
        self.view.redraw(cx);

        let fading = t < 1.0;
        let spinning = self.state == SaveButtonState::Icon;
        if fading || spinning || !self.width_anim.settled(width_target, 0.1) {
            cx.new_next_frame();
        }
    }
}

impl SaveButtonRef {
    pub fn state(&self) -> SaveButtonState {
        self.borrow().map(|inner| inner.state()).unwrap_or_default()
    }

    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.view.view(ids!(bg_slot.bg)).apply_over(
                cx,
                live! {
                    draw_bg: { dark_mode: (dark_mode) }
                },
            );
            inner.view.label(ids!(label_slot.label)).apply_over(
                cx,
                live! {
                    draw_text: { dark_mode: (dark_mode) }
                },
            );
            inner.view.view(ids!(icon_slot.icon)).apply_over(
                cx,
                live! {
                    draw_bg: { dark_mode: (dark_mode) }
                },
            );
            inner.view.redraw(cx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_returns_to_text() {
        let state = SaveButtonState::default();
        assert_eq!(state, SaveButtonState::Text);
        assert_eq!(state.opposite(), SaveButtonState::Icon);
        assert_eq!(state.opposite().opposite(), SaveButtonState::Text);
    }

    #[test]
    fn test_width_target_per_state() {
        let measured = Some(96.0);
        assert_eq!(width_target(SaveButtonState::Text, measured, 50.0), 96.0);
        assert_eq!(width_target(SaveButtonState::Icon, measured, 50.0), 50.0);
    }

    #[test]
    fn test_width_target_is_stable_for_a_measured_label() {
        // The measured width is cached once; repeated queries in the text
        // state keep returning the same target.
        let measured = Some(96.0);
        let first = width_target(SaveButtonState::Text, measured, 50.0);
        let second = width_target(SaveButtonState::Text, measured, 50.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unmeasured_label_uses_design_width() {
        assert_eq!(width_target(SaveButtonState::Text, None, 50.0), 140.0);
    }
}
