//! Cloud tile surface: two diagonally split "save to cloud" tiles.
//!
//! One square surface, two irregular quadrilateral tiles (dropbox on top,
//! icloud below), each drawn by its own rounded-quad SDF shader and
//! hit-tested against the polygons from [`crate::geometry`]. A single
//! persistent gesture handler owns the press state machine: down inside a
//! tile presses it, release inside activates it, release outside cancels.
//! Pressing dips the tile to 0.96× and it springs back on release.

use crate::anim::{Spring, SpringState};
use crate::geometry::{hit_tile, TileKind};
use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::theme::*;

    // Dropbox tile: magenta quad across the top of the surface, sloped lower
    // edge, arrow glyph near the upper-right corner.
    DropboxTile = <View> {
        width: Fill, height: Fill
        flow: Overlay
        show_bg: true

        draw_bg: {
            instance dark_mode: 0.0
            instance press_scale: 1.0

            fn seg_dist(self, p: vec2, a: vec2, b: vec2) -> float {
                let e = b - a;
                let w = p - a;
                let t = clamp(dot(w, e) / dot(e, e), 0.0, 1.0);
                return length(w - e * t);
            }

            fn edge_normal(self, a: vec2, b: vec2) -> vec2 {
                let e = b - a;
                return normalize(vec2(e.y, -e.x));
            }

            fn inset_vertex(self, prev: vec2, v: vec2, next: vec2, r: float) -> vec2 {
                let n0 = self.edge_normal(prev, v);
                let n1 = self.edge_normal(v, next);
                return v - (n0 + n1) * (r / (1.0 + dot(n0, n1)));
            }

            fn side(self, p: vec2, a: vec2, b: vec2) -> float {
                let e = b - a;
                let w = p - a;
                return e.x * w.y - e.y * w.x;
            }

            fn pixel(self) -> vec4 {
                let w = self.rect_size.x;
                let h = self.rect_size.y;
                let m = 8.0;
                let r = 20.0;

                // press dip, scaled about the surface center
                let center = self.rect_size * 0.5;
                let p = center + (self.pos * self.rect_size - center) / self.press_scale;

                // clockwise quad, sloped lower edge backs off the seam
                let v0 = vec2(0.0, 0.0);
                let v1 = vec2(w, 0.0);
                let v2 = vec2(w, h * 0.5 - m);
                let v3 = vec2(0.0, h * 0.3 - m);

                // corner-inset copy; distance to it minus r rounds the corners
                let i0 = self.inset_vertex(v3, v0, v1, r);
                let i1 = self.inset_vertex(v0, v1, v2, r);
                let i2 = self.inset_vertex(v1, v2, v3, r);
                let i3 = self.inset_vertex(v2, v3, v0, r);

                let d = min(
                    min(self.seg_dist(p, i0, i1), self.seg_dist(p, i1, i2)),
                    min(self.seg_dist(p, i2, i3), self.seg_dist(p, i3, i0))
                );
                let inside = step(0.0, self.side(p, i0, i1))
                    * step(0.0, self.side(p, i1, i2))
                    * step(0.0, self.side(p, i2, i3))
                    * step(0.0, self.side(p, i3, i0));
                let sd = mix(d, -d, inside) - r;

                let fill_alpha = 1.0 - smoothstep(-0.75, 0.75, sd);
                let fill = mix((DROPBOX_FILL), (DROPBOX_FILL_DARK), self.dark_mode);

                // arrow glyph: shaft plus two head strokes
                let a1 = vec2(w * 0.75 + 16.0, 32.0);
                let a2 = vec2(w - 16.0, 32.0);
                let a3 = vec2(w - 24.0, 38.0);
                let a4 = vec2(w - 24.0, 26.0);
                let ad = min(
                    self.seg_dist(p, a1, a2),
                    min(self.seg_dist(p, a2, a3), self.seg_dist(p, a2, a4))
                );
                let arrow = 1.0 - smoothstep(1.2, 2.4, ad);

                let col = mix(fill.xyz, vec3(1.0, 1.0, 1.0), arrow);
                return vec4(col * fill_alpha, fill_alpha);
            }
        }

        // wordmark along the sloped edge, right side
        wordmark_slot = <View> {
            width: Fill, height: Fill
            align: {x: 1.0, y: 0.27}
            padding: {right: 24}
            wordmark = <Label> {
                text: "dropbox"
                draw_text: {
                    color: (WHITE)
                    text_style: { font_size: 32.0 }
                    fn get_color(self) -> vec4 {
                        return self.color;
                    }
                }
            }
        }

        capacity_slot = <View> {
            width: Fill, height: Fill
            align: {x: 0.0, y: 0.0}
            padding: {left: 16, top: 22}
            capacity = <Label> {
                text: "28 GB free"
                draw_text: {
                    color: (WHITE)
                    text_style: { font_size: 11.0 }
                    fn get_color(self) -> vec4 {
                        return self.color;
                    }
                }
            }
        }
    }

    // iCloud tile: light slab below the seam with a thin outline.
    ICloudTile = <View> {
        width: Fill, height: Fill
        flow: Overlay
        show_bg: true

        draw_bg: {
            instance dark_mode: 0.0
            instance press_scale: 1.0

            fn seg_dist(self, p: vec2, a: vec2, b: vec2) -> float {
                let e = b - a;
                let w = p - a;
                let t = clamp(dot(w, e) / dot(e, e), 0.0, 1.0);
                return length(w - e * t);
            }

            fn edge_normal(self, a: vec2, b: vec2) -> vec2 {
                let e = b - a;
                return normalize(vec2(e.y, -e.x));
            }

            fn inset_vertex(self, prev: vec2, v: vec2, next: vec2, r: float) -> vec2 {
                let n0 = self.edge_normal(prev, v);
                let n1 = self.edge_normal(v, next);
                return v - (n0 + n1) * (r / (1.0 + dot(n0, n1)));
            }

            fn side(self, p: vec2, a: vec2, b: vec2) -> float {
                let e = b - a;
                let w = p - a;
                return e.x * w.y - e.y * w.x;
            }

            fn pixel(self) -> vec4 {
                let w = self.rect_size.x;
                let h = self.rect_size.y;
                let m = 8.0;
                let r = 20.0;

                let center = self.rect_size * 0.5;
                let p = center + (self.pos * self.rect_size - center) / self.press_scale;

                // clockwise quad, sloped upper edge backs off the seam
                let v0 = vec2(0.0, h * 0.3 + m);
                let v1 = vec2(w, h * 0.5 + m);
                let v2 = vec2(w, h);
                let v3 = vec2(0.0, h);

                let i0 = self.inset_vertex(v3, v0, v1, r);
                let i1 = self.inset_vertex(v0, v1, v2, r);
                let i2 = self.inset_vertex(v1, v2, v3, r);
                let i3 = self.inset_vertex(v2, v3, v0, r);

                let d = min(
                    min(self.seg_dist(p, i0, i1), self.seg_dist(p, i1, i2)),
                    min(self.seg_dist(p, i2, i3), self.seg_dist(p, i3, i0))
                );
                let inside = step(0.0, self.side(p, i0, i1))
                    * step(0.0, self.side(p, i1, i2))
                    * step(0.0, self.side(p, i2, i3))
                    * step(0.0, self.side(p, i3, i0));
                let sd = mix(d, -d, inside) - r;

                let fill_alpha = 1.0 - smoothstep(-0.75, 0.75, sd);
                let outline = 1.0 - smoothstep(0.0, 1.5, abs(sd));

                let fill = mix((ICLOUD_FILL), (ICLOUD_FILL_DARK), self.dark_mode);
                let stroke = mix((ICLOUD_STROKE), (ICLOUD_STROKE_DARK), self.dark_mode);

                let col = mix(fill.xyz, stroke.xyz, outline);
                let alpha = max(fill_alpha, outline);
                return vec4(col * alpha, alpha);
            }
        }

        wordmark_slot = <View> {
            width: Fill, height: Fill
            align: {x: 0.0, y: 0.52}
            padding: {left: 16}
            wordmark = <Label> {
                text: "icloud"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 32.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }
        }

        capacity_slot = <View> {
            width: Fill, height: Fill
            align: {x: 1.0, y: 0.58}
            padding: {right: 12}
            capacity = <Label> {
                text: "19 GB free"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 11.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }
        }
    }

    pub CloudTiles = {{CloudTiles}} {
        width: Fill, height: 400
        flow: Overlay

        dropbox_tile = <DropboxTile> {}
        icloud_tile = <ICloudTile> {}
    }
}

/// Press state machine for the tile surface. At most one tile is pressed at
/// a time; transitions are idle → pressed → idle, never skipping a state.
#[derive(Clone, Copy, Debug, Default)]
pub struct TilePress {
    pressed: Option<TileKind>,
}

impl TilePress {
    pub fn pressed(&self) -> Option<TileKind> {
        self.pressed
    }

    /// Pointer down at `point` on a surface of `size`: hit-test in priority
    /// order (dropbox first) and press the matching tile, if any.
    pub fn finger_down(&mut self, point: DVec2, size: DVec2) -> Option<TileKind> {
        self.pressed = hit_tile(point, size);
        self.pressed
    }

    /// Pointer up. Returns the tile to activate: the pressed tile when the
    /// release landed inside the surface, `None` on cancellation. Press
    /// state always resets.
    pub fn finger_up(&mut self, inside: bool) -> Option<TileKind> {
        let pressed = self.pressed.take();
        if inside {
            pressed
        } else {
            None
        }
    }
}

/// Actions emitted by [`CloudTiles`].
#[derive(Clone, Debug, DefaultNone)]
pub enum CloudTilesAction {
    None,
    DropboxActivated,
    ICloudActivated,
}

impl CloudTilesAction {
    fn activated(kind: TileKind) -> Self {
        match kind {
            TileKind::Dropbox => CloudTilesAction::DropboxActivated,
            TileKind::ICloud => CloudTilesAction::ICloudActivated,
        }
    }
}

const PRESSED_SCALE: f64 = 0.96;
const PRESS_SPRING: Spring = Spring {
    damping_ratio: 0.9,
    stiffness: 900.0,
};

#[derive(Live, LiveHook, Widget)]
pub struct CloudTiles {
    #[deref]
    view: View,

    #[rust]
    press: TilePress,

    #[rust(SpringState { value: 1.0, velocity: 0.0 })]
    dropbox_scale: SpringState,

    #[rust(SpringState { value: 1.0, velocity: 0.0 })]
    icloud_scale: SpringState,

    #[rust]
    last_frame_time: f64,
}

impl Widget for CloudTiles {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        if let Event::NextFrame(nf) = event {
            self.step_press_springs(cx, nf.time);
        }

        match event.hits(cx, self.view.area()) {
            Hit::FingerDown(fe) => {
                let rect = self.view.area().rect(cx);
                let local = fe.abs - rect.pos;
                if let Some(kind) = self.press.finger_down(local, rect.size) {
                    ::log::debug!("tile pressed: {}", kind.label());
                    self.last_frame_time = 0.0;
                    cx.new_next_frame();
                }
            }
            Hit::FingerUp(fe) => {
                if let Some(kind) = self.press.finger_up(fe.is_over) {
                    ::log::info!("tile activated: {}", kind.label());
                    cx.widget_action(
                        self.widget_uid(),
                        &scope.path,
                        CloudTilesAction::activated(kind),
                    );
                }
                self.last_frame_time = 0.0;
                cx.new_next_frame();
            }
            _ => {}
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        let step = self.view.draw_walk(cx, scope, walk);
        // Keep the touch surface square: height tracks the measured width.
        let rect = self.view.area().rect(cx);
        if rect.size.x > 0.0 && (rect.size.y - rect.size.x).abs() > 0.5 {
            self.view.apply_over(
                cx,
                live! {
                    height: (rect.size.x)
                },
            );
            self.view.redraw(cx);
        }
        step
    }
}

impl CloudTiles {
    /// Advance both press springs towards their targets and push the scales
    /// into the tile shaders; keeps requesting frames until both settle.
    fn step_press_springs(&mut self, cx: &mut Cx, time: f64) {
        let dt = if self.last_frame_time == 0.0 {
            1.0 / 60.0
        } else {
            (time - self.last_frame_time).clamp(0.0, 0.1)
        };
        self.last_frame_time = time;

        let dropbox_target = match self.press.pressed() {
            Some(TileKind::Dropbox) => PRESSED_SCALE,
            _ => 1.0,
        };
        let icloud_target = match self.press.pressed() {
            Some(TileKind::ICloud) => PRESSED_SCALE,
            _ => 1.0,
        };

        PRESS_SPRING.step(&mut self.dropbox_scale, dropbox_target, dt);
        PRESS_SPRING.step(&mut self.icloud_scale, icloud_target, dt);

        self.view.view(ids!(dropbox_tile)).apply_over(
            cx,
            live! {
                draw_bg: { press_scale: (self.dropbox_scale.value) }
            },
        );
        self.view.view(ids!(icloud_tile)).apply_over(
            cx,
            live! {
                draw_bg: { press_scale: (self.icloud_scale.value) }
            },
        );
        self.view.redraw(cx);

        if !self.dropbox_scale.settled(dropbox_target, 0.001)
            || !self.icloud_scale.settled(icloud_target, 0.001)
        {
            cx.new_next_frame();
        }
    }

    /// Apply dark mode to both tile shaders and the icloud labels.
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.view.view(ids!(dropbox_tile)).apply_over(
            cx,
            live! {
                draw_bg: { dark_mode: (dark_mode) }
            },
        );
        self.view.view(ids!(icloud_tile)).apply_over(
            cx,
            live! {
                draw_bg: { dark_mode: (dark_mode) }
            },
        );
        self.view
            .label(ids!(icloud_tile.wordmark_slot.wordmark))
            .apply_over(
                cx,
                live! {
                    draw_text: { dark_mode: (dark_mode) }
                },
            );
        self.view
            .label(ids!(icloud_tile.capacity_slot.capacity))
            .apply_over(
                cx,
                live! {
                    draw_text: { dark_mode: (dark_mode) }
                },
            );
        self.view.redraw(cx);
    }
}

impl CloudTilesRef {
    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{centroid, tile_polygon};

    const SIZE: DVec2 = DVec2 { x: 400.0, y: 400.0 };

    #[test]
    fn test_tap_inside_dropbox_activates_it_once() {
        let mut press = TilePress::default();
        let point = centroid(&tile_polygon(TileKind::Dropbox, SIZE));

        assert_eq!(press.finger_down(point, SIZE), Some(TileKind::Dropbox));
        assert_eq!(press.pressed(), Some(TileKind::Dropbox));

        // Release inside: exactly one dropbox activation, state reset.
        assert_eq!(press.finger_up(true), Some(TileKind::Dropbox));
        assert_eq!(press.pressed(), None);

        // The next release fires nothing.
        assert_eq!(press.finger_up(true), None);
    }

    #[test]
    fn test_icloud_press_does_not_touch_dropbox() {
        let mut press = TilePress::default();
        let point = centroid(&tile_polygon(TileKind::ICloud, SIZE));

        assert_eq!(press.finger_down(point, SIZE), Some(TileKind::ICloud));
        assert_eq!(press.finger_up(true), Some(TileKind::ICloud));
    }

    #[test]
    fn test_cancel_fires_nothing_and_resets() {
        let mut press = TilePress::default();
        let point = centroid(&tile_polygon(TileKind::Dropbox, SIZE));

        press.finger_down(point, SIZE);
        assert_eq!(press.finger_up(false), None);
        assert_eq!(press.pressed(), None);
    }

    #[test]
    fn test_down_in_seam_band_presses_nothing() {
        let mut press = TilePress::default();
        // the diagonal at mid-width sits at y = 160 on a 400-unit surface
        assert_eq!(press.finger_down(dvec2(200.0, 160.0), SIZE), None);
        assert_eq!(press.finger_up(true), None);
    }

    #[test]
    fn test_new_gesture_works_after_release() {
        let mut press = TilePress::default();
        let point = centroid(&tile_polygon(TileKind::ICloud, SIZE));

        press.finger_down(point, SIZE);
        press.finger_up(false);

        // Handler stays live; the next gesture starts from idle.
        assert_eq!(press.finger_down(point, SIZE), Some(TileKind::ICloud));
        assert_eq!(press.finger_up(true), Some(TileKind::ICloud));
    }
}
