//! Application shell: the weight-tracking screen.
//!
//! Stacks the three widgets vertically in a scrollable column and wires
//! their actions together: scale changes update the readout label (with a
//! pulse on every tenth value, the desktop stand-in for haptics), tile
//! activations raise a transient toast, and save-button toggles are logged.

use crate::cli::Args;
use makepad_widgets::*;
use once_cell::sync::OnceCell;
use weigh_widgets::{
    AppTheme, CloudTilesAction, CloudTilesWidgetExt, SaveButtonAction, SaveButtonWidgetExt,
    WeightScaleAction, WeightScaleWidgetExt,
};

static CLI_ARGS: OnceCell<Args> = OnceCell::new();

/// Store parsed CLI arguments before `app_main` takes over the thread.
pub fn set_cli_args(args: Args) {
    let _ = CLI_ARGS.set(args);
}

fn cli_args() -> Args {
    CLI_ARGS.get().cloned().unwrap_or_default()
}

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use weigh_widgets::theme::*;
    use weigh_widgets::weight_scale::*;
    use weigh_widgets::cloud_tiles::*;
    use weigh_widgets::save_button::*;

    App = {{App}} {
        ui: <Window> {
            window: { inner_size: vec2(420, 900) }
            pass: { clear_color: (SCREEN_BG) }

            body = <View> {
                width: Fill, height: Fill
                flow: Overlay
                show_bg: true
                draw_bg: {
                    instance dark_mode: 0.0
                    fn pixel(self) -> vec4 {
                        return mix((SCREEN_BG), (SCREEN_BG_DARK), self.dark_mode);
                    }
                }

                content = <ScrollYView> {
                    width: Fill, height: Fill
                    flow: Down
                    align: {x: 0.5}
                    padding: {top: 32, bottom: 32}
                    scroll_bars: <ScrollBars> {
                        show_scroll_x: false
                        show_scroll_y: true
                    }

                    weight_scale = <WeightScale> {
                        scale_width: 140.0
                    }

                    weight_label = <Label> {
                        margin: 16
                        text: "80 Kg"
                        draw_text: {
                            instance dark_mode: 0.0
                            instance pulse: 0.0
                            text_style: { font_size: 24.0 }
                            fn get_color(self) -> vec4 {
                                let base = mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                                return mix(base, (SCALE_INDICATOR), self.pulse);
                            }
                        }
                    }

                    save_button = <SaveButton> {
                        margin: {bottom: 16}
                    }

                    cloud_tiles = <CloudTiles> {
                        margin: {top: 8}
                    }
                }

                // Transient notification raised by tile activations.
                toast = <View> {
                    visible: false
                    width: Fill, height: Fill
                    align: {x: 0.5, y: 0.93}

                    toast_pill = <RoundedView> {
                        width: Fit, height: Fit
                        padding: {left: 18, right: 18, top: 9, bottom: 9}
                        show_bg: true
                        draw_bg: {
                            instance dark_mode: 0.0
                            border_radius: 16.0
                            fn pixel(self) -> vec4 {
                                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                                let light = vec4(0.07, 0.09, 0.13, 0.92);
                                let dark = vec4(0.95, 0.96, 0.98, 0.95);
                                sdf.fill(mix(light, dark, self.dark_mode));
                                return sdf.result;
                            }
                        }

                        toast_label = <Label> {
                            text: ""
                            draw_text: {
                                instance dark_mode: 0.0
                                text_style: { font_size: 12.0 }
                                fn get_color(self) -> vec4 {
                                    return mix((TEXT_PRIMARY_DARK), (TEXT_PRIMARY), self.dark_mode);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// How long the toast stays up, in seconds.
const TOAST_DURATION: f64 = 2.0;

/// How long the readout pulse holds before fading, in seconds.
const PULSE_DURATION: f64 = 0.2;

#[derive(Live, LiveHook)]
pub struct App {
    #[live]
    ui: WidgetRef,

    #[rust]
    theme: AppTheme,

    #[rust]
    weight: i64,

    #[rust]
    toast_timer: Timer,

    #[rust]
    pulse_timer: Timer,
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        makepad_widgets::live_design(cx);
        weigh_widgets::live_design(cx);
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        self.ui.handle_event(cx, event, &mut Scope::empty());

        if let Event::Startup = event {
            self.theme = AppTheme::with_dark_mode(cli_args().dark_mode);
            self.weight = 80;
            self.apply_dark_mode(cx);
        }

        if self.toast_timer.is_event(event).is_some() {
            self.ui.view(ids!(toast)).set_visible(cx, false);
        }

        if self.pulse_timer.is_event(event).is_some() {
            self.ui.label(ids!(weight_label)).apply_over(
                cx,
                live! {
                    draw_text: { pulse: 0.0 }
                },
            );
            self.ui.redraw(cx);
        }

        let actions = match event {
            Event::Actions(actions) => actions.as_slice(),
            _ => return,
        };

        for action in actions {
            let Some(wa) = action.as_widget_action() else {
                continue;
            };

            if let WeightScaleAction::Changed(value) = wa.cast() {
                self.on_weight_changed(cx, value);
            }

            match wa.cast() {
                CloudTilesAction::DropboxActivated => self.show_toast(cx, "dropbox activated"),
                CloudTilesAction::ICloudActivated => self.show_toast(cx, "icloud activated"),
                CloudTilesAction::None => {}
            }

            if let SaveButtonAction::Toggled(state) = wa.cast() {
                ::log::info!("save button now in {:?} state", state);
            }
        }
    }
}

impl App {
    fn on_weight_changed(&mut self, cx: &mut Cx, value: i64) {
        self.weight = value;
        self.ui
            .label(ids!(weight_label))
            .set_text(cx, &format!("{} Kg", value));

        // Ten-step policy lives here, not in the scale: pulse the readout
        // whenever the value lands on a multiple of ten.
        if value % 10 == 0 {
            ::log::debug!("ten-step crossing at {}", value);
            self.ui.label(ids!(weight_label)).apply_over(
                cx,
                live! {
                    draw_text: { pulse: 1.0 }
                },
            );
            self.pulse_timer = cx.start_timeout(PULSE_DURATION);
        }
        self.ui.redraw(cx);
    }

    fn show_toast(&mut self, cx: &mut Cx, message: &str) {
        ::log::info!("toast: {}", message);
        self.ui
            .label(ids!(toast.toast_pill.toast_label))
            .set_text(cx, message);
        self.ui.view(ids!(toast)).set_visible(cx, true);
        self.toast_timer = cx.start_timeout(TOAST_DURATION);
        self.ui.redraw(cx);
    }

    fn apply_dark_mode(&mut self, cx: &mut Cx) {
        let dark_mode = self.theme.target_value();

        self.ui.view(ids!(body)).apply_over(
            cx,
            live! {
                draw_bg: { dark_mode: (dark_mode) }
            },
        );
        self.ui.label(ids!(weight_label)).apply_over(
            cx,
            live! {
                draw_text: { dark_mode: (dark_mode) }
            },
        );
        self.ui.view(ids!(toast.toast_pill)).apply_over(
            cx,
            live! {
                draw_bg: { dark_mode: (dark_mode) }
            },
        );
        self.ui.label(ids!(toast.toast_pill.toast_label)).apply_over(
            cx,
            live! {
                draw_text: { dark_mode: (dark_mode) }
            },
        );

        self.ui
            .weight_scale(ids!(content.weight_scale))
            .apply_dark_mode(cx, dark_mode);
        self.ui
            .cloud_tiles(ids!(content.cloud_tiles))
            .apply_dark_mode(cx, dark_mode);
        self.ui
            .save_button(ids!(content.save_button))
            .apply_dark_mode(cx, dark_mode);

        self.ui.redraw(cx);
    }
}

app_main!(App);
