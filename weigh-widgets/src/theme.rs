//! Theme for the Weigh Studio screen.
//!
//! Two layers, mirroring how the widgets consume them:
//!
//! 1. **Static constants** in the `live_design!` block below, imported by the
//!    widget modules via `use crate::theme::*;` inside their own
//!    `live_design!` blocks.
//! 2. **Runtime state** ([`AppTheme`]) owned by the shell: current dark mode
//!    plus an eased transition value that widgets receive through their
//!    `dark_mode` shader instances.

use makepad_widgets::*;

live_design! {
    // Screen
    pub SCREEN_BG = vec4(0.925, 0.941, 0.953, 1.0)
    pub SCREEN_BG_DARK = vec4(0.067, 0.090, 0.133, 1.0)

    // Readout / generic text
    pub TEXT_PRIMARY = vec4(0.067, 0.090, 0.133, 1.0)
    pub TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)

    // Cloud tiles. The dropbox tile keeps the original's plain magenta fill;
    // the icloud tile is the light-gray slab with a thin dark outline.
    pub DROPBOX_FILL = vec4(1.0, 0.0, 1.0, 1.0)
    pub DROPBOX_FILL_DARK = vec4(0.72, 0.0, 0.72, 1.0)
    pub ICLOUD_FILL = vec4(0.8, 0.8, 0.8, 1.0)
    pub ICLOUD_FILL_DARK = vec4(0.32, 0.36, 0.42, 1.0)
    pub ICLOUD_STROKE = vec4(0.0, 0.0, 0.0, 1.0)
    pub ICLOUD_STROKE_DARK = vec4(0.85, 0.88, 0.92, 1.0)

    // Save button tones (Material-template purples of the original theme).
    // Idle = accent at 10%, active = the pale lavender.
    pub BUTTON_ACCENT = vec4(0.4, 0.314, 0.643, 1.0)
    pub BUTTON_ACCENT_DARK = vec4(0.816, 0.737, 1.0, 1.0)
    pub BUTTON_IDLE_BG = vec4(0.4, 0.314, 0.643, 0.1)
    pub BUTTON_ACTIVE_BG = vec4(0.816, 0.737, 1.0, 1.0)
    pub BUTTON_ACTIVE_BG_DARK = vec4(0.4, 0.314, 0.643, 1.0)

    // Scale ticks and indicator
    pub TICK_NORMAL = vec4(0.580, 0.639, 0.722, 1.0)
    pub TICK_FIVE = vec4(0.392, 0.455, 0.545, 1.0)
    pub TICK_TEN = vec4(0.067, 0.090, 0.133, 1.0)
    pub TICK_TEN_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    pub SCALE_INDICATOR = vec4(0.133, 0.773, 0.369, 1.0)
}

/// Duration of the light/dark transition in seconds.
pub const THEME_TRANSITION_DURATION: f64 = 0.25;

/// Runtime theme state owned by the shell.
///
/// `dark_mode_anim` is the value widgets actually consume (0.0 = light,
/// 1.0 = dark); it trails `dark_mode` through [`AppTheme::update_animation`]
/// so shader mixes transition smoothly instead of snapping.
#[derive(Clone, Debug, Default)]
pub struct AppTheme {
    pub dark_mode: bool,
    pub dark_mode_anim: f64,
}

impl AppTheme {
    pub fn with_dark_mode(dark: bool) -> Self {
        Self {
            dark_mode: dark,
            dark_mode_anim: if dark { 1.0 } else { 0.0 },
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// Flip the mode. The transition still has to be driven through
    /// `update_animation`.
    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Advance the transition; returns `true` while still in progress.
    pub fn update_animation(&mut self, elapsed: f64, duration: f64) -> bool {
        let target = self.target_value();
        if elapsed >= duration {
            self.dark_mode_anim = target;
            false
        } else {
            // Ease-out cubic
            let t = (elapsed / duration).min(1.0);
            let ease_t = 1.0 - (1.0 - t).powi(3);
            let start = 1.0 - target;
            self.dark_mode_anim = start + (target - start) * ease_t;
            true
        }
    }

    /// Where `dark_mode_anim` lands once the transition completes.
    pub fn target_value(&self) -> f64 {
        if self.dark_mode {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        let theme = AppTheme::default();
        assert!(!theme.is_dark());
        assert_eq!(theme.dark_mode_anim, 0.0);
    }

    #[test]
    fn test_with_dark_mode() {
        let theme = AppTheme::with_dark_mode(true);
        assert!(theme.is_dark());
        assert_eq!(theme.dark_mode_anim, 1.0);
    }

    #[test]
    fn test_toggle() {
        let mut theme = AppTheme::default();
        theme.toggle();
        assert!(theme.is_dark());
        theme.toggle();
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_transition_progress() {
        let mut theme = AppTheme::default();
        theme.toggle();

        let in_progress = theme.update_animation(0.125, THEME_TRANSITION_DURATION);
        assert!(in_progress);
        assert!(theme.dark_mode_anim > 0.0);
        assert!(theme.dark_mode_anim < 1.0);

        let in_progress = theme.update_animation(0.25, THEME_TRANSITION_DURATION);
        assert!(!in_progress);
        assert_eq!(theme.dark_mode_anim, 1.0);
    }
}
