//! # Weigh Widgets
//!
//! Custom canvas widgets for the Weigh Studio weight-tracking screen:
//!
//! - [`WeightScale`] — draggable horizontal ruler reporting an integer
//!   weight, one change action per unit crossed.
//! - [`CloudTiles`] — square surface split diagonally into two irregular
//!   clickable tiles ("dropbox" / "icloud"), with polygon hit testing and a
//!   press-dip micro-animation.
//! - [`SaveButton`] — toggle between a text pill and a compact spinning
//!   refresh glyph, with spring width and cross-fade transitions.
//!
//! Supporting modules: [`geometry`] (ray-cast hit test, tile polygons),
//! [`anim`] (tween/spring parameter records), [`theme`] (static color
//! constants plus runtime light/dark state).

pub mod anim;
pub mod cloud_tiles;
pub mod geometry;
pub mod save_button;
pub mod theme;
pub mod weight_scale;

pub use anim::{Spring, SpringState, Tween, STIFFNESS_LOW};
pub use cloud_tiles::{CloudTiles, CloudTilesAction, CloudTilesRef, CloudTilesWidgetExt, TilePress};
pub use geometry::{centroid, hit_tile, point_in_polygon, tile_polygon, TileKind, TILE_SEAM_MARGIN};
pub use save_button::{
    SaveButton, SaveButtonAction, SaveButtonRef, SaveButtonState, SaveButtonWidgetExt,
};
pub use theme::{AppTheme, THEME_TRANSITION_DURATION};
pub use weight_scale::{
    DragSession, LineType, WeightScale, WeightScaleAction, WeightScaleRef, WeightScaleWidgetExt,
};

use makepad_widgets::Cx;

/// Register all weigh-widgets types with Makepad.
///
/// Call this in the app's `LiveRegister::live_register` implementation,
/// after `makepad_widgets::live_design(cx)` and before app-specific widgets.
pub fn live_design(cx: &mut Cx) {
    // Theme constants first; the widget modules import them.
    theme::live_design(cx);
    weight_scale::live_design(cx);
    cloud_tiles::live_design(cx);
    save_button::live_design(cx);
}
