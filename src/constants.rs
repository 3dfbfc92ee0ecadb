//! Game-wide constants.
//!
//! Centralizes magic numbers and layout fractions so the input, layout and
//! sequencing code reads in terms of names instead of literals.

// ============================================================================
// Hit Testing
// ============================================================================

/// Horizontal half-extent of an actor's aim window in pixels
pub const AIM_OFFSET_X: f32 = 175.0;

/// Vertical half-extent of an actor's aim window in pixels
pub const AIM_OFFSET_Y: f32 = 250.0;

/// Minimum number of recorded points needed to animate along a path
pub const MIN_PATH_POINTS: usize = 2;

// ============================================================================
// Animation & Timing
// ============================================================================

/// Inactivity watchdog timeout in milliseconds
pub const INACTIVITY_TIMEOUT_MS: u64 = 20_000;

/// Duration of the path-follow tween in seconds
pub const MOTION_DURATION: f32 = 2.0;

/// Curviness passed to the path-follow tween
pub const MOTION_CURVINESS: f32 = 5.0;

/// Fade of decorations and strokes after the motion tween
pub const DECORATION_FADE_DURATION: f32 = 0.5;

/// Fade of the scene when a path was too short to animate
pub const FAIL_FADE_DURATION: f32 = 1.0;

/// Duration of each half of the fail-sign pulse
pub const PULSE_DURATION: f32 = 0.5;

/// Delay before the fail sign pulses back out
pub const PULSE_OUT_DELAY: f32 = 1.0;

/// Offset (relative to the timeline end) of the wind-down cue
pub const WIND_DOWN_OFFSET: f32 = -1.0;

/// Length of the spacer that ends in the revert cue
pub const REVERT_SPACER_DURATION: f32 = 2.5;

/// Offset (relative to the timeline end) of the revert spacer
pub const REVERT_SPACER_OFFSET: f32 = -2.0;

/// Fade-in of the scene after revert
pub const RESTORE_FADE_DURATION: f32 = 2.0;

/// Tutorial hand glide duration
pub const HAND_GLIDE_DURATION: f32 = 2.0;

// ============================================================================
// Scales
// ============================================================================

/// Initial scale of the fail sign, exit button and logo
pub const SMALL_SCALE: f32 = 0.5;

/// Peak scale of the fail-sign pulse
pub const PULSE_SCALE: f32 = 1.0;

/// Final scale of the exit button and logo after revert
pub const OUTRO_SCALE: f32 = 1.25;

// ============================================================================
// Strokes
// ============================================================================

/// Stroke width of drawn paths
pub const STROKE_WIDTH: f32 = 15.0;

/// Red actor stroke color
pub const RED_STROKE_COLOR: u32 = 0xd1191f;

/// Yellow actor stroke color
pub const YELLOW_STROKE_COLOR: u32 = 0xffc841;

/// Overlay fill color and opacity
pub const OVERLAY_COLOR: u32 = 0x000000;
pub const OVERLAY_OPACITY: f32 = 0.5;

// ============================================================================
// Layout (fractions of the screen)
// ============================================================================

/// X positions of the five marking lines
pub const MARKING_LINE_X: [f32; 5] = [0.05, 0.275, 0.5, 0.725, 0.95];

/// Height of the marking lines
pub const MARKING_LINE_HEIGHT: f32 = 0.275;

pub const GREEN_CAR_X: f32 = 0.1625;
pub const BLUE_CAR_X: f32 = 0.8375;
pub const RED_CAR_X: f32 = 0.275;
pub const YELLOW_CAR_X: f32 = 0.725;
pub const RED_PARKING_X: f32 = 0.6125;
pub const YELLOW_PARKING_X: f32 = 0.3875;

pub const TOP_ROW_Y: f32 = 0.2;
pub const BOTTOM_ROW_Y: f32 = 0.8;

pub const HAND_START: (f32, f32) = (0.325, 0.825);
pub const HAND_TARGET: (f32, f32) = (0.675, 0.235);
pub const BUTTON_POS: (f32, f32) = (0.5, 0.85);
pub const LOGO_POS: (f32, f32) = (0.5, 0.35);
pub const FAIL_SIGN_POS: (f32, f32) = (0.5, 0.5);

// ============================================================================
// Exit
// ============================================================================

/// Destination of the exit button once a round has finished
pub const EXIT_URL: &str = "https://roasup.com";

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "lanedraw";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";
