//! Typed button style model and resolution.
//!
//! The stylesheet the CLI emits lets the CSS cascade do the resolving; this
//! module is the same ruleset as a pure function, for consumers that need
//! concrete values (snapshot tests, inline-style renderers, the `resolve`
//! subcommand). Overlays are applied in explicit cascade order, state last,
//! so both paths agree on every combination.

use serde::Serialize;

use crate::palette::ButtonPalette;

const SHELL_FONT_SIZE: u32 = 14;
const SHELL_FONT_WEIGHT: u32 = 600;
const SHELL_BORDER_RADIUS: u32 = 3;
const SHELL_SHADOW: &str = "0 2px rgba(0, 0, 0, 0.05)";
const SHELL_SHADOW_ACTIVE: &str = "inset 0 2px rgba(0, 0, 0, 0.05)";
const BORDER_WIDTH: u32 = 1;
const LABEL_PADDING: Padding = Padding { vertical: 12, horizontal: 16 };

// Busy and disabled happen to share the same dimming level.
const OVERLAY_OPACITY: f64 = 0.65;

const WHITE: &str = "#fff";

// Disabled chrome is fixed literals, independent of the palette (kept in
// sync with the legacy disabled treatment rather than re-derived).
const DISABLED_TEXT: &str = "#CED3D6";
const DISABLED_BORDER: &str = "#E3E5E6";

/// Semantic purpose of a button. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intent {
    #[default]
    Default,
    Primary,
    Danger,
}

/// Size modifier. `Default` means no size class; at most one other applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    #[default]
    Default,
    Xs,
    Sm,
    Lg,
}

/// Pointer interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Hover,
    Focus,
    Active,
}

/// Full button state: interaction plus the orthogonal busy/disabled overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub interaction: Interaction,
    pub busy: bool,
    pub disabled: bool,
}

impl ButtonState {
    pub fn with_interaction(interaction: Interaction) -> Self {
        Self {
            interaction,
            ..Self::default()
        }
    }
}

/// Mouse cursor shown over the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    Pointer,
    NotAllowed,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Pointer => "pointer",
            Cursor::NotAllowed => "not-allowed",
        }
    }
}

/// Inner label padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Padding {
    pub vertical: u32,
    pub horizontal: u32,
}

impl Padding {
    pub fn css(self) -> String {
        format!("{}px {}px", self.vertical, self.horizontal)
    }
}

/// Solid border: width in pixels plus color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Border {
    pub width: u32,
    pub color: String,
}

impl Border {
    pub fn css(&self) -> String {
        format!("{}px solid {}", self.width, self.color)
    }
}

/// Resolved visual properties for one (intent, size, state) combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRecord {
    pub color: String,
    pub background: String,
    pub border: Border,
    /// None means the shadow is suppressed (`box-shadow: none`).
    pub box_shadow: Option<String>,
    pub cursor: Cursor,
    pub opacity: f64,
    pub font_size: u32,
    pub font_weight: u32,
    pub border_radius: u32,
    pub label_padding: Padding,
}

/// Resolve the visual properties for a button.
///
/// Layering mirrors the stylesheet cascade: shell, intent rest values,
/// interaction overrides, size overrides, then the busy and disabled
/// overlays last. Disabled wins over everything, which is what makes
/// hover/focus/active no-ops on a disabled button.
pub fn resolve_button_style(
    palette: &ButtonPalette,
    intent: Intent,
    size: Size,
    state: ButtonState,
) -> StyleRecord {
    let mut record = base_record(palette, intent);

    if state.interaction != Interaction::Idle {
        apply_interaction(&mut record, palette, intent);
    }
    if state.interaction == Interaction::Active {
        record.box_shadow = Some(SHELL_SHADOW_ACTIVE.to_string());
    }

    apply_size(&mut record, size);

    if state.busy {
        record.opacity = OVERLAY_OPACITY;
    }
    if state.disabled {
        apply_disabled(&mut record);
    }

    record
}

/// Shell defaults plus the intent's rest colors.
fn base_record(palette: &ButtonPalette, intent: Intent) -> StyleRecord {
    let (color, background, border_color) = match intent {
        Intent::Default => (
            palette.gray_90.clone(),
            WHITE.to_string(),
            palette.trim_dark.clone(),
        ),
        Intent::Primary => (
            WHITE.to_string(),
            palette.purple.clone(),
            palette.purple_darkest.clone(),
        ),
        Intent::Danger => (
            WHITE.to_string(),
            palette.red.clone(),
            palette.red_dark.clone(),
        ),
    };

    StyleRecord {
        color,
        background,
        border: Border {
            width: BORDER_WIDTH,
            color: border_color,
        },
        box_shadow: Some(SHELL_SHADOW.to_string()),
        cursor: Cursor::Pointer,
        opacity: 1.0,
        font_size: SHELL_FONT_SIZE,
        font_weight: SHELL_FONT_WEIGHT,
        border_radius: SHELL_BORDER_RADIUS,
        label_padding: LABEL_PADDING,
    }
}

/// Hover, focus, and active share one override set per intent.
fn apply_interaction(record: &mut StyleRecord, palette: &ButtonPalette, intent: Intent) {
    match intent {
        Intent::Default => {
            record.color = palette.gray_100.clone();
            record.border.color = palette.trim_darkest.clone();
        }
        Intent::Primary => {
            record.background = palette.purple_dark.clone();
            record.border.color = palette.purple_border_active.clone();
        }
        Intent::Danger => {
            record.background = palette.red_dark.clone();
            record.border.color = palette.red_border_active.clone();
        }
    }
}

/// Sizes touch only typography and label padding.
fn apply_size(record: &mut StyleRecord, size: Size) {
    let (font_size, label_padding) = match size {
        Size::Default => return,
        Size::Xs => (12, Padding { vertical: 6, horizontal: 10 }),
        Size::Sm => (12, Padding { vertical: 8, horizontal: 12 }),
        Size::Lg => (16, Padding { vertical: 14, horizontal: 20 }),
    };

    record.font_size = font_size;
    record.label_padding = label_padding;
}

/// Disabled freezes the record to the fixed neutral chrome.
fn apply_disabled(record: &mut StyleRecord) {
    record.color = DISABLED_TEXT.to_string();
    record.background = WHITE.to_string();
    record.border.color = DISABLED_BORDER.to_string();
    record.cursor = Cursor::NotAllowed;
    record.box_shadow = None;
    record.opacity = OVERLAY_OPACITY;
}
