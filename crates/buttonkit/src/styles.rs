//! Shared CSS class constants for buttonkit.
//!
//! This module centralizes the public class names the stylesheet emits,
//! making them discoverable, avoiding typos, and keeping the generated CSS
//! and the `resolve` output in agreement. These names are the naming
//! contract consumers rely on; renaming one is a breaking change.

use buttonkit_core::{ButtonState, Intent, Size};

/// Core structural classes.
pub mod class {
    /// Button shell (`.button`).
    pub const BUTTON: &str = "button";

    /// Inner label (`.button-label`).
    /// Carries the inner padding; the shell itself has none.
    pub const LABEL: &str = "button-label";
}

/// Color intent classes. Exactly one is applied alongside `.button`.
pub mod intent {
    /// Neutral chrome on white (`.button-default`).
    pub const DEFAULT: &str = "button-default";

    /// Brand-colored call to action (`.button-primary`).
    pub const PRIMARY: &str = "button-primary";

    /// Destructive action (`.button-danger`).
    pub const DANGER: &str = "button-danger";
}

/// Size modifier classes. At most one is applied.
pub mod size {
    /// Extra small (`.button-xs`).
    pub const XS: &str = "button-xs";

    /// Small (`.button-sm`).
    pub const SM: &str = "button-sm";

    /// Large (`.button-lg`).
    pub const LG: &str = "button-lg";
}

/// State overlay classes. Orthogonal to intent and size.
pub mod state {
    /// Busy overlay (`.button-busy`).
    pub const BUSY: &str = "button-busy";

    /// Disabled overlay (`.button-disabled`).
    pub const DISABLED: &str = "button-disabled";
}

/// Build the markup class list for one button combination.
///
/// Interaction states (hover/focus/active) are pseudo-classes, not markup
/// classes, so they never appear here.
pub fn class_list(intent: Intent, size: Size, state: ButtonState) -> Vec<&'static str> {
    let mut classes = vec![class::BUTTON];

    classes.push(match intent {
        Intent::Default => intent::DEFAULT,
        Intent::Primary => intent::PRIMARY,
        Intent::Danger => intent::DANGER,
    });

    match size {
        Size::Default => {}
        Size::Xs => classes.push(size::XS),
        Size::Sm => classes.push(size::SM),
        Size::Lg => classes.push(size::LG),
    }

    if state.busy {
        classes.push(state::BUSY);
    }
    if state.disabled {
        classes.push(state::DISABLED);
    }

    classes
}
