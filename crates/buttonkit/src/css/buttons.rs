//! Button CSS classes.
//!
//! Rule order is load-bearing: the state overlays at the bottom share
//! specificity with the intent rules above them, so the cascade breaks the
//! tie in favor of whichever comes later. Disabled must stay last.

/// Return the button ruleset CSS.
pub fn css() -> &'static str {
    r#"
/* ===== BUTTONS ===== */

/* Shell - box model, type, and chrome shared by every button */
.button {
    display: inline-block;
    padding: 0;
    line-height: 1;
    font-size: 14px;
    font-weight: 600;
    border-radius: 3px;
    box-shadow: 0 2px rgba(0, 0, 0, 0.05);
    cursor: pointer;
}

.button .button-label {
    display: block;
    padding: 12px 16px;
}

.button:active {
    box-shadow: inset 0 2px rgba(0, 0, 0, 0.05);
}

.button:focus {
    outline: none;
}

/* Default intent - neutral chrome on white */
.button-default {
    color: var(--color-gray-90);
    background: #fff;
    border: 1px solid var(--color-trim-dark);
}

.button-default:hover,
.button-default:focus,
.button-default:active {
    color: var(--color-gray-100);
    border-color: var(--color-trim-darkest);
}

/* Primary intent */
.button-primary {
    color: #fff;
    background: var(--color-purple);
    border: 1px solid var(--color-purple-darkest);
}

.button-primary:hover,
.button-primary:focus,
.button-primary:active {
    background: var(--color-purple-dark);
    border-color: var(--color-purple-border-active);
}

/* Danger intent */
.button-danger {
    color: #fff;
    background: var(--color-red);
    border: 1px solid var(--color-red-dark);
}

.button-danger:hover,
.button-danger:focus,
.button-danger:active {
    background: var(--color-red-dark);
    border-color: var(--color-red-border-active);
}

/* Sizes - type size and label padding only */
.button-xs {
    font-size: 12px;
}

.button-xs .button-label {
    padding: 6px 10px;
}

.button-sm {
    font-size: 12px;
}

.button-sm .button-label {
    padding: 8px 12px;
}

.button-lg {
    font-size: 16px;
}

.button-lg .button-label {
    padding: 14px 20px;
}

/* Busy overlay - dims the button, touches nothing else */
.button-busy {
    opacity: 0.65;
}

/* Disabled overlay - fixed neutral chrome, frozen across interaction
   states. The hex values are kept literal, not palette-derived. */
.button-disabled,
.button-disabled:hover,
.button-disabled:focus,
.button-disabled:active {
    color: #CED3D6;
    background: #fff;
    border: 1px solid #E3E5E6;
    cursor: not-allowed;
    box-shadow: none;
    opacity: 0.65;
}
"#
}
