//! CSS generation for the button stylesheet.
//!
//! Layout of the output:
//! - `:root` custom-property block from the palette (optional)
//! - the button ruleset (`buttons` submodule)
//! - a user `style.css` appendix (optional)

mod buttons;

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use buttonkit_core::{ButtonPalette, Config};

/// Assemble the generated stylesheet for a loaded config.
pub fn stylesheet(config: &Config, palette: &ButtonPalette) -> String {
    let mut out = String::new();
    if config.stylesheet.palette_vars {
        out.push_str(&palette.css_vars_block());
    }
    out.push_str(buttons::css());
    out
}

/// Assemble the full output: generated stylesheet plus the user `style.css`
/// appendix when enabled and present next to the loaded config file.
pub fn render(config: &Config, config_source: Option<&Path>) -> String {
    let palette = ButtonPalette::from_config(config);
    let mut out = stylesheet(config, &palette);

    if config.stylesheet.user_css {
        if let Some(user) = read_user_css(config_source) {
            out.push_str("\n/* ===== USER STYLE.CSS ===== */\n");
            out.push_str(&user);
        }
    }

    out
}

fn read_user_css(config_source: Option<&Path>) -> Option<String> {
    let dir = config_source?.parent()?;
    let path = dir.join("style.css");
    if !path.exists() {
        return None;
    }

    match fs::read_to_string(&path) {
        Ok(css) => {
            debug!("Appending user CSS from {}", path.display());
            Some(css)
        }
        Err(e) => {
            warn!("Failed to read user CSS {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles;

    fn generated() -> String {
        let config = Config::default();
        let palette = ButtonPalette::from_config(&config);
        stylesheet(&config, &palette)
    }

    #[test]
    fn test_all_public_class_names_present() {
        let css = generated();

        let class_names = [
            styles::class::BUTTON,
            styles::class::LABEL,
            styles::intent::DEFAULT,
            styles::intent::PRIMARY,
            styles::intent::DANGER,
            styles::state::BUSY,
            styles::state::DISABLED,
            styles::size::XS,
            styles::size::SM,
            styles::size::LG,
        ];

        for name in class_names {
            assert!(
                css.contains(&format!(".{}", name)),
                "stylesheet missing selector .{}",
                name
            );
        }
    }

    #[test]
    fn test_disabled_literals_are_fixed() {
        let css = generated();
        assert!(css.contains("#CED3D6"));
        assert!(css.contains("#E3E5E6"));
        assert!(css.contains("cursor: not-allowed;"));
    }

    #[test]
    fn test_disabled_rules_come_after_intent_rules() {
        // Disabled shares specificity with the intent hover rules; only
        // source order makes it win.
        let css = generated();
        let disabled = css.find(".button-disabled").unwrap();
        for intent in [".button-default:hover", ".button-primary:hover", ".button-danger:hover"] {
            assert!(css.find(intent).unwrap() < disabled, "{} after disabled", intent);
        }
    }

    #[test]
    fn test_busy_rule_touches_only_opacity() {
        let css = generated();
        let start = css.find(".button-busy {").unwrap();
        let end = start + css[start..].find('}').unwrap();
        let block = &css[start..end];

        assert!(block.contains("opacity: 0.65;"));
        assert!(!block.contains("color"));
        assert!(!block.contains("background"));
        assert!(!block.contains("border"));
    }

    #[test]
    fn test_intent_rules_reference_palette_vars() {
        let css = generated();
        assert!(css.contains("background: var(--color-purple);"));
        assert!(css.contains("border-color: var(--color-purple-border-active);"));
        assert!(css.contains("background: var(--color-red);"));
        assert!(css.contains("border-color: var(--color-trim-darkest);"));
    }

    #[test]
    fn test_vars_block_is_togglable() {
        let mut config = Config::default();
        let palette = ButtonPalette::from_config(&config);

        assert!(stylesheet(&config, &palette).contains(":root {"));

        config.stylesheet.palette_vars = false;
        let bare = stylesheet(&config, &palette);
        assert!(!bare.contains(":root {"));
        // The ruleset itself is unaffected
        assert!(bare.contains(".button {"));
    }

    #[test]
    fn test_render_without_source_skips_user_css() {
        let config = Config::default();
        let palette = ButtonPalette::from_config(&config);
        assert_eq!(render(&config, None), stylesheet(&config, &palette));
    }

    #[test]
    fn test_shell_values() {
        let css = generated();
        assert!(css.contains("display: inline-block;"));
        assert!(css.contains("font-weight: 600;"));
        assert!(css.contains("border-radius: 3px;"));
        assert!(css.contains("box-shadow: 0 2px rgba(0, 0, 0, 0.05);"));
        assert!(css.contains("box-shadow: inset 0 2px rgba(0, 0, 0, 0.05);"));
        assert!(css.contains("outline: none;"));
        assert!(css.contains("padding: 12px 16px;"));
    }
}
