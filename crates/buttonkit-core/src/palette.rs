//! Button palette: the single source of truth for resolved color tokens.
//!
//! `ButtonPalette` takes the raw `[palette]` config, carries the named tokens
//! through unchanged, and computes the derived values once. The generated
//! stylesheet references these through CSS custom properties.

use crate::color::darken;
use crate::config::Config;

/// How far the active border colors sit below their `*_darkest` sources,
/// as a fraction of HSL lightness.
const ACTIVE_BORDER_DARKEN: f64 = 0.05;

/// Resolved palette tokens plus derived values.
///
/// Constructed via `ButtonPalette::from_config(&config)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonPalette {
    // Text grays
    pub gray_90: String,
    pub gray_100: String,

    // Border grays
    pub trim_dark: String,
    pub trim_darkest: String,

    // Brand family
    pub purple: String,
    pub purple_dark: String,
    pub purple_darkest: String,

    // Danger family
    pub red: String,
    pub red_dark: String,
    pub red_darkest: String,

    // Derived: border colors for hovered/focused/active intent buttons
    pub purple_border_active: String,
    pub red_border_active: String,
}

impl ButtonPalette {
    /// Create a ButtonPalette from configuration.
    ///
    /// Expects a validated config; a token that still fails to parse keeps
    /// its underived value instead of failing resolution.
    pub fn from_config(config: &Config) -> Self {
        let p = &config.palette;

        let purple_border_active = darken(&p.purple_darkest, ACTIVE_BORDER_DARKEN)
            .unwrap_or_else(|| p.purple_darkest.clone());
        let red_border_active = darken(&p.red_darkest, ACTIVE_BORDER_DARKEN)
            .unwrap_or_else(|| p.red_darkest.clone());

        Self {
            gray_90: p.gray_90.clone(),
            gray_100: p.gray_100.clone(),
            trim_dark: p.trim_dark.clone(),
            trim_darkest: p.trim_darkest.clone(),
            purple: p.purple.clone(),
            purple_dark: p.purple_dark.clone(),
            purple_darkest: p.purple_darkest.clone(),
            red: p.red.clone(),
            red_dark: p.red_dark.clone(),
            red_darkest: p.red_darkest.clone(),
            purple_border_active,
            red_border_active,
        }
    }

    /// Generate the `:root` CSS custom-property block.
    ///
    /// One `--color-*` property per token, plus the two derived active
    /// border colors. The button ruleset references these via `var()`.
    pub fn css_vars_block(&self) -> String {
        format!(
            r#"
:root {{
    /* ===== Text Grays ===== */
    --color-gray-90: {gray_90};
    --color-gray-100: {gray_100};

    /* ===== Border Grays ===== */
    --color-trim-dark: {trim_dark};
    --color-trim-darkest: {trim_darkest};

    /* ===== Brand Family ===== */
    --color-purple: {purple};
    --color-purple-dark: {purple_dark};
    --color-purple-darkest: {purple_darkest};

    /* ===== Danger Family ===== */
    --color-red: {red};
    --color-red-dark: {red_dark};
    --color-red-darkest: {red_darkest};

    /* ===== Derived ===== */
    --color-purple-border-active: {purple_border_active};
    --color-red-border-active: {red_border_active};
}}
"#,
            gray_90 = self.gray_90,
            gray_100 = self.gray_100,
            trim_dark = self.trim_dark,
            trim_darkest = self.trim_darkest,
            purple = self.purple,
            purple_dark = self.purple_dark,
            purple_darkest = self.purple_darkest,
            red = self.red,
            red_dark = self.red_dark,
            red_darkest = self.red_darkest,
            purple_border_active = self.purple_border_active,
            red_border_active = self.red_border_active,
        )
    }
}

impl Default for ButtonPalette {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_carry_through_from_config() {
        let mut config = Config::default();
        config.palette.purple = "#101010".to_string();

        let palette = ButtonPalette::from_config(&config);
        assert_eq!(palette.purple, "#101010");
    }

    #[test]
    fn test_derived_borders_use_darken() {
        let config = Config::default();
        let palette = ButtonPalette::from_config(&config);

        assert_eq!(
            palette.purple_border_active,
            darken(&config.palette.purple_darkest, 0.05).unwrap()
        );
        assert_eq!(
            palette.red_border_active,
            darken(&config.palette.red_darkest, 0.05).unwrap()
        );
    }

    #[test]
    fn test_derived_border_falls_back_on_bad_token() {
        let mut config = Config::default();
        config.palette.red_darkest = "oops".to_string();

        let palette = ButtonPalette::from_config(&config);
        assert_eq!(palette.red_border_active, "oops");
    }

    #[test]
    fn test_css_vars_block_contains_every_token() {
        let palette = ButtonPalette::default();
        let css = palette.css_vars_block();

        assert!(css.contains(":root {"));
        assert!(css.contains("--color-gray-90:"));
        assert!(css.contains("--color-gray-100:"));
        assert!(css.contains("--color-trim-dark:"));
        assert!(css.contains("--color-trim-darkest:"));
        assert!(css.contains("--color-purple:"));
        assert!(css.contains("--color-purple-dark:"));
        assert!(css.contains("--color-purple-darkest:"));
        assert!(css.contains("--color-red:"));
        assert!(css.contains("--color-red-dark:"));
        assert!(css.contains("--color-red-darkest:"));
        assert!(css.contains("--color-purple-border-active:"));
        assert!(css.contains("--color-red-border-active:"));
    }

    #[test]
    fn test_css_vars_block_emits_configured_values() {
        let mut config = Config::default();
        config.palette.red = "#ff0001".to_string();

        let palette = ButtonPalette::from_config(&config);
        assert!(palette.css_vars_block().contains("--color-red: #ff0001;"));
    }
}
