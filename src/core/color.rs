use serde::{Deserialize, Serialize};

/// Prefixes marking a color that is already a concrete CSS value or reference.
const RESOLVED_COLOR_PREFIXES: [&str; 6] = ["var(", "#", "rgb", "hsl", "oklch", "url("];

/// Returns `true` when `color` can be emitted verbatim.
#[must_use]
pub fn is_resolved_color(color: &str) -> bool {
    RESOLVED_COLOR_PREFIXES
        .iter()
        .any(|prefix| color.starts_with(prefix))
}

/// Resolves a caller color into a CSS value.
///
/// Theme tokens such as `chart-1` become `var(--chart-1)`; values that are
/// already resolved pass through untouched, so the rule is idempotent.
#[must_use]
pub fn resolve_color_reference(color: &str) -> String {
    if is_resolved_color(color) {
        color.to_owned()
    } else {
        format!("var(--{color})")
    }
}

/// Theme scale color, e.g. `scale_color("slate", 11)` is `var(--slate-11)`.
#[must_use]
pub fn scale_color(scale: &str, step: u8) -> String {
    format!("var(--{scale}-{step})")
}

/// Fill reference pointing at the gradient definition emitted for `series_key`.
#[must_use]
pub fn gradient_reference(series_key: &str) -> String {
    format!("url(#{series_key})")
}

/// Light/dark appearance used for mode dependent chrome colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    #[must_use]
    pub fn select<'a>(self, light: &'a str, dark: &'a str) -> &'a str {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}
