//! Global stylesheet injected once per page for the ripple visuals.

use std::fmt::Write;

use crate::core::config::EnhanceConfig;

/// Id carried by the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "tabletop-ui-styles";

/// Name of the ripple keyframes.
pub const RIPPLE_KEYFRAMES: &str = "ripple-animation";

const RIPPLE_FILL: &str = "rgba(255, 255, 255, 0.6)";
const RIPPLE_SCALE: u8 = 4;

/// Build the stylesheet text for `config`.
///
/// Ripple hosts become a clipping, positioned context; the overlay animation runs
/// for the configured ripple lifetime.
#[must_use]
pub fn stylesheet(config: &EnhanceConfig) -> String {
    let hosts = config.selectors.ripple_buttons.trim();
    let class = &config.selectors.ripple_class;
    let seconds = f64::from(config.timings.ripple_lifetime_ms) / 1000.0;

    let mut css = String::new();
    let _ = writeln!(css, "{hosts} {{\n    position: relative;\n    overflow: hidden;\n}}");
    let _ = writeln!(
        css,
        ".{class} {{\n    position: absolute;\n    border-radius: 50%;\n    background: {RIPPLE_FILL};\n    transform: scale(0);\n    animation: {RIPPLE_KEYFRAMES} {seconds}s linear;\n    pointer-events: none;\n}}"
    );
    let _ = writeln!(
        css,
        "@keyframes {RIPPLE_KEYFRAMES} {{\n    to {{\n        transform: scale({RIPPLE_SCALE});\n        opacity: 0;\n    }}\n}}"
    );
    css
}
