//! Terminal rendering for palettes and analysis reports.
//!
//! Everything here builds a `String`; `main` decides where it goes.
//! Swatches use 24-bit SGR color escapes, which every terminal this
//! tool targets supports (the palettes themselves are truecolor).

use std::fmt::Write as _;

use okcolor::{GeneratedPalette, PaletteAnalysis, Srgb, Thresholds};

/// Pass/fail marks are scored against the enhanced tier, not the
/// generation floor: a palette can be valid (WCAG >= 4.5) while the
/// output still nudges the user toward WCAG >= 7 / |Lc| >= 50.
const DISPLAY_BAR: Thresholds = Thresholds::ENHANCED;

const SEPARATOR: &str = "─────────────────────────────────────────────────────────────────";

const SAMPLE_TEXT: &str = "Lorem ipsum dolor sit amet consectetur adipiscing elit. Quisque \
    faucibus ex sapien vitae pellentesque sem placerat. In id cursus mi pretium tellus duis \
    convallis. Tempus leo eu aenean sed diam urna tempor. Pulvinar vivamus fringilla lacus nec \
    metus bibendum egestas. Iaculis massa nisl malesuada lacinia integer nunc posuere. Ut \
    hendrerit semper vel class aptent taciti sociosqu. Ad litora torquent per conubia nostra \
    inceptos himenaeos.";

const HINT: &str = "Change lightness and/or saturation for better contrast.";

fn mark(pass: bool) -> &'static str {
    if pass {
        "✅"
    } else {
        "❌"
    }
}

/// Render one color as a bold truecolor swatch on the palette
/// background, labeled with its hex code.
pub fn swatch(color: Srgb, background: Srgb) -> String {
    let [br, bg, bb] = background.to_bytes();
    let [r, g, b] = color.to_bytes();
    format!(
        "\x1b[1m\x1b[48;2;{br};{bg};{bb}m\x1b[38;2;{r};{g};{b}m{}\x1b[0m",
        color.to_hex()
    )
}

/// Render a generated palette: one line per color with its scores,
/// optionally followed by the sample paragraph, and a hint when any
/// color misses the display bar.
pub fn render_generated(palette: &GeneratedPalette, show_sample: bool) -> String {
    let mut out = String::new();

    let mut below_bar = false;
    for color in &palette.colors {
        let wcag_ok = color.wcag >= DISPLAY_BAR.min_wcag;
        let apca_ok = color.apca.abs() >= DISPLAY_BAR.min_apca;
        below_bar |= !wcag_ok || !apca_ok;

        let _ = writeln!(
            out,
            "{} | WCAG: {:.2} {} | APCA: {:.0} {}",
            swatch(color.color, palette.background),
            color.wcag,
            mark(wcag_ok),
            color.apca,
            mark(apca_ok),
        );
    }

    if show_sample {
        let colors: Vec<Srgb> = palette.colors.iter().map(|c| c.color).collect();
        out.push_str(&sample_text(&colors));
    }

    if below_bar {
        let _ = writeln!(out, "\n{HINT}");
    }

    out
}

/// Render an analysis: header, per-color lines with Okhsl coordinates,
/// and the aggregate summary.
pub fn render_analysis(title: &str, analysis: &PaletteAnalysis) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{title} Analysis:");
    let _ = writeln!(out, "Background: {}", analysis.background.to_hex());
    let _ = writeln!(out, "{SEPARATOR}");

    for report in &analysis.colors {
        let _ = writeln!(
            out,
            "{} | WCAG: {:5.2} {} | APCA: {:4.0} {} | H:{:6.1}° S:{:4.1}% L:{:4.1}%",
            swatch(report.color, analysis.background),
            report.wcag,
            mark(report.wcag >= DISPLAY_BAR.min_wcag),
            report.apca,
            mark(report.apca.abs() >= DISPLAY_BAR.min_apca),
            report.okhsl.h,
            report.okhsl.s * 100.0,
            report.okhsl.l * 100.0,
        );
    }

    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(
        out,
        "WCAG: min {:.2}  median {:.2}  max {:.2}  ({} below minimum)",
        analysis.wcag.min, analysis.wcag.median, analysis.wcag.max, analysis.wcag_failures,
    );
    let _ = writeln!(
        out,
        "APCA: min {:.0}  median {:.0}  max {:.0}  ({} below minimum)",
        analysis.apca.min, analysis.apca.median, analysis.apca.max, analysis.apca_failures,
    );
    let _ = writeln!(
        out,
        "Hue gap variance: {:.1}  Saturation variance: {:.4}  Lightness variance: {:.4}",
        analysis.hue_gap_variance, analysis.saturation_variance, analysis.lightness_variance,
    );

    out
}

/// Render the sample paragraph twice, words cycling through the
/// palette: once bold, once at normal weight.
pub fn sample_text(colors: &[Srgb]) -> String {
    let mut out = String::new();
    let words: Vec<&str> = SAMPLE_TEXT.split_whitespace().collect();

    let _ = writeln!(out, "\nBold:");
    for (i, word) in words.iter().enumerate() {
        let [r, g, b] = colors[i % colors.len()].to_bytes();
        let _ = write!(out, "\x1b[1m\x1b[38;2;{r};{g};{b}m{word}\x1b[0m ");
    }

    let _ = writeln!(out, "\n\nNormal:");
    for (i, word) in words.iter().enumerate() {
        let [r, g, b] = colors[i % colors.len()].to_bytes();
        let _ = write!(out, "\x1b[38;2;{r};{g};{b}m{word}\x1b[0m ");
    }
    out.push('\n');

    out
}
