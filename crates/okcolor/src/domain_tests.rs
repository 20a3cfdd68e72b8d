//! Domain-critical regression tests for okcolor.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

use std::collections::HashSet;

use crate::analyze::analyze;
use crate::api::PaletteGenerator;
use crate::color::{in_gamut, max_chroma, ChromaCache, Okhsl, Oklab, Oklch, SearchOptions, Srgb};
use crate::contrast::{apca_lc, wcag_ratio};
use crate::generate::{generate_palette, GenerateOptions, Thresholds};
use crate::palette::Palette;

// ========================================================================
// GAP 1: Gamma correctness -- WCAG luminance needs the piecewise decode
// ========================================================================

/// If this breaks, it means: WCAG relative luminance is no longer using
/// the piecewise IEC 61966-2-1 decode. #767676 is the canonical
/// just-passes-AA grey at ~4.54:1 against white; a plain 2.2 power curve
/// already pushes it below the 4.5 floor. The dark probe exercises the
/// linear segment below the 0.04045 knee, which a pure power curve
/// distorts badly.
#[test]
fn test_wcag_uses_piecewise_srgb_decode() {
    let white = Srgb::from_u8(255, 255, 255);
    let black = Srgb::from_u8(0, 0, 0);

    let aa_grey = wcag_ratio(Srgb::from_u8(0x76, 0x76, 0x76), white);
    assert!(
        aa_grey > 4.5 && aa_grey < 4.6,
        "REGRESSION: #767676 on white scored {:.4}, expected ~4.54. \
         Below 4.5 means the transfer function drifted toward a plain \
         power curve.",
        aa_grey
    );

    // 10/255 is below the knee, so only the linear segment applies:
    // Y = (10/255) / 12.92, giving (Y + 0.05) / 0.05 = 1.0607.
    let near_black = wcag_ratio(Srgb::from_u8(10, 10, 10), black);
    assert!(
        (near_black - 1.0607).abs() < 0.005,
        "REGRESSION: #0A0A0A on black scored {:.4}, expected ~1.0607. \
         The linear segment of the decode was likely dropped.",
        near_black
    );

    let full = wcag_ratio(black, white);
    assert!(
        (full - 21.0).abs() < 1e-9,
        "REGRESSION: black on white scored {:.12}, expected 21.0.",
        full
    );
}

// ========================================================================
// GAP 2: APCA stays on the pinned revision with asymmetric polarities
// ========================================================================

/// If this breaks, it means: the APCA constants drifted from the pinned
/// 0.0.98G-4g revision, or the two polarity branches were merged into a
/// symmetric formula. The reference vectors and the asymmetry between
/// them are fixed by that revision.
#[test]
fn test_apca_pinned_reference_vectors() {
    let white = Srgb::from_u8(255, 255, 255);
    let black = Srgb::from_u8(0, 0, 0);

    let bow = apca_lc(black, white);
    assert!(
        (bow - 106.04).abs() < 0.5,
        "REGRESSION: black-on-white Lc is {:.2}, the pinned revision gives ~106.04.",
        bow
    );

    let wob = apca_lc(white, black);
    assert!(
        (wob + 107.88).abs() < 0.5,
        "REGRESSION: white-on-black Lc is {:.2}, the pinned revision gives ~-107.88.",
        wob
    );

    assert!(
        (bow.abs() - wob.abs()).abs() > 1.0,
        "REGRESSION: |Lc| is mirror-symmetric across polarities ({:.2} vs {:.2}). \
         APCA uses different exponents per polarity; equal magnitudes mean \
         they were merged.",
        bow.abs(),
        wob.abs()
    );
}

/// If this breaks, it means: the polarity convention flipped. Reports,
/// threshold checks, and the CLI all read the sign as reading direction
/// (positive = dark text on light background).
#[test]
fn test_apca_polarity_tracks_reading_direction() {
    let paper = Srgb::from_u8(0xEE, 0xEE, 0xEE);
    let ink = Srgb::from_u8(0x22, 0x22, 0x22);

    assert!(
        apca_lc(ink, paper) > 0.0,
        "REGRESSION: dark-on-light must score positive"
    );
    assert!(
        apca_lc(paper, ink) < 0.0,
        "REGRESSION: light-on-dark must score negative"
    );

    // WCAG is symmetric by construction; APCA must not be.
    assert_eq!(
        wcag_ratio(ink, paper).to_bits(),
        wcag_ratio(paper, ink).to_bits()
    );
    assert!((apca_lc(ink, paper) + apca_lc(paper, ink)).abs() > 1.0);
}

// ========================================================================
// GAP 3: Okhsl saturation is relative to the sRGB gamut surface
// ========================================================================

/// If this breaks, it means: the gamut boundary search, the Oklab
/// matrices, or the toe function drifted. The sRGB primaries sit exactly
/// on the gamut surface, so their Okhsl saturation must be ~1; greys
/// carry no chroma, so theirs must be ~0; and encoding back to bytes
/// must land within one 8-bit step of the input.
#[test]
fn test_okhsl_saturation_is_gamut_relative() {
    let mut cache = ChromaCache::new();
    let close = |a: u8, b: u8| (i16::from(a) - i16::from(b)).unsigned_abs() <= 1;

    for (r, g, b) in [(255, 0, 0), (0, 255, 0), (0, 0, 255)] {
        let color = Srgb::from_u8(r, g, b);
        let okhsl = Okhsl::from_srgb(color, &mut cache);
        assert!(
            okhsl.s > 0.999,
            "REGRESSION: primary {} has saturation {:.6}, expected ~1.0. \
             The boundary search no longer reaches the gamut surface.",
            color.to_hex(),
            okhsl.s
        );

        let [br, bg, bb] = okhsl.to_srgb(&mut cache).to_bytes();
        assert!(
            close(br, r) && close(bg, g) && close(bb, b),
            "REGRESSION: {} round-tripped to #{:02X}{:02X}{:02X}; drift \
             exceeds one 8-bit step.",
            color.to_hex(),
            br,
            bg,
            bb
        );
    }

    let grey = Okhsl::from_srgb(Srgb::from_u8(128, 128, 128), &mut cache);
    assert!(
        grey.s < 1e-6,
        "REGRESSION: mid grey reports saturation {:.2e}; the grey axis \
         must stay achromatic.",
        grey.s
    );
}

// ========================================================================
// GAP 4: Hue spacing survives the generate -> hex -> analyze round trip
// ========================================================================

/// If this breaks, it means: hue spacing is damaged somewhere between
/// generation and analysis -- the generator stopped distributing hues
/// evenly, hex encoding quantizes too coarsely, or the analyzer's
/// circular gap math is wrong. A generated palette re-parsed from its
/// own hex output must still look evenly spaced.
#[test]
fn test_hue_spacing_survives_hex_round_trip() {
    let generated = PaletteGenerator::new(Srgb::from_u8(0, 0, 0))
        .count(6)
        .saturation(70.0)
        .lightness(60.0)
        .generate()
        .unwrap();
    assert!(!generated.contrast_unmet);

    let hexes = generated.hex_colors();
    let hex_refs: Vec<&str> = hexes.iter().map(String::as_str).collect();
    let palette = Palette::from_hex("#000000", &hex_refs).unwrap();
    let analysis = analyze(&palette, &Thresholds::MINIMUM);

    assert_eq!(analysis.colors.len(), 6);
    assert_eq!(
        analysis.wcag_failures, 0,
        "REGRESSION: a freshly validated palette fails its own analysis"
    );
    assert!(
        analysis.hue_gap_variance < 50.0,
        "REGRESSION: re-analyzed hue gap variance is {:.1}; evenly \
         generated hues should stay near zero (quantization wobble only).",
        analysis.hue_gap_variance
    );
}

// ========================================================================
// GAP 5: Hostile-but-valid parameters degrade gracefully
// ========================================================================

/// If this breaks, it means: generation drops colors or panics under
/// hostile parameters instead of degrading. The contract is count-in,
/// count-out: shortfalls are flags on the result, never missing entries
/// or errors.
#[test]
fn test_hostile_parameters_degrade_gracefully() {
    // Unreachable policy on mid grey: both lightness extremes top out
    // below WCAG 6, so nothing can pass.
    let unreachable = Thresholds {
        min_wcag: 15.0,
        min_apca: 95.0,
        max_perturbation: 16.0,
    };
    let flagged = generate_palette(
        Srgb::from_u8(128, 128, 128),
        &GenerateOptions::new().count(5).thresholds(unreachable),
    )
    .unwrap();
    assert_eq!(flagged.colors.len(), 5, "REGRESSION: colors were dropped");
    assert!(flagged.contrast_unmet);
    assert!(flagged.colors.iter().all(|c| !c.meets_thresholds));

    // Zero saturation collapses every hue to the same grey; duplicate
    // resolution must split the slots into distinct hex values.
    let greys = generate_palette(
        Srgb::from_u8(255, 255, 255),
        &GenerateOptions::new().count(6).saturation(0.0).lightness(30.0),
    )
    .unwrap();
    let distinct: HashSet<String> = greys.hex_colors().into_iter().collect();
    assert_eq!(
        distinct.len(),
        6,
        "REGRESSION: duplicate hex in {:?}",
        greys.hex_colors()
    );

    // Requested lightness 0 is black on black; adjustment must lift
    // every slot to the policy instead of keeping invisible colors.
    let lifted = generate_palette(
        Srgb::from_u8(0, 0, 0),
        &GenerateOptions::new().count(6).lightness(0.0),
    )
    .unwrap();
    for color in &lifted.colors {
        assert!(
            color.meets_thresholds && color.adjusted,
            "REGRESSION: {} stayed at the invisible extreme (wcag {:.2})",
            color.color.to_hex(),
            color.wcag
        );
        assert!(color.okhsl.l > 0.3);
    }

    // Wild hue offsets wrap instead of erroring.
    let wrapped = generate_palette(
        Srgb::from_u8(0, 0, 0),
        &GenerateOptions::new()
            .count(1)
            .saturation(70.0)
            .lightness(60.0)
            .hue_offset(-720.5),
    )
    .unwrap();
    assert!((wrapped.colors[0].okhsl.h - 359.5).abs() < 1e-9);
}

// ========================================================================
// GAP 6: Search caps hold and the facade matches the core entry point
// ========================================================================

/// If this breaks, it means: the chroma bisection no longer honors its
/// step cap -- a cut-short search must return a crude but displayable
/// chroma, never an out-of-gamut value or an error.
#[test]
fn test_search_cap_still_returns_displayable_chroma() {
    let cut_short = SearchOptions {
        tolerance: 0.0,
        max_steps: 3,
    };
    for hue in [0.0, 90.0, 180.0, 270.0] {
        let c = max_chroma(hue, 0.6, &cut_short);
        assert!(
            (0.0..=0.4).contains(&c),
            "REGRESSION: capped search returned {} at hue {}",
            c,
            hue
        );
        assert!(
            in_gamut(Oklab::from(Oklch::new(0.6, c, hue))),
            "REGRESSION: capped search returned out-of-gamut chroma at hue {}",
            hue
        );
    }
}

/// If this breaks, it means: the builder facade and the direct entry
/// point diverged -- one of them applies different defaults or forwards
/// parameters differently, so identical requests produce different
/// palettes.
#[test]
fn test_builder_and_direct_entry_agree() {
    let background = Srgb::from_u8(40, 42, 54);

    let via_builder = PaletteGenerator::new(background)
        .count(5)
        .saturation(80.0)
        .lightness(65.0)
        .randomize(true)
        .seed(1234)
        .generate()
        .unwrap();

    let via_function = generate_palette(
        background,
        &GenerateOptions::new()
            .count(5)
            .saturation(80.0)
            .lightness(65.0)
            .randomize(true)
            .seed(1234),
    )
    .unwrap();

    assert_eq!(via_builder.hex_colors(), via_function.hex_colors());
    for (a, b) in via_builder.colors.iter().zip(&via_function.colors) {
        assert_eq!(
            a.wcag.to_bits(),
            b.wcag.to_bits(),
            "REGRESSION: builder and direct generation disagree"
        );
    }
}
