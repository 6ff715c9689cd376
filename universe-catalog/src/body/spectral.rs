//! Spectral classification and the physical estimates derived from it.
//!
//! A class string such as `G2V`, `K0 III` or `M5.5Ve` is split into a leading
//! type letter, an optional one-digit subtype and a luminosity class. Mass and
//! radius estimates start from a per-letter base value, apply a linear
//! per-subtype correction for O through M, then scale by luminosity class.
//!
//! All tables are compile-time constants; unknown letters fall back to one
//! solar mass, one solar radius and a white color instead of failing.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest radius estimate, in solar radii, before the main-sequence
/// mass-radius relation is applied.
pub const MAX_RADIUS_SOLAR: f64 = 25.0;

const DEFAULT_LETTER: char = 'G';
const DEFAULT_MASS_SOLAR: f64 = 1.0;
const DEFAULT_RADIUS_SOLAR: f64 = 1.0;

/// 8-bit RGB color used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized `[0, 1]` channels.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

struct TypeRow {
    letter: char,
    color: Rgb,
    mass_solar: Option<f64>,
    radius_solar: Option<f64>,
}

const fn row(letter: char, color: Rgb, mass: f64, radius: f64) -> TypeRow {
    TypeRow {
        letter,
        color,
        mass_solar: Some(mass),
        radius_solar: Some(radius),
    }
}

#[rustfmt::skip]
const TYPE_TABLE: [TypeRow; 19] = [
    // Main sequence
    row('O', Rgb::new(155, 180, 255), 40.0, 15.0),
    row('B', Rgb::new(170, 195, 255), 10.0, 7.0),
    row('A', Rgb::new(210, 225, 255), 2.5, 1.8),
    row('F', Rgb::new(255, 245, 230), 1.5, 1.3),
    row('G', Rgb::new(255, 230, 130), 1.0, 1.0),
    row('K', Rgb::new(255, 190, 100), 0.7, 0.8),
    row('M', Rgb::new(255, 140, 90), 0.3, 0.5),
    // Brown dwarfs
    row('L', Rgb::new(230, 100, 50), 0.08, 0.1),
    row('T', Rgb::new(200, 80, 40), 0.05, 0.08),
    row('Y', Rgb::new(170, 70, 40), 0.02, 0.07),
    // Wolf-Rayet, carbon and S-type
    row('W', Rgb::new(120, 170, 255), 25.0, 12.0),
    row('C', Rgb::new(255, 100, 100), 3.0, 100.0),
    row('S', Rgb::new(255, 120, 90), 2.5, 80.0),
    row('N', Rgb::new(240, 170, 130), 2.8, 90.0),
    row('R', Rgb::new(255, 110, 90), 2.5, 70.0),
    // Remnants
    row('D', Rgb::new(200, 210, 255), 0.7, 0.01),
    row('Q', Rgb::new(170, 180, 200), 1.4, 0.0001),
    row('X', Rgb::new(30, 30, 40), 10.0, 0.0001),
    // Planetary nebula: color only
    TypeRow { letter: 'P', color: Rgb::new(180, 190, 255), mass_solar: None, radius_solar: None },
];

fn type_row(letter: char) -> Option<&'static TypeRow> {
    TYPE_TABLE.iter().find(|r| r.letter == letter)
}

/// Linear subtype correction for mass, `intercept - subtype * slope`.
fn subtype_mass(letter: char, subtype: u8) -> Option<f64> {
    let s = subtype as f64;
    let m = match letter {
        'O' => 40.0 - s * 3.0,
        'B' => 18.0 - s * 1.5,
        'A' => 3.2 - s * 0.18,
        'F' => 1.7 - s * 0.07,
        'G' => 1.1 - s * 0.04,
        'K' => 0.8 - s * 0.04,
        'M' => 0.5 - s * 0.04,
        _ => return None,
    };
    Some(m)
}

fn subtype_radius(letter: char, subtype: u8) -> Option<f64> {
    let s = subtype as f64;
    let r = match letter {
        'O' => 20.0 - s,
        'B' => 10.0 - s * 0.6,
        'A' => 2.5 - s * 0.08,
        'F' => 1.6 - s * 0.05,
        'G' => 1.1 - s * 0.03,
        'K' => 0.85 - s * 0.04,
        'M' => 0.5 - s * 0.03,
        _ => return None,
    };
    Some(r)
}

/// Yerkes luminosity class.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LuminosityClass {
    I,   // Supergiants
    II,  // Bright giants
    III, // Giants
    IV,  // Subgiants
    V,   // Main sequence
    VI,  // Subdwarfs
    VII, // White dwarfs
}

/// Roman numerals ordered so that no entry is a prefix-match hazard for a
/// later one (`III` before `II` before `I`, `VII` before `VI` before `V`).
const NUMERALS: [(&str, LuminosityClass); 7] = [
    ("VII", LuminosityClass::VII),
    ("III", LuminosityClass::III),
    ("II", LuminosityClass::II),
    ("IV", LuminosityClass::IV),
    ("VI", LuminosityClass::VI),
    ("I", LuminosityClass::I),
    ("V", LuminosityClass::V),
];

impl LuminosityClass {
    /// Extracts the luminosity class from a full spectral class string.
    ///
    /// Space-separated numerals win over trailing ones, and the longest
    /// numeral wins in both passes. Without a numeral the words
    /// `SUPERGIANT`, `GIANT` and `DWARF` are consulted. Anything else is main
    /// sequence.
    ///
    /// ```
    /// use universe_catalog::body::LuminosityClass;
    ///
    /// assert_eq!(LuminosityClass::from_class("K0 III"), LuminosityClass::III);
    /// assert_eq!(LuminosityClass::from_class("G2V"), LuminosityClass::V);
    /// assert_eq!(LuminosityClass::from_class("red supergiant"), LuminosityClass::I);
    /// assert_eq!(LuminosityClass::from_class("M5.5Ve"), LuminosityClass::V);
    /// ```
    pub fn from_class(class: &str) -> Self {
        let upper = class.trim().to_uppercase();

        for (numeral, lum) in NUMERALS {
            if upper.contains(&format!(" {}", numeral)) {
                return lum;
            }
        }
        for (numeral, lum) in NUMERALS {
            if upper.ends_with(numeral) {
                return lum;
            }
        }

        if upper.contains("SUPERGIANT") {
            LuminosityClass::I
        } else if upper.contains("GIANT") {
            LuminosityClass::III
        } else {
            // DWARF and everything unrecognised
            LuminosityClass::V
        }
    }

    pub fn radius_factor(self) -> f64 {
        match self {
            LuminosityClass::I => 20.0,
            LuminosityClass::II => 10.0,
            LuminosityClass::III => 6.0,
            LuminosityClass::IV => 2.0,
            _ => 1.0,
        }
    }

    pub fn mass_factor(self) -> f64 {
        match self {
            LuminosityClass::I => 15.0,
            LuminosityClass::II => 9.0,
            LuminosityClass::III => 5.0,
            LuminosityClass::IV => 2.0,
            _ => 1.0,
        }
    }
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            LuminosityClass::I => "I",
            LuminosityClass::II => "II",
            LuminosityClass::III => "III",
            LuminosityClass::IV => "IV",
            LuminosityClass::V => "V",
            LuminosityClass::VI => "VI",
            LuminosityClass::VII => "VII",
        };
        write!(f, "{}", str)
    }
}

/// Parsed form of a spectral class string.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpectralClassification {
    /// Uppercased first character, `'G'` for an empty class.
    pub letter: char,
    /// Second character when it is a digit.
    pub subtype: Option<u8>,
    pub luminosity: LuminosityClass,
}

impl SpectralClassification {
    pub fn parse(class: &str) -> Self {
        let class = class.trim();
        let mut chars = class.chars();
        let letter = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or(DEFAULT_LETTER);
        let subtype = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8);

        Self {
            letter,
            subtype,
            luminosity: LuminosityClass::from_class(class),
        }
    }

    pub fn is_main_sequence(&self) -> bool {
        self.luminosity == LuminosityClass::V
    }

    /// Mass estimate in solar masses.
    ///
    /// ```
    /// use universe_catalog::body::SpectralClassification;
    ///
    /// let m0 = SpectralClassification::parse("M0");
    /// assert!((m0.estimate_mass_solar() - 0.5).abs() < 1e-12);
    /// ```
    pub fn estimate_mass_solar(&self) -> f64 {
        let base = self
            .subtype
            .and_then(|s| subtype_mass(self.letter, s))
            .or_else(|| type_row(self.letter).and_then(|r| r.mass_solar))
            .unwrap_or(DEFAULT_MASS_SOLAR);
        base * self.luminosity.mass_factor()
    }

    /// Radius estimate in solar radii for a star of `mass_solar`.
    ///
    /// The table value is scaled by luminosity class and capped at
    /// [`MAX_RADIUS_SOLAR`]. Main-sequence stars above 0.1 solar masses then
    /// follow the mass-radius power law instead: exponent 0.8 below one solar
    /// mass, 0.57 up to two, 0.5 beyond.
    pub fn estimate_radius_solar(&self, mass_solar: f64) -> f64 {
        let base = self
            .subtype
            .and_then(|s| subtype_radius(self.letter, s))
            .or_else(|| type_row(self.letter).and_then(|r| r.radius_solar))
            .unwrap_or(DEFAULT_RADIUS_SOLAR);
        let radius = (base * self.luminosity.radius_factor()).min(MAX_RADIUS_SOLAR);

        if !self.is_main_sequence() {
            return radius;
        }
        if mass_solar > 0.1 && mass_solar < 2.0 {
            let exponent = if mass_solar < 1.0 { 0.8 } else { 0.57 };
            libm::pow(mass_solar, exponent)
        } else if mass_solar >= 2.0 {
            libm::sqrt(mass_solar)
        } else {
            radius
        }
    }

    /// Display color for the leading letter; white when the letter is unknown.
    pub fn color(&self) -> Rgb {
        type_row(self.letter).map_or(Rgb::WHITE, |r| r.color)
    }
}

impl fmt::Display for SpectralClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.subtype {
            Some(s) => write!(f, "{}{}{}", self.letter, s, self.luminosity),
            None => write!(f, "{}{}", self.letter, self.luminosity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_parse_letter_and_subtype() {
        let c = SpectralClassification::parse("g2v");
        assert_eq!(c.letter, 'G');
        assert_eq!(c.subtype, Some(2));
        assert_eq!(c.luminosity, LuminosityClass::V);

        let c = SpectralClassification::parse("M5.5Ve");
        assert_eq!(c.letter, 'M');
        assert_eq!(c.subtype, Some(5));

        let c = SpectralClassification::parse("DA");
        assert_eq!(c.subtype, None);
    }

    #[test]
    fn test_empty_class_defaults_to_g() {
        let c = SpectralClassification::parse("");
        assert_eq!(c.letter, 'G');
        assert_eq!(c.subtype, None);
        assert_eq!(c.luminosity, LuminosityClass::V);
        assert_eq!(c.color(), Rgb::new(255, 230, 130));
        assert!((c.estimate_mass_solar() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_luminosity_space_prefixed_prefers_longest() {
        assert_eq!(LuminosityClass::from_class("B8 Ia"), LuminosityClass::I);
        assert_eq!(LuminosityClass::from_class("G8 II"), LuminosityClass::II);
        assert_eq!(LuminosityClass::from_class("K0 III"), LuminosityClass::III);
        assert_eq!(LuminosityClass::from_class("G2 IV"), LuminosityClass::IV);
        assert_eq!(LuminosityClass::from_class("sdM1 VI"), LuminosityClass::VI);
        assert_eq!(LuminosityClass::from_class("DA VII"), LuminosityClass::VII);
    }

    #[test]
    fn test_luminosity_suffix_fallback() {
        assert_eq!(LuminosityClass::from_class("K1III"), LuminosityClass::III);
        assert_eq!(LuminosityClass::from_class("F5IV"), LuminosityClass::IV);
        assert_eq!(LuminosityClass::from_class("M1VI"), LuminosityClass::VI);
        assert_eq!(LuminosityClass::from_class("A0V"), LuminosityClass::V);
        assert_eq!(LuminosityClass::from_class("G5II"), LuminosityClass::II);
    }

    #[test]
    fn test_luminosity_word_fallback() {
        assert_eq!(LuminosityClass::from_class("supergiant"), LuminosityClass::I);
        assert_eq!(LuminosityClass::from_class("orange giant"), LuminosityClass::III);
        assert_eq!(LuminosityClass::from_class("red dwarf"), LuminosityClass::V);
        assert_eq!(LuminosityClass::from_class("K"), LuminosityClass::V);
    }

    #[test]
    fn test_subtype_zero_equals_type_base() {
        let m0 = SpectralClassification::parse("M0");
        assert!((m0.estimate_mass_solar() - 0.5).abs() < EPSILON);
        let g0 = SpectralClassification::parse("G0V");
        assert!((g0.estimate_mass_solar() - 1.1).abs() < EPSILON);
    }

    #[test]
    fn test_subtype_mass_formulas() {
        let cases = [
            ("O5", 40.0 - 15.0),
            ("B2", 18.0 - 3.0),
            ("A1", 3.2 - 0.18),
            ("F9", 1.7 - 0.63),
            ("G2", 1.1 - 0.08),
            ("K5", 0.8 - 0.2),
            ("M9", 0.5 - 0.36),
        ];
        for (class, expected) in cases {
            let m = SpectralClassification::parse(class).estimate_mass_solar();
            assert!((m - expected).abs() < 1e-9, "{}: {} vs {}", class, m, expected);
        }
    }

    #[test]
    fn test_luminosity_mass_multiplier() {
        let giant = SpectralClassification::parse("K0 III");
        assert!((giant.estimate_mass_solar() - 0.8 * 5.0).abs() < EPSILON);
        let super_giant = SpectralClassification::parse("M2 Iab");
        assert!((super_giant.estimate_mass_solar() - (0.5 - 0.08) * 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_letter_defaults() {
        let c = SpectralClassification::parse("Z9");
        assert_eq!(c.color(), Rgb::WHITE);
        assert!((c.estimate_mass_solar() - 1.0).abs() < EPSILON);
        let p = SpectralClassification::parse("P");
        assert_eq!(p.color(), Rgb::new(180, 190, 255));
        assert!((p.estimate_mass_solar() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_radius_capped_for_giants() {
        // B0 I: 10 * 20 = 200, capped to 25.
        let c = SpectralClassification::parse("B0 I");
        assert!((c.estimate_radius_solar(c.estimate_mass_solar()) - 25.0).abs() < EPSILON);
        // K0 III: 0.85 * 6 = 5.1, not capped, no power law.
        let c = SpectralClassification::parse("K0 III");
        assert!((c.estimate_radius_solar(4.0) - 5.1).abs() < 1e-9);
    }

    #[test]
    fn test_main_sequence_power_law() {
        let c = SpectralClassification::parse("K5V");
        let m = c.estimate_mass_solar();
        assert!((c.estimate_radius_solar(m) - libm::pow(m, 0.8)).abs() < EPSILON);

        let c = SpectralClassification::parse("F0V");
        assert!((c.estimate_radius_solar(1.7) - libm::pow(1.7, 0.57)).abs() < EPSILON);

        let c = SpectralClassification::parse("O5V");
        assert!((c.estimate_radius_solar(25.0) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_low_mass_keeps_table_radius() {
        // L dwarf at 0.08 solar masses stays on the table value.
        let c = SpectralClassification::parse("L2");
        assert!((c.estimate_radius_solar(0.08) - 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_color_table() {
        assert_eq!(SpectralClassification::parse("O9").color(), Rgb::new(155, 180, 255));
        assert_eq!(SpectralClassification::parse("m3V").color(), Rgb::new(255, 140, 90));
        assert_eq!(SpectralClassification::parse("X").color(), Rgb::new(30, 30, 40));
        assert_eq!(format!("{}", Rgb::new(255, 230, 130)), "#ffe682");
    }

    #[test]
    fn test_display() {
        assert_eq!(SpectralClassification::parse("k0 iii").to_string(), "K0III");
        assert_eq!(SpectralClassification::parse("DA").to_string(), "DV");
    }
}
