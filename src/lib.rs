use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod flash;
pub mod store;

/// Factory values for the built-in preset and fresh setup forms.
pub mod defaults {
    /// Name of the built-in preset; it can be overwritten but never deleted.
    pub const PRESET_NAME: &str = "Go/No Go";
    pub const MIN_SECS: f64 = 1.0;
    pub const MAX_SECS: f64 = 3.0;
}

/// The four selectable flash colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Colour {
    pub const ALL: [Colour; 4] = [Colour::Red, Colour::Green, Colour::Blue, Colour::Yellow];

    pub fn css(&self) -> &'static str {
        match self {
            Colour::Red => "#ff0000",
            Colour::Green => "#00ff00",
            Colour::Blue => "#0000ff",
            Colour::Yellow => "#ffff00",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Colour::Red => (255, 0, 0),
            Colour::Green => (0, 255, 0),
            Colour::Blue => (0, 0, 255),
            Colour::Yellow => (255, 255, 0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Colour::Red => "Red",
            Colour::Green => "Green",
            Colour::Blue => "Blue",
            Colour::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How many digits the number overlay shows per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumMode {
    #[default]
    One,
    Two,
}

/// Orientation of the two regions in split mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDir {
    #[default]
    Right,
    Bottom,
}

/// Named session configuration record.
///
/// Field names stay camelCase on the wire so documents exported by earlier
/// versions of the tool import unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    pub yellow: bool,
    /// Lower bound of the randomized tick interval, in seconds.
    pub min: f64,
    /// Upper bound of the randomized tick interval, in seconds.
    pub max: f64,
    pub numbers: bool,
    pub num_mode: NumMode,
    pub split: bool,
    pub dir: SplitDir,
}

impl Default for Preset {
    fn default() -> Self {
        Preset {
            red: true,
            green: true,
            blue: false,
            yellow: false,
            min: defaults::MIN_SECS,
            max: defaults::MAX_SECS,
            numbers: false,
            num_mode: NumMode::One,
            split: false,
            dir: SplitDir::Right,
        }
    }
}

impl Preset {
    /// The colours this preset flashes, in declaration order.
    pub fn active_colours(&self) -> Vec<Colour> {
        let flags = [self.red, self.green, self.blue, self.yellow];
        Colour::ALL
            .iter()
            .zip(flags)
            .filter(|(_, on)| *on)
            .map(|(c, _)| *c)
            .collect()
    }

    /// Checks the interval invariant: both bounds finite, positive,
    /// `min <= max`.
    pub fn validate(&self) -> Result<(), PresetError> {
        let bounds_ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min > 0.0
            && self.max > 0.0
            && self.min <= self.max;
        if !bounds_ok {
            return Err(PresetError::InvalidInterval {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Caption shown on home tiles, e.g. "1–3s".
    pub fn interval_label(&self) -> String {
        format!("{}–{}s", self.min, self.max)
    }
}

/// Errors surfaced by preset storage and import/export.
#[derive(Debug, PartialEq)]
pub enum PresetError {
    EmptyName,
    UnknownPreset(String),
    ProtectedPreset,
    InvalidInterval { min: f64, max: f64 },
    InvalidDocument(String),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::EmptyName => write!(f, "Preset name cannot be empty"),
            PresetError::UnknownPreset(name) => write!(f, "No preset named \"{}\"", name),
            PresetError::ProtectedPreset => {
                write!(f, "Cannot delete the \"{}\" preset", defaults::PRESET_NAME)
            }
            PresetError::InvalidInterval { min, max } => write!(
                f,
                "Interval {}–{}s is invalid: bounds must be positive and min must not exceed max",
                min, max
            ),
            PresetError::InvalidDocument(detail) => {
                write!(f, "Not a valid preset file: {}", detail)
            }
        }
    }
}

impl std::error::Error for PresetError {}

/// The whole persisted state: preset name to record, stable name order.
pub type PresetMap = std::collections::BTreeMap<String, Preset>;

/// Background fill for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashFill {
    /// No colour active; the display stays neutral.
    Blank,
    Solid(Colour),
    Split {
        first: Colour,
        second: Colour,
        dir: SplitDir,
    },
}

/// Digit overlay for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digits {
    None,
    One(u8),
    Two(u8, u8),
}

/// One scheduled update of displayed colour/number state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashFrame {
    pub fill: FlashFill,
    pub digits: Digits,
}

#[inline]
fn rand_digit(rng: &mut impl rand::Rng) -> u8 {
    rng.random_range(1..=9)
}

/// Pick the two region colours for split mode, redrawing the second until it
/// differs from the first whenever the active set allows it.
fn pick_split_pair(active: &[Colour], rng: &mut impl rand::Rng) -> (Colour, Colour) {
    let first = *active
        .choose(rng)
        .expect("split draw requires at least one active colour");
    let mut second = first;
    while second == first && active.len() > 1 {
        second = *active
            .choose(rng)
            .expect("split draw requires at least one active colour");
    }
    (first, second)
}

/// Draw the colour(s) and digit(s) for one tick of the given preset.
///
/// Split fills need at least two active colours; otherwise the tick falls
/// back to a single colour (or [`FlashFill::Blank`] when nothing is active).
/// Two digits are keyed off the preset's `split` flag rather than the
/// effective fill, so a split preset reduced to one colour still shows both.
pub fn draw_frame(preset: &Preset, rng: &mut impl rand::Rng) -> FlashFrame {
    let active = preset.active_colours();

    let fill = if preset.split && active.len() >= 2 {
        let (first, second) = pick_split_pair(&active, rng);
        FlashFill::Split {
            first,
            second,
            dir: preset.dir,
        }
    } else {
        match active.choose(rng) {
            Some(&colour) => FlashFill::Solid(colour),
            None => FlashFill::Blank,
        }
    };

    let digits = if !preset.numbers {
        Digits::None
    } else if preset.num_mode == NumMode::Two && preset.split {
        Digits::Two(rand_digit(rng), rand_digit(rng))
    } else {
        Digits::One(rand_digit(rng))
    };

    FlashFrame { fill, digits }
}

/// Draw the next tick delay in milliseconds, uniform over the preset's
/// interval. An inverted range is mirrored before sampling so stored
/// records that predate save-time validation keep working.
pub fn draw_delay_ms(min_secs: f64, max_secs: f64, rng: &mut impl rand::Rng) -> u32 {
    let (lo, hi) = if min_secs <= max_secs {
        (min_secs, max_secs)
    } else {
        (max_secs, min_secs)
    };
    let lo = lo.max(0.0);
    let hi = hi.max(lo);
    (rng.random_range(lo..=hi) * 1000.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_preset() -> Preset {
        Preset {
            red: false,
            green: false,
            blue: true,
            yellow: true,
            split: true,
            numbers: true,
            num_mode: NumMode::Two,
            ..Preset::default()
        }
    }

    #[test]
    fn default_preset_matches_factory_values() {
        let p = Preset::default();
        assert_eq!(p.active_colours(), vec![Colour::Red, Colour::Green]);
        assert_eq!(p.min, 1.0);
        assert_eq!(p.max, 3.0);
        assert!(!p.numbers);
        assert!(!p.split);
    }

    #[test]
    fn wire_format_matches_original_documents() {
        // Shape produced by earlier releases of the tool.
        let doc = r#"{
            "red": true, "green": true, "blue": false, "yellow": false,
            "min": 1, "max": 3, "numbers": true, "numMode": "two",
            "split": true, "dir": "bottom"
        }"#;
        let p: Preset = serde_json::from_str(doc).unwrap();
        assert_eq!(p.num_mode, NumMode::Two);
        assert_eq!(p.dir, SplitDir::Bottom);

        let back = serde_json::to_string(&p).unwrap();
        assert!(back.contains("\"numMode\":\"two\""));
        assert!(back.contains("\"dir\":\"bottom\""));
    }

    #[test]
    fn validate_accepts_ordered_positive_interval() {
        assert!(Preset::default().validate().is_ok());
        let mut p = Preset::default();
        p.min = 0.5;
        p.max = 0.5;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_intervals() {
        for (min, max) in [(0.0, 3.0), (-1.0, 3.0), (3.0, 1.0), (1.0, f64::NAN)] {
            let mut p = Preset::default();
            p.min = min;
            p.max = max;
            assert!(
                matches!(p.validate(), Err(PresetError::InvalidInterval { .. })),
                "interval {}–{} should be rejected",
                min,
                max
            );
        }
    }

    #[test]
    fn split_regions_never_match_with_two_active_colours() {
        let preset = split_preset();
        let mut rng = rand::rng();
        for _ in 0..500 {
            match draw_frame(&preset, &mut rng).fill {
                FlashFill::Split { first, second, .. } => assert_ne!(first, second),
                other => panic!("expected a split fill, got {:?}", other),
            }
        }
    }

    #[test]
    fn split_with_one_colour_falls_back_to_solid() {
        let mut preset = split_preset();
        preset.yellow = false;
        let mut rng = rand::rng();
        let frame = draw_frame(&preset, &mut rng);
        assert_eq!(frame.fill, FlashFill::Solid(Colour::Blue));
        // Two digits still requested: the split flag, not the fill, decides.
        assert!(matches!(frame.digits, Digits::Two(_, _)));
    }

    #[test]
    fn split_pair_with_single_entry_repeats_it() {
        let mut rng = rand::rng();
        let (a, b) = pick_split_pair(&[Colour::Red], &mut rng);
        assert_eq!(a, Colour::Red);
        assert_eq!(b, Colour::Red);
    }

    #[test]
    fn no_active_colours_draws_blank() {
        let preset = Preset {
            red: false,
            green: false,
            ..Preset::default()
        };
        let mut rng = rand::rng();
        assert_eq!(draw_frame(&preset, &mut rng).fill, FlashFill::Blank);
    }

    #[test]
    fn digits_stay_in_range() {
        let mut preset = Preset::default();
        preset.numbers = true;
        let mut rng = rand::rng();
        for _ in 0..200 {
            match draw_frame(&preset, &mut rng).digits {
                Digits::One(n) => assert!((1..=9).contains(&n)),
                other => panic!("expected one digit, got {:?}", other),
            }
        }
    }

    #[test]
    fn delays_stay_inside_the_interval() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let ms = draw_delay_ms(1.0, 3.0, &mut rng);
            assert!((1000..=3000).contains(&ms), "delay {}ms out of range", ms);
        }
    }

    #[test]
    fn inverted_interval_is_mirrored() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let ms = draw_delay_ms(3.0, 1.0, &mut rng);
            assert!((1000..=3000).contains(&ms));
        }
    }

    #[test]
    fn degenerate_interval_is_exact() {
        let mut rng = rand::rng();
        assert_eq!(draw_delay_ms(2.0, 2.0, &mut rng), 2000);
    }
}
