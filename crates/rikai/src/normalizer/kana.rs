//! Input normalization
//!
//! Converts lookup input into the canonical form used for matching:
//! full-width and half-width katakana become hiragana, half-width voiced and
//! semi-voiced marks are folded into the preceding kana, and the scan stops at
//! the first character that cannot start or continue Japanese text.
//!
//! Katakana "vu" is never converted to hiragana.

/// Half-width katakana U+FF66–U+FF9D → hiragana
#[rustfmt::skip]
const HANKAKU_KATAKANA_TO_HIRAGANA: [u32; 56] = [
  0x3092, 0x3041, 0x3043, 0x3045, 0x3047, 0x3049, 0x3083, 0x3085, 0x3087,
  0x3063, 0x30fc, 0x3042, 0x3044, 0x3046, 0x3048, 0x304a, 0x304b, 0x304d,
  0x304f, 0x3051, 0x3053, 0x3055, 0x3057, 0x3059, 0x305b, 0x305d, 0x305f,
  0x3061, 0x3064, 0x3066, 0x3068, 0x306a, 0x306b, 0x306c, 0x306d, 0x306e,
  0x306f, 0x3072, 0x3075, 0x3078, 0x307b, 0x307e, 0x307f, 0x3080, 0x3081,
  0x3082, 0x3084, 0x3086, 0x3088, 0x3089, 0x308a, 0x308b, 0x308c, 0x308d,
  0x308f, 0x3093,
];

/// Half-width katakana U+FF73–U+FF8E followed by U+FF9E → voiced form
#[rustfmt::skip]
const VOICED_KATAKANA_TO_HIRAGANA: [u32; 28] = [
  0x30f4, 0xff74, 0xff75, 0x304c, 0x304e, 0x3050, 0x3052, 0x3054, 0x3056,
  0x3058, 0x305a, 0x305c, 0x305e, 0x3060, 0x3062, 0x3065, 0x3067, 0x3069,
  0xff85, 0xff86, 0xff87, 0xff88, 0xff89, 0x3070, 0x3073, 0x3076, 0x3079,
  0x307c,
];

/// Half-width katakana U+FF8A–U+FF8E followed by U+FF9F → semi-voiced form
const SEMIVOICED_KATAKANA_TO_HIRAGANA: [u32; 5] = [0x3071, 0x3074, 0x3077, 0x307a, 0x307d];

/// Anything at or below the ideographic full stop ends the input
const LAST_NON_JAPANESE: u32 = 0x3002;

const FULLWIDTH_KATAKANA: std::ops::RangeInclusive<u32> = 0x30a1..=0x30f3;
const HALFWIDTH_KATAKANA: std::ops::RangeInclusive<u32> = 0xff66..=0xff9d;
const VOICEABLE: std::ops::RangeInclusive<u32> = 0xff73..=0xff8e;
const SEMIVOICEABLE: std::ops::RangeInclusive<u32> = 0xff8a..=0xff8e;

const VOICED_MARK: u32 = 0xff9e;
const SEMIVOICED_MARK: u32 = 0xff9f;
const WAVE_DASH: u32 = 0xff5e;

/// Result of [`normalize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
  /// Canonical (hiragana-folded) text
  pub text: String,
  /// `lengths[k]` is the number of original characters consumed to produce
  /// the first `k` characters of `text`. Always starts with `0`.
  pub lengths: Vec<usize>,
}

impl NormalizedInput {
  /// Number of characters in the canonical text
  pub fn char_len(&self) -> usize {
    self.lengths.len() - 1
  }

  /// Whether nothing survived normalization
  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  /// Original input length (in characters) covered by the first
  /// `normalized_len` canonical characters
  pub fn original_len(&self, normalized_len: usize) -> usize {
    self.lengths.get(normalized_len).copied().unwrap_or_else(|| self.lengths[self.char_len()])
  }

  /// Keeps only the first `max_chars` canonical characters
  pub fn truncate(&mut self, max_chars: usize) {
    if self.char_len() <= max_chars {
      return;
    }
    if let Some((byte, _)) = self.text.char_indices().nth(max_chars) {
      self.text.truncate(byte);
    }
    self.lengths.truncate(max_chars + 1);
  }
}

/// Normalizes `input` for dictionary matching.
///
/// # Examples
/// ```
/// use rikai::normalizer::normalize;
///
/// let normalized = normalize("ｶﾞｰﾃﾞﾝ");
/// assert_eq!(normalized.text, "がーでん");
/// assert_eq!(normalized.lengths, vec![0, 2, 3, 5, 6]);
/// ```
pub fn normalize(input: &str) -> NormalizedInput {
  let mut text = String::with_capacity(input.len());
  let mut lengths = vec![0];
  let mut emitted = 0usize;
  let mut previous = 0u32;

  for (i, ch) in input.chars().enumerate() {
    let original = u32::from(ch);
    let mut c = original;

    if c <= LAST_NON_JAPANESE {
      break;
    }

    if FULLWIDTH_KATAKANA.contains(&c) {
      c -= 0x60;
    } else if HALFWIDTH_KATAKANA.contains(&c) {
      c = HANKAKU_KATAKANA_TO_HIRAGANA[(c - 0xff66) as usize];
    } else if c == VOICED_MARK {
      if VOICEABLE.contains(&previous) && text.pop().is_some() {
        emitted -= 1;
        c = VOICED_KATAKANA_TO_HIRAGANA[(previous - 0xff73) as usize];
      }
    } else if c == SEMIVOICED_MARK {
      if SEMIVOICEABLE.contains(&previous) && text.pop().is_some() {
        emitted -= 1;
        c = SEMIVOICED_KATAKANA_TO_HIRAGANA[(previous - 0xff8a) as usize];
      }
    } else if c == WAVE_DASH && i > 0 {
      // ～ inside a word is a visual joiner
      previous = 0;
      continue;
    }

    // every table entry is a valid scalar value
    text.push(char::from_u32(c).unwrap_or(ch));
    emitted += 1;

    // a folded mark replaces the previous output character, so overwrite its length
    if emitted < lengths.len() {
      lengths[emitted] = i + 1;
    } else {
      lengths.push(i + 1);
    }

    previous = original;
  }

  NormalizedInput { text, lengths }
}
