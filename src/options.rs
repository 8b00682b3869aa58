//! Decode options.

use bitflags::bitflags;

bitflags! {
    /// The separator-equivalent glyphs the normalizer canonicalizes to the
    /// sentinel byte. A bit-set rather than a closed enum because each
    /// glyph is independently on/off and callers may want more than one
    /// active at a time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SeparatorGlyphs: u8 {
        /// ASCII 0x1D, the literal GS / FNC1 byte.
        const GS = 0b0000_0001;
        /// The literal three-character sequence `<GS>`.
        const ANGLE_GS = 0b0000_0010;
        const TILDE = 0b0000_0100;
        const PIPE = 0b0000_1000;
        const CARET = 0b0001_0000;
    }
}

impl Default for SeparatorGlyphs {
    fn default() -> Self {
        Self::all()
    }
}

bitflags! {
    /// Subset of the internal AI range 90..=99 for which the reconstructor's
    /// absorption penalty is not applied. Whitelisting an AI fully
    /// suppresses the penalty rather than scaling it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InternalAiWhitelist: u16 {
        const AI90 = 1 << 0;
        const AI91 = 1 << 1;
        const AI92 = 1 << 2;
        const AI93 = 1 << 3;
        const AI94 = 1 << 4;
        const AI95 = 1 << 5;
        const AI96 = 1 << 6;
        const AI97 = 1 << 7;
        const AI98 = 1 << 8;
        const AI99 = 1 << 9;
    }
}

impl Default for InternalAiWhitelist {
    fn default() -> Self {
        Self::empty()
    }
}

impl InternalAiWhitelist {
    /// Whether `code` (expected to be one of `"90"`..`"99"`) is whitelisted.
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        code.parse::<u8>()
            .ok()
            .filter(|&n| (90..=99).contains(&n))
            .map(|n| Self::from_bits_truncate(1 << (n - 90)))
            .is_some_and(|flag| self.contains(flag))
    }
}

/// The default century pivot: a two-digit year `YY >= 51` resolves to
/// 19YY, otherwise 20YY.
pub const DEFAULT_CENTURY_PIVOT: u8 = 51;

/// Decode-time options. A plain, `Copy`-able struct constructed via
/// `Default`/struct-update syntax rather than a builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeOptions {
    /// When `false`, the reconstructor is disabled; structurally ambiguous
    /// inputs return the partial fast-path result with `AmbiguousParse`.
    pub allow_ambiguous: bool,
    /// Upper bound on the size of `alternatives`.
    pub max_alternatives: usize,
    /// When `true`, any element-level validation failure adds a fatal
    /// top-level error and forces `confidence = 0`.
    pub strict_mode: bool,
    /// Whether the normalizer canonicalizes separator glyphs at all.
    pub normalize_separators: bool,
    /// Two-digit year century pivot (`YY >= pivot` => 19YY, else 20YY).
    pub century_pivot: u8,
    /// Which glyphs the normalizer treats as separator-equivalent.
    pub separator_glyphs: SeparatorGlyphs,
    /// Beam width for the reconstructor's search.
    pub beam_width: usize,
    /// Maximum search depth (number of elements) for the reconstructor.
    pub max_depth: usize,
    /// Internal AIs (90..=99) exempt from the absorption penalty.
    pub vendor_internal_ai_whitelist: InternalAiWhitelist,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            allow_ambiguous: true,
            max_alternatives: 5,
            strict_mode: false,
            normalize_separators: true,
            century_pivot: DEFAULT_CENTURY_PIVOT,
            separator_glyphs: SeparatorGlyphs::default(),
            beam_width: 200,
            max_depth: 50,
            vendor_internal_ai_whitelist: InternalAiWhitelist::default(),
        }
    }
}
