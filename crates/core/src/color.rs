//! Foreground/background color resolution for QR rendering.
//!
//! Colors come from two sources: a fixed table of named themes, and
//! explicit hex overrides supplied per request. Explicit hex wins over the
//! theme, per channel. Malformed input is never an error here; anything
//! unparseable is silently ignored so a cosmetic mistake cannot fail a
//! request.

/// Fully opaque black, the encoder default for dark modules.
pub const DEFAULT_FOREGROUND: u32 = 0xFF00_0000;
/// Fully opaque white, the encoder default for light modules.
pub const DEFAULT_BACKGROUND: u32 = 0xFFFF_FFFF;

/// A resolved two-color palette, one 32-bit ARGB value per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub foreground: u32,
    pub background: u32,
}

/// Parse a hex color string into a 32-bit ARGB value.
///
/// Accepts an optional leading `#`. Exactly 6 hex digits are treated as
/// RGB with alpha forced to `0xFF`; exactly 8 digits carry an explicit
/// alpha in the leading byte. Any other length, non-hex characters, or
/// blank input yields `None`.
pub fn parse_hex(hex: &str) -> Option<u32> {
    let h = hex.trim();
    let h = h.strip_prefix('#').unwrap_or(h);
    match h.len() {
        6 => u32::from_str_radix(h, 16).ok().map(|rgb| 0xFF00_0000 | rgb),
        8 => u32::from_str_radix(h, 16).ok(),
        _ => None,
    }
}

/// Look up a named theme's (foreground, background) pair.
///
/// Names are case-insensitive; unknown names yield `None`.
pub fn theme_colors(theme: &str) -> Option<(u32, u32)> {
    match theme.trim().to_lowercase().as_str() {
        "classic" => Some((0xFF00_0000, 0xFFFF_FFFF)),
        "indigo" => Some((0xFF3F_51B5, 0xFFFF_FFFF)),
        "sunset" => Some((0xFFDC_2743, 0xFFFF_F5F5)),
        "forest" => Some((0xFF2E_7D32, 0xFFE8_F5E9)),
        "midnight" => Some((0xFF00_0000, 0xFFE0_E7FF)),
        _ => None,
    }
}

/// Resolve the effective palette from an optional theme and optional
/// per-channel hex overrides.
///
/// The theme's pair (if any) is the base; each parseable hex override
/// replaces its own channel independently. `None` means "no customization
/// at all" and callers should fall back to the encoder defaults. When only
/// one channel resolves, the other is filled with its default so the
/// result is always a complete pair.
pub fn resolve_colors(
    theme: Option<&str>,
    fg_hex: Option<&str>,
    bg_hex: Option<&str>,
) -> Option<ColorPair> {
    let base = theme.and_then(theme_colors);
    let mut foreground = base.map(|(fg, _)| fg);
    let mut background = base.map(|(_, bg)| bg);

    if let Some(fg) = fg_hex.and_then(parse_hex) {
        foreground = Some(fg);
    }
    if let Some(bg) = bg_hex.and_then(parse_hex) {
        background = Some(bg);
    }

    if foreground.is_none() && background.is_none() {
        return None;
    }

    Some(ColorPair {
        foreground: foreground.unwrap_or(DEFAULT_FOREGROUND),
        background: background.unwrap_or(DEFAULT_BACKGROUND),
    })
}
