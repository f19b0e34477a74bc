use crate::analyzer::AnalysisContext;
use crate::rules::AnalysisRule;
use pagesmith_model::{Suggestion, SuggestionCategory};
use serde_json::json;

/// WCAG AA minimum for body text
const MIN_CONTRAST: f64 = 4.5;

/// Primary and secondary colors should differ
pub struct PaletteRule;

impl AnalysisRule for PaletteRule {
    fn name(&self) -> &'static str {
        "palette"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Design
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        let colors = &ctx.document.theme.colors;
        if !colors.primary.eq_ignore_ascii_case(&colors.secondary) {
            return Vec::new();
        }

        vec![Suggestion::new(
            "update-theme",
            "Primary and secondary colors are identical. Use the accent color for contrast.",
            0.6,
        )
        .with_data(json!({ "colors": { "secondary": colors.accent } }))]
    }
}

/// Body text must be readable on the page background
pub struct ContrastRule;

impl AnalysisRule for ContrastRule {
    fn name(&self) -> &'static str {
        "contrast"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Design
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        let colors = &ctx.document.theme.colors;

        let ratio = match (parse_hex(&colors.text), parse_hex(&colors.background)) {
            (Some(text), Some(background)) => contrast_ratio(text, background),
            // Named or functional colors: only catch the obvious case
            _ if colors.text.eq_ignore_ascii_case(&colors.background) => 1.0,
            _ => return Vec::new(),
        };

        if ratio >= MIN_CONTRAST {
            return Vec::new();
        }

        let replacement = match parse_hex(&colors.background) {
            Some(bg) if relative_luminance(bg) < 0.5 => "#f9fafb",
            _ => "#1f2937",
        };

        vec![Suggestion::new(
            "update-theme",
            format!(
                "Text contrast is {:.1}:1, below the recommended {:.1}:1.",
                ratio, MIN_CONTRAST
            ),
            0.9,
        )
        .with_data(json!({ "colors": { "text": replacement } }))]
    }
}

/// Same family for headings and body reads flat
pub struct FontPairingRule;

impl AnalysisRule for FontPairingRule {
    fn name(&self) -> &'static str {
        "font-pairing"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Design
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        let fonts = &ctx.document.theme.fonts;
        if fonts.heading != fonts.body {
            return Vec::new();
        }

        vec![Suggestion::new(
            "update-theme",
            "Headings and body use the same font. A contrasting heading font adds hierarchy.",
            0.3,
        )
        .with_data(json!({ "fonts": { "heading": fonts.heading } }))]
    }
}

pub struct AnimationsRule;

impl AnalysisRule for AnimationsRule {
    fn name(&self) -> &'static str {
        "animations"
    }

    fn category(&self) -> SuggestionCategory {
        SuggestionCategory::Design
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<Suggestion> {
        if ctx.document.settings.animations {
            return Vec::new();
        }

        vec![Suggestion::new(
            "update-settings",
            "Subtle entrance animations make the page feel more polished.",
            0.4,
        )
        .with_data(json!({ "animations": true }))]
    }
}

/// `#rgb` or `#rrggbb` to 0-255 channels
fn parse_hex(color: &str) -> Option<[u8; 3]> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = channel(&c.to_string())?;
                out[i] = v * 17;
            }
            Some(out)
        }
        6 => Some([channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?]),
        _ => None,
    }
}

fn relative_luminance(rgb: [u8; 3]) -> f64 {
    let linear = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(rgb[0]) + 0.7152 * linear(rgb[1]) + 0.0722 * linear(rgb[2])
}

fn contrast_ratio(a: [u8; 3], b: [u8; 3]) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (light, dark) = if la > lb { (la, lb) } else { (lb, la) };
    (light + 0.05) / (dark + 0.05)
}
