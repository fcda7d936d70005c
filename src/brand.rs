//! Brand design tokens
//!
//! Color ramps and typography from the property's brand guidelines, served
//! as JSON at `/api/brand` for the front-end. Process-wide read-only data
//! initialized once.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize)]
pub struct BrandTokens {
    pub colors: BTreeMap<&'static str, BTreeMap<u16, &'static str>>,
    pub typography: Typography,
}

#[derive(Debug, Clone, Serialize)]
pub struct Typography {
    /// Script font for primary headings
    pub heading: &'static str,
    /// Secondary headings
    pub subheading: &'static str,
    /// Body text
    pub body: &'static str,
}

fn ramp(stops: &[(u16, &'static str)]) -> BTreeMap<u16, &'static str> {
    stops.iter().copied().collect()
}

/// The brand token table
pub fn tokens() -> &'static BrandTokens {
    static TOKENS: OnceLock<BrandTokens> = OnceLock::new();
    TOKENS.get_or_init(|| {
        let mut colors = BTreeMap::new();
        colors.insert(
            "canvas",
            ramp(&[
                (50, "rgb(252, 253, 252)"),
                (100, "rgb(248, 249, 248)"),
                (200, "rgb(240, 241, 240)"),
                (300, "rgb(228, 229, 228)"),
            ]),
        );
        colors.insert(
            "feltedGreen",
            ramp(&[
                (50, "rgb(240, 245, 241)"),
                (100, "rgb(225, 235, 227)"),
                (500, "rgb(86, 125, 95)"),
                (600, "rgb(77, 112, 85)"),
                (700, "rgb(68, 99, 75)"),
                (800, "rgb(59, 86, 65)"),
                (900, "rgb(50, 73, 55)"),
            ]),
        );
        colors.insert(
            "deepForest",
            ramp(&[
                (500, "rgb(45, 69, 56)"),
                (600, "rgb(40, 62, 50)"),
                (700, "rgb(35, 55, 44)"),
                (800, "rgb(30, 48, 38)"),
                (900, "rgb(25, 41, 32)"),
            ]),
        );
        colors.insert(
            "brookBlue",
            ramp(&[
                (50, "rgb(240, 246, 248)"),
                (100, "rgb(225, 237, 241)"),
                (500, "rgb(94, 142, 158)"),
                (600, "rgb(85, 128, 142)"),
                (700, "rgb(76, 114, 126)"),
                (800, "rgb(67, 100, 110)"),
                (900, "rgb(58, 86, 94)"),
            ]),
        );
        colors.insert(
            "granite",
            ramp(&[
                (100, "rgb(240, 241, 242)"),
                (200, "rgb(225, 227, 228)"),
                (300, "rgb(191, 195, 197)"),
                (400, "rgb(157, 163, 166)"),
                (500, "rgb(64, 68, 71)"),
                (600, "rgb(58, 61, 64)"),
                (700, "rgb(51, 54, 57)"),
                (800, "rgb(45, 48, 50)"),
                (900, "rgb(38, 41, 43)"),
            ]),
        );

        BrandTokens {
            colors,
            typography: Typography {
                heading: "\"Anamortee\", cursive",
                subheading: "\"Nimbus Sans Bold\", \"Nimbus Sans\", system-ui, sans-serif",
                body: "\"Nimbus Sans Light\", \"Nimbus Sans\", system-ui, sans-serif",
            },
        }
    })
}
