//! Delivery URL construction
//!
//! Maps a public ID plus a set of named transformation options into the
//! CDN delivery URL:
//!
//! ```text
//! https://res.cloudinary.com/<cloud>/image/upload/<comma-joined-tokens>/<public_id>
//! ```
//!
//! Token order is fixed (size, crop, quality, format, gravity, effects,
//! layering, dpr, flags, raw) and must not change: layering semantics of
//! overlay/underlay depend on it, and live pages embed these URLs.

use crate::constants::{DEFAULT_PLACEHOLDER_WIDTH, DELIVERY_HOST, PLACEHOLDER_BLUR};
use crate::error::SiteError;

/// Crop mode applied by the CDN at delivery time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crop {
    Scale,
    Fit,
    Fill,
    Limit,
    Thumb,
    Crop,
    Pad,
}

impl Crop {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scale => "scale",
            Self::Fit => "fit",
            Self::Fill => "fill",
            Self::Limit => "limit",
            Self::Thumb => "thumb",
            Self::Crop => "crop",
            Self::Pad => "pad",
        }
    }
}

/// Gravity/anchor point for crop operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    /// Content-aware automatic gravity
    Auto,
    AutoSubject,
    Center,
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    Face,
    Faces,
}

impl Gravity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::AutoSubject => "auto:subject",
            Self::Center => "center",
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::NorthEast => "north_east",
            Self::NorthWest => "north_west",
            Self::SouthEast => "south_east",
            Self::SouthWest => "south_west",
            Self::Face => "face",
            Self::Faces => "faces",
        }
    }
}

/// Output quality directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Auto,
    AutoBest,
    AutoGood,
    AutoEco,
    AutoLow,
    /// Fixed quality 1-100
    Fixed(u8),
}

impl Quality {
    fn token(&self) -> String {
        match self {
            Self::Auto => "q_auto".to_string(),
            Self::AutoBest => "q_auto:best".to_string(),
            Self::AutoGood => "q_auto:good".to_string(),
            Self::AutoEco => "q_auto:eco".to_string(),
            Self::AutoLow => "q_auto:low".to_string(),
            Self::Fixed(q) => format!("q_{}", q),
        }
    }
}

/// Output format directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Let the CDN pick based on the requesting browser
    Auto,
    Jpg,
    Png,
    WebP,
    Avif,
    Gif,
    Svg,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::WebP => "webp",
            Self::Avif => "avif",
            Self::Gif => "gif",
            Self::Svg => "svg",
        }
    }
}

/// Corner radius: fixed pixels or the full ellipse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radius {
    Px(u32),
    Max,
}

/// Device pixel ratio directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dpr {
    Auto,
    Fixed(u32),
}

/// An immutable set of delivery-time transformation options
///
/// Every field is optional; absence means the corresponding URL token is
/// omitted. Construct with struct-update syntax over `Default::default()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transformation {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub crop: Option<Crop>,
    pub gravity: Option<Gravity>,
    pub quality: Option<Quality>,
    pub format: Option<Format>,
    /// Free-form effect directive, e.g. `blur:300` or `sepia`
    pub effect: Option<String>,
    pub radius: Option<Radius>,
    /// Border directive, e.g. `4px_solid_rgb:999999`
    pub border: Option<String>,
    /// Rotation angle in degrees
    pub angle: Option<i32>,
    /// Opacity 0-100
    pub opacity: Option<u8>,
    /// Overlay public ID
    pub overlay: Option<String>,
    /// Underlay public ID
    pub underlay: Option<String>,
    pub dpr: Option<Dpr>,
    /// Joined with `.` inside a single `fl_` token
    pub flags: Vec<String>,
    /// Escape hatch appended verbatim as the last token
    pub raw: Option<String>,
}

impl Transformation {
    /// The defaults merged under every delivery URL
    pub fn defaults() -> Self {
        Self {
            quality: Some(Quality::AutoGood),
            format: Some(Format::Auto),
            dpr: Some(Dpr::Auto),
            ..Default::default()
        }
    }

    /// Shallow field-by-field combine: values from `self` win, holes are
    /// filled from `base`
    pub fn merged_over(&self, base: &Transformation) -> Transformation {
        Transformation {
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            crop: self.crop.or(base.crop),
            gravity: self.gravity.or(base.gravity),
            quality: self.quality.or(base.quality),
            format: self.format.or(base.format),
            effect: self.effect.clone().or_else(|| base.effect.clone()),
            radius: self.radius.or(base.radius),
            border: self.border.clone().or_else(|| base.border.clone()),
            angle: self.angle.or(base.angle),
            opacity: self.opacity.or(base.opacity),
            overlay: self.overlay.clone().or_else(|| base.overlay.clone()),
            underlay: self.underlay.clone().or_else(|| base.underlay.clone()),
            dpr: self.dpr.or(base.dpr),
            flags: if self.flags.is_empty() {
                base.flags.clone()
            } else {
                self.flags.clone()
            },
            raw: self.raw.clone().or_else(|| base.raw.clone()),
        }
    }

    /// Serialize the present fields into the comma-joined token list
    ///
    /// Field order is fixed; see the module docs. Returns an empty string
    /// when no field is set.
    pub fn to_params(&self) -> String {
        let mut tokens: Vec<String> = Vec::new();

        if let Some(w) = self.width {
            tokens.push(format!("w_{}", w));
        }
        if let Some(h) = self.height {
            tokens.push(format!("h_{}", h));
        }
        if let Some(c) = self.crop {
            tokens.push(format!("c_{}", c.as_str()));
        }
        if let Some(q) = self.quality {
            tokens.push(q.token());
        }
        if let Some(f) = self.format {
            tokens.push(format!("f_{}", f.as_str()));
        }
        if let Some(g) = self.gravity {
            tokens.push(format!("g_{}", g.as_str()));
        }
        if let Some(e) = &self.effect {
            tokens.push(format!("e_{}", e));
        }
        if let Some(r) = self.radius {
            match r {
                Radius::Px(px) => tokens.push(format!("r_{}", px)),
                Radius::Max => tokens.push("r_max".to_string()),
            }
        }
        if let Some(bo) = &self.border {
            tokens.push(format!("bo_{}", bo));
        }
        if let Some(a) = self.angle {
            tokens.push(format!("a_{}", a));
        }
        if let Some(o) = self.opacity {
            tokens.push(format!("o_{}", o));
        }
        if let Some(l) = &self.overlay {
            tokens.push(format!("l_{}", l));
        }
        if let Some(u) = &self.underlay {
            tokens.push(format!("u_{}", u));
        }
        if let Some(dpr) = self.dpr {
            match dpr {
                Dpr::Auto => tokens.push("dpr_auto".to_string()),
                Dpr::Fixed(d) => tokens.push(format!("dpr_{}", d)),
            }
        }
        if !self.flags.is_empty() {
            tokens.push(format!("fl_{}", self.flags.join(".")));
        }
        if let Some(raw) = &self.raw {
            tokens.push(raw.clone());
        }

        tokens.join(",")
    }
}

fn base_path(cloud_name: &str) -> String {
    format!("{}/{}/image/upload", DELIVERY_HOST, cloud_name)
}

fn check_public_id(public_id: &str) -> Result<(), SiteError> {
    if public_id.is_empty() {
        return Err(SiteError::validation(
            "public_id",
            "public ID is required for URL generation",
        ));
    }
    Ok(())
}

fn assemble(cloud_name: &str, public_id: &str, params: &str) -> String {
    if params.is_empty() {
        format!("{}/{}", base_path(cloud_name), public_id)
    } else {
        format!("{}/{}/{}", base_path(cloud_name), params, public_id)
    }
}

/// Build a delivery URL for `public_id`
///
/// The defaults (`q_auto:good`, `f_auto`, `dpr_auto`) are merged under any
/// caller-supplied transformation, caller values winning per field.
pub fn delivery_url(
    cloud_name: &str,
    public_id: &str,
    transformation: Option<&Transformation>,
) -> Result<String, SiteError> {
    check_public_id(public_id)?;

    let merged = match transformation {
        Some(t) => t.merged_over(&Transformation::defaults()),
        None => Transformation::defaults(),
    };

    Ok(assemble(cloud_name, public_id, &merged.to_params()))
}

/// One `srcset` candidate: a URL plus its width/density descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcSetEntry {
    pub url: String,
    pub descriptor: String,
}

/// A responsive image source set with browser hint metadata
#[derive(Debug, Clone)]
pub struct ResponsiveSet {
    /// Fallback source at the largest breakpoint
    pub src: String,
    pub entries: Vec<SrcSetEntry>,
    /// The `sizes` attribute value passed through to the page
    pub sizes: String,
}

impl ResponsiveSet {
    pub fn srcset(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{} {}", e.url, e.descriptor))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Expand breakpoints x density multipliers into a source set
///
/// Each entry's width is pre-multiplied by its density and `dpr` is pinned
/// to 1 in the transformation so the CDN does not scale a second time. The
/// main `src` uses the largest breakpoint at 1x.
pub fn responsive_set(
    cloud_name: &str,
    public_id: &str,
    base: Option<&Transformation>,
    breakpoints: &[u32],
    densities: &[u32],
    sizes: &str,
) -> Result<ResponsiveSet, SiteError> {
    check_public_id(public_id)?;

    let base = base.cloned().unwrap_or_default();
    let mut entries = Vec::with_capacity(breakpoints.len() * densities.len());

    for &width in breakpoints {
        for &density in densities {
            let scaled = Transformation {
                width: Some(width * density),
                dpr: Some(Dpr::Fixed(1)),
                ..base.clone()
            };
            let url = delivery_url(cloud_name, public_id, Some(&scaled))?;
            let descriptor = if density == 1 {
                format!("{}w", width)
            } else {
                format!("{}w {}x", width, density)
            };
            entries.push(SrcSetEntry { url, descriptor });
        }
    }

    let src = match breakpoints.iter().max() {
        Some(&main_width) => {
            let main = Transformation {
                width: Some(main_width),
                ..base
            };
            delivery_url(cloud_name, public_id, Some(&main))?
        }
        None => delivery_url(cloud_name, public_id, Some(&base))?,
    };

    Ok(ResponsiveSet {
        src,
        entries,
        sizes: sizes.to_string(),
    })
}

/// Low-resolution blurred preview shown while the full image loads
///
/// Width defaults to 40px; height defaults to a 4:3 ratio of the width.
pub fn placeholder_url(
    cloud_name: &str,
    public_id: &str,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<String, SiteError> {
    let width = width.unwrap_or(DEFAULT_PLACEHOLDER_WIDTH);
    let transformation = Transformation {
        width: Some(width),
        height: Some(height.unwrap_or_else(|| (width as f64 * 0.75).round() as u32)),
        crop: Some(Crop::Fill),
        quality: Some(Quality::AutoLow),
        format: Some(Format::Auto),
        effect: Some(PLACEHOLDER_BLUR.to_string()),
        ..Default::default()
    };

    delivery_url(cloud_name, public_id, Some(&transformation))
}
