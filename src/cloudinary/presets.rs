//! Fixed transformation presets for the property's image contexts
//!
//! Presets are process-wide read-only constants initialized once; they are
//! never mutated after definition.

use std::str::FromStr;
use std::sync::OnceLock;

use super::transform::{self, Crop, Dpr, Format, Gravity, Quality, Radius, Transformation};
use crate::error::SiteError;

/// Usage contexts with a fixed transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetName {
    Hero,
    Gallery,
    Thumbnail,
    Avatar,
    Mobile,
    AmenityCard,
    BlogThumbnail,
}

impl PresetName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Gallery => "gallery",
            Self::Thumbnail => "thumbnail",
            Self::Avatar => "avatar",
            Self::Mobile => "mobile",
            Self::AmenityCard => "amenityCard",
            Self::BlogThumbnail => "blogThumbnail",
        }
    }

    pub const ALL: [PresetName; 7] = [
        Self::Hero,
        Self::Gallery,
        Self::Thumbnail,
        Self::Avatar,
        Self::Mobile,
        Self::AmenityCard,
        Self::BlogThumbnail,
    ];
}

impl FromStr for PresetName {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(Self::Hero),
            "gallery" => Ok(Self::Gallery),
            "thumbnail" => Ok(Self::Thumbnail),
            "avatar" => Ok(Self::Avatar),
            "mobile" => Ok(Self::Mobile),
            "amenityCard" => Ok(Self::AmenityCard),
            "blogThumbnail" => Ok(Self::BlogThumbnail),
            _ => Err(SiteError::validation(
                "preset",
                format!("unknown preset: {}", s),
            )),
        }
    }
}

/// A named, fixed transformation plus a human-readable description
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: PresetName,
    pub transformation: Transformation,
    pub description: &'static str,
}

fn fill_auto(width: u32, height: u32, quality: Quality) -> Transformation {
    Transformation {
        width: Some(width),
        height: Some(height),
        crop: Some(Crop::Fill),
        gravity: Some(Gravity::Auto),
        quality: Some(quality),
        format: Some(Format::Auto),
        dpr: Some(Dpr::Auto),
        ..Default::default()
    }
}

/// The process-wide preset table
pub fn presets() -> &'static [Preset] {
    static PRESETS: OnceLock<Vec<Preset>> = OnceLock::new();
    PRESETS.get_or_init(|| {
        vec![
            Preset {
                name: PresetName::Hero,
                transformation: fill_auto(1920, 1080, Quality::AutoGood),
                description: "Full-screen hero images with optimal quality",
            },
            Preset {
                name: PresetName::Gallery,
                transformation: fill_auto(800, 600, Quality::AutoGood),
                description: "Property gallery images with balanced quality and size",
            },
            Preset {
                name: PresetName::Thumbnail,
                transformation: fill_auto(400, 300, Quality::AutoEco),
                description: "Small thumbnails for cards and previews",
            },
            Preset {
                name: PresetName::Avatar,
                transformation: Transformation {
                    gravity: Some(Gravity::Face),
                    radius: Some(Radius::Max),
                    ..fill_auto(128, 128, Quality::AutoGood)
                },
                description: "Circular avatars for user profiles",
            },
            Preset {
                name: PresetName::Mobile,
                transformation: fill_auto(768, 576, Quality::AutoGood),
                description: "Mobile-optimized images",
            },
            Preset {
                name: PresetName::AmenityCard,
                transformation: Transformation {
                    radius: Some(Radius::Px(16)),
                    ..fill_auto(600, 400, Quality::AutoGood)
                },
                description: "Amenity showcase cards with rounded corners",
            },
            Preset {
                name: PresetName::BlogThumbnail,
                transformation: fill_auto(480, 320, Quality::AutoEco),
                description: "Blog post thumbnails and previews",
            },
        ]
    })
}

/// Look up a preset by name
pub fn preset(name: PresetName) -> &'static Preset {
    presets()
        .iter()
        .find(|p| p.name == name)
        .expect("preset table covers every PresetName")
}

/// Build a delivery URL using a preset's fixed transformation
pub fn preset_url(
    cloud_name: &str,
    public_id: &str,
    name: PresetName,
) -> Result<String, SiteError> {
    transform::delivery_url(cloud_name, public_id, Some(&preset(name).transformation))
}
