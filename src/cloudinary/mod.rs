//! Cloudinary integration
//!
//! Two collaborating pieces:
//!
//! - the delivery URL builder ([`transform`], [`presets`]): pure functions
//!   mapping a public ID plus transformation options onto CDN URLs;
//! - the signed Admin API proxy core ([`admin`], [`signing`]): builds and
//!   signs a parameter set, performs one outbound call, and reshapes the
//!   JSON for the browser.
//!
//! The proxy depends on the builder only for shared configuration, never
//! for control flow.

pub mod admin;
pub mod mock;
pub mod presets;
pub mod signing;
pub mod transform;

// Re-export commonly used types
pub use admin::{
    AdminAction, AdminClient, AdminResponse, AdminTransport, ReqwestTransport, Resource,
    ResourceListResponse, ResourceQuery, SimpleAction, TagListResponse, UpstreamResponse,
};
pub use presets::{preset, preset_url, Preset, PresetName};
pub use signing::api_signature;
pub use transform::{
    delivery_url, placeholder_url, responsive_set, Crop, Dpr, Format, Gravity, Quality, Radius,
    ResponsiveSet, SrcSetEntry, Transformation,
};
