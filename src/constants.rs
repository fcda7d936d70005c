// Constants module - centralized default values for configuration
//
// This module defines all default values used throughout the codebase.
// Using constants instead of magic numbers improves maintainability
// and makes it easier to understand and modify defaults.

// =============================================================================
// Server defaults
// =============================================================================

/// Default bind address
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// Cloudinary endpoints
// =============================================================================

/// Host serving transformed image assets
pub const DELIVERY_HOST: &str = "https://res.cloudinary.com";

/// Admin API base (cloud name is appended per request)
pub const ADMIN_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Environment variable holding the Admin API key
pub const ENV_API_KEY: &str = "CLOUDINARY_API_KEY";

/// Environment variable holding the Admin API secret
pub const ENV_API_SECRET: &str = "CLOUDINARY_API_SECRET";

// =============================================================================
// Proxy defaults
// =============================================================================

/// Default folder prefix for resource listings
pub const DEFAULT_FOLDER: &str = "banyan_tree/flat_mountain";

/// Result cap sent to the Admin API on every listing call
pub const DEFAULT_MAX_RESULTS: u32 = 100;

// =============================================================================
// URL builder defaults
// =============================================================================

/// Default width for low-resolution placeholder previews
pub const DEFAULT_PLACEHOLDER_WIDTH: u32 = 40;

/// Blur effect applied to placeholder previews
pub const PLACEHOLDER_BLUR: &str = "blur:300";
