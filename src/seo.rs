//! SEO metadata helpers
//!
//! Site-wide constants, page title/description generation, and the JSON-LD
//! LodgingBusiness document embedded on every page.

use serde_json::{json, Value};

/// Site name used as the title suffix
pub const SITE_NAME: &str = "The Bodhi - Luxury 5-Bedroom Mountain Estate in Highlands, NC";

/// Image used when a page declares none
pub const DEFAULT_IMAGE: &str = "/images/the-bodhi-hero-exterior.jpg";

/// Location suffix appended to titles and descriptions
const LOCATION_SUFFIX: &str = " | Highlands, NC";
const LOCATION_PHRASE: &str = " in Highlands, NC";

/// Maximum description length accepted by search result snippets
pub const MAX_DESCRIPTION_LENGTH: usize = 160;

/// Build a page title with the site name and optional location suffix
///
/// The homepage gets the bare site name; every other page is prefixed.
pub fn seo_title(page_title: &str, include_location: bool) -> String {
    let suffix = if include_location { LOCATION_SUFFIX } else { "" };

    if page_title.is_empty() || page_title == "Home" {
        format!("{}{}", SITE_NAME, suffix)
    } else {
        format!("{} | {}{}", page_title, SITE_NAME, suffix)
    }
}

/// Build a meta description, location-suffixed and capped at `max_length`
///
/// Oversized content is truncated with a trailing ellipsis.
pub fn seo_description(content: &str, max_length: usize, include_location: bool) -> String {
    let mut description = if include_location {
        format!("{}{}", content, LOCATION_PHRASE)
    } else {
        content.to_string()
    };

    if description.len() > max_length {
        let cut = max_length.saturating_sub(3);
        // Back off to a char boundary so the truncation never splits UTF-8
        let boundary = (0..=cut)
            .rev()
            .find(|&i| description.is_char_boundary(i))
            .unwrap_or(0);
        description.truncate(boundary);
        description.push_str("...");
    }

    description
}

/// JSON-LD LodgingBusiness document for the property
///
/// Values are fixed property facts; `base_url` comes from the site config.
pub fn local_business_schema(base_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "LodgingBusiness",
        "name": "The Bodhi - Luxury Mountain Estate",
        "description": "The Bodhi is a luxury 5-bedroom mountain estate in Highlands, NC, sleeping up to 17 guests. Features private movie theater, koi pond with waterfalls, Big Green Egg, and stunning Blue Ridge Mountain views.",
        "url": base_url,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "480 Flat Mountain Estates Road",
            "addressLocality": "Highlands",
            "addressRegion": "NC",
            "postalCode": "28741",
            "addressCountry": "US"
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": "35.0531",
            "longitude": "-83.1960"
        },
        "accommodationCategory": "Vacation Rental",
        "numberOfRooms": "5",
        "occupancy": {
            "@type": "QuantitativeValue",
            "maxValue": "17"
        },
        "amenityFeature": [
            {"@type": "LocationFeatureSpecification", "name": "Private Movie Theater"},
            {"@type": "LocationFeatureSpecification", "name": "Koi Pond with Waterfalls"},
            {"@type": "LocationFeatureSpecification", "name": "Big Green Egg Outdoor Cooking"},
            {"@type": "LocationFeatureSpecification", "name": "Multiple Fireplaces"},
            {"@type": "LocationFeatureSpecification", "name": "Blue Ridge Mountain Views"},
            {"@type": "LocationFeatureSpecification", "name": "5 Bedrooms"},
            {"@type": "LocationFeatureSpecification", "name": "5 Bathrooms"},
            {"@type": "LocationFeatureSpecification", "name": "Sleeps 17 Guests"},
            {"@type": "LocationFeatureSpecification", "name": "Full Kitchen"},
            {"@type": "LocationFeatureSpecification", "name": "Multiple Covered Patios"},
            {"@type": "LocationFeatureSpecification", "name": "WiFi"},
            {"@type": "LocationFeatureSpecification", "name": "Air Conditioning"}
        ],
        "starRating": {
            "@type": "Rating",
            "ratingValue": "5"
        },
        "priceRange": "$$$$"
    })
}
