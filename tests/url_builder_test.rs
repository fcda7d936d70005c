// Black-box tests for the delivery URL builder's public contract
//
// The URL shape is embedded in live pages; these tests pin it down exactly.

use bodhi_site::cloudinary::{
    delivery_url, placeholder_url, preset_url, responsive_set, PresetName, Transformation,
};

const CLOUD: &str = "demo";

#[test]
fn empty_transformation_yields_only_the_defaults() {
    let url = delivery_url(CLOUD, "villa/hero-exterior", None).unwrap();
    assert_eq!(
        url,
        "https://res.cloudinary.com/demo/image/upload/q_auto:good,f_auto,dpr_auto/villa/hero-exterior"
    );
}

#[test]
fn width_only_transformation_adds_one_token_in_order() {
    let t = Transformation {
        width: Some(800),
        ..Default::default()
    };
    let url = delivery_url(CLOUD, "villa/kitchen", Some(&t)).unwrap();
    assert_eq!(
        url,
        "https://res.cloudinary.com/demo/image/upload/w_800,q_auto:good,f_auto,dpr_auto/villa/kitchen"
    );
}

#[test]
fn empty_public_id_is_rejected() {
    assert!(delivery_url(CLOUD, "", None).is_err());
    assert!(placeholder_url(CLOUD, "", None, None).is_err());
    assert!(preset_url(CLOUD, "", PresetName::Gallery).is_err());
}

#[test]
fn responsive_set_covers_every_breakpoint_density_pair() {
    let set = responsive_set(
        CLOUD,
        "villa/theater",
        None,
        &[400, 800],
        &[1, 2],
        "(max-width: 768px) 100vw, 50vw",
    )
    .unwrap();

    // 4 candidate URLs with pre-multiplied widths, then the main source at 800
    assert_eq!(set.entries.len(), 4);
    assert!(set.entries[0].url.contains("w_400,"));
    assert!(set.entries[1].url.contains("w_800,"));
    assert!(set.entries[2].url.contains("w_800,"));
    assert!(set.entries[3].url.contains("w_1600,"));
    assert!(set.src.contains("w_800,"));

    let srcset = set.srcset();
    assert!(srcset.contains("400w"));
    assert!(srcset.contains("400w 2x"));
    assert!(srcset.contains("800w 2x"));
    assert_eq!(set.sizes, "(max-width: 768px) 100vw, 50vw");
}

#[test]
fn gallery_preset_matches_live_contract() {
    let url = preset_url(CLOUD, "villa/living-room", PresetName::Gallery).unwrap();
    assert_eq!(
        url,
        "https://res.cloudinary.com/demo/image/upload/w_800,h_600,c_fill,q_auto:good,f_auto,g_auto,dpr_auto/villa/living-room"
    );
}

#[test]
fn placeholder_is_small_low_quality_and_blurred() {
    let url = placeholder_url(CLOUD, "villa/koi-pond", None, None).unwrap();
    assert_eq!(
        url,
        "https://res.cloudinary.com/demo/image/upload/w_40,h_30,c_fill,q_auto:low,f_auto,e_blur:300,dpr_auto/villa/koi-pond"
    );
}
