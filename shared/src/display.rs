//! Display projection of search results.
//!
//! Turns the raw result set into card data: placeholder images for camps
//! without photos, default copy for missing text, and padding with fallback
//! camps on the home page. The input slice is never modified.

use once_cell::sync::Lazy;

use crate::{AgeRange, CampCategory, CampRecord, CampStatus};

/// Number of cards the home page always shows
pub const HOME_DISPLAY_TARGET: usize = 6;

/// Prefix of synthetic fallback identifiers; never issued to stored camps
pub const FALLBACK_ID_PREFIX: &str = "fallback::";

const PLACEHOLDER_IMAGES: [&str; 5] = [
    "/assets/placeholders/lakeside.jpg",
    "/assets/placeholders/campfire.jpg",
    "/assets/placeholders/forest-trail.jpg",
    "/assets/placeholders/art-studio.jpg",
    "/assets/placeholders/playing-field.jpg",
];

const DEFAULT_DESCRIPTION: &str = "Details for this camp are coming soon.";
const DEFAULT_LOCATION: &str = "Location to be announced";

static FALLBACK_CAMPS: Lazy<Vec<CampRecord>> = Lazy::new(|| {
    [
        ("Sunny Pines Adventure Camp", "Lake Tahoe, CA", CampCategory::Adventure, (8, 14), 450.0),
        ("Little Picassos Art Studio", "Portland, OR", CampCategory::Arts, (5, 10), 280.0),
        ("Junior Robotics Lab", "Austin, TX", CampCategory::Technology, (9, 15), 520.0),
        ("Riverside Sports Academy", "Denver, CO", CampCategory::Sports, (7, 13), 320.0),
        ("Starlight Theater Workshop", "Chicago, IL", CampCategory::Drama, (10, 16), 300.0),
        ("Wildflower Nature Explorers", "Asheville, NC", CampCategory::Nature, (6, 11), 260.0),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (name, location, category, (min, max), price))| CampRecord {
        id: format!("{}{}", FALLBACK_ID_PREFIX, index + 1),
        name: name.to_string(),
        description: format!("A favorite {} camp for curious kids.", category.label().to_lowercase()),
        location: location.to_string(),
        age_range: AgeRange { min, max },
        category,
        activities: Vec::new(),
        price,
        images: Vec::new(),
        owner_id: String::new(),
        capacity: 0,
        registered: 0,
        is_deleted: false,
        deleted_at: None,
        deleted_by: None,
        status: CampStatus::Active,
        start_date: None,
        end_date: None,
        created_at: String::new(),
        updated_at: String::new(),
    })
    .collect()
});

/// Locally defined showcase camps used to fill the home page
pub fn fallback_camps() -> &'static [CampRecord] {
    &FALLBACK_CAMPS
}

/// Append fallback entries until `target` is reached.
///
/// Real records are never dropped, even past `target`. Fallback entries whose
/// id clashes with a real record are skipped.
pub fn pad_to_target(
    records: &[CampRecord],
    target: usize,
    fallback_source: &[CampRecord],
) -> Vec<CampRecord> {
    let mut padded = records.to_vec();
    if padded.len() >= target {
        return padded;
    }

    let missing = target - padded.len();
    let fillers: Vec<CampRecord> = fallback_source
        .iter()
        .filter(|fallback| !records.iter().any(|record| record.id == fallback.id))
        .take(missing)
        .cloned()
        .collect();
    padded.extend(fillers);
    padded
}

/// Stable pseudo-random placeholder for a camp id
pub fn placeholder_image_for(id: &str) -> &'static str {
    // FNV-1a
    let hash = id
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
        });
    PLACEHOLDER_IMAGES[(hash % PLACEHOLDER_IMAGES.len() as u64) as usize]
}

/// Where a result list is being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayContext {
    /// Featured grid; padded with fallback camps
    Home,
    /// Search results; shows exactly what the server returned
    SearchResults,
}

/// Everything a camp card needs, with gaps already filled
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCamp {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub image_url: String,
    pub age_label: String,
    pub price_label: String,
    pub is_fallback: bool,
}

impl DisplayCamp {
    fn from_record(record: &CampRecord) -> Self {
        let image_url = record
            .images
            .iter()
            .find(|url| !url.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| placeholder_image_for(&record.id).to_string());

        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: non_blank_or(&record.description, DEFAULT_DESCRIPTION),
            location: non_blank_or(&record.location, DEFAULT_LOCATION),
            category: record.category.label().to_string(),
            image_url,
            age_label: format!("Ages {}-{}", record.age_range.min, record.age_range.max),
            price_label: format_price(record.price),
            is_fallback: record.is_fallback(),
        }
    }
}

/// Build the card list for a context
pub fn project_results(records: &[CampRecord], context: DisplayContext) -> Vec<DisplayCamp> {
    let visible = match context {
        DisplayContext::Home => pad_to_target(records, HOME_DISPLAY_TARGET, fallback_camps()),
        DisplayContext::SearchResults => records.to_vec(),
    };
    visible.iter().map(DisplayCamp::from_record).collect()
}

fn non_blank_or(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${:.0}", price)
    } else {
        format!("${:.2}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn real_camp(id: &str) -> CampRecord {
        CampRecord {
            id: id.to_string(),
            name: format!("Camp {}", id),
            owner_id: "user::owner".to_string(),
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
            updated_at: "2026-01-01T00:00:00+00:00".to_string(),
            ..fallback_camps()[0].clone()
        }
    }

    #[test]
    fn test_two_records_pad_to_six_with_four_fallbacks() {
        let records = vec![real_camp("camp::a"), real_camp("camp::b")];

        let padded = pad_to_target(&records, 6, fallback_camps());

        assert_eq!(padded.len(), 6);
        assert_eq!(&padded[..2], records.as_slice());
        let fallbacks: Vec<_> = padded.iter().filter(|c| c.is_fallback()).collect();
        assert_eq!(fallbacks.len(), 4);

        let ids: HashSet<_> = padded.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
        assert!(records.iter().all(|r| !r.id.starts_with(FALLBACK_ID_PREFIX)));
    }

    #[test]
    fn test_pad_never_truncates_real_records() {
        let records: Vec<_> = (0..8).map(|i| real_camp(&format!("camp::{}", i))).collect();
        let padded = pad_to_target(&records, 6, fallback_camps());
        assert_eq!(padded, records);
    }

    #[test]
    fn test_pad_is_limited_by_fallback_source() {
        let padded = pad_to_target(&[], 10, &fallback_camps()[..3]);
        assert_eq!(padded.len(), 3);
    }

    #[test]
    fn test_pad_skips_fallback_with_clashing_id() {
        let mut clash = real_camp("camp::x");
        clash.id = fallback_camps()[0].id.clone();
        let padded = pad_to_target(&[clash], 3, fallback_camps());

        let ids: Vec<_> = padded.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["fallback::1", "fallback::2", "fallback::3"]);
    }

    #[test]
    fn test_placeholder_pick_is_stable_and_from_rotation() {
        let first = placeholder_image_for("camp::123");
        assert_eq!(first, placeholder_image_for("camp::123"));
        assert!(PLACEHOLDER_IMAGES.contains(&first));
    }

    #[test]
    fn test_projection_fills_missing_fields() {
        let mut record = real_camp("camp::bare");
        record.images = vec!["   ".to_string()];
        record.description = String::new();
        record.location = " ".to_string();
        record.price = 149.5;

        let cards = project_results(&[record], DisplayContext::SearchResults);

        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert!(PLACEHOLDER_IMAGES.contains(&card.image_url.as_str()));
        assert_eq!(card.description, DEFAULT_DESCRIPTION);
        assert_eq!(card.location, DEFAULT_LOCATION);
        assert_eq!(card.price_label, "$149.50");
        assert!(!card.is_fallback);
    }

    #[test]
    fn test_projection_keeps_real_image() {
        let mut record = real_camp("camp::photo");
        record.images = vec!["https://img.example/camp.jpg".to_string()];
        let cards = project_results(&[record], DisplayContext::SearchResults);
        assert_eq!(cards[0].image_url, "https://img.example/camp.jpg");
        assert_eq!(cards[0].price_label, "$450");
        assert_eq!(cards[0].age_label, "Ages 8-14");
    }

    #[test]
    fn test_home_pads_but_search_results_do_not() {
        let records = vec![real_camp("camp::only")];

        let home = project_results(&records, DisplayContext::Home);
        let search = project_results(&records, DisplayContext::SearchResults);

        assert_eq!(home.len(), HOME_DISPLAY_TARGET);
        assert_eq!(search.len(), 1);
        assert_eq!(records.len(), 1);
    }
}
