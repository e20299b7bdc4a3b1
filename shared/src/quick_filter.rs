use once_cell::sync::Lazy;

use crate::filter::FilterPatch;
use crate::{CampCategory, SortField, SortOrder};

/// A named, one-click partial filter
#[derive(Debug, Clone, PartialEq)]
pub struct QuickFilter {
    pub id: &'static str,
    pub label: &'static str,
    pub patch: FilterPatch,
}

static QUICK_FILTERS: Lazy<Vec<QuickFilter>> = Lazy::new(|| {
    vec![
        QuickFilter {
            id: "ages-5-10",
            label: "Ages 5-10",
            patch: FilterPatch::default().with_age_range(5, 10),
        },
        QuickFilter {
            id: "ages-11-15",
            label: "Ages 11-15",
            patch: FilterPatch::default().with_age_range(11, 15),
        },
        QuickFilter {
            id: "under-200",
            label: "Under $200",
            patch: FilterPatch::default().with_max_price(Some(200.0)),
        },
        // activities are not matched server-side yet
        QuickFilter {
            id: "outdoor",
            label: "Outdoor",
            patch: FilterPatch::default().with_activities(["hiking", "nature"]),
        },
        QuickFilter {
            id: "arts",
            label: "Arts & Crafts",
            patch: FilterPatch::default().with_category(Some(CampCategory::Arts)),
        },
        QuickFilter {
            id: "stem",
            label: "STEM",
            patch: FilterPatch::default().with_category(Some(CampCategory::Science)),
        },
        QuickFilter {
            id: "lowest-price",
            label: "Lowest price first",
            patch: FilterPatch::default().with_sort(Some(SortField::Price), SortOrder::Asc),
        },
    ]
});

/// All shortcuts, in display order
pub fn quick_filters() -> &'static [QuickFilter] {
    &QUICK_FILTERS
}

pub fn find_quick_filter(id: &str) -> Option<&'static QuickFilter> {
    QUICK_FILTERS.iter().find(|quick_filter| quick_filter.id == id)
}
