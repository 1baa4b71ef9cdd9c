use super::filters::ProductSearchFilters;

/// Keyword phrases that bias retailer queries toward fashion results for
/// a given campus occasion. Unknown event types pass through unchanged.
const EVENT_KEYWORD_HINTS: &[(&str, &str)] = &[
    ("formal", "formal dress elegant evening"),
    ("gameday", "game day college team spirit outfit"),
    ("concert", "concert outfit statement trendy"),
    ("party", "party dress night out"),
    ("date-night", "date night outfit chic"),
];

pub fn event_keyword_hint(event_type: &str) -> Option<&'static str> {
    EVENT_KEYWORD_HINTS
        .iter()
        .find(|(name, _)| *name == event_type)
        .map(|(_, hint)| *hint)
}

/// Combines the filter fields into one retailer-agnostic keyword string.
/// Shared by every aggregator so the query-building rules live in one place.
pub fn build_search_keywords(filters: &ProductSearchFilters) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(keywords) = &filters.keywords {
        if !keywords.trim().is_empty() {
            parts.push(keywords.trim().to_string());
        }
    }
    if let Some(category) = &filters.category {
        parts.push(category.to_string());
    }
    if let Some(event_type) = &filters.event_type {
        let hint = event_keyword_hint(event_type).unwrap_or(event_type);
        if !hint.trim().is_empty() {
            parts.push(hint.trim().to_string());
        }
    }
    if let Some(brand) = &filters.brand {
        if !brand.trim().is_empty() {
            parts.push(brand.trim().to_string());
        }
    }
    if let Some(color) = &filters.color {
        if !color.trim().is_empty() {
            parts.push(color.trim().to_string());
        }
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::Category;

    #[test]
    fn should_expand_known_event_types() {
        assert_eq!(
            event_keyword_hint("formal"),
            Some("formal dress elegant evening")
        );
        assert!(event_keyword_hint("gameday").is_some());
        assert_eq!(event_keyword_hint("brunch"), None);
    }

    #[test]
    fn should_combine_all_filter_fields() {
        let filters = ProductSearchFilters {
            keywords: Some("satin slip".to_string()),
            category: Some(Category::Dress),
            event_type: Some("formal".to_string()),
            brand: Some("Aritzia".to_string()),
            color: Some("emerald".to_string()),
            ..Default::default()
        };
        assert_eq!(
            build_search_keywords(&filters),
            "satin slip dress formal dress elegant evening Aritzia emerald"
        );
    }

    #[test]
    fn should_pass_unknown_event_type_through() {
        let filters = ProductSearchFilters {
            event_type: Some("tailgate".to_string()),
            ..Default::default()
        };
        assert_eq!(build_search_keywords(&filters), "tailgate");
    }

    #[test]
    fn should_return_empty_string_for_empty_filters() {
        assert_eq!(build_search_keywords(&ProductSearchFilters::default()), "");
    }

    #[test]
    fn should_skip_blank_fields() {
        let filters = ProductSearchFilters {
            keywords: Some("   ".to_string()),
            color: Some("black".to_string()),
            ..Default::default()
        };
        assert_eq!(build_search_keywords(&filters), "black");
    }
}
