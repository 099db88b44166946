use crate::data_models::SearchFilters;

/// Query parameter that restricts results to remote work.
pub const REMOTE_PARAM: (&str, &str) = ("f_WT", "2");
/// Query parameter carrying the experience level filter.
pub const EXPERIENCE_PARAM: &str = "f_E";

/// Builds the search page URL for `filters`. Only the first page is ever requested.
pub fn build(base_url: &str, filters: &SearchFilters) -> String {
    let mut params: Vec<(&str, &str)> = vec![
        ("keywords", filters.keywords.as_str()),
        ("location", filters.location.as_str()),
        ("start", "0"),
    ];

    if filters.remote_only {
        params.push(REMOTE_PARAM);
    }

    if !filters.experience_level.is_empty() {
        params.push((EXPERIENCE_PARAM, filters.experience_level.as_str()));
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<String>>()
        .join("&");

    format!("{base_url}?{query}")
}
