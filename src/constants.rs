/// Spider name constants to ensure consistency across the codebase

// Spider names (used in CLI and output file names)
pub const TJX_API: &str = "tjx";
pub const POUNDLAND_API: &str = "poundland";

// Vendor locator endpoints
pub const TJX_SEARCH_URL: &str = "https://marketingsl.tjx.com/storelocator/GetSearchResults";
pub const POUNDLAND_LOCATOR_URL: &str = "https://www.poundland.co.uk/rest/poundland/V1/locator/\
    ?searchCriteria[scope]=store-locator\
    &searchCriteria[current_page]=1\
    &searchCriteria[page_size]=10000";

/// Get all supported spider names
pub fn get_supported_apis() -> Vec<&'static str> {
    vec![TJX_API, POUNDLAND_API]
}
