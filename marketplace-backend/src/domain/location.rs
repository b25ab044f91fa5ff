// src/domain/location.rs

/// サービス提供地域（固定）
pub const LOCATIONS: [&str; 10] = [
    "Kathmandu",
    "Lalitpur",
    "Bhaktapur",
    "Tansen",
    "Butwal",
    "Hetauda",
    "Chitwan",
    "Rampur",
    "Dhangadi",
    "Karnali",
];

/// 「地域で絞り込まない」ことを表す予約値
pub const ALL_LOCATIONS: &str = "All Nepal";

pub fn is_known_location(location: &str) -> bool {
    LOCATIONS.contains(&location)
}

/// 検索クエリの location を実際の絞り込み条件に変換する
///
/// 未指定・空文字・"All Nepal" はいずれも絞り込みなし
pub fn location_filter(location: Option<&str>) -> Option<&str> {
    location.filter(|l| !l.is_empty() && *l != ALL_LOCATIONS)
}
