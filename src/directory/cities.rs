//! The built-in city table.
//!
//! Grouped by region; the popular flag marks the cities offered before the
//! user types anything.

use super::City;

const fn city(
    english_name: &'static str,
    chinese_name: &'static str,
    time_zone: &'static str,
    aliases: &'static [&'static str],
    country: &'static str,
    country_zh: &'static str,
    is_popular: bool,
) -> City {
    City {
        english_name,
        chinese_name,
        time_zone,
        aliases,
        country,
        country_zh,
        is_popular,
    }
}

pub(crate) static CITIES: &[City] = &[
    // East Asia
    city("Beijing", "北京", "Asia/Shanghai", &["Peking"], "China", "中国", true),
    city("Shanghai", "上海", "Asia/Shanghai", &[], "China", "中国", true),
    city("Hong Kong", "香港", "Asia/Hong_Kong", &["HK"], "China", "中国", true),
    city("Taipei", "台北", "Asia/Taipei", &[], "Taiwan", "中国台湾", true),
    city("Tokyo", "东京", "Asia/Tokyo", &[], "Japan", "日本", true),
    city("Seoul", "首尔", "Asia/Seoul", &["서울"], "South Korea", "韩国", true),
    // South-east Asia
    city("Singapore", "新加坡", "Asia/Singapore", &[], "Singapore", "新加坡", true),
    city("Bangkok", "曼谷", "Asia/Bangkok", &[], "Thailand", "泰国", true),
    city("Ho Chi Minh", "胡志明市", "Asia/Ho_Chi_Minh", &["Saigon"], "Vietnam", "越南", false),
    city("Jakarta", "雅加达", "Asia/Jakarta", &[], "Indonesia", "印度尼西亚", false),
    city("Manila", "马尼拉", "Asia/Manila", &[], "Philippines", "菲律宾", false),
    // South and west Asia
    city("Mumbai", "孟买", "Asia/Kolkata", &["Bombay"], "India", "印度", false),
    city("New Delhi", "新德里", "Asia/Kolkata", &["Delhi"], "India", "印度", true),
    city("Dubai", "迪拜", "Asia/Dubai", &[], "UAE", "阿联酋", true),
    city("Tel Aviv", "特拉维夫", "Asia/Jerusalem", &["Jerusalem"], "Israel", "以色列", false),
    city("Istanbul", "伊斯坦布尔", "Europe/Istanbul", &[], "Turkey", "土耳其", false),
    // Europe
    city("London", "伦敦", "Europe/London", &[], "UK", "英国", true),
    city("Paris", "巴黎", "Europe/Paris", &[], "France", "法国", true),
    city("Berlin", "柏林", "Europe/Berlin", &[], "Germany", "德国", true),
    city("Amsterdam", "阿姆斯特丹", "Europe/Amsterdam", &[], "Netherlands", "荷兰", false),
    city("Brussels", "布鲁塞尔", "Europe/Brussels", &[], "Belgium", "比利时", false),
    city("Rome", "罗马", "Europe/Rome", &[], "Italy", "意大利", true),
    city("Madrid", "马德里", "Europe/Madrid", &[], "Spain", "西班牙", false),
    city("Barcelona", "巴塞罗那", "Europe/Madrid", &[], "Spain", "西班牙", false),
    city("Stockholm", "斯德哥尔摩", "Europe/Stockholm", &[], "Sweden", "瑞典", false),
    city("Copenhagen", "哥本哈根", "Europe/Copenhagen", &[], "Denmark", "丹麦", false),
    city("Moscow", "莫斯科", "Europe/Moscow", &[], "Russia", "俄罗斯", true),
    city("Zurich", "苏黎世", "Europe/Zurich", &[], "Switzerland", "瑞士", false),
    // North America
    city("New York", "纽约", "America/New_York", &["NYC"], "USA", "美国", true),
    city("Los Angeles", "洛杉矶", "America/Los_Angeles", &["LA"], "USA", "美国", true),
    city("Chicago", "芝加哥", "America/Chicago", &[], "USA", "美国", true),
    city("San Francisco", "旧金山", "America/Los_Angeles", &["SF"], "USA", "美国", true),
    city("Seattle", "西雅图", "America/Los_Angeles", &[], "USA", "美国", false),
    city("Boston", "波士顿", "America/New_York", &[], "USA", "美国", false),
    city("Washington DC", "华盛顿", "America/New_York", &["DC"], "USA", "美国", false),
    city("Toronto", "多伦多", "America/Toronto", &[], "Canada", "加拿大", true),
    city("Vancouver", "温哥华", "America/Vancouver", &[], "Canada", "加拿大", false),
    city("Mexico City", "墨西哥城", "America/Mexico_City", &[], "Mexico", "墨西哥", false),
    // Latin America
    city("Sao Paulo", "圣保罗", "America/Sao_Paulo", &[], "Brazil", "巴西", false),
    city("Buenos Aires", "布宜诺斯艾利斯", "America/Argentina/Buenos_Aires", &[], "Argentina", "阿根廷", false),
    // Oceania and Africa
    city("Sydney", "悉尼", "Australia/Sydney", &[], "Australia", "澳大利亚", true),
    city("Melbourne", "墨尔本", "Australia/Melbourne", &[], "Australia", "澳大利亚", false),
    city("Auckland", "奥克兰", "Pacific/Auckland", &[], "New Zealand", "新西兰", false),
    city("Cairo", "开罗", "Africa/Cairo", &[], "Egypt", "埃及", false),
    city("Johannesburg", "约翰内斯堡", "Africa/Johannesburg", &[], "South Africa", "南非", false),
];
