//! User agent generation

use rand::seq::SliceRandom;
use rand::Rng;

const CHROME_VERSIONS: &[&str] = &["124.0.0.0", "125.0.0.0", "126.0.0.0", "127.0.0.0"];

const FIREFOX_VERSIONS: &[&str] = &["125.0", "126.0", "127.0", "128.0"];

const PLATFORMS: &[&str] = &[
    "Windows NT 10.0; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "X11; Linux x86_64",
];

/// Generate a random desktop browser user agent
pub fn generate_user_agent() -> String {
    let mut rng = rand::thread_rng();
    let platform = PLATFORMS.choose(&mut rng).copied().unwrap_or(PLATFORMS[0]);

    if rng.gen_bool(0.7) {
        let chrome = CHROME_VERSIONS
            .choose(&mut rng)
            .copied()
            .unwrap_or(CHROME_VERSIONS[0]);
        format!(
            "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
            platform, chrome
        )
    } else {
        let firefox = FIREFOX_VERSIONS
            .choose(&mut rng)
            .copied()
            .unwrap_or(FIREFOX_VERSIONS[0]);
        format!(
            "Mozilla/5.0 ({}; rv:{}) Gecko/20100101 Firefox/{}",
            platform, firefox, firefox
        )
    }
}

/// Accept header for the HTML results page
pub fn accept_html() -> &'static str {
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
}

/// Accept-Language header for an interface language
pub fn accept_language(lang: &str) -> String {
    if lang.is_empty() || lang.starts_with("en") {
        "en-US,en;q=0.9".to_string()
    } else {
        format!("{},en-US;q=0.8,en;q=0.7", lang)
    }
}
