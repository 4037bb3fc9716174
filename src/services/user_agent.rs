//! Lightweight `User-Agent` classification.
//!
//! This is a heuristic matcher, not a device database. Each category is an
//! ordered rule table evaluated first-match-wins, so precedence quirks are
//! deliberate and stable: Chromium-based Edge reports as Chrome, Android
//! reports as Linux, and a string carrying both "Mobile" and "iPad" is mobile.

use crate::models::{BrowserInfo, DeviceInfo, DeviceType, OsInfo};
use regex::Regex;
use std::sync::LazyLock;

/// Browser, OS and device identity derived from one User-Agent string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgentInfo {
    pub browser: BrowserInfo,
    pub os: OsInfo,
    pub device: DeviceInfo,
}

/// A browser family and where its version number lives
pub struct BrowserRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    version: Regex,
}

/// An operating system family and how its version is read
pub struct OsRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    version: Option<VersionRule>,
}

/// Captures a raw version token and normalizes it for display
struct VersionRule {
    pattern: Regex,
    normalize: fn(&str) -> String,
}

/// Substrings that select a device class
pub struct DeviceRule {
    pub device_type: DeviceType,
    pub markers: &'static [&'static str],
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("user agent pattern is valid")
}

fn windows_release(nt_version: &str) -> String {
    match nt_version {
        "10.0" => "10",
        "6.3" => "8.1",
        "6.2" => "8",
        "6.1" => "7",
        other => other,
    }
    .to_string()
}

fn underscores_to_dots(version: &str) -> String {
    version.replace('_', ".")
}

fn verbatim(version: &str) -> String {
    version.to_string()
}

pub static BROWSER_RULES: LazyLock<Vec<BrowserRule>> = LazyLock::new(|| {
    vec![
        BrowserRule {
            name: "Chrome",
            matches: |ua| ua.contains("Chrome"),
            version: pattern(r"Chrome/([0-9.]+)"),
        },
        BrowserRule {
            name: "Firefox",
            matches: |ua| ua.contains("Firefox"),
            version: pattern(r"Firefox/([0-9.]+)"),
        },
        BrowserRule {
            name: "Safari",
            matches: |ua| ua.contains("Safari") && !ua.contains("Chrome"),
            version: pattern(r"Version/([0-9.]+)"),
        },
        BrowserRule {
            name: "Edge",
            matches: |ua| ua.contains("Edge"),
            version: pattern(r"Edge/([0-9.]+)"),
        },
    ]
});

pub static OS_RULES: LazyLock<Vec<OsRule>> = LazyLock::new(|| {
    vec![
        OsRule {
            name: "Windows",
            matches: |ua| ua.contains("Windows NT"),
            version: Some(VersionRule {
                pattern: pattern(r"Windows NT ([0-9.]+)"),
                normalize: windows_release,
            }),
        },
        OsRule {
            name: "macOS",
            matches: |ua| ua.contains("Mac OS X"),
            version: Some(VersionRule {
                pattern: pattern(r"Mac OS X ([0-9_.]+)"),
                normalize: underscores_to_dots,
            }),
        },
        OsRule {
            name: "Linux",
            matches: |ua| ua.contains("Linux"),
            version: None,
        },
        OsRule {
            name: "Android",
            matches: |ua| ua.contains("Android"),
            version: Some(VersionRule {
                pattern: pattern(r"Android ([0-9.]+)"),
                normalize: verbatim,
            }),
        },
        OsRule {
            name: "iOS",
            matches: |ua| ua.contains("iOS"),
            version: Some(VersionRule {
                pattern: pattern(r"OS ([0-9_]+)"),
                normalize: underscores_to_dots,
            }),
        },
    ]
});

pub const DEVICE_RULES: &[DeviceRule] = &[
    DeviceRule {
        device_type: DeviceType::Mobile,
        markers: &["Mobile", "Android"],
    },
    DeviceRule {
        device_type: DeviceType::Tablet,
        markers: &["Tablet", "iPad"],
    },
];

impl BrowserRule {
    fn apply(&self, user_agent: &str) -> BrowserInfo {
        let version = capture(&self.version, user_agent);
        let major = version
            .as_deref()
            .and_then(|v| v.split('.').next())
            .map(str::to_string);

        BrowserInfo {
            name: Some(self.name.to_string()),
            version,
            major,
        }
    }
}

impl OsRule {
    fn apply(&self, user_agent: &str) -> OsInfo {
        let version = self.version.as_ref().and_then(|rule| {
            capture(&rule.pattern, user_agent).map(|raw| (rule.normalize)(&raw))
        });

        OsInfo {
            name: Some(self.name.to_string()),
            version,
        }
    }
}

impl DeviceRule {
    fn matches(&self, user_agent: &str) -> bool {
        self.markers.iter().any(|marker| user_agent.contains(marker))
    }
}

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn classify_browser(user_agent: &str) -> BrowserInfo {
    BROWSER_RULES
        .iter()
        .find(|rule| (rule.matches)(user_agent))
        .map(|rule| rule.apply(user_agent))
        .unwrap_or_default()
}

pub fn classify_os(user_agent: &str) -> OsInfo {
    OS_RULES
        .iter()
        .find(|rule| (rule.matches)(user_agent))
        .map(|rule| rule.apply(user_agent))
        .unwrap_or_default()
}

/// Any present User-Agent gets a device class; desktop when nothing matches
pub fn classify_device(user_agent: &str) -> DeviceInfo {
    let device_type = DEVICE_RULES
        .iter()
        .find(|rule| rule.matches(user_agent))
        .map_or(DeviceType::Desktop, |rule| rule.device_type);

    DeviceInfo {
        device_type: Some(device_type),
        vendor: None,
        model: None,
    }
}

/// Classify a raw User-Agent header; absent input yields all-null fields
pub fn parse_user_agent(user_agent: Option<&str>) -> UserAgentInfo {
    let Some(user_agent) = user_agent.filter(|ua| !ua.is_empty()) else {
        return UserAgentInfo::default();
    };

    UserAgentInfo {
        browser: classify_browser(user_agent),
        os: classify_os(user_agent),
        device: classify_device(user_agent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";
    const FIREFOX_LINUX: &str =
        "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/116.0";
    const SAFARI_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.5 Safari/605.1.15";
    const SAFARI_IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 16_5 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.5 Safari/604.1";
    const CHROME_ANDROID: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Mobile Safari/537.36";
    const LEGACY_EDGE: &str = "Mozilla/5.0 (Windows NT 6.1; Win64; x64) Edge/18.19045";

    #[test]
    fn test_absent_user_agent() {
        let info = parse_user_agent(None);
        assert_eq!(info, UserAgentInfo::default());
        assert!(info.device.device_type.is_none());
        assert!(info.browser.name.is_none());
        assert!(info.os.version.is_none());
    }

    #[test]
    fn test_chrome_on_windows() {
        let info = parse_user_agent(Some(CHROME_WINDOWS));
        assert_eq!(info.browser.name.as_deref(), Some("Chrome"));
        assert_eq!(info.browser.version.as_deref(), Some("115.0.0.0"));
        assert_eq!(info.browser.major.as_deref(), Some("115"));
        assert_eq!(info.os.name.as_deref(), Some("Windows"));
        assert_eq!(info.os.version.as_deref(), Some("10"));
        assert_eq!(info.device.device_type, Some(DeviceType::Desktop));
        assert!(info.device.vendor.is_none());
        assert!(info.device.model.is_none());
    }

    #[test]
    fn test_firefox_on_linux() {
        let info = parse_user_agent(Some(FIREFOX_LINUX));
        assert_eq!(info.browser.name.as_deref(), Some("Firefox"));
        assert_eq!(info.browser.version.as_deref(), Some("116.0"));
        assert_eq!(info.browser.major.as_deref(), Some("116"));
        assert_eq!(info.os.name.as_deref(), Some("Linux"));
        assert!(info.os.version.is_none());
    }

    #[test]
    fn test_safari_on_macos() {
        let info = parse_user_agent(Some(SAFARI_MAC));
        assert_eq!(info.browser.name.as_deref(), Some("Safari"));
        assert_eq!(info.browser.version.as_deref(), Some("16.5"));
        assert_eq!(info.browser.major.as_deref(), Some("16"));
        assert_eq!(info.os.name.as_deref(), Some("macOS"));
        assert_eq!(info.os.version.as_deref(), Some("10.15.7"));
        assert_eq!(info.device.device_type, Some(DeviceType::Desktop));
    }

    #[test]
    fn test_ipad_is_tablet() {
        let info = parse_user_agent(Some(SAFARI_IPAD));
        assert_eq!(info.browser.name.as_deref(), Some("Safari"));
        assert_eq!(info.device.device_type, Some(DeviceType::Tablet));
        // "Mac OS X" is followed by ")" so no version is captured
        assert_eq!(info.os.name.as_deref(), Some("macOS"));
        assert!(info.os.version.is_none());
    }

    #[test]
    fn test_android_reports_linux_and_mobile() {
        let info = parse_user_agent(Some(CHROME_ANDROID));
        assert_eq!(info.browser.name.as_deref(), Some("Chrome"));
        assert_eq!(info.os.name.as_deref(), Some("Linux"));
        assert_eq!(info.device.device_type, Some(DeviceType::Mobile));
    }

    #[test]
    fn test_android_without_linux_token() {
        let os = classify_os("Dalvik/2.1.0 (Android 12; SM-G991B)");
        assert_eq!(os.name.as_deref(), Some("Android"));
        assert_eq!(os.version.as_deref(), Some("12"));
    }

    #[test]
    fn test_ios_version_uses_dots() {
        let os = classify_os("MyApp/3.2 iOS OS 17_1_2");
        assert_eq!(os.name.as_deref(), Some("iOS"));
        assert_eq!(os.version.as_deref(), Some("17.1.2"));
    }

    #[test]
    fn test_legacy_edge() {
        let info = parse_user_agent(Some(LEGACY_EDGE));
        assert_eq!(info.browser.name.as_deref(), Some("Edge"));
        assert_eq!(info.browser.version.as_deref(), Some("18.19045"));
        assert_eq!(info.browser.major.as_deref(), Some("18"));
        assert_eq!(info.os.version.as_deref(), Some("7"));
    }

    #[test]
    fn test_windows_release_table() {
        assert_eq!(windows_release("10.0"), "10");
        assert_eq!(windows_release("6.3"), "8.1");
        assert_eq!(windows_release("6.2"), "8");
        assert_eq!(windows_release("6.1"), "7");
        assert_eq!(windows_release("5.1"), "5.1");
    }

    #[test]
    fn test_browser_name_without_version() {
        let browser = classify_browser("Firefox");
        assert_eq!(browser.name.as_deref(), Some("Firefox"));
        assert!(browser.version.is_none());
        assert!(browser.major.is_none());
    }

    #[test]
    fn test_unknown_agent_is_desktop_with_null_identity() {
        let info = parse_user_agent(Some("curl/8.1.2"));
        assert_eq!(info.browser, BrowserInfo::default());
        assert_eq!(info.os, OsInfo::default());
        assert_eq!(info.device.device_type, Some(DeviceType::Desktop));
    }

    #[test]
    fn test_mobile_wins_over_ipad() {
        let device = classify_device("Mozilla/5.0 (iPad) Mobile/15E148");
        assert_eq!(device.device_type, Some(DeviceType::Mobile));
    }

    #[test]
    fn test_tablet_marker() {
        let device = classify_device("SomeVendor Tablet Browser");
        assert_eq!(device.device_type, Some(DeviceType::Tablet));
    }
}
