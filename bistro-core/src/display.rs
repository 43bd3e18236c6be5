//! Display mode selected by the page query string.

/// `Kiosk` is used for table QR codes and in-store screens: no header, footer or
/// floating buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Standard,
    Kiosk,
}

impl DisplayMode {
    /// Parse a raw query string (with or without the leading `?`).
    ///
    /// `display=qr`, `display=kiosk` and `kiosk=1|true` select kiosk mode.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let kiosk = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .any(|(key, value)| match key {
                "display" => matches!(value, "qr" | "kiosk"),
                "kiosk" => matches!(value, "1" | "true"),
                _ => false,
            });
        if kiosk { Self::Kiosk } else { Self::Standard }
    }

    #[must_use]
    pub const fn shows_chrome(self) -> bool {
        matches!(self, Self::Standard)
    }

    /// Query pair that keeps this mode across in-app navigation.
    #[must_use]
    pub const fn query_pair(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Standard => None,
            Self::Kiosk => Some(("display", "qr")),
        }
    }
}

/// Query pairs for an in-app link: the page's own pair, then the display flag.
#[must_use]
pub fn nav_query<'a>(
    display: DisplayMode,
    page: Option<(&'a str, &'a str)>,
) -> Vec<(&'a str, &'a str)> {
    page.into_iter().chain(display.query_pair()).collect()
}

/// Encode pairs as a query string with its leading `?`, or nothing when empty.
#[must_use]
pub fn encode_query(pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("?{}", joined.join("&"))
}

/// Value of `key` in a raw query string.
#[must_use]
pub fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find_map(|(k, v)| (k == key).then_some(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kiosk_flags() {
        assert_eq!(DisplayMode::from_query(""), DisplayMode::Standard);
        assert_eq!(DisplayMode::from_query("?display=qr"), DisplayMode::Kiosk);
        assert_eq!(DisplayMode::from_query("category=soups&kiosk=1"), DisplayMode::Kiosk);
        assert_eq!(DisplayMode::from_query("?kiosk=0"), DisplayMode::Standard);
        assert_eq!(DisplayMode::from_query("?display"), DisplayMode::Standard);
        assert!(!DisplayMode::Kiosk.shows_chrome());
    }

    #[test]
    fn reads_single_param() {
        assert_eq!(query_param("?category=grill&x=1", "category"), Some("grill"));
        assert_eq!(query_param("?x=1", "category"), None);
    }

    #[test]
    fn kiosk_flag_survives_navigation_queries() {
        let pairs = nav_query(DisplayMode::Kiosk, Some(("category", "soups")));
        assert_eq!(pairs, vec![("category", "soups"), ("display", "qr")]);
        let query = encode_query(&pairs);
        assert_eq!(query, "?category=soups&display=qr");
        assert_eq!(DisplayMode::from_query(&query), DisplayMode::Kiosk);
        assert_eq!(query_param(&query, "category"), Some("soups"));
    }

    #[test]
    fn standard_mode_adds_nothing() {
        assert!(nav_query(DisplayMode::Standard, None).is_empty());
        assert_eq!(encode_query(&nav_query(DisplayMode::Standard, None)), "");
        assert_eq!(
            encode_query(&nav_query(DisplayMode::Kiosk, None)),
            "?display=qr"
        );
    }
}
