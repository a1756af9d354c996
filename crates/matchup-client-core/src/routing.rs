//! Navigation targets and query-string decisions for server-rendered pages.
//!
//! The shell re-derives everything here from the current URL and the flags
//! the templates embed in the DOM; nothing is persisted between page loads.

pub const DISCOVER_PATH: &str = "/connections/discover/";
pub const LIKED_PROFILES_PATH: &str = "/connections/liked/";
pub const MATCHES_PATH: &str = "/connections/matches/";
pub const MATCHES_NEW_MATCH_PATH: &str = "/connections/matches/?new_match=true";
pub const PROFILE_LIST_PATH: &str = "/profiles/";
pub const PROFILE_CREATE_PATH: &str = "/profile/create/";
pub const SIGNUP_PATH: &str = "/account/signup/";
pub const LOGIN_PATH: &str = "/account/login/";

pub const ORIGIN_PARAM: &str = "origin";
pub const ORIGIN_LIKED_PROFILES: &str = "liked_profiles";
pub const ORIGIN_MATCHES: &str = "matches";
pub const NEW_MATCH_PARAM: &str = "new_match";

/// First value of `name` in a query string. Accepts the raw
/// `location.search` form with or without the leading `?`. The parameters
/// this app uses are plain ASCII tokens, so no percent-decoding is done.
pub fn query_param<'a>(search: &'a str, name: &str) -> Option<&'a str> {
    let query = search.strip_prefix('?').unwrap_or(search);
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next().unwrap_or_default() != name {
            continue;
        }
        return Some(parts.next().unwrap_or_default());
    }
    None
}

/// Which listing view a "return to discover" control should point back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverOrigin {
    LikedProfiles,
    Matches,
}

impl DiscoverOrigin {
    /// Unknown or absent origin values are a silent no-op upstream, so they
    /// map to `None` rather than an error.
    pub fn from_query(search: &str) -> Option<Self> {
        match query_param(search, ORIGIN_PARAM)? {
            ORIGIN_LIKED_PROFILES => Some(Self::LikedProfiles),
            ORIGIN_MATCHES => Some(Self::Matches),
            _ => None,
        }
    }

    pub fn listing_path(self) -> &'static str {
        match self {
            Self::LikedProfiles => LIKED_PROFILES_PATH,
            Self::Matches => MATCHES_PATH,
        }
    }
}

pub fn new_match_banner_requested(search: &str) -> bool {
    query_param(search, NEW_MATCH_PARAM) == Some("true")
}

/// Authentication flags the index template embeds on `<body>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LandingFlags {
    pub authenticated: bool,
    pub has_profile: bool,
}

pub fn cta_destination(flags: LandingFlags) -> &'static str {
    if !flags.authenticated {
        return SIGNUP_PATH;
    }
    if flags.has_profile {
        PROFILE_LIST_PATH
    } else {
        PROFILE_CREATE_PATH
    }
}

pub fn secondary_destination(flags: LandingFlags) -> &'static str {
    if flags.authenticated {
        PROFILE_LIST_PATH
    } else {
        LOGIN_PATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_param_reads_first_occurrence() {
        assert_eq!(
            query_param("?origin=matches&origin=liked_profiles", ORIGIN_PARAM),
            Some("matches")
        );
    }

    #[test]
    fn query_param_accepts_search_without_question_mark() {
        assert_eq!(query_param("new_match=true", NEW_MATCH_PARAM), Some("true"));
    }

    #[test]
    fn query_param_treats_valueless_key_as_empty() {
        assert_eq!(query_param("?origin", ORIGIN_PARAM), Some(""));
    }

    #[test]
    fn query_param_misses_absent_key() {
        assert_eq!(query_param("?page=2", ORIGIN_PARAM), None);
        assert_eq!(query_param("", ORIGIN_PARAM), None);
    }

    #[test]
    fn discover_origin_maps_to_listing_paths() {
        let liked =
            DiscoverOrigin::from_query("?origin=liked_profiles").expect("liked_profiles origin");
        assert_eq!(liked.listing_path(), LIKED_PROFILES_PATH);

        let matches = DiscoverOrigin::from_query("?origin=matches").expect("matches origin");
        assert_eq!(matches.listing_path(), MATCHES_PATH);
    }

    #[test]
    fn discover_origin_ignores_unknown_values() {
        assert_eq!(DiscoverOrigin::from_query("?origin=discover"), None);
        assert_eq!(DiscoverOrigin::from_query("?page=2"), None);
    }

    #[test]
    fn new_match_banner_requires_exact_true() {
        assert!(new_match_banner_requested("?new_match=true"));
        assert!(!new_match_banner_requested("?new_match=1"));
        assert!(!new_match_banner_requested("?origin=matches"));
    }

    #[test]
    fn cta_routes_anonymous_visitors_to_signup() {
        let destination = cta_destination(LandingFlags::default());
        assert_eq!(destination, SIGNUP_PATH);
    }

    #[test]
    fn cta_routes_profileless_members_to_profile_creation() {
        let destination = cta_destination(LandingFlags {
            authenticated: true,
            has_profile: false,
        });
        assert_eq!(destination, PROFILE_CREATE_PATH);
    }

    #[test]
    fn cta_routes_members_with_profiles_to_listing() {
        let destination = cta_destination(LandingFlags {
            authenticated: true,
            has_profile: true,
        });
        assert_eq!(destination, PROFILE_LIST_PATH);
    }

    #[test]
    fn secondary_control_routes_by_authentication() {
        assert_eq!(secondary_destination(LandingFlags::default()), LOGIN_PATH);
        assert_eq!(
            secondary_destination(LandingFlags {
                authenticated: true,
                has_profile: false,
            }),
            PROFILE_LIST_PATH
        );
    }
}
