use super::criteria::Criteria;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use std::fmt;
use url::Url;

const LOCATION_BASE: &str = "app://art-grants/";
const GRANTS_SEGMENT: &str = "grants";
const ABOUT_SEGMENT: &str = "about";

const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A location inside the directory, e.g. `/grants?country=UK` or
/// `/grants/emerging-artist-fund`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Grants(Criteria),
    Grant(String),
    About,
}

impl Route {

    /// Parses a location. Anything unrecognised, including garbage, is `Home`.
    pub fn parse(location: &str) -> Self {
        let Ok(url) = Url::parse(LOCATION_BASE).and_then(|base| base.join(location.trim())) else {
            return Self::Home;
        };

        let segments: Vec<String> = url
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|segment| !segment.is_empty())
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
            .collect();

        match segments.as_slice() {
            [grants] if grants == GRANTS_SEGMENT => Self::Grants(Criteria::from_query_pairs(url.query_pairs())),
            [grants, slug] if grants == GRANTS_SEGMENT => Self::Grant(slug.clone()),
            [about] if about == ABOUT_SEGMENT => Self::About,
            _ => Self::Home,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(formatter, "/"),
            Self::About => write!(formatter, "/{ABOUT_SEGMENT}"),
            Self::Grant(slug) => write!(formatter, "/{GRANTS_SEGMENT}/{}", utf8_percent_encode(slug, SEGMENT)),
            Self::Grants(criteria) => {
                let query = criteria.to_query();
                if query.is_empty() {
                    write!(formatter, "/{GRANTS_SEGMENT}")
                } else {
                    write!(formatter, "/{GRANTS_SEGMENT}?{query}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::ALL;

    #[test]
    fn parses_listing_with_query() {
        let route = Route::parse("/grants?country=Canada&search=film");
        assert_eq!(route, Route::Grants(Criteria::new("film", "Canada", ALL)));
        assert_eq!(Route::parse("/grants"), Route::Grants(Criteria::default()));
        assert_eq!(Route::parse("grants/"), Route::Grants(Criteria::default()));
    }

    #[test]
    fn parses_detail_slug() {
        assert_eq!(
            Route::parse("/grants/emerging-artist-fund"),
            Route::Grant("emerging-artist-fund".to_string())
        );
        assert_eq!(
            Route::parse("/grants/caf%C3%A9-fund%3F"),
            Route::Grant("café-fund?".to_string())
        );
    }

    #[test]
    fn unknown_locations_fall_back_to_home() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/grants/a/b"), Route::Home);
        assert_eq!(Route::parse("/nowhere"), Route::Home);
        assert_eq!(Route::parse("/about"), Route::About);
    }

    #[test]
    fn formats_locations() {
        assert_eq!(Route::Home.to_string(), "/");
        assert_eq!(Route::Grants(Criteria::default()).to_string(), "/grants");
        assert_eq!(
            Route::Grants(Criteria::new("new work", "UK", "Film")).to_string(),
            "/grants?search=new+work&country=UK"
        );
        assert_eq!(Route::Grant("a-b?c".to_string()).to_string(), "/grants/a-b%3Fc");
    }

    #[test]
    fn formatted_detail_locations_parse_back() {
        for slug in ["emerging-artist-fund", "arts-&-letters", "100%-film", "café/fund"] {
            let route = Route::Grant(slug.to_string());
            assert_eq!(Route::parse(&route.to_string()), route);
        }
    }
}
