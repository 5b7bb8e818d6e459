use std::borrow::Cow;
use url::form_urlencoded;

/// Filter value meaning "no filtering on this dimension".
pub const ALL: &str = "All";

/// Country filter values offered by the listing page.
pub const COUNTRY_OPTIONS: [&str; 3] = ["USA", "Canada", "UK"];

const SEARCH_PARAMETER: &str = "search";
const COUNTRY_PARAMETER: &str = "country";

/// The active filters of the listing page.
///
/// A fresh value is built on every change and handed to the grant filter.
/// Only `search_term` and `country_filter` travel through the location query,
/// the discipline stays local to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub search_term: String,
    pub country_filter: String,
    pub discipline_filter: String,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            country_filter: ALL.to_string(),
            discipline_filter: ALL.to_string(),
        }
    }
}

impl Criteria {

    pub fn new(
        search_term: impl Into<String>,
        country_filter: impl Into<String>,
        discipline_filter: impl Into<String>
    ) -> Self {
        Self {
            search_term: search_term.into(),
            country_filter: country_filter.into(),
            discipline_filter: discipline_filter.into(),
        }
    }

    #[must_use]
    pub fn with_search_term(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self
    }

    #[must_use]
    pub fn with_country_filter(mut self, country_filter: impl Into<String>) -> Self {
        self.country_filter = country_filter.into();
        self
    }

    #[must_use]
    pub fn with_discipline_filter(mut self, discipline_filter: impl Into<String>) -> Self {
        self.discipline_filter = discipline_filter.into();
        self
    }

    pub fn from_query(query: &str) -> Self {
        Self::from_query_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    /// Builds criteria from decoded query pairs.
    ///
    /// A missing or empty parameter leaves its criterion at the default, the
    /// first occurrence of a repeated parameter wins and unknown ones are ignored.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>
    {
        let mut search_term = None;
        let mut country_filter = None;

        for (key, value) in pairs {
            if value.is_empty() {
                continue;
            }

            let slot = match &*key {
                SEARCH_PARAMETER => &mut search_term,
                COUNTRY_PARAMETER => &mut country_filter,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        let defaults = Self::default();
        Self {
            search_term: search_term.unwrap_or(defaults.search_term),
            country_filter: country_filter.unwrap_or(defaults.country_filter),
            discipline_filter: defaults.discipline_filter,
        }
    }

    /// Form-encoded query holding the non-default search term and country.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if !self.search_term.is_empty() {
            serializer.append_pair(SEARCH_PARAMETER, &self.search_term);
        }

        if self.country_filter != ALL {
            serializer.append_pair(COUNTRY_PARAMETER, &self.country_filter);
        }

        serializer.finish()
    }
}

/// The filter values behind the positions of a drop-down.
///
/// Position 0 is always `ALL`. A value outside the offered options, such as a
/// country read from a location, is appended after them and dropped again once
/// the selection returns to an offered position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    all_label: String,
    values: Vec<String>,
    offered: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::new(ALL, &[])
    }
}

impl FilterOptions {

    pub fn new(all_label: impl Into<String>, options: &[&str]) -> Self {
        let values: Vec<String> = std::iter::once(ALL)
            .chain(options.iter().copied())
            .map(str::to_string)
            .collect();

        Self {
            all_label: all_label.into(),
            offered: values.len(),
            values,
        }
    }

    /// What the drop-down shows, in position order.
    pub fn labels(&self) -> Vec<&str> {
        std::iter::once(self.all_label.as_str())
            .chain(self.values.iter().skip(1).map(String::as_str))
            .collect()
    }

    pub fn value(&self, position: usize) -> &str {
        self.values.get(position).map_or(ALL, String::as_str)
    }

    /// Position holding `value`, appended when it is not offered. The flag
    /// tells whether the labels changed.
    pub fn select(&mut self, value: &str) -> (usize, bool) {
        match self.values.iter().position(|candidate| candidate == value) {
            Some(position) => (position, self.settle(position)),
            None => {
                self.values.truncate(self.offered);
                self.values.push(value.to_string());
                (self.values.len() - 1, true)
            }
        }
    }

    /// Drops the appended value when `position` is an offered one. Returns
    /// whether the labels changed.
    pub fn settle(&mut self, position: usize) -> bool {
        if position < self.offered && self.values.len() > self.offered {
            self.values.truncate(self.offered);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_filtering() {
        let criteria = Criteria::default();
        assert_eq!(criteria.search_term, "");
        assert_eq!(criteria.country_filter, ALL);
        assert_eq!(criteria.discipline_filter, ALL);
        assert_eq!(criteria.to_query(), "");
    }

    #[test]
    fn reads_search_and_country_parameters() {
        let criteria = Criteria::from_query("country=UK&search=emerging+artist");
        assert_eq!(criteria, Criteria::new("emerging artist", "UK", ALL));
    }

    #[test]
    fn absent_or_empty_parameters_reset_to_defaults() {
        assert_eq!(Criteria::from_query("search=film"), Criteria::default().with_search_term("film"));
        assert_eq!(Criteria::from_query("country="), Criteria::default());
        assert_eq!(Criteria::from_query(""), Criteria::default());
    }

    #[test]
    fn discipline_is_not_read_from_query() {
        let criteria = Criteria::from_query("discipline=Painting&country=Canada");
        assert_eq!(criteria.discipline_filter, ALL);
        assert_eq!(criteria.country_filter, "Canada");
    }

    #[test]
    fn first_repeated_parameter_wins() {
        let criteria = Criteria::from_query("country=USA&country=UK");
        assert_eq!(criteria.country_filter, "USA");
    }

    #[test]
    fn writes_only_non_default_parameters() {
        let criteria = Criteria::new("arts & letters", "Canada", "Painting");
        assert_eq!(criteria.to_query(), "search=arts+%26+letters&country=Canada");
        assert_eq!(Criteria::from_query(&criteria.to_query()), criteria.with_discipline_filter(ALL));
    }

    fn country_options() -> FilterOptions {
        FilterOptions::new("All Countries", &COUNTRY_OPTIONS)
    }

    #[test]
    fn offered_values_select_in_place() {
        let mut options = country_options();
        assert_eq!(options.labels(), ["All Countries", "USA", "Canada", "UK"]);
        assert_eq!(options.select("Canada"), (2, false));
        assert_eq!(options.value(2), "Canada");
        assert_eq!(options.value(0), ALL);
        assert_eq!(options.value(42), ALL);
    }

    #[test]
    fn unknown_value_is_appended_then_dropped() {
        let mut options = country_options();

        assert_eq!(options.select("Scotland"), (4, true));
        assert_eq!(options.labels(), ["All Countries", "USA", "Canada", "UK", "Scotland"]);
        assert_eq!(options.select("Scotland"), (4, false));

        assert_eq!(options.select(ALL), (0, true));
        assert_eq!(options, country_options());
    }

    #[test]
    fn unknown_values_replace_each_other() {
        let mut options = country_options();
        options.select("Scotland");
        assert_eq!(options.select("Wales"), (4, true));
        assert_eq!(options.labels(), ["All Countries", "USA", "Canada", "UK", "Wales"]);
    }

    #[test]
    fn settling_on_an_offered_position_drops_the_extra_value() {
        let mut options = country_options();
        options.select("Scotland");

        assert!(!options.settle(4));
        assert!(options.settle(1));
        assert_eq!(options.labels().len(), 4);
        assert!(!options.settle(1));
    }
}
