use crate::criteria::{ALL, Criteria};
use crate::models::Grant;
use crate::repository::Repository;

use std::collections::BTreeSet;
use std::rc::Rc;

pub use crate::slug::slugify;

/// Lowercased, active-only view of a [`Criteria`], prepared once per filter run.
struct Predicate {
    search_term: Option<String>,
    country_filter: Option<String>,
    discipline_filter: Option<String>,
}

impl Predicate {

    fn new(criteria: &Criteria) -> Self {
        let search_term = (!criteria.search_term.is_empty())
            .then(|| criteria.search_term.to_lowercase());
        let country_filter = (criteria.country_filter != ALL)
            .then(|| criteria.country_filter.to_lowercase());
        let discipline_filter = (criteria.discipline_filter != ALL)
            .then(|| criteria.discipline_filter.to_lowercase());

        Self { search_term, country_filter, discipline_filter }
    }

    fn matches_search(&self, grant: &Grant) -> bool {
        self.search_term.as_deref().is_none_or(|term| {
            grant.grant_name.to_lowercase().contains(term)
                || grant.funding_organization.to_lowercase().contains(term)
        })
    }

    fn matches_country(&self, grant: &Grant) -> bool {
        self.country_filter
            .as_deref()
            .is_none_or(|country| grant.country.to_lowercase().contains(country))
    }

    fn matches_discipline(&self, grant: &Grant) -> bool {
        self.discipline_filter.as_deref().is_none_or(|discipline| {
            grant.eligible_disciplines
                .iter()
                .any(|eligible| eligible.to_lowercase() == discipline)
        })
    }

    fn matches(&self, grant: &Grant) -> bool {
        self.matches_search(grant)
            && self.matches_country(grant)
            && self.matches_discipline(grant)
    }
}

/// Grants matching every active criterion, in dataset order.
pub fn filter_grants<'a>(grants: &'a [Grant], criteria: &Criteria) -> Vec<&'a Grant> {
    let predicate = Predicate::new(criteria);
    grants.iter().filter(|grant| predicate.matches(grant)).collect()
}

/// Same as [`filter_grants`], returning positions in `grants`.
pub fn filter_grant_indices(grants: &[Grant], criteria: &Criteria) -> Vec<usize> {
    let predicate = Predicate::new(criteria);
    grants
        .iter()
        .enumerate()
        .filter_map(|(index, grant)| predicate.matches(grant).then_some(index))
        .collect()
}

/// Every discipline named by any grant, once each, sorted. Case is preserved,
/// so "Sculpture" and "sculpture" are two entries.
pub fn distinct_disciplines<'a>(grants: &'a [Grant]) -> Vec<&'a str> {
    grants
        .iter()
        .flat_map(|grant| grant.eligible_disciplines.iter().copied())
        .collect::<BTreeSet<&'a str>>()
        .into_iter()
        .collect()
}

/// First grant whose name slugifies to `slug`, scanning in dataset order.
pub fn find_by_slug<'a>(grants: &'a [Grant], slug: &str) -> Option<&'a Grant> {
    grants.iter().find(|grant| slugify(grant.grant_name) == slug)
}

pub struct FilterResults {
    pub matches: BTreeSet<usize>,
    pub has_any_matches: bool,
}

struct FilterIndex {
    repository: Repository<'static>,
    disciplines: Vec<&'static str>,
}

/// Filtering over the compiled catalog, shared by the listing controllers.
#[derive(Clone)]
pub struct GrantFilter {
    index: Rc<FilterIndex>,
}

impl GrantFilter {

    pub fn new(repository: Repository<'static>) -> Self {
        let disciplines = distinct_disciplines(repository.grants());
        let index = Rc::new(FilterIndex { repository, disciplines });
        Self { index }
    }

    pub fn disciplines(&self) -> &[&'static str] {
        &self.index.disciplines
    }

    pub fn apply(&self, criteria: &Criteria) -> FilterResults {
        let matches: BTreeSet<usize> = filter_grant_indices(self.index.repository.grants(), criteria)
            .into_iter()
            .collect();
        let has_any_matches = !matches.is_empty();

        tracing::debug!(
            search = %criteria.search_term,
            country = %criteria.country_filter,
            discipline = %criteria.discipline_filter,
            matches = matches.len(),
            "filtered grants"
        );

        FilterResults { matches, has_any_matches }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(
        grant_name: &'static str,
        funding_organization: &'static str,
        country: &'static str,
        eligible_disciplines: &'static [&'static str]
    ) -> Grant {
        Grant {
            grant_name,
            funding_organization,
            country,
            eligible_disciplines,
            ..Grant::default()
        }
    }

    fn dataset() -> Vec<Grant> {
        vec![
            grant("Emerging Artist Fund", "City Arts Council", "USA", &["Painting", "Sculpture"]),
            grant("Studio Residency", "Emerging Trust", "United Kingdom", &["Film"]),
            grant("Northern Lights Award", "Prairie Foundation", "Canada", &["Painting", "Photography"]),
            grant("Open Call", "Harbour Arts", "UK", &[]),
        ]
    }

    fn names<'a>(grants: &[&'a Grant]) -> Vec<&'a str> {
        grants.iter().map(|grant| grant.grant_name).collect()
    }

    #[test]
    fn default_criteria_return_everything_in_order() {
        let grants = dataset();
        let matched = filter_grants(&grants, &Criteria::default());
        let expected: Vec<&Grant> = grants.iter().collect();
        assert_eq!(matched, expected);
    }

    #[test]
    fn search_is_case_insensitive_across_name_and_organization() {
        let grants = dataset();
        let lower = filter_grants(&grants, &Criteria::default().with_search_term("emerging"));
        let upper = filter_grants(&grants, &Criteria::default().with_search_term("EMERGING"));

        assert_eq!(names(&lower), ["Emerging Artist Fund", "Studio Residency"]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn search_ignores_other_fields() {
        let grants = dataset();
        let matched = filter_grants(&grants, &Criteria::default().with_search_term("canada"));
        assert!(matched.is_empty());
    }

    #[test]
    fn country_filter_is_a_lowercase_substring_test() {
        let grants = dataset();

        let uk = filter_grants(&grants, &Criteria::default().with_country_filter("UK"));
        assert_eq!(names(&uk), ["Open Call"]);

        let united = filter_grants(&grants, &Criteria::default().with_country_filter("United"));
        assert_eq!(names(&united), ["Studio Residency"]);

        let usa = filter_grants(&grants, &Criteria::default().with_country_filter("usa"));
        assert_eq!(names(&usa), ["Emerging Artist Fund"]);
    }

    #[test]
    fn discipline_filter_requires_whole_case_insensitive_match() {
        let grants = dataset();

        let painting = filter_grants(&grants, &Criteria::default().with_discipline_filter("painting"));
        assert_eq!(names(&painting), ["Emerging Artist Fund", "Northern Lights Award"]);

        let partial = filter_grants(&grants, &Criteria::default().with_discipline_filter("paint"));
        assert!(partial.is_empty());
    }

    #[test]
    fn missing_disciplines_never_match_a_discipline_filter() {
        let grants = [grant("Open Call", "Harbour Arts", "UK", &[])];
        assert!(filter_grants(&grants, &Criteria::default().with_discipline_filter("Film")).is_empty());
        assert_eq!(filter_grants(&grants, &Criteria::default()).len(), 1);
    }

    #[test]
    fn all_active_criteria_must_hold() {
        let grants = [
            grant("Painting Prize", "Arts Trust", "USA", &["Painting"]),
            grant("Painting Prize North", "Arts Trust", "Canada", &["Painting"]),
            grant("Painting Support", "Arts Trust", "USA", &["Film"]),
        ];
        let criteria = Criteria::new("prize", "USA", "Painting");

        let matched = filter_grants(&grants, &criteria);
        assert_eq!(names(&matched), ["Painting Prize"]);
        assert_eq!(filter_grant_indices(&grants, &criteria), [0_usize]);
    }

    #[test]
    fn sentinel_is_compared_exactly() {
        let grants = dataset();
        let matched = filter_grants(&grants, &Criteria::default().with_country_filter("all"));
        assert!(matched.is_empty());
    }

    #[test]
    fn distinct_disciplines_are_deduplicated_and_sorted() {
        let grants = [
            grant("A", "", "", &["Sculpture", "Painting"]),
            grant("B", "", "", &["Painting", "Film"]),
            grant("C", "", "", &["sculpture"]),
            grant("D", "", "", &[]),
        ];
        assert_eq!(distinct_disciplines(&grants), ["Film", "Painting", "Sculpture", "sculpture"]);
    }

    #[test]
    fn slugs_lowercase_and_hyphenate_whitespace_runs() {
        assert_eq!(slugify("Emerging Artist Fund"), "emerging-artist-fund");
        assert_eq!(slugify("Arts  &\tLetters\nGrant"), "arts-&-letters-grant");
        assert_eq!(slugify(" Trailing "), "-trailing-");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slug_lookup_finds_grant_or_reports_not_found() {
        let grants = dataset();
        let slug = slugify("Emerging Artist Fund");

        let found = find_by_slug(&grants, &slug);
        assert_eq!(found.map(|grant| grant.grant_name), Some("Emerging Artist Fund"));
        assert!(find_by_slug(&grants, "nonexistent-grant").is_none());
    }

    #[test]
    fn colliding_slugs_resolve_to_the_first_grant() {
        let grants = [
            grant("Open  Call", "First", "", &[]),
            grant("open call", "Second", "", &[]),
        ];
        let found = find_by_slug(&grants, "open-call");
        assert_eq!(found.map(|grant| grant.funding_organization), Some("First"));
    }

    #[test]
    fn compiled_catalog_disciplines_keep_case_variants() {
        let filter = GrantFilter::new(Repository::new(&crate::constants::APP_CATALOG));
        let disciplines = filter.disciplines();

        assert!(disciplines.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(disciplines.contains(&"Printmaking"));
        assert!(disciplines.contains(&"printmaking"));
    }

    #[test]
    fn filter_results_report_matching_indices() {
        let filter = GrantFilter::new(Repository::new(&crate::constants::APP_CATALOG));

        let everything = filter.apply(&Criteria::default());
        assert_eq!(everything.matches.len(), crate::constants::APP_CATALOG.grants.len());
        assert!(everything.has_any_matches);

        let nothing = filter.apply(&Criteria::default().with_search_term("zzz-no-such-grant"));
        assert!(nothing.matches.is_empty());
        assert!(!nothing.has_any_matches);
    }

    #[test]
    fn filtering_is_repeatable_and_leaves_input_untouched() {
        let grants = dataset();
        let snapshot = grants.clone();
        let criteria = Criteria::new("a", "U", "Painting");

        let first = filter_grants(&grants, &criteria);
        let second = filter_grants(&grants, &criteria);

        assert_eq!(first, second);
        assert_eq!(grants, snapshot);
    }
}
