use super::models::{Catalog, Grant};

#[derive(Debug, Clone, Copy)]
pub struct Repository<'a> {
    catalog: &'a Catalog
}

impl <'a> Repository <'a> {

    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub const fn grants(&self) -> &'static [Grant] {
        self.catalog.grants
    }

    pub const fn len(&self) -> usize {
        self.catalog.grants.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.catalog.grants.is_empty()
    }

    pub fn grant_by_index(&self, index: usize) -> Option<&'static Grant> {
        self.catalog.grants.get(index)
    }

    /// Resolves a slug through the index built with the catalog. When several
    /// grants share a slug the first one in dataset order is returned.
    pub fn grant_by_slug(&self, slug: &str) -> Option<(usize, &'static Grant)> {
        let index = *self.catalog.slugs_map.get(slug)?;
        self.grant_by_index(index).map(|grant| (index, grant))
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::APP_CATALOG;
    use crate::criteria::Criteria;
    use crate::grant_filter::{filter_grants, find_by_slug, slugify};

    #[test]
    fn compiled_catalog_is_not_empty() {
        let repository = Repository::new(&APP_CATALOG);
        assert!(!repository.is_empty());
        assert!(repository.grants().iter().all(|grant| !grant.grant_name.is_empty()));
    }

    #[test]
    fn slug_index_agrees_with_linear_scan() {
        let repository = Repository::new(&APP_CATALOG);

        for grant in repository.grants() {
            let slug = slugify(grant.grant_name);
            let (_, indexed) = repository.grant_by_slug(&slug).expect("every slug is indexed");
            let scanned = find_by_slug(repository.grants(), &slug).expect("every slug is found");
            assert!(std::ptr::eq(indexed, scanned), "slug {slug} resolved to different grants");
        }
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let repository = Repository::new(&APP_CATALOG);
        assert!(repository.grant_by_slug("nonexistent-grant").is_none());
        assert!(repository.grant_by_index(repository.len()).is_none());
    }

    #[test]
    fn null_fields_compile_to_empty_values() {
        let repository = Repository::new(&APP_CATALOG);
        let (_, grant) = repository
            .grant_by_slug("materials-microgrant")
            .expect("grant with null fields is in the catalog");

        assert_eq!(grant.key_requirements, "");
        assert!(grant.eligible_disciplines.is_empty());
        assert!(grant.typical_deadlines.is_empty());
        assert_eq!(grant.requirements_preview(60), None);

        let painting = filter_grants(repository.grants(), &Criteria::default().with_discipline_filter("Painting"));
        assert!(painting.iter().all(|matched| !std::ptr::eq(*matched, grant)));
    }
}
