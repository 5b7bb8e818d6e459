use super::super::prelude::*;
use super::super::constants::NOT_SPECIFIED;
use super::super::criteria::Criteria;
use super::super::models::Grant;
use super::super::repository::Repository;
use super::super::route::Route;
use super::super::ui::Ui;
use super::super::widgets::{GrantDetailRowType, GrantDetailRowWidget, NavigationPage};

use std::rc::{Rc, Weak};

struct State {
    ui: Ui,
    repository: Repository<'static>
}

pub struct WeakRouter {
    state: Weak<State>
}

impl WeakRouter {
    pub fn upgrade(&self) -> Option<Router> {
        self.state.upgrade().map(|state| Router { state })
    }
}

/// Turns locations into pages.
#[derive(Clone)]
pub struct Router {
    state: Rc<State>
}

impl Router {

    pub fn new(ui: Ui, repository: Repository<'static>) -> Self {
        let state = State { ui, repository };
        let this = Self { state: Rc::new(state) };
        this.setup_back_to_grants();
        this
    }

    pub fn open(&self, route: &Route) {
        tracing::info!(location = %route, "opening location");

        match route {
            Route::Home => self.show_listing(&Criteria::default()),
            Route::Grants(criteria) => self.show_listing(criteria),
            Route::Grant(slug) => self.show_grant(slug),
            Route::About => {
                self.show_grants();
                if let Err(error) = WidgetExt::activate_action(self.state.ui.window(), "app.about", None) {
                    tracing::warn!(%error, "failed to show about dialog");
                }
            }
        }
    }

    /// Applies the search term and country of `criteria`. The discipline
    /// never travels through locations, the current one is kept.
    fn show_listing(&self, criteria: &Criteria) {
        let grants_page = self.state.ui.grants_page();
        let discipline_filter = grants_page.criteria().discipline_filter;
        grants_page.set_criteria(&criteria.clone().with_discipline_filter(discipline_filter));
        self.show_grants();
    }

    fn show_grants(&self) {
        self.state.ui.navigation().replace_with_page(NavigationPage::Grants);
    }

    fn show_grant(&self, slug: &str) {
        if let Some((_, grant)) = self.state.repository.grant_by_slug(slug) {
            self.update_grant_details(grant);
            self.state.ui.navigation().push_page(NavigationPage::Grant);
        } else {
            tracing::warn!(slug, "no grant matches location");
            self.state.ui.not_found_page().set_slug(slug);
            self.state.ui.navigation().push_page(NavigationPage::NotFound);
        }
    }

    fn update_grant_details(&self, grant: &Grant) {
        let grant_page = self.state.ui.grant_page();
        grant_page.set_grant_name(grant.grant_name);
        grant_page.remove_all_rows();
        grant_page.scroll_to_top();

        grant_page.append_detail(
            GrantDetailRowWidget::new("Funding Organization", or_not_specified(grant.funding_organization)),
            GrantDetailRowType::Detail
        );

        if !grant.website.is_empty() {
            grant_page.append_detail(GrantDetailRowWidget::from_website(grant.website), GrantDetailRowType::Website);
        }

        grant_page.append_detail(
            GrantDetailRowWidget::from_country(or_not_specified(grant.country), grant.flag_country()),
            GrantDetailRowType::Detail
        );
        grant_page.append_detail(
            GrantDetailRowWidget::new("Grant Amount", or_not_specified(grant.grant_amount)),
            GrantDetailRowType::Detail
        );
        grant_page.append_detail(
            GrantDetailRowWidget::from_list("Eligible Disciplines", grant.eligible_disciplines, NOT_SPECIFIED),
            GrantDetailRowType::Detail
        );

        grant_page.append_application_detail(
            GrantDetailRowWidget::new("Application Frequency", or_not_specified(grant.application_frequency))
        );
        grant_page.append_application_detail(
            GrantDetailRowWidget::new("Key Requirements", or_not_specified(grant.key_requirements))
        );
        grant_page.append_application_detail(
            GrantDetailRowWidget::from_list("Typical Deadlines", grant.typical_deadlines, NOT_SPECIFIED)
        );
    }

    fn setup_back_to_grants(&self) {
        let this_weak = self.downgrade();
        self.state.ui.not_found_page().connect_back_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.show_grants();
            }
        });
    }

    pub fn downgrade(&self) -> WeakRouter {
        let state = Rc::downgrade(&self.state);
        WeakRouter { state }
    }
}

fn or_not_specified(value: &str) -> &str {
    if value.is_empty() { NOT_SPECIFIED } else { value }
}
