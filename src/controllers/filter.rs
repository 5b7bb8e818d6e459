use super::super::grant_filter::GrantFilter;
use super::super::route::Route;
use super::super::ui::Ui;
use super::super::widgets::{GrantRowWidget, NavigationPage};

use std::rc::{Rc, Weak};

struct State {
    ui: Ui,
    filter: GrantFilter
}

pub struct WeakFilter {
    state: Weak<State>
}

impl WeakFilter {
    pub fn upgrade(&self) -> Option<Filter> {
        self.state.upgrade().map(|state| Filter { state })
    }
}

/// Keeps the listing rows, the empty state and the shown location in step
/// with the filter widgets.
#[derive(Clone)]
pub struct Filter {
    state: Rc<State>
}

impl Filter {

    pub fn new(ui: Ui, filter: GrantFilter) -> Self {
        let state = State { ui, filter };
        let this = Self { state: Rc::new(state) };
        this.setup_criteria_changed();
        this.update_results();
        this
    }

    /// Brings the listing forward and focuses its search entry.
    pub fn activate(&self) -> bool {
        let navigation = self.state.ui.navigation();
        if navigation.page() != Some(NavigationPage::Grants) {
            navigation.replace_with_page(NavigationPage::Grants);
        }
        self.state.ui.grants_page().focus_search()
    }

    pub fn clear(&self) {
        tracing::debug!("clearing filters");
        self.state.ui.grants_page().clear_criteria();
    }

    fn setup_criteria_changed(&self) {
        let this_weak = self.downgrade();
        self.state.ui.grants_page().connect_criteria_changed(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.update_results();
            }
        });
    }

    fn update_results(&self) {
        let grants_page = self.state.ui.grants_page();
        let criteria = grants_page.criteria();
        let results = self.state.filter.apply(&criteria);

        grants_page.apply_row_filter(|row: &GrantRowWidget| {
            results.matches.contains(&(row.index() as usize))
        });
        grants_page.set_empty(!results.has_any_matches);
        grants_page.set_location(&Route::Grants(criteria).to_string());
    }

    pub fn downgrade(&self) -> WeakFilter {
        let state = Rc::downgrade(&self.state);
        WeakFilter { state }
    }
}
