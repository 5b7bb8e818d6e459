use super::super::route::Route;
use super::super::ui::Ui;
use super::router::Router;

use std::rc::{Rc, Weak};

struct State {
    ui: Ui,
    router: Router
}

struct WeakGrantActivation {
    state: Weak<State>
}

impl WeakGrantActivation {
    fn upgrade(&self) -> Option<GrantActivation> {
        self.state.upgrade().map(|state| GrantActivation { state })
    }
}

/// Opens the detail page of an activated listing row.
pub struct GrantActivation {
    state: Rc<State>
}

impl GrantActivation {

    pub fn new(ui: Ui, router: Router) -> Self {
        let state = State { ui, router };
        let this = Self { state: Rc::new(state) };
        this.setup_rows_activation();
        this
    }

    fn setup_rows_activation(&self) {
        let this_weak = self.downgrade();
        self.state.ui.grants_page().connect_grant_activated(move |_, row| {
            if let Some(this) = this_weak.upgrade() {
                this.state.router.open(&Route::Grant(row.slug()));
            }
        });
    }

    fn downgrade(&self) -> WeakGrantActivation {
        let state = Rc::downgrade(&self.state);
        WeakGrantActivation { state }
    }

}
