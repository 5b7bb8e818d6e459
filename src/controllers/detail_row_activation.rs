use super::super::ui::Ui;
use super::super::widgets::{GrantDetailRowType, GrantDetailRowWidget};

use anyhow::anyhow;
use std::rc::{Rc, Weak};

struct State {
    ui: Ui
}

struct WeakDetailRowActivation {
    state: Weak<State>
}

impl WeakDetailRowActivation {
    fn upgrade(&self) -> Option<DetailRowActivation> {
        self.state.upgrade().map(|state| DetailRowActivation { state })
    }
}

/// Opens the website row of the detail page in the default browser.
pub struct DetailRowActivation {
    state: Rc<State>
}

impl DetailRowActivation {

    pub fn new(ui: Ui) -> Self {
        let state = State { ui };
        let this = Self { state: Rc::new(state) };
        this.setup_rows_activation();
        this
    }

    fn setup_rows_activation(&self) {
        let this_weak = self.downgrade();
        self.state.ui.grant_page().connect_row_activated(move |_, row, row_type| {
            if let Some(this) = this_weak.upgrade() {
                match row_type {
                    GrantDetailRowType::Website => this.handle_website_activation(row),
                    GrantDetailRowType::Detail => {}
                }
            }
        });
    }

    fn handle_err(&self, error: &anyhow::Error) {
        self.state.ui.window().notify(&error.to_string());
        tracing::warn!("{error:#}");
    }

    fn handle_website_activation(&self, row: &GrantDetailRowWidget) {
        self.launch_uri(&row.value());
    }

    fn launch_uri(&self, uri: &str) {
        tracing::info!(uri, "opening website");

        let window = self.state.ui.window();
        let this_weak = self.downgrade();
        let uri_owned = uri.to_string();
        gtk::UriLauncher::new(&uri_owned).launch(Some(window), None::<&gtk::gio::Cancellable>, move |result| {
            if
                let Err(e) = result
                && let Some(this) = this_weak.upgrade()
            {
                let error = anyhow!(e).context(format!("Failed to open website: {uri_owned}"));
                this.handle_err(&error);
            }
        });
    }

    fn downgrade(&self) -> WeakDetailRowActivation {
        let state = Rc::downgrade(&self.state);
        WeakDetailRowActivation { state }
    }

}
