use super::super::prelude::*;
use super::super::constants;
use super::super::ui::Ui;
use super::filter::Filter;

use gtk::gio;

pub struct Actions {
    application: adw::Application,
    ui: Ui,
    filter: Filter,
}

impl Actions {
    pub fn new(application: adw::Application, ui: Ui, filter: Filter) -> Self {
        let this = Self { application, ui, filter };
        this.setup_quit_action();
        this.setup_search_action();
        this.setup_clear_filters_action();
        this.setup_about_action();
        this.setup_menu();
        this
    }

    fn setup_quit_action(&self) {
        let quit_action = gio::SimpleAction::new("quit", None);
        self.connect_quit_handler(&quit_action);
        self.application.add_action(&quit_action);
        self.application.set_accels_for_action("app.quit", &["<Ctrl>q"]);
    }

    fn connect_quit_handler(&self, quit_action: &gio::SimpleAction) {
        let application_weak = self.application.downgrade();
        quit_action.connect_activate(move |_action, _| {
            if let Some(application) = application_weak.upgrade() {
                application.quit();
            }
        });
    }

    fn setup_search_action(&self) {
        let search_action = gio::SimpleAction::new("search", None);
        self.connect_search_handler(&search_action);
        self.application.add_action(&search_action);
        self.application.set_accels_for_action("app.search", &["<Ctrl>f"]);
    }

    fn connect_search_handler(&self, search_action: &gio::SimpleAction) {
        let filter_weak = self.filter.downgrade();
        search_action.connect_activate(move |_action, _| {
            if let Some(filter) = filter_weak.upgrade() {
                filter.activate();
            }
        });
    }

    fn setup_clear_filters_action(&self) {
        let clear_action = gio::SimpleAction::new("clear-filters", None);
        self.connect_clear_filters_handler(&clear_action);
        self.application.add_action(&clear_action);
        self.application.set_accels_for_action("app.clear-filters", &["<Ctrl>l"]);
    }

    fn connect_clear_filters_handler(&self, clear_action: &gio::SimpleAction) {
        let filter_weak = self.filter.downgrade();
        clear_action.connect_activate(move |_action, _| {
            if let Some(filter) = filter_weak.upgrade() {
                filter.clear();
            }
        });
    }

    fn setup_about_action(&self) {
        let about_action = gio::SimpleAction::new("about", None);
        self.connect_about_handler(&about_action);
        self.application.add_action(&about_action);
    }

    fn connect_about_handler(&self, about_action: &gio::SimpleAction) {
        let ui_weak = self.ui.downgrade();
        about_action.connect_activate(move |_action, _| {
            if let Some(ui) = ui_weak.upgrade() {
                Self::present_about_dialog(&ui);
            }
        });
    }

    fn present_about_dialog(ui: &Ui) {
        let developers: Vec<&str> = constants::APP_AUTHORS
            .split(',')
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .collect();

        let dialog = adw::AboutDialog::builder()
            .application_name(constants::APP_TITLE)
            .application_icon(constants::APP_ID)
            .version(constants::APP_VERSION)
            .website(constants::APP_WEBSITE)
            .comments(constants::APP_ABOUT)
            .license_type(gtk::License::MitX11)
            .build();
        dialog.set_developers(&developers);
        dialog.present(Some(ui.window()));
    }

    fn setup_menu(&self) {
        let menu = gio::Menu::new();
        menu.append(Some("Clear Filters"), Some("app.clear-filters"));

        let application_section = gio::Menu::new();
        application_section.append(Some("About Art Grants Directory"), Some("app.about"));
        application_section.append(Some("Quit"), Some("app.quit"));
        menu.append_section(None, &application_section);

        self.ui.grants_page().set_menu_model(menu.upcast_ref::<gio::MenuModel>());
    }

}
