use super::super::prelude::*;
use super::super::criteria::{Criteria, FilterOptions};
use super::grant_row::GrantRow;

use glib::subclass::Signal;
use std::cell::{Cell, Ref, RefCell};
use std::sync::OnceLock;

const CRITERIA_CHANGED_SIGNAL: &str = "criteria-changed";
const GRANT_ACTIVATED_SIGNAL: &str = "grant-activated";

const RESULTS_STACK_PAGE: &str = "results";
const EMPTY_STACK_PAGE: &str = "empty";

const ALL_COUNTRIES_LABEL: &str = "All Countries";
const ALL_DISCIPLINES_LABEL: &str = "All Disciplines";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/org/artgrants/art_grants/grants_page.ui")]
    pub struct GrantsPage {
        #[template_child(id = "grants-page-window-title")]
        pub window_title: TemplateChild<adw::WindowTitle>,
        #[template_child(id = "grants-page-menu-button")]
        pub menu_button: TemplateChild<gtk::MenuButton>,
        #[template_child(id = "grants-page-search-entry")]
        pub search_entry: TemplateChild<gtk::SearchEntry>,
        #[template_child(id = "grants-page-country-drop-down")]
        pub country_drop_down: TemplateChild<gtk::DropDown>,
        #[template_child(id = "grants-page-discipline-drop-down")]
        pub discipline_drop_down: TemplateChild<gtk::DropDown>,
        #[template_child(id = "grants-page-stack")]
        pub stack: TemplateChild<gtk::Stack>,
        #[template_child(id = "grants-page-scrolled-window")]
        pub scrolled_window: TemplateChild<gtk::ScrolledWindow>,
        #[template_child(id = "grants-page-list-box")]
        pub list_box: TemplateChild<gtk::ListBox>,

        pub country_options: RefCell<FilterOptions>,
        pub discipline_options: RefCell<FilterOptions>,
        pub rows: RefCell<Vec<GrantRow>>,
        pub suppress_changes: Cell<bool>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for GrantsPage {
        const NAME: &'static str = "GrantsPage";
        type Type = super::GrantsPage;
        type ParentType = adw::NavigationPage;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for GrantsPage {
        fn constructed(&self) {
            self.parent_constructed();
            let obj = self.obj();
            obj.set_country_options(&[]);
            obj.set_discipline_options(&[]);
            obj.setup_filter_changes();
            obj.setup_row_activation();
        }

        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<[Signal; 2]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [
                    Signal::builder(CRITERIA_CHANGED_SIGNAL).build(),
                    Signal::builder(GRANT_ACTIVATED_SIGNAL)
                        .param_types([GrantRow::static_type()])
                        .build(),
                ]
            })
        }

        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for GrantsPage {}
    impl NavigationPageImpl for GrantsPage {}
}

glib::wrapper! {
    pub struct GrantsPage(ObjectSubclass<imp::GrantsPage>)
        @extends adw::NavigationPage, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl GrantsPage {

    fn setup_filter_changes(&self) {
        let imp = self.imp();

        let this_weak = self.downgrade();
        imp.search_entry.connect_search_changed(move |_entry| {
            if let Some(this) = this_weak.upgrade() {
                this.emit_criteria_changed();
            }
        });

        let this_weak = self.downgrade();
        imp.country_drop_down.connect_selected_notify(move |drop_down| {
            if let Some(this) = this_weak.upgrade() {
                this.selection_changed(drop_down, &this.imp().country_options);
            }
        });

        let this_weak = self.downgrade();
        imp.discipline_drop_down.connect_selected_notify(move |drop_down| {
            if let Some(this) = this_weak.upgrade() {
                this.selection_changed(drop_down, &this.imp().discipline_options);
            }
        });
    }

    fn setup_row_activation(&self) {
        let this_weak = self.downgrade();
        self.imp().list_box.connect_row_activated(move |_list_box, row| {
            if
                let Some(this) = this_weak.upgrade()
                && let Some(grant_row) = row.downcast_ref::<GrantRow>()
            {
                this.emit_by_name::<()>(GRANT_ACTIVATED_SIGNAL, &[grant_row]);
            }
        });
    }

    fn emit_criteria_changed(&self) {
        if !self.imp().suppress_changes.get() {
            self.emit_by_name::<()>(CRITERIA_CHANGED_SIGNAL, &[]);
        }
    }

    fn selection_changed(&self, drop_down: &gtk::DropDown, options: &RefCell<FilterOptions>) {
        if self.imp().suppress_changes.get() {
            return;
        }

        let position = drop_down.selected() as usize;
        if options.borrow_mut().settle(position) {
            self.quietly(|_| show_options(drop_down, options, position));
        }
        self.emit_criteria_changed();
    }

    /// Runs `change` without announcing the widget updates it makes.
    fn quietly<F: FnOnce(&Self)>(&self, change: F) {
        let suppress_changes = &self.imp().suppress_changes;
        let was_suppressed = suppress_changes.replace(true);
        change(self);
        suppress_changes.set(was_suppressed);
    }

    /// Runs `change` without announcing each intermediate widget update,
    /// then announces the result once.
    fn batch_changes<F: FnOnce(&Self)>(&self, change: F) {
        self.quietly(change);
        self.emit_criteria_changed();
    }

    pub fn set_country_options(&self, options: &[&str]) {
        let imp = self.imp();
        imp.country_options.replace(FilterOptions::new(ALL_COUNTRIES_LABEL, options));
        self.batch_changes(|_| show_options(&imp.country_drop_down, &imp.country_options, 0));
    }

    pub fn set_discipline_options(&self, options: &[&str]) {
        let imp = self.imp();
        imp.discipline_options.replace(FilterOptions::new(ALL_DISCIPLINES_LABEL, options));
        self.batch_changes(|_| show_options(&imp.discipline_drop_down, &imp.discipline_options, 0));
    }

    pub fn criteria(&self) -> Criteria {
        let imp = self.imp();
        Criteria::new(
            imp.search_entry.text(),
            selected_value(&imp.country_drop_down, &imp.country_options),
            selected_value(&imp.discipline_drop_down, &imp.discipline_options),
        )
    }

    pub fn set_criteria(&self, criteria: &Criteria) {
        let imp = self.imp();
        self.batch_changes(|_| {
            if imp.search_entry.text().as_str() != criteria.search_term {
                imp.search_entry.set_text(&criteria.search_term);
            }
            select_value(&imp.country_drop_down, &imp.country_options, &criteria.country_filter);
            select_value(&imp.discipline_drop_down, &imp.discipline_options, &criteria.discipline_filter);
        });
    }

    pub fn clear_criteria(&self) {
        self.set_criteria(&Criteria::default());
    }

    pub fn set_location(&self, location: &str) {
        self.imp().window_title.set_subtitle(location);
    }

    pub fn set_menu_model(&self, menu: &gtk::gio::MenuModel) {
        self.imp().menu_button.set_menu_model(Some(menu));
    }

    pub fn focus_search(&self) -> bool {
        self.imp().search_entry.grab_focus()
    }

    pub fn append_row(&self, row: GrantRow) {
        let imp = self.imp();
        imp.list_box.append(&row);
        imp.rows.borrow_mut().push(row);
    }

    pub fn rows(&self) -> Ref<'_, Vec<GrantRow>> {
        self.imp().rows.borrow()
    }

    /// Shows only the rows accepted by `predicate`.
    pub fn apply_row_filter<F>(&self, predicate: F)
    where
        F: Fn(&GrantRow) -> bool,
    {
        for row in self.rows().iter() {
            row.set_visible(predicate(row));
        }
        self.imp().scrolled_window.vadjustment().set_value(0.0);
    }

    pub fn set_empty(&self, empty: bool) {
        let stack_page = if empty { EMPTY_STACK_PAGE } else { RESULTS_STACK_PAGE };
        self.imp().stack.set_visible_child_name(stack_page);
    }

    pub fn connect_criteria_changed<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self) + 'static
    {
        self.connect_local(CRITERIA_CHANGED_SIGNAL, false, move |values| {
            let this = values[0].get::<Self>().ok()?;
            callback(&this);
            None
        })
    }

    pub fn connect_grant_activated<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, &GrantRow) + 'static
    {
        self.connect_local(GRANT_ACTIVATED_SIGNAL, false, move |values| {
            let this = values[0].get::<Self>().ok()?;
            let row = values[1].get::<GrantRow>().ok()?;
            callback(&this, &row);
            None
        })
    }
}

fn show_options(drop_down: &gtk::DropDown, options: &RefCell<FilterOptions>, position: usize) {
    let model = gtk::StringList::new(&options.borrow().labels());
    drop_down.set_model(Some(&model));
    drop_down.set_selected(position as u32);
}

fn selected_value(drop_down: &gtk::DropDown, options: &RefCell<FilterOptions>) -> String {
    options.borrow().value(drop_down.selected() as usize).to_string()
}

/// Selects the position holding `value`. A value that is not among the
/// offered options, such as a country typed into a location, gets its own
/// entry so that it keeps filtering.
fn select_value(drop_down: &gtk::DropDown, options: &RefCell<FilterOptions>, value: &str) {
    let (position, changed) = options.borrow_mut().select(value);

    if changed {
        show_options(drop_down, options, position);
    } else if drop_down.selected() as usize != position {
        drop_down.set_selected(position as u32);
    }
}
