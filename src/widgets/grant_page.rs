use super::super::prelude::*;
use super::grant_detail_row::{GrantDetailRow, GrantDetailRowType};

use glib::subclass::Signal;
use std::cell::RefCell;
use std::sync::OnceLock;

const ROW_ACTIVATED_SIGNAL: &str = "row-activated";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/org/artgrants/art_grants/grant_page.ui")]
    #[properties(wrapper_type = super::GrantPage)]
    pub struct GrantPage {
        #[template_child(id = "grant-page-scrolled-window")]
        pub scrolled_window: TemplateChild<gtk::ScrolledWindow>,
        #[template_child(id = "grant-page-details-group")]
        pub details_group: TemplateChild<adw::PreferencesGroup>,
        #[template_child(id = "grant-page-application-group")]
        pub application_group: TemplateChild<adw::PreferencesGroup>,

        #[property(get, set, name = "grant-name")]
        pub grant_name: RefCell<String>,

        pub rows: RefCell<Vec<(GrantDetailRow, GrantDetailRowType, bool)>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for GrantPage {
        const NAME: &'static str = "GrantPage";
        type Type = super::GrantPage;
        type ParentType = adw::NavigationPage;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
            GrantDetailRowType::ensure_type();
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for GrantPage {
        fn constructed(&self) {
            self.parent_constructed();
            let obj = self.obj();
            obj.bind_property("grant-name", &*obj, "title")
                .sync_create()
                .build();
        }

        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<[Signal; 1]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [
                    Signal::builder(ROW_ACTIVATED_SIGNAL)
                        .param_types([GrantDetailRow::static_type(), GrantDetailRowType::static_type()])
                        .build()
                ]
            })
        }

        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for GrantPage {}
    impl NavigationPageImpl for GrantPage {}
}

glib::wrapper! {
    pub struct GrantPage(ObjectSubclass<imp::GrantPage>)
        @extends adw::NavigationPage, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl GrantPage {

    fn group(&self, application: bool) -> &adw::PreferencesGroup {
        let imp = self.imp();
        if application { &imp.application_group } else { &imp.details_group }
    }

    fn setup_row_activation(&self, row: &GrantDetailRow, row_type: GrantDetailRowType) -> glib::SignalHandlerId {
        let this_weak = self.downgrade();
        row.connect_activated(move |activated_row| {
            if let Some(this) = this_weak.upgrade() {
                this.emit_by_name::<()>(ROW_ACTIVATED_SIGNAL, &[&activated_row, &row_type]);
            }
        })
    }

    /// Adds a row to the details group.
    pub fn append_detail(&self, row: GrantDetailRow, row_type: GrantDetailRowType) {
        self.append_row(row, row_type, false);
    }

    /// Adds a row to the group describing how to apply.
    pub fn append_application_detail(&self, row: GrantDetailRow) {
        self.append_row(row, GrantDetailRowType::Detail, true);
    }

    fn append_row(&self, row: GrantDetailRow, row_type: GrantDetailRowType, application: bool) {
        self.group(application).add(&row);
        self.setup_row_activation(&row, row_type);
        self.imp().rows.borrow_mut().push((row, row_type, application));
    }

    pub fn remove_all_rows(&self) {
        let rows: Vec<_> = self.imp().rows.borrow_mut().drain(..).collect();
        for (row, _row_type, application) in rows {
            self.group(application).remove(&row);
        }
    }

    pub fn scroll_to_top(&self) {
        self.imp().scrolled_window.vadjustment().set_value(0.0);
    }

    pub fn connect_row_activated<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, &GrantDetailRow, GrantDetailRowType) + 'static
    {
        self.connect_local(ROW_ACTIVATED_SIGNAL, false, move |values| {
            let this = values[0].get::<Self>().ok()?;
            let row = values[1].get::<GrantDetailRow>().ok()?;
            let row_type = values[2].get::<GrantDetailRowType>().ok()?;
            callback(&this, &row, row_type);
            None
        })
    }
}
