use crate::prelude::*;
use crate::constants::{REQUIREMENTS_PLACEHOLDER, REQUIREMENTS_PREVIEW_LENGTH};
use crate::models::Grant;
use std::cell::{Cell, RefCell};

mod imp {

    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/org/artgrants/art_grants/grant_row.ui")]
    #[properties(wrapper_type = super::GrantRow)]
    pub struct GrantRow {
        #[template_child(id = "grant-row-flag")]
        pub flag_label: TemplateChild<gtk::Label>,

        #[property(get, set)]
        pub flag: RefCell<String>,
        #[property(get, set)]
        pub country: RefCell<String>,
        #[property(get, set)]
        pub amount: RefCell<String>,
        #[property(get, construct_only)]
        pub index: Cell<u32>,
        #[property(get, construct_only)]
        pub slug: RefCell<String>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for GrantRow {
        const NAME: &'static str = "GrantRow";
        type Type = super::GrantRow;
        type ParentType = adw::ActionRow;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for GrantRow {
        fn constructed(&self) {
            self.parent_constructed();
            let obj = self.obj();
            obj.update_flag();
            obj.connect_flag_notify(|row| row.update_flag());
        }
    }

    impl WidgetImpl for GrantRow {}
    impl ListBoxRowImpl for GrantRow {}
    impl PreferencesRowImpl for GrantRow {}
    impl ActionRowImpl for GrantRow {}
}

glib::wrapper! {
    pub struct GrantRow(ObjectSubclass<imp::GrantRow>)
        @extends adw::ActionRow, adw::PreferencesRow, gtk::ListBoxRow, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Actionable;
}

impl GrantRow {

    fn update_flag(&self) {
        let flag = self.flag();
        let flag_label = &self.imp().flag_label;
        flag_label.set_label(&flag);
        flag_label.set_visible(!flag.is_empty());
    }

    pub fn from_grant(grant: &Grant, index: usize) -> Self {
        let escaped_name = glib::markup_escape_text(grant.grant_name);
        let requirements = grant
            .requirements_preview(REQUIREMENTS_PREVIEW_LENGTH)
            .map_or_else(
                || REQUIREMENTS_PLACEHOLDER.to_string(),
                |preview| format!("Requirements: {preview}")
            );
        let escaped_requirements = glib::markup_escape_text(&requirements);

        let this: Self = glib::Object::builder()
            .property("title", escaped_name.as_str())
            .property("subtitle", escaped_requirements.as_str())
            .property("flag", grant.flag_country().map_or("", |country| country.flag()))
            .property("country", grant.country)
            .property("amount", grant.grant_amount)
            .property("index", index as u32)
            .property("slug", grant.slug())
            .build();

        if let Some(country) = grant.flag_country() {
            this.imp().flag_label.set_tooltip_text(Some(country.display_name()));
        }

        this
    }

}
