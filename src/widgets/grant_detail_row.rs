use super::super::prelude::*;
use super::super::models::Country;

use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, glib::Enum)]
#[enum_type(name = "GrantDetailRowType")]
pub enum GrantDetailRowType {
    Detail,
    Website,
}

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/org/artgrants/art_grants/grant_detail_row.ui")]
    #[properties(wrapper_type = super::GrantDetailRow)]
    pub struct GrantDetailRow {
        #[property(get, set)]
        pub link: Cell<bool>,
        #[property(get, construct_only)]
        pub value: RefCell<String>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for GrantDetailRow {
        const NAME: &'static str = "GrantDetailRow";
        type Type = super::GrantDetailRow;
        type ParentType = adw::ActionRow;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for GrantDetailRow {
        fn constructed(&self) {
            self.parent_constructed();
            let obj = self.obj();
            obj.bind_property("link", &*obj, "activatable")
                .sync_create()
                .build();
        }
    }

    impl WidgetImpl for GrantDetailRow {}
    impl ListBoxRowImpl for GrantDetailRow {}
    impl PreferencesRowImpl for GrantDetailRow {}
    impl ActionRowImpl for GrantDetailRow {}
}

glib::wrapper! {
    pub struct GrantDetailRow(ObjectSubclass<imp::GrantDetailRow>)
        @extends adw::ActionRow, adw::PreferencesRow, gtk::ListBoxRow, gtk::Widget,
        @implements gtk::Accessible, gtk::Actionable, gtk::Buildable, gtk::ConstraintTarget;
}

impl GrantDetailRow {

    pub fn new(caption: &str, value: &str) -> Self {
        let escaped_caption = glib::markup_escape_text(caption);
        let escaped_value = glib::markup_escape_text(value);

        glib::Object::builder()
            .property("title", escaped_caption.as_str())
            .property("subtitle", escaped_value.as_str())
            .property("value", value)
            .build()
    }

    /// Row for a list field, `placeholder` stands in for an empty list.
    pub fn from_list(caption: &str, values: &[&str], placeholder: &str) -> Self {
        if values.is_empty() {
            Self::new(caption, placeholder)
        } else {
            Self::new(caption, &values.join(", "))
        }
    }

    pub fn from_website(url: &str) -> Self {
        let this = Self::new("Website", url);
        this.set_link(true);
        this
    }

    pub fn from_country(name: &str, country: Option<Country>) -> Self {
        match country {
            Some(country) => Self::new("Country", &format!("{flag} {name}", flag = country.flag())),
            None => Self::new("Country", name),
        }
    }

}
