use super::super::prelude::*;

use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/org/artgrants/art_grants/not_found_page.ui")]
    #[properties(wrapper_type = super::NotFoundPage)]
    pub struct NotFoundPage {
        #[template_child(id = "not-found-page-status")]
        pub status_page: TemplateChild<adw::StatusPage>,
        #[template_child(id = "not-found-page-back-button")]
        pub back_button: TemplateChild<gtk::Button>,

        #[property(get, set)]
        pub slug: RefCell<String>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for NotFoundPage {
        const NAME: &'static str = "NotFoundPage";
        type Type = super::NotFoundPage;
        type ParentType = adw::NavigationPage;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for NotFoundPage {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().connect_slug_notify(|page| {
                let description = format!("No grant is listed as “{}”.", page.slug());
                let escaped_description = glib::markup_escape_text(&description);
                page.imp().status_page.set_description(Some(escaped_description.as_str()));
            });
        }

        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for NotFoundPage {}
    impl NavigationPageImpl for NotFoundPage {}
}

glib::wrapper! {
    pub struct NotFoundPage(ObjectSubclass<imp::NotFoundPage>)
        @extends adw::NavigationPage, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl NotFoundPage {
    pub fn connect_back_clicked<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self) + 'static
    {
        let this_weak = self.downgrade();
        self.imp().back_button.connect_clicked(move |_button| {
            if let Some(this) = this_weak.upgrade() {
                callback(&this);
            }
        })
    }
}
