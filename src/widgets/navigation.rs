use super::super::prelude::*;
use super::grant_page::GrantPage;
use super::grants_page::GrantsPage;
use super::not_found_page::NotFoundPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPage {
    Grants,
    Grant,
    NotFound,
}

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/org/artgrants/art_grants/navigation.ui")]
    pub struct Navigation {
        #[template_child(id = "navigation-view")]
        pub view: TemplateChild<adw::NavigationView>,
        #[template_child(id = "navigation-grants-page")]
        pub grants_page: TemplateChild<GrantsPage>,
        #[template_child(id = "navigation-grant-page")]
        pub grant_page: TemplateChild<GrantPage>,
        #[template_child(id = "navigation-not-found-page")]
        pub not_found_page: TemplateChild<NotFoundPage>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Navigation {
        const NAME: &'static str = "Navigation";
        type Type = super::Navigation;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            GrantsPage::ensure_type();
            GrantPage::ensure_type();
            NotFoundPage::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Navigation {}
    impl WidgetImpl for Navigation {}
    impl BinImpl for Navigation {}
}

glib::wrapper! {
    pub struct Navigation(ObjectSubclass<imp::Navigation>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl Navigation {
    pub fn grants_page(&self) -> &GrantsPage {
        &self.imp().grants_page
    }

    pub fn grant_page(&self) -> &GrantPage {
        &self.imp().grant_page
    }

    pub fn not_found_page(&self) -> &NotFoundPage {
        &self.imp().not_found_page
    }

    fn navigation_page(&self, page: NavigationPage) -> adw::NavigationPage {
        match page {
            NavigationPage::Grants => self.grants_page().clone().upcast(),
            NavigationPage::Grant => self.grant_page().clone().upcast(),
            NavigationPage::NotFound => self.not_found_page().clone().upcast(),
        }
    }

    /// Shows `page` on top of the listing. Detail pages never stack on each
    /// other, opening a second grant replaces the first.
    pub fn push_page(&self, page: NavigationPage) {
        if page == NavigationPage::Grants {
            self.replace_with_page(page);
            return;
        }

        let view: &adw::NavigationView = &self.imp().view;
        if self.page() == Some(NavigationPage::Grants) {
            view.push(&self.navigation_page(page));
        } else {
            let pages = [
                self.navigation_page(NavigationPage::Grants),
                self.navigation_page(page),
            ];
            view.replace(&pages);
        }
    }

    pub fn replace_with_page(&self, page: NavigationPage) {
        let view: &adw::NavigationView = &self.imp().view;
        view.replace(&[self.navigation_page(page)]);
    }

    pub fn page(&self) -> Option<NavigationPage> {
        let view = &self.imp().view;
        let tag = view.visible_page()?.tag();

        if self.grants_page().tag() == tag {
            Some(NavigationPage::Grants)
        } else if self.grant_page().tag() == tag {
            Some(NavigationPage::Grant)
        } else if self.not_found_page().tag() == tag {
            Some(NavigationPage::NotFound)
        } else {
            None
        }
    }
}
