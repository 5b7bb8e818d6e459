use super::widgets::{
    NavigationPage,
    WindowWidget,
    NavigationWidget,
    GrantsPageWidget,
    GrantPageWidget,
    NotFoundPageWidget
};

use std::rc::{Rc, Weak};

pub struct UiWeak {
    window: Weak<WindowWidget>
}

impl UiWeak {
    pub fn upgrade(&self) -> Option<Ui> {
        self.window.upgrade().map(|window| Ui { window })
    }
}

#[derive(Clone)]
pub struct Ui {
    window: Rc<WindowWidget>
}

impl Ui {

    pub fn new(window: WindowWidget) -> Self {
        Self { window: Rc::new(window) }
    }

    pub fn activate(&self) {
        self.navigation().replace_with_page(NavigationPage::Grants);
    }

    pub fn window(&self) -> &WindowWidget {
        &self.window
    }

    pub fn navigation(&self) -> &NavigationWidget {
        self.window.navigation()
    }

    pub fn grants_page(&self) -> &GrantsPageWidget {
        self.navigation().grants_page()
    }

    pub fn grant_page(&self) -> &GrantPageWidget {
        self.navigation().grant_page()
    }

    pub fn not_found_page(&self) -> &NotFoundPageWidget {
        self.navigation().not_found_page()
    }

    pub fn downgrade(&self) -> UiWeak {
        UiWeak { window: Rc::downgrade(&self.window) }
    }

}
