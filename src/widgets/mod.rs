mod grant_detail_row;
mod grant_page;
mod grant_row;
mod grants_page;
mod navigation;
mod not_found_page;
mod window;

pub use grant_detail_row::{GrantDetailRow as GrantDetailRowWidget, GrantDetailRowType};
pub use grant_page::GrantPage as GrantPageWidget;
pub use grant_row::GrantRow as GrantRowWidget;
pub use grants_page::GrantsPage as GrantsPageWidget;
pub use navigation::{Navigation as NavigationWidget, NavigationPage};
pub use not_found_page::NotFoundPage as NotFoundPageWidget;
pub use window::Window as WindowWidget;
