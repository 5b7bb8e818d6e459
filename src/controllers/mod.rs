mod actions;
mod detail_row_activation;
mod filter;
mod grant_activation;
mod router;

pub use self::actions::Actions as ActionsController;
pub use self::detail_row_activation::DetailRowActivation as DetailRowActivationController;
pub use self::filter::Filter as FilterController;
pub use self::grant_activation::GrantActivation as GrantActivationController;
pub use self::router::Router as RouterController;
