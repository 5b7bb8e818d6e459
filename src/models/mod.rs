mod catalog;
mod country;
mod grant;

pub use self::catalog::Catalog;
pub use self::country::Country;
pub use self::grant::Grant;
