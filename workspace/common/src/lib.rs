//! Rendering primitives shared between the page renderer and the web service.
//! Translation lookups and named-route URL generation are both modelled as
//! small traits so the pages never depend on a concrete catalog or router.

pub mod i18n;
pub mod routing;

pub use i18n::{Catalog, CatalogError, Catalogs, Locale, Translator};
pub use routing::{RouteError, RoutePattern, RouteTable, UrlFor};
