//! # client_router
//!
//! Client-side routing for the EduRAG frontend.
//!
//! Paths resolve to exactly one named route through an ordered
//! [`RouteTable`]. `/` redirects to `/dashboard`; every other route renders
//! one view, loaded on the first navigation that enters it and cached for
//! the rest of the session.
//!
//! ## Example
//!
//! ```
//! use client_router::prelude::*;
//!
//! let mut router = Router::new("/");
//! let nav = router.start("/").unwrap();
//! assert_eq!(nav.route.name, RouteName::Dashboard);
//! assert_eq!(nav.view.component, ViewComponent::DashboardView);
//!
//! let nav = router.push("/courses/42").unwrap();
//! assert_eq!(nav.route.param("id"), Some("42"));
//! ```

pub mod error;
pub mod history;
pub mod matcher;
pub mod route;
pub mod router;
pub mod view;

pub use error::RouterError;
pub use history::WebHistory;
pub use matcher::{Location, Params, PathPattern};
pub use route::{RouteMeta, RouteName, RouteRecord, RouteTable, RouteTarget};
pub use router::{Navigation, ResolvedRoute, Router, MAX_REDIRECTS};
pub use view::{StaticViewLoader, ViewCache, ViewComponent, ViewLoader, ViewModule};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Navigation, ResolvedRoute, RouteName, RouteTable, Router, RouterError, StaticViewLoader,
        ViewComponent, ViewLoader, ViewModule,
    };
}
