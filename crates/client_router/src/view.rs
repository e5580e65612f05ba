//! View components and their on-demand loading.
//!
//! A view is not loaded when the router is built, nor when a path is merely
//! resolved. The first navigation that enters a route asks the [`ViewLoader`]
//! for its module; the result is kept in a [`ViewCache`] for the rest of the
//! session, so each view is loaded at most once.

use std::collections::HashMap;
use std::sync::Arc;

use crate::RouterError;

/// The view modules a route can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewComponent {
    DashboardView,
    CoursesView,
    CourseDetailView,
    CourseManageView,
    EnrollmentsView,
    ChatRagView,
    AnalyticsView,
    AdminView,
}

impl ViewComponent {
    pub const ALL: [ViewComponent; 8] = [
        Self::DashboardView,
        Self::CoursesView,
        Self::CourseDetailView,
        Self::CourseManageView,
        Self::EnrollmentsView,
        Self::ChatRagView,
        Self::AnalyticsView,
        Self::AdminView,
    ];

    /// Module name of the view
    pub fn module_name(&self) -> &'static str {
        match self {
            Self::DashboardView => "DashboardView",
            Self::CoursesView => "CoursesView",
            Self::CourseDetailView => "CourseDetailView",
            Self::CourseManageView => "CourseManageView",
            Self::EnrollmentsView => "EnrollmentsView",
            Self::ChatRagView => "ChatRAGView",
            Self::AnalyticsView => "AnalyticsView",
            Self::AdminView => "AdminView",
        }
    }

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            Self::DashboardView => "Dashboard",
            Self::CoursesView => "Courses",
            Self::CourseDetailView => "Course Detail",
            Self::CourseManageView => "Manage Course",
            Self::EnrollmentsView => "Enrollments",
            Self::ChatRagView => "Chat",
            Self::AnalyticsView => "Analytics",
            Self::AdminView => "Admin",
        }
    }
}

impl std::fmt::Display for ViewComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.module_name())
    }
}

/// A loaded view module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModule {
    pub component: ViewComponent,
    /// Where the module was loaded from, e.g. `views/DashboardView`
    pub module_path: String,
    pub title: String,
}

/// Loads a view module on demand
pub trait ViewLoader {
    fn load(&self, component: ViewComponent) -> Result<ViewModule, RouterError>;
}

impl<F> ViewLoader for F
where
    F: Fn(ViewComponent) -> Result<ViewModule, RouterError>,
{
    fn load(&self, component: ViewComponent) -> Result<ViewModule, RouterError> {
        self(component)
    }
}

/// Loader that resolves every component under a fixed module root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticViewLoader {
    root: String,
}

impl Default for StaticViewLoader {
    fn default() -> Self {
        Self::new("views")
    }
}

impl StaticViewLoader {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into().trim_end_matches('/').to_string(),
        }
    }
}

impl ViewLoader for StaticViewLoader {
    fn load(&self, component: ViewComponent) -> Result<ViewModule, RouterError> {
        Ok(ViewModule {
            component,
            module_path: format!("{}/{}", self.root, component.module_name()),
            title: component.title().to_string(),
        })
    }
}

/// Session cache of loaded views
#[derive(Debug, Default)]
pub struct ViewCache {
    loaded: HashMap<ViewComponent, Arc<ViewModule>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached module, loading it first if this is its first use.
    ///
    /// A failed load is not cached; the next navigation tries again.
    pub fn get_or_load<L: ViewLoader + ?Sized>(
        &mut self,
        component: ViewComponent,
        loader: &L,
    ) -> Result<Arc<ViewModule>, RouterError> {
        if let Some(module) = self.loaded.get(&component) {
            return Ok(module.clone());
        }

        let module = Arc::new(loader.load(component)?);
        tracing::debug!(view = %component, module = %module.module_path, "View loaded");
        self.loaded.insert(component, module.clone());
        Ok(module)
    }

    pub fn is_loaded(&self, component: ViewComponent) -> bool {
        self.loaded.contains_key(&component)
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}
