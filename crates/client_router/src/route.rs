//! Route declarations.

use std::str::FromStr;

use crate::matcher::{Params, PathPattern};
use crate::view::ViewComponent;
use crate::RouterError;

/// Named routes of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteName {
    Dashboard,
    Courses,
    CourseDetail,
    CourseManage,
    Enrollments,
    Chat,
    Analytics,
    Admin,
}

impl RouteName {
    pub const ALL: [RouteName; 8] = [
        Self::Dashboard,
        Self::Courses,
        Self::CourseDetail,
        Self::CourseManage,
        Self::Enrollments,
        Self::Chat,
        Self::Analytics,
        Self::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Courses => "courses",
            Self::CourseDetail => "course-detail",
            Self::CourseManage => "course-manage",
            Self::Enrollments => "enrollments",
            Self::Chat => "chat",
            Self::Analytics => "analytics",
            Self::Admin => "admin",
        }
    }

    /// The view rendered for this route
    pub fn component(&self) -> ViewComponent {
        match self {
            Self::Dashboard => ViewComponent::DashboardView,
            Self::Courses => ViewComponent::CoursesView,
            Self::CourseDetail => ViewComponent::CourseDetailView,
            Self::CourseManage => ViewComponent::CourseManageView,
            Self::Enrollments => ViewComponent::EnrollmentsView,
            Self::Chat => ViewComponent::ChatRagView,
            Self::Analytics => ViewComponent::AnalyticsView,
            Self::Admin => ViewComponent::AdminView,
        }
    }
}

impl FromStr for RouteName {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| RouterError::UnknownRoute(s.to_string()))
    }
}

impl std::fmt::Display for RouteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-route metadata. `requires_auth` is declared on every route but no
/// navigation step reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Resolution continues at another path
    Redirect(String),
    View { name: RouteName, meta: RouteMeta },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub pattern: PathPattern,
    pub target: RouteTarget,
}

impl RouteRecord {
    pub fn view(path: &str, name: RouteName) -> Self {
        Self {
            pattern: PathPattern::parse(path),
            target: RouteTarget::View {
                name,
                meta: RouteMeta::default(),
            },
        }
    }

    pub fn redirect(path: &str, to: &str) -> Self {
        Self {
            pattern: PathPattern::parse(path),
            target: RouteTarget::Redirect(to.to_string()),
        }
    }

    pub fn name(&self) -> Option<RouteName> {
        match &self.target {
            RouteTarget::View { name, .. } => Some(*name),
            RouteTarget::Redirect(_) => None,
        }
    }
}

/// Ordered route declarations; the first matching record wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::edurag()
    }
}

impl RouteTable {
    pub fn new(records: Vec<RouteRecord>) -> Self {
        Self { records }
    }

    /// The application's routes, in declaration order
    pub fn edurag() -> Self {
        Self::new(vec![
            RouteRecord::redirect("/", "/dashboard"),
            RouteRecord::view("/dashboard", RouteName::Dashboard),
            RouteRecord::view("/courses", RouteName::Courses),
            RouteRecord::view("/courses/:id", RouteName::CourseDetail),
            RouteRecord::view("/courses/:id/manage", RouteName::CourseManage),
            RouteRecord::view("/enrollments", RouteName::Enrollments),
            RouteRecord::view("/chat", RouteName::Chat),
            RouteRecord::view("/analytics", RouteName::Analytics),
            RouteRecord::view("/admin", RouteName::Admin),
        ])
    }

    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// First record matching `path`, with its bound parameters
    pub fn find(&self, path: &str) -> Option<(&RouteRecord, Params)> {
        self.records
            .iter()
            .find_map(|record| record.pattern.matches(path).map(|params| (record, params)))
    }

    /// Declared path pattern of a named route
    pub fn pattern_of(&self, name: RouteName) -> Option<&PathPattern> {
        self.records
            .iter()
            .find(|record| record.name() == Some(name))
            .map(|record| &record.pattern)
    }

    /// Concrete path of a named route with its parameters filled in
    pub fn path_of(&self, name: RouteName, params: &Params) -> Result<String, RouterError> {
        self.pattern_of(name)
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?
            .build(params)
    }
}
