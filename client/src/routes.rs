//! Declarative route table and the shell's render decision.
//!
//! DESIGN
//! ======
//! Routes are plain `(path, view)` data evaluated by a generic exact-match
//! resolver, so the table can be inspected and tested without a browser or
//! any UI framework. The Leptos `App` only asks [`Shell::render`] what to
//! mount for the current pathname.

use std::collections::BTreeSet;

/// The five form views the shell can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewKind {
    Register,
    Login,
    BookTrip,
    MakePayment,
    SearchFlights,
}

impl ViewKind {
    pub const ALL: [Self; 5] = [
        Self::Register,
        Self::Login,
        Self::BookTrip,
        Self::MakePayment,
        Self::SearchFlights,
    ];

    /// Component name, as shown in logs and page titles.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Login => "Login",
            Self::BookTrip => "BookTrip",
            Self::MakePayment => "MakePayment",
            Self::SearchFlights => "SearchFlights",
        }
    }
}

/// Errors raised while building a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),

    #[error("route path `{0}` must start with `/`")]
    RelativePath(String),
}

/// One `(path, view)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    pub path: String,
    pub view: V,
}

/// Ordered list of routes with unique paths. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Build a table, rejecting duplicate or relative paths.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] naming the first offending path.
    pub fn new<P>(routes: impl IntoIterator<Item = (P, V)>) -> Result<Self, RouteError>
    where
        P: Into<String>,
    {
        let mut seen = BTreeSet::new();
        let mut table = Vec::new();
        for (path, view) in routes {
            let path = path.into();
            if !path.starts_with('/') {
                return Err(RouteError::RelativePath(path));
            }
            if !seen.insert(path.clone()) {
                return Err(RouteError::DuplicatePath(path));
            }
            table.push(Route { path, view });
        }
        Ok(Self { routes: table })
    }

    /// View registered for exactly `path`, if any.
    ///
    /// Matching is literal: no parameters, no prefix matching, no trailing
    /// slash or case normalisation.
    pub fn resolve(&self, path: &str) -> Option<&V> {
        self.routes.iter().find(|route| route.path == path).map(|route| &route.view)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.path.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// The application's navigation table.
///
/// # Errors
///
/// Returns [`RouteError`] only if the table below is edited into an invalid
/// state; `routes_test` pins it.
pub fn app_routes() -> Result<RouteTable<ViewKind>, RouteError> {
    RouteTable::new([
        ("/register", ViewKind::Register),
        ("/login", ViewKind::Login),
        ("/book-trip", ViewKind::BookTrip),
        ("/make-payment", ViewKind::MakePayment),
        ("/search-flights", ViewKind::SearchFlights),
    ])
}

/// What the shell shows for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    /// The matching view is mounted.
    View(ViewKind),
    /// A route matched but names a view the shell has no component for.
    Unresolved(ViewKind),
    /// No route matched; nothing is rendered.
    Nothing,
}

/// Route table plus the set of views that actually have components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    routes: RouteTable<ViewKind>,
    mounted: BTreeSet<ViewKind>,
}

impl Shell {
    #[must_use]
    pub fn new(routes: RouteTable<ViewKind>, mounted: impl IntoIterator<Item = ViewKind>) -> Self {
        Self { routes, mounted: mounted.into_iter().collect() }
    }

    /// All five routes with all five views available.
    ///
    /// # Errors
    ///
    /// See [`app_routes`].
    pub fn standard() -> Result<Self, RouteError> {
        Ok(Self::new(app_routes()?, ViewKind::ALL))
    }

    /// The originally shipped shell: `/search-flights` is routed but its view
    /// was never provided, so that path resolves to
    /// [`Rendered::Unresolved`].
    ///
    /// # Errors
    ///
    /// See [`app_routes`].
    pub fn as_built() -> Result<Self, RouteError> {
        let mounted = ViewKind::ALL.into_iter().filter(|kind| *kind != ViewKind::SearchFlights);
        Ok(Self::new(app_routes()?, mounted))
    }

    /// Decide what to render for `path`. Never panics.
    #[must_use]
    pub fn render(&self, path: &str) -> Rendered {
        match self.routes.resolve(path) {
            Some(kind) if self.mounted.contains(kind) => Rendered::View(*kind),
            Some(kind) => Rendered::Unresolved(*kind),
            None => Rendered::Nothing,
        }
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable<ViewKind> {
        &self.routes
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
