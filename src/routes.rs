// SPDX-License-Identifier: PMPL-1.0-or-later

//! Named client routes and the prefixed route table.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Logical routes of the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Register,
    Login,
    ResetPwd,
    VerifyAct,
    Profile,
    Admin,
    Retrospectives,
    Retrospective,
    Organizations,
    Organization,
    Team,
}

impl Route {
    /// Key under which the route is exported to the client router.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Landing => "landing",
            Route::Register => "register",
            Route::Login => "login",
            Route::ResetPwd => "resetPwd",
            Route::VerifyAct => "verifyAct",
            Route::Profile => "profile",
            Route::Admin => "admin",
            Route::Retrospectives => "retrospectives",
            Route::Retrospective => "retrospective",
            Route::Organizations => "organizations",
            Route::Organization => "organization",
            Route::Team => "team",
        }
    }

    /// Path appended to the deployment prefix.
    pub fn suffix(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::ResetPwd => "/reset-password",
            Route::VerifyAct => "/verify-account",
            Route::Profile => "/profile",
            Route::Admin => "/admin",
            Route::Retrospectives => "/retrospectives",
            Route::Retrospective => "/retrospective",
            Route::Organizations => "/organizations",
            Route::Organization => "/organization",
            Route::Team => "/team",
        }
    }

    pub fn from_name(name: &str) -> Option<Route> {
        Route::all().iter().copied().find(|route| route.name() == name)
    }

    /// All routes, in export order.
    pub fn all() -> &'static [Route] {
        &[
            Route::Landing,
            Route::Register,
            Route::Login,
            Route::ResetPwd,
            Route::VerifyAct,
            Route::Profile,
            Route::Admin,
            Route::Retrospectives,
            Route::Retrospective,
            Route::Organizations,
            Route::Organization,
            Route::Team,
        ]
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Concrete paths for every [`Route`], each `prefix + suffix`.
///
/// Paths are indexed by `Route::all()` position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    paths: Vec<String>,
}

impl RouteTable {
    /// Build the table under `prefix`. The prefix is used verbatim, an
    /// empty prefix yields the bare suffixes.
    pub fn with_prefix(prefix: &str) -> Self {
        let paths = Route::all()
            .iter()
            .map(|route| format!("{}{}", prefix, route.suffix()))
            .collect();
        Self { paths }
    }

    pub fn get(&self, route: Route) -> &str {
        // Declaration order and `Route::all()` order are the same.
        &self.paths[route as usize]
    }

    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        Route::from_name(name).map(|route| self.get(route))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// `(route, path)` pairs in export order.
    pub fn iter(&self) -> impl Iterator<Item = (Route, &str)> {
        Route::all()
            .iter()
            .copied()
            .zip(self.paths.iter().map(String::as_str))
    }
}

impl Serialize for RouteTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (route, path) in self.iter() {
            map.serialize_entry(route.name(), path)?;
        }
        map.end()
    }
}
