//! Client-side navigation routes of the portfolio site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A page of the site.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Landing page.
    Home,
    /// About me.
    About,
    /// Project case studies.
    Projects,
    /// Learnings and certifications.
    Learnings,
    /// Resume viewer.
    Resume,
    /// Contact cards.
    Contact,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Resume,
        Self::Projects,
        Self::Learnings,
        Self::About,
        Self::Contact,
    ];

    /// URL path of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Projects => "/projects",
            Self::Learnings => "/learnings",
            Self::Resume => "/resume",
            Self::Contact => "/contact",
        }
    }

    /// Label shown in the navigation menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About me",
            Self::Projects => "Projects",
            Self::Learnings => "Learnings",
            Self::Resume => "Resume",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == value)
            .ok_or_else(|| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<&str> = Route::ALL.iter().map(|r| r.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Route::ALL.len());
    }

    #[test]
    fn test_parse_path() {
        assert_eq!("/resume".parse::<Route>(), Ok(Route::Resume));
        assert_eq!("/".parse::<Route>(), Ok(Route::Home));
        assert!("/blog".parse::<Route>().is_err());
    }
}
