//! Follow-up actions attached to assistant replies.
//!
//! An [`ActionTag`] marks that a reply should offer a navigation control.
//! The [`ActionDispatcher`] turns an activated control into a navigation
//! through the injected [`Navigator`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::site::Route;

/// Closed set of follow-up actions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionTag {
    /// Offer to open the contact page.
    Contact,
    /// Offer to open the resume viewer.
    ViewResume,
    /// Offer to open the projects page.
    Projects,
}

impl ActionTag {
    /// Stable wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::ViewResume => "view-resume",
            Self::Projects => "projects",
        }
    }

    /// Navigation target of the action.
    #[must_use]
    pub const fn route(self) -> Route {
        match self {
            Self::Contact => Route::Contact,
            Self::ViewResume => Route::Resume,
            Self::Projects => Route::Projects,
        }
    }

    /// Presentation of the follow-up control.
    #[must_use]
    pub const fn control(self) -> ActionControl {
        match self {
            Self::Contact => ActionControl {
                label: "Contact Me",
                icon: "📧",
            },
            Self::ViewResume => ActionControl {
                label: "View Resume",
                icon: "📄",
            },
            Self::Projects => ActionControl {
                label: "View Projects",
                icon: "🚀",
            },
        }
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionTag {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "contact" => Ok(Self::Contact),
            "view-resume" => Ok(Self::ViewResume),
            "projects" => Ok(Self::Projects),
            _ => Err(value.to_string()),
        }
    }
}

/// Label and icon of a follow-up control.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ActionControl {
    /// Button label.
    pub label: &'static str,
    /// Button icon.
    pub icon: &'static str,
}

/// Performs client-side navigation.
pub trait Navigator: Send + Sync {
    /// Navigate to `route`.
    fn navigate(&self, route: Route);
}

/// Maps action tags onto navigations.
#[derive(Clone)]
pub struct ActionDispatcher {
    navigator: Arc<dyn Navigator>,
}

impl ActionDispatcher {
    /// Create a dispatcher backed by `navigator`.
    #[must_use]
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    /// Navigate to the target of `tag`.
    pub fn dispatch(&self, tag: ActionTag) {
        let route = tag.route();
        debug!(action = %tag, route = %route, "Dispatching chat action");
        self.navigator.navigate(route);
    }

    /// Dispatch a tag received in its wire form. Unknown tags are ignored.
    pub fn dispatch_raw(&self, tag: &str) {
        match tag.parse::<ActionTag>() {
            Ok(tag) => self.dispatch(tag),
            Err(unknown) => warn!(tag = %unknown, "Ignoring unknown chat action"),
        }
    }
}

impl fmt::Debug for ActionDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDispatcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Navigator that records every navigation.
    #[derive(Default)]
    pub(crate) struct RecordingNavigator {
        pub(crate) visited: Mutex<Vec<Route>>,
    }

    impl RecordingNavigator {
        pub(crate) fn visited(&self) -> Vec<Route> {
            self.visited.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.visited.lock().unwrap().push(route);
        }
    }

    #[test]
    fn test_dispatch_maps_every_tag() {
        let navigator = Arc::new(RecordingNavigator::default());
        let dispatcher = ActionDispatcher::new(navigator.clone());

        dispatcher.dispatch(ActionTag::Contact);
        dispatcher.dispatch(ActionTag::ViewResume);
        dispatcher.dispatch(ActionTag::Projects);

        assert_eq!(
            navigator.visited(),
            vec![Route::Contact, Route::Resume, Route::Projects]
        );
        assert_eq!(Route::Contact.path(), "/contact");
        assert_eq!(Route::Resume.path(), "/resume");
        assert_eq!(Route::Projects.path(), "/projects");
    }

    #[test]
    fn test_dispatch_raw_ignores_unknown_tag() {
        let navigator = Arc::new(RecordingNavigator::default());
        let dispatcher = ActionDispatcher::new(navigator.clone());

        dispatcher.dispatch_raw("download");
        dispatcher.dispatch_raw("Contact");
        assert!(navigator.visited().is_empty());

        dispatcher.dispatch_raw("view-resume");
        assert_eq!(navigator.visited(), vec![Route::Resume]);
    }

    #[test]
    fn test_tag_wire_format() {
        let json = serde_json::to_string(&ActionTag::ViewResume).unwrap();
        assert_eq!(json, "\"view-resume\"");
        let tag: ActionTag = serde_json::from_str("\"projects\"").unwrap();
        assert_eq!(tag, ActionTag::Projects);
        assert_eq!(ActionTag::Contact.control().label, "Contact Me");
    }
}
