use crate::route::Route;

use hub_session::{GuardDecision, SessionStore};

use log::info;
use serde::Serialize;

/// Result of a guarded navigation, ready for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub requested: String,
    pub rendered: String,
    pub decision: GuardDecision,
}

/// Applies the role guard before rendering a route.
///
/// The decision is recomputed from the live session on every call:
/// unauthenticated visits redirect to the login entry point, authorization
/// denials redirect to the landing view, and neither is an error.
pub fn navigate(store: &SessionStore, route: Route) -> Navigation {
    let Some(required) = route.required_role() else {
        return Navigation {
            requested: route.path(),
            rendered: route.path(),
            decision: GuardDecision::Authorized,
        };
    };

    let decision = GuardDecision::evaluate(store.current(), required);
    let rendered = match decision {
        GuardDecision::Authorized => route.clone(),
        GuardDecision::Unauthenticated => {
            info!("Unauthenticated visit to {route}, redirecting to login");
            Route::Login
        }
        GuardDecision::Unauthorized => {
            info!("Insufficient role for {route}, redirecting to the landing view");
            Route::Home
        }
    };

    Navigation {
        requested: route.path(),
        rendered: rendered.path(),
        decision,
    }
}
