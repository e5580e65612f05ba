//! Route table commands
//!
//! Inspect the frontend router without a browser: list the declared routes
//! or run the initial navigation for a URL.

use client_router::{RouteTarget, Router};
use serde_json::{json, Value};

/// List every declared route in declaration order
pub fn list(history_base: &str) -> Value {
    let router = Router::new(history_base);
    let routes = router
        .table()
        .records()
        .iter()
        .map(|record| {
            let path = record.pattern.as_str();
            match &record.target {
                RouteTarget::Redirect(to) => json!({
                    "path": path,
                    "href": router.href(path),
                    "redirect": to,
                }),
                RouteTarget::View { name, meta } => json!({
                    "path": path,
                    "href": router.href(path),
                    "name": name.as_str(),
                    "component": name.component().module_name(),
                    "requires_auth": meta.requires_auth,
                }),
            }
        })
        .collect();
    Value::Array(routes)
}

/// Navigate to `url` as a fresh session would and describe the outcome
pub fn resolve(history_base: &str, url: &str) -> anyhow::Result<Value> {
    let mut router = Router::new(history_base);
    let nav = router.start(url)?;
    let route = &nav.route;

    let params: serde_json::Map<String, Value> = route
        .params
        .iter()
        .map(|(k, v)| (k.to_string(), Value::from(v)))
        .collect();
    let query: serde_json::Map<String, Value> = route
        .query_pairs()
        .into_iter()
        .map(|(k, v)| (k, Value::from(v)))
        .collect();

    Ok(json!({
        "name": route.name.as_str(),
        "path": route.path,
        "full_path": route.full_path(),
        "href": router.href(&route.full_path()),
        "params": params,
        "query": query,
        "hash": route.hash,
        "redirected_from": route.redirected_from,
        "requires_auth": route.meta.requires_auth,
        "view": {
            "component": nav.view.component.module_name(),
            "module": nav.view.module_path,
            "title": nav.view.title,
        },
    }))
}
