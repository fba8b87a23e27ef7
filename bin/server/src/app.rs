//! Main Leptos application component and routing.
//!
//! The router configuration is passed into [`App`] by the entry point and
//! shared through context. Resolution of the browser location goes through
//! the route table, so the same code serves hash and history modes.

use crate::pages::{AboutPage, HelloPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};
use signpost_routing::{HistoryMode, RouteEntry, RouteId, RouterConfig};

/// Which route the browser location currently addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentRoute {
    /// Not known yet. In hash mode the fragment is never sent to the server,
    /// so nothing is resolved until the app is mounted in the browser.
    Pending,
    /// A declared route.
    Matched(RouteId),
    /// No declared route matches.
    Unmatched,
}

/// Resolves the browser location against the route table.
#[must_use]
pub fn current_route(
    config: &RouterConfig,
    mounted: bool,
    pathname: &str,
    hash: &str,
) -> CurrentRoute {
    if config.mode() == HistoryMode::Hash && !mounted {
        return CurrentRoute::Pending;
    }
    match config.resolve_location(pathname, hash) {
        Some(entry) => CurrentRoute::Matched(entry.id()),
        None => CurrentRoute::Unmatched,
    }
}

/// Renders the view registered for a route.
fn route_view(id: RouteId) -> AnyView {
    match id {
        RouteId::Hello => view! { <HelloPage/> }.into_any(),
        RouteId::About => view! { <AboutPage/> }.into_any(),
    }
}

/// The main application component.
#[component]
pub fn App(config: RouterConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Title text="signpost"/>
        <Router>
            <Routes fallback=|| view! { <Layout/> }>
                <Route path=path!("/") view=Layout/>
                <Route path=path!("/*any") view=Layout/>
            </Routes>
        </Router>
    }
}

/// Page frame shared by every route.
#[component]
fn Layout() -> impl IntoView {
    let config = expect_context::<RouterConfig>();
    let location = use_location();
    let (mounted, set_mounted) = signal(false);
    Effect::new(move || set_mounted.set(true));

    let current = {
        let config = config.clone();
        Memo::new(move |_| {
            current_route(
                &config,
                mounted.get(),
                &location.pathname.get(),
                &location.hash.get(),
            )
        })
    };

    view! {
        <Header config current/>
        <main class="container">
            <RouteOutlet current/>
        </main>
    }
}

/// Header component with a link per declared route.
#[component]
fn Header(config: RouterConfig, current: Memo<CurrentRoute>) -> impl IntoView {
    let home = config
        .href(RouteId::Hello)
        .unwrap_or_else(|| "/".to_string());

    let links = config
        .table()
        .entries()
        .iter()
        .map(|entry: &RouteEntry| {
            let id = entry.id();
            let href = config.entry_href(entry);
            let name = entry.name().to_string();
            let aria_current =
                move || (current.get() == CurrentRoute::Matched(id)).then_some("page");
            view! { <a href=href aria-current=aria_current>{name}</a> }
        })
        .collect_view();

    view! {
        <header class="header">
            <a href=home class="logo">"signpost"</a>
            <nav class="nav">{links}</nav>
        </header>
    }
}

/// Renders the view for the current route.
#[component]
fn RouteOutlet(current: Memo<CurrentRoute>) -> impl IntoView {
    move || match current.get() {
        CurrentRoute::Pending => None,
        CurrentRoute::Matched(id) => Some(route_view(id)),
        CurrentRoute::Unmatched => {
            Some(view! { <p class="not-found">"Page not found."</p> }.into_any())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_mode_waits_for_mount() {
        let config = RouterConfig::new(HistoryMode::Hash);
        assert_eq!(
            current_route(&config, false, "/", "#/about"),
            CurrentRoute::Pending
        );
        assert_eq!(
            current_route(&config, true, "/", "#/about"),
            CurrentRoute::Matched(RouteId::About)
        );
        assert_eq!(
            current_route(&config, true, "/", ""),
            CurrentRoute::Matched(RouteId::Hello)
        );
    }

    #[test]
    fn history_mode_resolves_before_mount() {
        let config = RouterConfig::new(HistoryMode::History);
        assert_eq!(
            current_route(&config, false, "/about", ""),
            CurrentRoute::Matched(RouteId::About)
        );
        assert_eq!(
            current_route(&config, false, "/", ""),
            CurrentRoute::Matched(RouteId::Hello)
        );
    }

    #[test]
    fn unknown_location_is_unmatched() {
        let config = RouterConfig::new(HistoryMode::History);
        assert_eq!(
            current_route(&config, true, "/contact", ""),
            CurrentRoute::Unmatched
        );

        let config = RouterConfig::new(HistoryMode::Hash);
        assert_eq!(
            current_route(&config, true, "/", "#/contact"),
            CurrentRoute::Unmatched
        );
    }
}
