//! # casa-landing
//!
//! Landing page of Casa de David, rendered client-side with Leptos 0.8.
//!
//! The page is a fixed navigation bar over a parallax hero, followed by the
//! in-page sections the navigation links point at. Both scroll-reactive
//! pieces listen through one shared [`scroll::ScrollHub`].
//!
//! - [`navigation`] - static link registry
//! - [`scroll`] - shared scroll listener and the `track_scroll` hook
//! - [`components`] - `ParallaxBackground`
//! - [`sections`] - nav bar and page sections
//! - [`config`] - `site.json` settings
//! - [`fonts`] - remote web font loading

pub mod components;
pub mod config;
pub mod error;
pub mod fonts;
pub mod navigation;
pub mod scroll;
pub mod sections;

use leptos::logging::{error, log, warn};
use leptos::prelude::*;

use config::SiteConfig;
use scroll::{ScrollHub, provide_scroll_hub};
use sections::*;

pub use error::{LandingError, Result};

/// Load configuration and fonts, then mount the page on `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::embedded().unwrap_or_else(|err| {
        error!("{err}; using built-in site configuration");
        SiteConfig::default()
    });

    if let Err(err) = fonts::load_font(&config.font) {
        warn!("font {} not loaded, using fallback stack: {err}", config.font.family);
    }

    log!("mounting {} landing page", config.brand.name);
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);
    provide_scroll_hub(ScrollHub::window());

    view! {
        <NavBar />
        <main>
            <Hero />
            <About />
            <Services />
            <Contact />
        </main>
        <Footer />
    }
}
