use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::navigation::{NavLinkId, visible_links};
use crate::scroll::{track_scroll, use_scroll_hub};

/// Offsets above this many pixels switch the bar to its scrolled look.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// Visual state of the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavPhase {
    /// `offset <= 10`: translucent dark bar over the hero.
    #[default]
    Top,
    /// `offset > 10`: solid light bar with a shadow.
    Scrolled,
}

impl NavPhase {
    pub fn from_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD {
            NavPhase::Scrolled
        } else {
            NavPhase::Top
        }
    }

    pub fn theme(self) -> NavTheme {
        match self {
            NavPhase::Top => NavTheme {
                bar: "fixed top-0 z-50 w-full transition-all duration-300 bg-black/30 backdrop-blur-sm py-4",
                brand: "text-lg font-semibold text-white",
                link: "rounded-md px-3 py-2 text-lg font-semibold text-white transition-colors hover:bg-white/20",
            },
            NavPhase::Scrolled => NavTheme {
                bar: "fixed top-0 z-50 w-full transition-all duration-300 bg-white shadow-md py-2",
                brand: "text-lg font-semibold text-gray-900",
                link: "rounded-md px-3 py-2 text-lg font-semibold text-gray-900 transition-colors hover:bg-gray-100",
            },
        }
    }
}

/// Tailwind classes for one [`NavPhase`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavTheme {
    pub bar: &'static str,
    pub brand: &'static str,
    pub link: &'static str,
}

#[component]
pub fn NavBar() -> impl IntoView {
    let brand = use_context::<SiteConfig>().unwrap_or_default().brand;
    let offset = track_scroll(&use_scroll_hub());
    let phase = Memo::new(move |_| NavPhase::from_offset(offset.get()));
    let theme = move || phase.get().theme();

    view! {
        <nav class=move || theme().bar>
            <div class="container mx-auto flex flex-row items-center justify-between px-4">
                <div class="flex flex-row items-center gap-2">
                    <img
                        src=brand.logo_src
                        alt=brand.logo_alt
                        class="aspect-auto w-12 h-12 rounded-full"
                    />
                    <a href=NavLinkId::Home.href() class=move || theme().brand>
                        {brand.name}
                    </a>
                </div>
                <ul class="flex flex-row items-center gap-8">
                    {visible_links()
                        .map(move |link| {
                            view! {
                                <li>
                                    <a href=link.href() class=move || theme().link>
                                        {link.name}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </nav>
    }
}
