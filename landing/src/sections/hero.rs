use leptos::prelude::*;

use crate::components::ParallaxBackground;
use crate::config::SiteConfig;
use crate::navigation::NavLinkId;

#[component]
pub fn Hero() -> impl IntoView {
    let hero = use_context::<SiteConfig>().unwrap_or_default().hero;

    view! {
        <section
            id=NavLinkId::Home.anchor()
            class="relative isolate flex min-h-screen items-center justify-center overflow-hidden"
        >
            <ParallaxBackground
                image_src=hero.image_src
                alt=hero.alt
                speed=hero.speed
                class_name=hero.class_name
            />
            <div class="absolute inset-0 bg-black/40"></div>
            <div class="relative container mx-auto px-4 text-center text-white">
                <h1 class="text-4xl font-bold md:text-6xl">{hero.headline}</h1>
                <p class="mt-6 text-lg md:text-2xl">{hero.tagline}</p>
                <div class="mt-10 flex flex-row items-center justify-center gap-4">
                    <a
                        href=NavLinkId::About.href()
                        class="rounded-full bg-white px-6 py-3 font-semibold text-gray-900 hover:bg-gray-100"
                    >
                        "Conócenos"
                    </a>
                    <a
                        href=NavLinkId::Contact.href()
                        class="rounded-full border border-white px-6 py-3 font-semibold text-white hover:bg-white/20"
                    >
                        "Visítanos"
                    </a>
                </div>
            </div>
        </section>
    }
}
