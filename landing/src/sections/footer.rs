use leptos::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn Footer() -> impl IntoView {
    let brand = use_context::<SiteConfig>().unwrap_or_default().brand;

    view! {
        <footer class="bg-gray-900 py-10 text-gray-300">
            <div class="container mx-auto flex flex-col items-center gap-4 px-4">
                <div class="flex flex-row items-center gap-2">
                    <img src=brand.logo_src alt=brand.logo_alt class="h-10 w-10 rounded-full" />
                    <span class="font-semibold text-white">{brand.name.clone()}</span>
                </div>
                <p class="text-sm">{format!("© {}. Todos los derechos reservados.", brand.name)}</p>
            </div>
        </footer>
    }
}
