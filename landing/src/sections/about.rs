use leptos::prelude::*;

use crate::navigation::NavLinkId;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=NavLinkId::About.anchor() class="bg-white py-24">
            <div class="container mx-auto max-w-3xl px-4 text-center">
                <h2 class="text-3xl font-bold text-gray-900">"Acerca de Nosotros"</h2>
                <p class="mt-6 text-lg text-gray-700">
                    "Casa de David es una comunidad de fe abierta a todos. "
                    "Nos reunimos para adorar a Dios, estudiar su Palabra y acompañarnos "
                    "unos a otros en cada etapa de la vida."
                </p>
            </div>
        </section>
    }
}
