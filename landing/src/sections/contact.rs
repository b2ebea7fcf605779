use leptos::prelude::*;

use crate::navigation::NavLinkId;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=NavLinkId::Contact.anchor() class="bg-white py-24">
            <div class="container mx-auto max-w-3xl px-4 text-center">
                <h2 class="text-3xl font-bold text-gray-900">"Contactanos"</h2>
                <p class="mt-6 text-lg text-gray-700">
                    "¿Tienes preguntas o necesitas oración? Acércate al final de cualquier servicio y con gusto te atenderemos."
                </p>
                <a
                    href=NavLinkId::Services.href()
                    class="mt-8 inline-block rounded-full bg-gray-900 px-6 py-3 font-semibold text-white hover:bg-gray-700"
                >
                    "Ver horarios"
                </a>
            </div>
        </section>
    }
}
