use leptos::prelude::*;

use crate::navigation::NavLinkId;

/// (day, time, description)
const SERVICE_TIMES: [(&str, &str, &str); 3] = [
    ("Domingo", "10:00 AM", "Servicio de adoración"),
    ("Miércoles", "7:00 PM", "Estudio bíblico"),
    ("Viernes", "7:30 PM", "Reunión de jóvenes"),
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=NavLinkId::Services.anchor() class="bg-gray-50 py-24">
            <div class="container mx-auto px-4">
                <h2 class="text-center text-3xl font-bold text-gray-900">"Servicios"</h2>
                <ul class="mt-12 grid gap-8 md:grid-cols-3">
                    {SERVICE_TIMES
                        .iter()
                        .map(|(day, time, description)| {
                            view! {
                                <li class="rounded-xl bg-white p-8 text-center shadow-sm">
                                    <p class="text-xl font-semibold text-gray-900">{*day}</p>
                                    <p class="mt-2 text-gray-600">{*time}</p>
                                    <p class="mt-4 text-gray-700">{*description}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}
