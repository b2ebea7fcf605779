// Casa de David landing page, Leptos 0.8 CSR

fn main() {
    casa_landing::mount();
}
