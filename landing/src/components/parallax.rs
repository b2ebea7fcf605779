//! Parallax background layer.
//!
//! The image layer is 120% of the container height and moves down by
//! `scroll_y * speed` pixels while the container clips it, so the visible
//! part drifts slower than the page.

use leptos::prelude::*;

use crate::scroll::{track_scroll, use_scroll_hub};

pub const DEFAULT_SPEED: f64 = 0.5;
pub const DEFAULT_ALT: &str = "Hero background";

/// Vertical translation for the image layer. `speed` is not clamped.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// Translation that follows both the scroll offset and the speed.
pub fn parallax_translate(scroll_y: Signal<f64>, speed: Signal<f64>) -> Signal<f64> {
    Signal::derive(move || parallax_offset(scroll_y.get(), speed.get()))
}

/// Inline style of the moving layer.
pub fn layer_style(image_src: &str, translate: f64) -> String {
    format!(
        "transform: translateY({translate}px); \
         background-image: url('{}'); \
         background-size: cover; \
         background-position: center; \
         background-repeat: no-repeat; \
         will-change: transform;",
        image_src.replace('\'', "%27")
    )
}

/// Full-bleed background image that scrolls at a fraction of page speed.
///
/// Place it inside a `relative` (ideally `isolate`) parent; it sits at
/// `z-index: -1` behind the parent's content.
#[component]
pub fn ParallaxBackground(
    /// Image URL, used as an opaque string.
    #[prop(into)]
    image_src: String,
    /// Accessible label of the image layer.
    #[prop(into, default = DEFAULT_ALT.to_string())]
    alt: String,
    /// Fraction of scroll speed. Changing it takes effect without remounting.
    #[prop(into, default = Signal::stored(DEFAULT_SPEED))]
    speed: Signal<f64>,
    /// Extra classes for the clipping container.
    #[prop(into, optional)]
    class_name: String,
) -> impl IntoView {
    let scroll_y = track_scroll(&use_scroll_hub());
    let translate = parallax_translate(scroll_y.into(), speed);
    let container_class = format!("absolute inset-0 overflow-hidden {class_name}")
        .trim_end()
        .to_string();

    view! {
        <div class=container_class style="z-index: -1;">
            <div
                class="absolute inset-0 h-[120%] w-full"
                role="img"
                aria-label=alt
                style=move || layer_style(&image_src, translate.get())
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::testing::ManualScroll;
    use crate::scroll::{ScrollHub, provide_scroll_hub};
    use pretty_assertions::assert_eq;

    #[test]
    fn half_speed_moves_half_as_far() {
        assert_eq!(parallax_offset(200.0, 0.5), 100.0);
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
    }

    #[test]
    fn zero_speed_keeps_the_image_still() {
        for y in [0.0, 1.0, 200.0, 12_345.0] {
            assert_eq!(parallax_offset(y, 0.0), 0.0);
        }
    }

    #[test]
    fn layer_style_carries_translation_and_image() {
        let style = layer_style("/assets/hero.jpg", 100.0);
        assert!(style.starts_with("transform: translateY(100px);"));
        assert!(style.contains("background-image: url('/assets/hero.jpg');"));
        assert!(style.contains("background-size: cover;"));
        assert!(style.contains("will-change: transform;"));
    }

    #[test]
    fn layer_style_escapes_quotes_in_url() {
        let style = layer_style("/assets/it's.jpg", 0.0);
        assert!(style.contains("url('/assets/it%27s.jpg')"));
    }

    #[test]
    fn speed_change_applies_without_remount() {
        let scroll = ManualScroll::default();
        let hub = ScrollHub::new(scroll.clone());
        let owner = Owner::new();

        let speed = RwSignal::new(0.5);
        let translate = owner.with(|| {
            let scroll_y = track_scroll(&hub);
            parallax_translate(scroll_y.into(), speed.into())
        });

        scroll.scroll_to(200.0);
        assert_eq!(translate.get_untracked(), 100.0);

        speed.set(0.25);
        scroll.scroll_to(200.0);
        assert_eq!(translate.get_untracked(), 50.0);
        assert_eq!(scroll.attach_count(), 1);

        owner.cleanup();
    }

    #[test]
    fn same_offset_twice_gives_same_translation() {
        let scroll = ManualScroll::default();
        let hub = ScrollHub::new(scroll.clone());
        let owner = Owner::new();
        let translate = owner.with(|| {
            parallax_translate(track_scroll(&hub).into(), Signal::stored(0.5))
        });

        scroll.scroll_to(300.0);
        let first = translate.get_untracked();
        scroll.scroll_to(300.0);
        assert_eq!(first, translate.get_untracked());
        assert_eq!(first, 150.0);

        owner.cleanup();
    }

    #[test]
    fn unmount_leaves_no_listener() {
        let scroll = ManualScroll::default();
        let hub = ScrollHub::new(scroll.clone());
        let owner = Owner::new();
        owner.with(|| {
            provide_scroll_hub(hub.clone());
            let props = ParallaxBackgroundProps::builder()
                .image_src("/assets/hero.jpg")
                .speed(0.3)
                .build();
            let _ = ParallaxBackground(props);
        });
        assert_eq!(hub.subscriber_count(), 1);

        owner.cleanup();
        assert_eq!(hub.subscriber_count(), 0);
        assert!(!scroll.is_listening());
    }
}
