//! Remote web font loading.

use wasm_bindgen::JsCast;

use crate::config::FontConfig;
use crate::error::{LandingError, Result};

/// Add the provider stylesheet to `<head>` and point the font CSS variable
/// at the family. Loading the same family twice is a no-op.
pub fn load_font(font: &FontConfig) -> Result<()> {
    let document = web_sys::window()
        .ok_or(LandingError::NoWindow)?
        .document()
        .ok_or(LandingError::NoDocument)?;
    let head = document.head().ok_or(LandingError::NoDocument)?;

    let selector = format!("link[data-font-family=\"{}\"]", font.family);
    if document
        .query_selector(&selector)
        .map_err(LandingError::dom)?
        .is_none()
    {
        let link = document
            .create_element("link")
            .map_err(LandingError::dom)?;
        link.set_attribute("rel", "stylesheet")
            .map_err(LandingError::dom)?;
        link.set_attribute("href", &font.stylesheet_url())
            .map_err(LandingError::dom)?;
        link.set_attribute("data-font-family", &font.family)
            .map_err(LandingError::dom)?;
        head.append_child(&link).map_err(LandingError::dom)?;
    }

    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        root.style()
            .set_property(&font.css_variable, &font.font_stack())
            .map_err(LandingError::dom)?;
    }

    Ok(())
}
