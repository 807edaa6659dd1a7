//! Template filters registered with Tera.
//!
//! Filters are plain functions. They are attached to a `Tera` instance
//! explicitly through [`register_filters`], which the renderer calls once
//! when it is constructed.

mod wrap_images;

use tera::Tera;

pub use wrap_images::{wrap_images, wrap_images_filter};

/// Name under which [`wrap_images_filter`] is exposed to templates.
pub const WRAP_IMAGES: &str = "wrap_images";

/// Register every filter this crate provides on the given Tera instance.
pub fn register_filters(tera: &mut Tera) {
    tera.register_filter(WRAP_IMAGES, wrap_images_filter);
    log::debug!("registered template filter `{WRAP_IMAGES}`");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tera::Context;

    #[test]
    fn test_register_filters_exposes_wrap_images() {
        let mut tera = Tera::default();
        register_filters(&mut tera);

        let mut context = Context::new();
        context.insert("html", r#"<img src="a.png">"#);

        let output = tera
            .render_str("{{ html | wrap_images | safe }}", &context)
            .unwrap();
        assert_eq!(output, r#"<p align="middle"><img src="a.png"></p>"#);
    }

    #[test]
    fn test_filter_unknown_without_registration() {
        let mut tera = Tera::default();
        let mut context = Context::new();
        context.insert("html", "<img>");

        let result = tera.render_str("{{ html | wrap_images }}", &context);
        assert!(result.is_err());
    }

    #[test]
    fn test_register_filters_twice_is_harmless() {
        let mut tera = Tera::default();
        register_filters(&mut tera);
        register_filters(&mut tera);

        let mut context = Context::new();
        context.insert("html", "<img>");

        let output = tera
            .render_str("{{ html | wrap_images | safe }}", &context)
            .unwrap();
        assert_eq!(output, r#"<p align="middle"><img></p>"#);
    }
}
