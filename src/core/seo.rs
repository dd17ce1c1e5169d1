//! Page metadata and JSON-LD structured data for the landing page.

use serde_json::{Value, json};

use crate::core::contact::{CONTACT, SOCIAL_LINKS};
use crate::core::content::{PRODUCTS, TESTIMONIALS, aggregate_rating};

pub const SITE_NAME: &str = "Marquesa Express";
pub const CANONICAL_URL: &str = "https://marquesaexpress.com/";
pub const PAGE_TITLE: &str = "Marquesa Express - Recetas y guías para tu negocio de repostería";
pub const PAGE_DESCRIPTION: &str = "Aprende a preparar y vender marquesas con recetas probadas, \
     video-guías paso a paso y el acompañamiento de una comunidad de emprendedores.";
pub const KEYWORDS: &str =
    "marquesa, repostería, recetas, negocio de postres, ebook, video-guías, emprendimiento";
pub const OG_IMAGE: &str = "https://marquesaexpress.com/img/LOGO%20FINAL%20MARQUESA%20EXPRESS.png";

/// `schema.org` description of the business and its products.
pub fn structured_data() -> Value {
    let offers: Vec<Value> = PRODUCTS
        .iter()
        .map(|product| {
            json!({
                "@type": "Product",
                "name": product.name,
                "description": product.description,
            })
        })
        .collect();
    let same_as: Vec<&str> = SOCIAL_LINKS.iter().map(|link| link.href).collect();

    let mut data = json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": SITE_NAME,
        "url": CANONICAL_URL,
        "logo": OG_IMAGE,
        "email": CONTACT.email,
        "telephone": CONTACT.whatsapp_number,
        "sameAs": same_as,
        "makesOffer": offers,
    });

    if let Some((mean, count)) = aggregate_rating(TESTIMONIALS) {
        data["aggregateRating"] = json!({
            "@type": "AggregateRating",
            "ratingValue": format!("{mean:.1}"),
            "bestRating": "5",
            "reviewCount": count,
        });
    }

    data
}

/// [`structured_data`] serialised for an inline `<script>`.
pub fn structured_data_json() -> String {
    // `</` cannot appear inside a script element
    structured_data().to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_data_shape() {
        let data = structured_data();
        assert_eq!(data["@type"], "Organization");
        assert_eq!(data["name"], SITE_NAME);
        assert_eq!(data["email"], "marquesaexpress@gmail.com");
        assert_eq!(data["makesOffer"].as_array().unwrap().len(), PRODUCTS.len());
        assert_eq!(data["sameAs"].as_array().unwrap().len(), SOCIAL_LINKS.len());
    }

    #[test]
    fn test_aggregate_rating() {
        let rating = &structured_data()["aggregateRating"];
        assert_eq!(rating["reviewCount"], TESTIMONIALS.len());
        assert_eq!(rating["ratingValue"], "4.7");
    }

    #[test]
    fn test_json_is_script_safe() {
        let json = structured_data_json();
        assert!(!json.contains("</"));
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["url"], CANONICAL_URL);
    }
}
