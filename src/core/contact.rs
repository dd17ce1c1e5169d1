//! Outbound contact links and call-to-action identifiers.

/// Business contact details shown in the footer and header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    /// International number, any formatting
    pub whatsapp_number: &'static str,
    pub whatsapp_display: &'static str,
}

pub const CONTACT: ContactInfo = ContactInfo {
    email: "marquesaexpress@gmail.com",
    whatsapp_number: "+584246312483",
    whatsapp_display: "+58 424-6312483",
};

impl ContactInfo {
    pub fn whatsapp_url(&self) -> String {
        whatsapp_url(self.whatsapp_number)
    }

    pub fn mailto_url(&self) -> String {
        mailto_url(self.email)
    }
}

/// `https://wa.me/<digits>`; every non-digit in `number` is dropped.
pub fn whatsapp_url(number: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}")
}

pub fn mailto_url(email: &str) -> String {
    format!("mailto:{email}")
}

/// A social profile link with its 24x24 SVG path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon_path: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Facebook",
        href: "https://www.facebook.com/marquesaexpress",
        icon_path: "M18 2h-3a5 5 0 00-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 011-1h3z",
    },
    SocialLink {
        name: "Instagram",
        href: "http://instagram.com/marquesaexpress",
        icon_path: "M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.85s-.012 3.584-.07 4.85c-.148 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07s-3.584-.012-4.85-.07c-3.252-.148-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.85s.012-3.584.07-4.85c.149-3.225 1.664-4.771 4.919-4.919C8.416 2.175 8.796 2.163 12 2.163zm0 1.442c-3.116 0-3.479.012-4.697.068-2.859.13-4.011 1.28-4.142 4.142-.056 1.218-.067 1.575-.067 4.697s.011 3.479.067 4.697c.13 2.861 1.282 4.011 4.142 4.142 1.218.056 1.58.068 4.697.068s3.479-.012 4.697-.068c2.861-.13 4.011-1.281 4.142-4.142.056-1.218.067-1.575.067-4.697s-.011-3.479-.067-4.697c-.13-2.861-1.282-4.011-4.142-4.142-1.218-.056-1.58-.068-4.697-.068zm0 3.192c-2.703 0-4.89 2.187-4.89 4.89s2.187 4.89 4.89 4.89 4.89-2.187 4.89-4.89-2.187-4.89-4.89-4.89zm0 7.939c-1.686 0-3.05-1.363-3.05-3.05s1.364-3.05 3.05-3.05 3.05 1.363 3.05 3.05-1.364 3.05-3.05 3.05zm6.406-7.348c-.765 0-1.385.62-1.385 1.385s.62 1.385 1.385 1.385 1.385-.62 1.385-1.385-.62-1.385-1.385-1.385z",
    },
];

/// Designer credit in the footer
pub const CREDIT_URL: &str = "https://www.impulsa360.tech";

/// Buttons with no backend yet. Dispatch only logs; a checkout or booking
/// integration plugs in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaAction {
    /// "Comenzar Ahora" in the mobile menu
    GetStarted,
    /// "Ver Demo" / "Solicitar Demo"
    Demo,
    /// "Obtener Ahora" on a product card, carrying the product id
    Purchase(&'static str),
}

impl CtaAction {
    /// Diagnostic line emitted when the action is triggered
    pub fn log_line(&self) -> String {
        match self {
            CtaAction::GetStarted => "CTA clicked".to_string(),
            CtaAction::Demo => "Demo requested".to_string(),
            CtaAction::Purchase(id) => {
                let name = crate::core::content::PRODUCTS
                    .iter()
                    .find(|p| p.id == *id)
                    .map(|p| p.name)
                    .unwrap_or(*id);
                format!("Purchase initiated for: {name}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_url_digits_only() {
        assert_eq!(whatsapp_url("+584246312483"), "https://wa.me/584246312483");
        assert_eq!(whatsapp_url("+58 424-631 2483"), "https://wa.me/584246312483");
        assert_eq!(whatsapp_url("(58) 424.631.2483"), "https://wa.me/584246312483");
    }

    #[test]
    fn test_contact_urls() {
        assert_eq!(CONTACT.whatsapp_url(), "https://wa.me/584246312483");
        assert_eq!(CONTACT.mailto_url(), "mailto:marquesaexpress@gmail.com");
    }

    #[test]
    fn test_display_number_matches_link() {
        assert_eq!(whatsapp_url(CONTACT.whatsapp_display), CONTACT.whatsapp_url());
    }

    #[test]
    fn test_cta_log_lines() {
        assert_eq!(CtaAction::GetStarted.log_line(), "CTA clicked");
        assert_eq!(CtaAction::Demo.log_line(), "Demo requested");
        assert_eq!(
            CtaAction::Purchase("video-guides").log_line(),
            "Purchase initiated for: Video-Guías"
        );
        assert_eq!(
            CtaAction::Purchase("unknown").log_line(),
            "Purchase initiated for: unknown"
        );
    }

    #[test]
    fn test_social_links() {
        let names: Vec<_> = SOCIAL_LINKS.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Facebook", "Instagram"]);
        assert!(SOCIAL_LINKS.iter().all(|s| s.href.starts_with("http")));
    }
}
