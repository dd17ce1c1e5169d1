//! Static page copy
//!
//! Every card on the page is rendered from one of the tables below. The
//! records are compile-time constants: they are never mutated, fetched or
//! persisted.

/// Glyphs referenced by content records; `ui::icon` owns the SVG data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    CheckCircle,
    Book,
    Lightning,
    Users,
    Clock,
    Chart,
    Video,
    Package,
}

/// Gradient token shared by icons, avatars and glow effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gradient {
    Amber,
    Red,
    AmberToRed,
    RedToAmber,
}

impl Gradient {
    /// Tailwind `from-*`/`to-*` pair for this token
    pub fn classes(&self) -> &'static str {
        match self {
            Gradient::Amber => "from-amber-400 to-amber-600",
            Gradient::Red => "from-red-400 to-red-600",
            Gradient::AmberToRed => "from-amber-400 to-red-400",
            Gradient::RedToAmber => "from-red-400 to-amber-400",
        }
    }
}

/// A "why choose us" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: Gradient,
}

/// One line of a product's benefit list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub id: &'static str,
    pub text: &'static str,
}

/// A digital product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub benefits: &'static [Benefit],
    /// Highlighted with a badge and a larger card
    pub popular: bool,
    pub glyph: Glyph,
    pub gradient: Gradient,
}

/// A customer quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub business: &'static str,
    pub content: &'static str,
    /// Star rating, 1..=5
    pub rating: u8,
    /// `YYYY-MM`
    pub date: &'static str,
    pub verified: bool,
    pub location: &'static str,
    pub gradient: Gradient,
}

/// Check-mark badge under the hero headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroBadge {
    pub id: &'static str,
    pub text: &'static str,
}

pub const HERO_BADGES: &[HeroBadge] = &[
    HeroBadge {
        id: "proven",
        text: "Recetas probadas",
    },
    HeroBadge {
        id: "simple",
        text: "Formato sencillo",
    },
    HeroBadge {
        id: "high-performance",
        text: "Alto rendimiento",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "proven-recipes",
        glyph: Glyph::CheckCircle,
        title: "Recetas Probadas",
        description: "Fórmulas testadas en el mercado que garantizan resultados consistentes y rentables.",
        gradient: Gradient::Amber,
    },
    Feature {
        id: "simple-formats",
        glyph: Glyph::Book,
        title: "Formatos Sencillos",
        description: "Ebooks y video-guías fáciles de seguir, diseñados para el aprendizaje rápido.",
        gradient: Gradient::Red,
    },
    Feature {
        id: "high-performance",
        glyph: Glyph::Lightning,
        title: "Alto Rendimiento",
        description: "Estrategias optimizadas para maximizar la rentabilidad de tu negocio de panadería.",
        gradient: Gradient::AmberToRed,
    },
    Feature {
        id: "active-community",
        glyph: Glyph::Users,
        title: "Comunidad Activa",
        description: "Acceso a una comunidad de emprendedores exitosos en el sector de panadería.",
        gradient: Gradient::RedToAmber,
    },
    Feature {
        id: "fast-learning",
        glyph: Glyph::Clock,
        title: "Aprendizaje Rápido",
        description: "Metodología diseñada para que domines las técnicas en el menor tiempo posible.",
        gradient: Gradient::Amber,
    },
    Feature {
        id: "results-tracking",
        glyph: Glyph::Chart,
        title: "Seguimiento de Resultados",
        description: "Herramientas para monitorear el crecimiento y rentabilidad de tu negocio.",
        gradient: Gradient::Red,
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        id: "ebook-premium",
        name: "Ebook Premium",
        tagline: "Recetas Exclusivas",
        description: "50+ recetas probadas de panadería y pastelería con fórmulas de alto rendimiento.",
        benefits: &[
            Benefit {
                id: "instant-access",
                text: "Acceso inmediato tras la compra",
            },
            Benefit {
                id: "downloadable",
                text: "Descarga ilimitada en todos tus dispositivos",
            },
            Benefit {
                id: "offline-reading",
                text: "Lectura offline sin conexión a internet",
            },
            Benefit {
                id: "lifetime-access",
                text: "Acceso de por vida sin renovaciones",
            },
            Benefit {
                id: "updates",
                text: "Actualizaciones gratuitas automáticas",
            },
            Benefit {
                id: "printable",
                text: "Versión imprimible para tu cocina",
            },
        ],
        popular: true,
        glyph: Glyph::Book,
        gradient: Gradient::Amber,
    },
    Product {
        id: "video-guides",
        name: "Video-Guías",
        tagline: "Aprendizaje Visual",
        description: "Tutoriales en video HD para dominar las técnicas más avanzadas de panadería.",
        benefits: &[
            Benefit {
                id: "hd-quality",
                text: "Videos en alta definición (1080p)",
            },
            Benefit {
                id: "mobile-friendly",
                text: "Optimizado para móviles y tablets",
            },
            Benefit {
                id: "downloadable",
                text: "Descarga para ver sin internet",
            },
            Benefit {
                id: "lifetime-access",
                text: "Acceso permanente sin límites",
            },
            Benefit {
                id: "multiple-devices",
                text: "Sincronización entre dispositivos",
            },
            Benefit {
                id: "bonus-content",
                text: "Contenido bonus exclusivo",
            },
        ],
        popular: false,
        glyph: Glyph::Video,
        gradient: Gradient::Red,
    },
    Product {
        id: "complete-bundle",
        name: "Paquete Completo",
        tagline: "Todo Incluido",
        description: "Acceso completo a todos nuestros productos digitales con beneficios exclusivos.",
        benefits: &[
            Benefit {
                id: "all-products",
                text: "Todos los productos incluidos",
            },
            Benefit {
                id: "exclusive-content",
                text: "Contenido exclusivo solo para miembros",
            },
            Benefit {
                id: "community-access",
                text: "Acceso a comunidad privada",
            },
            Benefit {
                id: "priority-support",
                text: "Soporte prioritario 24/7",
            },
            Benefit {
                id: "early-access",
                text: "Acceso anticipado a nuevos productos",
            },
            Benefit {
                id: "money-back",
                text: "Garantía de satisfacción 30 días",
            },
        ],
        popular: false,
        glyph: Glyph::Package,
        gradient: Gradient::AmberToRed,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "maria-gonzalez",
        name: "María González",
        role: "Propietaria de Panadería",
        business: "Dulce Hogar",
        content: "Gracias a Marquesa Express, mi panadería ha crecido significativamente en los últimos meses. Las recetas son claras y los resultados consistentes.",
        rating: 5,
        date: "2024-11",
        verified: true,
        location: "Madrid, España",
        gradient: Gradient::Amber,
    },
    Testimonial {
        id: "carlos-rodriguez",
        name: "Carlos Rodríguez",
        role: "Emprendedor",
        business: "Pastelería CR",
        content: "Los video-guías me ayudaron a dominar técnicas nuevas. El contenido es profesional y fácil de seguir.",
        rating: 5,
        date: "2024-10",
        verified: true,
        location: "Barcelona, España",
        gradient: Gradient::Red,
    },
    Testimonial {
        id: "ana-martinez",
        name: "Ana Martínez",
        role: "Chef Pastelera",
        business: "Independiente",
        content: "La calidad del contenido es muy buena. Cada receta está bien explicada y funciona como se describe.",
        rating: 4,
        date: "2024-09",
        verified: true,
        location: "Valencia, España",
        gradient: Gradient::AmberToRed,
    },
    Testimonial {
        id: "roberto-silva",
        name: "Roberto Silva",
        role: "Dueño de Cafetería",
        business: "Café Silva",
        content: "He implementado varias recetas y mis clientes están contentos. Buen material de referencia.",
        rating: 5,
        date: "2024-10",
        verified: true,
        location: "Sevilla, España",
        gradient: Gradient::RedToAmber,
    },
    Testimonial {
        id: "laura-fernandez",
        name: "Laura Fernández",
        role: "Instructora",
        business: "Escuela de Repostería",
        content: "Recomiendo estos recursos a mis estudiantes. Son completos y bien estructurados.",
        rating: 5,
        date: "2024-11",
        verified: true,
        location: "Bilbao, España",
        gradient: Gradient::Amber,
    },
    Testimonial {
        id: "miguel-torres",
        name: "Miguel Torres",
        role: "Panadero Artesanal",
        business: "Pan Torres",
        content: "Después de muchos años en el negocio, encontré técnicas útiles que no conocía. Buen material.",
        rating: 4,
        date: "2024-09",
        verified: true,
        location: "Málaga, España",
        gradient: Gradient::Red,
    },
];

/// Mean star rating and review count, used for structured data.
pub fn aggregate_rating(testimonials: &[Testimonial]) -> Option<(f64, usize)> {
    if testimonials.is_empty() {
        return None;
    }
    let total: u32 = testimonials.iter().map(|t| u32::from(t.rating)).sum();
    Some((f64::from(total) / testimonials.len() as f64, testimonials.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::YearMonth;
    use std::collections::HashSet;

    fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>, table: &str) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate id `{id}` in {table}");
        }
    }

    #[test]
    fn test_ids_are_unique_per_table() {
        assert_unique(FEATURES.iter().map(|f| f.id), "FEATURES");
        assert_unique(PRODUCTS.iter().map(|p| p.id), "PRODUCTS");
        assert_unique(TESTIMONIALS.iter().map(|t| t.id), "TESTIMONIALS");
        assert_unique(HERO_BADGES.iter().map(|b| b.id), "HERO_BADGES");
    }

    #[test]
    fn test_benefit_ids_unique_within_product() {
        for product in PRODUCTS {
            assert_unique(product.benefits.iter().map(|b| b.id), product.id);
            assert_eq!(product.benefits.len(), 6, "{}", product.id);
        }
    }

    #[test]
    fn test_exactly_one_popular_product() {
        let popular: Vec<_> = PRODUCTS.iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].id, "ebook-premium");
    }

    #[test]
    fn test_testimonial_ratings_and_dates() {
        for t in TESTIMONIALS {
            assert!((1..=5).contains(&t.rating), "{} rating {}", t.id, t.rating);
            assert!(YearMonth::parse(t.date).is_ok(), "{} date {}", t.id, t.date);
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(PRODUCTS.len(), 3);
        assert_eq!(TESTIMONIALS.len(), 6);
        assert_eq!(HERO_BADGES.len(), 3);
    }

    #[test]
    fn test_gradient_classes() {
        assert_eq!(Gradient::Amber.classes(), "from-amber-400 to-amber-600");
        assert_eq!(Gradient::RedToAmber.classes(), "from-red-400 to-amber-400");
    }

    #[test]
    fn test_aggregate_rating() {
        let (mean, count) = aggregate_rating(TESTIMONIALS).unwrap();
        assert_eq!(count, 6);
        assert!((mean - 28.0 / 6.0).abs() < 1e-9);
        assert!(aggregate_rating(&[]).is_none());
    }
}
