use leptos::prelude::*;

use crate::core::content::Glyph;

/// SVG path data plus how to paint it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconShape {
    pub path: &'static str,
    pub view_box: &'static str,
    /// Outline icons are stroked, solid ones filled
    pub stroked: bool,
}

impl IconShape {
    const fn outline(path: &'static str) -> Self {
        Self {
            path,
            view_box: "0 0 24 24",
            stroked: true,
        }
    }

    const fn solid(path: &'static str, view_box: &'static str) -> Self {
        Self {
            path,
            view_box,
            stroked: false,
        }
    }
}

#[component]
pub fn Icon(
    shape: IconShape,
    #[prop(default = "w-5 h-5")] class: &'static str,
) -> impl IntoView {
    if shape.stroked {
        view! {
            <svg class=class fill="none" stroke="currentColor" viewBox=shape.view_box aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=shape.path />
            </svg>
        }
        .into_any()
    } else {
        view! {
            <svg class=class fill="currentColor" viewBox=shape.view_box aria-hidden="true">
                <path fill-rule="evenodd" clip-rule="evenodd" d=shape.path />
            </svg>
        }
        .into_any()
    }
}

/// Icon for a content glyph
#[component]
pub fn GlyphIcon(glyph: Glyph, #[prop(default = "w-6 h-6")] class: &'static str) -> impl IntoView {
    view! { <Icon shape=glyph_shape(glyph) class=class /> }
}

pub fn glyph_shape(glyph: Glyph) -> IconShape {
    match glyph {
        Glyph::CheckCircle => icons::CHECK_CIRCLE,
        Glyph::Book => icons::BOOK,
        Glyph::Lightning => icons::LIGHTNING,
        Glyph::Users => icons::USERS,
        Glyph::Clock => icons::CLOCK,
        Glyph::Chart => icons::CHART,
        Glyph::Video => icons::VIDEO,
        Glyph::Package => icons::PACKAGE,
    }
}

pub mod icons {
    use super::IconShape;

    pub const CHECK_CIRCLE: IconShape = IconShape::outline("M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z");
    pub const BOOK: IconShape = IconShape::outline(
        "M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.746 0 3.332.477 4.5 1.253v13C19.832 18.477 18.246 18 16.5 18c-1.746 0-3.332.477-4.5 1.253",
    );
    pub const LIGHTNING: IconShape = IconShape::outline("M13 10V3L4 14h7v7l9-11h-7z");
    pub const USERS: IconShape = IconShape::outline(
        "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
    );
    pub const CLOCK: IconShape = IconShape::outline("M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z");
    pub const CHART: IconShape = IconShape::outline(
        "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z",
    );
    pub const VIDEO: IconShape = IconShape::outline(
        "M15 10l4.553-2.276A1 1 0 0121 8.618v6.764a1 1 0 01-1.447.894L15 14M5 18h8a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v8a2 2 0 002 2z",
    );
    pub const PACKAGE: IconShape = IconShape::outline("M20 7l-8-4-8 4m16 0l-8 4m8-4v10l-8 4m0-10L4 7m8 4v10M4 7v10l8 4");

    pub const ARROW_RIGHT: IconShape = IconShape::outline("M13 7l5 5m0 0l-5 5m5-5H6");
    pub const MAIL: IconShape = IconShape::outline(
        "M3 8l7.89 4.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
    );
    pub const HOME: IconShape = IconShape::outline(
        "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6",
    );
    pub const CHAT: IconShape = IconShape::outline(
        "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z",
    );

    pub const CHECK: IconShape = IconShape::solid(
        "M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z",
        "0 0 20 20",
    );
    pub const STAR: IconShape = IconShape::solid(
        "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z",
        "0 0 20 20",
    );
    pub const VERIFIED: IconShape = IconShape::solid(
        "M6.267 3.455a3.066 3.066 0 001.745-.723 3.066 3.066 0 013.976 0 3.066 3.066 0 001.745.723 3.066 3.066 0 012.812 2.812c.051.643.304 1.254.723 1.745a3.066 3.066 0 010 3.976 3.066 3.066 0 00-.723 1.745 3.066 3.066 0 01-2.812 2.812 3.066 3.066 0 00-1.745.723 3.066 3.066 0 01-3.976 0 3.066 3.066 0 00-1.745-.723 3.066 3.066 0 01-2.812-2.812 3.066 3.066 0 00-.723-1.745 3.066 3.066 0 010-3.976 3.066 3.066 0 00.723-1.745 3.066 3.066 0 012.812-2.812zm7.44 5.252a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z",
        "0 0 20 20",
    );
    pub const QUOTE: IconShape = IconShape::solid(
        "M14.017 21v-7.391c0-5.704 3.731-9.57 8.983-10.609l.995 2.151c-2.432.917-3.995 3.638-3.995 5.849h4v10h-9.983zm-14.017 0v-7.391c0-5.704 3.748-9.57 9-10.609l.996 2.151c-2.433.917-3.996 3.638-3.996 5.849h3.983v10h-9.983z",
        "0 0 24 24",
    );
    pub const WHATSAPP: IconShape = IconShape::solid(
        "M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 00-3.48-8.413z",
        "0 0 24 24",
    );

    /// Social icons carry their own path data
    pub const fn social(path: &'static str) -> IconShape {
        IconShape::solid(path, "0 0 24 24")
    }
}
