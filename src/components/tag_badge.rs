//! Tag Badge Component
//!
//! Small colored tag marker. Color resolution is two-tier: an explicit
//! bg/fg pair renders verbatim as inline style, otherwise the named palette
//! key is looked up, with unknown keys falling back to the blue entry.
//! Tags created before custom colors existed rely on the palette path.

use leptos::prelude::*;

use crate::models::Tag;

/// Named palette: tag color key -> badge classes
const TAG_PALETTE: &[(&str, &str)] = &[
    ("red", "bg-red-100 text-red-600"),
    ("blue", "bg-blue-100 text-blue-600"),
    ("green", "bg-green-100 text-green-600"),
    ("amber", "bg-amber-100 text-amber-600"),
    ("purple", "bg-purple-100 text-purple-600"),
    ("slate", "bg-slate-100 text-slate-600"),
    ("emerald", "bg-emerald-100 text-emerald-600"),
    ("pink", "bg-pink-100 text-pink-600"),
    ("orange", "bg-orange-100 text-orange-600"),
];

const DEFAULT_PALETTE_KEY: &str = "blue";

/// Resolved display colors for a tag
#[derive(Clone, Debug, PartialEq)]
pub enum TagColors {
    /// Explicit bg/fg pair, used verbatim
    Explicit { bg: String, fg: String },
    /// Palette badge classes
    Palette(&'static str),
}

fn palette_classes(key: &str) -> &'static str {
    TAG_PALETTE
        .iter()
        .find(|(k, _)| *k == key)
        .or_else(|| TAG_PALETTE.iter().find(|(k, _)| *k == DEFAULT_PALETTE_KEY))
        .map(|(_, classes)| *classes)
        .unwrap_or_default()
}

pub fn resolve_tag_colors(tag: &Tag) -> TagColors {
    if let (Some(bg), Some(fg)) = (&tag.bg_color, &tag.fg_color) {
        return TagColors::Explicit {
            bg: bg.clone(),
            fg: fg.clone(),
        };
    }
    TagColors::Palette(palette_classes(&tag.color))
}

#[component]
pub fn TagBadge(tag: Tag) -> impl IntoView {
    match resolve_tag_colors(&tag) {
        TagColors::Explicit { bg, fg } => view! {
            <span
                class="tag-badge"
                style=format!("background-color: {}; color: {};", bg, fg)
            >
                {tag.name}
            </span>
        }
        .into_any(),
        TagColors::Palette(classes) => view! {
            <span class=format!("tag-badge {}", classes)>{tag.name}</span>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tag(color: &str, bg: Option<&str>, fg: Option<&str>) -> Tag {
        Tag {
            id: "t1".to_string(),
            name: "Urgent".to_string(),
            color: color.to_string(),
            bg_color: bg.map(str::to_string),
            fg_color: fg.map(str::to_string),
            created_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn explicit_pair_wins_over_palette_key() {
        let tag = make_tag("green", Some("#112233"), Some("#ffffff"));
        assert_eq!(
            resolve_tag_colors(&tag),
            TagColors::Explicit {
                bg: "#112233".to_string(),
                fg: "#ffffff".to_string(),
            }
        );
    }

    #[test]
    fn known_key_maps_to_its_palette_entry() {
        let tag = make_tag("green", None, None);
        assert_eq!(
            resolve_tag_colors(&tag),
            TagColors::Palette("bg-green-100 text-green-600")
        );
    }

    #[test]
    fn unknown_key_falls_back_to_blue() {
        let tag = make_tag("magenta", None, None);
        assert_eq!(
            resolve_tag_colors(&tag),
            TagColors::Palette("bg-blue-100 text-blue-600")
        );
    }

    #[test]
    fn partial_override_still_uses_the_palette() {
        // bg without fg is not a usable pair
        let tag = make_tag("red", Some("#112233"), None);
        assert_eq!(
            resolve_tag_colors(&tag),
            TagColors::Palette("bg-red-100 text-red-600")
        );
    }
}
