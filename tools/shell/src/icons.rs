use portal_core::IconFamily;

static IONICONS: [(&str, &str); 8] = [
    ("home", "🏠"),
    ("calendar", "📅"),
    ("chatbubbles", "💬"),
    ("person-circle", "👤"),
    ("newspaper", "📰"),
    ("people", "👥"),
    ("school", "🎓"),
    ("arrow-back", "⬅"),
];

static MATERIAL_ICONS: [(&str, &str); 5] = [
    ("dashboard", "▦"),
    ("fact-check", "✔"),
    ("analytics", "📈"),
    ("manage-accounts", "⚙"),
    ("sports-soccer", "⚽"),
];

const MISSING_ICON: &str = "•";

/// Glyph for an icon name of the given family
pub(crate) fn icon_glyph(family: IconFamily, name: &str) -> &'static str {
    let table: &[(&str, &'static str)] = match family {
        IconFamily::Ionicons => &IONICONS,
        IconFamily::MaterialIcons => &MATERIAL_ICONS,
    };
    table
        .iter()
        .find(|(icon, _)| *icon == name)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(MISSING_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::Role;

    #[test]
    fn known_icons() {
        assert_eq!(icon_glyph(IconFamily::Ionicons, "home"), "🏠");
        assert_eq!(icon_glyph(IconFamily::MaterialIcons, "sports-soccer"), "⚽");
    }

    #[test]
    fn family_matters() {
        assert_eq!(icon_glyph(IconFamily::MaterialIcons, "home"), MISSING_ICON);
    }

    #[test]
    fn every_configured_icon_has_a_glyph() {
        for role in Role::all() {
            for tab in role.navigation_config().tabs {
                assert_ne!(
                    icon_glyph(tab.icon_family, tab.icon),
                    MISSING_ICON,
                    "{} {}",
                    tab.icon_family.as_str(),
                    tab.icon
                );
            }
        }
    }
}
