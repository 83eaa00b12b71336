use super::error::ThemeError;

/// Display preference of the site. `Ruthless` is the default scheme,
/// `Tron` the alternate one that marks the document root.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Default)]
pub enum Theme {
    #[default]
    Ruthless,
    Tron,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Ruthless, Theme::Tron];

    /// Canonical tag written to storage and to the root attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Ruthless => "ruthless",
            Self::Tron => "tron",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ruthless => "Ruthless",
            Self::Tron => "TRON",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Ruthless => Self::Tron,
            Self::Tron => Self::Ruthless,
        }
    }

    /// Whether the document root carries the theme attribute.
    pub fn marks_root(self) -> bool {
        self == Self::Tron
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Ruthless => Palette::ruthless(),
            Self::Tron => Palette::tron(),
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = ThemeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let theme = match value {
            "ruthless" => Self::Ruthless,
            "tron" => Self::Tron,
            _ => return Err(ThemeError::UnrecognizedTag(value.to_owned())),
        };
        debug_assert_eq!(
            theme.tag(),
            value,
            "resulting theme's tag must match with the provided value"
        );
        Ok(theme)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub background_secondary: &'static str,
    pub background_elevated: &'static str,
    pub foreground: &'static str,
    pub foreground_secondary: &'static str,
    pub accent_primary: &'static str,
    pub accent_primary_hover: &'static str,
    pub accent_primary_light: &'static str,
    pub metallic_primary: &'static str,
    pub metallic_light: &'static str,
    pub metallic_dark: &'static str,
    pub border: &'static str,
}

impl Palette {
    fn ruthless() -> Self {
        let steel = "#9CA3AF";
        Self {
            background: "#0A0A0A",
            background_secondary: "#111111",
            background_elevated: "#171717",
            foreground: "#F5F5F5",
            foreground_secondary: "#A3A3A3",
            accent_primary: "#DC2626",
            accent_primary_hover: "#B91C1C",
            accent_primary_light: "rgba(220, 38, 38, 0.15)",
            metallic_primary: steel,
            metallic_light: "#3F3F46",
            metallic_dark: "#E4E4E7",
            border: "#27272A",
        }
    }

    fn tron() -> Self {
        let cyan = "#00E5FF";
        Self {
            background: "#02060D",
            background_secondary: "#06101C",
            background_elevated: "#0B1A2B",
            foreground: "#E0FBFF",
            foreground_secondary: "#7FB8C8",
            accent_primary: cyan,
            accent_primary_hover: "#00B8D4",
            accent_primary_light: "rgba(0, 229, 255, 0.15)",
            metallic_primary: "#4DD0E1",
            metallic_light: "#12324A",
            metallic_dark: "#B2EBF2",
            border: "#0F2A3F",
        }
    }

    /// CSS custom property declarations consumed through `var(--...)`.
    pub fn declarations(&self) -> String {
        [
            ("background", self.background),
            ("background-secondary", self.background_secondary),
            ("background-elevated", self.background_elevated),
            ("foreground", self.foreground),
            ("foreground-secondary", self.foreground_secondary),
            ("accent-primary", self.accent_primary),
            ("accent-primary-hover", self.accent_primary_hover),
            ("accent-primary-light", self.accent_primary_light),
            ("metallic-primary", self.metallic_primary),
            ("metallic-light", self.metallic_light),
            ("metallic-dark", self.metallic_dark),
            ("border", self.border),
        ]
        .iter()
        .map(|(name, value)| format!("--{name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_back_to_their_theme() {
        for theme in Theme::ALL {
            assert_eq!(Theme::try_from(theme.tag()).unwrap(), theme);
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(
            Theme::try_from("neon"),
            Err(ThemeError::UnrecognizedTag("neon".into()))
        );
        assert!(Theme::try_from("Tron").is_err());
        assert!(Theme::try_from("").is_err());
    }

    #[test]
    fn opposite_flips_between_the_two_variants() {
        assert_eq!(Theme::Ruthless.opposite(), Theme::Tron);
        assert_eq!(Theme::Tron.opposite(), Theme::Ruthless);
        assert_eq!(Theme::default(), Theme::Ruthless);
    }

    #[test]
    fn only_the_alternate_theme_marks_the_root() {
        assert!(!Theme::Ruthless.marks_root());
        assert!(Theme::Tron.marks_root());
    }

    #[test]
    fn palette_declarations_define_every_variable() {
        let declarations = Theme::Tron.palette().declarations();
        assert!(declarations.contains("--accent-primary: #00E5FF;"));
        assert_eq!(declarations.lines().count(), 12);
    }
}
