use web_sys::Element;

/// Default data source: the public stats.json published by the MRR cron job.
/// Overridable per widget instance via the `src` attribute so tests and
/// self-hosted pages can point at a fixture instead of the live file.
pub const DEFAULT_STATS_URL: &str = "https://raw.githubusercontent.com/Soulfra/d2d/main/stats.json";

/// The four colors a widget instance paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub border: &'static str,
    pub muted: &'static str,
}

pub const DARK_PALETTE: Palette = Palette {
    background: "#0a0a0a",
    foreground: "#0f0",
    border: "#222",
    muted: "#666",
};

pub const LIGHT_PALETTE: Palette = Palette {
    background: "#fff",
    foreground: "#000",
    border: "#ddd",
    muted: "#888",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Anything other than the literal string "dark" selects the light
    /// palette; an absent attribute defaults to dark.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            None | Some("dark") => Theme::Dark,
            Some(_) => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => DARK_PALETTE,
            Theme::Light => LIGHT_PALETTE,
        }
    }
}

/// Which of the two slots a widget instance renders. Layout order is always
/// MRR then customers regardless of token order in the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSet {
    pub mrr: bool,
    pub customers: bool,
}

impl Default for FieldSet {
    fn default() -> Self {
        FieldSet { mrr: true, customers: true }
    }
}

impl FieldSet {
    /// Tokens are matched exactly, without trimming: `show="mrr, customers"`
    /// includes only the MRR slot. This matches the original attribute
    /// semantics and is covered by tests.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            None => FieldSet::default(),
            Some(raw) => {
                let mut fields = FieldSet { mrr: false, customers: false };
                for token in raw.split(',') {
                    match token {
                        "mrr" => fields.mrr = true,
                        "customers" => fields.customers = true,
                        _ => {}
                    }
                }
                fields
            }
        }
    }
}

/// Per-instance configuration, read once from the host element's attributes
/// at mount time. Later attribute mutation is not observed.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub theme: Theme,
    pub fields: FieldSet,
    pub stats_url: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig::parse(None, None, None)
    }
}

impl WidgetConfig {
    pub fn parse(theme: Option<&str>, show: Option<&str>, src: Option<&str>) -> Self {
        WidgetConfig {
            theme: Theme::from_attr(theme),
            fields: FieldSet::from_attr(show),
            stats_url: src.unwrap_or(DEFAULT_STATS_URL).to_string(),
        }
    }

    pub fn from_element(host: &Element) -> Self {
        WidgetConfig::parse(
            host.get_attribute("theme").as_deref(),
            host.get_attribute("show").as_deref(),
            host.get_attribute("src").as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults_to_dark() {
        assert_eq!(Theme::from_attr(None), Theme::Dark);
        assert_eq!(Theme::from_attr(Some("dark")), Theme::Dark);
    }

    #[test]
    fn any_other_theme_value_is_light() {
        assert_eq!(Theme::from_attr(Some("light")), Theme::Light);
        assert_eq!(Theme::from_attr(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_attr(Some("solarized")), Theme::Light);
        assert_eq!(Theme::from_attr(Some("")), Theme::Light);
        assert_eq!(Theme::from_attr(Some("solarized")).palette(), LIGHT_PALETTE);
    }

    #[test]
    fn show_defaults_to_both_fields() {
        assert_eq!(FieldSet::from_attr(None), FieldSet { mrr: true, customers: true });
    }

    #[test]
    fn show_selects_individual_fields() {
        assert_eq!(
            FieldSet::from_attr(Some("mrr")),
            FieldSet { mrr: true, customers: false }
        );
        assert_eq!(
            FieldSet::from_attr(Some("customers")),
            FieldSet { mrr: false, customers: true }
        );
        assert_eq!(
            FieldSet::from_attr(Some("customers,mrr")),
            FieldSet { mrr: true, customers: true }
        );
    }

    #[test]
    fn show_tokens_are_not_trimmed() {
        // " customers" is not a recognized token
        assert_eq!(
            FieldSet::from_attr(Some("mrr, customers")),
            FieldSet { mrr: true, customers: false }
        );
    }

    #[test]
    fn empty_or_unknown_show_renders_no_slots() {
        assert_eq!(FieldSet::from_attr(Some("")), FieldSet { mrr: false, customers: false });
        assert_eq!(
            FieldSet::from_attr(Some("revenue,members")),
            FieldSet { mrr: false, customers: false }
        );
    }

    #[test]
    fn src_attribute_overrides_default_url() {
        let config = WidgetConfig::parse(None, None, Some("/fixtures/stats.json"));
        assert_eq!(config.stats_url, "/fixtures/stats.json");
        assert_eq!(WidgetConfig::default().stats_url, DEFAULT_STATS_URL);
    }
}
