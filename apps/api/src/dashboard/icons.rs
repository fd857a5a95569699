use serde::{Deserialize, Serialize};

/// How a stat card names its icon: either a key into the built-in icon set,
/// or markup the caller already built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum IconSpec {
    Named(String),
    Prebuilt(String),
}

impl IconSpec {
    pub fn named(name: &str) -> Self {
        IconSpec::Named(name.to_string())
    }
}

/// Built-in icons, as `(name, svg path data)`.
const ICON_PATHS: &[(&str, &str)] = &[
    ("users", "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z"),
    ("briefcase", "M20 7H4a2 2 0 0 0-2 2v10a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2zM16 7V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v2"),
    ("star", "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"),
    ("heart", "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78L12 21.23l8.84-8.84a5.5 5.5 0 0 0 0-7.78z"),
    ("message", "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"),
    ("dollar", "M12 1v22M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"),
    ("activity", "M22 12h-4l-3 9L9 3l-3 9H2"),
];

const FALLBACK_ICON: &str = "activity";

/// The single place icon specs become markup. Unknown names fall back to a
/// generic icon rather than failing.
pub fn render_icon(spec: &IconSpec) -> String {
    match spec {
        IconSpec::Named(name) => {
            let path = ICON_PATHS
                .iter()
                .find(|(key, _)| key == name)
                .or_else(|| ICON_PATHS.iter().find(|(key, _)| *key == FALLBACK_ICON))
                .map(|(_, path)| *path)
                .unwrap_or_default();
            format!(
                r#"<svg class="icon icon-{name}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="{path}"/></svg>"#
            )
        }
        IconSpec::Prebuilt(markup) => markup.clone(),
    }
}
