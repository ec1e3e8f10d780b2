//! Apply theme tool implementation.

use std::collections::BTreeMap;

use log::debug;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::Color;
use slides_core::model::{PageKind, PageScope, find_page};

use super::{ToolContext, normalize_choice, parse_color};
use crate::errors::ToolError;
use crate::requests;

/// Theme color slots of a master's color scheme, in API order.
pub const THEME_COLOR_TYPES: [&str; 12] = [
    "DARK1",
    "LIGHT1",
    "DARK2",
    "LIGHT2",
    "ACCENT1",
    "ACCENT2",
    "ACCENT3",
    "ACCENT4",
    "ACCENT5",
    "ACCENT6",
    "HYPERLINK",
    "FOLLOWED_HYPERLINK",
];

/// Built-in palettes, each listing hex values in `THEME_COLOR_TYPES` order.
const PRESETS: &[(&str, [&str; 12])] = &[
    (
        "light",
        [
            "#000000", "#FFFFFF", "#1F2937", "#F3F4F6", "#4285F4", "#EA4335", "#FBBC04",
            "#34A853", "#FF6D01", "#46BDC6", "#1155CC", "#6611CC",
        ],
    ),
    (
        "dark",
        [
            "#FFFFFF", "#202124", "#E8EAED", "#3C4043", "#8AB4F8", "#F28B82", "#FDD663",
            "#81C995", "#FCAD70", "#78D9EC", "#8AB4F8", "#C58AF9",
        ],
    ),
    (
        "ocean",
        [
            "#0B2545", "#F4F9FC", "#134074", "#DCEAF4", "#13315C", "#1B98E0", "#00A6A6",
            "#8DA9C4", "#247BA0", "#70C1B3", "#1B98E0", "#134074",
        ],
    ),
    (
        "forest",
        [
            "#1B2A1B", "#F6F8F1", "#2D4A2D", "#E4EBD9", "#2E7D32", "#558B2F", "#827717",
            "#6D4C41", "#A1887F", "#AED581", "#2E7D32", "#6D4C41",
        ],
    ),
    (
        "sunset",
        [
            "#2B1B17", "#FFF8F0", "#5C2E2E", "#FCE9DB", "#F25C54", "#F27059", "#F4845F",
            "#F79D65", "#F7B267", "#C44536", "#C44536", "#7A306C",
        ],
    ),
    (
        "corporate",
        [
            "#1A1A1A", "#FFFFFF", "#2F3E46", "#EEF2F5", "#005A9C", "#00857C", "#7A8B99",
            "#F2A900", "#C8102E", "#5B6770", "#005A9C", "#5B2C83",
        ],
    ),
    (
        "monochrome",
        [
            "#000000", "#FFFFFF", "#333333", "#EEEEEE", "#222222", "#444444", "#666666",
            "#888888", "#AAAAAA", "#CCCCCC", "#000000", "#555555",
        ],
    ),
];

/// Parameters for the apply_theme tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ApplyThemeParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// Preset palette: light, dark, ocean, forest, sunset, corporate, monochrome. Default: light.
    #[serde(default)]
    pub theme: Option<String>,
    /// Overrides on top of the preset, keyed by theme color type
    /// (DARK1, LIGHT1, DARK2, LIGHT2, ACCENT1..ACCENT6, HYPERLINK, FOLLOWED_HYPERLINK).
    #[serde(default)]
    pub custom_colors: BTreeMap<String, String>,
    /// Only update this master. Default: every master.
    #[serde(default)]
    pub master_id: Option<String>,
    /// Also set the master background to the LIGHT1 color.
    #[serde(default)]
    pub set_background: bool,
}

#[derive(Debug, Serialize)]
pub struct AppliedTheme {
    pub theme: String,
    pub master_ids: Vec<String>,
    /// Final palette, theme color type to hex.
    pub colors: BTreeMap<String, String>,
    pub background_updated: bool,
}

/// Execute the apply_theme tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &ApplyThemeParams,
) -> Result<AppliedTheme, ToolError> {
    let theme_name = params.theme.as_deref().unwrap_or("light").trim().to_lowercase();
    let palette = palette(&theme_name, &params.custom_colors)?;

    let presentation = ctx.presentation(&params.presentation_id).await?;
    let master_id = params.master_id.as_deref().filter(|s| !s.trim().is_empty());
    let master_ids: Vec<String> = match master_id {
        Some(id) => match find_page(&presentation, id, PageScope::Any) {
            Some((PageKind::Master, page)) => vec![page.object_id.clone()],
            Some(_) => return Err(ToolError::invalid(format!("'{}' is not a master page", id))),
            None => return Err(ToolError::not_found(format!("Master '{}' not found", id))),
        },
        None => presentation.masters.iter().map(|m| m.object_id.clone()).collect(),
    };
    if master_ids.is_empty() {
        return Err(ToolError::unsupported("The presentation has no master pages"));
    }

    let mut batch = Vec::new();
    for id in &master_ids {
        batch.push(requests::update_color_scheme(id, &palette));
        if params.set_background {
            let (fill, field) = requests::solid_background(palette[1].1);
            batch.push(requests::update_page_background(id, fill, field));
        }
    }

    debug!("Applying theme '{}' to {} master(s)", theme_name, master_ids.len());
    ctx.apply(&params.presentation_id, batch, "Failed to apply theme")
        .await?;

    Ok(AppliedTheme {
        theme: if params.custom_colors.is_empty() {
            theme_name
        } else {
            format!("{} (customized)", theme_name)
        },
        master_ids,
        colors: palette
            .iter()
            .map(|(kind, color)| (kind.to_string(), color.to_hex()))
            .collect(),
        background_updated: params.set_background,
    })
}

/// Resolves a preset and applies overrides, returning all twelve slots.
pub fn palette(
    theme: &str,
    overrides: &BTreeMap<String, String>,
) -> Result<Vec<(&'static str, Color)>, ToolError> {
    let (_, hexes) = PRESETS
        .iter()
        .find(|(name, _)| *name == theme)
        .ok_or_else(|| {
            let names: Vec<&str> = PRESETS.iter().map(|(name, _)| *name).collect();
            ToolError::invalid(format!(
                "Unknown theme '{}'. Available themes: {}",
                theme,
                names.join(", ")
            ))
        })?;

    let mut colors = THEME_COLOR_TYPES
        .iter()
        .zip(hexes.iter())
        .map(|(kind, hex)| Ok((*kind, parse_color(hex, kind)?)))
        .collect::<Result<Vec<_>, ToolError>>()?;

    for (key, value) in overrides {
        let kind = normalize_choice(key, &THEME_COLOR_TYPES, "custom_colors key")?;
        let color = parse_color(value, kind)?;
        if let Some(slot) = colors.iter_mut().find(|(k, _)| *k == kind) {
            slot.1 = color;
        }
    }
    Ok(colors)
}
