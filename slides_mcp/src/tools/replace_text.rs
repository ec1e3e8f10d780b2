//! Replace text tool implementation.

use log::debug;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::model::{SlideRef, resolve_slide};

use super::{ToolContext, require_non_empty};
use crate::errors::ToolError;
use crate::requests;

/// Parameters for the replace_text tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ReplaceTextParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// Text to find.
    pub find: String,
    /// Replacement text; may be empty to delete matches.
    #[serde(default)]
    pub replace: String,
    /// Case-sensitive matching. Default: true.
    #[serde(default)]
    pub match_case: Option<bool>,
    /// Only replace on these slides (1-based positions).
    #[serde(default)]
    pub slide_indexes: Vec<usize>,
    /// Only replace on these slides (object IDs).
    #[serde(default)]
    pub slide_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReplacedText {
    pub occurrences_changed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_ids: Option<Vec<String>>,
}

/// Execute the replace_text tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &ReplaceTextParams,
) -> Result<ReplacedText, ToolError> {
    require_non_empty(&params.find, "find")?;
    let match_case = params.match_case.unwrap_or(true);

    let presentation = ctx.presentation(&params.presentation_id).await?;

    let selectors = params
        .slide_ids
        .iter()
        .map(|id| SlideRef::by_id(id))
        .chain(params.slide_indexes.iter().map(|i| SlideRef::by_index(*i)));

    let mut page_ids: Vec<String> = Vec::new();
    for selector in selectors {
        let slide = resolve_slide(&presentation, selector)?;
        if !page_ids.contains(&slide.page.object_id) {
            page_ids.push(slide.page.object_id.clone());
        }
    }
    let scope = (!page_ids.is_empty()).then_some(page_ids);

    debug!(
        "Replacing '{}' on {} slide(s)",
        params.find,
        scope.as_ref().map_or(presentation.slides.len(), Vec::len)
    );

    let request = requests::replace_all_text(
        &params.find,
        &params.replace,
        match_case,
        scope.as_deref(),
    );
    let response = ctx
        .apply(&params.presentation_id, vec![request], "Failed to replace text")
        .await?;

    let occurrences_changed = response
        .replies
        .first()
        .and_then(|r| r["replaceAllText"]["occurrencesChanged"].as_u64())
        .unwrap_or(0);

    Ok(ReplacedText {
        occurrences_changed,
        slide_ids: scope,
    })
}
