//! Search text tool implementation.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use slides_core::model::{CellPosition, Page, SlideRef, resolve_slide, search_page};

use super::{ToolContext, require_non_empty};
use crate::errors::ToolError;

const DEFAULT_MAX_RESULTS: usize = 50;

/// Parameters for the search_text tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SearchTextParams {
    /// The presentation ID.
    pub presentation_id: String,
    /// Text to search for.
    pub query: String,
    /// Case-sensitive matching. Default: false.
    #[serde(default)]
    pub match_case: bool,
    /// Limit the search to one slide by 1-based position.
    #[serde(default)]
    pub slide_index: Option<usize>,
    /// Limit the search to one slide by object ID.
    #[serde(default)]
    pub slide_id: Option<String>,
    /// Maximum number of matches returned. Default: 50.
    #[serde(default)]
    pub max_results: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub total_matches: usize,
    pub truncated: bool,
    pub matches: Vec<SlideMatch>,
}

#[derive(Debug, Serialize)]
pub struct SlideMatch {
    pub slide_position: usize,
    pub slide_id: String,
    pub object_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<CellPosition>,
    /// UTF-16 offsets of the match inside the object's text.
    pub start_index: usize,
    pub end_index: usize,
    pub snippet: String,
}

/// Execute the search_text tool.
pub async fn execute(
    ctx: &ToolContext<'_>,
    params: &SearchTextParams,
) -> Result<SearchResults, ToolError> {
    require_non_empty(&params.query, "query")?;
    let max_results = params.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
    if max_results == 0 {
        return Err(ToolError::invalid("max_results must be at least 1"));
    }

    let presentation = ctx.presentation(&params.presentation_id).await?;
    let selector = SlideRef::new(params.slide_index, params.slide_id.as_deref());
    let slides: Vec<(usize, &Page)> = if selector.is_empty() {
        presentation.slides.iter().enumerate().map(|(i, p)| (i + 1, p)).collect()
    } else {
        let slide = resolve_slide(&presentation, selector)?;
        vec![(slide.position, slide.page)]
    };

    let all: Vec<SlideMatch> = slides
        .into_iter()
        .flat_map(|(position, page)| {
            search_page(page, &params.query, params.match_case)
                .into_iter()
                .map(move |m| SlideMatch {
                    slide_position: position,
                    slide_id: page.object_id.clone(),
                    object_id: m.object_id,
                    cell: m.cell,
                    start_index: m.start_index,
                    end_index: m.end_index,
                    snippet: m.snippet,
                })
        })
        .collect();

    let total_matches = all.len();
    let matches: Vec<SlideMatch> = all.into_iter().take(max_results).collect();

    Ok(SearchResults {
        query: params.query.clone(),
        total_matches,
        truncated: total_matches > matches.len(),
        matches,
    })
}
