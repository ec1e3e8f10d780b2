//! Presentation snapshot types and the lookups tools run against them.

pub mod lookup;
pub mod presentation;
pub mod text;

use std::fmt;

pub use lookup::{
    ElementLocation, PageKind, PageScope, ResolvedSlide, SlideRef, find_element, find_page,
    resolve_slide, walk_elements,
};
pub use presentation::{
    Bounds, ElementKind, Page, PageElement, Presentation, Table, TableCell, TextContent,
};
pub use text::{CellPosition, TextMatch, search_page};

/// Errors from resolving slides and elements in a presentation.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    /// Neither a slide index nor a slide ID was supplied.
    MissingSelector,
    SlideIndexOutOfRange { index: usize, count: usize },
    SlideNotFound(String),
    ObjectNotFound(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::MissingSelector => {
                write!(f, "Either slide_index or slide_id must be provided")
            }
            LookupError::SlideIndexOutOfRange { index, count } => write!(
                f,
                "Slide index {} is out of range. The presentation has {} slide(s); indexes start at 1",
                index, count
            ),
            LookupError::SlideNotFound(id) => write!(f, "Slide '{}' not found", id),
            LookupError::ObjectNotFound(id) => write!(f, "Object '{}' not found", id),
        }
    }
}

impl std::error::Error for LookupError {}
