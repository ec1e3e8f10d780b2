//! Shared slide and element resolution.

use super::LookupError;
use super::presentation::{Page, PageElement, Presentation};

/// Which page collections a lookup searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageScope {
    Slides,
    Layouts,
    Masters,
    /// Slides, then layouts, then masters.
    Any,
}

/// Kind of page an element was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Slide,
    Layout,
    Master,
}

/// A slide reference as tools accept it: 1-based position or object ID.
///
/// When both are present the ID wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideRef<'a> {
    pub index: Option<usize>,
    pub id: Option<&'a str>,
}

impl<'a> SlideRef<'a> {
    pub fn new(index: Option<usize>, id: Option<&'a str>) -> Self {
        SlideRef {
            index,
            id: id.filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn by_index(index: usize) -> Self {
        SlideRef::new(Some(index), None)
    }

    pub fn by_id(id: &'a str) -> Self {
        SlideRef::new(None, Some(id))
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_none() && self.id.is_none()
    }
}

/// A resolved slide together with its 1-based position.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSlide<'p> {
    pub position: usize,
    pub page: &'p Page,
}

/// A resolved page element and where it lives.
#[derive(Debug, Clone, Copy)]
pub struct ElementLocation<'p> {
    pub page: &'p Page,
    pub page_kind: PageKind,
    /// 1-based slide position; `None` for layouts and masters.
    pub slide_position: Option<usize>,
    pub element: &'p PageElement,
}

/// Resolves a slide by object ID or 1-based index.
pub fn resolve_slide<'p>(
    presentation: &'p Presentation,
    slide: SlideRef<'_>,
) -> Result<ResolvedSlide<'p>, LookupError> {
    if let Some(id) = slide.id {
        return presentation
            .slides
            .iter()
            .enumerate()
            .find(|(_, page)| page.object_id == id)
            .map(|(i, page)| ResolvedSlide {
                position: i + 1,
                page,
            })
            .ok_or_else(|| LookupError::SlideNotFound(id.to_string()));
    }

    let index = slide.index.ok_or(LookupError::MissingSelector)?;
    let count = presentation.slides.len();
    if index == 0 || index > count {
        return Err(LookupError::SlideIndexOutOfRange { index, count });
    }

    Ok(ResolvedSlide {
        position: index,
        page: &presentation.slides[index - 1],
    })
}

/// Finds any page (slide, layout or master) by object ID within `scope`.
pub fn find_page<'p>(
    presentation: &'p Presentation,
    page_id: &str,
    scope: PageScope,
) -> Option<(PageKind, &'p Page)> {
    pages_in_scope(presentation, scope)
        .find(|(_, _, page)| page.object_id == page_id)
        .map(|(kind, _, page)| (kind, page))
}

/// Finds an element by object ID, searching inside groups.
pub fn find_element<'p>(
    presentation: &'p Presentation,
    object_id: &str,
    scope: PageScope,
) -> Result<ElementLocation<'p>, LookupError> {
    for (page_kind, slide_position, page) in pages_in_scope(presentation, scope) {
        if let Some(element) = find_in_elements(&page.page_elements, object_id) {
            return Ok(ElementLocation {
                page,
                page_kind,
                slide_position,
                element,
            });
        }
    }

    Err(LookupError::ObjectNotFound(object_id.to_string()))
}

/// Depth-first walk over every element on a page, groups included.
pub fn walk_elements<'p>(elements: &'p [PageElement], visit: &mut impl FnMut(&'p PageElement)) {
    for element in elements {
        visit(element);
        walk_elements(element.children(), visit);
    }
}

fn find_in_elements<'p>(elements: &'p [PageElement], object_id: &str) -> Option<&'p PageElement> {
    let mut found = None;
    walk_elements(elements, &mut |element| {
        if found.is_none() && element.object_id == object_id {
            found = Some(element);
        }
    });
    found
}

fn pages_in_scope(
    presentation: &Presentation,
    scope: PageScope,
) -> impl Iterator<Item = (PageKind, Option<usize>, &Page)> {
    let slides = matches!(scope, PageScope::Slides | PageScope::Any);
    let layouts = matches!(scope, PageScope::Layouts | PageScope::Any);
    let masters = matches!(scope, PageScope::Masters | PageScope::Any);

    let slide_pages = presentation
        .slides
        .iter()
        .enumerate()
        .filter(move |_| slides)
        .map(|(i, page)| (PageKind::Slide, Some(i + 1), page));
    let layout_pages = presentation
        .layouts
        .iter()
        .filter(move |_| layouts)
        .map(|page| (PageKind::Layout, None, page));
    let master_pages = presentation
        .masters
        .iter()
        .filter(move |_| masters)
        .map(|page| (PageKind::Master, None, page));

    slide_pages.chain(layout_pages).chain(master_pages)
}
