use crate::{PageControl, PageLabel, PaginationView};

/// Most numbered page controls ever built.
pub const MAX_TOTAL_PAGES: u32 = 1000;

/// Builds Prev, 1..=total_pages, Next for the current page.
/// Nothing is rendered for a single page; totals past [`MAX_TOTAL_PAGES`] are clamped.
pub fn pagination(page: u32, total_pages: u32) -> PaginationView {
    let total_pages = total_pages.min(MAX_TOTAL_PAGES);
    if total_pages <= 1 {
        return PaginationView::default();
    }

    let mut controls = Vec::with_capacity(total_pages as usize + 2);
    controls.push(PageControl {
        label: PageLabel::Prev,
        target: page.saturating_sub(1),
        active: false,
        disabled: page == 1,
    });
    controls.extend((1..=total_pages).map(|number| PageControl {
        label: PageLabel::Number(number),
        target: number,
        active: number == page,
        disabled: false,
    }));
    controls.push(PageControl {
        label: PageLabel::Next,
        target: page.saturating_add(1),
        active: false,
        disabled: page >= total_pages,
    });

    PaginationView { controls }
}
