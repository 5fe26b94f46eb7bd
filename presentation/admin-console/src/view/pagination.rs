/// One element of the pagination strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageControl {
    Previous { enabled: bool },
    Page { index: u32, label: String, active: bool },
    Next { enabled: bool },
}

#[derive(Debug, Clone, Default)]
pub struct PaginationView {
    pub controls: Vec<PageControl>,
}

/// Flat strip: Previous, one control per page index, Next. No windowing or
/// ellipsis for large page counts.
pub fn paginate(number: u32, total_pages: u32) -> PaginationView {
    let mut controls = Vec::with_capacity(total_pages as usize + 2);

    controls.push(PageControl::Previous { enabled: number > 0 });

    for index in 0..total_pages {
        controls.push(PageControl::Page {
            index,
            label: (index + 1).to_string(),
            active: index == number,
        });
    }

    controls.push(PageControl::Next {
        enabled: number + 1 < total_pages,
    });

    PaginationView { controls }
}
