use serde::Serialize;
use utoipa::ToSchema;

/// Page-number pagination envelope. `next`/`previous` are page numbers.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct Page<T> {
    pub count: u64,
    pub page: u64,
    pub page_size: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, count: u64, page: u64, page_size: u64) -> Self {
        let last_page = last_page(count, page_size);
        Self {
            count,
            page,
            page_size,
            next: (page < last_page).then_some(page + 1),
            previous: (page > 1).then(|| page - 1),
            results,
        }
    }
}

/// Number of the last page; an empty collection still has page 1.
pub fn last_page(count: u64, page_size: u64) -> u64 {
    if count == 0 || page_size == 0 {
        1
    } else {
        count.div_ceil(page_size)
    }
}

/// Either a paginated envelope or, when pagination is switched off, a bare
/// array.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}
