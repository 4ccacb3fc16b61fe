//! # Catalog State
//!
//! The loaded record set plus the view the user is paging through.
//!
//! ```text
//! Catalog
//! ├── records: Arc<[Country]>   // load order, never reordered
//! ├── view: Vec<usize>          // active view: indices into records
//! └── page: usize               // 1-based, always within 1..=total_pages
//! ```
//!
//! Every operation borrows the current catalog and returns the next one.
//! Search, sort, and prev/next all read and write the same `view`, so the
//! pager can never drift away from what the last query produced.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::core::country::Country;

/// Cards per page.
pub const PAGE_SIZE: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "A → Z",
            SortDirection::Descending => "Z → A",
        }
    }
}

/// The slice of `records` shown on `page` (1-based).
///
/// Shorter than `PAGE_SIZE` on the final page, empty past it. Page 0 is not
/// a page and yields nothing.
pub fn show_page<T>(records: &[T], page: usize) -> &[T] {
    let Some(start) = page.checked_sub(1).map(|p| p.saturating_mul(PAGE_SIZE)) else {
        return &[];
    };
    let start = start.min(records.len());
    let end = start.saturating_add(PAGE_SIZE).min(records.len());
    &records[start..end]
}

/// Number of pages needed for `len` records. An empty view still reports a
/// single page, so the pager reads "Page 1 of 1".
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[Country]>,
    view: Vec<usize>,
    page: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    pub fn new(records: Vec<Country>) -> Self {
        let view = (0..records.len()).collect();
        Self {
            records: records.into(),
            view,
            page: 1,
        }
    }

    /// Total records loaded, independent of the active view.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in the active view.
    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.view.len())
    }

    pub fn get(&self, index: usize) -> Option<&Country> {
        self.records.get(index)
    }

    /// The active view in order.
    pub fn view(&self) -> impl Iterator<Item = &Country> {
        self.view.iter().map(|&i| &self.records[i])
    }

    /// The current page as `(record index, record)` pairs.
    pub fn visible(&self) -> Vec<(usize, &Country)> {
        show_page(&self.view, self.page)
            .iter()
            .map(|&i| (i, &self.records[i]))
            .collect()
    }

    /// Filter the full record set by case-insensitive substring match on the
    /// common name. Load order is kept and the page resets to 1.
    pub fn search(&self, term: &str) -> Catalog {
        let needle = term.to_lowercase();
        let view = (0..self.records.len())
            .filter(|&i| self.records[i].name.common.to_lowercase().contains(&needle))
            .collect();
        Catalog {
            records: Arc::clone(&self.records),
            view,
            page: 1,
        }
    }

    /// Sort the active view by common name into a new view. The page resets
    /// to 1; `records` keeps its load order.
    pub fn sort(&self, direction: SortDirection) -> Catalog {
        let mut keyed: Vec<(CollationKey, usize)> = self
            .view
            .iter()
            .map(|&i| (CollationKey::new(&self.records[i].name.common), i))
            .collect();
        // Stable ascending sort; descending is its exact mirror, ties included
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
        if direction == SortDirection::Descending {
            keyed.reverse();
        }
        Catalog {
            records: Arc::clone(&self.records),
            view: keyed.into_iter().map(|(_, i)| i).collect(),
            page: 1,
        }
    }

    pub fn prev_page(&self) -> Catalog {
        let mut next = self.clone();
        if self.page > 1 {
            next.page -= 1;
        }
        next
    }

    pub fn next_page(&self) -> Catalog {
        let mut next = self.clone();
        if self.page < self.total_pages() {
            next.page += 1;
        }
        next
    }
}

/// Name ordering that ignores case and common Latin diacritics, so "Åland
/// Islands" files next to "Albania" rather than after "Zimbabwe". Ties fall
/// back to the plain lowercase form to keep the order total.
#[derive(Debug, PartialEq, Eq)]
struct CollationKey {
    folded: String,
    lowered: String,
}

impl CollationKey {
    fn new(name: &str) -> Self {
        let lowered = name.to_lowercase();
        let mut folded = String::with_capacity(lowered.len());
        for c in lowered.chars() {
            fold_char(c, &mut folded);
        }
        Self { folded, lowered }
    }
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded
            .cmp(&other.folded)
            .then_with(|| self.lowered.cmp(&other.lowered))
    }
}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn fold_char(c: char, out: &mut String) {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ğ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ı' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        'æ' => {
            out.push_str("ae");
            return;
        }
        'œ' => {
            out.push_str("oe");
            return;
        }
        'ß' => {
            out.push_str("ss");
            return;
        }
        other => other,
    };
    out.push(base);
}
