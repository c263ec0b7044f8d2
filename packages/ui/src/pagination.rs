//! List pagination: the page-button bar and the "Showing x - y of z" line.

use dioxus::prelude::*;

/// Number of pages, rounding up.
pub fn total_pages(total_items: i64, items_per_page: u64) -> u64 {
    if total_items <= 0 || items_per_page == 0 {
        return 0;
    }
    (total_items as u64).div_ceil(items_per_page)
}

/// The sliding window of page numbers the bar shows, centered on the active
/// page and clamped to the ends.
pub fn page_window(active_page: u64, total_pages: u64, max_buttons: u64) -> Vec<u64> {
    if total_pages == 0 || max_buttons == 0 {
        return Vec::new();
    }
    let count = max_buttons.min(total_pages);
    let half = count / 2;
    let mut start = active_page.saturating_sub(half).max(1);
    if start + count - 1 > total_pages {
        start = total_pages - count + 1;
    }
    (start..start + count).collect()
}

/// Page selector with first/previous/next/last controls and a window of
/// (at most) five numbered buttons.
#[component]
pub fn PaginationBar(
    active_page: u64,
    total_items: i64,
    items_per_page: u64,
    on_select: EventHandler<u64>,
) -> Element {
    let pages = total_pages(total_items, items_per_page);
    if pages <= 1 {
        return rsx! {};
    }
    let window = page_window(active_page, pages, 5);

    rsx! {
        ul {
            class: "pagination",
            li {
                button {
                    class: "page-link",
                    disabled: active_page <= 1,
                    onclick: move |_| on_select.call(1),
                    "«"
                }
            }
            li {
                button {
                    class: "page-link",
                    disabled: active_page <= 1,
                    onclick: move |_| on_select.call(active_page - 1),
                    "‹"
                }
            }
            for page in window {
                li {
                    key: "{page}",
                    button {
                        class: if page == active_page { "page-link active" } else { "page-link" },
                        onclick: move |_| on_select.call(page),
                        "{page}"
                    }
                }
            }
            li {
                button {
                    class: "page-link",
                    disabled: active_page >= pages,
                    onclick: move |_| on_select.call(active_page + 1),
                    "›"
                }
            }
            li {
                button {
                    class: "page-link",
                    disabled: active_page >= pages,
                    onclick: move |_| on_select.call(pages),
                    "»"
                }
            }
        }
    }
}

/// "Showing x - y of z items" line under a list.
#[component]
pub fn ItemCount(active_page: u64, total_items: i64, items_per_page: u64) -> Element {
    if total_items <= 0 {
        return rsx! {};
    }
    let first = (active_page.saturating_sub(1)) * items_per_page + 1;
    let last = (active_page * items_per_page).min(total_items.max(0) as u64);

    rsx! {
        div {
            class: "item-count",
            "Showing {first} - {last} of {total_items} items."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(-5, 20), 0);
    }

    #[test]
    fn window_is_clamped_to_ends() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn window_shrinks_for_few_pages() {
        assert_eq!(page_window(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1, 5), vec![1]);
        assert!(page_window(1, 0, 5).is_empty());
    }
}
