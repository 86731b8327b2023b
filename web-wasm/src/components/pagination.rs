//! ページ送りとページサイズ選択

use ars_common::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use ars_common::{PageRequest, PageState};
use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;

#[component]
pub fn Pagination<F>(page: Signal<PageState>, disabled: ReadSignal<bool>, on_change: F) -> impl IntoView
where
    F: Fn(PageRequest) + Clone + Send + Sync + 'static,
{
    let on_previous = {
        let on_change = on_change.clone();
        move |_: MouseEvent| on_change(page.get_untracked().previous())
    };
    let on_next = {
        let on_change = on_change.clone();
        move |_: MouseEvent| on_change(page.get_untracked().next())
    };
    let on_size = move |ev: Event| {
        let size = event_target_value(&ev)
            .parse()
            .unwrap_or(DEFAULT_PAGE_SIZE);
        on_change(page.get_untracked().with_page_size(size));
    };

    view! {
        <div class="pagination">
            <span class="pagination-total">{move || format!("共 {} 條", page.get().total)}</span>
            <button
                class="btn btn-small"
                disabled=move || disabled.get() || !page.get().has_previous()
                on:click=on_previous
            >
                "‹"
            </button>
            <span class="pagination-current">
                {move || {
                    let p = page.get();
                    format!("{} / {}", p.current, p.page_count())
                }}
            </span>
            <button
                class="btn btn-small"
                disabled=move || disabled.get() || !page.get().has_next()
                on:click=on_next
            >
                "›"
            </button>
            <select disabled=move || disabled.get() on:change=on_size>
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || page.get().page_size == size
                            >
                                {format!("{} 條/頁", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
