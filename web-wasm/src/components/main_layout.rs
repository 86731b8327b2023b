//! 画面の枠（サイドメニュー・ヘッダー・フッター）

use ars_common::constants::APP_VERSION;
use leptos::prelude::*;

use crate::routes::Route;

#[component]
pub fn MainLayout(route: ReadSignal<Route>, children: Children) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <div class="app-container" class:collapsed=move || collapsed.get()>
            <aside class="sider">
                <div class="logo">
                    {move || if collapsed.get() { "ARS" } else { "ARS系統" }}
                </div>
                <nav class="menu">
                    {Route::ALL
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href()
                                    class="menu-item"
                                    class:selected=move || route.get() == item
                                >
                                    <span class="menu-icon">{item.icon()}</span>
                                    <Show when=move || !collapsed.get()>
                                        <span class="menu-label">{item.label()}</span>
                                    </Show>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    class="sider-trigger"
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </aside>

            <div class="layout">
                <header class="header">
                    <div class="header-right">
                        <span class="user-info">"管理員用戶"</span>
                        // 認証はまだない
                        <button class="btn">"登出"</button>
                        <span class="app-version">{APP_VERSION}</span>
                    </div>
                </header>
                <main class="content">
                    <div class="site-layout-content">{children()}</div>
                </main>
                <footer class="footer">{format!("ARS 地址解析系統 ©{} HKTV", year)}</footer>
            </div>
        </div>
    }
}
