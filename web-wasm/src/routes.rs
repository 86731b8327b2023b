//! ハッシュルーティング（`#/address-analysis` など）

/// 画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    AddressAnalysis,
    AddressRecords,
}

impl Route {
    /// メニューの表示順
    pub const ALL: [Route; 3] = [
        Route::Dashboard,
        Route::AddressAnalysis,
        Route::AddressRecords,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::AddressAnalysis => "/address-analysis",
            Route::AddressRecords => "/address-records",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "儀表板",
            Route::AddressAnalysis => "地址分析",
            Route::AddressRecords => "地址記錄",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard => "🏠",
            Route::AddressAnalysis => "🔍",
            Route::AddressRecords => "📋",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }

    /// 未知のパスは儀表板
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = path.trim_end_matches('/');
        Route::ALL
            .into_iter()
            .find(|route| route.path().trim_end_matches('/') == path)
            .unwrap_or_default()
    }
}

/// 現在のURLハッシュから画面を決める
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or_default()
}

/// ハッシュを書き換える（`hashchange` で画面が切り替わる）
pub fn navigate(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_hash(route.path()) {
        log::error!("navigation to {} failed: {:?}", route.path(), e);
    }
}
