pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +--------------------------+
/// |        TopHeader         |
/// +--------------------------+
/// |  Sidebar  |   Content    |
/// |   (Left)  |   (Center)   |
/// +--------------------------+
/// ```
#[component]
pub fn Shell<L>(left: L) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center />
                </div>
            </div>
        </div>
    }
}
