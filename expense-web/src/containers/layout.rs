use crate::containers::header::Header;
use shared::access::Page;
use yew::{Children, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current: Page,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
    <>
        <Header current={props.current} />
        <div class="min-h-screen bg-base-200 flex flex-col">
            <main class={classes!("flex-grow", "p-4", "max-w-6xl", "w-full", "mx-auto")}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"Expense Tracker · Built with Rust, Yew and DaisyUI"}</p>
                </div>
            </footer>
        </div>
    </>
    }
}
