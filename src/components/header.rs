use crate::components::imports::*;
use crate::components::theme::toggle::ThemeToggle;

const NAV: [(&str, &str); 5] = [
    ("About", sections::HERO),
    ("Journey", sections::JOURNEY),
    ("Tech Stack", sections::STACK),
    ("Projects", sections::PROJECTS),
    ("Contact", sections::CONTACT),
];

pub struct Header;

pub enum Msg {
    ScrollTo(&'static str),
}

impl Component for Header {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ScrollTo(section) => {
                scroll_to_section(section);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let wrapper_style = css!(
            "
                position: fixed; top: 0; left: 0; right: 0;
                z-index: 50;
                backdrop-filter: blur(12px);
                background-color: var(--background);
                border-bottom: 1px solid var(--border);
            "
        );

        let nav_style = css!(
            "
                max-width: 80rem;
                margin: 0 auto;
                padding: 1rem 1.5rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            "
        );

        let brand_style = css!("font-size: 1.5rem; font-weight: bold;");

        let links_style = css!(
            "
                display: flex;
                gap: 2rem;
                align-items: center;

                button {
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: var(--foreground-secondary);
                    transition: color .2s ease-in;
                }

                button:hover {
                    color: var(--accent-primary);
                }

                @media (max-width: 768px) {
                    gap: 0;

                    > button {
                        display: none;
                    }
                }
            "
        );

        html! {
            <header class={ wrapper_style }>
                <nav class={ nav_style }>
                    <a href="/" class={ brand_style }>
                        { "AC" }<Colored>{ "." }</Colored>
                    </a>
                    <div class={ links_style }>
                        { for NAV.iter().map(|(label, section)| {
                            let section: &'static str = *section;
                            let onclick = ctx.link().callback(move |_| Msg::ScrollTo(section));
                            html! { <button {onclick}>{ *label }</button> }
                        }) }
                        <ThemeToggle/>
                    </div>
                </nav>
            </header>
        }
    }
}
