use crate::components::imports::*;
use crate::static_content::{JourneyEntry, JOURNEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    pub const STEP: f64 = 400.0;

    /// Horizontal offset for one step in this direction.
    pub fn offset(self) -> f64 {
        match self {
            Self::Left => -Self::STEP,
            Self::Right => Self::STEP,
        }
    }
}

pub struct Journey {
    track_ref: NodeRef,
}

pub enum Msg {
    Scroll(ScrollDirection),
}

impl Component for Journey {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            track_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Scroll(direction) => {
                if let Some(track) = self.track_ref.cast::<web_sys::Element>() {
                    let mut options = web_sys::ScrollToOptions::new();
                    options
                        .left(direction.offset())
                        .behavior(web_sys::ScrollBehavior::Smooth);
                    track.scroll_by_with_scroll_to_options(&options);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let section_style = css!(
            "
                padding: 5rem 1.5rem;
                background-color: var(--background-secondary);

                h2 {
                    font-size: 3rem;
                    margin: 0 0 1rem 0;
                }
            "
        );

        let timeline_style = css!("position: relative;");

        let arrow_style = css!(
            "
                position: absolute; top: 50%; transform: translateY(-50%);
                z-index: 10;
                padding: 0.75rem;
                border-radius: 100%;
                cursor: pointer;
                background-color: var(--background-elevated);
                border: 2px solid var(--metallic-light);
                transition: border-color .2s ease-in;

                :hover {
                    border-color: var(--accent-primary);
                }

                @media (max-width: 768px) {
                    display: none;
                }
            "
        );

        let track_style = css!(
            "
                display: flex;
                gap: 1.5rem;
                overflow-x: auto;
                padding: 0 3rem 2rem 3rem;
                scroll-behavior: smooth;
                scrollbar-width: none;

                ::-webkit-scrollbar {
                    display: none;
                }
            "
        );

        let dots_style = css!(
            "
                display: flex; justify-content: center; gap: 0.5rem;
                margin-top: 1.5rem;

                div {
                    width: 0.5rem; height: 0.5rem;
                    border-radius: 100%;
                    background-color: var(--metallic-light);
                }
            "
        );

        let scroll = |direction: ScrollDirection| {
            ctx.link()
                .callback(move |_: MouseEvent| Msg::Scroll(direction))
        };

        html! {
            <section id={ sections::JOURNEY } class={ section_style }>
                <h2>{ "My " }<Colored>{ "Journey" }</Colored></h2>
                <p>{ "From desktop applications to full-stack ecosystems, a continuous evolution of skills and impact." }</p>

                <div class={ timeline_style }>
                    <button onclick={ scroll(ScrollDirection::Left) }
                        class={ classes!(arrow_style.clone(), css!("left: 0;")) }
                        aria-label="Scroll left">
                        { arrow("M15 18l-6-6 6-6") }
                    </button>
                    <button onclick={ scroll(ScrollDirection::Right) }
                        class={ classes!(arrow_style, css!("right: 0;")) }
                        aria-label="Scroll right">
                        { arrow("M9 18l6-6-6-6") }
                    </button>

                    <div ref={ self.track_ref.clone() } class={ track_style }>
                        { for JOURNEY.iter().map(card) }
                    </div>

                    <div class={ dots_style }>
                        { for JOURNEY.iter().map(|_| html! { <div/> }) }
                    </div>
                </div>
            </section>
        }
    }
}

fn arrow(path: &'static str) -> Html {
    html! {
        <svg width="24" height="24" fill="none" stroke="var(--foreground)" stroke-width="2" viewBox="0 0 24 24">
            <path d={ path } stroke-linecap="round" stroke-linejoin="round"/>
        </svg>
    }
}

fn card(entry: &JourneyEntry) -> Html {
    let card_style = css!(
        "
            min-width: 360px;
            padding: 1.5rem;
            border-radius: 0.5rem;
            background-color: var(--background-elevated);
            border: 2px solid var(--metallic-light);
            transition: border-color .3s ease;

            :hover {
                border-color: var(--accent-primary);
            }

            h4 {
                font-size: 0.875rem;
                text-transform: uppercase;
                margin: 1rem 0 0.5rem 0;
            }

            ul {
                list-style: none;
                padding: 0;
                margin: 0;
                color: var(--foreground-secondary);
                font-size: 0.875rem;
            }
        "
    );

    let year_style = css!(
        "
            display: inline-block;
            padding: 0.5rem 1rem;
            border-radius: 0.5rem;
            font-weight: bold;
            color: white;
            background-color: var(--accent-primary);
        "
    );

    let chip_style = css!(
        "
            display: inline-block;
            margin: 0 0.5rem 0.5rem 0;
            padding: 0.25rem 0.75rem;
            border-radius: 9999px;
            font-family: monospace;
            font-size: 0.75rem;
            background-color: var(--background);
            border: 1px solid var(--metallic-light);
            color: var(--foreground-secondary);
        "
    );

    html! {
        <div key={ entry.year } class={ card_style }>
            <div class={ year_style }>{ entry.year }</div>
            <h3>{ entry.title }</h3>
            <p>{ entry.description }</p>

            <h4><Colored>{ "Achievements" }</Colored></h4>
            <ul>
                { for entry.achievements.iter().map(|achievement| html! {
                    <li><Colored>{ "▸ " }</Colored>{ *achievement }</li>
                }) }
            </ul>

            <h4><Colored with="var(--metallic-primary)">{ "Technologies" }</Colored></h4>
            <div>
                { for entry.technologies.iter().map(|technology| html! {
                    <span class={ chip_style.clone() }>{ *technology }</span>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_steps_are_symmetric() {
        assert_eq!(ScrollDirection::Left.offset(), -400.0);
        assert_eq!(ScrollDirection::Right.offset(), 400.0);
    }
}
