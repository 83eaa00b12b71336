use crate::components::imports::*;
use crate::static_content::{project, Project, GITHUB_PROFILE, PROJECTS};

pub struct Projects {
    selected: Option<&'static Project>,
}

pub enum Msg {
    Open(&'static str),
    Close,
}

impl Component for Projects {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { selected: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open(id) => {
                self.selected = project(id);
                if self.selected.is_none() {
                    console::log!(format!("no project with id {id}"));
                }
                true
            }
            Msg::Close => self.selected.take().is_some(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let section_style = css!(
            "
                padding: 6rem 1.5rem;
                background-color: var(--background-secondary);

                h2 {
                    font-size: 3rem;
                    margin: 0 0 1rem 0;
                }
            "
        );

        let grid_style = css!(
            "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(420px, 1fr));
                gap: 2rem;
                margin-top: 3rem;

                @media (max-width: 768px) {
                    grid-template-columns: 1fr;
                }
            "
        );

        let github_style = css!(
            "
                display: inline-block;
                margin-top: 3rem;
                padding: 1rem 2rem;
                border-radius: 0.5rem;
                font-weight: bold;
                color: var(--accent-primary);
                border: 2px solid var(--accent-primary);

                :hover {
                    color: white;
                    background-color: var(--accent-primary);
                }
            "
        );

        let cards = PROJECTS.iter().map(|project| {
            let id = project.id;
            let onclick = ctx.link().callback(move |_| Msg::Open(id));
            card(project, onclick)
        });

        html! {
            <section id={ sections::PROJECTS } class={ section_style }>
                <div class={ css!("max-width: 80rem; margin: 0 auto;") }>
                    <h2>{ "Featured " }<Colored>{ "Projects" }</Colored></h2>
                    <p class={ css!("color: var(--foreground-secondary); max-width: 48rem;") }>
                        { "From award-winning logistics platforms to cutting-edge EdTech, building complete ecosystems, not just apps" }
                    </p>

                    <div class={ grid_style }>{ for cards }</div>

                    <div class={ css!("text-align: center;") }>
                        <p class={ css!("color: var(--foreground-secondary);") }>
                            { "These are just highlights. I've built dozens of projects across multiple domains" }
                        </p>
                        <a href={ GITHUB_PROFILE } target="_blank" rel="noopener noreferrer" class={ github_style }>
                            { "View All on GitHub" }
                        </a>
                    </div>
                </div>

                if let Some(project) = self.selected {
                    { modal(project, ctx.link().callback(|_| Msg::Close)) }
                }
            </section>
        }
    }
}

fn chips(technologies: &[&'static str]) -> Html {
    let chip_style = css!(
        "
            display: inline-block;
            margin: 0 0.5rem 0.5rem 0;
            padding: 0.25rem 0.75rem;
            border-radius: 0.5rem;
            font-family: monospace;
            font-size: 0.75rem;
            background-color: var(--background-secondary);
            border: 1px solid var(--border);
        "
    );

    html! {
        <div>
            { for technologies.iter().map(|technology| html! {
                <span class={ chip_style.clone() }>{ *technology }</span>
            }) }
        </div>
    }
}

fn meta(project: &Project) -> Html {
    let year_style = css!(
        "
            padding: 0.25rem 0.75rem;
            margin-right: 0.75rem;
            border-radius: 0.5rem;
            font-size: 0.75rem;
            font-weight: bold;
            background-color: var(--metallic-light);
            color: var(--metallic-dark);
            border: 1px solid var(--metallic-primary);
        "
    );

    html! {
        <div>
            <span class={ year_style }>{ project.year }</span>
            <Colored with="var(--foreground-secondary)">{ project.category }</Colored>
        </div>
    }
}

fn card(project: &'static Project, onclick: Callback<MouseEvent>) -> Html {
    let card_style = css!(
        "
            position: relative;
            overflow: hidden;
            cursor: pointer;
            border-radius: 1rem;
            padding: 2rem;
            border: 2px solid var(--border);
            background-color: var(--background-elevated);
            transition: all .3s ease;

            :hover {
                border-color: var(--accent-primary);
                transform: translateY(-4px);
            }

            ::before {
                content: '';
                position: absolute; top: 0; left: 0; right: 0;
                height: 4px;
                background: linear-gradient(to right, var(--metallic-primary), var(--accent-primary));
            }

            h3 {
                font-size: 1.875rem;
                margin: 1rem 0 0.25rem 0;
            }
        "
    );

    let description_style = css!(
        "
            color: var(--foreground-secondary);
            display: -webkit-box;
            -webkit-line-clamp: 3;
            -webkit-box-orient: vertical;
            overflow: hidden;
        "
    );

    html! {
        <div key={ project.id } {onclick} class={ card_style }>
            { meta(project) }
            <h3>{ project.title }</h3>
            <Colored bold={true}>{ project.tagline }</Colored>
            <p class={ description_style }>{ project.description }</p>
            { chips(project.technologies) }
            if let Some(first) = project.achievements.first() {
                <p class={ css!("font-size: 0.875rem;") }>{ "🏆 " }{ *first }</p>
            }
            <Colored bold={true}>{ "View Details →" }</Colored>
        </div>
    }
}

fn modal(project: &'static Project, close: Callback<MouseEvent>) -> Html {
    let backdrop_style = css!(
        "
            position: fixed; inset: 0;
            z-index: 100;
            display: flex; align-items: center; justify-content: center;
            padding: 1rem;
            background-color: rgba(0, 0, 0, 0.7);
            backdrop-filter: blur(4px);
        "
    );

    let dialog_style = css!(
        "
            position: relative;
            max-width: 56rem; width: 100%;
            max-height: 90vh;
            overflow-y: auto;
            padding: 2.5rem;
            border-radius: 1rem;
            border: 2px solid var(--metallic-primary);
            background-color: var(--background-elevated);

            h2 {
                font-size: 2.5rem;
                margin: 1rem 0 0.25rem 0;
            }

            h3 {
                margin-top: 2rem;
            }
        "
    );

    let close_style = css!(
        "
            position: absolute; top: 1rem; right: 1rem;
            width: 2.5rem; height: 2.5rem;
            cursor: pointer;
            border-radius: 100%;
            color: var(--foreground);
            background: none;
            border: 2px solid var(--border);

            :hover {
                border-color: var(--accent-primary);
            }
        "
    );

    let links = &project.links;
    let link = |href: Option<&'static str>, label: &'static str| match href {
        Some(href) => html! {
            <a {href} target="_blank" rel="noopener noreferrer" class={ css!("margin-right: 1rem;") }>
                <Colored bold={true}>{ label }</Colored>
            </a>
        },
        None => html! {},
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div onclick={ close.clone() } class={ backdrop_style }>
            <div onclick={ keep_open } class={ dialog_style }>
                <button onclick={ close } class={ close_style } aria-label="Close">{ "✕" }</button>

                { meta(project) }
                <h2>{ project.title }</h2>
                <Colored bold={true}>{ project.tagline }</Colored>

                <h3>{ "About the Project" }</h3>
                <p class={ css!("color: var(--foreground-secondary); line-height: 1.7;") }>
                    { project.description }
                </p>

                <h3>{ "Tech Stack" }</h3>
                { chips(project.technologies) }

                if !project.achievements.is_empty() {
                    <h3>{ "Key Achievements" }</h3>
                    <ul>
                        { for project.achievements.iter().map(|achievement| html! {
                            <li>{ *achievement }</li>
                        }) }
                    </ul>
                }

                <div>
                    { link(links.live, "Live Demo") }
                    { link(links.github, "Source Code") }
                    { link(links.case_study, "Case Study") }
                </div>
            </div>
        </div>
    }
}
