use crate::components::imports::*;
use crate::static_content::{Proficiency, StackFilter, StackStats, Technology, TECHNOLOGIES};

pub struct TechStack {
    filter: StackFilter,
    stats: StackStats,
}

pub enum Msg {
    Filter(StackFilter),
}

impl Component for TechStack {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            filter: StackFilter::default(),
            stats: StackStats::of(TECHNOLOGIES),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Filter(filter) => {
                let changed = self.filter != filter;
                self.filter = filter;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let section_style = css!(
            "
                position: relative;
                padding: 6rem 1.5rem;
                overflow: hidden;

                h2 {
                    font-size: 3rem;
                    margin: 0.5rem 0 1rem 0;
                }
            "
        );

        let grid_backdrop = css!(
            "
                position: absolute; inset: 0;
                opacity: 0.03;
                pointer-events: none;
                background-image:
                    linear-gradient(to right, var(--foreground) 1px, transparent 1px),
                    linear-gradient(to bottom, var(--foreground) 1px, transparent 1px);
                background-size: 80px 80px;
            "
        );

        let inner_style = css!("position: relative; max-width: 80rem; margin: 0 auto;");

        let filters_style = css!(
            "
                display: flex; flex-wrap: wrap; gap: 0.75rem;
                margin: 2rem 0;

                button {
                    padding: 0.6rem 1.5rem;
                    border-radius: 9999px;
                    cursor: pointer;
                    font-size: 0.875rem;
                    border: 2px solid var(--border);
                    background-color: var(--background-secondary);
                    color: var(--foreground-secondary);
                    transition: all .3s ease;
                }

                button:hover {
                    border-color: var(--metallic-primary);
                }

                button.active {
                    color: white;
                    border-color: var(--accent-primary);
                    background-color: var(--accent-primary);
                }
            "
        );

        let grid_style = css!(
            "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                gap: 1.5rem;
            "
        );

        let filters = StackFilter::options().map(|filter| {
            let onclick = ctx.link().callback(move |_| Msg::Filter(filter));
            let class = classes!((filter == self.filter).then_some("active"));
            html! { <button {onclick} {class}>{ filter.label() }</button> }
        });

        let technologies = self.filter.apply(TECHNOLOGIES);
        let grid = if technologies.is_empty() {
            html! {
                <p class={ css!("text-align: center; color: var(--foreground-secondary);") }>
                    { "No technologies in this category yet." }
                </p>
            }
        } else {
            html! {
                <div class={ grid_style }>
                    { for technologies.into_iter().map(card) }
                </div>
            }
        };

        html! {
            <section id={ sections::STACK } class={ section_style }>
                <div class={ grid_backdrop }/>
                <div class={ inner_style }>
                    <Colored with="var(--metallic-primary)">{ "Technology Stack" }</Colored>
                    <h2>{ "Skills & " }<Colored>{ "Expertise" }</Colored></h2>
                    <p class={ css!("max-width: 48rem; color: var(--foreground-secondary);") }>
                        { "Specialized in .NET desktop applications and modern web platforms, \
                           with a focus on building scalable solutions from architecture to deployment." }
                    </p>

                    { stats(&self.stats) }

                    <div class={ filters_style }>{ for filters }</div>
                    { grid }
                </div>
            </section>
        }
    }
}

fn stats(stats: &StackStats) -> Html {
    let stats_style = css!(
        "
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 1rem;
            margin-top: 2rem;

            div {
                padding: 1rem;
                border-radius: 1rem;
                border: 1px solid var(--border);
                background-color: var(--background-elevated);
            }

            strong {
                display: block;
                font-size: 2rem;
                color: var(--accent-primary);
            }

            span {
                font-size: 0.875rem;
                color: var(--foreground-secondary);
            }

            @media (max-width: 768px) {
                grid-template-columns: repeat(2, 1fr);
            }
        "
    );

    let entries = [
        (stats.total.to_string(), "Technologies"),
        (format!("{}+", stats.experience), "Years Experience"),
        (stats.expertise.to_string(), "Expert Level"),
        (stats.active.to_string(), "Actively Used"),
    ];

    html! {
        <div class={ stats_style }>
            { for entries.into_iter().map(|(value, label)| html! {
                <div><strong>{ value }</strong><span>{ label }</span></div>
            }) }
        </div>
    }
}

fn card(technology: &Technology) -> Html {
    let expert = technology.proficiency == Proficiency::Expert;
    let color = technology.category.color();
    let (border, padding, title_size) = if expert {
        ("var(--accent-primary)", "2rem", "1.875rem")
    } else {
        ("var(--border)", "1.5rem", "1.25rem")
    };
    let bar_width = format!("{}%", technology.proficiency.bar_width());

    let card_style = css!(
        "
            position: relative;
            border-radius: 1rem;
            padding: ${padding};
            border: 2px solid ${border};
            background-color: var(--background-elevated);
            transition: transform .3s ease, box-shadow .3s ease;

            :hover {
                transform: translateY(-4px);
                box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
            }

            h3 {
                font-size: ${title_size};
                margin: 1rem 0 0.5rem 0;
            }
        ",
        padding = padding,
        border = border,
        title_size = title_size,
    );

    let badge_style = css!(
        "
            display: inline-block;
            padding: 0.25rem 0.75rem;
            border-radius: 9999px;
            font-size: 0.75rem;
            font-weight: 600;
            color: ${color};
            border: 1px solid ${border};
            background-color: ${background};
        ",
        color = color,
        border = format!("{color}40"),
        background = format!("{color}15"),
    );

    let years_style = css!(
        "
            float: right;
            padding: 0.25rem 0.6rem;
            border-radius: 0.5rem;
            font-family: monospace;
            font-size: 0.75rem;
            background-color: var(--metallic-light);
            color: var(--metallic-dark);
        "
    );

    let bar_style = css!(
        "
            height: 6px;
            border-radius: 9999px;
            background-color: var(--background-secondary);

            div {
                height: 100%;
                border-radius: 9999px;
                width: ${bar_width};
                background-color: ${color};
            }
        ",
        bar_width = bar_width,
        color = color,
    );

    html! {
        <article key={ technology.name } class={ card_style }>
            <span class={ badge_style }>{ technology.category.label() }</span>
            <span class={ years_style }>{ format!("{}y", technology.years) }</span>
            <h3>{ technology.name }</h3>
            <div class={ bar_style }><div/></div>
            <small>{ technology.proficiency.label() }</small>
            if expert {
                <div class={ css!("margin-top: 1rem; font-weight: bold; color: var(--accent-primary);") }>
                    { "⭐ Expert" }
                </div>
            }
        </article>
    }
}
