use crate::components::imports::*;

pub struct Hero;

pub enum Msg {
    ScrollTo(&'static str),
}

impl Component for Hero {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ScrollTo(section) => {
                scroll_to_section(section);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let section_style = css!(
            "
                min-height: 100vh;
                display: flex; align-items: center; justify-content: center;
                padding: 5rem 1.5rem 0 1.5rem;
                box-sizing: border-box;

                h1 {
                    font-size: 6rem;
                    margin: 0;
                    line-height: 1;
                }

                h2 {
                    font-size: 3rem;
                    color: var(--foreground-secondary);
                }

                @media (max-width: 768px) {
                    h1 { font-size: 3.5rem; }
                    h2 { font-size: 2rem; }
                }
            "
        );

        let content_style = css!("max-width: 64rem; width: 100%;");

        let description_style = css!(
            "
                font-size: 1.25rem;
                line-height: 1.7;
                max-width: 42rem;
                color: var(--foreground-secondary);
            "
        );

        let primary_btn = css!(
            "
                padding: 1rem 2rem;
                border: none;
                border-radius: 0.5rem;
                font-weight: bold;
                cursor: pointer;
                color: white;
                background-color: var(--accent-primary);
                transition: background-color .2s ease-in;

                :hover {
                    background-color: var(--accent-primary-hover);
                }
            "
        );

        let secondary_btn = css!(
            "
                padding: 1rem 2rem;
                border-radius: 0.5rem;
                font-weight: bold;
                cursor: pointer;
                color: var(--accent-primary);
                background: none;
                border: 2px solid var(--accent-primary);
                transition: all .2s ease-in;

                :hover {
                    color: white;
                    background-color: var(--accent-primary);
                }
            "
        );

        let divider_style = css!(
            "
                margin-top: 5rem;
                height: 1px;
                background: linear-gradient(to right, transparent, var(--metallic-primary), transparent);
            "
        );

        let to_projects = ctx.link().callback(|_| Msg::ScrollTo(sections::PROJECTS));
        let to_contact = ctx.link().callback(|_| Msg::ScrollTo(sections::CONTACT));

        html! {
            <section id={ sections::HERO } class={ section_style }>
                <div class={ content_style }>
                    <p><Colored>{ "Hi, my name is" }</Colored></p>
                    <h1>
                        { "Alexandro" }
                        <br/>
                        <Colored with="var(--foreground-secondary)">{ "Cardona" }</Colored>
                    </h1>
                    <h2>
                        { "I build " }<Colored>{ "complete ecosystems" }</Colored>{ "," }
                        <br/>
                        { "not just apps." }
                    </h2>
                    <p class={ description_style }>
                        { "Full Stack Software Architect specializing in " }
                        <Colored bold={true}>{ ".NET" }</Colored>{ ", " }
                        <Colored bold={true}>{ "Vue/Nuxt" }</Colored>{ ", and " }
                        <Colored bold={true}>{ "Laravel" }</Colored>
                        { ". From desktop to cloud, I architect solutions that solve real-world problems." }
                    </p>
                    <div class={ css!("display: flex; gap: 1rem; padding-top: 2rem;") }>
                        <button onclick={ to_projects } class={ primary_btn }>{ "View My Work" }</button>
                        <button onclick={ to_contact } class={ secondary_btn }>{ "Get In Touch" }</button>
                    </div>
                    <div class={ divider_style }/>
                </div>
            </section>
        }
    }
}
