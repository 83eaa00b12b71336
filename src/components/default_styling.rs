use crate::components::imports::*;
use crate::components::theme::prelude::{Theme, ThemeConfig};

pub struct DefaultStyling;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

/// Both palettes as custom properties; the root attribute picks one.
pub fn palette_rules(config: &ThemeConfig) -> String {
    Theme::ALL
        .iter()
        .map(|theme| {
            let selector = if theme.marks_root() {
                format!(":root[{}=\"{}\"]", config.attribute, theme.tag())
            } else {
                ":root".to_owned()
            };
            format!("{selector} {{\n{}\n}}", theme.palette().declarations())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Component for DefaultStyling {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let global_style = format!(
            "
                {palettes}

                html {{
                    scroll-behavior: smooth;
                }}

                body {{
                    margin: 0;
                    font-family: 'Inter', system-ui, sans-serif;
                    background-color: var(--background);
                    color: var(--foreground);
                    transition: background-color .3s ease, color .3s ease;
                }}

                a {{
                    text-decoration: none;
                    color: inherit;
                }}

                button {{
                    font: inherit;
                }}
            ",
            palettes = palette_rules(&ThemeConfig::default()),
        );

        html! {
            <>
                <Global css={global_style}/>
                { for ctx.props().children.iter() }
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternate_palette_is_keyed_by_the_root_attribute() {
        let rules = palette_rules(&ThemeConfig::default());

        assert!(rules.starts_with(":root {"));
        assert!(rules.contains(":root[data-theme=\"tron\"] {"));
        assert!(rules.contains("--accent-primary: #DC2626;"));
        assert!(rules.contains("--accent-primary: #00E5FF;"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn renders_children_without_a_theme_provider() {
        #[function_component(Styled)]
        fn styled() -> Html {
            html! {
                <DefaultStyling>
                    <p>{ "styled content" }</p>
                </DefaultStyling>
            }
        }

        let rendered = yew::ServerRenderer::<Styled>::new()
            .hydratable(false)
            .render()
            .await;
        assert!(rendered.contains("styled content"), "{rendered}");
    }
}
