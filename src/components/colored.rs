use crate::components::imports::*;

/// Inline run of text in the given color, usually a `var(--...)`.
#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or(AttrValue::Static("var(--accent-primary)"))]
    pub with: AttrValue,
    #[prop_or_default]
    pub bold: bool,
    #[prop_or_default]
    pub children: Children,
}

pub struct Colored {
    pub style: stylist::StyleSource,
}

impl Colored {
    fn style(props: &Props) -> stylist::StyleSource {
        let color = props.with.clone();
        let weight = if props.bold { "600" } else { "inherit" };
        css!(
            "
                display: inline;
                color: ${color};
                font-weight: ${weight};
            ",
            color = color,
            weight = weight,
        )
    }
}

impl Component for Colored {
    type Message = ();
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            style: Self::style(ctx.props()),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.style = Self::style(ctx.props());
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <span class={ self.style.clone() }>
                { for ctx.props().children.iter() }
            </span>
        }
    }
}
