use super::store::ThemeSnapshot;
use super::theme_ctx::imports::*;
use super::themes::Theme;
use crate::components::imports::*;

/// What the toggle shows for a given snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToggleFace {
    /// The remembered theme is not known yet, so nothing theme-specific is drawn.
    Placeholder,
    Button { target: Theme, title: String },
}

impl From<ThemeSnapshot> for ToggleFace {
    fn from(snapshot: ThemeSnapshot) -> Self {
        if !snapshot.initialized {
            return Self::Placeholder;
        }
        let target = snapshot.value.opposite();
        Self::Button {
            target,
            title: format!("Switch to {}", target.name()),
        }
    }
}

pub struct ThemeToggle {
    theme_ctx: ThemeCtxSub,
}

pub enum ThemeToggleMsg {
    ThemeContextUpdate(ThemeCtx),
    ToggleTheme,
}

impl Component for ThemeToggle {
    type Message = ThemeToggleMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let box_style = css!(
            "
                user-select: none;
                height: 3rem; width: 3rem;
                display: flex; align-items: center; justify-content: center;
                border-radius: 0.5rem;
                border: 2px solid var(--metallic-light);
                background-color: var(--background-elevated);
                box-sizing: border-box;
            "
        );

        match ToggleFace::from(self.theme_ctx.as_ref().snapshot) {
            ToggleFace::Placeholder => html! { <div class={ box_style }/> },
            ToggleFace::Button { target, title } => {
                let onclick = ctx.link().callback(|_| Self::Message::ToggleTheme);
                let button_style = css!(
                    "
                        cursor: pointer;
                        transition: border-color .2s ease-in;

                        :hover {
                            border-color: var(--accent-primary);
                        }
                    "
                );

                html! {
                    <button {onclick}
                        class={ classes!(box_style, button_style) }
                        aria-label="Toggle theme"
                        title={ title }>
                        { icon(target) }
                    </button>
                }
            }
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
            Self::Message::ToggleTheme => {
                self.theme_ctx.as_ref().toggle_theme();
                false
            }
        }
    }
}

fn icon(target: Theme) -> Html {
    match target {
        Theme::Tron => html! {
            <svg width="24" height="24" fill="none" stroke="var(--foreground)" stroke-width="2" viewBox="0 0 24 24">
                <rect x="3" y="3" width="7" height="7"/>
                <rect x="14" y="3" width="7" height="7"/>
                <rect x="14" y="14" width="7" height="7"/>
                <rect x="3" y="14" width="7" height="7"/>
            </svg>
        },
        Theme::Ruthless => html! {
            <svg width="24" height="24" fill="var(--foreground)" viewBox="0 0 24 24">
                <circle cx="12" cy="12" r="4"/>
                <path
                    d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41"
                    stroke="var(--foreground)" stroke-width="2" stroke-linecap="round"/>
            </svg>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_until_initialized() {
        for value in Theme::ALL {
            let face = ToggleFace::from(ThemeSnapshot {
                value,
                initialized: false,
            });
            assert_eq!(face, ToggleFace::Placeholder);
        }
    }

    #[test]
    fn button_targets_the_other_theme() {
        let face = ToggleFace::from(ThemeSnapshot {
            value: Theme::Ruthless,
            initialized: true,
        });
        assert_eq!(
            face,
            ToggleFace::Button {
                target: Theme::Tron,
                title: "Switch to TRON".into()
            }
        );

        let face = ToggleFace::from(ThemeSnapshot {
            value: Theme::Tron,
            initialized: true,
        });
        assert_eq!(
            face,
            ToggleFace::Button {
                target: Theme::Ruthless,
                title: "Switch to Ruthless".into()
            }
        );
    }
}
