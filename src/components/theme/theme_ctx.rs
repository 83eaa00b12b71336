// The root component owns the store. Descendants get a read-only snapshot
// through the context and send requests back up through the handle.

use super::error::ThemeError;
use super::root::BrowserRoot;
use super::storage::BrowserStorage;
use super::store::{ThemeSnapshot, ThemeStore};
use super::themes::Theme;
use crate::components::imports::*;

pub mod imports {
    pub use super::{ThemeCtx, ThemeCtxSub, ThemeHandle, WithTheme};
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeRequest {
    Toggle,
    Set(Theme),
}

#[derive(derivative::Derivative)]
#[derivative(Debug, PartialEq)]
pub struct ThemeHandle {
    pub snapshot: ThemeSnapshot,

    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    upstream: Callback<ThemeRequest>,
}

impl ThemeHandle {
    pub fn theme(&self) -> Theme {
        self.snapshot.value
    }

    pub fn initialized(&self) -> bool {
        self.snapshot.initialized
    }

    pub fn toggle_theme(&self) {
        self.upstream.emit(ThemeRequest::Toggle);
    }

    pub fn set_theme(&self, theme: Theme) {
        self.upstream.emit(ThemeRequest::Set(theme));
    }
}

pub type ThemeCtx = Rc<ThemeHandle>;

pub struct ThemeCtxSub {
    ctx: ThemeCtx,
    // keep handle for component rerender after the theme changes
    _ctx_handle: ContextHandle<ThemeCtx>,
}

impl AsRef<ThemeHandle> for ThemeCtxSub {
    fn as_ref(&self) -> &ThemeHandle {
        &self.ctx
    }
}

impl ThemeCtxSub {
    pub fn try_subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Result<Self, ThemeError>
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(ThemeCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx
            .link()
            .context(ctx.link().callback(f))
            .ok_or(ThemeError::InvalidUsage {
                component: std::any::type_name::<COMP>(),
            })?;

        Ok(Self { ctx, _ctx_handle })
    }

    /// Panics when `COMP` is not rendered inside `WithTheme`.
    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Self
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(ThemeCtx) -> M + 'static,
    {
        match Self::try_subscribe(ctx, f) {
            Ok(sub) => sub,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn set(&mut self, ctx: ThemeCtx) {
        self.ctx = ctx;
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    Request(ThemeRequest),
    StoreChanged(ThemeSnapshot),
}

pub struct WithTheme {
    store: ThemeStore<BrowserStorage, BrowserRoot>,
    snapshot: ThemeSnapshot,
}

impl Component for WithTheme {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let mut store = ThemeStore::new(BrowserStorage, BrowserRoot);
        let on_change = ctx.link().callback(Msg::StoreChanged);
        store.subscribe(move |snapshot| on_change.emit(snapshot));

        Self {
            snapshot: store.get_theme(),
            store,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let handle = Rc::new(ThemeHandle {
            snapshot: self.snapshot,
            upstream: ctx.link().callback(Msg::Request),
        });

        html! {
            <ContextProvider<ThemeCtx> context={handle}>
                { ctx.props().children.clone() }
            </ContextProvider<ThemeCtx>>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Request(ThemeRequest::Toggle) => {
                self.store.toggle_theme();
                false
            }
            Msg::Request(ThemeRequest::Set(theme)) => {
                self.store.set_theme(theme);
                false
            }
            Msg::StoreChanged(snapshot) => {
                console::log!(format!("theme store changed: {:?}", snapshot));
                let changed = self.snapshot != snapshot;
                self.snapshot = snapshot;
                changed
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        // storage and the document are only trusted once mounted
        if first_render {
            self.store.initialize();
        }
    }
}
