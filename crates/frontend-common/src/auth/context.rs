//! Global session context and provider

use std::rc::Rc;

use brayam_http::types::Usuario;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::AuthConfig;
use crate::hooks::{use_auto_logout, use_cross_tab_logout, use_session_validator};
use crate::services::session::{fetch_usuario, logout_current_session, redirect_to_login};
use crate::session::{BrowserSessionStore, StorageLogoutChannel};

/// Session context data
#[derive(Clone, Debug, PartialEq)]
pub struct SessionContextData {
    /// Authenticated user, for display purposes only
    pub usuario: Option<Usuario>,
    pub is_loading: bool,
    /// Set after an explicit logout completed, so the consuming UI can
    /// show its confirmation before the redirect fires
    pub logout_confirmed: bool,
}

/// Session context actions
pub enum SessionAction {
    UserLoaded(Option<Usuario>),
    LogoutConfirmed,
}

/// Session context handle
pub type SessionContext = UseReducerHandle<SessionContextData>;

impl Default for SessionContextData {
    fn default() -> Self {
        Self {
            usuario: None,
            is_loading: true, // Start loading until the first validation answers
            logout_confirmed: false,
        }
    }
}

impl Reducible for SessionContextData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::UserLoaded(usuario) => Rc::new(Self {
                usuario,
                is_loading: false,
                logout_confirmed: false,
            }),
            SessionAction::LogoutConfirmed => Rc::new(Self {
                usuario: None,
                is_loading: false,
                logout_confirmed: true,
            }),
        }
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component
///
/// Composes the whole lifecycle: loads the user on mount, keeps the
/// 30-second validation poll running, notifies the backend on page
/// unload, and follows logouts performed in other tabs.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionContextData::default);

    use_session_validator();
    use_auto_logout();
    use_cross_tab_logout();

    // Sweep credentials on insecure origins, then load the
    // authenticated user once on mount
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            if !crate::security::is_secure_context() {
                tracing::warn!("insecure origin, discarding credential material");
                crate::security::clear_sensitive_data();
            }
            spawn_local(async move {
                let usuario = fetch_usuario(&BrowserSessionStore::new()).await;
                session.dispatch(SessionAction::UserLoaded(usuario));
            });
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the authenticated user
#[hook]
pub fn use_usuario() -> Option<Usuario> {
    let session = use_session();
    session.usuario.clone()
}

/// Hook returning the explicit logout callback.
///
/// Awaits the backend (success or failure), clears local state, notifies
/// the other tabs, then redirects after a short delay so the confirmation
/// stays visible. Expiry-driven logouts redirect silently instead.
#[hook]
pub fn use_logout() -> Callback<()> {
    let session = use_session();
    Callback::from(move |_| {
        let session = session.clone();
        spawn_local(async move {
            let store = BrowserSessionStore::new();
            let channel = StorageLogoutChannel::new();
            logout_current_session(&store, &channel).await;
            session.dispatch(SessionAction::LogoutConfirmed);
            Timeout::new(AuthConfig::LOGOUT_REDIRECT_DELAY_MS, redirect_to_login).forget();
        });
    })
}
