//! Reactive session context provided at the application root.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is the only writer of the session snapshot and the credential
//! slot. Components read the snapshot and call the operations below; each
//! operation runs one REST call and feeds its result through the reducers in
//! `state::session`, then executes the effects those reducers return.
//!
//! DESIGN
//! ======
//! The handle is `Copy` (signals plus stored values) so event handlers and
//! spawned tasks can capture it freely. Navigation is requested through a
//! redirect slot that a watcher inside the router drains.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::net::api::{AuthApi, ProfileUpdate};
#[cfg(feature = "hydrate")]
use crate::net::types::{LoginRequest, RegisterRequest};
#[cfg(not(feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::session::{SessionEffect, SessionOp, SessionState};
use crate::util::storage::{BrowserStore, CredentialStore};

/// What remains for the reactive layer after storage effects ran.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectOutcome {
    pub navigate: Option<&'static str>,
    pub notices: Vec<(NoticeKind, String)>,
}

/// Execute storage effects against `store` and collect the rest.
pub fn apply_effects<S: CredentialStore + ?Sized>(store: &S, effects: Vec<SessionEffect>) -> EffectOutcome {
    let mut outcome = EffectOutcome::default();
    for effect in effects {
        match effect {
            SessionEffect::PersistCredential(credential) => store.save(&credential),
            SessionEffect::ClearCredential => store.clear(),
            SessionEffect::Navigate(route) => outcome.navigate = Some(route),
            SessionEffect::Notify(kind, message) => outcome.notices.push((kind, message)),
        }
    }
    outcome
}

/// Handle to the session snapshot and its operations.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
    notices: RwSignal<NoticeState>,
    redirect: RwSignal<Option<&'static str>>,
    api: StoredValue<AuthApi>,
    store: StoredValue<BrowserStore>,
    notice_ttl_ms: u32,
}

impl Session {
    /// Build an unprovided session. Startup is pending until [`Self::restore`].
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            state: RwSignal::new(SessionState::seeded(None)),
            notices: RwSignal::new(NoticeState::default()),
            redirect: RwSignal::new(None),
            api: StoredValue::new(AuthApi::new(config)),
            store: StoredValue::new(BrowserStore::new(config.credential_key.clone())),
            notice_ttl_ms: config.notice_ttl_ms,
        }
    }

    /// Create the session, expose it to descendants, and schedule the
    /// credential restore for after hydration.
    pub fn provide(config: &ClientConfig) -> Self {
        let session = Self::new(config);
        provide_context(session);
        Effect::new(move || session.restore());
        session
    }

    /// Look up the session provided by an ancestor.
    ///
    /// # Errors
    ///
    /// [`ClientError::MissingSessionProvider`] outside of the App root.
    pub fn from_context() -> Result<Self, ClientError> {
        use_context::<Self>().ok_or(ClientError::MissingSessionProvider)
    }

    /// Read-only view of the snapshot.
    pub fn snapshot(self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    pub fn notices(self) -> ReadSignal<NoticeState> {
        self.notices.read_only()
    }

    /// Route requested by the last transition, if not yet followed.
    pub fn redirect(self) -> ReadSignal<Option<&'static str>> {
        self.redirect.read_only()
    }

    pub fn clear_redirect(self) {
        self.redirect.set(None);
    }

    /// Seed the snapshot from the credential slot and validate it.
    pub fn restore(self) {
        let credential = self.store.with_value(CredentialStore::load);
        self.state.set(SessionState::seeded(credential));
        self.state.update(SessionState::finish_unseeded);
        let pending = self.state.with_untracked(|s| s.pending_validation().map(str::to_owned));
        if let Some(credential) = pending {
            self.validate(credential);
        }
    }

    fn validate(self, credential: String) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = self.api.with_value(AuthApi::clone).current_user(&credential).await;
            if let Err(err) = &result {
                log::info!("stored credential rejected: {err}");
            }
            self.finish(|s| s.apply_validation(&credential, result));
        });
        #[cfg(not(feature = "hydrate"))]
        self.finish(|s| s.apply_validation(&credential, Err(ApiError::Unavailable)));
    }

    /// Sign in with email and password.
    pub fn login(self, email: String, password: String) {
        let credential = self.begin();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = LoginRequest { email, password };
            let result = self.api.with_value(AuthApi::clone).login(credential.as_deref(), &request).await;
            self.finish(|s| s.apply_auth(SessionOp::Login, result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credential, email, password);
            self.finish(|s| s.apply_auth(SessionOp::Login, Err(ApiError::Unavailable)));
        }
    }

    /// Create an account; success signs the new account in.
    pub fn register(self, name: String, email: String, password: String) {
        let credential = self.begin();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let request = RegisterRequest { name, email, password };
            let result = self.api.with_value(AuthApi::clone).register(credential.as_deref(), &request).await;
            self.finish(|s| s.apply_auth(SessionOp::Register, result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credential, name, email, password);
            self.finish(|s| s.apply_auth(SessionOp::Register, Err(ApiError::Unavailable)));
        }
    }

    /// Drop the session locally. No remote call.
    pub fn logout(self) {
        self.finish(SessionState::logout);
    }

    /// Submit profile changes (and optionally a new avatar).
    pub fn update_profile(self, update: ProfileUpdate) {
        let credential = self.begin();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = self.api.with_value(AuthApi::clone).update_profile(credential.as_deref(), &update).await;
            self.finish(|s| s.apply_profile(SessionOp::UpdateProfile, result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credential, update);
            self.finish(|s| s.apply_profile(SessionOp::UpdateProfile, Err(ApiError::Unavailable)));
        }
    }

    /// Delete the current user's avatar.
    pub fn remove_avatar(self) {
        let credential = self.begin();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = self.api.with_value(AuthApi::clone).remove_avatar(credential.as_deref()).await;
            self.finish(|s| s.apply_profile(SessionOp::RemoveAvatar, result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credential;
            self.finish(|s| s.apply_profile(SessionOp::RemoveAvatar, Err(ApiError::Unavailable)));
        }
    }

    /// Show a toast that disappears after the configured time-to-live.
    pub fn notify(self, kind: NoticeKind, message: String) {
        let mut id = String::new();
        self.notices.update(|n| id = n.push(kind, message));

        #[cfg(feature = "hydrate")]
        {
            let notices = self.notices;
            let ttl = std::time::Duration::from_millis(u64::from(self.notice_ttl_ms));
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(ttl).await;
                notices.update(|n| n.dismiss(&id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, self.notice_ttl_ms);
    }

    pub fn dismiss_notice(self, id: &str) {
        self.notices.update(|n| n.dismiss(id));
    }

    /// Mark an operation in flight and capture the credential it will send.
    fn begin(self) -> Option<String> {
        self.state.update(SessionState::begin);
        self.state.with_untracked(|s| s.credential.clone())
    }

    fn finish(self, reduce: impl FnOnce(&mut SessionState) -> Vec<SessionEffect>) {
        let mut effects = Vec::new();
        self.state.update(|s| effects = reduce(s));
        let outcome = self.store.with_value(|store| apply_effects(store, effects));
        for (kind, message) in outcome.notices {
            self.notify(kind, message);
        }
        if let Some(route) = outcome.navigate {
            self.redirect.set(Some(route));
        }
    }
}
