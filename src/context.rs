//! Application Context
//!
//! Shared state provided via Leptos Context API: the injected services, the
//! session user, appearance settings, notices and the current page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use zuzzbee_core::config::NOTICE_TIMEOUT_MS;
use zuzzbee_core::settings::{AuthError, AuthSession, ThemeMode, ThemeSettings};
use zuzzbee_core::{AppServices, Notice, User, UserPatch};

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    UploadPhoto,
    AddStory,
    Campaigns,
    Profile,
    EditProfile,
    Login,
    Signup,
}

impl Page {
    /// Reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Page::Login | Page::Signup)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::UploadPhoto => "Upload Photo",
            Page::AddStory => "Add Story",
            Page::Campaigns => "Campaigns",
            Page::Profile => "Profile",
            Page::EditProfile => "Edit Profile",
            Page::Login => "Log In",
            Page::Signup => "Sign Up",
        }
    }
}

/// Page actually shown for a request, given whether a session exists
pub fn resolve_page(requested: Page, authenticated: bool) -> Page {
    match (authenticated, requested.is_public()) {
        (false, false) => Page::Login,
        (true, true) => Page::Home,
        _ => requested,
    }
}

/// A notice on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload collections - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload collections - write
    set_reload_trigger: WriteSignal<u32>,
    pub page: RwSignal<Page>,
    pub session: RwSignal<AuthSession>,
    pub theme: RwSignal<ThemeSettings>,
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
    services: StoredValue<AppServices>,
}

impl AppContext {
    /// Restore the session and appearance from the settings store
    pub fn new(services: AppServices, system_prefers_dark: bool) -> Self {
        let session = AuthSession::restore(services.settings.as_ref());
        let theme = ThemeSettings::load(services.settings.as_ref(), system_prefers_dark);
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
            page: RwSignal::new(Page::Home),
            session: RwSignal::new(session),
            theme: RwSignal::new(theme),
            toasts: RwSignal::new(Vec::new()),
            next_toast_id: StoredValue::new(0),
            services: StoredValue::new(services),
        }
    }

    pub fn services(&self) -> AppServices {
        self.services.get_value()
    }

    /// Trigger a reload of collections
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn navigate(&self, page: Page) {
        self.page.set(page);
    }

    // ========================
    // Notices
    // ========================

    /// Show a notice and dismiss it after `NOTICE_TIMEOUT_MS`
    pub fn notify(&self, notice: Notice) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id.wrapping_add(1));
        if notice.is_failure() {
            log::warn!("notice: {}", notice.title);
        }
        self.toasts.update(|t| t.push(Toast { id, notice }));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            ctx.dismiss(id);
        });
    }

    pub fn notify_all(&self, notices: Vec<Notice>) {
        for notice in notices {
            self.notify(notice);
        }
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }

    // ========================
    // Session
    // ========================

    pub fn current_user(&self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn login(&self, patch: UserPatch) {
        let services = self.services();
        self.session.update(|s| {
            s.login(patch, services.settings.as_ref());
        });
        self.navigate(Page::Home);
    }

    pub fn logout(&self) {
        let services = self.services();
        self.session.update(|s| s.logout(services.settings.as_ref()));
        self.navigate(Page::Login);
    }

    pub fn update_user(&self, patch: UserPatch) -> Result<(), AuthError> {
        let services = self.services();
        let mut result = Ok(());
        self.session.update(|s| {
            result = s.update_user(patch, services.settings.as_ref()).map(|_| ());
        });
        result
    }

    // ========================
    // Appearance
    // ========================

    pub fn toggle_mode(&self) -> ThemeMode {
        let services = self.services();
        let mut mode = ThemeMode::default();
        self.theme.update(|t| mode = t.toggle_mode(services.settings.as_ref()));
        mode
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        let services = self.services();
        self.theme.update(|t| t.set_mode(mode, services.settings.as_ref()));
    }

    pub fn set_color_theme(&self, id: &str) -> bool {
        let services = self.services();
        let mut changed = false;
        self.theme.update(|t| changed = t.set_color_theme(id, services.settings.as_ref()));
        changed
    }
}

/// Get the app context from the component tree
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
