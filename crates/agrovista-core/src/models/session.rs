//! Session state and view dispatch.
//!
//! A session is an explicit value owned by the caller and passed into
//! every dashboard operation. It starts unauthenticated; a successful
//! login is the only transition, and there is no way back: the
//! dashboard has no logout, so a session ends when the value is
//! dropped.

use serde::{Deserialize, Serialize};

/// The authenticated-identity context of one interactive user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    /// A fresh, unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session already bound to `email`.
    pub fn authenticated(email: impl Into<String>) -> Self {
        Self {
            user: Some(email.into()),
        }
    }

    /// Bind this session to `email`. Idempotent for the same user;
    /// there is no transition back to unauthenticated.
    pub fn authenticate(&mut self, email: impl Into<String>) {
        self.user = Some(email.into());
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Email of the signed-in user, if any.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// The dashboard menu, reachable only once authenticated.
    pub fn menu(&self) -> Option<&'static [View]> {
        if self.is_authenticated() {
            Some(&View::MENU)
        } else {
            None
        }
    }
}

/// The five dashboard views selectable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Weather,
    Prices,
    HarvestRegistration,
    Recommendations,
    Chatbot,
}

impl View {
    /// Menu order is fixed.
    pub const MENU: [View; 5] = [
        View::Weather,
        View::Prices,
        View::HarvestRegistration,
        View::Recommendations,
        View::Chatbot,
    ];

    /// Label shown in the menu.
    pub fn label(&self) -> &'static str {
        match self {
            View::Weather => "Clima",
            View::Prices => "Precios",
            View::HarvestRegistration => "Registro Cosecha",
            View::Recommendations => "Recomendaciones",
            View::Chatbot => "Chatbot",
        }
    }

    pub fn from_label(label: &str) -> Option<View> {
        View::MENU.into_iter().find(|v| v.label() == label)
    }
}
