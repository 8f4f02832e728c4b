//! The dashboard facade the presentation layer drives.
//!
//! Every operation takes the caller's [`Session`] explicitly; there
//! is no ambient logged-in state. Unauthenticated sessions can only
//! register and log in; the menu and all five views require an
//! authenticated user. Failures reach the caller as the uniform
//! per-operation error kinds; causes go to the log.

use agrovista_advisor::{PricePoint, Responder, Tip, agronomic_tips, price_series};
use agrovista_auth::{AccountService, RegisterInput};
use agrovista_core::error::{AgroError, AgroResult};
use agrovista_core::models::account::Account;
use agrovista_core::models::harvest::{Crop, HarvestRecord, NewHarvest};
use agrovista_core::models::session::{Session, View};
use agrovista_core::repository::{AccountRepository, HarvestRepository};
use agrovista_weather::{Municipality, WeatherClient, WeatherReading};
use chrono::NaiveDate;
use tracing::warn;

pub struct Dashboard<A: AccountRepository, H: HarvestRepository> {
    accounts: AccountService<A>,
    harvests: H,
    weather: WeatherClient,
    responder: Responder,
}

impl<A: AccountRepository, H: HarvestRepository> Dashboard<A, H> {
    pub fn new(accounts: AccountService<A>, harvests: H, weather: WeatherClient) -> Self {
        Self {
            accounts,
            harvests,
            weather,
            responder: Responder::new(),
        }
    }

    /// Create an account. Available without a session.
    pub async fn register(&self, input: RegisterInput) -> AgroResult<Account> {
        self.accounts.register(input).await
    }

    /// Sign in. On success the caller's session becomes authenticated;
    /// on failure it is left exactly as it was.
    pub async fn login(&self, session: &mut Session, email: &str, password: &str) -> AgroResult<()> {
        let authenticated = self.accounts.login(email, password).await?;
        *session = authenticated;
        Ok(())
    }

    /// The five-view menu, reachable only once signed in.
    pub fn menu(&self, session: &Session) -> AgroResult<&'static [View]> {
        session.menu().ok_or(AgroError::Unauthenticated)
    }

    /// Weather view: current conditions for a municipality.
    pub async fn current_weather(
        &self,
        session: &Session,
        municipality: Municipality,
    ) -> AgroResult<WeatherReading> {
        self.require_user(session)?;
        match self.weather.fetch(municipality).await {
            Ok(reading) => Ok(reading),
            Err(e) => {
                warn!(city = municipality.name(), error = %e, "weather fetch failed");
                Err(e.into())
            }
        }
    }

    /// Prices view: the simulated commodity series.
    pub fn prices(&self, session: &Session) -> AgroResult<Vec<PricePoint>> {
        self.require_user(session)?;
        Ok(price_series())
    }

    /// Harvest registration view: record one entry for the signed-in
    /// user. Submitting twice records twice.
    pub async fn submit_harvest(
        &self,
        session: &Session,
        crop: Crop,
        quantity: u32,
        date: NaiveDate,
    ) -> AgroResult<HarvestRecord> {
        let owner = self.require_user(session)?.to_string();
        self.harvests
            .append(NewHarvest {
                crop,
                quantity,
                date,
                owner,
            })
            .await
            .map_err(|e| {
                warn!(error = %e, "harvest submission failed");
                AgroError::Store
            })
    }

    /// Harvest registration view: entries previously recorded by the
    /// signed-in user, quantity still encrypted.
    pub async fn my_harvests(&self, session: &Session) -> AgroResult<Vec<HarvestRecord>> {
        let owner = self.require_user(session)?;
        self.harvests.list_by_owner(owner).await.map_err(|e| {
            warn!(error = %e, "harvest listing failed");
            AgroError::Store
        })
    }

    /// Recommendations view: the static agronomic tips.
    pub fn recommendations(&self, session: &Session) -> AgroResult<&'static [Tip]> {
        self.require_user(session)?;
        Ok(agronomic_tips())
    }

    /// Chatbot view: canned answer for a free-text question.
    pub fn ask(&self, session: &Session, query: &str) -> AgroResult<&'static str> {
        self.require_user(session)?;
        Ok(self.responder.respond(query))
    }

    fn require_user<'s>(&self, session: &'s Session) -> AgroResult<&'s str> {
        session.user().ok_or(AgroError::Unauthenticated)
    }
}
