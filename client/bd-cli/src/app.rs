use crate::{CardCommands, CliError, CliResult, Commands, SessionCommands};

use bd_api::{AuthService, Client};
use bd_cards::{CardsPageStore, FixtureCardsService};
use bd_config::Config;
use bd_core::{LoginCredentials, NewCardForm, ProfileUpdate, RegisterData};
use bd_session::{SessionError, SessionStore};
use bd_storage::{DurableStorage, FileStorage, MemoryStorage, SessionRepository};

use std::sync::Arc;

use log::{debug, info};
use serde_json::Value;

/// The two stores behind one process invocation.
pub struct App {
    session: SessionStore,
    cards: CardsPageStore,
}

impl App {
    pub fn from_config(config: &Config) -> CliResult<Self> {
        let storage: Arc<dyn DurableStorage> = match config.session_path()? {
            Some(path) => {
                debug!("Session file: {}", path.display());
                Arc::new(FileStorage::new(path))
            }
            None => Arc::new(MemoryStorage::new()),
        };
        let repository = SessionRepository::new(storage);
        let policy = config.auth.unauthorized_policy;

        let client = Client::from_config(&config.api, policy, repository.clone())?;
        let session = SessionStore::new(Arc::new(AuthService::new(client)), repository, policy);

        let fixtures = FixtureCardsService::from_config(&config.fixtures, config.fixtures_dir()?);
        let cards = CardsPageStore::from_config(Arc::new(fixtures), &config.fetch);

        Ok(Self { session, cards })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn cards(&self) -> &CardsPageStore {
        &self.cards
    }

    /// Run one command and return what it should print.
    pub async fn run(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Session { action } => self.run_session(action).await,
            Commands::Dashboard => {
                self.cards.fetch_all().await;
                Ok(serde_json::to_value(self.cards.snapshot().await)?)
            }
            Commands::Cards { action } => self.run_cards(action).await,
        }
    }

    async fn run_session(&self, action: SessionCommands) -> CliResult<Value> {
        match action {
            SessionCommands::Login { email, password } => {
                self.session
                    .login(&LoginCredentials::new(email, password))
                    .await?;
            }
            SessionCommands::Register {
                name,
                email,
                password,
                password_confirmation,
            } => {
                self.session
                    .register(&RegisterData::new(
                        name,
                        email,
                        password,
                        password_confirmation,
                    ))
                    .await?;
            }
            SessionCommands::Logout => {
                self.session.hydrate().await?;
                self.session.logout().await?;
            }
            SessionCommands::Status => {
                self.session.hydrate().await?;
            }
            SessionCommands::Refresh => {
                self.session.hydrate().await?;
                self.session.refresh_access_token().await?;
            }
            SessionCommands::Whoami => {
                // Validation already replaced the profile from `GET /auth/me`.
                self.authorize().await?;
                let user = self
                    .session
                    .current_user()
                    .await
                    .ok_or_else(SessionError::no_profile)?;
                return Ok(serde_json::to_value(user)?);
            }
            SessionCommands::UpdateProfile {
                name,
                email,
                avatar,
            } => {
                self.authorize().await?;
                let update = ProfileUpdate {
                    name,
                    email,
                    avatar,
                    password: None,
                };
                let user = self.session.update_profile(&update).await?;
                return Ok(serde_json::to_value(user)?);
            }
        }

        Ok(serde_json::to_value(self.session.snapshot().await)?)
    }

    async fn run_cards(&self, action: CardCommands) -> CliResult<Value> {
        self.cards.fetch_cards().await?;

        match action {
            CardCommands::List => {}
            CardCommands::Add {
                holder,
                number,
                cvv,
                valid_thru,
                provider,
                bank,
            } => {
                let id = self
                    .cards
                    .add_card_from_form(NewCardForm {
                        holder,
                        cvv,
                        valid_thru,
                        card_number: number,
                        card_provider: provider,
                        bank,
                    })
                    .await?;
                info!("Added card {}", id);
            }
            CardCommands::Freeze { position } => {
                let id = self
                    .cards
                    .card_at(position)
                    .await
                    .ok_or_else(|| CliError::no_card_at(position))?;
                let frozen = self.cards.toggle_freeze(id).await?;
                info!("Card {} is now {}", id, if frozen { "frozen" } else { "active" });
            }
            CardCommands::Remove { position } => {
                let id = self
                    .cards
                    .card_at(position)
                    .await
                    .ok_or_else(|| CliError::no_card_at(position))?;
                self.cards.remove_card(id).await?;
                info!("Removed card {}", id);
            }
        }

        Ok(serde_json::to_value(self.cards.cards().await)?)
    }

    /// Hydrate the stored session and have the server confirm it before an
    /// authorized action.
    async fn authorize(&self) -> CliResult<()> {
        self.session.hydrate().await?;
        self.session.ensure_valid().await?;
        Ok(())
    }
}
