use onboard_adapters::{config, persistence::HashMapAccountStore};
use onboard_core::{Account, AddAccount, AddAccountError, AddAccountModel, EmailValidator};
use onboard_service::{SignUpService, in_memory_signup_service};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub account_store: Option<HashMapAccountStore>,
}

impl TestApp {
    /// Spawn the in-memory sign-up service on a random local port
    pub async fn new() -> Self {
        let (service, account_store) = in_memory_signup_service();
        let mut app = Self::spawn(service).await;
        app.account_store = Some(account_store);
        app
    }

    /// Spawn a sign-up service wired with the given collaborators
    pub async fn with_collaborators<E, A>(email_validator: E, add_account: A) -> Self
    where
        E: EmailValidator + 'static,
        A: AddAccount + 'static,
    {
        Self::spawn(SignUpService::new(email_validator, add_account)).await
    }

    async fn spawn(service: SignUpService) -> Self {
        let listener = TcpListener::bind(config::test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener));

        Self {
            address,
            http_client: reqwest::Client::new(),
            account_store: None,
        }
    }

    pub async fn post_signup<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/signup", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_signup_raw(&self, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/signup", &self.address))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub struct FailingAddAccount;

#[async_trait::async_trait]
impl AddAccount for FailingAddAccount {
    async fn add(&self, _account: AddAccountModel) -> Result<Account, AddAccountError> {
        Err(AddAccountError::UnexpectedError("store down".to_string()))
    }
}

pub struct AlwaysValid;

impl EmailValidator for AlwaysValid {
    fn is_valid(&self, _email: &str) -> Result<bool, onboard_core::EmailValidatorError> {
        Ok(true)
    }
}
