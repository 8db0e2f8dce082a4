use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use recipes_service::domain::recipe::models::Recipe;
use recipes_service::domain::recipe::models::RecipeCommand;
use recipes_service::domain::recipe::models::RecipeId;
use recipes_service::domain::recipe::ports::RecipeCache;
use recipes_service::domain::recipe::ports::RecipeRepository;
use recipes_service::domain::recipe::service::RecipeService;
use recipes_service::domain::user::models::User;
use recipes_service::domain::user::models::Username;
use recipes_service::domain::user::ports::UserRepository;
use recipes_service::domain::user::service::UserService;
use recipes_service::inbound::http::router::create_router;
use recipes_service::recipe::errors::CacheError;
use recipes_service::recipe::errors::RecipeError;
use recipes_service::user::errors::UserError;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory adapters
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
    pub users: Arc<InMemoryUserRepository>,
    pub cache: Arc<InMemoryRecipeCache>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator =
            Arc::new(Authenticator::new(JWT_SECRET).expect("Failed to build authenticator"));
        let users = Arc::new(InMemoryUserRepository::default());
        let recipes = Arc::new(InMemoryRecipeRepository::default());
        let cache = Arc::new(InMemoryRecipeCache::default());

        let user_service = Arc::new(UserService::new(
            Arc::clone(&users),
            Arc::clone(&authenticator),
        ));
        let recipe_service = Arc::new(RecipeService::new(recipes, Arc::clone(&cache)));

        let router = create_router(user_service, recipe_service, Arc::clone(&authenticator));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
            users,
            cache,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with the raw token in Authorization
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).header("Authorization", token)
    }

    /// Helper to make POST request with the raw token in Authorization
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).header("Authorization", token)
    }

    /// Helper to make PUT request with the raw token in Authorization
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(&format!("{}{}", self.address, path))
            .header("Authorization", token)
    }

    /// Helper to make DELETE request with the raw token in Authorization
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(&format!("{}{}", self.address, path))
            .header("Authorization", token)
    }

    /// Register a user and sign in, returning the token
    pub async fn signed_in_token(&self, username: &str, password: &str) -> String {
        let credentials = serde_json::json!({ "username": username, "password": password });

        self.post("/signup")
            .json(&credentials)
            .send()
            .await
            .expect("Failed to execute request");

        let body: serde_json::Value = self
            .post("/signin")
            .json(&credentials)
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response");

        body["token"]
            .as_str()
            .expect("Sign-in did not return a token")
            .to_string()
    }
}

/// Credential store keyed by username
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn stored(&self, username: &str) -> Option<User> {
        self.users.lock().unwrap().get(username).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(user.username.as_str()) {
            return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
        }
        users.insert(user.username.to_string(), user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self.stored(username.as_str()))
    }

    async fn find_by_credentials(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<Option<User>, UserError> {
        Ok(self
            .stored(username.as_str())
            .filter(|user| user.password_hash == password_hash))
    }
}

/// Recipe store preserving insertion order
#[derive(Default)]
pub struct InMemoryRecipeRepository {
    recipes: Mutex<Vec<Recipe>>,
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, RecipeError> {
        self.recipes.lock().unwrap().push(recipe.clone());
        Ok(recipe)
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, RecipeError> {
        Ok(self.recipes.lock().unwrap().clone())
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, RecipeError> {
        Ok(self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .filter(|recipe| recipe.has_tag(tag))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeError> {
        Ok(self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .find(|recipe| recipe.id == *id)
            .cloned())
    }

    async fn update(&self, id: &RecipeId, command: RecipeCommand) -> Result<bool, RecipeError> {
        let mut recipes = self.recipes.lock().unwrap();
        match recipes.iter_mut().find(|recipe| recipe.id == *id) {
            Some(recipe) => {
                recipe.name = command.name;
                recipe.tags = command.tags;
                recipe.ingredients = command.ingredients;
                recipe.instructions = command.instructions;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &RecipeId) -> Result<bool, RecipeError> {
        let mut recipes = self.recipes.lock().unwrap();
        let before = recipes.len();
        recipes.retain(|recipe| recipe.id != *id);
        Ok(recipes.len() != before)
    }
}

/// Single-slot listing cache
#[derive(Default)]
pub struct InMemoryRecipeCache {
    listing: Mutex<Option<Vec<Recipe>>>,
}

impl InMemoryRecipeCache {
    pub fn is_warm(&self) -> bool {
        self.listing.lock().unwrap().is_some()
    }
}

#[async_trait]
impl RecipeCache for InMemoryRecipeCache {
    async fn get_recipes(&self) -> Result<Option<Vec<Recipe>>, CacheError> {
        Ok(self.listing.lock().unwrap().clone())
    }

    async fn set_recipes(&self, recipes: &[Recipe]) -> Result<(), CacheError> {
        *self.listing.lock().unwrap() = Some(recipes.to_vec());
        Ok(())
    }

    async fn clear(&self) -> Result<(), CacheError> {
        *self.listing.lock().unwrap() = None;
        Ok(())
    }
}
