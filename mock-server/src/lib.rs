use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct Deleted {
    pub deleted: u64,
}

/// Error body attached to every non-2xx response.
#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Default)]
pub struct Directory {
    users: HashMap<u64, User>,
    next_id: u64,
}

impl Directory {
    /// Next free sequential id, skipping ids taken by explicit creates.
    fn allocate_id(&mut self) -> u64 {
        loop {
            self.next_id += 1;
            if !self.users.contains_key(&self.next_id) {
                return self.next_id;
            }
        }
    }
}

pub type Db = Arc<RwLock<Directory>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Directory::default()));
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found(id: u64) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
            detail: Some(format!("no user with id {id}")),
        }),
    )
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let dir = db.read().await;
    Json(dir.users.values().cloned().collect())
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>), (StatusCode, Json<ErrorBody>)> {
    let mut dir = db.write().await;
    let id = match input.id {
        Some(id) if dir.users.contains_key(&id) => {
            return Err((
                StatusCode::CONFLICT,
                Json(ErrorBody {
                    error: "User already exists".to_string(),
                    detail: Some(format!("id {id} is taken")),
                }),
            ));
        }
        Some(id) => id,
        None => dir.allocate_id(),
    };
    let user = User {
        id,
        name: input.name,
        email: input.email,
        role: input.role.unwrap_or_else(|| "user".to_string()),
    };
    dir.users.insert(id, user.clone());
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<User>, (StatusCode, Json<ErrorBody>)> {
    let dir = db.read().await;
    dir.users.get(&id).cloned().map(Json).ok_or_else(|| not_found(id))
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateUser>,
) -> Result<Json<User>, (StatusCode, Json<ErrorBody>)> {
    let mut dir = db.write().await;
    let user = dir.users.get_mut(&id).ok_or_else(|| not_found(id))?;
    if let Some(name) = input.name {
        user.name = name;
    }
    if let Some(email) = input.email {
        user.email = email;
    }
    if let Some(role) = input.role {
        user.role = role;
    }
    Ok(Json(user.clone()))
}

async fn delete_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Deleted>, (StatusCode, Json<ErrorBody>)> {
    let mut dir = db.write().await;
    if dir.users.remove(&id).is_some() {
        Ok(Json(Deleted { deleted: id }))
    } else {
        Err(not_found(id))
    }
}
