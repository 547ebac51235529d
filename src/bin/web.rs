//! Single binary web server: HTML page plus JSON API for the engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).
//!
//! The schedule flow (/api/schedule/...) and the bracket flow
//! (/api/bracket/...) are independent route groups, but both drive the one
//! engine and the one shared match store, so they always observe the same
//! tournament state. All mutations hold the write lock across the whole
//! read-modify-write, store included.

use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::sync::RwLock;
use tournament_bracket_web::{
    champion, generate_schedule, record_group_winner, reset_tournament, select_winner,
    MatchStore, MemoryMatchStore, TeamId, Tournament,
};

/// Engine state: one tournament per process, driven by a single operator.
type AppState = Data<RwLock<Tournament>>;

/// The shared match store both flows read and write.
type SharedStore = Data<MemoryMatchStore>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct RegisterTeamBody {
    name: String,
}

#[derive(Deserialize)]
struct GroupWinnerBody {
    match_id: String,
    winner: String,
}

#[derive(Deserialize)]
struct BracketWinnerBody {
    round: u32,
    position: u32,
    winner: String,
}

/// Path segment: team id (e.g. /api/teams/{id})
#[derive(Deserialize)]
struct TeamPath {
    id: TeamId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-bracket-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full engine state: teams, schedule, points, phase.
#[get("/api/tournament")]
async fn api_get_tournament(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(&*g)
}

/// Register a team (name trimmed, non-empty, unique case-insensitively).
#[post("/api/teams")]
async fn api_register_team(state: AppState, body: Json<RegisterTeamBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.register_team(body.name.trim()) {
        Ok(_) => HttpResponse::Ok().json(&*g),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Remove a team by id.
#[delete("/api/teams/{id}")]
async fn api_delete_team(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.delete_team(path.id) {
        Ok(()) => HttpResponse::Ok().json(&*g),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Generate both fixture trees from the registered teams. All-or-nothing:
/// on error the previous schedule and store content are untouched.
#[post("/api/schedule/generate")]
async fn api_generate_schedule(state: AppState, store: SharedStore) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match generate_schedule(&mut g, store.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(&*g),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Record a group-stage result (schedule flow; round-robin matches are
/// keyed by id). Completing the group stage seeds the semifinals.
#[put("/api/schedule/group-winner")]
async fn api_group_winner(
    state: AppState,
    store: SharedStore,
    body: Json<GroupWinnerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match record_group_winner(&mut g, store.get_ref(), &body.match_id, &body.winner) {
        Ok(()) => HttpResponse::Ok().json(&*g),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Bracket flow activation: the current knockout match list from the shared
/// store, plus the champion once the final is decided.
#[get("/api/bracket")]
async fn api_get_bracket(store: SharedStore) -> HttpResponse {
    let matches = store.load();
    let champion = champion(&matches).map(|c| c.to_string());
    HttpResponse::Ok().json(serde_json::json!({
        "matches": matches,
        "champion": champion,
    }))
}

/// Select a knockout winner by (round, position). Used by both the bracket
/// view and the schedule view's knockout tab.
#[put("/api/bracket/winner")]
async fn api_bracket_winner(
    state: AppState,
    store: SharedStore,
    body: Json<BracketWinnerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match select_winner(&mut g, store.get_ref(), body.round, body.position, &body.winner) {
        Ok(matches) => {
            let champion = champion(&matches).map(|c| c.to_string());
            HttpResponse::Ok().json(serde_json::json!({
                "matches": matches,
                "phase": g.phase,
                "champion": champion,
            }))
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Reset the tournament: schedule, points, phase, and store back to initial.
/// Registered teams are kept.
#[post("/api/tournament/reset")]
async fn api_reset_tournament(state: AppState, store: SharedStore) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    reset_tournament(&mut g, store.get_ref());
    log::info!("Tournament reset");
    HttpResponse::Ok().json(&*g)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(Tournament::new()));
    let store = Data::new(MemoryMatchStore::new());

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(store.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_tournament)
            .service(api_register_team)
            .service(api_delete_team)
            .service(api_generate_schedule)
            .service(api_group_winner)
            .service(api_get_bracket)
            .service(api_bracket_winner)
            .service(api_reset_tournament)
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
