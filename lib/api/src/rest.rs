use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use mealmatch_core::{Food, FoodCategory, FoodId, FoodRepository, FoodStore, OwnerId};
use mealmatch_similarity::{Ranker, SimilarResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize)]
struct UpsertFoodsRequest {
    foods: Vec<FoodRequest>,
}

#[derive(Deserialize)]
struct FoodRequest {
    id: Option<String>,
    name: String,
    category: Option<FoodCategory>,
    #[serde(default)]
    allergens: Vec<String>,
    #[serde(default)]
    is_safe: bool,
}

#[derive(Serialize)]
struct UpsertFoodsResponse {
    result: bool,
    ids: Vec<FoodId>,
}

#[derive(Deserialize)]
struct SimilarRequest {
    food_id: FoodId,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(store: Arc<FoodStore>, port: u16) -> std::io::Result<()> {
        let ranker = Ranker::new();

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(store.clone()))
                .app_data(web::Data::new(ranker.clone()))
                .configure(routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/owners/{owner_id}/foods", web::get().to(list_foods))
        .route("/owners/{owner_id}/foods", web::put().to(upsert_foods))
        .route("/foods/{id}", web::get().to(get_food))
        .route("/foods/{id}", web::delete().to(delete_food))
        .route("/similar", web::post().to(similar_foods));
}

async fn list_foods(
    store: web::Data<Arc<FoodStore>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let owner = OwnerId::from(path.into_inner());
    let foods = store.list_by_owner(&owner);
    Ok(HttpResponse::Ok().json(foods))
}

async fn upsert_foods(
    store: web::Data<Arc<FoodStore>>,
    path: web::Path<String>,
    req: web::Json<UpsertFoodsRequest>,
) -> ActixResult<HttpResponse> {
    let owner = OwnerId::from(path.into_inner());

    let mut ids = Vec::with_capacity(req.foods.len());
    for food_req in &req.foods {
        let id = match &food_req.id {
            Some(id) => FoodId::from(id.as_str()),
            None => FoodId::generate(),
        };

        let mut food = Food::new(id.clone(), food_req.name.clone(), owner.clone())
            .with_allergens(food_req.allergens.clone())
            .with_safety(food_req.is_safe);
        if let Some(category) = food_req.category {
            food = food.with_category(category);
        }

        store.upsert(food);
        ids.push(id);
    }

    Ok(HttpResponse::Ok().json(UpsertFoodsResponse { result: true, ids }))
}

async fn get_food(
    store: web::Data<Arc<FoodStore>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = FoodId::from(path.into_inner());

    match store.require(&id) {
        Ok(food) => Ok(HttpResponse::Ok().json(food)),
        Err(e) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn delete_food(
    store: web::Data<Arc<FoodStore>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = FoodId::from(path.into_inner());

    if store.remove(&id) {
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": true
        })))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Food not found"
        })))
    }
}

async fn similar_foods(
    store: web::Data<Arc<FoodStore>>,
    ranker: web::Data<Ranker>,
    req: web::Json<SimilarRequest>,
) -> ActixResult<HttpResponse> {
    let food_id = req.into_inner().food_id;

    // Source-food lookup is a boundary condition, not an engine error
    let source = match store.require(&food_id) {
        Ok(food) => food,
        Err(e) => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    let candidates = store.candidates(&source.owner_id, &source.id);
    let similar_foods = ranker.rank(&source, &candidates);

    info!(
        food = %source.id,
        candidates = candidates.len(),
        suggestions = similar_foods.len(),
        "ranked similar foods"
    );

    Ok(HttpResponse::Ok().json(SimilarResponse {
        food_id,
        similar_foods,
    }))
}
