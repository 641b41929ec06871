//! HTTP handler functions for the complaint map API.

use actix_web::{HttpResponse, web};
use complaint_map_complaint_models::{
    COMPLAINT_ZOOM, DEFAULT_INTENSITY, DEFAULT_LAT, DEFAULT_LON, DEFAULT_ZOOM, IssueCategory,
};
use complaint_map_database::queries;
use complaint_map_server_models::{
    ApiAqiResponse, ApiAqiStation, ApiCategory, ApiCityAqi, ApiClassification, ApiComplaint,
    ApiHealth, ApiMapConfig, ApiMapView, ApiSolution, ClassifyQueryParams, SolutionQueryParams,
};
use complaint_map_solutions::{Solution, classify, latest_complaint};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/config`
///
/// Initial map views and the air quality source caption.
pub async fn config(state: web::Data<AppState>) -> HttpResponse {
    let center = state.waqi.center;
    HttpResponse::Ok().json(ApiMapConfig {
        complaint_map: ApiMapView {
            lat: DEFAULT_LAT,
            lon: DEFAULT_LON,
            zoom: DEFAULT_ZOOM,
        },
        aqi_map: ApiMapView {
            lat: center.lat,
            lon: center.lon,
            zoom: center.zoom,
        },
        aqi_source: state.waqi.name.clone(),
    })
}

/// `GET /api/categories`
///
/// Returns the category legend.
pub async fn categories() -> HttpResponse {
    let legend: Vec<ApiCategory> = IssueCategory::all()
        .iter()
        .copied()
        .map(ApiCategory::from)
        .collect();

    HttpResponse::Ok().json(legend)
}

/// `GET /api/complaints`
///
/// All complaints with their derived category and suggested action. The
/// most recent one is flagged for highlighting.
pub async fn complaints(state: web::Data<AppState>) -> HttpResponse {
    match queries::load_complaints(state.db.as_ref()).await {
        Ok(records) => {
            let latest_id = latest_complaint(&records).map(|r| r.id);
            let api_complaints: Vec<ApiComplaint> = records
                .iter()
                .map(|r| ApiComplaint::new(r, Some(r.id) == latest_id))
                .collect();
            HttpResponse::Ok().json(api_complaints)
        }
        Err(e) => {
            log::error!("Failed to load complaints: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to load complaints"
            }))
        }
    }
}

/// `GET /api/solutions/latest`
///
/// Suggested solution for the most recently reported complaint.
pub async fn latest_solution(state: web::Data<AppState>) -> HttpResponse {
    let records = match queries::load_complaints(state.db.as_ref()).await {
        Ok(records) => records,
        Err(e) => {
            log::error!("Failed to load complaints: {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to load complaints"
            }));
        }
    };

    let Some(latest) = latest_complaint(&records) else {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": "No complaint data available."
        }));
    };

    let mut solution = ApiSolution::from(Solution::for_complaint(latest));
    solution.complaint = Some(ApiComplaint::new(latest, true));

    HttpResponse::Ok().json(serde_json::json!({
        "solution": solution,
        "map": ApiMapView {
            lat: latest.lat,
            lon: latest.lon,
            zoom: COMPLAINT_ZOOM,
        },
    }))
}

/// `GET /api/solutions`
///
/// Suggested solution for an arbitrary category label and intensity.
pub async fn solution(params: web::Query<SolutionQueryParams>) -> HttpResponse {
    let category = params
        .category
        .as_deref()
        .map_or(IssueCategory::Other, IssueCategory::from_label);
    let intensity = params.intensity.unwrap_or(DEFAULT_INTENSITY);

    HttpResponse::Ok().json(ApiSolution::from(Solution::new(category, intensity)))
}

/// `GET /api/classify`
pub async fn classify_text(params: web::Query<ClassifyQueryParams>) -> HttpResponse {
    let category = classify(params.text.as_deref());

    HttpResponse::Ok().json(ApiClassification {
        text: params.text.clone(),
        category,
        color: category.color(),
    })
}

/// `GET /api/aqi`
///
/// City-wide AQI, all stations, the side list, and heat-layer points.
pub async fn aqi(state: web::Data<AppState>) -> HttpResponse {
    let Some(token) = state.waqi_token.as_deref() else {
        log::warn!("AQI requested but no WAQI token is configured");
        return HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "error": "Air quality data is not configured"
        }));
    };

    let stations = match state
        .stations
        .get_or_fetch(&state.http, &state.waqi, token)
        .await
    {
        Ok(stations) => stations,
        Err(e) => {
            log::error!("Failed to fetch AQI stations: {e}");
            return HttpResponse::BadGateway().json(serde_json::json!({
                "error": e.to_string()
            }));
        }
    };

    let reading = complaint_map_aqi::summarize(&stations, &state.last_aqi, chrono::Utc::now());

    HttpResponse::Ok().json(ApiAqiResponse {
        city: ApiCityAqi::new(reading, stations.len()),
        stations: stations.iter().map(ApiAqiStation::from).collect(),
        listed: complaint_map_aqi::listed_stations(&stations)
            .iter()
            .map(ApiAqiStation::from)
            .collect(),
        heat_points: complaint_map_aqi::heat_points(&stations),
        source: state.waqi.name.clone(),
        warning: stations
            .is_empty()
            .then_some("No stations returned by API."),
    })
}

/// `POST /api/aqi/refresh`
///
/// Drops the cached station list so the next `GET /api/aqi` refetches.
pub async fn aqi_refresh(state: web::Data<AppState>) -> HttpResponse {
    state.stations.clear();
    log::info!("AQI station cache cleared");
    HttpResponse::Ok().json(serde_json::json!({ "cleared": true }))
}

/// `GET /api/about`
pub async fn about() -> HttpResponse {
    HttpResponse::Ok().json(crate::about::sections())
}
