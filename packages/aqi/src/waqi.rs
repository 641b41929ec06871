//! WAQI "map bounds" client.
//!
//! See <https://aqicn.org/json-api/doc/#api-Map_Queries-GetMapStations>

use complaint_map_aqi_models::AqiStation;

use crate::AqiError;
use crate::service::WaqiService;

/// Fetches all stations inside the configured bounding box.
///
/// # Errors
///
/// Returns [`AqiError`] if the request fails, the API reports a non-`ok`
/// status, or the body has an unexpected shape.
pub async fn fetch_stations(
    client: &reqwest::Client,
    service: &WaqiService,
    token: &str,
) -> Result<Vec<AqiStation>, AqiError> {
    let latlng = service.bounds.to_latlng();

    log::debug!("Fetching WAQI stations in {latlng}");

    let resp = client
        .get(service.bounds_url())
        .query(&[("latlng", latlng.as_str()), ("token", token)])
        .timeout(service.timeout())
        .send()
        .await?;

    let body: serde_json::Value = resp.json().await?;
    let stations = parse_response(&body)?;

    log::debug!("WAQI returned {} stations", stations.len());

    Ok(stations)
}

/// Parses a WAQI map-bounds response body.
fn parse_response(body: &serde_json::Value) -> Result<Vec<AqiStation>, AqiError> {
    let status = body["status"].as_str().unwrap_or_default();
    if status != "ok" {
        return Err(AqiError::Api {
            status: status.to_string(),
        });
    }

    let entries = body["data"].as_array().ok_or_else(|| AqiError::Parse {
        message: "WAQI response data is not an array".to_string(),
    })?;

    entries.iter().map(parse_station).collect()
}

fn parse_station(entry: &serde_json::Value) -> Result<AqiStation, AqiError> {
    let lat = entry["lat"].as_f64().ok_or_else(|| AqiError::Parse {
        message: "Missing lat in WAQI station".to_string(),
    })?;

    let lon = entry["lon"].as_f64().ok_or_else(|| AqiError::Parse {
        message: "Missing lon in WAQI station".to_string(),
    })?;

    let name = entry["station"]["name"]
        .as_str()
        .map_or_else(|| format!("{lat},{lon}"), String::from);

    Ok(AqiStation {
        name,
        lat,
        lon,
        aqi: parse_aqi(&entry["aqi"]),
    })
}

/// WAQI reports AQI as a string, `"-"` when the station has no reading.
fn parse_aqi(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::String(s) => s.trim().parse().ok(),
        serde_json::Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        _ => None,
    }
}
