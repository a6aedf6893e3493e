//! Endpoint handlers.
//!
//! | Method | Path        | Body                                    |
//! |--------|-------------|-----------------------------------------|
//! | POST   | `/calcular` | `{tipoAccion, fechaInicial?}`           |
//! | GET    | `/tipos`    | none                                    |
//! | GET    | `/health`   | none                                    |
//!
//! `OPTIONS` on any path answers the CORS preflight.

use super::{Request, Response};
use serde_json::{json, Value};
use tp_rules::{Dispatcher, Outcome};
use tp_time::{Calendar, HolidayTable};
use tracing::{debug, error, instrument, warn};

/// Text of the `message` field of `/health`.
pub const HEALTH_MESSAGE: &str = "Servidor de términos procesales activo";

/// Answer `request`.
#[instrument(skip_all, fields(method = %request.method, path = %request.path))]
pub fn route<C: Calendar>(request: &Request, dispatcher: &Dispatcher<C>) -> Response {
    if request.method == "OPTIONS" {
        return Response::no_content();
    }
    let allowed = match request.path.as_str() {
        "/calcular" => "POST",
        "/tipos" | "/health" => "GET",
        _ => return Response::error(404, "Ruta no encontrada"),
    };
    if request.method != allowed {
        return Response::error(405, "Método no permitido").with_header("Allow", allowed);
    }
    match request.path.as_str() {
        "/calcular" => calcular(&request.body, dispatcher),
        "/tipos" => Response::json(200, &json!({ "tiposAcciones": dispatcher.tipos() })),
        _ => Response::json(
            200,
            &json!({
                "status": "ok",
                "message": HEALTH_MESSAGE,
                "version": env!("CARGO_PKG_VERSION"),
            }),
        ),
    }
}

fn calcular<C: Calendar>(body: &[u8], dispatcher: &Dispatcher<C>) -> Response {
    let payload: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Default::default())
    } else {
        match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(e) => {
                debug!(error = %e, "rejecting unparsable body");
                return Response::json(
                    400,
                    &json!({ "error": "JSON inválido en la petición", "detalle": e.to_string() }),
                );
            }
        }
    };
    if !(payload.is_object() || payload.is_array()) {
        debug!(body = %payload, "rejecting non-container body");
        return Response::json(
            400,
            &json!({
                "error": "JSON inválido en la petición",
                "detalle": "el cuerpo debe ser un objeto o un arreglo JSON",
            }),
        );
    }

    let tipo = match payload.get("tipoAccion") {
        Some(Value::String(s)) if !s.is_empty() => s.as_str(),
        None | Some(Value::Null) | Some(Value::Bool(false)) | Some(Value::String(_)) => {
            return missing_tipo();
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => return missing_tipo(),
        Some(other) => {
            error!(tipo_accion = %other, "tipoAccion is not a string");
            return Response::error(
                500,
                "Error al procesar la consulta: tipoAccion debe ser una cadena de texto",
            );
        }
    };
    let fecha = payload.get("fechaInicial").and_then(Value::as_str);

    match dispatcher.calcular_terminos(tipo, fecha) {
        Ok(outcome) => {
            match &outcome {
                Outcome::Terms(terms) => {
                    let table = HolidayTable::get();
                    if let Some(m) = terms.milestones.iter().find(|m| !table.covers(m.date.year())) {
                        warn!(
                            calendar = dispatcher.calendar().name(),
                            tipo = %terms.tipo,
                            field = m.name,
                            date = %m.date,
                            "date outside the holiday table; only weekends are skipped"
                        );
                    }
                    debug!(tipo = %terms.tipo, "terms computed");
                }
                Outcome::Unrecognized(_) => debug!(tipo, "unrecognized action type"),
            }
            Response::json(200, &outcome)
        }
        Err(e) => {
            error!(tipo, fecha = ?fecha, error = %e, "calculation failed");
            Response::error(500, format!("Error al procesar la consulta: {e}"))
        }
    }
}

fn missing_tipo() -> Response {
    Response::json(
        400,
        &json!({ "error": "Debe especificar un tipo de acción", "campo": "tipoAccion" }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_time::{Clock, Date};

    fn dispatcher() -> Dispatcher {
        Dispatcher::new().with_clock(Clock::Fixed(Date::from_ymd(2025, 1, 2).unwrap()))
    }

    fn post(body: &str) -> Response {
        route(&Request::new("POST", "/calcular", body), &dispatcher())
    }

    #[test]
    fn falsy_tipo_accion_is_a_missing_field() {
        for body in [
            "{}",
            "",
            "  ",
            "[]",
            r#"{"tipoAccion": null}"#,
            r#"{"tipoAccion": ""}"#,
            r#"{"tipoAccion": false}"#,
            r#"{"tipoAccion": 0}"#,
            r#"{"tipoAccion": 0.0}"#,
        ] {
            let r = post(body);
            assert_eq!(r.status, 400, "{body}");
            assert_eq!(r.json_body().unwrap()["campo"], "tipoAccion", "{body}");
        }
    }

    #[test]
    fn scalar_bodies_are_invalid_json() {
        for body in ["null", "5", "\"PETICION\"", "true", " false "] {
            let r = post(body);
            assert_eq!(r.status, 400, "{body}");
            let value = r.json_body().unwrap();
            assert_eq!(value["error"], "JSON inválido en la petición", "{body}");
            assert!(value["detalle"].is_string(), "{body}");
            assert!(value.get("campo").is_none(), "{body}");
        }
    }

    #[test]
    fn non_string_tipo_accion_is_an_internal_error() {
        for body in [r#"{"tipoAccion": 7}"#, r#"{"tipoAccion": true}"#, r#"{"tipoAccion": ["A"]}"#] {
            let r = post(body);
            assert_eq!(r.status, 500, "{body}");
            let msg = r.json_body().unwrap()["error"].as_str().unwrap().to_string();
            assert!(msg.starts_with("Error al procesar la consulta: "), "{msg}");
        }
    }

    #[test]
    fn non_string_fecha_is_ignored() {
        let with_number = post(r#"{"tipoAccion": "PETICION", "fechaInicial": 20250102}"#);
        let without = post(r#"{"tipoAccion": "PETICION"}"#);
        assert_eq!(with_number.status, 200);
        assert_eq!(with_number.body, without.body);
    }

    #[test]
    fn far_future_year_is_computed() {
        let r = post(r#"{"tipoAccion": "PETICION", "fechaInicial": "2500-06-01"}"#);
        assert_eq!(r.status, 200);
        let body = r.json_body().unwrap();
        assert_eq!(body["fechaLimiteRespuesta"], "2500-06-21");
        assert_eq!(body["fechaReconocimientoSilencio"], "2500-06-24");
    }

    #[test]
    fn deadline_beyond_9999_is_500() {
        let r = post(r#"{"tipoAccion": "PETICION", "fechaInicial": "9999-12-31"}"#);
        assert_eq!(r.status, 500);
    }

    #[test]
    fn wrong_method_names_the_allowed_one() {
        let r = route(&Request::new("GET", "/calcular", ""), &dispatcher());
        assert_eq!(r.status, 405);
        assert_eq!(r.headers, vec![("Allow", "POST".to_string())]);
    }
}
