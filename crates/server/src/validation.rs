//! Request-body validation, run before any manager is called.
//!
//! Bodies arrive as loose JSON so that every bad field can be reported at
//! once instead of stopping at the first serde error.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use service::domain::{CiudadInput, SupermercadoInput};

/// One rejected body field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

struct Fields<'a> {
    obj: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> Fields<'a> {
    fn of(body: &'a Value) -> Result<Self, Vec<FieldError>> {
        match body.as_object() {
            Some(obj) => Ok(Self { obj, errors: Vec::new() }),
            None => Err(vec![FieldError::new("body", "body must be a JSON object")]),
        }
    }

    fn string(&mut self, field: &str) -> String {
        match self.obj.get(field).and_then(Value::as_str) {
            Some(s) if !s.trim().is_empty() => s.to_string(),
            _ => {
                self.errors.push(FieldError::new(field, format!("{field} must be a non-empty string")));
                String::new()
            }
        }
    }

    fn number(&mut self, field: &str) -> f64 {
        match self.obj.get(field).and_then(Value::as_f64) {
            Some(n) => n,
            None => {
                self.errors.push(FieldError::new(field, format!("{field} must be a number")));
                0.0
            }
        }
    }

    fn non_negative_integer(&mut self, field: &str) -> i64 {
        match self.obj.get(field).and_then(Value::as_u64).and_then(|n| i64::try_from(n).ok()) {
            Some(n) => n,
            None => {
                self.errors.push(FieldError::new(field, format!("{field} must be a non-negative integer")));
                0
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, Vec<FieldError>> {
        if self.errors.is_empty() { Ok(value) } else { Err(self.errors) }
    }
}

/// `{"nombre", "pais", "numeroHabitantes"}`. The country whitelist is a
/// business rule and is left to the city manager.
pub fn validate_ciudad_dto(body: &Value) -> Result<CiudadInput, Vec<FieldError>> {
    let mut f = Fields::of(body)?;
    let input = CiudadInput {
        nombre: f.string("nombre"),
        pais: f.string("pais"),
        numero_habitantes: f.non_negative_integer("numeroHabitantes"),
    };
    f.finish(input)
}

/// `{"nombre", "longitud", "latitud", "paginaWeb"}`. The name-length rule
/// belongs to the supermarket manager.
pub fn validate_supermercado_dto(body: &Value) -> Result<SupermercadoInput, Vec<FieldError>> {
    let mut f = Fields::of(body)?;
    let input = SupermercadoInput {
        nombre: f.string("nombre"),
        longitud: f.number("longitud"),
        latitud: f.number("latitud"),
        pagina_web: f.string("paginaWeb"),
    };
    f.finish(input)
}

/// `[{"id": "..."}, ...]`, the body of the replace-all association call.
/// Returns the raw ids; resolving them is up to the caller.
pub fn validate_supermercado_refs(body: &Value) -> Result<Vec<String>, Vec<FieldError>> {
    let Some(items) = body.as_array() else {
        return Err(vec![FieldError::new("body", "body must be an array of supermarkets")]);
    };
    let mut ids = Vec::with_capacity(items.len());
    let mut errors = Vec::new();
    for (i, item) in items.iter().enumerate() {
        match item.get("id").and_then(Value::as_str) {
            Some(id) if !id.trim().is_empty() => ids.push(id.to_string()),
            _ => errors.push(FieldError::new(format!("[{i}].id"), "each supermarket needs a string id")),
        }
    }
    if errors.is_empty() { Ok(ids) } else { Err(errors) }
}
