use serde::Serialize;

/// Key of the "about us" text in the `configuracion` table.
pub const HISTORIA_KEY: &str = "historia";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ConfigEntry {
    pub clave: String,
    pub valor: String,
}
