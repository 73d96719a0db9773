/// Export backends — false-colour PNG previews and a JSON dump of every field.
pub mod json;
pub mod png;

pub use json::export_json;
pub use png::export_pngs;
