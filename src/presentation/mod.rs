/// Single-page front end served at `/`. Self-contained: inline style and script.
pub const INDEX_HTML: &str = include_str!("index.html");
