//! Brand logo asset discovery: query the SVGL and Simple Icons catalogs,
//! score candidates against the requested brand name, and check SVG metadata.

pub mod catalogs;
pub mod links;
pub mod models;
pub mod report;
pub mod score;
pub mod svg;
