pub mod pack_json;

pub use pack_json::{build_pack, build_pack_json, PackRequest, SCHEMA_VERSION};
