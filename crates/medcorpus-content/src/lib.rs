//! Built-in medical education content.
//!
//! Each leaf module builds typed records; [`index`] gathers them into the
//! content registry and [`obgyn`] carries the OB/GYN conditions database.

pub mod conditions;
pub mod embryology;
pub mod index;
pub mod lab_interpretation;
pub mod legal;
pub mod obgyn;
pub mod physiology;

pub use index::{
    build_registry, get_content_by_id, get_content_by_keyword, get_content_by_system, get_content_by_type,
    get_content_count, get_legacy_content_by_id, search_content, CONTENT_REGISTRY, LEGACY_CONTENT_REGISTRY,
};
pub use obgyn::{
    get_obgyn_by_category, get_obgyn_by_risk_factor, get_obgyn_condition_by_id, get_obgyn_condition_count,
    search_obgyn_conditions, OBGYNCategory, OBGYNConditionEntry, OBGYN_CATEGORIES, OBGYN_CLINICAL_PRIORITY,
};
