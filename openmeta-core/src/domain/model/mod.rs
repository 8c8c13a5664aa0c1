// openmeta-core/src/domain/model/mod.rs

pub mod common;
pub mod connection;
pub mod glossary;
pub mod infrastructure;
pub mod lineage;
pub mod metadata;
pub mod stewardship;

pub use common::{
    ElementHeader, ElementStub, Properties, RelatedElement, RelationshipHeader,
    TemplateProperties,
};
