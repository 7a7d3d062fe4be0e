//! Static reference data: species, reference ranges, and parameter groups.
//!
//! Catalogs are immutable lookup tables constructed once at process start
//! and passed by reference into the analyzer. The built-in tables cover the
//! canine and feline hemogram panels; external catalogs can be loaded from
//! JSON and are validated on construction.

pub mod groups;
pub mod reference;
pub mod species;

pub use groups::{GroupCatalog, ParameterGroup};
pub use reference::{ReferenceCatalog, ReferenceRange};
pub use species::Species;
