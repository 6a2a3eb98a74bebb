//! Label template abstraction.
//!
//! A template describes the physical label stock a document is laid out on.
//! Documents only need its size, so they depend on [`TemplateProvider`];
//! [`Template`] is the plain-data implementation used by configuration and
//! tests. Catalog loading (vendors, papers, XML definitions) lives outside
//! this crate.

use serde::{Deserialize, Serialize};

use crate::units::{Distance, Units};

/// Size source for a label document.
///
/// All lengths are in points.
pub trait TemplateProvider: std::fmt::Debug + Send + Sync {
    /// Human readable part name, e.g. `"Avery 5160"`.
    fn name(&self) -> &str;

    /// Label width in points.
    fn width(&self) -> f64;

    /// Label height in points.
    fn height(&self) -> f64;
}

/// A single rectangular label size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl Template {
    /// Creates a template from point dimensions.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// Creates a template from dimensions given in `units`.
    pub fn with_units(name: impl Into<String>, width: f64, height: f64, units: Units) -> Self {
        Self::new(
            name,
            Distance::new(width, units).to_pt(),
            Distance::new(height, units).to_pt(),
        )
    }
}

impl TemplateProvider for Template {
    fn name(&self) -> &str {
        &self.name
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}
