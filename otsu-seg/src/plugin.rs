//! Widget registration
//!
//! The host discovers widgets through a [`PluginRegistry`] keyed by a
//! `"<plugin>.<widget>"` identifier.

use crate::layer::{ImageLayer, LayerDataTuple};
use crate::widget::{SegmentationError, SegmentationResult, otsu_seg_widget};
use thiserror::Error;

/// Identifier of the Otsu segmentation widget
pub const OTSU_SEG_WIDGET_ID: &str = "napari-otsu.otsu_seg_widget";

/// Signature shared by all registered widgets
pub type WidgetFn = fn(&ImageLayer) -> SegmentationResult<LayerDataTuple>;

/// Errors from widget lookup and invocation
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("unknown widget: {0}")]
    UnknownWidget(String),

    #[error("widget already registered: {0}")]
    DuplicateWidget(String),

    #[error("widget failed: {0}")]
    Segmentation(#[from] SegmentationError),
}

/// Result type for registry operations
pub type PluginResult<T> = Result<T, PluginError>;

/// How a widget is presented to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor {
    /// Unique identifier
    pub id: String,
    /// Menu label
    pub display_name: String,
}

impl WidgetDescriptor {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Registered widgets in registration order
#[derive(Debug, Default)]
pub struct PluginRegistry {
    entries: Vec<(WidgetDescriptor, WidgetFn)>,
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the widgets this crate provides
    pub fn with_default_widgets() -> Self {
        Self {
            entries: vec![(
                WidgetDescriptor::new(OTSU_SEG_WIDGET_ID, "Otsu Segmentation"),
                otsu_seg_widget as WidgetFn,
            )],
        }
    }

    /// Add a widget
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::DuplicateWidget`] if the id is taken.
    pub fn register(&mut self, descriptor: WidgetDescriptor, widget: WidgetFn) -> PluginResult<()> {
        if self.get(&descriptor.id).is_some() {
            return Err(PluginError::DuplicateWidget(descriptor.id));
        }
        log::debug!("registered widget '{}'", descriptor.id);
        self.entries.push((descriptor, widget));
        Ok(())
    }

    /// Look up a widget by id
    pub fn get(&self, id: &str) -> Option<WidgetFn> {
        self.entries
            .iter()
            .find(|(d, _)| d.id == id)
            .map(|&(_, widget)| widget)
    }

    /// Run a widget on a layer
    pub fn invoke(&self, id: &str, layer: &ImageLayer) -> PluginResult<LayerDataTuple> {
        let widget = self
            .get(id)
            .ok_or_else(|| PluginError::UnknownWidget(id.to_string()))?;
        Ok(widget(layer)?)
    }

    /// Descriptors of all registered widgets
    pub fn descriptors(&self) -> impl Iterator<Item = &WidgetDescriptor> {
        self.entries.iter().map(|(d, _)| d)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
