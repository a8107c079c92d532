//! Pluggable event detection.
//!
//! An [`EventRegistry`] holds [`EventDetector`]s and evaluates all of them
//! against one day's [`EventContext`]. A failing detector is logged and
//! skipped; it never fails the day.

pub mod builtin;

use std::collections::BTreeMap;
use std::sync::Arc;

use jyotish_base::{Chart, Panchang};
use serde::Serialize;
use tracing::warn;

use crate::error::EventError;
use crate::natal::NatalContext;

pub use builtin::{
    AmavasyaDetector, AmritaSiddhiDetector, GhatakaChakraDetector, GuruPushyaDetector,
    RaviPushyaDetector, RiktaTithiDetector, VishtiKaranaDetector,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Auspicious,
    Inauspicious,
}

/// Outcome of one detector for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedEvent {
    pub name: String,
    pub occurring: bool,
    /// Non-negative; the category decides the sign of its effect.
    pub strength: f64,
    pub category: EventCategory,
    pub description: String,
}

impl DetectedEvent {
    pub fn new(name: &str, category: EventCategory, occurring: bool, strength: f64) -> Self {
        Self {
            name: name.to_string(),
            occurring,
            strength: if occurring { strength.max(0.0) } else { 0.0 },
            category,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Everything a detector may look at for one day.
#[derive(Debug, Clone, Copy)]
pub struct EventContext<'a> {
    pub natal: &'a NatalContext,
    pub chart: &'a Chart,
    /// Limbs of the day; `panchang.vaar` is the local civil weekday.
    pub panchang: &'a Panchang,
}

pub trait EventDetector: Send + Sync {
    fn name(&self) -> &str;

    fn detect(&self, ctx: &EventContext<'_>) -> Result<DetectedEvent, EventError>;
}

/// Ordered set of detectors.
#[derive(Clone, Default)]
pub struct EventRegistry {
    detectors: Vec<Arc<dyn EventDetector>>,
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.detectors.iter().map(|d| d.name().to_string()))
            .finish()
    }
}

impl EventRegistry {
    /// An empty registry: no events, no ghataka penalty, no muhurta bonus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in detectors.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(GhatakaChakraDetector);
        registry.register(VishtiKaranaDetector);
        registry.register(RiktaTithiDetector);
        registry.register(AmavasyaDetector);
        registry.register(AmritaSiddhiDetector);
        registry.register(GuruPushyaDetector);
        registry.register(RaviPushyaDetector);
        registry
    }

    pub fn register<D: EventDetector + 'static>(&mut self, detector: D) -> &mut Self {
        self.detectors.push(Arc::new(detector));
        self
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    /// Evaluate every detector in registration order.
    pub fn evaluate(&self, ctx: &EventContext<'_>) -> Vec<DetectedEvent> {
        self.detectors
            .iter()
            .filter_map(|detector| match detector.detect(ctx) {
                Ok(event) => Some(event),
                Err(e) => {
                    warn!(detector = detector.name(), error = %e, "event detector skipped");
                    None
                }
            })
            .collect()
    }

    /// Every detector's outcome keyed by event name.
    pub fn detect_all(&self, ctx: &EventContext<'_>) -> BTreeMap<String, DetectedEvent> {
        self.evaluate(ctx)
            .into_iter()
            .map(|e| (e.name.clone(), e))
            .collect()
    }

    /// Occurring events only, in registration order.
    pub fn occurring(&self, ctx: &EventContext<'_>) -> Vec<DetectedEvent> {
        self.evaluate(ctx).into_iter().filter(|e| e.occurring).collect()
    }
}
