//! Type registry: cached single and batch loads of type documents.
//!
//! The registry is wired once with a `ContentSource` and two cache tiers,
//! one for raw markdown and one for validated records. Both tiers are
//! injected so hosts can swap in their own storage.
//!
//! # Example
//!
//! ```ignore
//! use ennea::registry::{DirectorySource, TypeRegistry};
//!
//! let registry = TypeRegistry::builder(DirectorySource::new("content/types")).build();
//! let nine = registry.get("9".parse()?)?;
//!
//! let report = registry.get_all();
//! println!("{} loaded, {} failed", report.records.len(), report.failures.len());
//! ```

mod cache;
mod source;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::thread;

use crate::error::{ContentError, Result};
use crate::parser::parse_type_document;
use crate::types::{TypeDigit, TypeRecord};
use crate::validation::ValidationResult;

pub use cache::{Cache, MemoryCache};
pub use source::{ContentSource, DirectorySource, MemorySource, DEFAULT_PATTERN, DIGIT_PLACEHOLDER};

/// A validated record together with the warnings raised while parsing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub record: Arc<TypeRecord>,
    pub warnings: ValidationResult,
}

/// Outcome of loading several types at once.
///
/// One failing document never prevents the others from loading.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub records: BTreeMap<TypeDigit, Arc<TypeRecord>>,
    pub failures: BTreeMap<TypeDigit, ContentError>,
    pub warnings: ValidationResult,
}

impl BatchReport {
    /// True when every requested type loaded.
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of types attempted.
    pub fn attempted(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Cached access to the nine type records.
pub struct TypeRegistry {
    source: Box<dyn ContentSource>,
    raw: Box<dyn Cache<Arc<str>>>,
    records: Box<dyn Cache<Loaded>>,
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry").finish_non_exhaustive()
    }
}

impl TypeRegistry {
    /// Start wiring a registry over `source`.
    pub fn builder(source: impl ContentSource + 'static) -> RegistryBuilder {
        RegistryBuilder {
            source: Box::new(source),
            raw: None,
            records: None,
        }
    }

    /// Registry over `source` with in-memory caches.
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self::builder(source).build()
    }

    /// The validated record for `digit`.
    pub fn get(&self, digit: TypeDigit) -> Result<Arc<TypeRecord>> {
        self.load(digit).map(|loaded| loaded.record)
    }

    /// The validated record for `digit` and its parse warnings.
    ///
    /// Only successful parses are cached; a failing document is fetched
    /// from the raw tier and parsed again on the next call.
    pub fn load(&self, digit: TypeDigit) -> Result<Loaded> {
        if let Some(loaded) = self.records.get(digit) {
            return Ok(loaded);
        }

        let raw = self.raw(digit)?;
        let parsed = parse_type_document(digit, &raw)?;
        let loaded = Loaded {
            record: Arc::new(parsed.record),
            warnings: parsed.warnings,
        };

        self.records.set(digit, loaded.clone());
        tracing::info!(%digit, warnings = loaded.warnings.len(), "cached type record");

        // A racing load may have filled the slot first; hand back the winner.
        Ok(self.records.get(digit).unwrap_or(loaded))
    }

    fn raw(&self, digit: TypeDigit) -> Result<Arc<str>> {
        if let Some(raw) = self.raw.get(digit) {
            return Ok(raw);
        }
        let raw: Arc<str> = self.source.fetch(digit)?.into();
        self.raw.set(digit, Arc::clone(&raw));
        tracing::debug!(%digit, bytes = raw.len(), "cached raw document");
        Ok(self.raw.get(digit).unwrap_or(raw))
    }

    /// Load all nine types.
    pub fn get_all(&self) -> BatchReport {
        self.load_many(TypeDigit::all())
    }

    /// Load several types concurrently, collecting failures per digit.
    pub fn load_many(&self, digits: impl IntoIterator<Item = TypeDigit>) -> BatchReport {
        let digits: BTreeSet<TypeDigit> = digits.into_iter().collect();

        let outcomes: Vec<(TypeDigit, Result<Loaded>)> = thread::scope(|scope| {
            let handles: Vec<_> = digits
                .iter()
                .map(|&digit| (digit, scope.spawn(move || self.load(digit))))
                .collect();

            handles
                .into_iter()
                .map(|(digit, handle)| {
                    let outcome = handle.join().unwrap_or_else(|_| {
                        Err(ContentError::MalformedDocument {
                            digit,
                            message: "loader thread panicked".to_string(),
                            cause: None,
                        })
                    });
                    (digit, outcome)
                })
                .collect()
        });

        let mut report = BatchReport::default();
        for (digit, outcome) in outcomes {
            match outcome {
                Ok(loaded) => {
                    report.warnings.merge(loaded.warnings);
                    report.records.insert(digit, loaded.record);
                }
                Err(err) => {
                    tracing::error!(%digit, error = %err, "type failed to load");
                    report.failures.insert(digit, err);
                }
            }
        }

        tracing::info!(
            loaded = report.records.len(),
            failed = report.failures.len(),
            "batch load finished"
        );
        report
    }

    /// Drop both cache tiers for `digit`.
    pub fn invalidate(&self, digit: TypeDigit) {
        self.raw.invalidate(digit);
        self.records.invalidate(digit);
        tracing::info!(%digit, "invalidated cached type");
    }

    /// Drop every cached document and record.
    pub fn clear(&self) {
        self.raw.clear();
        self.records.clear();
        tracing::info!("cleared type cache");
    }
}

/// Builder for wiring a `TypeRegistry` with custom cache tiers.
pub struct RegistryBuilder {
    source: Box<dyn ContentSource>,
    raw: Option<Box<dyn Cache<Arc<str>>>>,
    records: Option<Box<dyn Cache<Loaded>>>,
}

impl RegistryBuilder {
    /// Cache tier for raw markdown.
    pub fn raw_cache(mut self, cache: impl Cache<Arc<str>> + 'static) -> Self {
        self.raw = Some(Box::new(cache));
        self
    }

    /// Cache tier for validated records.
    pub fn record_cache(mut self, cache: impl Cache<Loaded> + 'static) -> Self {
        self.records = Some(Box::new(cache));
        self
    }

    pub fn build(self) -> TypeRegistry {
        TypeRegistry {
            source: self.source,
            raw: self.raw.unwrap_or_else(|| Box::new(MemoryCache::new())),
            records: self.records.unwrap_or_else(|| Box::new(MemoryCache::new())),
        }
    }
}
