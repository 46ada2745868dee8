use super::{DynMapper, ProviderMapper, UnificationError};
use fxhash::{FxHashMap, FxHashSet};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uhub_domain::objects::ObjectType;

/// A mapper together with the key it is registered under.
#[derive(Clone)]
pub struct MapperRegistration {
    pub object_type: ObjectType,
    pub provider: String,
    pub mapper: Arc<dyn DynMapper>,
}

impl MapperRegistration {
    /// Registers `mapper` under its own object type and provider name.
    pub fn new<M: ProviderMapper>(mapper: M) -> Self {
        Self {
            object_type: M::OBJECT_TYPE,
            provider: normalize(M::PROVIDER).into_owned(),
            mapper: Arc::new(mapper),
        }
    }

    /// Registers a type-erased mapper under an explicit provider name.
    pub fn with_provider(provider: &str, mapper: Arc<dyn DynMapper>) -> Self {
        Self { object_type: mapper.object_type(), provider: normalize(provider).into_owned(), mapper }
    }
}

impl fmt::Debug for MapperRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperRegistration")
            .field("object_type", &self.object_type)
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

/// Immutable lookup table from `(object type, provider)` to mapper.
///
/// Built once at startup by [`MappingRegistryBuilder`]; reads need no synchronization.
#[derive(Default)]
pub struct MappingRegistry {
    mappers: FxHashMap<ObjectType, FxHashMap<String, Arc<dyn DynMapper>>>,
}

impl MappingRegistry {
    #[must_use]
    pub fn builder() -> MappingRegistryBuilder {
        MappingRegistryBuilder::default()
    }

    /// Returns the mapper registered for the pair. Provider names are matched case-insensitively.
    ///
    /// # Errors
    /// [`UnificationError::UnsupportedMapping`] when nothing is registered for the pair.
    pub fn resolve(
        &self,
        object_type: ObjectType,
        provider: &str,
    ) -> Result<&dyn DynMapper, UnificationError> {
        let key = normalize(provider);
        self.mappers
            .get(&object_type)
            .and_then(|providers| providers.get(key.as_ref()))
            .map(Arc::as_ref)
            .ok_or_else(|| {
                debug!(%object_type, provider = %key, "No mapper registered");
                UnificationError::UnsupportedMapping {
                    object_type,
                    provider: key.into_owned(),
                    context: None,
                }
            })
    }

    #[must_use]
    pub fn contains(&self, object_type: ObjectType, provider: &str) -> bool {
        self.resolve(object_type, provider).is_ok()
    }

    /// Providers able to map `object_type`, sorted by name.
    #[must_use]
    pub fn providers(&self, object_type: ObjectType) -> Vec<&str> {
        let mut providers: Vec<&str> = self
            .mappers
            .get(&object_type)
            .map(|providers| providers.keys().map(String::as_str).collect())
            .unwrap_or_default();
        providers.sort_unstable();
        providers
    }

    /// Every registered pair, sorted by object type then provider.
    #[must_use]
    pub fn entries(&self) -> Vec<(ObjectType, &str)> {
        let mut entries: Vec<(ObjectType, &str)> = self
            .mappers
            .iter()
            .flat_map(|(object_type, providers)| {
                providers.keys().map(move |provider| (*object_type, provider.as_str()))
            })
            .collect();
        entries.sort_unstable();
        entries
    }

    /// Number of registered mappers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappers.values().map(FxHashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for MappingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingRegistry").field("entries", &self.entries()).finish()
    }
}

/// Collects registrations and freezes them into a [`MappingRegistry`].
///
/// Registering a pair twice keeps the last mapper and logs a warning.
#[derive(Default)]
pub struct MappingRegistryBuilder {
    mappers: FxHashMap<ObjectType, FxHashMap<String, Arc<dyn DynMapper>>>,
    disabled: FxHashSet<String>,
}

impl MappingRegistryBuilder {
    #[must_use]
    pub fn register(mut self, registration: MapperRegistration) -> Self {
        let MapperRegistration { object_type, provider, mapper } = registration;
        let providers = self.mappers.entry(object_type).or_default();

        if providers.insert(provider.clone(), mapper).is_some() {
            warn!(%object_type, %provider, "Duplicate mapper registration, keeping the last one");
        }
        self
    }

    /// Registers multiple mappers at once.
    #[must_use]
    pub fn register_many<I>(self, registrations: I) -> Self
    where
        I: IntoIterator<Item = MapperRegistration>,
    {
        registrations.into_iter().fold(self, Self::register)
    }

    #[must_use]
    pub fn mapper<M: ProviderMapper>(self, mapper: M) -> Self {
        self.register(MapperRegistration::new(mapper))
    }

    /// Providers left out of the built registry, whenever they were registered.
    #[must_use]
    pub fn disable_providers<I, S>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.disabled.extend(providers.into_iter().map(|p| normalize(p.as_ref()).into_owned()));
        self
    }

    #[must_use]
    pub fn build(mut self) -> MappingRegistry {
        if !self.disabled.is_empty() {
            for (object_type, providers) in &mut self.mappers {
                providers.retain(|provider, _| {
                    let keep = !self.disabled.contains(provider);
                    if !keep {
                        info!(%object_type, %provider, "Provider disabled, mapper skipped");
                    }
                    keep
                });
            }
            self.mappers.retain(|_, providers| !providers.is_empty());
        }

        let registry = MappingRegistry { mappers: self.mappers };
        info!(mappers = registry.len(), object_types = registry.mappers.len(), "Mapping registry built");
        registry
    }
}

impl fmt::Debug for MappingRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingRegistryBuilder")
            .field("object_types", &self.mappers.len())
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

fn normalize(provider: &str) -> Cow<'_, str> {
    let trimmed = provider.trim();
    if trimmed.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(trimmed.to_ascii_lowercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}
